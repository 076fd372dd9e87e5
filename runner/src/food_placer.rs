use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use snake_controller::{Direction, MapDimension, Position};

use crate::board::Board;

/// Seeded source of every random decision in a session, so runs can be replayed by seed.
pub struct FoodPlacer {
    rng: StdRng,
    seed: u64,
}

impl FoodPlacer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn roll(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }

    pub fn random_cell(&mut self, map: MapDimension) -> Position {
        Position::new(
            self.rng.random_range(0..map.width.max(1)),
            self.rng.random_range(0..map.height.max(1)),
        )
    }

    pub fn random_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.random_range(0..Direction::ALL.len())]
    }

    /// A cell the board currently shows as free, or `None` when the board is full.
    pub fn free_cell(&mut self, board: &Board) -> Option<Position> {
        let free = board.free_cells();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.random_range(0..free.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_controller::CellValue;

    #[test]
    fn test_same_seed_same_choices() {
        let map = MapDimension::new(10, 10);
        let mut a = FoodPlacer::new(7);
        let mut b = FoodPlacer::new(7);
        for _ in 0..20 {
            assert_eq!(a.random_cell(map), b.random_cell(map));
            assert_eq!(a.random_direction(), b.random_direction());
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_random_cell_is_on_map() {
        let map = MapDimension::new(4, 3);
        let mut placer = FoodPlacer::new(1);
        for _ in 0..100 {
            let cell = placer.random_cell(map);
            assert!(map.contains(cell.x, cell.y));
        }
    }

    #[test]
    fn test_free_cell_avoids_snake() {
        let mut board = Board::new(MapDimension::new(2, 1)).unwrap();
        board.apply(0, 0, CellValue::Snake);
        let mut placer = FoodPlacer::new(3);
        for _ in 0..10 {
            assert_eq!(placer.free_cell(&board), Some(Position::new(1, 0)));
        }

        board.apply(1, 0, CellValue::Snake);
        assert_eq!(placer.free_cell(&board), None);
    }

    #[test]
    fn test_roll_extremes() {
        let mut placer = FoodPlacer::new(11);
        assert!(!placer.roll(0.0));
        assert!(placer.roll(1.0));
    }
}
