use snake_controller::{CellValue, MapDimension, Position};

/// Largest board the runner will mirror.
pub const MAX_BOARD_CELLS: usize = 1 << 20;

/// Number of cells on `map`, or `None` when it exceeds `MAX_BOARD_CELLS`.
pub fn cell_count(map: MapDimension) -> Option<usize> {
    let width = map.width.max(0) as usize;
    let height = map.height.max(0) as usize;
    width
        .checked_mul(height)
        .filter(|&cells| cells <= MAX_BOARD_CELLS)
}

/// Display side of the session: mirrors the cells reported by the controller.
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<CellValue>,
}

impl Board {
    pub fn new(map: MapDimension) -> Result<Self, String> {
        let cells = cell_count(map).ok_or_else(|| {
            format!(
                "Map {}x{} exceeds the {} cell board limit",
                map.width, map.height, MAX_BOARD_CELLS
            )
        })?;
        Ok(Self {
            width: map.width.max(0),
            height: map.height.max(0),
            cells: vec![CellValue::Free; cells],
        })
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Cells outside the board are ignored.
    pub fn apply(&mut self, x: i32, y: i32, value: CellValue) {
        if let Some(index) = self.index(x, y) {
            self.cells[index] = value;
        }
    }

    #[cfg(test)]
    pub fn get(&self, x: i32, y: i32) -> Option<CellValue> {
        self.index(x, y).map(|index| self.cells[index])
    }

    pub fn count(&self, value: CellValue) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    pub fn free_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == CellValue::Free)
            .map(|(index, _)| {
                let index = index as i32;
                Position::new(index % self.width, index / self.width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for row in self.cells.chunks(self.width.max(1) as usize) {
            for cell in row {
                out.push(match cell {
                    CellValue::Free => '.',
                    CellValue::Snake => 'o',
                    CellValue::Food => '*',
                });
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_and_render() {
        let mut board = Board::new(MapDimension::new(3, 2)).unwrap();
        board.apply(0, 0, CellValue::Snake);
        board.apply(2, 1, CellValue::Food);
        board.apply(5, 5, CellValue::Snake);

        assert_eq!(board.render(), "o..\n..*\n");
        assert_eq!(board.count(CellValue::Snake), 1);
        assert_eq!(board.get(2, 1), Some(CellValue::Food));
        assert_eq!(board.get(3, 0), None);
    }

    #[test]
    fn test_free_cells() {
        let mut board = Board::new(MapDimension::new(2, 2)).unwrap();
        board.apply(0, 0, CellValue::Snake);
        board.apply(1, 1, CellValue::Food);
        assert_eq!(board.free_cells(), vec![Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn test_oversized_map_is_rejected() {
        assert!(Board::new(MapDimension::new(50000, 50000)).is_err());
        assert!(Board::new(MapDimension::new(i32::MAX, i32::MAX)).is_err());
        assert_eq!(cell_count(MapDimension::new(1024, 1024)), Some(MAX_BOARD_CELLS));
        assert_eq!(cell_count(MapDimension::new(1025, 1024)), None);
    }

    #[test]
    fn test_negative_dimensions_make_an_empty_board() {
        let board = Board::new(MapDimension::new(-3, 4)).unwrap();
        assert_eq!(board.render(), "");
        assert!(board.free_cells().is_empty());
    }
}
