use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapDimension {
    pub width: i32,
    pub height: i32,
}

impl MapDimension {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// True for the direction itself and for its reversal.
    pub fn shares_axis_with(&self, other: &Direction) -> bool {
        self.axis() == other.axis()
    }

    /// Unit step on the grid. The y coordinate grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn from_letter(letter: char) -> Option<Direction> {
        match letter {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellValue {
    Free,
    Snake,
    Food,
}

/// Everything that travels over a port, inbound or outbound.
///
/// The controller accepts only `Tick`, `DirectionChange`, `FoodAnnounce` and `FoodResponse`.
/// The remaining kinds are produced by the controller and rejected when fed back to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Tick,
    DirectionChange { direction: Direction },
    FoodAnnounce { x: i32, y: i32 },
    FoodResponse { x: i32, y: i32 },
    CellUpdate { x: i32, y: i32, value: CellValue },
    FoodRequest,
    ScoreIncrement,
    LossIndication,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::Tick => "Tick",
            Event::DirectionChange { .. } => "DirectionChange",
            Event::FoodAnnounce { .. } => "FoodAnnounce",
            Event::FoodResponse { .. } => "FoodResponse",
            Event::CellUpdate { .. } => "CellUpdate",
            Event::FoodRequest => "FoodRequest",
            Event::ScoreIncrement => "ScoreIncrement",
            Event::LossIndication => "LossIndication",
        }
    }

    pub fn cell(x: i32, y: i32, value: CellValue) -> Self {
        Event::CellUpdate { x, y, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_axis_directions_share_axis() {
        assert!(Direction::Up.shares_axis_with(&Direction::Down));
        assert!(Direction::Up.shares_axis_with(&Direction::Up));
        assert!(Direction::Left.shares_axis_with(&Direction::Right));
        assert!(!Direction::Left.shares_axis_with(&Direction::Up));
        assert!(!Direction::Down.shares_axis_with(&Direction::Right));
    }

    #[test]
    fn test_delta_is_unit_step_along_axis() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
            match direction.axis() {
                Axis::Horizontal => assert_eq!(dy, 0),
                Axis::Vertical => assert_eq!(dx, 0),
            }
        }
    }

    #[test]
    fn test_letters() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_letter(direction.letter()), Some(direction));
        }
        assert_eq!(Direction::from_letter('X'), None);
        assert_eq!(Direction::from_letter('u'), None);
    }

    #[test]
    fn test_map_contains() {
        let map = MapDimension::new(3, 2);
        assert!(map.contains(0, 0));
        assert!(map.contains(2, 1));
        assert!(!map.contains(3, 0));
        assert!(!map.contains(0, 2));
        assert!(!map.contains(-1, 0));
    }
}
