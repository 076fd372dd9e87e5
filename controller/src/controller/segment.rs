use crate::events::Position;

/// One occupied cell of the body. `ttl` counts the ticks left before the cell is vacated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub x: i32,
    pub y: i32,
    pub ttl: i32,
}

impl Segment {
    pub fn new(x: i32, y: i32, ttl: i32) -> Self {
        Self { x, y, ttl }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn is_at(&self, position: Position) -> bool {
        self.x == position.x && self.y == position.y
    }
}
