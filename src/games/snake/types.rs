//! Grid primitives for Snake.

use serde::{Deserialize, Serialize};

/// Heading of the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// One-cell offset in grid units. `y` grows downward.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// One grid cell, in grid units (not pixels).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Top-left pixel of this cell on a surface with `cell_size` blocks.
    #[must_use]
    pub const fn to_pixels(self, cell_size: u32) -> (i64, i64) {
        (self.x as i64 * cell_size as i64, self.y as i64 * cell_size as i64)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        for d in Direction::ALL {
            assert_ne!(d, d.opposite());
            assert_eq!(d, d.opposite().opposite());
        }
    }

    #[test]
    fn test_step() {
        let c = Cell::new(10, 10);
        assert_eq!(c.step(Direction::Up), Cell::new(10, 9));
        assert_eq!(c.step(Direction::Down), Cell::new(10, 11));
        assert_eq!(c.step(Direction::Left), Cell::new(9, 10));
        assert_eq!(c.step(Direction::Right), Cell::new(11, 10));
    }

    #[test]
    fn test_to_pixels() {
        assert_eq!(Cell::new(10, 3).to_pixels(20), (200, 60));
        assert_eq!(format!("{}", Cell::new(1, 2)), "(1, 2)");
    }
}
