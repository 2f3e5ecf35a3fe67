//! Snake playfield and pacing parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::Cell;
use crate::core::config::invalid;
use crate::core::Result;

/// Largest playfield side, in cells. Keeps the field drawable in a terminal.
pub const MAX_GRID_CELLS: u32 = 100;

/// Snake configuration.
///
/// Sizes are in pixels of the raster surface; the playfield is
/// `width / cell_size` by `height / cell_size` cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Surface width in pixels (default: 400).
    pub width: u32,

    /// Surface height in pixels (default: 400).
    pub height: u32,

    /// Side of one grid cell in pixels (default: 20).
    pub cell_size: u32,

    /// Starting head position in pixels, cell-aligned (default: 200, 200).
    pub origin: (u32, u32),

    /// Tick interval at the start of a run (default: 150 ms).
    pub initial_interval_ms: u64,

    /// How much faster each eaten food makes the game (default: 5 ms).
    pub interval_step_ms: u64,

    /// Fastest allowed tick interval (default: 50 ms).
    pub min_interval_ms: u64,

    /// Place food only on cells the snake does not occupy (default: true).
    /// With `false`, food may spawn under the body.
    pub food_avoids_body: bool,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            cell_size: 20,
            origin: (200, 200),
            initial_interval_ms: 150,
            interval_step_ms: 5,
            min_interval_ms: 50,
            food_avoids_body: true,
        }
    }
}

impl SnakeConfig {
    /// Set the surface size in pixels.
    #[must_use]
    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the cell size in pixels.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set the starting head position in pixels.
    #[must_use]
    pub fn with_origin(mut self, x: u32, y: u32) -> Self {
        self.origin = (x, y);
        self
    }

    /// Set initial interval, speed-up step and floor, in milliseconds.
    #[must_use]
    pub fn with_intervals(mut self, initial_ms: u64, step_ms: u64, min_ms: u64) -> Self {
        self.initial_interval_ms = initial_ms;
        self.interval_step_ms = step_ms;
        self.min_interval_ms = min_ms;
        self
    }

    #[must_use]
    pub fn with_food_avoids_body(mut self, avoid: bool) -> Self {
        self.food_avoids_body = avoid;
        self
    }

    /// Playfield width in cells.
    #[must_use]
    pub fn columns(&self) -> i32 {
        (self.width / self.cell_size.max(1)) as i32
    }

    /// Playfield height in cells.
    #[must_use]
    pub fn rows(&self) -> i32 {
        (self.height / self.cell_size.max(1)) as i32
    }

    /// Starting head cell.
    #[must_use]
    pub fn origin_cell(&self) -> Cell {
        let size = self.cell_size.max(1);
        Cell::new((self.origin.0 / size) as i32, (self.origin.1 / size) as i32)
    }

    /// Check whether a cell lies inside the playfield.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.columns()).contains(&cell.x) && (0..self.rows()).contains(&cell.y)
    }

    #[must_use]
    pub fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }

    #[must_use]
    pub fn interval_step(&self) -> Duration {
        Duration::from_millis(self.interval_step_ms)
    }

    #[must_use]
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }

    /// Check the playfield geometry and pacing.
    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(invalid("snake cell_size must be positive"));
        }
        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            return Err(invalid(format!(
                "snake canvas {}x{} is not a multiple of cell_size {}",
                self.width, self.height, self.cell_size
            )));
        }
        let (columns, rows) = (self.width / self.cell_size, self.height / self.cell_size);
        if columns > MAX_GRID_CELLS || rows > MAX_GRID_CELLS {
            return Err(invalid(format!(
                "snake playfield {columns}x{rows} cells exceeds {MAX_GRID_CELLS}x{MAX_GRID_CELLS}"
            )));
        }
        if (self.columns() as i64) * (self.rows() as i64) < 2 {
            return Err(invalid("snake playfield needs at least two cells"));
        }
        if self.origin.0 % self.cell_size != 0 || self.origin.1 % self.cell_size != 0 {
            return Err(invalid("snake origin must be aligned to cell_size"));
        }
        if !self.contains(self.origin_cell()) {
            return Err(invalid("snake origin lies outside the canvas"));
        }
        if self.min_interval_ms == 0 {
            return Err(invalid("snake min_interval_ms must be positive"));
        }
        if self.initial_interval_ms < self.min_interval_ms {
            return Err(invalid("snake initial_interval_ms is below min_interval_ms"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SnakeConfig::default();
        assert_eq!(config.columns(), 20);
        assert_eq!(config.rows(), 20);
        assert_eq!(config.origin_cell(), Cell::new(10, 10));
        assert_eq!(config.initial_interval(), Duration::from_millis(150));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_contains() {
        let config = SnakeConfig::default();
        assert!(config.contains(Cell::new(0, 0)));
        assert!(config.contains(Cell::new(19, 19)));
        assert!(!config.contains(Cell::new(20, 0)));
        assert!(!config.contains(Cell::new(0, -1)));
    }

    #[test]
    fn test_rejects_misaligned_canvas() {
        assert!(SnakeConfig::default().with_cell_size(30).validate().is_err());
        assert!(SnakeConfig::default().with_cell_size(0).validate().is_err());
    }

    #[test]
    fn test_rejects_bad_origin() {
        assert!(SnakeConfig::default().with_origin(205, 200).validate().is_err());
        assert!(SnakeConfig::default().with_origin(400, 0).validate().is_err());
    }

    #[test]
    fn test_rejects_bad_intervals() {
        assert!(SnakeConfig::default().with_intervals(40, 5, 50).validate().is_err());
        assert!(SnakeConfig::default().with_intervals(150, 5, 0).validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_field() {
        let at_limit = SnakeConfig::default().with_canvas(2_000, 2_000);
        assert!(at_limit.validate().is_ok());

        assert!(SnakeConfig::default().with_canvas(2_020, 400).validate().is_err());
        assert!(SnakeConfig::default().with_canvas(400, 2_020).validate().is_err());
        // Huge canvases with one-pixel cells would overflow the terminal size
        let huge = SnakeConfig::default().with_cell_size(1).with_canvas(70_000, 10);
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_rejects_single_cell_field() {
        let config = SnakeConfig::default().with_canvas(20, 20).with_origin(0, 0);
        assert!(config.validate().is_err());
    }
}
