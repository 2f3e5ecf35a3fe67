//! Classic Snake on a fixed grid.
//!
//! - The snake moves one cell per tick in its current heading
//! - Eating food grows it by one cell and shortens the tick interval
//! - Leaving the playfield or biting itself ends the run
//!
//! The tick is a repeating timer owned by `SnakeGame`; the caller drives it
//! with `poll(now)`.

mod config;
mod game;
mod types;

pub use config::{SnakeConfig, MAX_GRID_CELLS};
pub use game::{CollisionCause, SnakeCommand, SnakeGame, SnakePhase, TickOutcome};
pub use types::{Cell, Direction};
