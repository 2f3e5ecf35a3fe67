//! # game-portal
//!
//! A small game portal: a catalog of mini-games plus the games themselves.
//!
//! ## Design Principles
//!
//! 1. **Clock-Driven**: Engines never read the wall clock. Callers pass the
//!    current time into `poll`, which makes every engine deterministic
//!    under test.
//!
//! 2. **Owned Timers**: Each engine owns its single `TimerSlot`. Reset,
//!    stop or drop cancels it; there are no global timers.
//!
//! 3. **Flat State Machines**: An engine is one struct with transition
//!    methods and a command enum for input. No dynamic dispatch.
//!
//! ## Modules
//!
//! - `core`: RNG, timers, configuration, errors
//! - `catalog`: Game table, routes, catalog selection
//! - `games`: Snake and Tic-Tac-Toe engines
//! - `render`: Raster surface the Snake view draws into
//! - `logging`: Logger setup for binaries
//! - `app`: Terminal frontend (feature `tui`)

pub mod core;
pub mod catalog;
pub mod games;
pub mod render;
pub mod logging;

#[cfg(feature = "tui")]
pub mod app;

// Re-export commonly used types
pub use crate::core::{
    GameRng,
    Timer, TimerMode, TimerSlot,
    PortalConfig, PortalError, Result,
};

pub use crate::catalog::{CatalogView, GameDescriptor, Route, Router, GAMES};

pub use crate::games::snake::{
    Cell, CollisionCause, Direction, SnakeCommand, SnakeConfig, SnakeGame, SnakePhase, TickOutcome,
};

pub use crate::games::tictactoe::{
    check_winner, Board, Mark, MoveError, Outcome,
    TicTacToe, TicTacToeCommand, TicTacToeConfig, TicTacToePhase, WinLine, WINNING_LINES,
};

pub use crate::render::{Rgb, Surface};
