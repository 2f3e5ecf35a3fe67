//! Core building blocks shared by the games: RNG, timers, configuration,
//! errors.
//!
//! Nothing here knows about a terminal; the frontend drives everything by
//! passing the current time in.

pub mod config;
pub mod error;
pub mod rng;
pub mod timer;

pub use config::PortalConfig;
pub use error::{PortalError, Result};
pub use rng::GameRng;
pub use timer::{Timer, TimerMode, TimerSlot};
