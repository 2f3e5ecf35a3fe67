//! Game engines.
//!
//! Each engine is a flat state struct with plain transition methods and its
//! own timer. Engines do not know about each other or about the frontend.

pub mod snake;
pub mod tictactoe;
