//! Tic-Tac-Toe: the human plays X, the computer answers with O.
//!
//! - The computer picks uniformly among empty cells after a fixed delay
//! - The first of the 8 winning triples (in fixed order) decides the winner
//! - A full board with no triple is a draw

mod board;
mod config;
mod game;
mod line;

pub use board::{check_winner, Board, Mark, Outcome, WINNING_LINES};
pub use config::{TicTacToeConfig, MAX_COMPUTER_DELAY_MS};
pub use game::{MoveError, TicTacToe, TicTacToeCommand, TicTacToePhase, COMPUTER, HUMAN};
pub use line::WinLine;
