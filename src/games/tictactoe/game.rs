//! Tic-Tac-Toe against a delayed random opponent.

use std::time::Duration;

use thiserror::Error;

use super::board::{check_winner, Board, Mark, Outcome};
use super::config::TicTacToeConfig;
use super::line::WinLine;
use crate::core::{GameRng, Timer, TimerSlot};

/// The human always plays X.
pub const HUMAN: Mark = Mark::X;
/// The computer always plays O.
pub const COMPUTER: Mark = Mark::O;

/// Lifecycle of a Tic-Tac-Toe game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicTacToePhase {
    InProgress,
    Won,
    Drawn,
}

/// Why a human move was not applied. The board is unchanged in every case.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("Cell index out of range: {0}")]
    OutOfBounds(usize),

    #[error("Cell {0} is already taken")]
    Occupied(usize),

    #[error("Game is already over")]
    GameOver,

    #[error("Waiting for the computer to move")]
    NotYourTurn,
}

/// Input messages for the Tic-Tac-Toe view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicTacToeCommand {
    /// Place X in a cell.
    Select(usize),
    /// Start over.
    Reset,
}

/// Tic-Tac-Toe game state.
///
/// The computer's answer is a one-shot timer owned by the game. `reset`
/// cancels it, so a move scheduled against an old board never lands on a
/// new one.
#[derive(Clone, Debug)]
pub struct TicTacToe {
    config: TicTacToeConfig,
    rng: GameRng,
    board: Board,
    current: Mark,
    outcome: Option<Outcome>,
    computer_move: TimerSlot,
}

impl TicTacToe {
    /// Create an empty game with X to move.
    pub fn new(config: TicTacToeConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            board: Board::new(),
            current: HUMAN,
            outcome: None,
            computer_move: TimerSlot::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.current
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn phase(&self) -> TicTacToePhase {
        match self.outcome {
            None => TicTacToePhase::InProgress,
            Some(Outcome::Win { .. }) => TicTacToePhase::Won,
            Some(Outcome::Draw) => TicTacToePhase::Drawn,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// When the pending computer move fires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.computer_move.next_deadline()
    }

    /// Overlay orientation for the winning triple.
    #[must_use]
    pub fn win_line(&self) -> Option<WinLine> {
        self.outcome.and_then(|o| o.line()).and_then(WinLine::from_triple)
    }

    /// Whether `index` is part of the winning triple.
    #[must_use]
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.outcome
            .and_then(|o| o.line())
            .is_some_and(|line| line.contains(&index))
    }

    /// Header text: next player, winner, or draw.
    #[must_use]
    pub fn status(&self) -> String {
        match self.outcome {
            None => format!("Next player: {}", self.current),
            Some(Outcome::Win { player, .. }) => format!("Winner: {player}"),
            Some(Outcome::Draw) => "Draw!".to_string(),
        }
    }

    // === Transitions ===

    /// Place X at `index` on the human's behalf.
    ///
    /// On success the turn passes to O and the computer's answer is
    /// scheduled `computer_delay` after `now`, unless the move ended the
    /// game. Returns the outcome the move produced, if any.
    pub fn handle_move(&mut self, index: usize, now: Duration) -> Result<Option<Outcome>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if index >= Board::CELLS {
            return Err(MoveError::OutOfBounds(index));
        }
        if self.board.get(index).is_some() {
            return Err(MoveError::Occupied(index));
        }
        if self.current != HUMAN {
            return Err(MoveError::NotYourTurn);
        }

        self.place(index, HUMAN);
        if !self.is_over() {
            self.computer_move.arm(Timer::once(now, self.config.computer_delay()));
        }
        Ok(self.outcome)
    }

    /// Let the computer move if its timer is due at `now`.
    ///
    /// Returns the cell it took.
    pub fn poll(&mut self, now: Duration) -> Option<usize> {
        if !self.computer_move.poll(now) {
            return None;
        }
        if self.is_over() || self.current != COMPUTER {
            return None;
        }

        let empty = self.board.empty_cells();
        let index = *self.rng.choose(&empty)?;
        self.place(index, COMPUTER);
        Some(index)
    }

    /// Clear the board, give X the move and drop any pending computer move.
    pub fn reset(&mut self) {
        if self.computer_move.cancel() {
            log::debug!("tictactoe: pending computer move cancelled by reset");
        }
        self.board = Board::new();
        self.current = HUMAN;
        self.outcome = None;
    }

    /// Drop any pending computer move. Used on teardown.
    pub fn stop(&mut self) {
        self.computer_move.cancel();
    }

    /// Handle an input message at `now`.
    pub fn dispatch(&mut self, command: TicTacToeCommand, now: Duration) -> Result<Option<Outcome>, MoveError> {
        match command {
            TicTacToeCommand::Select(index) => self.handle_move(index, now),
            TicTacToeCommand::Reset => {
                self.reset();
                Ok(None)
            }
        }
    }

    fn place(&mut self, index: usize, mark: Mark) {
        self.board.set(index, mark);
        self.current = mark.opposite();
        self.outcome = check_winner(&self.board);

        log::debug!("tictactoe: {mark} took cell {index}");
        if let Some(outcome) = self.outcome {
            log::info!("tictactoe finished: {outcome:?}");
        }
    }

    // === Test setup ===

    /// Replace the board and side to move, re-evaluating the outcome.
    #[doc(hidden)]
    pub fn debug_set_board(&mut self, board: Board, current: Mark) {
        self.board = board;
        self.current = current;
        self.outcome = check_winner(&board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn game() -> TicTacToe {
        TicTacToe::new(TicTacToeConfig::default(), GameRng::new(42))
    }

    #[test]
    fn test_new_game() {
        let g = game();
        assert!(g.board().is_empty());
        assert_eq!(g.current_player(), Mark::X);
        assert_eq!(g.phase(), TicTacToePhase::InProgress);
        assert_eq!(g.status(), "Next player: X");
        assert_eq!(g.next_deadline(), None);
    }

    #[test]
    fn test_human_move_schedules_computer() {
        let mut g = game();
        assert_eq!(g.handle_move(4, ms(1_000)), Ok(None));

        assert_eq!(g.board().get(4), Some(Mark::X));
        assert_eq!(g.current_player(), Mark::O);
        assert_eq!(g.next_deadline(), Some(ms(1_500)));
    }

    #[test]
    fn test_computer_waits_for_delay() {
        let mut g = game();
        g.handle_move(0, ms(0)).unwrap();

        assert_eq!(g.poll(ms(499)), None);
        let taken = g.poll(ms(500)).unwrap();

        assert_ne!(taken, 0);
        assert_eq!(g.board().get(taken), Some(Mark::O));
        assert_eq!(g.current_player(), Mark::X);
        assert_eq!(g.next_deadline(), None);
    }

    #[test]
    fn test_rejections() {
        let mut g = game();
        assert_eq!(g.handle_move(9, ms(0)), Err(MoveError::OutOfBounds(9)));

        g.handle_move(0, ms(0)).unwrap();
        assert_eq!(g.handle_move(0, ms(10)), Err(MoveError::Occupied(0)));
        assert_eq!(g.handle_move(1, ms(10)), Err(MoveError::NotYourTurn));
        assert_eq!(g.board().empty_cells().len(), 8);
    }

    #[test]
    fn test_reset_cancels_pending_move() {
        let mut g = game();
        g.handle_move(0, ms(0)).unwrap();
        g.reset();

        assert_eq!(g.next_deadline(), None);
        assert_eq!(g.poll(ms(10_000)), None);
        assert!(g.board().is_empty());
        assert_eq!(g.current_player(), Mark::X);
    }

    #[test]
    fn test_winning_move_schedules_nothing() {
        let mut g = game();
        let (x, o, e) = (Some(Mark::X), Some(Mark::O), None);
        g.debug_set_board(Board::from_cells([x, x, e, o, o, e, e, e, e]), Mark::X);

        let outcome = g.handle_move(2, ms(0)).unwrap();
        assert_eq!(outcome, Some(Outcome::Win { player: Mark::X, line: [0, 1, 2] }));
        assert_eq!(g.next_deadline(), None);
        assert_eq!(g.win_line(), Some(WinLine::TopRow));
        assert!(g.is_winning_cell(1));
        assert!(!g.is_winning_cell(3));
        assert_eq!(g.status(), "Winner: X");
        assert_eq!(g.handle_move(8, ms(10)), Err(MoveError::GameOver));
    }

    #[test]
    fn test_dispatch() {
        let mut g = game();
        assert_eq!(g.dispatch(TicTacToeCommand::Select(3), ms(0)), Ok(None));
        assert_eq!(g.dispatch(TicTacToeCommand::Reset, ms(1)), Ok(None));
        assert!(g.board().is_empty());
    }
}
