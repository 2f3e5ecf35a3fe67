//! Board, marks and win detection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// The 8 winning triples, in the order they are checked.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// `player` owns all three cells of `line`.
    Win { player: Mark, line: [usize; 3] },
    /// Board full, no line.
    Draw,
}

impl Outcome {
    /// The winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// The winning triple, if any.
    #[must_use]
    pub fn line(&self) -> Option<[usize; 3]> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }
}

/// 3x3 board, indexed 0-8 row-major.
///
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board([Option<Mark>; 9]);

impl Board {
    /// Number of cells.
    pub const CELLS: usize = 9;

    /// An empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self([None; 9])
    }

    /// Build a board from raw cells.
    #[must_use]
    pub const fn from_cells(cells: [Option<Mark>; 9]) -> Self {
        Self(cells)
    }

    /// Mark at `index`; `None` for empty or out-of-range cells.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.0.get(index).copied().flatten()
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.0
    }

    /// Place a mark. Callers check bounds and occupancy first.
    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.0[index] = Some(mark);
    }

    /// Indices of empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[usize; 9]> {
        (0..Self::CELLS).filter(|&i| self.0[i].is_none()).collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---------")?;
            }
            let cell = |i: usize| self.get(row * 3 + i).map_or(' ', |m| if m == Mark::X { 'X' } else { 'O' });
            writeln!(f, " {} | {} | {}", cell(0), cell(1), cell(2))?;
        }
        Ok(())
    }
}

/// Evaluate a board.
///
/// The first triple in `WINNING_LINES` order whose three cells hold the same
/// mark wins. With no such triple a full board is a draw, anything else is
/// still in progress (`None`).
#[must_use]
pub fn check_winner(board: &Board) -> Option<Outcome> {
    for line in WINNING_LINES {
        if let Some(player) = board.get(line[0]) {
            if board.get(line[1]) == Some(player) && board.get(line[2]) == Some(player) {
                return Some(Outcome::Win { player, line });
            }
        }
    }

    if board.is_full() {
        return Some(Outcome::Draw);
    }
    None
}
