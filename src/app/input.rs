//! Key bindings.
//!
//! Pure mapping from terminal keys to view messages; the app decides what
//! to do with them.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::games::snake::{Direction, SnakeCommand};
use crate::games::tictactoe::TicTacToeCommand;

/// Keys that mean the same thing on every screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlobalKey {
    /// Leave the portal.
    Quit,
    /// Return to the catalog.
    Back,
}

/// Catalog keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogKey {
    Next,
    Previous,
    Play,
    Quit,
}

/// Tic-Tac-Toe keys: either an engine command or a cursor move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicTacToeKey {
    Command(TicTacToeCommand),
    Cursor(Direction),
    PlayCursor,
}

/// Only key presses count; repeats and releases are dropped.
#[must_use]
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}

#[must_use]
pub fn global(key: &KeyEvent) -> Option<GlobalKey> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(GlobalKey::Quit),
        KeyCode::Esc => Some(GlobalKey::Back),
        _ => None,
    }
}

/// Arrow keys.
#[must_use]
pub fn arrow(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}

#[must_use]
pub fn catalog(code: KeyCode) -> Option<CatalogKey> {
    match code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(CatalogKey::Next),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Some(CatalogKey::Previous),
        KeyCode::Enter | KeyCode::Char(' ') => Some(CatalogKey::Play),
        KeyCode::Char('q') => Some(CatalogKey::Quit),
        _ => None,
    }
}

#[must_use]
pub fn snake(code: KeyCode) -> Option<SnakeCommand> {
    if let Some(direction) = arrow(code) {
        return Some(SnakeCommand::Turn(direction));
    }
    match code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(SnakeCommand::Start),
        _ => None,
    }
}

/// Digits `1`-`9` pick a cell row-major.
#[must_use]
pub fn tictactoe(code: KeyCode) -> Option<TicTacToeKey> {
    if let Some(direction) = arrow(code) {
        return Some(TicTacToeKey::Cursor(direction));
    }
    match code {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Some(TicTacToeKey::Command(TicTacToeCommand::Select(index)))
        }
        KeyCode::Char('r') => Some(TicTacToeKey::Command(TicTacToeCommand::Reset)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(TicTacToeKey::PlayCursor),
        _ => None,
    }
}

/// Move a 3x3 board cursor, stopping at the edges.
#[must_use]
pub fn move_cursor(cursor: usize, direction: Direction) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    row * 3 + col
}
