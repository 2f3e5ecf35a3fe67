//! Catalog selection state.

use super::games::{games, GameDescriptor};
use super::router::Route;
use crate::core::Result;

/// The landing view: a cursor over the game table.
#[derive(Clone, Debug, Default)]
pub struct CatalogView {
    selected: usize,
}

impl CatalogView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the highlighted game.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The highlighted game.
    #[must_use]
    pub fn selected(&self) -> &'static GameDescriptor {
        &games()[self.selected]
    }

    /// Move the cursor down, wrapping.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % games().len();
    }

    /// Move the cursor up, wrapping.
    pub fn select_previous(&mut self) {
        let len = games().len();
        self.selected = (self.selected + len - 1) % len;
    }

    /// Highlight a game by index. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < games().len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// The route of the highlighted game.
    pub fn activate(&self) -> Result<Route> {
        Route::from_path(self.selected().path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps() {
        let mut view = CatalogView::new();
        assert_eq!(view.selected().id, "snake");

        view.select_next();
        assert_eq!(view.selected().id, "tictac");
        view.select_next();
        assert_eq!(view.selected().id, "snake");

        view.select_previous();
        assert_eq!(view.selected().id, "tictac");
    }

    #[test]
    fn test_select() {
        let mut view = CatalogView::new();
        assert!(view.select(1));
        assert!(!view.select(2));
        assert_eq!(view.selected_index(), 1);
    }

    #[test]
    fn test_every_game_has_a_route() {
        let mut view = CatalogView::new();
        for i in 0..games().len() {
            view.select(i);
            assert!(view.activate().is_ok(), "{} has no route", view.selected().path);
        }
    }
}
