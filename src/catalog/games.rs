//! Static game table.

use serde::Serialize;

/// Catalog entry for one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GameDescriptor {
    /// Stable identifier.
    pub id: &'static str,
    /// Display name.
    pub title: &'static str,
    /// One-line blurb shown on the catalog card.
    pub description: &'static str,
    /// Cover image path; empty when the game has none.
    pub image: &'static str,
    /// Route path the game is mounted at.
    pub path: &'static str,
}

/// Every game in the portal, in display order.
///
/// Adding a game means appending an entry here and a `Route` variant.
pub const GAMES: [GameDescriptor; 2] = [
    GameDescriptor {
        id: "snake",
        title: "Snake",
        description: "Classic snake. Collect food and grow!",
        image: "",
        path: "/snake",
    },
    GameDescriptor {
        id: "tictac",
        title: "Tic Tac Toe",
        description: "Noughts and crosses against the computer.",
        image: "",
        path: "/tictac",
    },
];

/// The game table.
#[must_use]
pub fn games() -> &'static [GameDescriptor] {
    &GAMES
}
