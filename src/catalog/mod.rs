//! Game catalog and routing.
//!
//! - `games`: the static descriptor table
//! - `router`: path to view mapping (`/`, `/snake`, `/tictac`)
//! - `view`: the landing view's selection cursor

pub mod games;
pub mod router;
pub mod view;

pub use games::{games, GameDescriptor, GAMES};
pub use router::{Route, Router};
pub use view::CatalogView;
