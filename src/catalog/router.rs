//! Path-to-view routing.

use crate::core::{PortalError, Result};

/// A mountable view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Route {
    #[default]
    Catalog,
    Snake,
    TicTacToe,
}

impl Route {
    /// Resolve a path. Matching is exact.
    pub fn from_path(path: &str) -> Result<Self> {
        match path {
            "/" => Ok(Route::Catalog),
            "/snake" => Ok(Route::Snake),
            "/tictac" => Ok(Route::TicTacToe),
            _ => Err(PortalError::UnknownRoute(path.to_string())),
        }
    }

    /// The path this route is mounted at.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Route::Catalog => "/",
            Route::Snake => "/snake",
            Route::TicTacToe => "/tictac",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// Tracks the mounted route.
///
/// Navigation keeps no history and no per-view state; the caller mounts a
/// fresh view for whatever route `navigate` returns.
#[derive(Clone, Debug, Default)]
pub struct Router {
    current: Route,
}

impl Router {
    /// Start at the catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Route {
        self.current
    }

    /// Resolve `path` and make it current.
    ///
    /// An unknown path leaves the current route unchanged.
    pub fn navigate(&mut self, path: &str) -> Result<Route> {
        let route = Route::from_path(path)?;
        log::info!("navigate {} -> {}", self.current, route);
        self.current = route;
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in [Route::Catalog, Route::Snake, Route::TicTacToe] {
            assert_eq!(Route::from_path(route.path()).unwrap(), route);
        }
    }

    #[test]
    fn test_unknown_path() {
        assert!(matches!(Route::from_path("/chess"), Err(PortalError::UnknownRoute(_))));
        assert!(Route::from_path("/snake?speed=1").is_err());
        assert!(Route::from_path("").is_err());
    }

    #[test]
    fn test_router_navigation() {
        let mut router = Router::new();
        assert_eq!(router.current(), Route::Catalog);

        assert_eq!(router.navigate("/tictac").unwrap(), Route::TicTacToe);
        assert_eq!(router.current(), Route::TicTacToe);

        assert!(router.navigate("/nowhere").is_err());
        assert_eq!(router.current(), Route::TicTacToe);
    }
}
