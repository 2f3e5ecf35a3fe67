//! Catalog, routing and configuration integration tests.

use game_portal::catalog::{games, CatalogView, Route, Router};
use game_portal::core::{PortalConfig, PortalError};
use game_portal::games::snake::SnakeConfig;

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_catalog_lists_both_games() {
    let ids: Vec<_> = games().iter().map(|g| g.id).collect();
    assert_eq!(ids, vec!["snake", "tictac"]);
}

#[test]
fn test_descriptor_fields() {
    let snake = &games()[0];
    assert_eq!(snake.title, "Snake");
    assert_eq!(snake.path, "/snake");
    assert!(snake.image.is_empty());
    assert!(!snake.description.is_empty());
}

#[test]
fn test_selecting_a_game_navigates_to_its_path() {
    let mut view = CatalogView::new();
    let mut router = Router::new();

    view.select_next();
    let route = router.navigate(view.selected().path).unwrap();

    assert_eq!(route, Route::TicTacToe);
    assert_eq!(view.activate().unwrap(), route);
    assert_eq!(router.current(), Route::TicTacToe);
}

// =============================================================================
// Routing
// =============================================================================

#[test]
fn test_route_table() {
    assert_eq!(Route::from_path("/").unwrap(), Route::Catalog);
    assert_eq!(Route::from_path("/snake").unwrap(), Route::Snake);
    assert_eq!(Route::from_path("/tictac").unwrap(), Route::TicTacToe);
}

#[test]
fn test_unknown_route_error_message() {
    let err = Route::from_path("/pong").unwrap_err();
    assert_eq!(err.to_string(), "Unknown route: /pong");
}

#[test]
fn test_every_descriptor_path_routes() {
    for game in games() {
        let route = Route::from_path(game.path).unwrap();
        assert_eq!(route.path(), game.path);
        assert_ne!(route, Route::Catalog);
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_partial_json_config() {
    let json = r#"{
        "seed": 3,
        "snake": { "initial_interval_ms": 200, "food_avoids_body": false },
        "tictactoe": { "computer_delay_ms": 100 }
    }"#;
    let config = PortalConfig::from_json_str(json).unwrap();

    assert_eq!(config.seed, Some(3));
    assert_eq!(config.snake.initial_interval_ms, 200);
    assert!(!config.snake.food_avoids_body);
    assert_eq!(config.snake.cell_size, 20);
    assert_eq!(config.tictactoe.computer_delay_ms, 100);
}

#[test]
fn test_invalid_snake_section() {
    let config = PortalConfig::default().with_snake(SnakeConfig::default().with_origin(500, 0));
    assert!(matches!(config.validate(), Err(PortalError::InvalidConfig(_))));
}
