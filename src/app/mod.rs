//! Terminal frontend.
//!
//! `App` mounts one view at a time. Key presses become messages for the
//! mounted view, and the loop sleeps until the view's next timer deadline
//! or the next key press, whichever comes first.

pub mod input;
mod ui;

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyEvent};
use ratatui::DefaultTerminal;

use crate::catalog::{CatalogView, Route, Router};
use crate::core::{GameRng, PortalConfig};
use crate::games::snake::{SnakeCommand, SnakeGame, TickOutcome};
use crate::games::tictactoe::{TicTacToe, TicTacToeCommand};
use crate::render::Surface;
use input::{CatalogKey, GlobalKey, TicTacToeKey};

/// Upper bound on how long the loop blocks waiting for input.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Mounted Snake view.
#[derive(Debug)]
pub struct SnakeScreen {
    pub game: SnakeGame,
    pub surface: Surface,
    /// Shown after a run ends.
    pub notice: Option<String>,
}

/// Mounted Tic-Tac-Toe view.
#[derive(Debug)]
pub struct TicTacToeScreen {
    pub game: TicTacToe,
    pub cursor: usize,
}

/// The mounted view.
#[derive(Debug)]
pub enum Screen {
    Catalog(CatalogView),
    Snake(SnakeScreen),
    TicTacToe(TicTacToeScreen),
}

impl Screen {
    /// Earliest pending timer of the view.
    fn next_deadline(&self) -> Option<Duration> {
        match self {
            Screen::Catalog(_) => None,
            Screen::Snake(s) => s.game.next_deadline(),
            Screen::TicTacToe(t) => t.game.next_deadline(),
        }
    }

    /// Cancel the view's timers before it is dropped.
    fn teardown(&mut self) {
        match self {
            Screen::Catalog(_) => {}
            Screen::Snake(s) => s.game.stop(),
            Screen::TicTacToe(t) => t.game.stop(),
        }
    }
}

/// Portal application state.
pub struct App {
    config: PortalConfig,
    rng: GameRng,
    router: Router,
    screen: Screen,
    started: Instant,
    exit: bool,
}

impl App {
    /// Create the app with `route` mounted.
    ///
    /// `config` is assumed valid (see `PortalConfig::validate`).
    pub fn new(config: PortalConfig, route: Route) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::info!("portal session seed {}", rng.seed());

        let mut app = Self {
            config,
            rng,
            router: Router::new(),
            screen: Screen::Catalog(CatalogView::new()),
            started: Instant::now(),
            exit: false,
        };
        app.mount(route);
        app
    }

    #[must_use]
    pub fn route(&self) -> Route {
        self.router.current()
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn should_exit(&self) -> bool {
        self.exit
    }

    /// Run until the user quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let now = self.now();
            let wait = self
                .screen
                .next_deadline()
                .map_or(IDLE_WAIT, |deadline| deadline.saturating_sub(now).min(IDLE_WAIT));

            if event::poll(wait)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key, self.now());
                }
            }
            self.update(self.now());
        }
        self.screen.teardown();
        Ok(())
    }

    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    /// Resolve `path` and mount a fresh view for it.
    pub fn navigate(&mut self, path: &str) -> crate::core::Result<()> {
        let route = self.router.navigate(path)?;
        self.mount_fresh(route);
        Ok(())
    }

    fn mount(&mut self, route: Route) {
        if let Err(err) = self.navigate(route.path()) {
            log::error!("cannot mount {route}: {err}");
        }
    }

    fn mount_fresh(&mut self, route: Route) {
        self.screen.teardown();
        let mount_rng = self.rng.fork();

        self.screen = match route {
            Route::Catalog => Screen::Catalog(CatalogView::new()),
            Route::Snake => {
                let game = SnakeGame::new(self.config.snake.clone(), mount_rng.for_context("snake"));
                let surface = game.surface();
                Screen::Snake(SnakeScreen { game, surface, notice: None })
            }
            Route::TicTacToe => Screen::TicTacToe(TicTacToeScreen {
                game: TicTacToe::new(self.config.tictactoe.clone(), mount_rng.for_context("tictactoe")),
                cursor: 4,
            }),
        };
    }

    /// Route a key press to the mounted view.
    pub fn handle_key(&mut self, key: KeyEvent, now: Duration) {
        if !input::is_press(&key) {
            return;
        }

        match input::global(&key) {
            Some(GlobalKey::Quit) => {
                self.exit = true;
                return;
            }
            Some(GlobalKey::Back) if self.route() != Route::Catalog => {
                self.mount(Route::Catalog);
                return;
            }
            _ => {}
        }

        let mut navigate_to = None;
        match &mut self.screen {
            Screen::Catalog(view) => match input::catalog(key.code) {
                Some(CatalogKey::Next) => view.select_next(),
                Some(CatalogKey::Previous) => view.select_previous(),
                Some(CatalogKey::Play) => navigate_to = Some(view.activate()),
                Some(CatalogKey::Quit) => self.exit = true,
                None => {}
            },
            Screen::Snake(screen) => {
                if let Some(command) = input::snake(key.code) {
                    if !screen.game.dispatch(command, now) {
                        log::debug!("snake ignored {command:?}");
                    } else if command == SnakeCommand::Start {
                        screen.notice = None;
                    }
                }
            }
            Screen::TicTacToe(screen) => {
                let command = match input::tictactoe(key.code) {
                    Some(TicTacToeKey::Command(command)) => Some(command),
                    Some(TicTacToeKey::Cursor(direction)) => {
                        screen.cursor = input::move_cursor(screen.cursor, direction);
                        None
                    }
                    Some(TicTacToeKey::PlayCursor) => Some(TicTacToeCommand::Select(screen.cursor)),
                    None => None,
                };
                if let Some(command) = command {
                    if let Err(err) = screen.game.dispatch(command, now) {
                        log::debug!("tictactoe ignored {command:?}: {err}");
                    }
                }
            }
        }

        match navigate_to {
            Some(Ok(route)) => self.mount(route),
            Some(Err(err)) => log::error!("{err}"),
            None => {}
        }
    }

    /// Fire whatever timers of the mounted view are due at `now`.
    pub fn update(&mut self, now: Duration) {
        match &mut self.screen {
            Screen::Catalog(_) => {}
            Screen::Snake(screen) => {
                if let Some(TickOutcome::GameOver { score, .. }) = screen.game.poll(now) {
                    screen.notice = Some(format!("Game Over! Your score is {score}!"));
                }
                screen.game.render(&mut screen.surface);
            }
            Screen::TicTacToe(screen) => {
                screen.game.poll(now);
            }
        }
    }
}
