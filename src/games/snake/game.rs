//! Snake state machine.

use std::collections::VecDeque;
use std::time::Duration;

use rustc_hash::FxHashSet;

use super::config::SnakeConfig;
use super::types::{Cell, Direction};
use crate::core::{GameRng, Timer, TimerSlot};
use crate::render::{Rgb, Surface};

/// Lifecycle of a Snake run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakePhase {
    /// Not started yet.
    Idle,
    /// Tick timer active.
    Running,
    /// Run ended; timer cancelled.
    Over,
}

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionCause {
    /// Head left the playfield.
    Wall,
    /// Head ran into the body.
    SelfCollision,
    /// No free cell left for food.
    BoardFull,
}

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved one cell, same length.
    Moved,
    /// Moved onto food and grew.
    Ate { score: u32 },
    /// Run ended with this final score.
    GameOver { score: u32, cause: CollisionCause },
}

/// Input messages for the Snake view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnakeCommand {
    /// Start a new run (ignored while running).
    Start,
    /// Steer.
    Turn(Direction),
}

/// Snake game state.
///
/// Owns its tick timer: nothing outside this struct can advance the run,
/// and dropping the struct drops the timer.
#[derive(Clone, Debug)]
pub struct SnakeGame {
    config: SnakeConfig,
    rng: GameRng,
    /// Head at the front.
    body: VecDeque<Cell>,
    food: Option<Cell>,
    direction: Direction,
    interval: Duration,
    score: u32,
    phase: SnakePhase,
    ticker: TimerSlot,
}

impl SnakeGame {
    /// Create an idle game.
    ///
    /// `config` is assumed valid (see `SnakeConfig::validate`).
    pub fn new(config: SnakeConfig, rng: GameRng) -> Self {
        let interval = config.initial_interval();
        Self {
            config,
            rng,
            body: VecDeque::new(),
            food: None,
            direction: Direction::Up,
            interval,
            score: 0,
            phase: SnakePhase::Idle,
            ticker: TimerSlot::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> SnakePhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == SnakePhase::Running
    }

    /// Body cells, head first.
    pub fn body(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn head(&self) -> Option<Cell> {
        self.body.front().copied()
    }

    #[must_use]
    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// When the next tick is due, if running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.ticker.next_deadline()
    }

    // === Transitions ===

    /// Reset everything and begin a run at `now`.
    pub fn start(&mut self, now: Duration) {
        self.body.clear();
        self.body.push_back(self.config.origin_cell());
        self.interval = self.config.initial_interval();
        self.score = 0;
        self.direction = Direction::Right;
        self.phase = SnakePhase::Running;
        self.food = self.place_food();
        self.ticker.arm(Timer::repeating(now, self.interval));

        log::debug!(
            "snake started at {} with food at {:?}, interval {:?}",
            self.config.origin_cell(),
            self.food,
            self.interval
        );
    }

    /// Steer. Rejected if `direction` reverses the current heading.
    ///
    /// Several turns between two ticks overwrite each other; only the last
    /// accepted one is used.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Handle an input message at `now`. Returns whether it changed state.
    pub fn dispatch(&mut self, command: SnakeCommand, now: Duration) -> bool {
        match command {
            SnakeCommand::Start if self.is_running() => false,
            SnakeCommand::Start => {
                self.start(now);
                true
            }
            SnakeCommand::Turn(direction) => self.change_direction(direction),
        }
    }

    /// Run the tick if the timer is due at `now`.
    pub fn poll(&mut self, now: Duration) -> Option<TickOutcome> {
        if self.ticker.poll(now) {
            self.tick()
        } else {
            None
        }
    }

    /// Advance the run by one cell. `None` unless running.
    pub fn tick(&mut self) -> Option<TickOutcome> {
        if !self.is_running() {
            return None;
        }
        let head = self.head()?;
        let next = head.step(self.direction);

        if !self.config.contains(next) {
            return Some(self.game_over(CollisionCause::Wall));
        }

        let eating = self.food == Some(next);
        // The tail moves out of the way this tick unless the snake grows
        let checked = if eating { self.body.len() } else { self.body.len() - 1 };
        if self.body.iter().take(checked).any(|&c| c == next) {
            return Some(self.game_over(CollisionCause::SelfCollision));
        }

        self.body.push_front(next);

        if !eating {
            self.body.pop_back();
            return Some(TickOutcome::Moved);
        }

        self.score += 1;
        self.speed_up();
        self.food = self.place_food();
        if self.food.is_none() {
            return Some(self.game_over(CollisionCause::BoardFull));
        }

        log::debug!("snake ate at {next}, score {}, interval {:?}", self.score, self.interval);
        Some(TickOutcome::Ate { score: self.score })
    }

    /// Cancel the tick timer. Used on teardown.
    pub fn stop(&mut self) {
        if self.ticker.cancel() {
            log::debug!("snake timer cancelled");
        }
    }

    fn speed_up(&mut self) {
        let min = self.config.min_interval();
        if self.interval > min {
            self.interval = self.interval.saturating_sub(self.config.interval_step()).max(min);
            self.ticker.set_period(self.interval);
        }
    }

    fn game_over(&mut self, cause: CollisionCause) -> TickOutcome {
        self.phase = SnakePhase::Over;
        self.ticker.cancel();
        log::info!("snake game over ({cause:?}), score {}", self.score);
        TickOutcome::GameOver { score: self.score, cause }
    }

    /// Pick a food cell. `None` only when every cell is taken.
    fn place_food(&mut self) -> Option<Cell> {
        let columns = self.config.columns();
        let rows = self.config.rows();

        if !self.config.food_avoids_body {
            let x = self.rng.gen_range_usize(0..columns as usize) as i32;
            let y = self.rng.gen_range_usize(0..rows as usize) as i32;
            return Some(Cell::new(x, y));
        }

        let occupied: FxHashSet<Cell> = self.body.iter().copied().collect();
        let free: Vec<Cell> = (0..rows)
            .flat_map(|y| (0..columns).map(move |x| Cell::new(x, y)))
            .filter(|c| !occupied.contains(c))
            .collect();
        self.rng.choose(&free).copied()
    }

    // === Rendering ===

    /// Draw the current state. Food first, then the body on top.
    pub fn render(&self, surface: &mut Surface) {
        let size = self.config.cell_size;
        surface.clear(Rgb::BLACK);

        if let Some(food) = self.food {
            let (x, y) = food.to_pixels(size);
            surface.fill_rect(x, y, size, size, Rgb::RED);
        }
        for segment in &self.body {
            let (x, y) = segment.to_pixels(size);
            surface.fill_rect(x, y, size, size, Rgb::GREEN);
        }
    }

    /// A surface matching the configured canvas size.
    #[must_use]
    pub fn surface(&self) -> Surface {
        Surface::new(self.config.width, self.config.height)
    }

    // === Test setup ===

    /// Place the snake (head first) and heading directly, as a running game.
    #[doc(hidden)]
    pub fn debug_set_snake(&mut self, body: &[Cell], direction: Direction) {
        self.body = body.iter().copied().collect();
        self.direction = direction;
        self.phase = SnakePhase::Running;
    }

    #[doc(hidden)]
    pub fn debug_set_food(&mut self, food: Cell) {
        self.food = Some(food);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn game() -> SnakeGame {
        SnakeGame::new(SnakeConfig::default(), GameRng::new(42))
    }

    #[test]
    fn test_new_is_idle() {
        let mut g = game();
        assert_eq!(g.phase(), SnakePhase::Idle);
        assert!(g.is_empty());
        assert_eq!(g.food(), None);
        assert_eq!(g.next_deadline(), None);
        assert_eq!(g.tick(), None);
    }

    #[test]
    fn test_start_resets_state() {
        let mut g = game();
        g.start(ms(0));

        assert_eq!(g.phase(), SnakePhase::Running);
        assert_eq!(g.body().collect::<Vec<_>>(), vec![Cell::new(10, 10)]);
        assert_eq!(g.direction(), Direction::Right);
        assert_eq!(g.score(), 0);
        assert_eq!(g.interval(), ms(150));
        assert_eq!(g.next_deadline(), Some(ms(150)));

        let food = g.food().unwrap();
        assert!(g.config().contains(food));
        assert_ne!(food, Cell::new(10, 10));
    }

    #[test]
    fn test_speed_up_floors() {
        let config = SnakeConfig::default().with_intervals(60, 7, 50);
        let mut g = SnakeGame::new(config, GameRng::new(1));
        g.start(ms(0));

        g.speed_up();
        assert_eq!(g.interval(), ms(53));
        g.speed_up();
        assert_eq!(g.interval(), ms(50));
        g.speed_up();
        assert_eq!(g.interval(), ms(50));
    }

    #[test]
    fn test_stop_cancels_timer() {
        let mut g = game();
        g.start(ms(0));
        g.stop();

        assert_eq!(g.next_deadline(), None);
        assert_eq!(g.poll(ms(10_000)), None);
    }

    #[test]
    fn test_dispatch_start_ignored_while_running() {
        let mut g = game();
        assert!(g.dispatch(SnakeCommand::Start, ms(0)));
        assert!(!g.dispatch(SnakeCommand::Start, ms(10)));
        assert_eq!(g.next_deadline(), Some(ms(150)));
    }

    #[test]
    fn test_food_fills_last_free_cell() {
        // 2x1 field: snake on one cell, food must go to the other
        let config = SnakeConfig::default().with_canvas(40, 20).with_origin(0, 0);
        let mut g = SnakeGame::new(config, GameRng::new(3));
        g.start(ms(0));
        assert_eq!(g.food(), Some(Cell::new(1, 0)));

        // Eating it leaves no room
        let outcome = g.tick();
        assert_eq!(
            outcome,
            Some(TickOutcome::GameOver { score: 1, cause: CollisionCause::BoardFull })
        );
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn test_render_draws_food_and_body() {
        let mut g = game();
        g.debug_set_snake(&[Cell::new(1, 1), Cell::new(0, 1)], Direction::Right);
        g.debug_set_food(Cell::new(5, 5));

        let mut surface = g.surface();
        g.render(&mut surface);

        assert_eq!(surface.count(Rgb::GREEN), 2 * 20 * 20);
        assert_eq!(surface.count(Rgb::RED), 20 * 20);
        assert_eq!(surface.pixel(100, 100), Some(Rgb::RED));
        assert_eq!(surface.pixel(25, 25), Some(Rgb::GREEN));
        assert_eq!(surface.pixel(45, 25), Some(Rgb::BLACK));
    }
}
