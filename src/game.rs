use std::time::{Duration, Instant};

use log::{debug, error, info, warn};

use crate::clock::TickClock;
use crate::collision::{self, Collision};
use crate::config::{GameConfig, GridSize};
use crate::error::ConfigError;
use crate::food::{Food, FoodPlacement};
use crate::input::Direction;
use crate::score::BestScoreStore;
use crate::sink::{BoardView, RenderSink, ScoreDisplay};
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Why the last session ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    /// The snake covers every cell, so no food can be placed.
    BoardFilled,
    /// Food on the snake or an empty body; never expected in normal play.
    InternalError,
}

/// Result of one call to [`GameEngine::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// The engine is not running; nothing changed.
    Idle,
    Moved,
    AteFood,
    GameOver(GameOverReason),
}

/// One game session plus the collaborators it reports to.
///
/// `snake` and `food` are public so tests and tools can stage a board; the
/// engine re-checks both on every tick.
pub struct GameEngine<V> {
    pub snake: Snake,
    pub food: Food,
    score: u32,
    best_score: u32,
    status: GameStatus,
    game_over_reason: Option<GameOverReason>,
    tick_count: u64,
    grid: GridSize,
    clock: TickClock,
    view: V,
    store: Box<dyn BestScoreStore>,
    placement: Box<dyn FoodPlacement>,
}

impl<V: RenderSink + ScoreDisplay> GameEngine<V> {
    /// Starts a running session.
    ///
    /// Rejects a config whose grid cannot hold the starting snake. A store
    /// that cannot be read leaves the best score at 0.
    pub fn new(
        config: GameConfig,
        view: V,
        store: Box<dyn BestScoreStore>,
        placement: Box<dyn FoodPlacement>,
    ) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let best_score = store.get().unwrap_or_else(|error| {
            warn!("best score unavailable, starting from 0: {error}");
            0
        });

        let mut engine = Self {
            snake: Snake::new(),
            food: Food::new(Position::new(0, 0)),
            score: 0,
            best_score,
            status: GameStatus::Running,
            game_over_reason: None,
            tick_count: 0,
            grid: config.grid(),
            clock: TickClock::new(config.tick_interval()),
            view,
            store,
            placement,
        };

        info!(
            "session started: grid {}x{}, tick {}ms, best score {}",
            engine.grid.width, engine.grid.height, config.tick_interval_ms, best_score
        );
        engine.begin_session();
        Ok(engine)
    }

    /// Runs a tick when the clock says one is due at `now`.
    pub fn advance(&mut self, now: Instant) -> Option<TickOutcome> {
        if self.clock.poll(now) {
            Some(self.tick())
        } else {
            None
        }
    }

    /// Advances simulation by one gameplay tick.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        self.snake.move_forward();

        if self.snake.is_empty() {
            error!("snake body is empty after moving");
            return self.end_session(GameOverReason::InternalError);
        }

        let collision = collision::detect(self.snake.segments(), self.grid, self.food.position);
        let outcome = match collision {
            Some(Collision::Wall) => return self.end_session(GameOverReason::WallCollision),
            Some(Collision::SelfBody) => return self.end_session(GameOverReason::SelfCollision),
            Some(Collision::Food) => {
                self.snake.grow();
                self.score += 1;
                debug!("food eaten at {:?}, score {}", self.food.position, self.score);
                self.view.show_scores(self.score, self.best_score);

                if let Err(reason) = self.place_food() {
                    return self.end_session(reason);
                }
                TickOutcome::AteFood
            }
            None => TickOutcome::Moved,
        };

        if self.snake.occupies(self.food.position) {
            error!("food at {:?} overlaps the snake", self.food.position);
            return self.end_session(GameOverReason::InternalError);
        }

        self.render();
        outcome
    }

    /// Buffers a heading for the next tick.
    ///
    /// Accepted in any state; after game over it has no visible effect.
    pub fn request_direction(&mut self, direction: Direction) {
        self.snake.request_direction(direction);
    }

    /// Maps a raw key identifier to a heading; other keys are ignored.
    pub fn handle_key(&mut self, key: &str) {
        if let Some(direction) = Direction::from_key_name(key) {
            self.request_direction(direction);
        }
    }

    /// Starts a fresh session after game over. Returns false while running.
    pub fn restart(&mut self) -> bool {
        if self.status != GameStatus::GameOver {
            return false;
        }

        info!("restarting, best score {}", self.best_score);
        self.begin_session();
        true
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    #[must_use]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.clock.interval()
    }

    /// Returns true while the tick clock is armed.
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.clock.is_running()
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn begin_session(&mut self) {
        self.snake = Snake::new();
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
        self.game_over_reason = None;

        self.view.set_restart_visible(false);
        self.view.session_started(self.best_score);
        self.view.show_scores(self.score, self.best_score);

        if let Err(reason) = self.place_food() {
            self.end_session(reason);
            return;
        }

        self.render();
        self.clock.start();
    }

    fn place_food(&mut self) -> Result<(), GameOverReason> {
        let occupied = self.snake.occupied_cells();
        let Some(position) = self.placement.place(self.grid, &occupied) else {
            info!("no free cell left for food");
            return Err(GameOverReason::BoardFilled);
        };

        if occupied.contains(&position) || !position.is_within_bounds(self.grid) {
            error!("food placement returned invalid cell {position:?}");
            return Err(GameOverReason::InternalError);
        }

        self.food = Food::new(position);
        Ok(())
    }

    fn end_session(&mut self, reason: GameOverReason) -> TickOutcome {
        self.clock.stop();
        self.status = GameStatus::GameOver;
        self.game_over_reason = Some(reason);
        info!(
            "game over after {} ticks: {reason:?}, score {}",
            self.tick_count, self.score
        );

        if self.score > self.best_score {
            self.best_score = self.score;
            info!("new best score {}", self.best_score);
            if let Err(error) = self.store.set(self.best_score) {
                warn!("failed to save best score: {error}");
            }
        }

        self.render();
        self.view.show_scores(self.score, self.best_score);
        self.view.set_restart_visible(true);
        TickOutcome::GameOver(reason)
    }

    fn render(&mut self) {
        let view = BoardView {
            grid: self.grid,
            snake: &self.snake,
            food: &self.food,
            status: self.status,
            game_over_reason: self.game_over_reason,
        };
        self.view.draw(view);
    }
}
