use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, EngineConfig, GridSize, MIN_TICK_INTERVAL_MS, SPEEDUP_PER_FOOD_MS};
use crate::food;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Idle,
    Running,
    Paused,
    GameOver,
    Victory,
}

/// What killed the snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Per-tick change report, enough for a host to update its view
/// incrementally.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TickOutcome {
    /// The head cell after this tick.
    pub head: Position,
    /// The tail cell vacated this tick; `None` when the snake grew.
    pub removed_tail: Option<Position>,
    /// Whether this tick consumed the food.
    pub ate_food: bool,
}

/// Result of one [`GameEngine::advance`] call.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AdvanceResult {
    /// The snake moved one cell.
    Moved(TickOutcome),
    /// Nothing happened: not running, no direction yet, or the tick
    /// interval has not elapsed.
    Skipped,
    /// The move was lethal; the game is over.
    Collided(DeathReason),
}

/// Tick-driven snake simulation.
///
/// The engine performs no I/O and no scheduling of its own: a host
/// calls [`advance`](Self::advance) with a monotonically non-decreasing
/// millisecond timestamp on whatever cadence it renders at, and the
/// engine decides internally whether enough time has passed for a move.
/// All entities are owned by the engine; hosts observe them through the
/// query methods.
#[derive(Debug)]
pub struct GameEngine {
    grid: GridSize,
    wrap: bool,
    initial_speed_ms: u64,
    snake: Snake,
    food: Option<Position>,
    direction: Option<Direction>,
    score: u32,
    speed_ms: u64,
    status: GameStatus,
    death_reason: Option<DeathReason>,
    last_tick: Option<u64>,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an idle engine with entropy-seeded food placement.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates an idle engine with a fixed seed for reproducible runs.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: EngineConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = config.grid();
        let (x, y) = grid.center();
        let snake = Snake::new(Position { x, y });
        let food = food::spawn_position(&mut rng, grid, &snake);

        Ok(Self {
            grid,
            wrap: !config.die_from_walls,
            initial_speed_ms: config.initial_speed_ms,
            snake,
            food,
            direction: None,
            score: 0,
            speed_ms: config.initial_speed_ms,
            status: GameStatus::Idle,
            death_reason: None,
            last_tick: None,
            rng,
        })
    }

    /// Advances the simulation if a full tick interval has elapsed.
    ///
    /// `now_ms` is a caller-supplied monotonic timestamp; passing
    /// timestamps in rather than reading a clock keeps replays
    /// deterministic. The first call after [`start`](Self::start)
    /// always passes the interval gate.
    pub fn advance(&mut self, now_ms: u64) -> AdvanceResult {
        if self.status != GameStatus::Running {
            return AdvanceResult::Skipped;
        }

        // Until the first direction input the snake is stationary, and
        // a stationary snake never collides with itself.
        let Some(direction) = self.direction else {
            return AdvanceResult::Skipped;
        };

        if let Some(last) = self.last_tick {
            if now_ms.saturating_sub(last) < self.speed_ms {
                return AdvanceResult::Skipped;
            }
        }
        self.last_tick = Some(now_ms);

        let stepped = self.snake.head().stepped(direction);
        let new_head = if self.wrap {
            stepped.wrapped(self.grid)
        } else {
            stepped
        };

        if !self.wrap && !new_head.is_within_bounds(self.grid) {
            return self.kill(DeathReason::WallCollision);
        }

        // A one-cell snake vacates its only cell in the same tick, so
        // only longer snakes can run into themselves.
        if self.snake.len() > 1 && self.snake.occupies(new_head) {
            return self.kill(DeathReason::SelfCollision);
        }

        let ate_food = self.food == Some(new_head);
        let removed_tail = self.snake.advance(new_head, ate_food);

        if ate_food {
            self.score += 1;
            if self.speed_ms > MIN_TICK_INTERVAL_MS {
                self.speed_ms -= SPEEDUP_PER_FOOD_MS;
            }

            self.food = food::spawn_position(&mut self.rng, self.grid, &self.snake);
            if self.food.is_none() {
                // No free cell left: the snake covers the whole grid.
                self.status = GameStatus::Victory;
            }
        }

        AdvanceResult::Moved(TickOutcome {
            head: new_head,
            removed_tail,
            ate_food,
        })
    }

    fn kill(&mut self, reason: DeathReason) -> AdvanceResult {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        AdvanceResult::Collided(reason)
    }

    /// Sets the direction for the next tick.
    ///
    /// Ignored unless the game is running or paused; a direction set
    /// while paused takes effect after resuming. A direct reversal is
    /// ignored when the snake has a body to run into, while a one-cell
    /// snake may turn back freely.
    pub fn set_direction(&mut self, direction: Direction) {
        if !matches!(self.status, GameStatus::Running | GameStatus::Paused) {
            return;
        }

        if self.snake.len() > 1
            && self
                .direction
                .is_some_and(|current| direction == current.opposite())
        {
            return;
        }

        self.direction = Some(direction);
    }

    /// Begins or resumes ticking. Idempotent while already running.
    ///
    /// Clears the tick timestamp so the next [`advance`](Self::advance)
    /// call moves immediately instead of waiting out an interval.
    pub fn start(&mut self) {
        if self.status == GameStatus::Running {
            return;
        }

        self.status = GameStatus::Running;
        self.last_tick = None;
    }

    /// Suspends ticking without touching snake, food, or score.
    pub fn pause(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Paused;
        }
    }

    /// Resumes a paused game.
    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Running;
        }
    }

    /// Toggles between running and paused; no effect in other states.
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Halts the game for teardown. Unlike a collision this carries no
    /// game-over meaning; a later [`reset`](Self::reset) starts fresh.
    pub fn stop(&mut self) {
        self.status = GameStatus::Idle;
    }

    /// Returns the game to its initial state and starts it: one-cell
    /// snake at the grid center, no direction, zero score, configured
    /// speed, fresh food.
    pub fn reset(&mut self) {
        let (x, y) = self.grid.center();
        self.snake = Snake::new(Position { x, y });
        self.direction = None;
        self.score = 0;
        self.speed_ms = self.initial_speed_ms;
        self.death_reason = None;
        self.last_tick = None;
        self.food = food::spawn_position(&mut self.rng, self.grid, &self.snake);

        self.start();
        if self.food.is_none() {
            // Degenerate 1x1 grid: the snake already fills the board.
            self.status = GameStatus::Victory;
        }
    }

    /// Moves the food to `position` if it is a free cell inside the
    /// grid. Returns whether the food was placed.
    ///
    /// This is a setup hook for scripted demos and deterministic tests;
    /// normal play relies on the engine's own placement.
    pub fn place_food(&mut self, position: Position) -> bool {
        if !position.is_within_bounds(self.grid) || self.snake.occupies(position) {
            return false;
        }

        self.food = Some(position);
        true
    }

    /// Current score: one point per food eaten.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current snake length in cells.
    #[must_use]
    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    /// Snake cells from head to tail.
    pub fn snake_cells(&self) -> impl Iterator<Item = &Position> {
        self.snake.segments()
    }

    /// Current food cell; `None` only when the snake covers the grid.
    #[must_use]
    pub fn food(&self) -> Option<Position> {
        self.food
    }

    /// Direction of travel; `None` until the first direction input.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Current tick interval in milliseconds.
    #[must_use]
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while the game ticks.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// True while the game is suspended by [`pause`](Self::pause).
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    /// What ended the game, when it ended in a collision.
    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    /// Grid dimensions.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }
}
