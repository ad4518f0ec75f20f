use log::warn;

use crate::score::ScoreStore;

use super::config::GameConfig;
use super::direction::Direction;
use super::food::FoodSpawner;
use super::grid::{Cell, Grid};
use super::snake::Snake;
use super::step::step;

/// Where the game currently is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Board drawn, nothing moving yet
    Idle,
    /// Ticks advance the simulation
    Running,
    /// Ticks suspended, state frozen
    Paused,
    /// A collision ended the run
    GameOver,
}

/// Owns the whole mutable game state and sequences it.
///
/// Input events and the tick timer both land here; the surrounding event
/// loop serializes them, so every tick's mutation is atomic with respect to
/// input. The controller never draws: rendering is a pure read of its
/// accessors.
pub struct GameController {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    direction: Option<Direction>,
    pending: Option<Direction>,
    status: GameStatus,
    score: u32,
    high_score: u32,
    spawner: FoodSpawner,
    store: Box<dyn ScoreStore>,
}

impl GameController {
    /// Build the initial Idle state, loading the persisted high score.
    ///
    /// A store that cannot be read is not fatal: the session simply starts
    /// from zero and keeps the high score in memory.
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>) -> Self {
        let grid = Grid::from_canvas(config.canvas_px, config.cell_px);
        let snake = Snake::new(config.start_cell());
        let mut spawner = FoodSpawner::new();
        let food = spawner.spawn(snake.cells(), grid);

        let high_score = match store.get() {
            Ok(Some(value)) => value,
            Ok(None) => 0,
            Err(err) => {
                warn!("high score unavailable, starting from 0: {err:#}");
                0
            }
        };

        Self {
            config,
            grid,
            snake,
            food,
            direction: None,
            pending: None,
            status: GameStatus::Idle,
            score: 0,
            high_score,
            spawner,
            store,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// True while ticks should fire
    pub fn is_ticking(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Idle -> Running, heading right. From GameOver this is a restart;
    /// Running and Paused are left alone.
    pub fn start(&mut self) {
        match self.status {
            GameStatus::Idle => {}
            GameStatus::GameOver => self.reset(),
            GameStatus::Running | GameStatus::Paused => return,
        }

        self.direction = Some(Direction::Right);
        self.status = GameStatus::Running;
    }

    /// Running <-> Paused; a no-op in any other state
    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            GameStatus::Running => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Running,
            other => other,
        };
    }

    /// Back to Idle: score cleared, snake back on the start cell, direction
    /// cleared, food respawned. The high score survives.
    pub fn reset(&mut self) {
        self.status = GameStatus::Idle;
        self.score = 0;
        self.snake = Snake::new(self.config.start_cell());
        self.direction = None;
        self.pending = None;
        self.food = self.spawner.spawn(self.snake.cells(), self.grid);
    }

    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Buffer a direction change for the next tick.
    ///
    /// Ignored unless Running; ignored when it would reverse the current
    /// direction outright. The last acceptable input before a tick wins.
    pub fn on_direction(&mut self, direction: Direction) {
        if self.status != GameStatus::Running {
            return;
        }
        if let Some(current) = self.direction {
            if current.is_opposite(direction) {
                return;
            }
        }
        self.pending = Some(direction);
    }

    /// Advance the simulation by one step
    pub fn on_tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        if let Some(next) = self.pending.take() {
            match self.direction {
                Some(current) if current.is_opposite(next) => {}
                _ => self.direction = Some(next),
            }
        }

        // No direction set yet: the snake has not started moving
        let direction = match self.direction {
            Some(direction) => direction,
            None => return,
        };

        let outcome = step(&mut self.snake, direction, self.food, self.grid);

        if outcome.collision.is_some() {
            self.game_over();
            return;
        }

        if outcome.ate_food {
            self.score += self.config.points_per_food;
            self.food = self.spawner.spawn(self.snake.cells(), self.grid);
        }
    }

    fn game_over(&mut self) {
        self.status = GameStatus::GameOver;

        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(err) = self.store.set(self.high_score) {
                warn!("failed to persist high score {}: {err:#}", self.high_score);
            }
        }
    }
}
