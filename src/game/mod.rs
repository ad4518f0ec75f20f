//! Core game logic
//!
//! Everything in here is deterministic simulation state with no I/O and no
//! rendering dependencies: the grid, the snake, the per-tick step rule,
//! food placement, and the controller that sequences them. The only
//! outward edge is the score store handle the controller persists the high
//! score through.

pub mod config;
pub mod controller;
pub mod direction;
pub mod food;
pub mod grid;
pub mod snake;
pub mod step;

// Re-export commonly used types
pub use config::GameConfig;
pub use controller::{GameController, GameStatus};
pub use direction::Direction;
pub use food::FoodSpawner;
pub use grid::{Cell, Grid};
pub use snake::Snake;
pub use step::{step, Collision, StepOutcome};
