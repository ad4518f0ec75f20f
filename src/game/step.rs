use super::direction::Direction;
use super::grid::{Cell, Grid};
use super::snake::Snake;

/// How a step ended the run, if it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The head left the board
    Wall,
    /// The head hit the snake's own body
    Body,
}

/// Result of advancing the simulation by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// The collision that ended the run, if any
    pub collision: Option<Collision>,
}

/// Advance the snake one cell in `direction`.
///
/// On a collision the snake is left untouched. On a food hit the tail is
/// kept, so the body grows by one; the caller is responsible for respawning
/// food against the grown body.
pub fn step(snake: &mut Snake, direction: Direction, food: Option<Cell>, grid: Grid) -> StepOutcome {
    let new_head = snake.head().step(direction);

    if !grid.in_bounds(new_head) {
        return StepOutcome {
            ate_food: false,
            collision: Some(Collision::Wall),
        };
    }

    // The probe runs against the whole pre-step body. The tail cell is
    // vacated this very tick, yet moving into it still counts as a
    // collision.
    if snake.occupies(new_head) {
        return StepOutcome {
            ate_food: false,
            collision: Some(Collision::Body),
        };
    }

    let ate_food = food == Some(new_head);
    snake.advance(new_head, ate_food);

    StepOutcome {
        ate_food,
        collision: None,
    }
}
