use rand::rngs::ThreadRng;
use rand::Rng;

use super::grid::{Cell, Grid};

/// Places food on random unoccupied cells.
///
/// Sampling is rejection-based like the classic implementation, but capped:
/// after `cell_count` misses the free cells are enumerated and drawn from
/// directly, so a crowded board cannot stall the tick. A full board yields
/// `None`.
pub struct FoodSpawner<R = ThreadRng> {
    rng: R,
}

impl FoodSpawner<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for FoodSpawner<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> FoodSpawner<R> {
    /// Build a spawner over a caller-supplied rng (seeded in tests)
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a random cell not in `occupied`, or `None` if the board is full
    pub fn spawn(&mut self, occupied: &[Cell], grid: Grid) -> Option<Cell> {
        let n = grid.tile_count() as i32;

        for _ in 0..grid.cell_count() {
            let cell = Cell::new(self.rng.gen_range(0..n), self.rng.gen_range(0..n));
            if !occupied.contains(&cell) {
                return Some(cell);
            }
        }

        // Sampling kept landing on the snake; draw from the free cells directly.
        let free: Vec<Cell> = grid.cells().filter(|cell| !occupied.contains(cell)).collect();
        if free.is_empty() {
            None
        } else {
            Some(free[self.rng.gen_range(0..free.len())])
        }
    }
}
