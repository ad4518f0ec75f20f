use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::grid::Cell;

/// Configuration for the game
///
/// The defaults reproduce the classic setup: a 400 px canvas of 20 px cells
/// (a 20x20 board), one simulation step every 150 ms, 10 points per food.
/// Board size and speed are fixed on purpose and not exposed as knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Canvas edge length in pixels
    pub canvas_px: u32,
    /// Cell edge length in pixels
    pub cell_px: u32,
    /// Milliseconds between simulation ticks
    pub tick_ms: u64,
    /// Points awarded per food eaten
    pub points_per_food: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_px: 400,
            cell_px: 20,
            tick_ms: 150,
            points_per_food: 10,
        }
    }
}

impl GameConfig {
    /// Number of tiles along one edge (integer division of the canvas)
    pub fn tile_count(&self) -> u32 {
        self.canvas_px / self.cell_px
    }

    /// Delay between simulation ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// The cell the snake starts on: the middle of the board
    pub fn start_cell(&self) -> Cell {
        let center = (self.tile_count() / 2) as i32;
        Cell::new(center, center)
    }

    /// A small board for tests
    pub fn small() -> Self {
        Self {
            canvas_px: 200,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.canvas_px, 400);
        assert_eq!(config.cell_px, 20);
        assert_eq!(config.tick_ms, 150);
        assert_eq!(config.points_per_food, 10);
    }

    #[test]
    fn test_derived_geometry() {
        let config = GameConfig::default();
        assert_eq!(config.tile_count(), 20);
        assert_eq!(config.start_cell(), Cell::new(10, 10));
        assert_eq!(config.tick_interval(), Duration::from_millis(150));
    }

    #[test]
    fn test_small_config() {
        let config = GameConfig::small();
        assert_eq!(config.tile_count(), 10);
        assert_eq!(config.start_cell(), Cell::new(5, 5));
    }
}
