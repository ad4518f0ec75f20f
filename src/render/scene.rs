//! The scene builder: a pure read of game state producing draw commands.
//!
//! Geometry and palette follow the classic canvas look: a translucent wash
//! over the previous frame, faint grid lines, an inset teal head with two
//! eye marks, slightly larger body insets, and a red food circle with a
//! small highlight.

use crate::game::{Cell, GameConfig, Grid, Snake};

use super::commands::{DrawCommand, Rgba};

pub const BACKGROUND: Rgba = Rgba::new(0, 0, 0, 0.1);
pub const GRID_LINE: Rgba = Rgba::new(255, 255, 255, 0.1);
pub const HEAD: Rgba = Rgba::opaque(0x4e, 0xcd, 0xc4);
pub const BODY: Rgba = Rgba::opaque(0x45, 0xb7, 0xaa);
pub const EYE: Rgba = Rgba::opaque(255, 255, 255);
pub const FOOD: Rgba = Rgba::opaque(0xff, 0x6b, 0x6b);
pub const FOOD_SHINE: Rgba = Rgba::opaque(0xff, 0x8e, 0x8e);

/// Build the full frame: background, grid lines, snake, food
pub fn commands(
    grid: Grid,
    snake: &Snake,
    food: Option<Cell>,
    config: &GameConfig,
) -> Vec<DrawCommand> {
    let cell = config.cell_px as f64;
    let canvas = config.canvas_px as f64;
    let mut out = Vec::new();

    out.push(DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width: canvas,
        height: canvas,
        color: BACKGROUND,
    });

    for i in 0..=grid.tile_count() {
        let at = f64::from(i) * cell;
        out.push(DrawCommand::StrokeLine {
            x1: at,
            y1: 0.0,
            x2: at,
            y2: canvas,
            width: 1.0,
            color: GRID_LINE,
        });
        out.push(DrawCommand::StrokeLine {
            x1: 0.0,
            y1: at,
            x2: canvas,
            y2: at,
            width: 1.0,
            color: GRID_LINE,
        });
    }

    for (index, segment) in snake.cells().iter().enumerate() {
        let x = f64::from(segment.x) * cell;
        let y = f64::from(segment.y) * cell;

        if index == 0 {
            out.push(DrawCommand::FillRect {
                x: x + 2.0,
                y: y + 2.0,
                width: cell - 4.0,
                height: cell - 4.0,
                color: HEAD,
            });
            // two eye marks on the head
            out.push(DrawCommand::FillRect {
                x: x + 6.0,
                y: y + 6.0,
                width: 4.0,
                height: 4.0,
                color: EYE,
            });
            out.push(DrawCommand::FillRect {
                x: x + 10.0,
                y: y + 6.0,
                width: 4.0,
                height: 4.0,
                color: EYE,
            });
        } else {
            out.push(DrawCommand::FillRect {
                x: x + 1.0,
                y: y + 1.0,
                width: cell - 2.0,
                height: cell - 2.0,
                color: BODY,
            });
        }
    }

    if let Some(food) = food {
        let cx = f64::from(food.x) * cell + cell / 2.0;
        let cy = f64::from(food.y) * cell + cell / 2.0;
        out.push(DrawCommand::FillCircle {
            cx,
            cy,
            radius: cell / 2.0 - 2.0,
            color: FOOD,
        });
        out.push(DrawCommand::FillCircle {
            cx: cx - 3.0,
            cy: cy - 3.0,
            radius: 3.0,
            color: FOOD_SHINE,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Grid, Snake, GameConfig) {
        let config = GameConfig::default();
        let grid = Grid::from_canvas(config.canvas_px, config.cell_px);
        let mut snake = Snake::new(Cell::new(4, 5));
        snake.advance(Cell::new(5, 5), true); // [(5,5), (4,5)]
        (grid, snake, config)
    }

    #[test]
    fn test_background_comes_first() {
        let (grid, snake, config) = fixture();
        let commands = commands(grid, &snake, None, &config);

        assert_eq!(
            commands[0],
            DrawCommand::FillRect {
                x: 0.0,
                y: 0.0,
                width: 400.0,
                height: 400.0,
                color: BACKGROUND,
            }
        );
    }

    #[test]
    fn test_grid_lines_at_every_boundary() {
        let (grid, snake, config) = fixture();
        let commands = commands(grid, &snake, None, &config);

        let lines = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .count();
        // 21 boundaries per axis on a 20x20 board
        assert_eq!(lines, 42);
    }

    #[test]
    fn test_head_is_distinguished_with_eyes() {
        let (grid, snake, config) = fixture();
        let commands = commands(grid, &snake, None, &config);

        assert!(commands.contains(&DrawCommand::FillRect {
            x: 102.0,
            y: 102.0,
            width: 16.0,
            height: 16.0,
            color: HEAD,
        }));
        assert!(commands.contains(&DrawCommand::FillRect {
            x: 106.0,
            y: 106.0,
            width: 4.0,
            height: 4.0,
            color: EYE,
        }));
        assert!(commands.contains(&DrawCommand::FillRect {
            x: 110.0,
            y: 106.0,
            width: 4.0,
            height: 4.0,
            color: EYE,
        }));
        assert!(commands.contains(&DrawCommand::FillRect {
            x: 81.0,
            y: 101.0,
            width: 18.0,
            height: 18.0,
            color: BODY,
        }));
    }

    #[test]
    fn test_food_is_a_circle_with_a_highlight() {
        let (grid, snake, config) = fixture();
        let commands = commands(grid, &snake, Some(Cell::new(9, 9)), &config);

        let tail = &commands[commands.len() - 2..];
        assert_eq!(
            tail[0],
            DrawCommand::FillCircle {
                cx: 190.0,
                cy: 190.0,
                radius: 8.0,
                color: FOOD,
            }
        );
        assert_eq!(
            tail[1],
            DrawCommand::FillCircle {
                cx: 187.0,
                cy: 187.0,
                radius: 3.0,
                color: FOOD_SHINE,
            }
        );
    }

    #[test]
    fn test_no_food_draws_no_circles() {
        let (grid, snake, config) = fixture();
        let commands = commands(grid, &snake, None, &config);

        assert!(!commands
            .iter()
            .any(|c| matches!(c, DrawCommand::FillCircle { .. })));
    }
}
