use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::game::GameConfig;
use crate::render::{Rgba, Surface};

/// Character-cell approximation of the pixel canvas.
///
/// Two terminal columns per tile and one row per tile keep the board
/// roughly square in a monospace grid. A shape paints every character cell
/// whose center it covers, alpha-composited over black; detail smaller than
/// half a character cell (1 px grid lines, the head's eye marks, the food
/// highlight) falls below resolution and drops out.
pub struct CharCanvas {
    cols: usize,
    rows: usize,
    col_px: f64,
    row_px: f64,
    cells: Vec<Rgba>,
}

impl CharCanvas {
    pub fn new(config: &GameConfig) -> Self {
        let col_px = f64::from(config.cell_px) / 2.0;
        let row_px = f64::from(config.cell_px);
        let cols = (f64::from(config.canvas_px) / col_px) as usize;
        let rows = (f64::from(config.canvas_px) / row_px) as usize;

        Self {
            cols,
            rows,
            col_px,
            row_px,
            cells: vec![Rgba::opaque(0, 0, 0); cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn color_at(&self, col: usize, row: usize) -> Rgba {
        self.cells[row * self.cols + col]
    }

    fn center(&self, col: usize, row: usize) -> (f64, f64) {
        (
            (col as f64 + 0.5) * self.col_px,
            (row as f64 + 0.5) * self.row_px,
        )
    }

    fn blend(&mut self, col: usize, row: usize, color: Rgba) {
        let mix = |base: u8, over: u8| {
            (f32::from(base) * (1.0 - color.a) + f32::from(over) * color.a).round() as u8
        };

        let base = self.cells[row * self.cols + col];
        self.cells[row * self.cols + col] = Rgba::opaque(
            mix(base.r, color.r),
            mix(base.g, color.g),
            mix(base.b, color.b),
        );
    }

    fn paint_covered(&mut self, color: Rgba, covers: impl Fn(f64, f64) -> bool) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let (cx, cy) = self.center(col, row);
                if covers(cx, cy) {
                    self.blend(col, row, color);
                }
            }
        }
    }

    /// Emit the canvas as one background-colored blank span per cell
    pub fn lines(&self) -> Vec<Line<'static>> {
        (0..self.rows)
            .map(|row| {
                let spans: Vec<Span<'static>> = (0..self.cols)
                    .map(|col| {
                        let c = self.color_at(col, row);
                        Span::styled(" ", Style::default().bg(Color::Rgb(c.r, c.g, c.b)))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl Surface for CharCanvas {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.paint_covered(color, |cx, cy| {
            cx >= x && cx < x + width && cy >= y && cy < y + height
        });
    }

    fn fill_circle(&mut self, ccx: f64, ccy: f64, radius: f64, color: Rgba) {
        self.paint_covered(color, |cx, cy| {
            let dx = cx - ccx;
            let dy = cy - ccy;
            dx * dx + dy * dy <= radius * radius
        });
    }

    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgba) {
        let half = width / 2.0;
        self.paint_covered(color, |cx, cy| {
            point_segment_distance(cx, cy, x1, y1, x2, y2) <= half
        });
    }
}

fn point_segment_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let vx = x2 - x1;
    let vy = y2 - y1;
    let len_sq = vx * vx + vy * vy;
    if len_sq == 0.0 {
        return ((px - x1).powi(2) + (py - y1).powi(2)).sqrt();
    }

    let t = (((px - x1) * vx + (py - y1) * vy) / len_sq).clamp(0.0, 1.0);
    let nx = x1 + t * vx;
    let ny = y1 + t * vy;
    ((px - nx).powi(2) + (py - ny).powi(2)).sqrt()
}
