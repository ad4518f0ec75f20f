/// A color in canvas space, alpha in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }
}

/// One primitive drawing operation in canvas pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgba,
    },
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Rgba,
    },
    StrokeLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: Rgba,
    },
}

/// The drawing-surface collaborator: a fixed-size 2D target exposing the
/// three primitives the scene is built from
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgba);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64, color: Rgba);
}

/// Feed a command sequence to a surface, in order
pub fn replay(commands: &[DrawCommand], surface: &mut impl Surface) {
    for command in commands {
        match *command {
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
                color,
            } => surface.fill_rect(x, y, width, height, color),
            DrawCommand::FillCircle {
                cx,
                cy,
                radius,
                color,
            } => surface.fill_circle(cx, cy, radius, color),
            DrawCommand::StrokeLine {
                x1,
                y1,
                x2,
                y2,
                width,
                color,
            } => surface.stroke_line(x1, y1, x2, y2, width, color),
        }
    }
}
