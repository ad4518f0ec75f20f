//! Terminal frontend: a character-cell surface for the draw commands and
//! the frame layout around the board.

pub mod canvas;
pub mod view;

pub use canvas::CharCanvas;
