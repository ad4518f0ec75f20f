//! Rendering core
//!
//! Pure state-to-draw-commands translation. Nothing in here touches a
//! terminal; surfaces implement [`Surface`] and consume commands via
//! [`replay`].

pub mod commands;
pub mod scene;

pub use commands::{replay, DrawCommand, Rgba, Surface};
