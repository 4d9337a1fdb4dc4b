//! Paint model shared between the canvas and the renderer.
//!
//! Only solid fills exist; geometry types remain in `coords`.

pub mod color;

pub use color::{Color, ParseColorError};
