//! Frame drawing: cell fills, captions, and compositing onto a copy of the base map.

pub mod canvas;
pub mod cell;
pub mod composite;
pub mod label;

pub use canvas::Canvas;
pub use cell::cell_corners;
pub use label::{LabelRenderer, LabelStyle};
