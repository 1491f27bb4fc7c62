//! Frame grouping, ordering, naming, and the render loop.

pub mod frames;
pub mod pipeline;

pub use frames::{Frame, FrameIndex, FrameNaming, FramePlan, auto_file_name};
pub use pipeline::{render_all, render_frame, run};
