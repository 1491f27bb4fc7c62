//! Animated heatmap frames over a Mercator base map.
//!
//! A run reads a tab-separated table of geo-tagged deviation scores, groups the rows into frames,
//! and draws each frame's cells onto a fresh copy of a base map image:
//!
//! - [`read_records`] parses the table and resolves each row's fill color through a
//!   [`ColorScale`]
//! - [`FrameIndex`] groups records into frames in lexicographic key order and names their files
//! - [`MapContext`] owns the decoded base map and its calibrated [`Projection`]
//! - [`Canvas`] is one frame's drawing surface; [`render_all`] drives the whole sequence
//!
//! [`run`] ties these together for a [`RunConfig`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod assets;
pub mod config;
pub mod data;
pub mod encode;
pub mod map;
pub mod projection;
pub mod render;
pub mod sequence;

pub use crate::config::{RenderThreading, RunConfig};
pub use crate::data::{ColorScale, FileName, Record, read_records, read_records_path};
pub use crate::foundation::core::{CropBounds, Point, Rgba8};
pub use crate::foundation::error::{HeatmapError, HeatmapResult};
pub use crate::map::{GeoBounds, MapContext};
pub use crate::projection::Projection;
pub use crate::render::{Canvas, LabelRenderer, LabelStyle};
pub use crate::sequence::{FrameIndex, FrameNaming, FramePlan, render_all, render_frame, run};
