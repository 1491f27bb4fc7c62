//! Everything one run needs, independent of how it was collected.

use std::path::PathBuf;

use crate::data::palette::ColorScale;
use crate::foundation::error::{HeatmapError, HeatmapResult};
use crate::map::GeoBounds;
use crate::render::label::LabelStyle;

/// Worker settings for frame rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderThreading {
    /// Render frames on a thread pool.
    pub parallel: bool,
    /// Pool size, at least 1; rayon's default when `None`.
    pub threads: Option<usize>,
}

/// Inputs and options for one run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Tab-separated data table.
    pub data_path: PathBuf,
    /// Base map image.
    pub map_path: PathBuf,
    /// Geographic extent of the base map.
    pub bounds: GeoBounds,
    /// Directory receiving the frames; created if missing.
    pub out_dir: PathBuf,
    /// Deviation to color mapping.
    pub color_scale: ColorScale,
    /// Caption appearance.
    pub label: LabelStyle,
    /// Frame-level parallelism.
    pub threading: RenderThreading,
}

impl RunConfig {
    /// A configuration with default color scale, caption, and sequential rendering.
    pub fn new(
        data_path: impl Into<PathBuf>,
        map_path: impl Into<PathBuf>,
        bounds: GeoBounds,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data_path: data_path.into(),
            map_path: map_path.into(),
            bounds,
            out_dir: out_dir.into(),
            color_scale: ColorScale::default(),
            label: LabelStyle::default(),
            threading: RenderThreading::default(),
        }
    }

    /// Checks that need no file access.
    pub fn validate(&self) -> HeatmapResult<()> {
        let GeoBounds {
            north,
            west,
            south,
            east,
        } = self.bounds;
        if [north, west, south, east].iter().any(|v| !v.is_finite()) {
            return Err(HeatmapError::config("map bounds must be finite numbers"));
        }
        if north <= south || east <= west {
            return Err(HeatmapError::config(format!(
                "bounds must satisfy north > south and east > west, got \
                 north={north} west={west} south={south} east={east}"
            )));
        }
        if self.threading.threads == Some(0) {
            return Err(HeatmapError::config("thread count must be >= 1 when set"));
        }
        self.label.validate()
    }
}
