//! Base map plus its calibrated projection, shared read-only by every frame.

use std::path::Path;

use crate::assets::{PreparedImage, load_image};
use crate::foundation::core::CropBounds;
use crate::foundation::error::HeatmapResult;
use crate::projection::Projection;
use crate::render::canvas::Canvas;

/// Geographic extent of a map image in degrees; the pixel size comes from the image itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    /// Latitude of the top edge.
    pub north: f64,
    /// Longitude of the left edge.
    pub west: f64,
    /// Latitude of the bottom edge.
    pub south: f64,
    /// Longitude of the right edge.
    pub east: f64,
}

impl GeoBounds {
    /// Pair the extent with a pixel size.
    pub fn crop(self, width: u32, height: u32) -> HeatmapResult<CropBounds> {
        CropBounds::new(
            f64::from(width),
            f64::from(height),
            self.north,
            self.west,
            self.south,
            self.east,
        )
    }
}

/// Decoded base map and the projection calibrated to it.
#[derive(Clone, Debug)]
pub struct MapContext {
    base: PreparedImage,
    projection: Projection,
}

impl MapContext {
    /// Load the base map from `path` and calibrate a projection for `bounds`.
    pub fn open(path: &Path, bounds: GeoBounds) -> HeatmapResult<Self> {
        let base = load_image(path)?;
        tracing::info!(
            path = %path.display(),
            width = base.width,
            height = base.height,
            "loaded base map"
        );
        Self::from_image(base, bounds)
    }

    /// Build a context over an already-decoded image.
    pub fn from_image(base: PreparedImage, bounds: GeoBounds) -> HeatmapResult<Self> {
        let crop = bounds.crop(base.width, base.height)?;
        Ok(Self {
            base,
            projection: Projection::calibrate(crop),
        })
    }

    /// Projection shared by every frame of this map.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Base map width in pixels.
    pub fn width(&self) -> u32 {
        self.base.width
    }

    /// Base map height in pixels.
    pub fn height(&self) -> u32 {
        self.base.height
    }

    /// A fresh canvas holding an unmodified copy of the base map.
    pub fn new_canvas(&self) -> HeatmapResult<Canvas> {
        Canvas::from_premul(
            self.base.rgba8_premul.as_ref().clone(),
            self.width(),
            self.height(),
        )
    }
}
