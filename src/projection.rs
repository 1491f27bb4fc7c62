//! Mercator pixel projection calibrated for a cropped map image.
//!
//! A [`Projection`] maps `(latitude, longitude)` degrees to fractional pixel coordinates of one
//! specific map image. It is calibrated once per [`CropBounds`] and never mutated afterwards.

use std::f64::consts::PI;

use crate::foundation::core::{CropBounds, Point};

// Whole-world reference extent used to normalize cropped maps.
const CANONICAL_NORTH: f64 = 85.05;
const CANONICAL_WEST: f64 = -180.0;
const CANONICAL_SOUTH: f64 = -85.05;
const CANONICAL_EAST: f64 = 180.0;

/// Calibrated latitude/longitude to pixel mapping for one map image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    bounds: CropBounds,
    full_width: f64,
    full_height: f64,
    x_offset: f64,
    y_offset: f64,
}

impl Projection {
    /// Calibrate a projection for `bounds`.
    ///
    /// Whole-world maps use their own pixel size as the world size. Cropped maps are first
    /// measured against the canonical world extent at unit scale to recover the pixel size the
    /// entire world would have at the crop's resolution, and where the crop's corner sits in it.
    /// A final pass anchors the north-west corner of the crop at pixel `(0, 0)`.
    pub fn calibrate(bounds: CropBounds) -> Self {
        let mut projection = if bounds.spans_world() {
            Self {
                bounds,
                full_width: bounds.width,
                full_height: bounds.height,
                x_offset: 0.0,
                y_offset: 0.0,
            }
        } else {
            let canonical = Self::canonical();
            let tl = canonical.raw(bounds.north, bounds.west);
            let br = canonical.raw(bounds.south, bounds.east);
            let scale_width = br.x - tl.x;
            let scale_height = br.y - tl.y;
            let full_width = bounds.width / scale_width;
            let full_height = bounds.height / scale_height;
            Self {
                bounds,
                full_width,
                full_height,
                x_offset: tl.x * full_width,
                y_offset: tl.y * full_height,
            }
        };

        // x and y are corrected with opposite signs. x misses 0 only for whole-world bounds
        // whose west edge is not exactly -180.
        let top_left = projection.project(bounds.north, bounds.west);
        projection.x_offset -= top_left.x;
        projection.y_offset += top_left.y;

        tracing::debug!(
            full_width = projection.full_width,
            full_height = projection.full_height,
            x_offset = projection.x_offset,
            y_offset = projection.y_offset,
            "calibrated projection"
        );
        projection
    }

    /// Unit-scale whole-world reference with zero offsets.
    fn canonical() -> Self {
        Self {
            bounds: CropBounds {
                width: 1.0,
                height: 1.0,
                north: CANONICAL_NORTH,
                west: CANONICAL_WEST,
                south: CANONICAL_SOUTH,
                east: CANONICAL_EAST,
            },
            full_width: 1.0,
            full_height: 1.0,
            x_offset: 0.0,
            y_offset: 0.0,
        }
    }

    /// Project `(latitude, longitude)` degrees to sub-pixel image coordinates.
    pub fn project(&self, latitude: f64, longitude: f64) -> Point {
        let raw = self.raw(latitude, longitude);
        Point::new(raw.x - self.x_offset, raw.y - self.y_offset)
    }

    /// Position in the uncropped world raster of `full_width x full_height` pixels.
    fn raw(&self, latitude: f64, longitude: f64) -> Point {
        let x = (longitude + 180.0) * (self.full_width / 360.0);
        let lat_rad = latitude * PI / 180.0;
        let mercator_n = (PI / 4.0 + lat_rad / 2.0).tan().ln();
        let y = self.full_height / 2.0 - self.full_width * mercator_n / (2.0 * PI);
        Point::new(x, y)
    }

    /// The bounds this projection was calibrated for.
    pub fn bounds(&self) -> CropBounds {
        self.bounds
    }

    /// Pixel size the whole world would occupy at this map's resolution.
    pub fn world_size(&self) -> (f64, f64) {
        (self.full_width, self.full_height)
    }

    /// Offsets subtracted from world coordinates to land in image space.
    pub fn offsets(&self) -> (f64, f64) {
        (self.x_offset, self.y_offset)
    }
}

#[cfg(test)]
#[path = "../tests/unit/projection.rs"]
mod tests;
