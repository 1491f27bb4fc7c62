//! Shared value types.

use crate::foundation::error::{HeatmapError, HeatmapResult};

pub use kurbo::Point;

/// Pixel size of a map image together with the geographic extent it covers.
///
/// Degrees are signed decimal (negative = south/west).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CropBounds {
    /// Image width in pixels.
    pub width: f64,
    /// Image height in pixels.
    pub height: f64,
    /// Latitude of the top edge.
    pub north: f64,
    /// Longitude of the left edge.
    pub west: f64,
    /// Latitude of the bottom edge.
    pub south: f64,
    /// Longitude of the right edge.
    pub east: f64,
}

// Bounds beyond these thresholds are treated as a whole-world map.
const WORLD_NORTH: f64 = 81.9;
const WORLD_WEST: f64 = -179.9;
const WORLD_SOUTH: f64 = -81.9;
const WORLD_EAST: f64 = 179.9;

impl CropBounds {
    /// Create validated bounds.
    ///
    /// Requires positive pixel sizes, `north > south`, `east > west`, and latitudes within
    /// `[-90, 90]`. A south edge at -90 projects to infinity, so only whole-world bounds
    /// (which never project it) may use it.
    pub fn new(
        width: f64,
        height: f64,
        north: f64,
        west: f64,
        south: f64,
        east: f64,
    ) -> HeatmapResult<Self> {
        let all = [width, height, north, west, south, east];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(HeatmapError::config("map bounds must be finite numbers"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(HeatmapError::config(format!(
                "map image size must be positive, got {width}x{height}"
            )));
        }
        if north <= south {
            return Err(HeatmapError::config(format!(
                "north latitude ({north}) must be greater than south latitude ({south})"
            )));
        }
        if east <= west {
            return Err(HeatmapError::config(format!(
                "east longitude ({east}) must be greater than west longitude ({west})"
            )));
        }
        if north > 90.0 || south < -90.0 {
            return Err(HeatmapError::config(
                "latitudes must lie between -90 and 90",
            ));
        }
        let bounds = Self {
            width,
            height,
            north,
            west,
            south,
            east,
        };
        if south <= -90.0 && !bounds.spans_world() {
            return Err(HeatmapError::config(
                "a south edge at -90 is only valid for whole-world maps",
            ));
        }
        Ok(bounds)
    }

    /// `true` when the bounds cover (approximately) the whole Mercator world.
    pub fn spans_world(&self) -> bool {
        self.north >= WORLD_NORTH
            && self.west <= WORLD_WEST
            && self.south <= WORLD_SOUTH
            && self.east >= WORLD_EAST
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> HeatmapResult<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(HeatmapError::config(format!(
                "invalid color '{s}': expected #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |i: usize| -> HeatmapResult<u8> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| HeatmapError::config(format!("invalid hex digits in color '{s}'")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }

}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
