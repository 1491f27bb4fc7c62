//! Per-frame drawing surface.

use std::path::Path;

use kurbo::{BezPath, PathEl, Point};

use crate::encode::image_file::write_image;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{HeatmapError, HeatmapResult};
use crate::projection::Projection;
use crate::render::cell::{cell_corners, cell_path};
use crate::render::composite::over_in_place;
use crate::render::label::LabelRenderer;

/// One frame's drawing surface: a private copy of the base map plus queued vector fills.
///
/// Fills are rasterized with `vello_cpu` and composited onto the pixel buffer on [`flush`],
/// which every read of the pixels triggers. Drawing order is call order.
///
/// [`flush`]: Canvas::flush
pub struct Canvas {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
    overlay: vello_cpu::RenderContext,
    pending: usize,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Canvas {
    /// Wrap a premultiplied RGBA8 buffer of `width` x `height` pixels.
    pub fn from_premul(pixels: Vec<u8>, width: u32, height: u32) -> HeatmapResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| HeatmapError::render("canvas width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| HeatmapError::render("canvas height exceeds u16"))?;
        if width_u16 == 0 || height_u16 == 0 {
            return Err(HeatmapError::render("canvas must be at least 1x1"));
        }
        if pixels.len() != width as usize * height as usize * 4 {
            return Err(HeatmapError::render("canvas byte length mismatch"));
        }
        Ok(Self {
            width: width_u16,
            height: height_u16,
            pixels,
            overlay: vello_cpu::RenderContext::new(width_u16, height_u16),
            pending: 0,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Fill the projected outline of a square geographic cell.
    pub fn fill_cell(
        &mut self,
        projection: &Projection,
        latitude: f64,
        longitude: f64,
        width: f64,
        color: Rgba8,
    ) {
        let corners = cell_corners(projection, latitude, longitude, width);
        tracing::debug!(
            latitude,
            longitude,
            width,
            ?corners,
            "fill cell #{:02x}{:02x}{:02x}",
            color.r,
            color.g,
            color.b
        );
        self.fill_polygon(&corners, color);
    }

    /// Queue a polygon fill through `corners` (snapped to whole pixels).
    pub fn fill_polygon(&mut self, corners: &[Point; 4], color: Rgba8) {
        self.overlay.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.overlay.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        self.overlay.fill_path(&bezpath_to_cpu(&cell_path(corners)));
        self.pending += 1;
    }

    /// Draw `text` as the frame caption; empty text draws nothing.
    pub fn add_label(&mut self, labels: &LabelRenderer, text: &str) -> HeatmapResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.flush()?;
        if let Some(layer) = labels.rasterize(text, self.width(), self.height())? {
            over_in_place(&mut self.pixels, &layer)?;
        }
        Ok(())
    }

    /// Composite queued fills onto the pixel buffer.
    pub fn flush(&mut self) -> HeatmapResult<()> {
        if self.pending == 0 {
            return Ok(());
        }
        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        self.overlay.flush();
        self.overlay.render_to_pixmap(&mut layer);
        over_in_place(&mut self.pixels, layer.data_as_u8_slice())?;
        self.overlay.reset();
        self.pending = 0;
        Ok(())
    }

    /// Premultiplied RGBA8 pixels with every queued fill applied.
    pub fn pixels(&mut self) -> HeatmapResult<&[u8]> {
        self.flush()?;
        Ok(&self.pixels)
    }

    /// Consume the canvas, returning its premultiplied RGBA8 pixels.
    pub fn into_pixels(mut self) -> HeatmapResult<Vec<u8>> {
        self.flush()?;
        Ok(self.pixels)
    }

    /// Encode the canvas to `path`; the format follows the file extension, defaulting to PNG.
    pub fn write(mut self, path: &Path) -> HeatmapResult<()> {
        self.flush()?;
        write_image(path, &self.pixels, self.width(), self.height())
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
