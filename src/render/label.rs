//! Frame captions.
//!
//! Labels are laid out as a single SVG `<text>` element and rasterized with `resvg`, using a font
//! database built once per run from system fonts plus an optional font directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context as _;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{HeatmapError, HeatmapResult};

/// Default caption size in pixels.
pub const DEFAULT_FONT_SIZE: f32 = 50.0;
/// Distance of the caption baseline from the left and bottom image edges.
pub const DEFAULT_MARGIN: f64 = 50.0;

/// Caption appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Font size in pixels.
    pub font_size: f32,
    /// Left margin of the text and distance of its baseline from the bottom edge.
    pub margin: f64,
    /// Text color.
    pub color: Rgba8,
    /// Extra directory scanned for `.ttf`/`.otf`/`.ttc` files.
    pub font_dir: Option<PathBuf>,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            margin: DEFAULT_MARGIN,
            color: Rgba8::BLACK,
            font_dir: None,
        }
    }
}

impl LabelStyle {
    /// Reject sizes the rasterizer cannot use.
    pub fn validate(&self) -> HeatmapResult<()> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(HeatmapError::config(format!(
                "label font size must be > 0, got {}",
                self.font_size
            )));
        }
        if !self.margin.is_finite() {
            return Err(HeatmapError::config("label margin must be finite"));
        }
        Ok(())
    }
}

/// Rasterizes captions; shared read-only by every frame of a run.
pub struct LabelRenderer {
    style: LabelStyle,
    fontdb: Arc<usvg::fontdb::Database>,
    warned_no_fonts: AtomicBool,
}

impl std::fmt::Debug for LabelRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelRenderer")
            .field("style", &self.style)
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

impl LabelRenderer {
    /// Build a renderer with system fonts plus `style.font_dir`.
    pub fn new(style: LabelStyle) -> HeatmapResult<Self> {
        style.validate()?;
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = &style.font_dir {
            if !dir.is_dir() {
                return Err(HeatmapError::config(format!(
                    "font directory '{}' does not exist",
                    dir.display()
                )));
            }
            load_fonts_from_dir(&mut db, dir);
        }
        tracing::debug!(faces = db.len(), "loaded label fonts");
        Ok(Self::with_fontdb(style, Arc::new(db)))
    }

    /// Build a renderer over an existing font database.
    pub fn with_fontdb(style: LabelStyle, fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self {
            style,
            fontdb,
            warned_no_fonts: AtomicBool::new(false),
        }
    }

    /// `true` when at least one font face is available.
    pub fn has_fonts(&self) -> bool {
        !self.fontdb.is_empty()
    }

    /// Rasterize `text` onto a transparent `width` x `height` layer, premultiplied RGBA8.
    ///
    /// Returns `None` when no font is available; that condition is logged once per renderer.
    pub fn rasterize(&self, text: &str, width: u32, height: u32) -> HeatmapResult<Option<Vec<u8>>> {
        if !self.has_fonts() {
            if !self.warned_no_fonts.swap(true, Ordering::Relaxed) {
                tracing::warn!("no fonts available; frame labels will not be drawn");
            }
            return Ok(None);
        }

        let svg = label_svg(&self.style, text, width, height);
        let opts = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            font_resolver: make_font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts).context("parse label svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| HeatmapError::render("failed to allocate label pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Ok(Some(pixmap.take()))
    }
}

fn label_svg(style: &LabelStyle, text: &str, width: u32, height: u32) -> String {
    let Rgba8 { r, g, b, a } = style.color;
    let baseline = f64::from(height) - style.margin;
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><text x="{x}" y="{baseline}" font-family="sans-serif" font-size="{size}" fill="#{r:02x}{g:02x}{b:02x}" fill-opacity="{opacity}" xml:space="preserve">{body}</text></svg>"##,
        x = style.margin,
        size = style.font_size,
        opacity = f32::from(a) / 255.0,
        body = escape_xml(text),
    )
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), "skipping font: {e}");
        }
    }
}

// Requested families, then generic ones, then any face at all.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);
            families.push(usvg::fontdb::Family::Serif);

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                ..Default::default()
            };

            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/label.rs"]
mod tests;
