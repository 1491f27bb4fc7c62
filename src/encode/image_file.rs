//! Writing frames as image files.

use std::path::Path;

use image::ImageFormat;

use crate::foundation::error::{HeatmapError, HeatmapResult};

/// Output format for a frame file, chosen from its extension.
///
/// Names without an extension the `image` crate can encode are written as PNG.
pub fn format_for_path(path: &Path) -> ImageFormat {
    match ImageFormat::from_path(path) {
        Ok(format) if format.writing_enabled() => format,
        _ => ImageFormat::Png,
    }
}

/// Write a premultiplied RGBA8 buffer to `path`, encoded per [`format_for_path`].
///
/// Formats without an alpha channel get the image flattened over black.
pub fn write_image(path: &Path, premul: &[u8], width: u32, height: u32) -> HeatmapResult<()> {
    let expected = (width as usize) * (height as usize) * 4;
    if premul.len() != expected {
        return Err(HeatmapError::image_write(format!(
            "'{}': buffer holds {} bytes, expected {expected} for {width}x{height}",
            path.display(),
            premul.len()
        )));
    }
    let format = format_for_path(path);

    let mut rgba = premul.to_vec();
    let color = if supports_alpha(format) {
        unpremultiply_in_place(&mut rgba);
        image::ExtendedColorType::Rgba8
    } else {
        rgba = flatten_to_rgb8(&rgba);
        image::ExtendedColorType::Rgb8
    };

    image::save_buffer_with_format(path, &rgba, width, height, color, format).map_err(|e| {
        HeatmapError::image_write(format!("write '{}': {e}", path.display()))
    })?;
    tracing::debug!(path = %path.display(), ?format, "wrote frame");
    Ok(())
}

fn supports_alpha(format: ImageFormat) -> bool {
    !matches!(format, ImageFormat::Jpeg | ImageFormat::Pnm)
}

/// Premultiplied to straight alpha, rounding to nearest.
pub fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        match a {
            0 => px[..3].fill(0),
            255 => {}
            _ => {
                for c in &mut px[..3] {
                    *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
                }
            }
        }
    }
}

fn flatten_to_rgb8(premul: &[u8]) -> Vec<u8> {
    // Premultiplied over opaque black is the color channels unchanged.
    premul
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect()
}
