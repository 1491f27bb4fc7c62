//! Image decoding into premultiplied RGBA8.

use std::path::Path;

use crate::assets::PreparedImage;
use crate::foundation::error::{HeatmapError, HeatmapResult};

/// Read and decode a base map image from disk.
pub fn load_image(path: &Path) -> HeatmapResult<PreparedImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| HeatmapError::image_load(format!("read '{}': {e}", path.display())))?;
    decode_image(&bytes).map_err(|e| match e {
        HeatmapError::ImageLoad(msg) => {
            HeatmapError::image_load(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })
}

/// Decode any format the `image` crate understands into premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> HeatmapResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| HeatmapError::image_load(format!("decode image: {e}")))?;
    let img = PreparedImage::from_rgba(dyn_img.to_rgba8());
    tracing::debug!(width = img.width, height = img.height, "decoded base map");
    Ok(img)
}

/// Straight to premultiplied alpha, in place.
pub fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}
