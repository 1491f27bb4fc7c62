//! Source-over compositing of premultiplied RGBA8 buffers.

use crate::foundation::error::{HeatmapError, HeatmapResult};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// `src` over `dst`.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let inv = 255 - u16::from(sa);
            let mut out = src;
            for (o, d) in out.iter_mut().zip(dst) {
                *o = o.saturating_add(mul_div255(u16::from(d), inv));
            }
            out
        }
    }
}

/// Composite a whole `src` layer over `dst`; both buffers must have the same size.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> HeatmapResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(HeatmapError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}
