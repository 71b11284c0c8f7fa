//! Theme tinting of white-on-transparent pictograms, and dominant color sampling.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::assets::decode::open_image;
use crate::foundation::core::Color;
use crate::foundation::error::PictureResult;

/// Background used when a pictogram is tinted without an explicit one.
pub fn default_background(foreground: Color) -> Color {
    foreground.complement()
}

/// `true` unless `foreground` is the "keep original colors" marker (opaque white).
pub fn needs_recolor(foreground: Color) -> bool {
    foreground != Color::WHITE
}

/// Tint a white-on-transparent pictogram.
///
/// The RGB channels are reduced to luminance and mapped linearly from `background` (black) to
/// `foreground` (white). The alpha channel is carried over untouched. `background` defaults to
/// [`default_background`] of the foreground.
pub fn set_picto_color(picto: &RgbaImage, foreground: Color, background: Option<Color>) -> RgbaImage {
    let background = background.unwrap_or_else(|| default_background(foreground));
    let lut = colorize_lut(background, foreground);

    let mut out = RgbaImage::new(picto.width(), picto.height());
    for (dst, src) in out.pixels_mut().zip(picto.pixels()) {
        let [r, g, b] = lut[usize::from(luma601(*src))];
        *dst = Rgba([r, g, b, src.0[3]]);
    }
    out
}

/// ITU-R 601-2 luma in 16-bit fixed point, rounded.
fn luma601(px: Rgba<u8>) -> u8 {
    let [r, g, b, _] = px.0.map(u32::from);
    ((r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16) as u8
}

fn colorize_lut(black: Color, white: Color) -> [[u8; 3]; 256] {
    fn lerp(from: u8, to: u8, t: usize) -> u8 {
        let (from, to) = (f32::from(from), f32::from(to));
        (from + (to - from) * (t as f32) / 255.0).round() as u8
    }

    let mut lut = [[0u8; 3]; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = [
            lerp(black.r, white.r, i),
            lerp(black.g, white.g, i),
            lerp(black.b, white.b, i),
        ];
    }
    lut
}

/// Single representative color of an image: its area average.
pub fn dominant_color(img: &RgbaImage) -> Rgba<u8> {
    *image::imageops::thumbnail(img, 1, 1).get_pixel(0, 0)
}

/// Load the image at `path` and return its [`dominant_color`].
#[tracing::instrument]
pub fn main_color(path: &Path) -> PictureResult<Rgba<u8>> {
    let img = open_image(path)?;
    Ok(dominant_color(&img))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/picto.rs"]
mod tests;
