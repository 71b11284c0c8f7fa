use std::path::Path;

use image::RgbaImage;

use crate::foundation::core::Size;
use crate::foundation::error::{PictureError, PictureResult};

/// Decode encoded raster bytes (PNG, JPEG, ...) into straight-alpha RGBA8.
pub fn decode_image(bytes: &[u8]) -> PictureResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| PictureError::asset(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode the asset at `path`.
///
/// `.svg` files are rasterized at their intrinsic size; everything else goes through
/// [`decode_image`].
pub fn open_image(path: &Path) -> PictureResult<RgbaImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| PictureError::asset(format!("read '{}': {e}", path.display())))?;
    let decoded = if is_svg(path) {
        rasterize_svg(&bytes, None)
    } else {
        decode_image(&bytes)
    };
    decoded.map_err(|e| match e {
        PictureError::Asset(msg) => PictureError::asset(format!("'{}': {msg}", path.display())),
        other => other,
    })
}

/// Read and decode the asset at `path` for display inside a `target` box.
///
/// Raster formats decode at native size. Vector assets are rasterized at the smallest size that
/// covers `target` while keeping their intrinsic aspect ratio, so later fitting only downsamples.
pub fn open_image_for_target(path: &Path, target: Size) -> PictureResult<RgbaImage> {
    if !is_svg(path) {
        return open_image(path);
    }
    let target = target.non_zero("target size")?;
    let bytes = std::fs::read(path)
        .map_err(|e| PictureError::asset(format!("read '{}': {e}", path.display())))?;
    let tree = usvg::Tree::from_data(&bytes, &usvg::Options::default())
        .map_err(|e| PictureError::asset(format!("'{}': parse svg tree: {e}", path.display())))?;
    let native = intrinsic_svg_size(&tree)?;
    let scale = (f64::from(target.width) / f64::from(native.width))
        .max(f64::from(target.height) / f64::from(native.height));
    let cover = Size::new(
        (f64::from(native.width) * scale).ceil().max(1.0) as u32,
        (f64::from(native.height) * scale).ceil().max(1.0) as u32,
    );
    render_svg_tree(&tree, cover)
}

pub(crate) fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Parse SVG bytes and rasterize them to straight-alpha RGBA8.
///
/// With `size == None` the intrinsic SVG size is used, otherwise the drawing is stretched to
/// exactly `size`.
pub fn rasterize_svg(bytes: &[u8], size: Option<Size>) -> PictureResult<RgbaImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts)
        .map_err(|e| PictureError::asset(format!("parse svg tree: {e}")))?;

    let size = match size {
        Some(size) => size.non_zero("svg raster size")?,
        None => intrinsic_svg_size(&tree)?,
    };
    render_svg_tree(&tree, size)
}

fn render_svg_tree(tree: &usvg::Tree, size: Size) -> PictureResult<RgbaImage> {
    let Size { width, height } = size;
    const MAX_DIM: u32 = 16_384;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(PictureError::geometry(format!(
            "svg raster size too large: {size} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PictureError::geometry("failed to allocate svg pixmap"))?;
    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    resvg::render(
        tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.take();
    unpremultiply_rgba8_in_place(&mut data);
    RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| PictureError::asset("svg raster buffer size mismatch"))
}

fn intrinsic_svg_size(tree: &usvg::Tree) -> PictureResult<Size> {
    fn to_px(v: f32) -> PictureResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(PictureError::asset("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    Ok(Size::new(to_px(size.width())?, to_px(size.height())?))
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
