use std::sync::Arc;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::assets::decode::{open_image, open_image_for_target, unpremultiply_rgba8_in_place};
use crate::assets::picto::{needs_recolor, set_picto_color};
use crate::assets::sizing::{center_crop_box, fit_size};
use crate::assets::store::AssetDir;
use crate::foundation::core::{Affine, Color, Size};
use crate::foundation::error::{PictureError, PictureResult};

/// How [`load_image`] should prepare an asset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadOpts {
    /// Box to fit the asset into. `None` keeps the native size and skips recolor/crop/resize.
    pub size: Option<Size>,
    /// High-quality (Lanczos3) resampling when `true`, nearest-neighbor otherwise.
    pub antialiasing: bool,
    /// Mirror left-right.
    pub hflip: bool,
    /// Mirror top-bottom.
    pub vflip: bool,
    /// Center-crop to the target aspect ratio before resizing.
    pub crop: bool,
    /// Counter-clockwise rotation in degrees.
    pub angle: f64,
    /// Pictogram foreground; white keeps the original colors.
    pub color: Color,
    /// Pictogram background; defaults to the complement of `color`.
    pub bg_color: Option<Color>,
}

impl Default for LoadOpts {
    fn default() -> Self {
        Self {
            size: None,
            antialiasing: true,
            hflip: false,
            vflip: false,
            crop: false,
            angle: 0.0,
            color: Color::WHITE,
            bg_color: None,
        }
    }
}

impl LoadOpts {
    /// Default options fitting into `size`.
    pub fn sized(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    /// Tint the asset as a pictogram.
    pub fn with_color(mut self, color: Color, bg_color: Option<Color>) -> Self {
        self.color = color;
        self.bg_color = bg_color;
        self
    }

    /// Enable or disable crop-to-fit.
    pub fn with_crop(mut self, crop: bool) -> Self {
        self.crop = crop;
        self
    }

    /// Set the mirror flags.
    pub fn with_flip(mut self, hflip: bool, vflip: bool) -> Self {
        self.hflip = hflip;
        self.vflip = vflip;
        self
    }

    /// Set the counter-clockwise rotation in degrees.
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Select the resampling filter.
    pub fn with_antialiasing(mut self, antialiasing: bool) -> Self {
        self.antialiasing = antialiasing;
        self
    }
}

/// Load asset `name` from `assets` and prepare it for display.
///
/// Without a target size the asset is decoded as-is and must exist. With a target size a missing
/// asset becomes a fully transparent placeholder of exactly that size; the image is then tinted,
/// optionally center-cropped to the target ratio, and resized to fit the box keeping its aspect
/// ratio. Mirroring and rotation are applied last in every case.
#[tracing::instrument(skip(assets))]
pub fn load_image(assets: &AssetDir, name: &str, opts: &LoadOpts) -> PictureResult<RgbaImage> {
    let path = assets.path(name);

    let mut img = match opts.size {
        None => open_image(&path)?,
        Some(size) => {
            let size = size.non_zero("target size")?;
            let img = if path.is_file() {
                open_image_for_target(&path, size)?
            } else {
                tracing::debug!(path = %path.display(), %size, "asset missing, using placeholder");
                RgbaImage::new(size.width, size.height)
            };
            fit_to_box(img, size, opts)?
        }
    };

    if opts.hflip {
        imageops::flip_horizontal_in_place(&mut img);
    }
    if opts.vflip {
        imageops::flip_vertical_in_place(&mut img);
    }
    if opts.angle != 0.0 {
        img = rotate(&img, opts.angle)?;
    }
    Ok(img)
}

fn fit_to_box(mut img: RgbaImage, size: Size, opts: &LoadOpts) -> PictureResult<RgbaImage> {
    Size::of(&img).non_zero("decoded asset")?;

    if needs_recolor(opts.color) {
        img = set_picto_color(&img, opts.color, opts.bg_color);
    }

    if opts.crop {
        let b = center_crop_box(Size::of(&img), size);
        img = imageops::crop_imm(&img, b.x, b.y, b.width, b.height).to_image();
    }

    let fit = fit_size(Size::of(&img), size);
    if fit != Size::of(&img) {
        let filter = if opts.antialiasing {
            FilterType::Lanczos3
        } else {
            FilterType::Nearest
        };
        img = imageops::resize(&img, fit.width, fit.height, filter);
    }
    Ok(img)
}

/// Rotate counter-clockwise by `angle` degrees, growing the canvas to hold the whole image.
///
/// Quarter turns are exact pixel permutations; other angles are resampled through `vello_cpu`
/// and leave transparent corners.
pub fn rotate(img: &RgbaImage, angle: f64) -> PictureResult<RgbaImage> {
    if !angle.is_finite() {
        return Err(PictureError::geometry(format!(
            "rotation angle must be finite, got {angle}"
        )));
    }
    let turn = angle.rem_euclid(360.0);
    const EPS: f64 = 1e-9;
    if turn < EPS || 360.0 - turn < EPS {
        return Ok(img.clone());
    }
    if (turn - 90.0).abs() < EPS {
        return Ok(imageops::rotate270(img));
    }
    if (turn - 180.0).abs() < EPS {
        return Ok(imageops::rotate180(img));
    }
    if (turn - 270.0).abs() < EPS {
        return Ok(imageops::rotate90(img));
    }
    rotate_resampled(img, turn)
}

fn rotate_resampled(img: &RgbaImage, angle: f64) -> PictureResult<RgbaImage> {
    let (w, h) = (f64::from(img.width()), f64::from(img.height()));
    let rad = angle.to_radians();
    let (sin, cos) = rad.sin_cos();
    let out_w = (w * cos.abs() + h * sin.abs()).round().max(1.0);
    let out_h = (w * sin.abs() + h * cos.abs()).round().max(1.0);

    let to_u16 = |v: f64| -> PictureResult<u16> {
        u16::try_from(v as u32).map_err(|_| {
            PictureError::geometry(format!("rotated size {out_w}x{out_h} exceeds u16"))
        })
    };
    let (out_w16, out_h16) = (to_u16(out_w)?, to_u16(out_h)?);

    let paint = vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap_from_straight(img)?)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    };

    // Screen space is y-down, so a counter-clockwise turn is a negative kurbo rotation.
    let xf = Affine::translate((out_w / 2.0, out_h / 2.0))
        * Affine::rotate(-rad)
        * Affine::translate((-w / 2.0, -h / 2.0));

    let mut ctx = vello_cpu::RenderContext::new(out_w16, out_h16);
    ctx.set_transform(affine_to_cpu(xf));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
    ctx.flush();

    let mut dst = vello_cpu::Pixmap::new(out_w16, out_h16);
    ctx.render_to_pixmap(&mut dst);

    let mut data = dst.data_as_u8_slice().to_vec();
    unpremultiply_rgba8_in_place(&mut data);
    RgbaImage::from_raw(u32::from(out_w16), u32::from(out_h16), data)
        .ok_or_else(|| PictureError::geometry("rotated buffer size mismatch"))
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn pixmap_from_straight(img: &RgbaImage) -> PictureResult<vello_cpu::Pixmap> {
    let w: u16 = img
        .width()
        .try_into()
        .map_err(|_| PictureError::geometry("pixmap width exceeds u16"))?;
    let h: u16 = img
        .height()
        .try_into()
        .map_err(|_| PictureError::geometry("pixmap height exceeds u16"))?;

    let pixels = img
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            let a16 = u16::from(a);
            let premul = |c: u8| -> u8 { (((u16::from(c) * a16) + 127) / 255) as u8 };
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([
                premul(r),
                premul(g),
                premul(b),
                a,
            ])
        })
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/loader.rs"]
mod tests;
