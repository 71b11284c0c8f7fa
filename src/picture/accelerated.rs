use fast_image_resize as fir;
use fir::images::{TypedImage, TypedImageRef};
use fir::pixels::U8x4;
use fir::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbaImage;
use image::imageops;
use rayon::prelude::*;

use crate::foundation::error::{PictureError, PictureResult};
use crate::picture::backend::{BackendKind, ComposeBackend, MakerOpts, start_canvas};
use crate::picture::slots::Placement;

/// SIMD resampling through `fast_image_resize`, one capture per rayon task.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceleratedBackend {
    opts: MakerOpts,
}

impl AcceleratedBackend {
    /// Backend drawing with `opts`.
    pub fn new(opts: MakerOpts) -> Self {
        Self { opts }
    }
}

impl ComposeBackend for AcceleratedBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Accelerated
    }

    fn compose(&self, width: u32, height: u32, captures: &[RgbaImage]) -> PictureResult<RgbaImage> {
        let (mut canvas, placements) = start_canvas(width, height, captures, &self.opts)?;

        let tiles = captures
            .par_iter()
            .zip(placements.par_iter())
            .map(|(capture, placement)| resample(capture, placement))
            .collect::<PictureResult<Vec<_>>>()?;

        for (tile, placement) in tiles.iter().zip(&placements) {
            imageops::overlay(
                &mut canvas,
                tile,
                i64::from(placement.dst.x),
                i64::from(placement.dst.y),
            );
        }
        Ok(canvas)
    }
}

fn resample(capture: &RgbaImage, placement: &Placement) -> PictureResult<RgbaImage> {
    let Placement { src, dst } = *placement;
    let (cw, ch) = capture.dimensions();

    let src_view = TypedImageRef::<U8x4>::from_buffer(cw, ch, capture.as_raw())
        .map_err(|e| resize_error("source buffer", e))?;

    // Straight-alpha input: premultiply for filtering so transparent pixels carry no color.
    let opts = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
        .use_alpha(true)
        .crop(
            f64::from(src.x),
            f64::from(src.y),
            f64::from(src.width),
            f64::from(src.height),
        );

    let mut out = vec![0u8; dst.width as usize * dst.height as usize * 4];
    {
        let mut dst_view = TypedImage::<U8x4>::from_buffer(dst.width, dst.height, &mut out)
            .map_err(|e| resize_error("destination buffer", e))?;
        Resizer::new()
            .resize_typed::<U8x4>(&src_view, &mut dst_view, &opts)
            .map_err(|e| resize_error("resize", e))?;
    }

    RgbaImage::from_raw(dst.width, dst.height, out)
        .ok_or_else(|| PictureError::geometry("resized tile size mismatch"))
}

fn resize_error(stage: &str, err: impl std::error::Error + Send + Sync + 'static) -> PictureError {
    PictureError::Other(anyhow::Error::new(err).context(format!("fast_image_resize {stage}")))
}

#[cfg(test)]
#[path = "../../tests/unit/picture/accelerated.rs"]
mod tests;
