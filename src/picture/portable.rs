use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::foundation::error::PictureResult;
use crate::picture::backend::{BackendKind, ComposeBackend, MakerOpts, start_canvas};
use crate::picture::slots::Placement;

/// Sequential composition on `image::imageops`, available on every target.
#[derive(Clone, Copy, Debug, Default)]
pub struct PortableBackend {
    opts: MakerOpts,
}

impl PortableBackend {
    /// Backend drawing with `opts`.
    pub fn new(opts: MakerOpts) -> Self {
        Self { opts }
    }
}

impl ComposeBackend for PortableBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Portable
    }

    fn compose(&self, width: u32, height: u32, captures: &[RgbaImage]) -> PictureResult<RgbaImage> {
        let (mut canvas, placements) = start_canvas(width, height, captures, &self.opts)?;
        for (capture, placement) in captures.iter().zip(&placements) {
            let tile = resample(capture, placement);
            imageops::overlay(
                &mut canvas,
                &tile,
                i64::from(placement.dst.x),
                i64::from(placement.dst.y),
            );
        }
        Ok(canvas)
    }
}

fn resample(capture: &RgbaImage, placement: &Placement) -> RgbaImage {
    let Placement { src, dst } = *placement;
    let cropped = imageops::crop_imm(capture, src.x, src.y, src.width, src.height).to_image();
    if cropped.dimensions() == (dst.width, dst.height) {
        return cropped;
    }
    imageops::resize(&cropped, dst.width, dst.height, FilterType::Lanczos3)
}
