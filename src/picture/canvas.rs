use crate::foundation::core::{DPI, Orientation, PaperFormat, Size};
use crate::foundation::error::{PictureError, PictureResult};

/// Pixel canvas for `paper` printed in `orientation` at [`DPI`].
///
/// The paper format is first put shorter-side-first, scaled to pixels, then swapped for
/// landscape. `orientation` must already be resolved.
pub fn canvas_size(paper: PaperFormat, orientation: Orientation) -> PictureResult<Size> {
    let (w_in, h_in) = paper.portrait().inches();
    let to_px = |inches: f64| -> PictureResult<u32> {
        let px = (inches * f64::from(DPI)).round();
        if !(1.0..=f64::from(u32::MAX)).contains(&px) {
            return Err(PictureError::geometry(format!(
                "paper side {inches}in does not map to a usable pixel size"
            )));
        }
        Ok(px as u32)
    };
    let portrait = Size::new(to_px(w_in)?, to_px(h_in)?);

    match orientation {
        Orientation::Portrait => Ok(portrait),
        Orientation::Landscape => Ok(portrait.swapped()),
        Orientation::Auto => Err(PictureError::invalid_orientation(
            "auto must be resolved before sizing the canvas",
        )),
    }
}
