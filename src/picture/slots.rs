//! Slot geometry shared by every composition backend.
//!
//! Backends only differ in how they resample; where each capture lands is decided here so that
//! all of them produce the same arrangement.

use crate::assets::sizing::{PixelRect, center_crop_box, fit_size};
use crate::foundation::core::Size;
use crate::foundation::error::{PictureError, PictureResult};
use crate::picture::orientation::check_capture_count;

/// Where one capture is read from and where it is drawn on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Region of the capture to sample.
    pub src: PixelRect,
    /// Canvas rectangle receiving `src`, resampled to its size.
    pub dst: PixelRect,
}

/// Slot rectangles for `count` captures on `canvas`.
///
/// An outer `margin` frames the content and separates neighbouring slots. One capture gets the
/// whole content area, two or three are stacked along the canvas's long side, four form a 2x2
/// grid.
pub fn slot_rects(count: usize, canvas: Size, margin: u32) -> PictureResult<Vec<PixelRect>> {
    let count = check_capture_count(count)?;
    let inner_w = canvas.width.saturating_sub(margin.saturating_mul(2));
    let inner_h = canvas.height.saturating_sub(margin.saturating_mul(2));

    let (cols, rows) = match count {
        1 => (1, 1),
        4 => (2, 2),
        n if canvas.height >= canvas.width => (1, n as u32),
        n => (n as u32, 1),
    };

    let gaps_w = (cols - 1).saturating_mul(margin);
    let gaps_h = (rows - 1).saturating_mul(margin);
    if inner_w <= gaps_w || inner_h <= gaps_h {
        return Err(PictureError::geometry(format!(
            "margin {margin}px leaves no room for {count} captures on a {canvas} canvas"
        )));
    }
    let slot_w = (inner_w - gaps_w) / cols;
    let slot_h = (inner_h - gaps_h) / rows;

    let mut out = Vec::with_capacity(count);
    for row in 0..rows {
        for col in 0..cols {
            out.push(PixelRect::new(
                margin + col * (slot_w + margin),
                margin + row * (slot_h + margin),
                slot_w,
                slot_h,
            ));
        }
    }
    Ok(out)
}

/// Placement of a capture of size `capture` inside `slot`.
///
/// With `crop` the capture is center-cropped to the slot ratio and fills the slot; otherwise it
/// is fitted whole and centered, leaving background bands.
pub fn place(capture: Size, slot: PixelRect, crop: bool) -> PictureResult<Placement> {
    let capture = capture.non_zero("capture")?;
    if crop {
        return Ok(Placement {
            src: center_crop_box(capture, slot.size()),
            dst: slot,
        });
    }
    let fit = fit_size(capture, slot.size());
    Ok(Placement {
        src: PixelRect::new(0, 0, capture.width, capture.height),
        dst: PixelRect::new(
            slot.x + (slot.width - fit.width) / 2,
            slot.y + (slot.height - fit.height) / 2,
            fit.width,
            fit.height,
        ),
    })
}

/// Placements for all captures, in capture order.
pub fn plan(
    captures: &[Size],
    canvas: Size,
    margin: u32,
    crop: bool,
) -> PictureResult<Vec<Placement>> {
    let slots = slot_rects(captures.len(), canvas, margin)?;
    captures
        .iter()
        .zip(slots)
        .map(|(&capture, slot)| place(capture, slot, crop))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/picture/slots.rs"]
mod tests;
