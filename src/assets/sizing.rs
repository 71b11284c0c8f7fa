//! Aspect-ratio arithmetic shared by the asset loader and the composition backends.

use crate::foundation::core::Size;

/// Pixel rectangle inside a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// Create a rectangle.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Dimensions of the rectangle.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Largest size with the aspect ratio of `original` that fits inside `target`.
///
/// The constraining dimension lands exactly on the target; the other one is `<=` its target.
/// Smaller originals are scaled up to the box. Both inputs must be non-zero.
pub fn fit_size(original: Size, target: Size) -> Size {
    let (ow, oh) = (u64::from(original.width), u64::from(original.height));
    let (tw, th) = (u64::from(target.width), u64::from(target.height));

    // Compare tw/ow against th/oh without floating point.
    if tw * oh <= th * ow {
        let h = (oh * tw + ow / 2) / ow;
        Size::new(target.width, h.clamp(1, th) as u32)
    } else {
        let w = (ow * th + oh / 2) / oh;
        Size::new(w.clamp(1, tw) as u32, target.height)
    }
}

/// Largest centered rectangle of `original` whose aspect ratio matches `target`.
pub fn center_crop_box(original: Size, target: Size) -> PixelRect {
    let (ow, oh) = (u64::from(original.width), u64::from(original.height));
    let (tw, th) = (u64::from(target.width), u64::from(target.height));

    let (w, h) = if ow * th <= oh * tw {
        // Original is narrower than the target ratio: keep the full width.
        let h = (ow * th + tw / 2) / tw;
        (ow, h.clamp(1, oh))
    } else {
        let w = (oh * tw + th / 2) / th;
        (w.clamp(1, ow), oh)
    };

    PixelRect::new(((ow - w) / 2) as u32, ((oh - h) / 2) as u32, w as u32, h as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/sizing.rs"]
mod tests;
