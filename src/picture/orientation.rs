use image::RgbaImage;

use crate::foundation::core::{Orientation, Size};
use crate::foundation::error::{PictureError, PictureResult};

/// Highest number of captures a picture can hold.
pub const MAX_CAPTURES: usize = 4;

/// Reject capture lists outside `1..=4`.
pub fn check_capture_count(count: usize) -> PictureResult<usize> {
    if (1..=MAX_CAPTURES).contains(&count) {
        Ok(count)
    } else {
        Err(PictureError::InvalidCaptureCount(count))
    }
}

/// Best paper orientation for `captures`, from the first capture's shape and the count.
///
/// 1 and 4 captures are laid out as one block that follows the capture orientation; 2 and 3
/// captures are stacked into a strip that runs across it.
pub fn best_orientation(captures: &[RgbaImage]) -> PictureResult<Orientation> {
    check_capture_count(captures.len())?;
    let first = Size::of(&captures[0]);
    orientation_for(captures.len(), first.is_portrait())
}

/// Decision table behind [`best_orientation`].
pub fn orientation_for(count: usize, first_is_portrait: bool) -> PictureResult<Orientation> {
    let follows_capture = matches!(check_capture_count(count)?, 1 | 4);
    Ok(if first_is_portrait == follows_capture {
        Orientation::Portrait
    } else {
        Orientation::Landscape
    })
}

#[cfg(test)]
#[path = "../../tests/unit/picture/orientation.rs"]
mod tests;
