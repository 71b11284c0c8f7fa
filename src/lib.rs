//! Boothframe turns a photobooth session into printable pictures.
//!
//! It assembles one to four captures into a single picture sized for photo paper, and renders the
//! themed layout templates (tinted pictograms plus a localized caption) shown around them:
//!
//! - Pick a canvas and a backend with [`get_picture_maker`], then [`PictureMaker::build`]
//! - Load, tint, fit and rotate assets with [`load_image`]
//! - Render a template with its caption with [`get_layout_image`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub(crate) mod config;
pub(crate) mod layout;
pub(crate) mod picture;
pub(crate) mod text;

pub use crate::foundation::core::{Affine, Color, DPI, Orientation, PaperFormat, Size};
pub use crate::foundation::error::{PictureError, PictureResult};

pub use crate::assets::decode::{decode_image, open_image, open_image_for_target, rasterize_svg};
pub use crate::assets::loader::{LoadOpts, load_image, rotate};
pub use crate::assets::picto::{
    default_background, dominant_color, main_color, needs_recolor, set_picto_color,
};
pub use crate::assets::sizing::{PixelRect, center_crop_box, fit_size};
pub use crate::assets::store::AssetDir;
pub use crate::config::PictureConfig;
pub use crate::layout::{caption_rect, get_layout_image, layout_asset_name};
#[cfg(feature = "accelerated")]
pub use crate::picture::accelerated::AcceleratedBackend;
pub use crate::picture::backend::{
    BackendKind, ComposeBackend, MakerOpts, PictureMaker, PictureRequest, accelerated_available,
    create_backend, get_picture_maker, get_picture_maker_with, select_backend_kind,
};
pub use crate::picture::canvas::canvas_size;
pub use crate::picture::orientation::{
    MAX_CAPTURES, best_orientation, check_capture_count, orientation_for,
};
pub use crate::picture::portable::PortableBackend;
pub use crate::picture::slots::{Placement, place, plan, slot_rects};
pub use crate::text::font::{FontProvider, ParleyFontProvider};
pub use crate::text::translate::{Translations, Translator};
