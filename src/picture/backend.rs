use std::sync::OnceLock;

use image::RgbaImage;

use crate::foundation::core::{Color, Orientation, PaperFormat, Size};
use crate::foundation::error::{PictureError, PictureResult};
use crate::picture::canvas::canvas_size;
use crate::picture::orientation::{best_orientation, check_capture_count};
use crate::picture::slots::{self, Placement};

/// Available composition backends.
///
/// Both produce the same slot arrangement; they differ in speed and resampling details.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Sequential `image::imageops` resampling, always available.
    Portable,
    /// SIMD resampling on a rayon pool, available with the `accelerated` feature.
    Accelerated,
}

impl BackendKind {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portable => "portable",
            Self::Accelerated => "accelerated",
        }
    }
}

/// Whether the accelerated backend can run in this process.
///
/// Evaluated once; the answer never changes for the lifetime of the process.
pub fn accelerated_available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(|| {
        let available = cfg!(feature = "accelerated");
        tracing::debug!(available, "accelerated backend capability");
        available
    })
}

/// Pick a backend: accelerated when it is available and not overridden.
pub fn select_backend_kind(capability_available: bool, force_fallback: bool) -> BackendKind {
    if capability_available && !force_fallback {
        BackendKind::Accelerated
    } else {
        BackendKind::Portable
    }
}

/// Presentation options shared by every backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MakerOpts {
    /// Canvas fill behind and between the captures.
    pub background: Color,
    /// Outer margin and gap between slots, in pixels.
    pub margin: u32,
    /// Center-crop captures to fill their slot instead of fitting them whole.
    pub crop: bool,
}

impl Default for MakerOpts {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            margin: 40,
            crop: false,
        }
    }
}

/// A pixel-composition strategy.
pub trait ComposeBackend: Send + Sync {
    /// Which strategy this is.
    fn kind(&self) -> BackendKind;

    /// Arrange `captures` on a `width` x `height` canvas.
    fn compose(&self, width: u32, height: u32, captures: &[RgbaImage]) -> PictureResult<RgbaImage>;
}

/// Instantiate a backend.
pub fn create_backend(kind: BackendKind, opts: &MakerOpts) -> PictureResult<Box<dyn ComposeBackend>> {
    match kind {
        BackendKind::Portable => Ok(Box::new(crate::picture::portable::PortableBackend::new(
            *opts,
        ))),
        #[cfg(feature = "accelerated")]
        BackendKind::Accelerated => Ok(Box::new(
            crate::picture::accelerated::AcceleratedBackend::new(*opts),
        )),
        #[allow(unreachable_patterns)]
        _ => Err(PictureError::validation(format!(
            "requested backend '{}' is not available",
            kind.as_str()
        ))),
    }
}

/// Background-filled canvas plus the placement of every capture on it.
pub(crate) fn start_canvas(
    width: u32,
    height: u32,
    captures: &[RgbaImage],
    opts: &MakerOpts,
) -> PictureResult<(RgbaImage, Vec<Placement>)> {
    let canvas = Size::new(width, height).non_zero("canvas")?;
    let sizes = captures.iter().map(Size::of).collect::<Vec<_>>();
    let placements = slots::plan(&sizes, canvas, opts.margin, opts.crop)?;
    let img = RgbaImage::from_pixel(width, height, opts.background.with_alpha(255));
    Ok((img, placements))
}

/// A configured composition job: canvas size, captures and the backend that will run it.
///
/// Returned by [`get_picture_maker`]; nothing is drawn until [`PictureMaker::build`].
pub struct PictureMaker<'a> {
    width: u32,
    height: u32,
    captures: &'a [RgbaImage],
    backend: Box<dyn ComposeBackend>,
}

impl std::fmt::Debug for PictureMaker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PictureMaker")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("captures", &self.captures.len())
            .field("backend", &self.backend.kind())
            .finish()
    }
}

impl<'a> PictureMaker<'a> {
    /// Bind a backend to a canvas size and captures.
    pub fn new(
        width: u32,
        height: u32,
        captures: &'a [RgbaImage],
        backend: Box<dyn ComposeBackend>,
    ) -> Self {
        Self {
            width,
            height,
            captures,
            backend,
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The captures, in slot order.
    pub fn captures(&self) -> &'a [RgbaImage] {
        self.captures
    }

    /// Backend that [`PictureMaker::build`] delegates to.
    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Compose the final picture, exactly `width` x `height`.
    #[tracing::instrument(skip(self), fields(backend = self.kind().as_str()))]
    pub fn build(&self) -> PictureResult<RgbaImage> {
        self.backend
            .compose(self.width, self.height, self.captures)
    }
}

/// Inputs of [`get_picture_maker`] besides the captures.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PictureRequest {
    /// Requested orientation; `Auto` is resolved from the captures.
    pub orientation: Orientation,
    /// Paper size in inches, 4x6 by default.
    pub paper_format: PaperFormat,
    /// Use the portable backend even when the accelerated one is available.
    pub force_fallback: bool,
    /// Presentation options handed to the backend.
    pub maker: MakerOpts,
}

/// Size the canvas for `captures` and pick the backend that will compose them.
pub fn get_picture_maker<'a>(
    captures: &'a [RgbaImage],
    request: &PictureRequest,
) -> PictureResult<PictureMaker<'a>> {
    get_picture_maker_with(captures, request, accelerated_available())
}

/// [`get_picture_maker`] with an explicit accelerated-backend capability.
#[tracing::instrument(skip(captures), fields(count = captures.len()))]
pub fn get_picture_maker_with<'a>(
    captures: &'a [RgbaImage],
    request: &PictureRequest,
    accelerated: bool,
) -> PictureResult<PictureMaker<'a>> {
    check_capture_count(captures.len())?;
    for capture in captures {
        Size::of(capture).non_zero("capture")?;
    }

    let orientation = match request.orientation {
        Orientation::Auto => best_orientation(captures)?,
        resolved => resolved,
    };
    let canvas = canvas_size(request.paper_format, orientation)?;
    let kind = select_backend_kind(accelerated, request.force_fallback);
    tracing::debug!(%orientation, %canvas, backend = kind.as_str(), "picture maker selected");

    let backend = create_backend(kind, &request.maker)?;
    Ok(PictureMaker::new(canvas.width, canvas.height, captures, backend))
}

#[cfg(test)]
#[path = "../../tests/unit/picture/backend.rs"]
mod tests;
