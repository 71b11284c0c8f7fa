use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{PictureError, PictureResult};

pub use kurbo::Affine;

/// Print resolution used to turn a paper format into a pixel canvas.
pub const DPI: u32 = 600;

/// Pixel dimensions of a raster or a target box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a size without validation.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of an existing raster.
    pub fn of<P: image::Pixel, C>(img: &image::ImageBuffer<P, C>) -> Self
    where
        C: std::ops::Deref<Target = [P::Subpixel]>,
    {
        let (width, height) = img.dimensions();
        Self { width, height }
    }

    /// Reject sizes with a zero dimension.
    pub fn non_zero(self, what: &str) -> PictureResult<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(PictureError::geometry(format!(
                "{what} must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(self)
    }

    /// `true` when strictly taller than wide. Square sizes are not portrait.
    pub fn is_portrait(self) -> bool {
        self.width < self.height
    }

    /// Exchange width and height.
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = PictureError;

    /// Parse `"WIDTHxHEIGHT"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| PictureError::validation(format!("size '{s}' is not WIDTHxHEIGHT")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| PictureError::validation(format!("size '{s}' has a bad dimension")))
        };
        Ok(Self::new(parse(w)?, parse(h)?))
    }
}

/// Opaque RGB color, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Opaque white, also the "keep original colors" marker for pictograms.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Build a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise complement `(255 - r, 255 - g, 255 - b)`.
    pub const fn complement(self) -> Self {
        Self::rgb(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// This color with the given alpha as an `image` pixel.
    pub fn with_alpha(self, a: u8) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, a])
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

/// Requested paper orientation. `Auto` is resolved from the captures before sizing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Infer from the first capture and the capture count.
    #[default]
    Auto,
    /// Taller than wide.
    Portrait,
    /// Wider than tall.
    Landscape,
}

impl Orientation {
    /// Stable lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = PictureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            _ => Err(PictureError::invalid_orientation(s)),
        }
    }
}

/// Physical paper format in inches. The order of the two values carries no meaning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PaperFormat {
    width_in: f64,
    height_in: f64,
}

impl PaperFormat {
    /// Create a validated format; both sides must be finite and > 0.
    pub fn new(width_in: f64, height_in: f64) -> PictureResult<Self> {
        for v in [width_in, height_in] {
            if !v.is_finite() || v <= 0.0 {
                return Err(PictureError::geometry(format!(
                    "paper format sides must be finite and > 0, got {width_in}x{height_in}"
                )));
            }
        }
        Ok(Self {
            width_in,
            height_in,
        })
    }

    /// The format as given, `(width, height)` in inches.
    pub fn inches(self) -> (f64, f64) {
        (self.width_in, self.height_in)
    }

    /// Same format with the shorter side first.
    pub fn portrait(self) -> Self {
        if self.width_in > self.height_in {
            Self {
                width_in: self.height_in,
                height_in: self.width_in,
            }
        } else {
            self
        }
    }
}

impl Default for PaperFormat {
    /// Standard 4x6 inch photo paper.
    fn default() -> Self {
        Self {
            width_in: 4.0,
            height_in: 6.0,
        }
    }
}

impl TryFrom<[f64; 2]> for PaperFormat {
    type Error = PictureError;

    fn try_from([w, h]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(w, h)
    }
}

impl From<PaperFormat> for [f64; 2] {
    fn from(p: PaperFormat) -> Self {
        [p.width_in, p.height_in]
    }
}

impl FromStr for PaperFormat {
    type Err = PictureError;

    /// Parse `"4x6"` or `"4.1x5.8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s.trim().split_once(['x', 'X']).ok_or_else(|| {
            PictureError::validation(format!("paper format '{s}' is not WIDTHxHEIGHT"))
        })?;
        let parse = |v: &str| {
            v.trim().parse::<f64>().map_err(|_| {
                PictureError::validation(format!("paper format '{s}' has a bad dimension"))
            })
        };
        Self::new(parse(w)?, parse(h)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
