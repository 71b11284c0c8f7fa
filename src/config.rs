//! Session configuration: where the assets live and how pictures are laid out.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::assets::store::AssetDir;
use crate::foundation::core::{Color, Orientation, PaperFormat};
use crate::foundation::error::{PictureError, PictureResult};
use crate::picture::backend::{MakerOpts, PictureRequest};
use crate::text::font::ParleyFontProvider;
use crate::text::translate::Translations;

/// JSON-facing picture settings.
///
/// Every field is optional in the file. Relative paths are resolved against the directory of the
/// file when loaded with [`PictureConfig::from_path`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PictureConfig {
    /// Base directory of layout templates and pictograms.
    pub assets_dir: PathBuf,
    /// Paper size in inches, `[width, height]`.
    pub paper_format: PaperFormat,
    /// `"auto"`, `"portrait"` or `"landscape"`; checked by [`PictureConfig::orientation`].
    pub orientation: String,
    /// Never use the accelerated backend.
    pub force_fallback: bool,
    /// Canvas background behind the captures.
    pub background: Color,
    /// Outer margin and slot gap in pixels.
    pub margin: u32,
    /// Crop captures to fill their slots.
    pub crop: bool,
    /// Tint of layout templates and pictograms.
    pub text_color: Color,
    /// Background of layout templates; the complement of `text_color` when unset.
    pub layout_bg_color: Option<Color>,
    /// Caption font file.
    pub font: Option<PathBuf>,
    /// Caption translations file.
    pub translations: Option<PathBuf>,
}

impl Default for PictureConfig {
    fn default() -> Self {
        let maker = MakerOpts::default();
        Self {
            assets_dir: PathBuf::from("assets"),
            paper_format: PaperFormat::default(),
            orientation: Orientation::Auto.as_str().to_string(),
            force_fallback: false,
            background: maker.background,
            margin: maker.margin,
            crop: maker.crop,
            text_color: Color::WHITE,
            layout_bg_color: None,
            font: None,
            translations: None,
        }
    }
}

impl PictureConfig {
    /// Parse a configuration from a JSON reader. Paths are kept as written.
    pub fn from_reader<R: std::io::Read>(r: R) -> PictureResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| PictureError::validation(format!("parse picture config JSON: {e}")))?;
        cfg.orientation()?;
        Ok(cfg)
    }

    /// Parse a configuration file, resolving relative paths against its directory.
    pub fn from_path(path: impl AsRef<Path>) -> PictureResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PictureError::validation(format!("open picture config '{}': {e}", path.display()))
        })?;
        let cfg = Self::from_reader(BufReader::new(f))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(cfg.relative_to(base))
    }

    fn relative_to(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.assets_dir);
        if let Some(p) = self.font.as_mut() {
            resolve(p);
        }
        if let Some(p) = self.translations.as_mut() {
            resolve(p);
        }
        self
    }

    /// Parsed orientation.
    pub fn orientation(&self) -> PictureResult<Orientation> {
        self.orientation.parse()
    }

    /// Assets directory handle.
    pub fn asset_dir(&self) -> AssetDir {
        AssetDir::new(&self.assets_dir)
    }

    /// Picture request matching these settings.
    pub fn picture_request(&self) -> PictureResult<PictureRequest> {
        Ok(PictureRequest {
            orientation: self.orientation()?,
            paper_format: self.paper_format,
            force_fallback: self.force_fallback,
            maker: MakerOpts {
                background: self.background,
                margin: self.margin,
                crop: self.crop,
            },
        })
    }

    /// Configured translations, or an empty table when none is set.
    pub fn load_translations(&self) -> PictureResult<Translations> {
        match &self.translations {
            Some(path) => Translations::from_path(path),
            None => Ok(Translations::new()),
        }
    }

    /// Configured caption font, if any.
    pub fn load_font(&self) -> PictureResult<Option<ParleyFontProvider>> {
        self.font
            .as_deref()
            .map(ParleyFontProvider::from_path)
            .transpose()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
