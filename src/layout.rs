//! Themed layout art: a tinted template with an auto-sized caption.

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::assets::loader::{LoadOpts, load_image};
use crate::assets::picto::default_background;
use crate::assets::sizing::{PixelRect, fit_size};
use crate::assets::store::AssetDir;
use crate::foundation::core::{Color, Size};
use crate::foundation::error::PictureResult;
use crate::picture::orientation::check_capture_count;
use crate::text::font::FontProvider;
use crate::text::translate::Translator;

/// Asset name of the template for `layout_number` captures.
pub fn layout_asset_name(layout_number: usize) -> String {
    format!("layout{layout_number}.png")
}

/// Caption box inside a template of size `template`.
///
/// 15% side margins, starting at 76% of the height and 20% of the height tall. Fractional edges
/// are truncated.
pub fn caption_rect(template: Size) -> PixelRect {
    let (w, h) = (f64::from(template.width), f64::from(template.height));
    PixelRect::new(
        (w * 0.3 / 2.0) as u32,
        (h * 0.76) as u32,
        (w * 0.7) as u32,
        (h * 0.20) as u32,
    )
}

/// Render the layout template for `layout_number` captures, fitted into `size`.
///
/// The template is tinted with `text_color` over `bg_color` (the complement of `text_color` when
/// `None`). When `translator` has a caption for the stringified count, it is sized to fill
/// [`caption_rect`], drawn in the background color and centered in that rect.
#[allow(clippy::too_many_arguments)]
#[tracing::instrument(skip(assets, translator, fonts))]
pub fn get_layout_image(
    assets: &AssetDir,
    translator: &dyn Translator,
    fonts: &mut dyn FontProvider,
    text_color: Color,
    bg_color: Option<Color>,
    layout_number: usize,
    size: Size,
) -> PictureResult<RgbaImage> {
    check_capture_count(layout_number)?;
    let bg_color = bg_color.unwrap_or_else(|| default_background(text_color));

    let opts = LoadOpts::sized(size)
        .with_crop(false)
        .with_color(text_color, Some(bg_color));
    let mut layout = load_image(assets, &layout_asset_name(layout_number), &opts)?;

    let Some(text) = translator
        .get_translated_text(&layout_number.to_string())
        .filter(|t| !t.trim().is_empty())
    else {
        tracing::debug!(layout_number, "no caption for layout");
        return Ok(layout);
    };

    let rect = caption_rect(Size::of(&layout));
    if rect.width == 0 || rect.height == 0 {
        return Ok(layout);
    }

    let font_px = fonts.fit_font_size(&text, rect.width, rect.height)?;
    let mut caption = fonts.render_text(&text, font_px, bg_color)?;
    if caption.width() > rect.width || caption.height() > rect.height {
        let fit = fit_size(Size::of(&caption), rect.size());
        tracing::debug!(from = %Size::of(&caption), to = %fit, "caption shrunk to its box");
        caption = imageops::resize(&caption, fit.width, fit.height, FilterType::Lanczos3);
    }

    let x = rect.x + rect.width / 2 - caption.width() / 2;
    let y = rect.y + rect.height / 2 - caption.height() / 2;
    imageops::overlay(&mut layout, &caption, i64::from(x), i64::from(y));
    Ok(layout)
}

#[cfg(test)]
#[path = "../tests/unit/layout.rs"]
mod tests;
