use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

use crate::assets::decode::unpremultiply_rgba8_in_place;
use crate::foundation::core::Color;
use crate::foundation::error::{PictureError, PictureResult};

/// Font metrics and rasterization for captions.
pub trait FontProvider {
    /// Largest pixel size at which `text` fits in `max_width` x `max_height`.
    fn fit_font_size(&mut self, text: &str, max_width: u32, max_height: u32)
    -> PictureResult<f32>;

    /// Rasterize `text` at `size_px` in `color` on a transparent surface that tightly bounds the
    /// laid-out text.
    fn render_text(&mut self, text: &str, size_px: f32, color: Color) -> PictureResult<RgbaImage>;
}

/// Smallest size tried when fitting; text that does not fit at this size is rejected.
const MIN_FONT_PX: f32 = 1.0;
const FIT_STEPS: usize = 24;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TextBrush {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<Color> for TextBrush {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: 255,
        }
    }
}

/// [`FontProvider`] over a single font file, laid out by `parley` and drawn by `vello_cpu`.
pub struct ParleyFontProvider {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family: String,
    font: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for ParleyFontProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyFontProvider")
            .field("family", &self.family)
            .finish_non_exhaustive()
    }
}

impl ParleyFontProvider {
    /// Register `font_bytes` (TTF/OTF) as the caption font.
    pub fn new(font_bytes: Vec<u8>) -> PictureResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| PictureError::validation("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| PictureError::validation("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font_bytes), 0);
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font,
        })
    }

    /// Load the caption font from a file.
    pub fn from_path(path: &Path) -> PictureResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        Self::new(bytes)
    }

    /// Family name the font registered under.
    pub fn family(&self) -> &str {
        &self.family
    }

    fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrush,
    ) -> PictureResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(PictureError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        let width = layout.width();
        layout.align(
            Some(width),
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }

    fn measure(&mut self, text: &str, size_px: f32) -> PictureResult<(u32, u32)> {
        let layout = self.layout(text, size_px, TextBrush::default())?;
        Ok((
            layout.width().ceil() as u32,
            layout.height().ceil() as u32,
        ))
    }
}

impl FontProvider for ParleyFontProvider {
    #[tracing::instrument(skip(self))]
    fn fit_font_size(
        &mut self,
        text: &str,
        max_width: u32,
        max_height: u32,
    ) -> PictureResult<f32> {
        let fits = |(w, h): (u32, u32)| w <= max_width && h <= max_height;

        if !fits(self.measure(text, MIN_FONT_PX)?) {
            return Err(PictureError::geometry(format!(
                "text does not fit in {max_width}x{max_height} even at {MIN_FONT_PX}px"
            )));
        }

        // Line height exceeds the font size, so max_height is an upper bound.
        let (mut lo, mut hi) = (MIN_FONT_PX, (max_height as f32).max(MIN_FONT_PX));
        if fits(self.measure(text, hi)?) {
            return Ok(hi);
        }
        for _ in 0..FIT_STEPS {
            let mid = (lo + hi) / 2.0;
            if fits(self.measure(text, mid)?) {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        tracing::debug!(size_px = lo, "caption font fitted");
        Ok(lo)
    }

    fn render_text(&mut self, text: &str, size_px: f32, color: Color) -> PictureResult<RgbaImage> {
        let layout = self.layout(text, size_px, TextBrush::from(color))?;
        let to_u16 = |v: f32, what: &str| -> PictureResult<u16> {
            u16::try_from((v.ceil() as u32).max(1))
                .map_err(|_| PictureError::geometry(format!("text {what} exceeds u16")))
        };
        let w = to_u16(layout.width(), "width")?;
        let h = to_u16(layout.height(), "height")?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.flush();

        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        RgbaImage::from_raw(u32::from(w), u32::from(h), data)
            .ok_or_else(|| PictureError::geometry("text buffer size mismatch"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
