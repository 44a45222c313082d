use std::path::Path;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{VanishError, VanishResult};

/// Paints a single line of text into a render context.
///
/// Coordinates are pen-relative: the line starts at `x = 0` and its baseline sits on `y = 0`.
/// The caller positions the line with the context transform.
pub trait TextPainter {
    fn paint(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        size_px: f32,
        ink: Rgba8,
    ) -> VanishResult<()>;

    /// Human-readable face name for diagnostics.
    fn family_name(&self) -> &str;
}

impl<T: TextPainter + ?Sized> TextPainter for Box<T> {
    fn paint(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        size_px: f32,
        ink: Rgba8,
    ) -> VanishResult<()> {
        (**self).paint(ctx, text, size_px, ink)
    }

    fn family_name(&self) -> &str {
        (**self).family_name()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley text layout.
pub(crate) struct TextBrush {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrush {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Parley contexts bound to a single registered font face.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family_name: String,
}

impl TextLayoutEngine {
    pub(crate) fn new(font_bytes: &[u8]) -> VanishResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| VanishError::font("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| VanishError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    pub(crate) fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape `text` as one unwrapped line.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrush,
    ) -> VanishResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(VanishError::font("text size_px must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

/// Shapes text with Parley from a font file and fills the glyph outlines.
pub struct FontTextPainter {
    engine: TextLayoutEngine,
    font: vello_cpu::peniko::FontData,
}

impl FontTextPainter {
    pub fn from_bytes(font_bytes: Vec<u8>) -> VanishResult<Self> {
        let engine = TextLayoutEngine::new(&font_bytes)?;
        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes),
            0,
        );
        Ok(Self { engine, font })
    }

    pub fn from_path(path: impl AsRef<Path>) -> VanishResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| VanishError::font(format!("read font '{}': {e}", path.display())))?;
        Self::from_bytes(bytes)
    }
}

impl TextPainter for FontTextPainter {
    fn paint(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        size_px: f32,
        ink: Rgba8,
    ) -> VanishResult<()> {
        let layout = self.engine.layout_line(text, size_px, ink.into())?;
        let Some(first) = layout.lines().next() else {
            return Ok(());
        };
        let baseline = first.metrics().baseline;

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                // Positioned glyphs carry absolute layout coordinates; shift the first
                // baseline onto y = 0.
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y - baseline,
                });
                ctx.glyph_run(&self.font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn family_name(&self) -> &str {
        self.engine.family_name()
    }
}

/// Font-free painter: one solid cell per non-whitespace character on a fixed advance.
///
/// Cells are `0.5em` wide, `0.7em` tall and advance by `0.6em`, resting on the baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockTextPainter;

impl BlockTextPainter {
    const ADVANCE_EM: f64 = 0.6;
    const CELL_WIDTH_EM: f64 = 0.5;
    const CELL_HEIGHT_EM: f64 = 0.7;
}

impl TextPainter for BlockTextPainter {
    fn paint(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        size_px: f32,
        ink: Rgba8,
    ) -> VanishResult<()> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(VanishError::font("text size_px must be finite and > 0"));
        }
        let em = f64::from(size_px);
        ctx.set_paint(ink.to_cpu_color());
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x0 = (i as f64) * Self::ADVANCE_EM * em;
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                x0,
                -Self::CELL_HEIGHT_EM * em,
                x0 + Self::CELL_WIDTH_EM * em,
                0.0,
            ));
        }
        Ok(())
    }

    fn family_name(&self) -> &str {
        "block"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/text.rs"]
mod tests;
