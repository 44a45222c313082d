use crate::config::VanishConfig;
use crate::foundation::core::{Affine, Rgba8, Vec2, affine_to_cpu};
use crate::foundation::error::VanishResult;
use crate::raster::surface::{InkPixel, RasterSurface};
use crate::raster::text::TextPainter;

/// Where and how text lands on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TextPlacement {
    pub(crate) origin: Vec2,
    pub(crate) size_px: f32,
    pub(crate) ink: Rgba8,
}

impl TextPlacement {
    pub(crate) fn from_config(cfg: &VanishConfig) -> Self {
        Self {
            origin: Vec2::new(cfg.text_origin[0], cfg.text_origin[1]),
            size_px: cfg.raster_font_size_px(),
            ink: cfg.ink,
        }
    }
}

/// Renders single-line text onto a [`RasterSurface`] and reads back the ink pixels.
pub(crate) struct Rasterizer<P> {
    painter: P,
    placement: TextPlacement,
}

impl<P: TextPainter> Rasterizer<P> {
    pub(crate) fn new(painter: P, placement: TextPlacement) -> Self {
        Self { painter, placement }
    }

    pub(crate) fn painter(&self) -> &P {
        &self.painter
    }

    /// Clear `surface`, draw `text` and return every ink pixel.
    ///
    /// The surface is left cleared when painting fails.
    #[tracing::instrument(skip(self, surface, text), fields(chars = text.chars().count()))]
    pub(crate) fn rasterize(
        &mut self,
        surface: &mut RasterSurface,
        text: &str,
    ) -> VanishResult<Vec<InkPixel>> {
        surface.clear();
        if text.is_empty() {
            return Ok(Vec::new());
        }

        let line = single_line(text);
        let placement = self.placement;
        let mut painted = Ok(());
        surface.render_full(|ctx| {
            ctx.set_transform(affine_to_cpu(Affine::translate(placement.origin)));
            painted = self
                .painter
                .paint(ctx, &line, placement.size_px, placement.ink);
        });
        if let Err(e) = painted {
            surface.clear();
            return Err(e);
        }

        let ink = surface.ink_pixels();
        tracing::trace!(pixels = ink.len(), "rasterized");
        Ok(ink)
    }
}

fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rasterizer.rs"]
mod tests;
