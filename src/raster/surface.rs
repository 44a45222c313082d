use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::VanishResult;

/// A rasterized ink pixel: position on the surface and its straight-alpha color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InkPixel {
    pub x: i32,
    pub y: i32,
    pub color: Rgba8,
}

/// Read-only copy of the surface in straight-alpha RGBA8, row-major.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Fixed-size offscreen pixel buffer shared by text rasterization and particle drawing.
pub(crate) struct RasterSurface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
    scratch: vello_cpu::Pixmap,
}

impl RasterSurface {
    pub(crate) fn new(canvas: Canvas) -> VanishResult<Self> {
        let (width, height) = canvas.as_u16()?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
            scratch: vello_cpu::Pixmap::new(width, height),
        })
    }

    pub(crate) fn clear(&mut self) {
        clear_pixmap(&mut self.pixmap);
    }

    /// Clear every column at or right of `x`.
    pub(crate) fn clear_from_column(&mut self, x: i32) {
        let Some(start) = self.column_start(x) else {
            return;
        };
        let row_bytes = usize::from(self.width) * 4;
        for row in self.pixmap.data_as_u8_slice_mut().chunks_exact_mut(row_bytes) {
            row[start * 4..].fill(0);
        }
    }

    /// Render `paint` into a cleared scratch pixmap, then copy its columns at or right of `x`
    /// onto the surface.
    pub(crate) fn draw_from_column(
        &mut self,
        x: i32,
        paint: impl FnOnce(&mut vello_cpu::RenderContext),
    ) {
        let Some(start) = self.column_start(x) else {
            return;
        };
        clear_pixmap(&mut self.scratch);
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        paint(&mut ctx);
        ctx.flush();
        ctx.render_to_pixmap(&mut self.scratch);

        let row_bytes = usize::from(self.width) * 4;
        let src = self.scratch.data_as_u8_slice();
        let dst = self.pixmap.data_as_u8_slice_mut();
        for (d, s) in dst
            .chunks_exact_mut(row_bytes)
            .zip(src.chunks_exact(row_bytes))
        {
            d[start * 4..].copy_from_slice(&s[start * 4..]);
        }
    }

    /// Replace the whole surface with what `paint` draws.
    pub(crate) fn render_full(&mut self, paint: impl FnOnce(&mut vello_cpu::RenderContext)) {
        self.clear();
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        paint(&mut ctx);
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u16, y: u16) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (usize::from(y) * usize::from(self.width) + usize::from(x)) * 4;
        let d = self.pixmap.data_as_u8_slice();
        Some(Rgba8::from_premul([d[i], d[i + 1], d[i + 2], d[i + 3]]))
    }

    /// Every pixel whose color channels are all non-zero, in row-major order.
    pub(crate) fn ink_pixels(&self) -> Vec<InkPixel> {
        let width = usize::from(self.width);
        let mut out = Vec::new();
        for (i, px) in self.pixmap.data_as_u8_slice().chunks_exact(4).enumerate() {
            if px[3] == 0 {
                continue;
            }
            let color = Rgba8::from_premul([px[0], px[1], px[2], px[3]]);
            if !color.is_ink() {
                continue;
            }
            out.push(InkPixel {
                x: (i % width) as i32,
                y: (i / width) as i32,
                color,
            });
        }
        out
    }

    pub(crate) fn snapshot(&self) -> FrameRgba {
        let mut data = Vec::with_capacity(self.pixmap.data_as_u8_slice().len());
        for px in self.pixmap.data_as_u8_slice().chunks_exact(4) {
            let c = Rgba8::from_premul([px[0], px[1], px[2], px[3]]);
            data.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        FrameRgba {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
        }
    }

    fn column_start(&self, x: i32) -> Option<usize> {
        let start = x.max(0) as usize;
        (start < usize::from(self.width)).then_some(start)
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

#[cfg(test)]
#[path = "../../tests/unit/raster/surface.rs"]
mod tests;
