use crate::foundation::error::{VanishError, VanishResult};

pub use kurbo::{Affine, Vec2};

/// Raster surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Dimensions narrowed to the `u16` range the CPU rasterizer accepts.
    pub fn as_u16(self) -> VanishResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| VanishError::raster("surface width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| VanishError::raster("surface height exceeds u16"))?;
        if w == 0 || h == 0 {
            return Err(VanishError::raster("surface dimensions must be non-zero"));
        }
        Ok((w, h))
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Rendered glyph ink: every color channel is non-zero.
    pub fn is_ink(self) -> bool {
        self.r != 0 && self.g != 0 && self.b != 0
    }

    /// Recover straight alpha from a premultiplied RGBA8 pixel.
    pub fn from_premul(px: [u8; 4]) -> Self {
        let a = px[3];
        if a == 0 {
            return Self::TRANSPARENT;
        }
        let unpremul = |c: u8| -> u8 {
            let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
            v.min(255) as u8
        };
        Self::new(unpremul(px[0]), unpremul(px[1]), unpremul(px[2]), a)
    }

    /// CSS-style `rgba(r, g, b, a)` string with the raw alpha byte.
    pub fn css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }

    pub(crate) fn to_cpu_color(self) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
