use crate::foundation::core::Rgba8;
use crate::raster::surface::InkPixel;

/// One animated unit derived from a rasterized ink pixel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: i32,
    pub y: i32,
    /// Side of the drawn square; the particle is spent once this reaches zero.
    pub radius: f32,
    pub color: Rgba8,
}

impl Particle {
    pub fn is_spent(&self) -> bool {
        self.radius <= 0.0
    }
}

/// The live particle set, iterated in capture order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn from_pixels(pixels: &[InkPixel], initial_radius: f32) -> Self {
        Self {
            particles: pixels
                .iter()
                .map(|p| Particle {
                    x: p.x,
                    y: p.y,
                    radius: initial_radius,
                    color: p.color,
                })
                .collect(),
        }
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Rightmost occupied column, `0` for an empty field.
    pub fn max_x(&self) -> i32 {
        self.particles.iter().map(|p| p.x).max().unwrap_or(0).max(0)
    }

    pub(crate) fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/field.rs"]
mod tests;
