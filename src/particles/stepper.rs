use rand::Rng;

use crate::config::VanishConfig;
use crate::particles::field::ParticleField;
use crate::raster::surface::RasterSurface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    /// Leftward boundary advance per tick.
    pub sweep_step_px: i32,
    /// Radius decay per tick is `max_decay * U`, `U` uniform in `[0, 1)`.
    pub max_decay: f32,
}

impl StepParams {
    pub fn from_config(cfg: &VanishConfig) -> Self {
        Self {
            sweep_step_px: cfg.sweep_step_px,
            max_decay: cfg.max_decay,
        }
    }
}

impl Default for StepParams {
    fn default() -> Self {
        Self::from_config(&VanishConfig::default())
    }
}

/// Outcome of a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Boundary this tick was evaluated against.
    pub boundary: i32,
    /// Boundary for the following tick.
    pub next_boundary: i32,
    /// Particles at or past the boundary that drifted and decayed.
    pub moved: usize,
    /// Particles removed this tick.
    pub dropped: usize,
    /// Particles left in the field.
    pub remaining: usize,
    /// Particles redrawn onto the surface.
    pub drawn: usize,
}

/// Advances a [`ParticleField`] one animation frame at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameStepper {
    params: StepParams,
}

impl FrameStepper {
    pub fn new(params: StepParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> StepParams {
        self.params
    }

    /// Apply the per-tick rule to every particle without drawing.
    ///
    /// Particles left of `boundary` are untouched. Everything else drifts one pixel on each axis
    /// and shrinks; a particle is removed as soon as its radius is no longer positive.
    pub fn simulate<R: Rng>(
        &self,
        field: &mut ParticleField,
        boundary: i32,
        rng: &mut R,
    ) -> StepReport {
        let before = field.len();
        let mut moved = 0usize;
        let max_decay = self.params.max_decay;

        field.particles_mut().retain_mut(|p| {
            if p.x < boundary {
                return true;
            }
            if p.is_spent() {
                return false;
            }
            p.x += if rng.random_bool(0.5) { 1 } else { -1 };
            p.y += if rng.random_bool(0.5) { 1 } else { -1 };
            p.radius -= max_decay * rng.random::<f32>();
            moved += 1;
            !p.is_spent()
        });

        let remaining = field.len();
        StepReport {
            boundary,
            next_boundary: boundary.saturating_sub(self.params.sweep_step_px),
            moved,
            dropped: before - remaining,
            remaining,
            drawn: 0,
        }
    }

    /// Redraw the region at or right of `boundary`.
    pub(crate) fn draw(
        &self,
        surface: &mut RasterSurface,
        field: &ParticleField,
        boundary: i32,
    ) -> usize {
        surface.clear_from_column(boundary);
        let mut drawn = 0usize;
        surface.draw_from_column(boundary, |ctx| {
            for p in field.iter().filter(|p| p.x >= boundary) {
                let side = f64::from(p.radius);
                let (x, y) = (f64::from(p.x), f64::from(p.y));
                ctx.set_paint(p.color.to_cpu_color());
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(x, y, x + side, y + side));
                drawn += 1;
            }
        });
        drawn
    }

    /// One full tick: simulate, then redraw. An empty field is left alone.
    pub(crate) fn step<R: Rng>(
        &self,
        field: &mut ParticleField,
        boundary: i32,
        rng: &mut R,
        surface: &mut RasterSurface,
    ) -> StepReport {
        if field.is_empty() {
            return StepReport {
                boundary,
                next_boundary: boundary.saturating_sub(self.params.sweep_step_px),
                ..StepReport::default()
            };
        }
        let mut report = self.simulate(field, boundary, rng);
        report.drawn = self.draw(surface, field, boundary);
        report
    }
}

#[cfg(test)]
#[path = "../../tests/unit/particles/stepper.rs"]
mod tests;
