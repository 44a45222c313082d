use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::config::VanishConfig;
use crate::foundation::error::VanishResult;
use crate::particles::field::ParticleField;
use crate::particles::stepper::{FrameStepper, StepParams, StepReport};
use crate::raster::rasterizer::{Rasterizer, TextPlacement};
use crate::raster::surface::{FrameRgba, RasterSurface};
use crate::raster::text::TextPainter;
use crate::session::generate::{GenerationOutcome, Generator, PendingGeneration};

/// Dissolution lifecycle: `Idle → Capturing → Animating → Finalizing → Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Capturing,
    Animating,
    /// Animation done and input cleared; waiting for the generation call to settle.
    Finalizing,
}

/// Keystrokes the prompt input understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Enter,
    Char(char),
    Backspace,
}

/// How the host should present the input this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appearance {
    /// `false` while animating: the raw text is drawn transparent.
    pub text_visible: bool,
    pub canvas_visible: bool,
    pub placeholder_visible: bool,
    pub submit_enabled: bool,
    /// A generation call is in flight.
    pub busy: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameReport {
    /// Frames stepped in the current (or last) session.
    pub frame: u64,
    pub phase: Phase,
    pub boundary: i32,
    pub particles: usize,
    pub drawn: usize,
    pub dropped: usize,
}

/// Owns the raster surface and particle field of one prompt input and drives the
/// capture → animate → finalize sequence, one [`on_frame`](Self::on_frame) call per display
/// refresh.
pub struct DissolveController<P, G, R = StdRng> {
    rasterizer: Rasterizer<P>,
    surface: RasterSurface,
    stepper: FrameStepper,
    rng: R,
    generator: G,
    initial_radius: f32,

    value: String,
    field: ParticleField,
    phase: Phase,
    sweep_origin: i32,
    boundary: i32,
    frame: u64,
    is_animating: bool,
    is_submitting: bool,
    pending: Option<PendingGeneration>,
    outcome: Option<GenerationOutcome>,
}

impl<P: TextPainter, G: Generator> DissolveController<P, G, StdRng> {
    pub fn new(cfg: &VanishConfig, painter: P, generator: G) -> VanishResult<Self> {
        Self::with_rng(cfg, painter, generator, StdRng::from_os_rng())
    }
}

impl<P: TextPainter, G: Generator, R: Rng> DissolveController<P, G, R> {
    pub fn with_rng(cfg: &VanishConfig, painter: P, generator: G, rng: R) -> VanishResult<Self> {
        cfg.validate()?;
        Ok(Self {
            rasterizer: Rasterizer::new(painter, TextPlacement::from_config(cfg)),
            surface: RasterSurface::new(cfg.canvas)?,
            stepper: FrameStepper::new(StepParams::from_config(cfg)),
            rng,
            generator,
            initial_radius: cfg.initial_radius,
            value: String::new(),
            field: ParticleField::default(),
            phase: Phase::Idle,
            sweep_origin: 0,
            boundary: 0,
            frame: 0,
            is_animating: false,
            is_submitting: false,
            pending: None,
            outcome: None,
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn particle_count(&self) -> usize {
        self.field.len()
    }

    pub fn sweep_origin(&self) -> i32 {
        self.sweep_origin
    }

    pub fn boundary(&self) -> i32 {
        self.boundary
    }

    pub fn font_family(&self) -> &str {
        self.rasterizer.painter().family_name()
    }

    /// Current surface contents, straight alpha.
    pub fn frame_rgba(&self) -> FrameRgba {
        self.surface.snapshot()
    }

    pub fn appearance(&self) -> Appearance {
        Appearance {
            text_visible: !self.is_animating,
            canvas_visible: self.is_animating,
            placeholder_visible: self.value.is_empty(),
            submit_enabled: !self.value.is_empty() && !self.is_submitting,
            busy: self.is_submitting,
        }
    }

    /// Replace the input text and re-rasterize it. Ignored while animating.
    pub fn set_value(&mut self, text: impl Into<String>) -> bool {
        if self.is_animating {
            return false;
        }
        let text = text.into();
        if text == self.value {
            return true;
        }
        self.value = text;
        self.capture();
        true
    }

    /// Returns `true` when the key mutated the value or started a session.
    pub fn key_down(&mut self, key: KeyPress) -> bool {
        match key {
            KeyPress::Enter => self.submit(),
            KeyPress::Char(c) => {
                if self.is_animating {
                    return false;
                }
                let mut next = self.value.clone();
                next.push(c);
                self.set_value(next)
            }
            KeyPress::Backspace => {
                if self.is_animating || self.value.is_empty() {
                    return false;
                }
                let mut next = self.value.clone();
                next.pop();
                self.set_value(next)
            }
        }
    }

    pub fn submit_form(&mut self) -> bool {
        self.submit()
    }

    /// Start a dissolution session and the generation call.
    ///
    /// No-op when the trimmed value is empty or a session or submission is already active.
    #[tracing::instrument(skip(self), fields(chars = self.value.chars().count()))]
    pub fn submit(&mut self) -> bool {
        if self.is_animating || self.is_submitting || self.value.trim().is_empty() {
            return false;
        }

        self.phase = Phase::Capturing;
        self.capture();
        self.sweep_origin = self.field.max_x();
        self.boundary = self.sweep_origin;
        self.frame = 0;
        self.is_animating = true;
        self.is_submitting = true;
        self.outcome = None;
        self.pending = Some(PendingGeneration::start(
            &mut self.generator,
            self.value.clone(),
        ));
        self.phase = Phase::Animating;

        tracing::debug!(
            particles = self.field.len(),
            sweep_origin = self.sweep_origin,
            "dissolve started"
        );
        true
    }

    /// Advance one display frame: step the animation and poll the generation call.
    pub fn on_frame(&mut self) -> FrameReport {
        let mut step = StepReport {
            boundary: self.boundary,
            next_boundary: self.boundary,
            remaining: self.field.len(),
            ..StepReport::default()
        };

        if self.phase == Phase::Animating {
            step = self.stepper.step(
                &mut self.field,
                self.boundary,
                &mut self.rng,
                &mut self.surface,
            );
            self.boundary = step.next_boundary;
            self.frame += 1;
            tracing::trace!(
                frame = self.frame,
                boundary = step.boundary,
                remaining = step.remaining,
                dropped = step.dropped,
                "dissolve frame"
            );
            if self.field.is_empty() {
                self.finish_animation();
            }
        }

        self.poll_generation();
        if self.phase == Phase::Finalizing && self.pending.is_none() {
            self.is_submitting = false;
            self.phase = Phase::Idle;
            tracing::debug!(frames = self.frame, "dissolve session finished");
        }

        FrameReport {
            frame: self.frame,
            phase: self.phase,
            boundary: step.boundary,
            particles: self.field.len(),
            drawn: step.drawn,
            dropped: step.dropped,
        }
    }

    /// Take the settled result of the last generation call, if any.
    pub fn take_generation_outcome(&mut self) -> Option<GenerationOutcome> {
        self.outcome.take()
    }

    fn capture(&mut self) {
        self.field = match self.rasterizer.rasterize(&mut self.surface, &self.value) {
            Ok(ink) => ParticleField::from_pixels(&ink, self.initial_radius),
            Err(e) => {
                tracing::warn!(error = %e, "rasterization failed; using an empty particle field");
                ParticleField::default()
            }
        };
    }

    fn finish_animation(&mut self) {
        self.value.clear();
        self.capture();
        self.is_animating = false;
        self.phase = Phase::Finalizing;
        tracing::debug!(frames = self.frame, "dissolve animation converged");
    }

    fn poll_generation(&mut self) {
        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let Some(outcome) = pending.poll_once() else {
            return;
        };
        if let Err(e) = &outcome.result {
            tracing::warn!(error = %e, "generation call failed");
        }
        self.pending = None;
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/controller.rs"]
mod tests;
