//! vanish dissolves the text of a prompt input into drifting particles.
//!
//! The text is rasterized onto a fixed-size CPU surface, every ink pixel becomes a particle, and
//! a boundary sweeping right to left releases particles to drift and fade until nothing is left.
//! A [`DissolveController`] ties the animation to the host's asynchronous generate call:
//!
//! - feed it edits with [`DissolveController::set_value`] or [`DissolveController::key_down`]
//! - submit with Enter or [`DissolveController::submit_form`]
//! - call [`DissolveController::on_frame`] once per display refresh until it is idle again
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod particles;
mod raster;
mod session;

pub use crate::config::{SWEEP_STEP_ENV, VanishConfig, default_placeholders};
pub use crate::foundation::core::{Canvas, Rgba8};
pub use crate::foundation::error::{VanishError, VanishResult};
pub use crate::particles::field::{Particle, ParticleField};
pub use crate::particles::stepper::{FrameStepper, StepParams, StepReport};
pub use crate::raster::surface::{FrameRgba, InkPixel};
pub use crate::raster::text::{BlockTextPainter, FontTextPainter, TextPainter};
pub use crate::session::controller::{Appearance, DissolveController, FrameReport, KeyPress, Phase};
pub use crate::session::driver::{
    FrameScheduler, ImmediateScheduler, PacedScheduler, run_until_idle,
};
pub use crate::session::generate::{GenerateFuture, GenerationOutcome, Generator};
pub use crate::session::placeholder::PlaceholderRotator;

/// Re-exported so hosts can implement [`TextPainter`] against the same render context.
pub use vello_cpu;
