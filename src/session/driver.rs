use std::time::{Duration, Instant};

use rand::Rng;

use crate::raster::text::TextPainter;
use crate::session::controller::{DissolveController, FrameReport};
use crate::session::generate::Generator;

/// Per-frame scheduling primitive: returns once the next display frame is due.
pub trait FrameScheduler {
    fn wait_for_frame(&mut self);
}

/// Schedules frames back to back, for offline rendering and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

impl FrameScheduler for ImmediateScheduler {
    fn wait_for_frame(&mut self) {}
}

/// Offline stand-in for a host vsync callback: sleeps until the next refresh deadline.
///
/// Hosts with a display refresh signal should implement [`FrameScheduler`] on it instead. A late
/// frame resets the cadence rather than bursting.
#[derive(Clone, Debug)]
pub struct PacedScheduler {
    interval: Duration,
    next: Option<Instant>,
}

impl PacedScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    pub fn from_hz(hz: u32) -> Self {
        Self::new(Duration::from_secs(1) / hz.max(1))
    }
}

impl FrameScheduler for PacedScheduler {
    fn wait_for_frame(&mut self) {
        let now = Instant::now();
        let deadline = self.next.unwrap_or(now);
        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next = Some(deadline + self.interval);
        } else {
            self.next = Some(now + self.interval);
        }
    }
}

/// Drive `controller` one frame per scheduled tick until it returns to idle.
///
/// There is no frame cap: a generation call that never settles keeps this loop running.
pub fn run_until_idle<P, G, R, S>(
    controller: &mut DissolveController<P, G, R>,
    scheduler: &mut S,
    mut on_frame: impl FnMut(&DissolveController<P, G, R>, &FrameReport),
) -> u64
where
    P: TextPainter,
    G: Generator,
    R: Rng,
    S: FrameScheduler + ?Sized,
{
    let mut frames = 0u64;
    while !controller.is_idle() {
        scheduler.wait_for_frame();
        let report = controller.on_frame();
        frames += 1;
        on_frame(controller, &report);
    }
    frames
}

#[cfg(test)]
#[path = "../../tests/unit/session/driver.rs"]
mod tests;
