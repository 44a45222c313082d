use std::time::{Duration, Instant};

use crate::config::VanishConfig;
use crate::foundation::error::{VanishError, VanishResult};

/// Cycles hint strings on a fixed period while the page is visible.
///
/// Time is supplied by the caller. Hiding the page drops the running timer; showing it again
/// starts a fresh one, so hidden time is never caught up.
#[derive(Clone, Debug)]
pub struct PlaceholderRotator {
    hints: Vec<String>,
    period: Duration,
    index: usize,
    // Start of the current period; `None` while hidden.
    timer: Option<Instant>,
}

impl PlaceholderRotator {
    /// Start visible, with the first period beginning at `now`.
    pub fn new(hints: Vec<String>, period: Duration, now: Instant) -> VanishResult<Self> {
        if hints.is_empty() {
            return Err(VanishError::config("placeholder list must not be empty"));
        }
        if period.is_zero() {
            return Err(VanishError::config("placeholder period must be > 0"));
        }
        Ok(Self {
            hints,
            period,
            index: 0,
            timer: Some(now),
        })
    }

    pub fn from_config(cfg: &VanishConfig, now: Instant) -> VanishResult<Self> {
        Self::new(cfg.placeholders.clone(), cfg.placeholder_period(), now)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.hints[self.index]
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        match (visible, self.timer) {
            (false, Some(_)) => {
                tracing::trace!(index = self.index, "placeholder timer stopped");
                self.timer = None;
            }
            (true, None) => {
                tracing::trace!(index = self.index, "placeholder timer restarted");
                self.timer = Some(now);
            }
            _ => {}
        }
    }

    /// Advance once per full period elapsed since the timer started; returns the number of
    /// advances.
    pub fn tick(&mut self, now: Instant) -> usize {
        let Some(start) = self.timer else {
            return 0;
        };
        let elapsed = now.saturating_duration_since(start);
        let periods = (elapsed.as_nanos() / self.period.as_nanos()) as usize;
        if periods == 0 {
            return 0;
        }
        self.index = (self.index + periods) % self.hints.len();
        self.timer = Some(start + self.period * periods as u32);
        periods
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/placeholder.rs"]
mod tests;
