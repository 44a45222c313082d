//! Tunables for rasterization, the sweep simulation and the placeholder cycle.
//!
//! Every field has a default matching the stock prompt control, so a config file only needs to
//! name the values it overrides.

use std::{path::Path, time::Duration};

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{VanishError, VanishResult};

/// Environment override for [`VanishConfig::sweep_step_px`].
pub const SWEEP_STEP_ENV: &str = "VANISH_SWEEP_STEP_PX";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VanishConfig {
    /// Offscreen surface size.
    pub canvas: Canvas,
    /// Pen position of the first glyph; `y` is the baseline.
    pub text_origin: [f64; 2],
    /// Computed font size of the live input, in px.
    pub input_font_size_px: f32,
    /// Rasterized size is `input_font_size_px * font_scale`.
    pub font_scale: f32,
    /// Foreground color used to rasterize text.
    pub ink: Rgba8,
    /// Leftward advance of the sweep boundary per frame.
    pub sweep_step_px: i32,
    /// Upper bound on per-frame radius decay.
    pub max_decay: f32,
    /// Radius of a freshly captured particle.
    pub initial_radius: f32,
    /// Placeholder rotation period.
    pub placeholder_period_ms: u64,
    pub placeholders: Vec<String>,
}

impl Default for VanishConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 800,
                height: 800,
            },
            text_origin: [16.0, 40.0],
            input_font_size_px: 14.0,
            font_scale: 2.0,
            ink: Rgba8::WHITE,
            sweep_step_px: 8,
            max_decay: 0.05,
            initial_radius: 1.0,
            placeholder_period_ms: 5000,
            placeholders: default_placeholders(),
        }
    }
}

pub fn default_placeholders() -> Vec<String> {
    [
        "Generate a mind map about climate change",
        "Create an outline for a sci-fi novel",
        "Brainstorm ideas for a new app",
        "Develop a project management strategy",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl VanishConfig {
    pub fn from_json_str(s: &str) -> VanishResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| VanishError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> VanishResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .map_err(|e| VanishError::config(format!("read '{}': {e}", path.display())))?;
        Self::from_json_str(&s)
    }

    /// Apply `VANISH_*` environment overrides; unparsable or non-positive values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(step) = std::env::var(SWEEP_STEP_ENV)
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .filter(|&n| n > 0)
        {
            self.sweep_step_px = step;
        }
        self
    }

    pub fn validate(&self) -> VanishResult<()> {
        self.canvas.as_u16()?;
        if self.sweep_step_px <= 0 {
            return Err(VanishError::config("sweep_step_px must be > 0"));
        }
        if !self.input_font_size_px.is_finite() || self.input_font_size_px <= 0.0 {
            return Err(VanishError::config(
                "input_font_size_px must be finite and > 0",
            ));
        }
        if !self.font_scale.is_finite() || self.font_scale <= 0.0 {
            return Err(VanishError::config("font_scale must be finite and > 0"));
        }
        if !self.max_decay.is_finite() || self.max_decay <= 0.0 {
            return Err(VanishError::config("max_decay must be finite and > 0"));
        }
        if !self.initial_radius.is_finite() || self.initial_radius <= 0.0 {
            return Err(VanishError::config("initial_radius must be finite and > 0"));
        }
        if !self.ink.is_ink() {
            return Err(VanishError::config("ink must have non-zero r, g, b"));
        }
        if self.text_origin.iter().any(|v| !v.is_finite()) {
            return Err(VanishError::config("text_origin must be finite"));
        }
        if self.placeholder_period_ms == 0 {
            return Err(VanishError::config("placeholder_period_ms must be > 0"));
        }
        if self.placeholders.is_empty() {
            return Err(VanishError::config("placeholders must not be empty"));
        }
        Ok(())
    }

    pub fn raster_font_size_px(&self) -> f32 {
        self.input_font_size_px * self.font_scale
    }

    pub fn placeholder_period(&self) -> Duration {
        Duration::from_millis(self.placeholder_period_ms)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
