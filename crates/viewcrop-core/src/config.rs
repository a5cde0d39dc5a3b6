//! Cropper configuration.
//!
//! All fields have defaults, so a host can deserialize a partial object
//! (or nothing at all) and get the stock 400x400 viewport.

use serde::{Deserialize, Serialize};

use crate::render::Sampling;
use crate::transform::ZoomLimits;

/// Default viewport edge length in logical pixels.
pub const DEFAULT_VIEWPORT_SIZE: u32 = 400;

/// Largest viewport edge a cropper will allocate.
pub const MAX_VIEWPORT_SIZE: u32 = 4096;

/// Settings that stay fixed for the lifetime of a [`crate::Cropper`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropperConfig {
    /// Viewport width in pixels.
    pub viewport_width: u32,
    /// Viewport height in pixels.
    pub viewport_height: u32,
    /// Scale change per wheel notch or zoom button press.
    pub zoom_step: f64,
    /// Lowest reachable scale.
    pub min_scale: f64,
    /// Highest scale the zoom-in button will go to. Wheel zoom ignores this.
    pub max_button_scale: f64,
    /// Resampling used when drawing the source into the viewport.
    pub sampling: Sampling,
}

impl Default for CropperConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_SIZE,
            viewport_height: DEFAULT_VIEWPORT_SIZE,
            zoom_step: 0.1,
            min_scale: 0.1,
            max_button_scale: 2.0,
            sampling: Sampling::default(),
        }
    }
}

impl CropperConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace unusable values with their defaults.
    ///
    /// Zero viewport dimensions, non-positive or non-finite zoom values, and a
    /// button cap below the floor are all repaired rather than rejected.
    /// Viewport edges longer than [`MAX_VIEWPORT_SIZE`] are capped.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        self.viewport_width = viewport_edge(self.viewport_width, defaults.viewport_width);
        self.viewport_height = viewport_edge(self.viewport_height, defaults.viewport_height);
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0) {
            self.zoom_step = defaults.zoom_step;
        }
        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            self.min_scale = defaults.min_scale;
        }
        if !(self.max_button_scale.is_finite() && self.max_button_scale >= self.min_scale) {
            self.max_button_scale = defaults.max_button_scale.max(self.min_scale);
        }
        self
    }

    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits {
            step: self.zoom_step,
            min_scale: self.min_scale,
            max_button_scale: self.max_button_scale,
        }
    }
}

fn viewport_edge(requested: u32, default: u32) -> u32 {
    match requested {
        0 => default,
        n if n > MAX_VIEWPORT_SIZE => {
            log::warn!("viewport edge {n} exceeds {MAX_VIEWPORT_SIZE}, capping");
            MAX_VIEWPORT_SIZE
        }
        n => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CropperConfig::new();
        assert_eq!(config.viewport_width, 400);
        assert_eq!(config.viewport_height, 400);
        assert_eq!(config.zoom_limits(), ZoomLimits::default());
        assert_eq!(config.sampling, Sampling::Bilinear);
    }

    #[test]
    fn test_validated_keeps_good_values() {
        let mut config = CropperConfig::default();
        config.viewport_width = 640;
        config.max_button_scale = 4.0;
        assert_eq!(config.validated(), config);
    }

    #[test]
    fn test_validated_repairs_bad_values() {
        let mut config = CropperConfig::default();
        config.viewport_width = 0;
        config.zoom_step = -1.0;
        config.min_scale = f64::NAN;
        config.max_button_scale = 0.01;

        let fixed = config.validated();
        assert_eq!(fixed.viewport_width, 400);
        assert_eq!(fixed.zoom_step, 0.1);
        assert_eq!(fixed.min_scale, 0.1);
        assert_eq!(fixed.max_button_scale, 2.0);
    }

    #[test]
    fn test_validated_caps_oversized_viewport() {
        let config = CropperConfig {
            viewport_width: u32::MAX,
            viewport_height: MAX_VIEWPORT_SIZE + 1,
            ..CropperConfig::default()
        };
        let fixed = config.validated();
        assert_eq!(fixed.viewport_width, MAX_VIEWPORT_SIZE);
        assert_eq!(fixed.viewport_height, MAX_VIEWPORT_SIZE);

        let edge = CropperConfig {
            viewport_width: MAX_VIEWPORT_SIZE,
            ..CropperConfig::default()
        };
        assert_eq!(edge.validated(), edge);
    }

    #[test]
    fn test_max_below_custom_min_is_raised() {
        let mut config = CropperConfig::default();
        config.min_scale = 3.0;
        config.max_button_scale = 1.0;
        assert_eq!(config.validated().max_button_scale, 3.0);
    }
}
