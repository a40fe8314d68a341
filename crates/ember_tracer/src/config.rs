//! Render configuration.

use ember_math::EPSILON;
use ember_scene::{RenderOverrides, SamplingMode};
use thiserror::Error;

/// Hard upper bound on `max_depth`.
///
/// Keeps per-sample cost bounded even for hand-edited scene files.
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// Errors from an invalid render configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("epsilon must be positive and finite, got {0}")]
    InvalidEpsilon(f32),

    #[error("samples_per_pixel must be at least 1")]
    ZeroSamples,

    #[error("max_depth {depth} exceeds the limit of {limit}")]
    DepthTooLarge { depth: u32, limit: u32 },

    #[error("background radiance must be non-negative and finite, got {0}")]
    InvalidBackground(f32),
}

/// Result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Samples per pixel, averaged by the per-pixel driver
    pub samples_per_pixel: u32,
    /// Number of diffuse bounces before a path is cut off
    pub max_depth: u32,
    /// Self-intersection guard for hit distances and bounce origins
    pub epsilon: f32,
    /// Radiance returned when a ray escapes the scene
    pub background: f32,
    /// Distribution used for diffuse bounce directions
    pub sampling: SamplingMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 16,
            max_depth: 4,
            epsilon: EPSILON,
            background: 0.0,
            sampling: SamplingMode::Uniform,
        }
    }
}

impl RenderConfig {
    /// Overwrite every field the overrides set.
    pub fn apply(&mut self, overrides: &RenderOverrides) {
        if let Some(spp) = overrides.samples_per_pixel {
            self.samples_per_pixel = spp;
        }
        if let Some(depth) = overrides.max_depth {
            self.max_depth = depth;
        }
        if let Some(epsilon) = overrides.epsilon {
            self.epsilon = epsilon;
        }
        if let Some(background) = overrides.background {
            self.background = background;
        }
        if let Some(sampling) = overrides.sampling {
            self.sampling = sampling;
        }
    }

    /// Check the configuration before rendering.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::ZeroSamples);
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ConfigError::DepthTooLarge {
                depth: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        if !(self.background.is_finite() && self.background >= 0.0) {
            return Err(ConfigError::InvalidBackground(self.background));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RenderConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.epsilon, EPSILON);
        assert_eq!(config.background, 0.0);
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = RenderConfig::default();
        config.apply(&RenderOverrides {
            samples_per_pixel: Some(64),
            max_depth: None,
            epsilon: Some(0.01),
            background: Some(0.25),
            sampling: Some(SamplingMode::Cosine),
        });

        assert_eq!(config.samples_per_pixel, 64);
        assert_eq!(config.max_depth, RenderConfig::default().max_depth);
        assert_eq!(config.epsilon, 0.01);
        assert_eq!(config.background, 0.25);
        assert_eq!(config.sampling, SamplingMode::Cosine);
    }

    #[test]
    fn test_validate_rejects() {
        let base = RenderConfig::default();

        let config = RenderConfig { epsilon: 0.0, ..base };
        assert_eq!(config.validate(), Err(ConfigError::InvalidEpsilon(0.0)));

        let config = RenderConfig { samples_per_pixel: 0, ..base };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSamples));

        let config = RenderConfig { max_depth: MAX_DEPTH_LIMIT + 1, ..base };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DepthTooLarge {
                depth: MAX_DEPTH_LIMIT + 1,
                limit: MAX_DEPTH_LIMIT,
            })
        );

        let config = RenderConfig { background: -1.0, ..base };
        assert_eq!(config.validate(), Err(ConfigError::InvalidBackground(-1.0)));
    }

    #[test]
    fn test_zero_depth_is_valid() {
        let config = RenderConfig { max_depth: 0, ..RenderConfig::default() };
        assert!(config.validate().is_ok());
    }
}
