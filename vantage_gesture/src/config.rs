// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom configuration and its validation.

/// Error returned when a zoom configuration cannot produce a sensible clamp.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A limit or the step is NaN or infinite.
    #[error("zoom limits and step must be finite")]
    NonFinite,
    /// The minimum scale is zero or negative.
    #[error("minimum scale must be positive, got {0}")]
    NonPositiveMinScale(f64),
    /// The minimum scale is not strictly below the maximum.
    #[error("minimum scale {min} must be below maximum scale {max}")]
    InvalidScaleRange {
        /// The configured minimum scale.
        min: f64,
        /// The configured maximum scale.
        max: f64,
    },
    /// The wheel step is zero or negative.
    #[error("zoom step must be positive, got {0}")]
    NonPositiveStep(f64),
}

/// Scale limits and wheel sensitivity for zoom gestures.
///
/// A `ZoomConfig` is always valid: `0 < min_scale < max_scale` and
/// `step > 0`. Build one with [`ZoomConfig::new`] or [`resolve_config`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PartialZoomConfig"))]
pub struct ZoomConfig {
    min_scale: f64,
    max_scale: f64,
    step: f64,
}

impl ZoomConfig {
    /// Default lower scale limit.
    pub const DEFAULT_MIN_SCALE: f64 = 0.5;
    /// Default upper scale limit.
    pub const DEFAULT_MAX_SCALE: f64 = 2.0;
    /// Default scale change per unit of wheel delta.
    pub const DEFAULT_STEP: f64 = 0.001;

    /// Validates and builds a configuration.
    pub fn new(min_scale: f64, max_scale: f64, step: f64) -> Result<Self, ConfigError> {
        if !(min_scale.is_finite() && max_scale.is_finite() && step.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if min_scale <= 0.0 {
            return Err(ConfigError::NonPositiveMinScale(min_scale));
        }
        if min_scale >= max_scale {
            return Err(ConfigError::InvalidScaleRange {
                min: min_scale,
                max: max_scale,
            });
        }
        if step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(step));
        }
        Ok(Self {
            min_scale,
            max_scale,
            step,
        })
    }

    /// Lower scale limit.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Upper scale limit.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Scale change per unit of wheel delta.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
            step: Self::DEFAULT_STEP,
        }
    }
}

/// A zoom configuration with any field left out.
///
/// Missing fields take their defaults in [`resolve_config`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PartialZoomConfig {
    /// Lower scale limit.
    pub min_scale: Option<f64>,
    /// Upper scale limit.
    pub max_scale: Option<f64>,
    /// Scale change per unit of wheel delta.
    pub step: Option<f64>,
}

impl From<ZoomConfig> for PartialZoomConfig {
    fn from(config: ZoomConfig) -> Self {
        Self {
            min_scale: Some(config.min_scale),
            max_scale: Some(config.max_scale),
            step: Some(config.step),
        }
    }
}

impl TryFrom<PartialZoomConfig> for ZoomConfig {
    type Error = ConfigError;

    fn try_from(partial: PartialZoomConfig) -> Result<Self, Self::Error> {
        resolve_config(partial)
    }
}

/// Fills the gaps in `partial` from [`ZoomConfig::default`] and validates the result.
///
/// ```
/// use vantage_gesture::{resolve_config, PartialZoomConfig};
///
/// let config = resolve_config(PartialZoomConfig {
///     max_scale: Some(8.0),
///     ..PartialZoomConfig::default()
/// })
/// .unwrap();
/// assert_eq!(config.min_scale(), 0.5);
/// assert_eq!(config.max_scale(), 8.0);
/// assert_eq!(config.step(), 0.001);
/// ```
pub fn resolve_config(partial: PartialZoomConfig) -> Result<ZoomConfig, ConfigError> {
    ZoomConfig::new(
        partial.min_scale.unwrap_or(ZoomConfig::DEFAULT_MIN_SCALE),
        partial.max_scale.unwrap_or(ZoomConfig::DEFAULT_MAX_SCALE),
        partial.step.unwrap_or(ZoomConfig::DEFAULT_STEP),
    )
}
