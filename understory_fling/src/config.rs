// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-surface fling configuration.
//!
//! A [`FlingConfig`] is fixed for the lifetime of an attached surface. It is
//! validated once, when the surface is attached, and never changes after that.
//!
//! ```
//! use understory_fling::{FlingConfig, MinTravel};
//!
//! let config = FlingConfig::default()
//!     .with_threshold(0.5)
//!     .with_min_travel(MinTravel::x(40.0));
//!
//! assert_eq!(config.threshold(), 0.5);
//! assert_eq!(config.min_travel().x, Some(40.0));
//! assert!(config.validate().is_ok());
//! ```

use core::fmt;

/// Drag speed, in pixels per millisecond, that maps to 100% power by default.
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// One of the two screen axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Per-axis minimum displacement, in pixels, below which a gesture is dropped.
///
/// Axes are independent: an axis left as `None` is never gated.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MinTravel {
    /// Minimum horizontal displacement.
    pub x: Option<f64>,
    /// Minimum vertical displacement.
    pub y: Option<f64>,
}

impl MinTravel {
    /// Gate on horizontal displacement only.
    #[must_use]
    pub fn x(min: f64) -> Self {
        Self {
            x: Some(min),
            y: None,
        }
    }

    /// Gate on vertical displacement only.
    #[must_use]
    pub fn y(min: f64) -> Self {
        Self {
            x: None,
            y: Some(min),
        }
    }

    /// Gate on both axes.
    #[must_use]
    pub fn both(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
        }
    }

    /// Returns the configured minimum for `axis`, if any.
    #[must_use]
    pub fn get(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns `true` if neither axis is gated.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

/// Fling recognition settings for one attached surface.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlingConfig {
    threshold: f64,
    min_travel: MinTravel,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_travel: MinTravel::default(),
        }
    }
}

impl FlingConfig {
    /// Creates a configuration with the default threshold and no travel gating.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the drag speed, in pixels per millisecond, that maps to 100% power.
    ///
    /// A threshold of `0.0` nullifies every gesture's power.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the per-axis minimum travel.
    #[must_use]
    pub fn with_min_travel(mut self, min_travel: MinTravel) -> Self {
        self.min_travel = min_travel;
        self
    }

    /// Returns the configured threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the configured minimum travel.
    #[must_use]
    pub fn min_travel(&self) -> MinTravel {
        self.min_travel
    }

    /// Checks that every configured value is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        for axis in [Axis::X, Axis::Y] {
            if let Some(value) = self.min_travel.get(axis) {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidMinTravel { axis, value });
                }
            }
        }
        Ok(())
    }
}

/// Error returned when a [`FlingConfig`] is rejected at attach time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The threshold was negative, infinite, or NaN.
    InvalidThreshold(f64),
    /// A minimum travel value was negative, infinite, or NaN.
    InvalidMinTravel {
        /// The offending axis.
        axis: Axis,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidThreshold(threshold) => write!(
                f,
                "fling threshold must be finite and non-negative, got {threshold}"
            ),
            Self::InvalidMinTravel { axis, value } => write!(
                f,
                "minimum {axis} travel must be finite and non-negative, got {value}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
