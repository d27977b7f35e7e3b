// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physics configuration for the pan controller.
//!
//! All values are "feel" constants tuned by hand; the defaults reproduce the
//! salmon map's original keyboard behavior. Adjust them with the `with_*`
//! builder methods and check them with [`PanConfig::validate`].
//!
//! ```
//! use kamchatka_pan::{PanConfig, ZoomSensitivity};
//!
//! let config = PanConfig::default()
//!     .with_max_speed(0.02)
//!     .with_sensitivity(ZoomSensitivity::new(2.0, 19.0));
//! assert!(config.validate().is_ok());
//!
//! assert!(PanConfig::default().with_friction(1.0).validate().is_err());
//! ```

use core::fmt;

use kamchatka_view::ViewOptions;

/// Zoom-dependent sensitivity curve.
///
/// Maps a zoom level to a multiplier in `[min_multiplier, max_multiplier]` by
/// linear interpolation between `min_zoom` (full sensitivity) and `max_zoom`
/// (lowest sensitivity). Zoom levels outside the range are clamped, so the
/// multiplier never increases as the zoom increases.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomSensitivity {
    /// Zoom at (and below) which the multiplier is `max_multiplier`.
    pub min_zoom: f64,
    /// Zoom at (and above) which the multiplier is `min_multiplier`.
    pub max_zoom: f64,
    /// Multiplier used when fully zoomed in.
    pub min_multiplier: f64,
    /// Multiplier used when fully zoomed out.
    pub max_multiplier: f64,
}

impl ZoomSensitivity {
    /// Creates a curve over `[min_zoom, max_zoom]` with the default
    /// multiplier range `[0.001, 1.0]`.
    #[must_use]
    pub const fn new(min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            min_zoom,
            max_zoom,
            min_multiplier: 0.001,
            max_multiplier: 1.0,
        }
    }

    /// Sets the multiplier range.
    #[must_use]
    pub const fn with_multipliers(mut self, min_multiplier: f64, max_multiplier: f64) -> Self {
        self.min_multiplier = min_multiplier;
        self.max_multiplier = max_multiplier;
        self
    }

    /// Returns the sensitivity multiplier for `zoom`.
    ///
    /// A `NaN` zoom is treated as fully zoomed in.
    #[must_use]
    pub fn multiplier(&self, zoom: f64) -> f64 {
        if zoom.is_nan() || zoom >= self.max_zoom {
            return self.min_multiplier;
        }
        if zoom <= self.min_zoom {
            return self.max_multiplier;
        }
        let t = (zoom - self.min_zoom) / (self.max_zoom - self.min_zoom);
        self.max_multiplier + (self.min_multiplier - self.max_multiplier) * t
    }

    fn validate(&self) -> Result<(), ConfigError> {
        finite("sensitivity.min_zoom", self.min_zoom)?;
        finite("sensitivity.max_zoom", self.max_zoom)?;
        finite("sensitivity.min_multiplier", self.min_multiplier)?;
        finite("sensitivity.max_multiplier", self.max_multiplier)?;
        if self.min_zoom >= self.max_zoom {
            return Err(ConfigError::DegenerateZoomRange {
                min_zoom: self.min_zoom,
                max_zoom: self.max_zoom,
            });
        }
        positive("sensitivity.min_multiplier", self.min_multiplier)?;
        if self.min_multiplier > self.max_multiplier {
            return Err(ConfigError::InvertedMultipliers {
                min_multiplier: self.min_multiplier,
                max_multiplier: self.max_multiplier,
            });
        }
        Ok(())
    }
}

impl Default for ZoomSensitivity {
    fn default() -> Self {
        Self::new(3.0, 18.0)
    }
}

/// Tuning for [`crate::PanController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanConfig {
    /// Target speed contributed by each held direction, before the zoom
    /// multiplier is applied. Default `0.001`.
    pub base_acceleration: f64,
    /// Speed cap, before the zoom multiplier is applied. Default `0.04`.
    pub max_speed: f64,
    /// Per-frame velocity decay once no direction is held. Default `0.92`.
    pub friction: f64,
    /// Fraction of the gap to the target velocity closed per nominal frame.
    /// Default `0.2`.
    pub smoothing: f64,
    /// Degrees moved per unit of velocity per nominal frame, before the zoom
    /// multiplier is applied. Default `80.0`.
    pub move_distance: f64,
    /// Velocity components below this are treated as zero. Default `1e-4`.
    pub epsilon: f64,
    /// Length of one nominal frame in milliseconds. Default `16.0`.
    pub nominal_frame_ms: f64,
    /// Upper bound for a single step's `delta_time`, in nominal frames.
    /// Default `2.0`.
    pub max_delta_time: f64,
    /// Zoom-dependent sensitivity curve.
    pub sensitivity: ZoomSensitivity,
    /// Animation used for each view update.
    pub animation: ViewOptions,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            base_acceleration: 0.001,
            max_speed: 0.04,
            friction: 0.92,
            smoothing: 0.2,
            move_distance: 80.0,
            epsilon: 1e-4,
            nominal_frame_ms: 16.0,
            max_delta_time: 2.0,
            sensitivity: ZoomSensitivity::default(),
            animation: ViewOptions::PAN_GLIDE,
        }
    }
}

impl PanConfig {
    /// Sets [`PanConfig::base_acceleration`].
    #[must_use]
    pub fn with_base_acceleration(mut self, value: f64) -> Self {
        self.base_acceleration = value;
        self
    }

    /// Sets [`PanConfig::max_speed`].
    #[must_use]
    pub fn with_max_speed(mut self, value: f64) -> Self {
        self.max_speed = value;
        self
    }

    /// Sets [`PanConfig::friction`].
    #[must_use]
    pub fn with_friction(mut self, value: f64) -> Self {
        self.friction = value;
        self
    }

    /// Sets [`PanConfig::smoothing`].
    #[must_use]
    pub fn with_smoothing(mut self, value: f64) -> Self {
        self.smoothing = value;
        self
    }

    /// Sets [`PanConfig::move_distance`].
    #[must_use]
    pub fn with_move_distance(mut self, value: f64) -> Self {
        self.move_distance = value;
        self
    }

    /// Sets [`PanConfig::epsilon`].
    #[must_use]
    pub fn with_epsilon(mut self, value: f64) -> Self {
        self.epsilon = value;
        self
    }

    /// Sets [`PanConfig::nominal_frame_ms`] and [`PanConfig::max_delta_time`].
    #[must_use]
    pub fn with_frame_timing(mut self, nominal_frame_ms: f64, max_delta_time: f64) -> Self {
        self.nominal_frame_ms = nominal_frame_ms;
        self.max_delta_time = max_delta_time;
        self
    }

    /// Sets [`PanConfig::sensitivity`].
    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: ZoomSensitivity) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Sets [`PanConfig::animation`].
    #[must_use]
    pub fn with_animation(mut self, animation: ViewOptions) -> Self {
        self.animation = animation;
        self
    }

    /// Checks that the configuration keeps the controller well behaved.
    ///
    /// Friction must lie in `[0, 1)` so that the loop always winds down, and
    /// the sensitivity curve must be non-increasing over a non-empty zoom
    /// range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("base_acceleration", self.base_acceleration)?;
        if self.base_acceleration < 0.0 {
            return Err(ConfigError::Negative {
                field: "base_acceleration",
                value: self.base_acceleration,
            });
        }
        positive("max_speed", self.max_speed)?;
        finite("friction", self.friction)?;
        if !(0.0..1.0).contains(&self.friction) {
            return Err(ConfigError::OutOfRange {
                field: "friction",
                value: self.friction,
                range: "[0, 1)",
            });
        }
        finite("smoothing", self.smoothing)?;
        if self.smoothing <= 0.0 || self.smoothing > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "smoothing",
                value: self.smoothing,
                range: "(0, 1]",
            });
        }
        finite("move_distance", self.move_distance)?;
        if self.move_distance < 0.0 {
            return Err(ConfigError::Negative {
                field: "move_distance",
                value: self.move_distance,
            });
        }
        positive("epsilon", self.epsilon)?;
        positive("nominal_frame_ms", self.nominal_frame_ms)?;
        positive("max_delta_time", self.max_delta_time)?;
        self.sensitivity.validate()
    }
}

/// Error returned when a [`PanConfig`] would break the controller's invariants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A value is `NaN` or infinite.
    NotFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A value that must be strictly positive is zero or negative.
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A value that must not be negative is negative.
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A value lies outside its allowed interval.
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// The allowed interval, in interval notation.
        range: &'static str,
    },
    /// The sensitivity curve's zoom range is empty.
    DegenerateZoomRange {
        /// Configured lower zoom bound.
        min_zoom: f64,
        /// Configured upper zoom bound.
        max_zoom: f64,
    },
    /// The sensitivity curve would increase with zoom.
    InvertedMultipliers {
        /// Configured zoomed-in multiplier.
        min_multiplier: f64,
        /// Configured zoomed-out multiplier.
        max_multiplier: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite { field } => write!(f, "`{field}` must be finite"),
            Self::NotPositive { field, value } => {
                write!(f, "`{field}` must be positive, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "`{field}` must not be negative, got {value}")
            }
            Self::OutOfRange {
                field,
                value,
                range,
            } => write!(f, "`{field}` must lie in {range}, got {value}"),
            Self::DegenerateZoomRange { min_zoom, max_zoom } => write!(
                f,
                "sensitivity zoom range is empty: min_zoom {min_zoom} >= max_zoom {max_zoom}"
            ),
            Self::InvertedMultipliers {
                min_multiplier,
                max_multiplier,
            } => write!(
                f,
                "sensitivity would grow with zoom: min_multiplier {min_multiplier} > max_multiplier {max_multiplier}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}
