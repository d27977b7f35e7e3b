// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for the view center relative to optional max bounds.
///
/// This enum is consulted by [`crate::SlippyView::set_view`] and by
/// [`crate::SlippyView::set_max_bounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundsMode {
    /// Do not apply any clamping; the center may move freely.
    None,
    /// Clamp the center so that it never leaves the max bounds.
    #[default]
    ClampCenter,
}

/// Animation options for a view change.
///
/// These mirror the options accepted by Leaflet's `setView`. Hosts without
/// animation support are free to apply the change immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewOptions {
    /// Whether the change should be animated.
    pub animate: bool,
    /// Animation duration in seconds.
    pub duration: f64,
    /// Easing curvature; `1.0` is linear.
    pub ease_linearity: f64,
    /// Suppress the "move start" notification for this change.
    pub no_move_start: bool,
}

impl ViewOptions {
    /// Options for an instant, non-animated change.
    pub const INSTANT: Self = Self {
        animate: false,
        duration: 0.0,
        ease_linearity: 1.0,
        no_move_start: false,
    };

    /// Short linear glide used for continuous keyboard panning.
    ///
    /// `0.1` seconds, linear easing, no "move start" notification.
    pub const PAN_GLIDE: Self = Self {
        animate: true,
        duration: 0.1,
        ease_linearity: 1.0,
        no_move_start: true,
    };
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::PAN_GLIDE
    }
}
