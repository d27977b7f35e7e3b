// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::geo::{LatLng, LatLngBounds};
use crate::modes::{BoundsMode, ViewOptions};
use crate::view::MapView;

/// Initial center of the salmon map: the middle of the Kamchatka peninsula.
pub const KAMCHATKA_CENTER: LatLng = LatLng::new(56.0, 159.0);

/// Initial zoom of the salmon map.
pub const KAMCHATKA_ZOOM: f64 = 6.0;

/// Region the salmon map is allowed to scroll within.
pub const KAMCHATKA_BOUNDS: LatLngBounds = LatLngBounds {
    south_west: LatLng::new(50.0, 150.0),
    north_east: LatLng::new(65.0, 175.0),
};

/// Headless Leaflet-style map view.
///
/// `SlippyView` tracks a geographic center and a (possibly fractional) zoom
/// level. It can be used to:
/// - Stand in for a browser map in tests and native tools.
/// - Step the zoom in and out by a fixed delta, clamped to zoom limits.
/// - Keep the center inside optional max bounds.
///
/// Every effective change bumps [`SlippyView::revision`], and the options of
/// the last [`MapView::set_view`] call are kept for inspection.
#[derive(Clone, Debug)]
pub struct SlippyView {
    center: LatLng,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_delta: f64,
    max_bounds: Option<LatLngBounds>,
    bounds_mode: BoundsMode,
    last_options: Option<ViewOptions>,
    revision: u64,
}

impl SlippyView {
    /// Creates a view at `center` and `zoom` with default limits.
    ///
    /// - Zoom is clamped to the range `[3, 18]` by default.
    /// - Zoom steps by `1.0`.
    /// - There are no max bounds.
    #[must_use]
    pub fn new(center: LatLng, zoom: f64) -> Self {
        let mut view = Self {
            center,
            zoom,
            min_zoom: 3.0,
            max_zoom: 18.0,
            zoom_delta: 1.0,
            max_bounds: None,
            bounds_mode: BoundsMode::default(),
            last_options: None,
            revision: 0,
        };
        view.zoom = view.clamp_zoom(zoom);
        view
    }

    /// Creates the salmon map's initial view of Kamchatka.
    #[must_use]
    pub fn kamchatka() -> Self {
        let mut view = Self::new(KAMCHATKA_CENTER, KAMCHATKA_ZOOM);
        view.set_max_bounds(Some(KAMCHATKA_BOUNDS));
        view
    }

    /// Returns the minimum zoom level.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Returns the maximum zoom level.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the minimum and maximum zoom levels.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current zoom is clamped into the new range. Non-finite limits are
    /// ignored.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        if !min_zoom.is_finite() || !max_zoom.is_finite() {
            return;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// Returns the step used by [`MapView::zoom_in`] and [`MapView::zoom_out`].
    #[must_use]
    pub fn zoom_delta(&self) -> f64 {
        self.zoom_delta
    }

    /// Sets the zoom step. Non-positive values are ignored.
    pub fn set_zoom_delta(&mut self, delta: f64) {
        if delta > 0.0 {
            self.zoom_delta = delta;
        }
    }

    /// Sets the zoom level, clamping it into the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        let clamped = self.clamp_zoom(zoom);
        if (self.zoom - clamped).abs() < f64::EPSILON {
            return;
        }
        self.zoom = clamped;
        self.revision += 1;
    }

    /// Sets optional max bounds for the view center.
    pub fn set_max_bounds(&mut self, bounds: Option<LatLngBounds>) {
        if self.max_bounds == bounds {
            return;
        }
        self.max_bounds = bounds;
        self.move_center(self.center);
    }

    /// Returns the current max bounds, if any.
    #[must_use]
    pub fn max_bounds(&self) -> Option<LatLngBounds> {
        self.max_bounds
    }

    /// Sets the clamp mode for the center relative to max bounds.
    pub fn set_bounds_mode(&mut self, mode: BoundsMode) {
        if self.bounds_mode != mode {
            self.bounds_mode = mode;
            self.move_center(self.center);
        }
    }

    /// Returns the current bounds mode.
    #[must_use]
    pub fn bounds_mode(&self) -> BoundsMode {
        self.bounds_mode
    }

    /// Options passed to the most recent [`MapView::set_view`] call.
    #[must_use]
    pub fn last_options(&self) -> Option<ViewOptions> {
        self.last_options
    }

    /// Counter bumped on every change of center or zoom.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SlippyViewDebugInfo {
        SlippyViewDebugInfo {
            center: self.center,
            zoom: self.zoom,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            zoom_delta: self.zoom_delta,
            max_bounds: self.max_bounds,
            bounds_mode: self.bounds_mode,
            revision: self.revision,
        }
    }

    /// A `NaN` zoom lands on `min_zoom`.
    fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }

    fn move_center(&mut self, center: LatLng) {
        let center = match (self.bounds_mode, self.max_bounds) {
            (BoundsMode::ClampCenter, Some(bounds)) => bounds.clamp(center),
            _ => center,
        };
        if center != self.center {
            self.center = center;
            self.revision += 1;
        }
    }
}

impl Default for SlippyView {
    fn default() -> Self {
        Self::kamchatka()
    }
}

impl MapView for SlippyView {
    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn center(&self) -> LatLng {
        self.center
    }

    fn set_view(&mut self, center: LatLng, zoom: f64, options: ViewOptions) {
        self.last_options = Some(options);
        self.set_zoom(zoom);
        self.move_center(center);
    }

    fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + self.zoom_delta);
    }

    fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - self.zoom_delta);
    }
}

/// Debug snapshot of a [`SlippyView`] state.
#[derive(Clone, Copy, Debug)]
pub struct SlippyViewDebugInfo {
    /// Current center.
    pub center: LatLng,
    /// Current zoom level.
    pub zoom: f64,
    /// Minimum zoom level.
    pub min_zoom: f64,
    /// Maximum zoom level.
    pub max_zoom: f64,
    /// Step used by zoom in / zoom out.
    pub zoom_delta: f64,
    /// Optional max bounds for the center.
    pub max_bounds: Option<LatLngBounds>,
    /// Clamp mode for the center.
    pub bounds_mode: BoundsMode,
    /// Change counter.
    pub revision: u64,
}

#[cfg(test)]
mod tests {
    use super::{KAMCHATKA_BOUNDS, KAMCHATKA_CENTER, SlippyView};
    use crate::{BoundsMode, LatLng, MapView, ViewOptions};

    #[test]
    fn kamchatka_view_starts_at_peninsula() {
        let view = SlippyView::kamchatka();
        assert_eq!(view.center(), KAMCHATKA_CENTER);
        assert_eq!(view.zoom(), 6.0);
        assert_eq!(view.max_bounds(), Some(KAMCHATKA_BOUNDS));
        assert_eq!(view.revision(), 0);
    }

    #[test]
    fn zoom_steps_are_clamped_to_limits() {
        let mut view = SlippyView::new(LatLng::new(0.0, 0.0), 17.0);
        view.zoom_in();
        assert_eq!(view.zoom(), 18.0);
        view.zoom_in();
        assert_eq!(view.zoom(), 18.0);

        view.set_zoom(3.5);
        view.zoom_out();
        assert_eq!(view.zoom(), 3.0);
        view.zoom_out();
        assert_eq!(view.zoom(), 3.0);
    }

    #[test]
    fn zoom_limits_are_normalized() {
        let mut view = SlippyView::new(LatLng::new(0.0, 0.0), 10.0);
        view.set_zoom_limits(8.0, 4.0);
        assert_eq!(view.min_zoom(), 4.0);
        assert_eq!(view.max_zoom(), 8.0);
        assert_eq!(view.zoom(), 8.0);
    }

    #[test]
    fn non_finite_zoom_input_is_contained() {
        let mut view = SlippyView::new(LatLng::new(0.0, 0.0), 10.0);
        view.set_zoom_limits(f64::NAN, 12.0);
        view.set_zoom_limits(4.0, f64::INFINITY);
        assert_eq!(view.min_zoom(), 3.0);
        assert_eq!(view.max_zoom(), 18.0);

        view.set_zoom(f64::NAN);
        assert_eq!(view.zoom(), 3.0);
        view.zoom_in();
        assert_eq!(view.zoom(), 4.0);

        let view = SlippyView::new(LatLng::new(0.0, 0.0), f64::NAN);
        assert_eq!(view.zoom(), 3.0);
    }

    #[test]
    fn set_view_clamps_center_and_records_options() {
        let mut view = SlippyView::kamchatka();
        view.set_view(LatLng::new(80.0, 159.0), 6.0, ViewOptions::PAN_GLIDE);
        assert_eq!(view.center(), LatLng::new(65.0, 159.0));
        assert_eq!(view.last_options(), Some(ViewOptions::PAN_GLIDE));
        assert_eq!(view.revision(), 1);

        // Same position again is not a change.
        view.set_view(LatLng::new(80.0, 159.0), 6.0, ViewOptions::INSTANT);
        assert_eq!(view.revision(), 1);
        assert_eq!(view.last_options(), Some(ViewOptions::INSTANT));
    }

    #[test]
    fn bounds_mode_none_lets_center_leave_bounds() {
        let mut view = SlippyView::kamchatka();
        view.set_bounds_mode(BoundsMode::None);
        view.set_view(LatLng::new(80.0, 100.0), 6.0, ViewOptions::INSTANT);
        assert_eq!(view.center(), LatLng::new(80.0, 100.0));

        // Switching clamping back on pulls the center inside again.
        view.set_bounds_mode(BoundsMode::ClampCenter);
        assert_eq!(view.center(), LatLng::new(65.0, 150.0));
    }

    #[test]
    fn zoom_delta_rejects_non_positive_steps() {
        let mut view = SlippyView::new(LatLng::new(0.0, 0.0), 6.0);
        view.set_zoom_delta(0.5);
        view.zoom_in();
        assert_eq!(view.zoom(), 6.5);
        view.set_zoom_delta(0.0);
        assert_eq!(view.zoom_delta(), 0.5);

        let info = view.debug_info();
        assert_eq!(info.zoom, 6.5);
        assert!(info.min_zoom <= info.max_zoom);
    }
}
