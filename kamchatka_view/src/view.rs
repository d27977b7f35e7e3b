// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::geo::LatLng;
use crate::modes::ViewOptions;

/// A map view that can be queried and moved.
///
/// This is the capability a controller needs from the map: read the current
/// zoom and center, move the center (optionally animated), and step the zoom.
/// [`crate::SlippyView`] is an in-memory implementation; browser hosts
/// implement it over a live map object.
///
/// The trait is implemented for `&mut T`, so a controller may either own its
/// view or borrow one.
pub trait MapView {
    /// Returns the current zoom level.
    fn zoom(&self) -> f64;

    /// Returns the current view center.
    fn center(&self) -> LatLng;

    /// Moves the view to `center` at `zoom`.
    fn set_view(&mut self, center: LatLng, zoom: f64, options: ViewOptions);

    /// Zooms in by one zoom step.
    fn zoom_in(&mut self);

    /// Zooms out by one zoom step.
    fn zoom_out(&mut self);
}

impl<T: MapView + ?Sized> MapView for &mut T {
    fn zoom(&self) -> f64 {
        (**self).zoom()
    }

    fn center(&self) -> LatLng {
        (**self).center()
    }

    fn set_view(&mut self, center: LatLng, zoom: f64, options: ViewOptions) {
        (**self).set_view(center, zoom, options);
    }

    fn zoom_in(&mut self) {
        (**self).zoom_in();
    }

    fn zoom_out(&mut self) {
        (**self).zoom_out();
    }
}
