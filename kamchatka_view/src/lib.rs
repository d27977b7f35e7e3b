// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kamchatka_view --heading-base-level=0

//! Kamchatka View: geographic map-view primitives.
//!
//! This crate provides the small vocabulary shared by the salmon map's
//! controllers and hosts:
//! - [`LatLng`] / [`LatLngBounds`] geographic coordinates.
//! - [`ViewOptions`] describing how a view change is animated.
//! - The [`MapView`] trait: the capability to read zoom/center, move the
//!   center and step the zoom.
//! - [`SlippyView`], a headless Leaflet-style implementation of [`MapView`].
//!
//! It does **not** render tiles or own any layers. Browser hosts implement
//! [`MapView`] over their live map object; tests and native tools use
//! [`SlippyView`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kamchatka_view::{LatLng, MapView, SlippyView, ViewOptions};
//!
//! let mut view = SlippyView::kamchatka();
//! assert_eq!(view.zoom(), 6.0);
//!
//! view.zoom_in();
//! assert_eq!(view.zoom(), 7.0);
//!
//! let north = view.center().offset(0.5, 0.0);
//! view.set_view(north, view.zoom(), ViewOptions::PAN_GLIDE);
//! assert_eq!(view.center(), LatLng::new(56.5, 159.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod geo;
mod modes;
mod slippy;
mod view;

pub use geo::{LatLng, LatLngBounds};
pub use modes::{BoundsMode, ViewOptions};
pub use slippy::{
    KAMCHATKA_BOUNDS, KAMCHATKA_CENTER, KAMCHATKA_ZOOM, SlippyView, SlippyViewDebugInfo,
};
pub use view::MapView;
