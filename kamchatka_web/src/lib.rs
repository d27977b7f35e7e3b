// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kamchatka_web --heading-base-level=0

//! Browser host for the Kamchatka salmon map's keyboard controls.
//!
//! When targeting `wasm32`, this crate binds [`kamchatka_pan::PanController`]
//! to a Leaflet `L.Map`:
//! - `LeafletView` implements [`kamchatka_view::MapView`] over the live map.
//! - `KeyboardPanner` registers `keydown`/`keyup` on the document and `blur`
//!   on the window, runs the pan loop on `requestAnimationFrame`, and adds the
//!   key legend to the map container. `KeyboardPanner::dispose` undoes all of
//!   it.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn attach(
//!     map: kamchatka_web::LeafletMap,
//! ) -> Result<kamchatka_web::KeyboardPanner, wasm_bindgen::JsValue> {
//!     kamchatka_web::KeyboardPanner::install(map, kamchatka_pan::PanConfig::default())
//! }
//! ```
//!
//! From JavaScript the same is `KeyboardPanner.install(map)`.
//!
//! The DOM value conversions in [`dom_key`] are plain Rust and build on
//! every target.

#![no_std]

extern crate alloc;

mod dom;
#[cfg(target_arch = "wasm32")]
#[allow(unsafe_code, reason = "wasm-bindgen import glue")]
mod leaflet;
#[cfg(target_arch = "wasm32")]
#[allow(unsafe_code, reason = "wasm-bindgen export glue")]
mod panner;

pub use dom::dom_key;
#[cfg(target_arch = "wasm32")]
pub use leaflet::{LeafletLatLng, LeafletMap, LeafletView};
#[cfg(target_arch = "wasm32")]
pub use panner::{KeyboardPanner, LEGEND_CLASS};
