// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kamchatka_pan --heading-base-level=0

//! Kamchatka Pan: adaptive keyboard panning for slippy maps.
//!
//! This crate turns held direction keys into smooth, continuous motion of a
//! map view and turns zoom keys into single zoom steps. Motion is modelled as
//! a velocity that eases toward the held directions, is capped in speed, and
//! decays through friction once the keys are released. Every quantity is
//! scaled by a zoom-dependent multiplier so that panning stays controllable
//! when zoomed in close.
//!
//! The crate is headless. Callers are expected to:
//! - Implement [`MapView`] for their map (or use
//!   [`kamchatka_view::SlippyView`]).
//! - Forward keyboard events as `ui_events` keys together with an
//!   [`EventOrigin`] telling whether focus is in a text field.
//! - Drive [`PanController::step`] from their per-frame callback while it
//!   returns [`FrameOutcome::Continue`].
//!
//! ## Example
//!
//! ```rust
//! use kamchatka_pan::{EventOrigin, KeyResponse, PanController, ZoomCommand};
//! use kamchatka_view::{MapView, SlippyView};
//! use ui_events::keyboard::Key;
//!
//! let mut pan = PanController::with_defaults(SlippyView::kamchatka());
//!
//! // Zoom keys act once per press.
//! let q = Key::Character("q".into());
//! assert_eq!(
//!     pan.handle_key_down(&q, EventOrigin::Document),
//!     KeyResponse::Zoomed(ZoomCommand::Out)
//! );
//! assert_eq!(pan.view().zoom(), 5.0);
//!
//! // Typing into a search box never moves the map.
//! let w = Key::Character("w".into());
//! assert_eq!(pan.handle_key_down(&w, EventOrigin::TextInput), KeyResponse::Ignored);
//!
//! // A direction pressed while idle asks the host to start the frame loop.
//! assert!(pan.handle_key_down(&w, EventOrigin::Document).needs_frame());
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: select Kurbo's float backend.
//! - `serde`: derive `Serialize`/`Deserialize` for [`PanConfig`] and
//!   [`ZoomSensitivity`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
mod frame;
pub mod keys;
pub mod legend;

pub use config::{ConfigError, PanConfig, ZoomSensitivity};
pub use controller::{FrameOutcome, KeyResponse, PanController, PanControllerDebugInfo};
pub use frame::FrameClock;
pub use keys::{
    Direction, EventOrigin, HeldKeys, KeyAction, KeyBinding, KeyBindings, ZoomCommand,
};
pub use legend::{Legend, LegendLine, key_label};

pub use kamchatka_view::{LatLng, MapView, ViewOptions};
