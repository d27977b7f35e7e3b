// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The adaptive pan controller.
//!
//! ## Usage
//!
//! 1) Build a [`PanController`] around a [`MapView`].
//! 2) Forward key-down/key-up events with their [`EventOrigin`].
//! 3) When a response says [`KeyResponse::needs_frame`], request a frame from
//!    the host and call [`PanController::step`] with the frame timestamp.
//! 4) Keep requesting frames while `step` returns [`FrameOutcome::Continue`].
//! 5) Call [`PanController::dispose`] on teardown.
//!
//! ## Minimal example
//!
//! ```
//! use kamchatka_pan::{EventOrigin, FrameOutcome, KeyResponse, PanController};
//! use kamchatka_view::{MapView, SlippyView};
//! use ui_events::keyboard::{Key, NamedKey};
//!
//! let mut pan = PanController::with_defaults(SlippyView::kamchatka());
//! let right = Key::Named(NamedKey::ArrowRight);
//!
//! assert_eq!(pan.handle_key_down(&right, EventOrigin::Document), KeyResponse::StartLoop);
//! let start = pan.view().center();
//!
//! let mut now = 0.0;
//! for _ in 0..30 {
//!     assert_eq!(pan.step(now), FrameOutcome::Continue);
//!     now += 16.0;
//! }
//! assert!(pan.view().center().lng > start.lng);
//!
//! let _ = pan.handle_key_up(&right, EventOrigin::Document);
//! while pan.step(now) == FrameOutcome::Continue {
//!     now += 16.0;
//! }
//! assert!(!pan.is_panning());
//! ```

use kamchatka_view::MapView;
use kurbo::Vec2;
use ui_events::keyboard::{Key, KeyboardEvent};

use crate::config::{ConfigError, PanConfig};
use crate::frame::FrameClock;
use crate::keys::{EventOrigin, HeldKeys, KeyAction, KeyBindings, ZoomCommand};
use crate::legend::Legend;

/// What handling a keyboard event did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum KeyResponse {
    /// The event was not for us: unmapped key, text input, auto-repeat of a
    /// zoom key, or a disposed controller.
    Ignored,
    /// Key state changed; no new work for the host.
    Updated,
    /// A direction was pressed while idle. The host must schedule the first
    /// frame of the pan loop.
    StartLoop,
    /// A zoom command was sent to the view.
    Zoomed(ZoomCommand),
}

impl KeyResponse {
    /// Returns `true` if the host has to start driving frames.
    #[must_use]
    pub fn needs_frame(self) -> bool {
        self == Self::StartLoop
    }

    /// Returns `true` unless the event was ignored.
    #[must_use]
    pub fn is_handled(self) -> bool {
        self != Self::Ignored
    }
}

/// Result of a single frame step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum FrameOutcome {
    /// The loop is still running; schedule another frame.
    Continue,
    /// The loop is idle; do not schedule further frames.
    Stopped,
}

impl FrameOutcome {
    /// Returns `true` for [`FrameOutcome::Continue`].
    #[must_use]
    pub fn is_continue(self) -> bool {
        self == Self::Continue
    }
}

/// Velocity-based keyboard panning with zoom-aware sensitivity.
///
/// The controller owns its key state, velocity and loop flag, plus the view
/// it moves. Each frame it eases the velocity toward the sum of held
/// directions, caps the speed, moves the view center and, once all
/// directions are released, lets friction bring the motion to rest. All
/// three of acceleration, speed cap and move distance scale with the same
/// zoom multiplier, so motion feels the same at every zoom, only smaller.
///
/// At most one loop runs at a time: [`KeyResponse::StartLoop`] is returned
/// only for a direction pressed while idle, and the loop ends only when
/// [`PanController::step`] returns [`FrameOutcome::Stopped`].
#[derive(Debug)]
pub struct PanController<V: MapView> {
    view: V,
    config: PanConfig,
    bindings: KeyBindings,
    held: HeldKeys,
    velocity: Vec2,
    panning: bool,
    clock: FrameClock,
    disposed: bool,
}

impl<V: MapView> PanController<V> {
    /// Creates a controller for `view` after validating `config`.
    pub fn new(view: V, config: PanConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new_unchecked(view, config))
    }

    /// Creates a controller for `view` with the default tuning and bindings.
    #[must_use]
    pub fn with_defaults(view: V) -> Self {
        Self::new_unchecked(view, PanConfig::default())
    }

    fn new_unchecked(view: V, config: PanConfig) -> Self {
        Self {
            view,
            clock: FrameClock::new(config.nominal_frame_ms, config.max_delta_time),
            config,
            bindings: KeyBindings::default(),
            held: HeldKeys::new(),
            velocity: Vec2::ZERO,
            panning: false,
            disposed: false,
        }
    }

    /// Replaces the key bindings.
    #[must_use]
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Returns the tuning in use.
    #[must_use]
    pub fn config(&self) -> &PanConfig {
        &self.config
    }

    /// Returns the key bindings in use.
    #[must_use]
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Builds the legend for the current bindings.
    #[must_use]
    pub fn legend(&self) -> Legend {
        Legend::from_bindings(&self.bindings)
    }

    /// Returns the controlled view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the controlled view mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Consumes the controller and returns its view.
    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Current velocity in pan units per nominal frame.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current held-key state.
    #[must_use]
    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    /// Returns `true` while a pan loop is scheduled.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.panning
    }

    /// Returns `true` after [`PanController::dispose`].
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Sensitivity multiplier for the view's current zoom.
    #[must_use]
    pub fn zoom_multiplier(&self) -> f64 {
        self.config.sensitivity.multiplier(self.view.zoom())
    }

    /// Handles a key press.
    ///
    /// Directions start the pan loop if it is idle. Zoom keys act once per
    /// press; auto-repeat presses without a release in between are ignored.
    pub fn handle_key_down(&mut self, key: &Key, origin: EventOrigin) -> KeyResponse {
        let Some(action) = self.accept_press(key, origin) else {
            return KeyResponse::Ignored;
        };
        match action {
            KeyAction::Pan(direction) => {
                self.held.press(direction);
                if self.panning {
                    KeyResponse::Updated
                } else {
                    self.panning = true;
                    self.clock.reset();
                    log::debug!("pan loop started by {direction:?}");
                    KeyResponse::StartLoop
                }
            }
            KeyAction::Zoom(command) => {
                if !self.held.press_zoom(command) {
                    return KeyResponse::Ignored;
                }
                match command {
                    ZoomCommand::In => self.view.zoom_in(),
                    ZoomCommand::Out => self.view.zoom_out(),
                }
                log::debug!("zoom {command:?}, now at {}", self.view.zoom());
                KeyResponse::Zoomed(command)
            }
        }
    }

    /// Handles a key release.
    ///
    /// Releases are honored from any origin, so a key let go inside a text
    /// field does not stay held.
    pub fn handle_key_up(&mut self, key: &Key, _origin: EventOrigin) -> KeyResponse {
        if self.disposed {
            return KeyResponse::Ignored;
        }
        let Some(action) = self.bindings.lookup(key) else {
            return KeyResponse::Ignored;
        };
        match action {
            KeyAction::Pan(direction) => self.held.release(direction),
            KeyAction::Zoom(command) => self.held.release_zoom(command),
        }
        KeyResponse::Updated
    }

    /// Dispatches a `ui_events` keyboard event on its key state.
    pub fn handle_keyboard_event(
        &mut self,
        event: &KeyboardEvent,
        origin: EventOrigin,
    ) -> KeyResponse {
        if event.state.is_down() {
            self.handle_key_down(&event.key, origin)
        } else {
            self.handle_key_up(&event.key, origin)
        }
    }

    /// Releases every held key, e.g. when the host window loses focus.
    ///
    /// A running loop keeps going and winds down through friction.
    pub fn release_all(&mut self) -> KeyResponse {
        if self.disposed || self.held == HeldKeys::new() {
            return KeyResponse::Ignored;
        }
        self.held.clear();
        KeyResponse::Updated
    }

    /// Advances the pan loop by one frame at host time `now_ms`.
    ///
    /// Frames delivered while the loop is idle are ignored.
    pub fn step(&mut self, now_ms: f64) -> FrameOutcome {
        if self.disposed || !self.panning {
            return FrameOutcome::Stopped;
        }

        let dt = self.clock.tick(now_ms);
        let zoom = self.view.zoom();
        let multiplier = self.config.sensitivity.multiplier(zoom);

        let accel = self.config.base_acceleration * multiplier;
        let target = self
            .held
            .held_directions()
            .fold(Vec2::ZERO, |acc, d| acc + d.unit() * accel);

        self.velocity += (target - self.velocity) * (self.config.smoothing * dt);

        let cap = self.config.max_speed * multiplier;
        let speed = self.velocity.hypot();
        if speed > cap {
            self.velocity *= cap / speed;
        }

        let eps = self.config.epsilon;
        if self.velocity.x.abs() > eps || self.velocity.y.abs() > eps {
            let distance = self.config.move_distance * multiplier;
            let next = self.view.center().offset(
                self.velocity.y * dt * distance,
                self.velocity.x * dt * distance,
            );
            self.view.set_view(next, zoom, self.config.animation);
        }

        log::trace!(
            "pan step dt={dt:.3} zoom={zoom:.2} velocity=({:.6}, {:.6})",
            self.velocity.x,
            self.velocity.y
        );

        if !self.held.any_direction() {
            self.velocity *= self.config.friction;
            if self.velocity.x.abs() < eps && self.velocity.y.abs() < eps {
                self.stop();
                return FrameOutcome::Stopped;
            }
        }
        FrameOutcome::Continue
    }

    /// Halts any running loop and stops reacting to input.
    ///
    /// Afterwards every event is [`KeyResponse::Ignored`] and every frame is
    /// [`FrameOutcome::Stopped`]. Disposing twice is harmless.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.held.clear();
        self.stop();
        self.disposed = true;
        log::debug!("pan controller disposed");
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanControllerDebugInfo {
        PanControllerDebugInfo {
            velocity: self.velocity,
            speed: self.velocity.hypot(),
            zoom_multiplier: self.zoom_multiplier(),
            held: self.held,
            panning: self.panning,
            disposed: self.disposed,
            last_frame: self.clock.last_frame(),
        }
    }

    fn accept_press(&self, key: &Key, origin: EventOrigin) -> Option<KeyAction> {
        if self.disposed || origin.is_text_input() {
            return None;
        }
        self.bindings.lookup(key)
    }

    fn stop(&mut self) {
        self.velocity = Vec2::ZERO;
        self.clock.reset();
        if self.panning {
            self.panning = false;
            log::debug!("pan loop stopped");
        }
    }
}

/// Debug snapshot of a [`PanController`] state.
#[derive(Clone, Copy, Debug)]
pub struct PanControllerDebugInfo {
    /// Current velocity.
    pub velocity: Vec2,
    /// Length of the velocity vector.
    pub speed: f64,
    /// Sensitivity multiplier at the current zoom.
    pub zoom_multiplier: f64,
    /// Held keys.
    pub held: HeldKeys,
    /// Whether a loop is scheduled.
    pub panning: bool,
    /// Whether the controller was disposed.
    pub disposed: bool,
    /// Timestamp of the previous frame in the current loop.
    pub last_frame: Option<f64>,
}

#[cfg(test)]
mod tests {
    use kamchatka_view::{LatLng, MapView, SlippyView};
    use ui_events::keyboard::{Key, NamedKey};

    use super::{FrameOutcome, KeyResponse, PanController};
    use crate::config::PanConfig;
    use crate::keys::{Direction, EventOrigin, KeyAction, KeyBindings, ZoomCommand};

    fn chr(s: &str) -> Key {
        Key::Character(s.into())
    }

    fn controller_at(zoom: f64) -> PanController<SlippyView> {
        PanController::with_defaults(SlippyView::new(LatLng::new(56.0, 159.0), zoom))
    }

    #[test]
    fn invalid_config_is_rejected() {
        let view = SlippyView::kamchatka();
        assert!(PanController::new(view, PanConfig::default().with_friction(1.5)).is_err());
    }

    #[test]
    fn second_press_does_not_restart_loop() {
        let mut pan = controller_at(6.0);
        assert_eq!(
            pan.handle_key_down(&chr("w"), EventOrigin::Document),
            KeyResponse::StartLoop
        );
        assert_eq!(
            pan.handle_key_down(&chr("d"), EventOrigin::Document),
            KeyResponse::Updated
        );
        // Auto-repeat of a held direction.
        assert_eq!(
            pan.handle_key_down(&chr("w"), EventOrigin::Document),
            KeyResponse::Updated
        );
        assert!(pan.is_panning());
    }

    #[test]
    fn idle_frames_are_ignored() {
        let mut pan = controller_at(6.0);
        let before = pan.view().revision();
        assert_eq!(pan.step(0.0), FrameOutcome::Stopped);
        assert_eq!(pan.view().revision(), before);
    }

    #[test]
    fn first_frame_moves_by_one_nominal_step() {
        let mut pan = controller_at(3.0);
        let _ = pan.handle_key_down(&Key::Named(NamedKey::ArrowRight), EventOrigin::Document);
        assert_eq!(pan.step(12_345.0), FrameOutcome::Continue);

        // velocity = 0.001 * 0.2 * 1.0; moved = velocity * 1.0 * 80.
        let v = pan.velocity();
        assert!((v.x - 0.0002).abs() < 1e-12, "v.x = {}", v.x);
        assert_eq!(v.y, 0.0);
        let center = pan.view().center();
        assert!((center.lng - (159.0 + 0.0002 * 80.0)).abs() < 1e-9);
        assert_eq!(center.lat, 56.0);
    }

    #[test]
    fn zoom_keys_fire_on_press_edge_only() {
        let mut pan = controller_at(6.0);
        assert_eq!(
            pan.handle_key_down(&chr("e"), EventOrigin::Document),
            KeyResponse::Zoomed(ZoomCommand::In)
        );
        assert_eq!(
            pan.handle_key_down(&chr("e"), EventOrigin::Document),
            KeyResponse::Ignored
        );
        assert_eq!(pan.view().zoom(), 7.0);
        assert!(!pan.is_panning());

        let _ = pan.handle_key_up(&chr("e"), EventOrigin::Document);
        let _ = pan.handle_key_down(&chr("у"), EventOrigin::Document);
        assert_eq!(pan.view().zoom(), 8.0);
    }

    #[test]
    fn text_input_events_are_ignored() {
        let mut pan = controller_at(6.0);
        assert_eq!(
            pan.handle_key_down(&chr("w"), EventOrigin::TextInput),
            KeyResponse::Ignored
        );
        assert_eq!(
            pan.handle_key_down(&chr("q"), EventOrigin::TextInput),
            KeyResponse::Ignored
        );
        assert!(!pan.held().any_direction());
        assert_eq!(pan.view().zoom(), 6.0);
    }

    #[test]
    fn releases_inside_text_input_still_count() {
        let mut pan = controller_at(6.0);
        let _ = pan.handle_key_down(&chr("d"), EventOrigin::Document);
        assert_eq!(
            pan.handle_key_up(&chr("d"), EventOrigin::TextInput),
            KeyResponse::Updated
        );
        assert!(!pan.held().any_direction());

        let _ = pan.handle_key_down(&chr("q"), EventOrigin::Document);
        let _ = pan.handle_key_up(&chr("q"), EventOrigin::TextInput);
        assert_eq!(
            pan.handle_key_down(&chr("q"), EventOrigin::Document),
            KeyResponse::Zoomed(ZoomCommand::Out)
        );
        assert_eq!(pan.view().zoom(), 4.0);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut pan = controller_at(6.0);
        let response = pan.handle_key_down(&Key::Named(NamedKey::Enter), EventOrigin::Document);
        assert!(!response.is_handled());
        assert!(!pan.is_panning());
    }

    #[test]
    fn custom_bindings_replace_defaults() {
        let bindings = KeyBindings::new().bind_chars(&["k"], KeyAction::Pan(Direction::Up));
        let mut pan = controller_at(6.0).with_bindings(bindings);
        assert_eq!(
            pan.handle_key_down(&chr("w"), EventOrigin::Document),
            KeyResponse::Ignored
        );
        assert!(
            pan.handle_key_down(&chr("k"), EventOrigin::Document)
                .needs_frame()
        );
        assert_eq!(pan.legend().lines().len(), 1);
    }

    #[test]
    fn release_all_lets_loop_wind_down() {
        let mut pan = controller_at(3.0);
        let _ = pan.handle_key_down(&chr("d"), EventOrigin::Document);
        let mut now = 0.0;
        for _ in 0..20 {
            let _ = pan.step(now);
            now += 16.0;
        }
        assert_eq!(pan.release_all(), KeyResponse::Updated);
        assert_eq!(pan.release_all(), KeyResponse::Ignored);

        let mut frames = 0;
        while pan.step(now).is_continue() {
            now += 16.0;
            frames += 1;
            assert!(frames < 1_000, "loop did not stop");
        }
        assert_eq!(pan.velocity(), kurbo::Vec2::ZERO);
        assert!(!pan.is_panning());
    }

    #[test]
    fn dispose_halts_loop_and_ignores_input() {
        let mut pan = controller_at(6.0);
        let _ = pan.handle_key_down(&chr("a"), EventOrigin::Document);
        let _ = pan.step(0.0);
        pan.dispose();
        assert!(pan.is_disposed());
        assert!(!pan.is_panning());

        let revision = pan.view().revision();
        assert_eq!(
            pan.handle_key_down(&chr("a"), EventOrigin::Document),
            KeyResponse::Ignored
        );
        assert_eq!(
            pan.handle_key_down(&chr("q"), EventOrigin::Document),
            KeyResponse::Ignored
        );
        assert_eq!(pan.step(16.0), FrameOutcome::Stopped);
        assert_eq!(pan.view().revision(), revision);

        pan.dispose();
        let info = pan.debug_info();
        assert!(info.disposed);
        assert_eq!(info.speed, 0.0);
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut pan = controller_at(3.0);
        let _ = pan.handle_key_down(&chr("s"), EventOrigin::Document);
        let _ = pan.step(100.0);
        let info = pan.debug_info();
        assert!(info.panning);
        assert!(info.held.is_held(Direction::Down));
        assert_eq!(info.zoom_multiplier, 1.0);
        assert_eq!(info.last_frame, Some(100.0));
        assert!(info.velocity.y < 0.0);
    }
}
