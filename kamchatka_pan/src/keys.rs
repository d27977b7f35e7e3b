// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key bindings and held-key tracking.
//!
//! [`KeyBindings`] maps `ui_events` keys to [`KeyAction`]s. The default table
//! covers two keyboard layouts so the map works without switching input
//! language:
//!
//! | action   | Latin | Cyrillic | other |
//! |----------|-------|----------|-------|
//! | up       | `W`   | `Ц`      | `↑`   |
//! | down     | `S`   | `Ы`      | `↓`   |
//! | left     | `A`   | `Ф`      | `←`   |
//! | right    | `D`   | `В`      | `→`   |
//! | zoom in  | `E`   | `У`      |       |
//! | zoom out | `Q`   | `Й`      |       |
//!
//! Character keys match case-insensitively, so `Shift` or `Caps Lock` does
//! not disable navigation.
//!
//! ```
//! use kamchatka_pan::{Direction, KeyAction, KeyBindings, ZoomCommand};
//! use ui_events::keyboard::{Key, NamedKey};
//!
//! let bindings = KeyBindings::default();
//! assert_eq!(
//!     bindings.lookup(&Key::Character("Ц".into())),
//!     Some(KeyAction::Pan(Direction::Up))
//! );
//! assert_eq!(
//!     bindings.lookup(&Key::Named(NamedKey::ArrowLeft)),
//!     Some(KeyAction::Pan(Direction::Left))
//! );
//! assert_eq!(
//!     bindings.lookup(&Key::Character("q".into())),
//!     Some(KeyAction::Zoom(ZoomCommand::Out))
//! );
//! assert_eq!(bindings.lookup(&Key::Character("x".into())), None);
//! ```

use alloc::vec::Vec;

use kurbo::Vec2;
use ui_events::keyboard::{Key, NamedKey};

/// A panning direction.
///
/// Directions follow the map's geographic axes: up is north (`+Y`), right is
/// east (`+X`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North, `+Y`.
    Up,
    /// South, `-Y`.
    Down,
    /// West, `-X`.
    Left,
    /// East, `+X`.
    Right,
}

impl Direction {
    /// All directions, in table order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit vector for this direction.
    #[must_use]
    pub fn unit(self) -> Vec2 {
        match self {
            Self::Up => Vec2::new(0.0, 1.0),
            Self::Down => Vec2::new(0.0, -1.0),
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

/// A discrete zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomCommand {
    /// Zoom in by one step.
    In,
    /// Zoom out by one step.
    Out,
}

impl ZoomCommand {
    fn index(self) -> usize {
        match self {
            Self::In => 0,
            Self::Out => 1,
        }
    }
}

/// What a bound key does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Pan continuously while the key is held.
    Pan(Direction),
    /// Zoom once per press.
    Zoom(ZoomCommand),
}

impl KeyAction {
    /// Every action, in legend order.
    pub const ALL: [Self; 6] = [
        Self::Pan(Direction::Up),
        Self::Pan(Direction::Down),
        Self::Pan(Direction::Left),
        Self::Pan(Direction::Right),
        Self::Zoom(ZoomCommand::In),
        Self::Zoom(ZoomCommand::Out),
    ];

    /// Short human-readable label, in the map's interface language.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pan(Direction::Up) => "Вверх",
            Self::Pan(Direction::Down) => "Вниз",
            Self::Pan(Direction::Left) => "Влево",
            Self::Pan(Direction::Right) => "Вправо",
            Self::Zoom(ZoomCommand::In) => "Приблизить",
            Self::Zoom(ZoomCommand::Out) => "Отдалить",
        }
    }
}

/// A single key → action entry.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyBinding {
    /// The key that triggers this binding.
    pub key: Key,
    /// What the key does.
    pub action: KeyAction,
}

/// Table of key bindings.
///
/// Lookups scan the table in insertion order and return the first match.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyBindings {
    bindings: Vec<KeyBinding>,
}

impl KeyBindings {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Adds a binding.
    #[must_use]
    pub fn bind(mut self, key: Key, action: KeyAction) -> Self {
        self.bindings.push(KeyBinding { key, action });
        self
    }

    /// Adds a character binding for each of `chars`.
    #[must_use]
    pub fn bind_chars(mut self, chars: &[&str], action: KeyAction) -> Self {
        for c in chars {
            self.bindings.push(KeyBinding {
                key: Key::Character((*c).into()),
                action,
            });
        }
        self
    }

    /// Returns the action bound to `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: &Key) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find(|b| keys_match(&b.key, key))
            .map(|b| b.action)
    }

    /// Iterates all bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter()
    }

    /// Iterates the keys bound to `action`, in insertion order.
    pub fn keys_for(&self, action: KeyAction) -> impl Iterator<Item = &Key> {
        self.bindings
            .iter()
            .filter(move |b| b.action == action)
            .map(|b| &b.key)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no key is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindings {
    /// Latin `WASD`, Cyrillic `ЦФЫВ` and the arrow keys for panning;
    /// `E`/`У` and `Q`/`Й` for zooming.
    fn default() -> Self {
        Self::new()
            .bind_chars(&["w", "ц"], KeyAction::Pan(Direction::Up))
            .bind(
                Key::Named(NamedKey::ArrowUp),
                KeyAction::Pan(Direction::Up),
            )
            .bind_chars(&["s", "ы"], KeyAction::Pan(Direction::Down))
            .bind(
                Key::Named(NamedKey::ArrowDown),
                KeyAction::Pan(Direction::Down),
            )
            .bind_chars(&["a", "ф"], KeyAction::Pan(Direction::Left))
            .bind(
                Key::Named(NamedKey::ArrowLeft),
                KeyAction::Pan(Direction::Left),
            )
            .bind_chars(&["d", "в"], KeyAction::Pan(Direction::Right))
            .bind(
                Key::Named(NamedKey::ArrowRight),
                KeyAction::Pan(Direction::Right),
            )
            .bind_chars(&["e", "у"], KeyAction::Zoom(ZoomCommand::In))
            .bind_chars(&["q", "й"], KeyAction::Zoom(ZoomCommand::Out))
    }
}

fn keys_match(bound: &Key, pressed: &Key) -> bool {
    match (bound, pressed) {
        (Key::Character(a), Key::Character(b)) => a
            .chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase)),
        _ => bound == pressed,
    }
}

/// Where a keyboard event came from.
///
/// Keystrokes typed into text fields must not move the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum EventOrigin {
    /// The document or a non-editable element.
    #[default]
    Document,
    /// A text input, text area or content-editable element.
    TextInput,
}

impl EventOrigin {
    /// Classifies an event target by its element tag name.
    ///
    /// `INPUT` and `TEXTAREA` (in any case) are text inputs, and so is any
    /// element with `content_editable` set.
    #[must_use]
    pub fn from_element(tag_name: &str, content_editable: bool) -> Self {
        if content_editable
            || tag_name.eq_ignore_ascii_case("input")
            || tag_name.eq_ignore_ascii_case("textarea")
        {
            Self::TextInput
        } else {
            Self::Document
        }
    }

    /// Returns `true` for [`EventOrigin::TextInput`].
    #[must_use]
    pub fn is_text_input(self) -> bool {
        self == Self::TextInput
    }
}

/// Which directions and zoom keys are currently held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    directions: [bool; 4],
    zooms: [bool; 2],
}

impl HeldKeys {
    /// Creates a table with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `direction` as held. Returns `true` if it was not held before.
    pub fn press(&mut self, direction: Direction) -> bool {
        !core::mem::replace(&mut self.directions[direction.index()], true)
    }

    /// Marks `direction` as released.
    pub fn release(&mut self, direction: Direction) {
        self.directions[direction.index()] = false;
    }

    /// Returns `true` while `direction` is held.
    #[must_use]
    pub fn is_held(&self, direction: Direction) -> bool {
        self.directions[direction.index()]
    }

    /// Returns `true` if any direction is held.
    #[must_use]
    pub fn any_direction(&self) -> bool {
        self.directions.iter().any(|held| *held)
    }

    /// Iterates the held directions.
    pub fn held_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.is_held(*d))
    }

    /// Marks the key for `command` as held. Returns `true` on the press edge.
    pub fn press_zoom(&mut self, command: ZoomCommand) -> bool {
        !core::mem::replace(&mut self.zooms[command.index()], true)
    }

    /// Marks the key for `command` as released.
    pub fn release_zoom(&mut self, command: ZoomCommand) {
        self.zooms[command.index()] = false;
    }

    /// Returns `true` while the key for `command` is held.
    #[must_use]
    pub fn is_zoom_held(&self, command: ZoomCommand) -> bool {
        self.zooms[command.index()]
    }

    /// Releases everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_both_layouts() {
        let bindings = KeyBindings::default();
        let pairs = [
            ("w", "ц", KeyAction::Pan(Direction::Up)),
            ("s", "ы", KeyAction::Pan(Direction::Down)),
            ("a", "ф", KeyAction::Pan(Direction::Left)),
            ("d", "в", KeyAction::Pan(Direction::Right)),
            ("e", "у", KeyAction::Zoom(ZoomCommand::In)),
            ("q", "й", KeyAction::Zoom(ZoomCommand::Out)),
        ];
        for (latin, cyrillic, action) in pairs {
            assert_eq!(bindings.lookup(&Key::Character(latin.into())), Some(action));
            assert_eq!(
                bindings.lookup(&Key::Character(cyrillic.into())),
                Some(action)
            );
        }
        assert_eq!(bindings.len(), 16);
    }

    #[test]
    fn character_lookup_ignores_case() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.lookup(&Key::Character("D".into())),
            Some(KeyAction::Pan(Direction::Right))
        );
        assert_eq!(
            bindings.lookup(&Key::Character("Й".into())),
            Some(KeyAction::Zoom(ZoomCommand::Out))
        );
    }

    #[test]
    fn unmapped_keys_are_not_found() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.lookup(&Key::Named(NamedKey::Enter)), None);
        assert_eq!(bindings.lookup(&Key::Character("wa".into())), None);
        assert!(KeyBindings::new().is_empty());
    }

    #[test]
    fn keys_for_lists_every_layout() {
        let bindings = KeyBindings::default();
        let keys: Vec<&Key> = bindings.keys_for(KeyAction::Pan(Direction::Up)).collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[2], &Key::Named(NamedKey::ArrowUp));
    }

    #[test]
    fn press_reports_edges_only() {
        let mut held = HeldKeys::new();
        assert!(held.press(Direction::Up));
        assert!(!held.press(Direction::Up));
        assert!(held.any_direction());
        held.release(Direction::Up);
        assert!(!held.any_direction());

        assert!(held.press_zoom(ZoomCommand::Out));
        assert!(!held.press_zoom(ZoomCommand::Out));
        assert!(held.is_zoom_held(ZoomCommand::Out));
        held.release_zoom(ZoomCommand::Out);
        assert!(held.press_zoom(ZoomCommand::Out));
    }

    #[test]
    fn held_directions_and_clear() {
        let mut held = HeldKeys::new();
        held.press(Direction::Right);
        held.press(Direction::Up);
        let dirs: Vec<Direction> = held.held_directions().collect();
        assert_eq!(dirs, [Direction::Up, Direction::Right]);

        held.press_zoom(ZoomCommand::In);
        held.clear();
        assert_eq!(held, HeldKeys::new());
    }

    #[test]
    fn text_fields_are_classified_by_tag() {
        assert_eq!(
            EventOrigin::from_element("INPUT", false),
            EventOrigin::TextInput
        );
        assert_eq!(
            EventOrigin::from_element("textarea", false),
            EventOrigin::TextInput
        );
        assert_eq!(
            EventOrigin::from_element("DIV", true),
            EventOrigin::TextInput
        );
        assert_eq!(EventOrigin::from_element("DIV", false), EventOrigin::Document);
        assert!(!EventOrigin::default().is_text_input());
    }

    #[test]
    fn unit_vectors_follow_map_axes() {
        assert_eq!(Direction::Up.unit(), Vec2::new(0.0, 1.0));
        assert_eq!(Direction::Down.unit(), Vec2::new(0.0, -1.0));
        assert_eq!(Direction::Left.unit(), Vec2::new(-1.0, 0.0));
        assert_eq!(Direction::Right.unit(), Vec2::new(1.0, 0.0));
    }
}
