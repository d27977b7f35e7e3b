// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions from DOM event values.

use alloc::string::String;

use ui_events::keyboard::{Key, NamedKey};

/// Converts a DOM `KeyboardEvent.key` value into a `ui_events` [`Key`].
///
/// Single characters become [`Key::Character`]; the arrow keys and a few
/// editing keys map to their [`NamedKey`]. Anything else is
/// [`NamedKey::Unidentified`], which no binding matches.
#[must_use]
pub fn dom_key(key: &str) -> Key {
    let mut chars = key.chars();
    if let (Some(_), None) = (chars.next(), chars.next()) {
        return Key::Character(String::from(key));
    }
    let named = match key {
        "ArrowUp" => NamedKey::ArrowUp,
        "ArrowDown" => NamedKey::ArrowDown,
        "ArrowLeft" => NamedKey::ArrowLeft,
        "ArrowRight" => NamedKey::ArrowRight,
        "Enter" => NamedKey::Enter,
        "Escape" => NamedKey::Escape,
        "Tab" => NamedKey::Tab,
        "Backspace" => NamedKey::Backspace,
        _ => NamedKey::Unidentified,
    };
    Key::Named(named)
}
