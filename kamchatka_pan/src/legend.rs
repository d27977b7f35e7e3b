// Copyright 2026 the Kamchatka Salmon Map Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key-binding legend shown next to the map.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use ui_events::keyboard::{Key, NamedKey};

use crate::keys::{KeyAction, KeyBindings};

/// One legend row: an action and the keys that trigger it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendLine {
    /// The action described by this row.
    pub action: KeyAction,
    /// Display labels of the bound keys, in binding order.
    pub keys: Vec<String>,
}

impl LegendLine {
    /// Renders the row as `label: K1 / K2 / ...`.
    #[must_use]
    pub fn to_text(&self) -> String {
        format!("{}: {}", self.action.label(), self.keys.join(" / "))
    }
}

/// Static description of the keyboard controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Legend {
    title: &'static str,
    lines: Vec<LegendLine>,
}

impl Legend {
    /// Heading used for the legend.
    pub const TITLE: &'static str = "Управление с клавиатуры";

    /// Builds the legend for `bindings`. Actions without keys are left out.
    #[must_use]
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        let lines = KeyAction::ALL
            .into_iter()
            .filter_map(|action| {
                let keys: Vec<String> = bindings.keys_for(action).map(key_label).collect();
                (!keys.is_empty()).then_some(LegendLine { action, keys })
            })
            .collect();
        Self {
            title: Self::TITLE,
            lines,
        }
    }

    /// Legend heading.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Legend rows.
    #[must_use]
    pub fn lines(&self) -> &[LegendLine] {
        &self.lines
    }

    /// Renders the legend as plain text, one row per line under the title.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::from(self.title);
        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.to_text());
        }
        out
    }
}

/// Display label for a key: upper-cased characters, arrows as glyphs.
#[must_use]
pub fn key_label(key: &Key) -> String {
    match key {
        Key::Character(c) => c.to_uppercase(),
        Key::Named(NamedKey::ArrowUp) => String::from("↑"),
        Key::Named(NamedKey::ArrowDown) => String::from("↓"),
        Key::Named(NamedKey::ArrowLeft) => String::from("←"),
        Key::Named(NamedKey::ArrowRight) => String::from("→"),
        Key::Named(named) => format!("{named:?}"),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{Direction, ZoomCommand};

    #[test]
    fn default_legend_lists_all_actions() {
        let legend = Legend::from_bindings(&KeyBindings::default());
        assert_eq!(legend.title(), Legend::TITLE);
        assert_eq!(legend.lines().len(), 6);

        let up = &legend.lines()[0];
        assert_eq!(up.action, KeyAction::Pan(Direction::Up));
        assert_eq!(up.keys, ["W", "Ц", "↑"]);
        assert_eq!(up.to_text(), "Вверх: W / Ц / ↑");

        let zoom_out = &legend.lines()[5];
        assert_eq!(zoom_out.action, KeyAction::Zoom(ZoomCommand::Out));
        assert_eq!(zoom_out.to_text(), "Отдалить: Q / Й");
    }

    #[test]
    fn unbound_actions_are_skipped() {
        let bindings = KeyBindings::new().bind_chars(&["q"], KeyAction::Zoom(ZoomCommand::Out));
        let legend = Legend::from_bindings(&bindings);
        assert_eq!(legend.lines().len(), 1);
        assert_eq!(legend.to_text(), "Управление с клавиатуры\nОтдалить: Q");
    }

    #[test]
    fn other_named_keys_use_their_name() {
        assert_eq!(key_label(&Key::Named(NamedKey::PageUp)), "PageUp");
    }
}
