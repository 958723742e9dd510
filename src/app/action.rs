// SPDX-License-Identifier: MPL-2.0
//! User-facing actions.
//!
//! Toolbar buttons, menu entries, keyboard shortcuts and dialog results all
//! resolve to an [`Action`]; `update::dispatch` maps each one to its handler.

use iced::keyboard::{self, key::Named, Key, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Open,
    Save,
    Reload,
    Convert,
    Quit,
    RotateLeft,
    RotateRight,
    Scale,
    ZoomIn,
    ZoomOut,
    OriginalSize,
    Previous,
    Next,
    First,
    Last,
    About,
}

/// Menu the action is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    File,
    Image,
    View,
    Go,
    Help,
}

/// Model state an action's availability depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Availability {
    pub opened: bool,
    pub modified: bool,
    pub has_prev: bool,
    pub has_next: bool,
    pub has_zoom_in: bool,
    pub has_zoom_out: bool,
}

impl Action {
    pub const ALL: [Action; 16] = [
        Action::Open,
        Action::Save,
        Action::Reload,
        Action::Convert,
        Action::Quit,
        Action::RotateLeft,
        Action::RotateRight,
        Action::Scale,
        Action::ZoomIn,
        Action::ZoomOut,
        Action::OriginalSize,
        Action::Previous,
        Action::Next,
        Action::First,
        Action::Last,
        Action::About,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            Action::Open => "action-open",
            Action::Save => "action-save",
            Action::Reload => "action-reload",
            Action::Convert => "action-convert",
            Action::Quit => "action-quit",
            Action::RotateLeft => "action-rotate-left",
            Action::RotateRight => "action-rotate-right",
            Action::Scale => "action-scale",
            Action::ZoomIn => "action-zoom-in",
            Action::ZoomOut => "action-zoom-out",
            Action::OriginalSize => "action-original-size",
            Action::Previous => "action-previous",
            Action::Next => "action-next",
            Action::First => "action-first",
            Action::Last => "action-last",
            Action::About => "action-about",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Action::Open => "open",
            Action::Save => "save",
            Action::Reload => "refresh",
            Action::Convert => "convert",
            Action::Quit => "quit",
            Action::RotateLeft => "rotate_left",
            Action::RotateRight => "rotate_right",
            Action::Scale => "scale",
            Action::ZoomIn => "zoom-in",
            Action::ZoomOut => "zoom-out",
            Action::OriginalSize => "original",
            Action::Previous => "prev",
            Action::Next => "next",
            Action::First => "first",
            Action::Last => "last",
            Action::About => "about",
        }
    }

    pub fn group(self) -> Group {
        match self {
            Action::Open | Action::Save | Action::Reload | Action::Convert | Action::Quit => {
                Group::File
            }
            Action::RotateLeft | Action::RotateRight | Action::Scale => Group::Image,
            Action::ZoomIn | Action::ZoomOut | Action::OriginalSize => Group::View,
            Action::Previous | Action::Next | Action::First | Action::Last => Group::Go,
            Action::About => Group::Help,
        }
    }

    /// Human-readable shortcut shown in menus and tooltips.
    pub fn shortcut_label(self) -> &'static str {
        match self {
            Action::Open => "Ctrl+O",
            Action::Save => "Ctrl+S",
            Action::Reload => "Ctrl+F5",
            Action::Convert => "",
            Action::Quit => "Ctrl+Q",
            Action::RotateLeft => "Ctrl+Shift+R",
            Action::RotateRight => "Ctrl+Shift+L",
            Action::Scale => "",
            Action::ZoomIn => "Ctrl++",
            Action::ZoomOut => "Ctrl+-",
            Action::OriginalSize => "Ctrl+Shift+H",
            Action::Previous => "Left",
            Action::Next => "Right",
            Action::First => "Ctrl+Home",
            Action::Last => "Ctrl+End",
            Action::About => "F1",
        }
    }

    /// Whether unsaved changes must be confirmed before running the action.
    pub fn discards_changes(self) -> bool {
        matches!(
            self,
            Action::Previous
                | Action::Next
                | Action::First
                | Action::Last
                | Action::Reload
                | Action::Quit
        )
    }

    pub fn is_enabled(self, state: &Availability) -> bool {
        match self {
            Action::Open | Action::Quit | Action::About => true,
            Action::Save => state.opened && state.modified,
            Action::Reload
            | Action::Convert
            | Action::RotateLeft
            | Action::RotateRight
            | Action::Scale
            | Action::OriginalSize
            | Action::First
            | Action::Last => state.opened,
            Action::ZoomIn => state.opened && state.has_zoom_in,
            Action::ZoomOut => state.opened && state.has_zoom_out,
            Action::Previous => state.has_prev,
            Action::Next => state.has_next,
        }
    }

    /// Maps a key press to its action.
    pub fn from_key_press(key: &Key, modifiers: Modifiers) -> Option<Action> {
        let ctrl = modifiers.command();
        let shift = modifiers.shift();

        match key.as_ref() {
            Key::Named(Named::ArrowLeft) if !ctrl => Some(Action::Previous),
            Key::Named(Named::ArrowRight) if !ctrl => Some(Action::Next),
            Key::Named(Named::Home) if ctrl => Some(Action::First),
            Key::Named(Named::End) if ctrl => Some(Action::Last),
            Key::Named(Named::F5) if ctrl => Some(Action::Reload),
            Key::Named(Named::F1) => Some(Action::About),
            Key::Character(c) if ctrl => {
                let c = c.to_ascii_lowercase();
                match (c.as_str(), shift) {
                    ("o", false) => Some(Action::Open),
                    ("s", false) => Some(Action::Save),
                    ("q", false) => Some(Action::Quit),
                    ("r", true) => Some(Action::RotateLeft),
                    ("l", true) => Some(Action::RotateRight),
                    ("h", true) => Some(Action::OriginalSize),
                    ("+" | "=", _) => Some(Action::ZoomIn),
                    ("-" | "_", _) => Some(Action::ZoomOut),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Convenience for subscriptions: only key presses produce actions.
pub fn from_keyboard_event(event: &keyboard::Event) -> Option<Action> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => Action::from_key_press(key, *modifiers),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ctrl() -> Modifiers {
        Modifiers::COMMAND
    }

    fn ctrl_shift() -> Modifiers {
        Modifiers::COMMAND | Modifiers::SHIFT
    }

    fn char_key(c: &str) -> Key {
        Key::Character(c.into())
    }

    #[test]
    fn all_lists_every_action_once() {
        let unique: HashSet<_> = Action::ALL.iter().collect();
        assert_eq!(unique.len(), Action::ALL.len());
    }

    #[test]
    fn label_keys_and_icons_are_unique() {
        let labels: HashSet<_> = Action::ALL.iter().map(|a| a.label_key()).collect();
        let icons: HashSet<_> = Action::ALL.iter().map(|a| a.icon_name()).collect();
        assert_eq!(labels.len(), Action::ALL.len());
        assert_eq!(icons.len(), Action::ALL.len());
    }

    #[test]
    fn nothing_open_enables_only_global_actions() {
        let state = Availability::default();
        let enabled: Vec<_> = Action::ALL
            .into_iter()
            .filter(|a| a.is_enabled(&state))
            .collect();
        assert_eq!(enabled, vec![Action::Open, Action::Quit, Action::About]);
    }

    #[test]
    fn save_requires_modification() {
        let mut state = Availability {
            opened: true,
            ..Availability::default()
        };
        assert!(!Action::Save.is_enabled(&state));
        state.modified = true;
        assert!(Action::Save.is_enabled(&state));
    }

    #[test]
    fn navigation_follows_boundaries() {
        let state = Availability {
            opened: true,
            has_prev: false,
            has_next: true,
            ..Availability::default()
        };
        assert!(!Action::Previous.is_enabled(&state));
        assert!(Action::Next.is_enabled(&state));
        assert!(Action::First.is_enabled(&state));
        assert!(Action::Last.is_enabled(&state));
    }

    #[test]
    fn zoom_follows_view_limits() {
        let state = Availability {
            opened: true,
            has_zoom_in: false,
            has_zoom_out: true,
            ..Availability::default()
        };
        assert!(!Action::ZoomIn.is_enabled(&state));
        assert!(Action::ZoomOut.is_enabled(&state));
    }

    #[test]
    fn shortcuts_map_to_actions() {
        assert_eq!(Action::from_key_press(&char_key("o"), ctrl()), Some(Action::Open));
        assert_eq!(Action::from_key_press(&char_key("s"), ctrl()), Some(Action::Save));
        assert_eq!(Action::from_key_press(&char_key("q"), ctrl()), Some(Action::Quit));
        assert_eq!(
            Action::from_key_press(&char_key("R"), ctrl_shift()),
            Some(Action::RotateLeft)
        );
        assert_eq!(
            Action::from_key_press(&char_key("L"), ctrl_shift()),
            Some(Action::RotateRight)
        );
        assert_eq!(
            Action::from_key_press(&char_key("H"), ctrl_shift()),
            Some(Action::OriginalSize)
        );
        assert_eq!(Action::from_key_press(&char_key("="), ctrl()), Some(Action::ZoomIn));
        assert_eq!(Action::from_key_press(&char_key("+"), ctrl_shift()), Some(Action::ZoomIn));
        assert_eq!(Action::from_key_press(&char_key("-"), ctrl()), Some(Action::ZoomOut));
        assert_eq!(
            Action::from_key_press(&Key::Named(Named::ArrowLeft), Modifiers::empty()),
            Some(Action::Previous)
        );
        assert_eq!(
            Action::from_key_press(&Key::Named(Named::ArrowRight), Modifiers::empty()),
            Some(Action::Next)
        );
        assert_eq!(
            Action::from_key_press(&Key::Named(Named::Home), ctrl()),
            Some(Action::First)
        );
        assert_eq!(
            Action::from_key_press(&Key::Named(Named::End), ctrl()),
            Some(Action::Last)
        );
        assert_eq!(
            Action::from_key_press(&Key::Named(Named::F5), ctrl()),
            Some(Action::Reload)
        );
        assert_eq!(
            Action::from_key_press(&Key::Named(Named::F1), Modifiers::empty()),
            Some(Action::About)
        );
    }

    #[test]
    fn plain_letters_are_ignored() {
        assert_eq!(Action::from_key_press(&char_key("o"), Modifiers::empty()), None);
        assert_eq!(Action::from_key_press(&char_key("r"), ctrl()), None);
        assert_eq!(Action::from_key_press(&Key::Named(Named::Home), Modifiers::empty()), None);
    }

    #[test]
    fn discarding_actions_need_confirmation() {
        assert!(Action::Next.discards_changes());
        assert!(Action::Quit.discards_changes());
        assert!(!Action::Save.discards_changes());
        assert!(!Action::RotateLeft.discards_changes());
    }
}
