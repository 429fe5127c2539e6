//! Key bindings for the pincode component.

use crate::key::{self, new_binding, with_extra_modifiers, with_help, with_keys_str, Binding};

/// Key bindings for moving between and editing the boxes.
///
/// Digits are not a binding: any `0`-`9` without ctrl or alt is accepted.
/// The default bindings still match with extra modifiers held, so
/// ctrl+backspace clears like backspace and shift+tab passes through. Keys in
/// [`KeyMap::passthrough`] are left to their default action; every other key
/// is swallowed.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Clear the current box and move to the previous one.
    pub clear_backward: Binding,
    /// Clear the current box and move to the next one.
    pub clear_forward: Binding,
    /// Move to the previous box.
    pub prev_box: Binding,
    /// Move to the next box.
    pub next_box: Binding,
    /// Clear the current box in place.
    pub delete: Binding,
    /// Paste from the clipboard into the current box.
    pub paste: Binding,
    /// Keys the widget does not act on but lets through to the host.
    pub passthrough: Binding,
}

/// The default bindings.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        clear_backward: new_binding(vec![
            with_keys_str(&["backspace"]),
            with_extra_modifiers(),
            with_help("backspace", "clear and go back"),
        ]),
        clear_forward: new_binding(vec![
            with_keys_str(&["space"]),
            with_extra_modifiers(),
            with_help("space", "clear and go forward"),
        ]),
        prev_box: new_binding(vec![
            with_keys_str(&["left"]),
            with_extra_modifiers(),
            with_help("←", "previous box"),
        ]),
        next_box: new_binding(vec![
            with_keys_str(&["right"]),
            with_extra_modifiers(),
            with_help("→", "next box"),
        ]),
        delete: new_binding(vec![
            with_keys_str(&["delete"]),
            with_extra_modifiers(),
            with_help("del", "clear box"),
        ]),
        paste: new_binding(vec![
            with_keys_str(&["ctrl+v"]),
            with_extra_modifiers(),
            with_help("ctrl+v", "paste"),
        ]),
        passthrough: new_binding(vec![
            with_keys_str(&["tab", "backtab", "ctrl+c", "ctrl+x"]),
            with_extra_modifiers(),
        ]),
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        default_key_map()
    }
}

impl key::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.prev_box, &self.next_box, &self.clear_backward]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.prev_box, &self.next_box],
            vec![&self.clear_backward, &self.clear_forward, &self.delete],
            vec![&self.paste],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap as _;
    use bubbletea_rs::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_default_bindings() {
        let km = default_key_map();
        let backspace = KeyMsg {
            key: KeyCode::Backspace,
            modifiers: KeyModifiers::NONE,
        };
        assert!(km.clear_backward.matches(&backspace));
        assert!(!km.clear_forward.matches(&backspace));

        let tab = KeyMsg {
            key: KeyCode::Tab,
            modifiers: KeyModifiers::NONE,
        };
        assert!(km.passthrough.matches(&tab));

        let ctrl_backspace = KeyMsg {
            key: KeyCode::Backspace,
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(km.clear_backward.matches(&ctrl_backspace));

        let shift_tab = KeyMsg {
            key: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
        };
        assert!(km.passthrough.matches(&shift_tab));
    }

    #[test]
    fn test_help_groups() {
        let km = KeyMap::default();
        let short: Vec<&str> = km.short_help().iter().map(|b| b.help().desc.as_str()).collect();
        assert_eq!(short, vec!["previous box", "next box", "clear and go back"]);
        assert_eq!(km.full_help().len(), 3);
    }
}
