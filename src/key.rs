//! Type-safe key bindings for widgets.
//!
//! A [`Binding`] groups one or more key presses under a single action together
//! with the help text shown to users. Bindings are built with option functions
//! in the same style as the Go bubbles `key` package:
//!
//! ```rust
//! use pincode_input::key::{new_binding, with_help, with_keys_str};
//!
//! let clear = new_binding(vec![
//!     with_keys_str(&["backspace"]),
//!     with_help("backspace", "clear and go back"),
//! ]);
//! assert_eq!(clear.help().key, "backspace");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing the key.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"ctrl+v"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
    extra_mods: bool,
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

impl Binding {
    /// Creates a binding for the given key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Key presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Whether extra modifiers held with a key still match.
    pub fn allows_extra_modifiers(&self) -> bool {
        self.extra_mods
    }

    /// Reports whether `msg` is one of this binding's key presses.
    ///
    /// Modifiers must match exactly unless the binding was built with
    /// [`with_extra_modifiers`]. Then the bound modifiers only need to be
    /// held, and letters match in either case (shift turns `c` into `C`).
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| self.press_matches(k, msg))
    }

    fn press_matches(&self, k: &KeyPress, msg: &KeyMsg) -> bool {
        if !self.extra_mods {
            return k.code == msg.key && k.mods == msg.modifiers;
        }
        let code = match (k.code, msg.key) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        };
        code && msg.modifiers.contains(k.mods)
    }
}

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut b = Binding::default();
    for opt in opts {
        opt(&mut b);
    }
    b
}

/// Sets the binding's keys from typed key presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Sets the binding's keys from strings such as `"left"` or `"ctrl+v"`.
///
/// Strings that do not name a key are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|s| parse_key(s)).collect();
    with_keys(parsed)
}

/// Sets the binding's help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.disabled = true)
}

/// Lets the binding match while other modifiers are held as well.
pub fn with_extra_modifiers() -> BindingOpt {
    Box::new(|b: &mut Binding| b.extra_mods = true)
}

/// Reports whether `msg` matches `binding`.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Parses a key description like `"ctrl+x"`.
fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut rest = s;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress { code, mods })
}

/// Help provider implemented by widget key maps.
pub trait KeyMap {
    /// Bindings shown in the compact help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings shown in the expanded help view, grouped in columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_parse_key_names_and_modifiers() {
        assert_eq!(parse_key("left"), Some(KeyCode::Left.into()));
        assert_eq!(parse_key("space"), Some(KeyCode::Char(' ').into()));
        assert_eq!(
            parse_key("ctrl+v"),
            Some((KeyCode::Char('v'), KeyModifiers::CONTROL).into())
        );
        assert_eq!(parse_key("backtab"), Some(KeyCode::BackTab.into()));
        assert_eq!(parse_key("nonsense"), None);
    }

    #[test]
    fn test_binding_matches_exact_modifiers() {
        let paste = new_binding(vec![with_keys_str(&["ctrl+v"])]);
        assert!(matches_binding(
            &key(KeyCode::Char('v'), KeyModifiers::CONTROL),
            &paste
        ));
        assert!(!matches_binding(
            &key(KeyCode::Char('v'), KeyModifiers::NONE),
            &paste
        ));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let tab = new_binding(vec![with_keys_str(&["tab"]), with_disabled()]);
        assert!(!tab.matches(&key(KeyCode::Tab, KeyModifiers::NONE)));
    }

    #[test]
    fn test_extra_modifiers() {
        let clear = new_binding(vec![with_keys_str(&["backspace"]), with_extra_modifiers()]);
        assert!(clear.allows_extra_modifiers());
        assert!(clear.matches(&key(KeyCode::Backspace, KeyModifiers::CONTROL)));
        assert!(clear.matches(&key(KeyCode::Backspace, KeyModifiers::NONE)));
        assert!(!clear.matches(&key(KeyCode::Delete, KeyModifiers::NONE)));

        let copy = new_binding(vec![with_keys_str(&["ctrl+c"]), with_extra_modifiers()]);
        assert!(copy.matches(&key(
            KeyCode::Char('C'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT
        )));
        assert!(!copy.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));

        let strict = new_binding(vec![with_keys_str(&["backspace"])]);
        assert!(!strict.matches(&key(KeyCode::Backspace, KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_with_help() {
        let b = Binding::new(vec![KeyCode::Left]).with_help("←", "previous box");
        assert_eq!(b.help().desc, "previous box");
        assert!(b.enabled());
    }
}
