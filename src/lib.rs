#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/pincode-input/")]

//! # pincode-input
//!
//! A pincode entry component for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! The control splits one hidden value into a row of single-character boxes.
//! Digits fill the focused box and move right, backspace clears and moves
//! left, and the concatenated code is mirrored into the bound field after
//! every key. Two callbacks report progress: one after every key, one each
//! time the code is complete.
//!
//! ## Quick Start
//!
//! ```rust
//! use pincode_input::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     pin: Pincode,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let config = PincodeConfig::default()
//!             .with_inputs(6)
//!             .with_on_complete(|code, _key, error| {
//!                 if code != "424242" {
//!                     error.set("Code not correct");
//!                 }
//!             });
//!         let mut pin = pincode_new(PincodeField::new("otp"), config);
//!         pin.focus();
//!         (Self { pin }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.pin.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Enter the code:\n{}", self.pin.view())
//!     }
//! }
//! ```
//!
//! ## Key Bindings
//!
//! | Key | Effect |
//! |-----|--------|
//! | `0`-`9` | set the box, move right |
//! | backspace | clear the box, move left |
//! | space | clear the box, move right |
//! | ←/→ | move without editing |
//! | delete | clear the box |
//! | ctrl+v | paste into the box |
//! | tab, shift+tab, ctrl+c, ctrl+x | left to the application |
//!
//! Extra modifiers do not stop these keys from matching, so ctrl+backspace
//! clears like backspace. Digits held with ctrl or alt, and everything else,
//! are swallowed.

pub mod key;
pub mod pincode;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// Applications with several focusable components can hold them behind this
/// trait and move focus between them, for example on tab.
///
/// ```rust
/// use pincode_input::prelude::*;
///
/// fn toggle<T: Component>(c: &mut T) {
///     if c.focused() {
///         c.blur();
///     } else {
///         let _ = c.focus();
///     }
/// }
///
/// let mut pin = pincode_new(PincodeField::new("otp"), PincodeConfig::default());
/// toggle(&mut pin);
/// assert!(Component::focused(&pin));
/// ```
pub trait Component {
    /// Sets the component to focused state. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use key::{
    matches_binding, new_binding, with_disabled, with_extra_modifiers, with_help, with_keys,
    with_keys_str, Binding, Help as KeyHelp, KeyMap, KeyPress,
};
pub use pincode::{
    default_key_map as pincode_default_key_map, new as pincode_new, paste, BoxKind,
    Config as PincodeConfig, ErrorRegion, Field as PincodeField, KeyDisposition,
    KeyMap as PincodeKeyMap, Model as Pincode, PasteErrMsg, PasteMsg, PinBox,
    Registry as PincodeRegistry,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use pincode_input::prelude::*;
///
/// let mut form = PincodeRegistry::new();
/// form.attach(PincodeField::new("otp"), PincodeConfig::default());
/// ```
pub mod prelude {
    pub use crate::key::{
        matches_binding, new_binding, with_disabled, with_extra_modifiers, with_help,
        with_keys, with_keys_str, Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::pincode::{
        default_key_map as pincode_default_key_map, new as pincode_new, BoxKind,
        Config as PincodeConfig, ErrorRegion, Field as PincodeField, KeyDisposition,
        KeyMap as PincodeKeyMap, Model as Pincode, PinBox, Registry as PincodeRegistry,
    };
    pub use crate::Component;
}
