//! Pincode entry component for Bubble Tea applications.
//!
//! A pincode control splits one hidden value into a row of single-character
//! boxes. Digits move focus forward, backspace clears and moves back, and the
//! concatenated code is mirrored into the bound [`Field`] after every key.
//!
//! # Basic Usage
//!
//! ```rust
//! use pincode_input::pincode::{new, Config, Field};
//!
//! let config = Config::default()
//!     .with_inputs(6)
//!     .with_on_complete(|code, _key, error| {
//!         if code != "123456" {
//!             error.set("Code not correct");
//!         }
//!     });
//!
//! let mut pin = new(Field::new("otp"), config);
//! pin.focus();
//! assert_eq!(pin.len(), 6);
//! assert!(pin.host().hidden());
//! ```
//!
//! # Masking
//!
//! Digits are masked by default. Pass `with_hide_digits(false)` to show them;
//! only then is an existing field value copied into the boxes.

pub mod config;
pub mod keymap;
pub mod methods;
pub mod model;
pub mod registry;
pub mod types;
pub mod view;


pub use config::{Config, DEFAULT_INPUTS, DEFAULT_MASK_CHAR};
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model};
pub use registry::Registry;
pub use types::{
    BoxKind, ChangeFunc, CompleteFunc, DecoyField, ErrorRegion, Field, KeyDisposition,
    PasteErrMsg, PasteMsg, PinBox,
};
