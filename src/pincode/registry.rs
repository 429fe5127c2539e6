//! One live pincode control per field.

use super::config::Config;
use super::model::{new, Model};
use super::types::Field;
use std::collections::HashMap;

/// Tracks the live pincode controls of a form, keyed by field name.
///
/// Attaching a control to a field that already has one is a no-op, so an
/// application can re-run its setup code without stacking controls.
///
/// ```rust
/// use pincode_input::pincode::{Config, Field, Registry};
///
/// let mut form = Registry::new();
/// form.attach(Field::new("otp"), Config::default().with_inputs(6));
/// form.attach(Field::new("otp"), Config::default());
/// assert_eq!(form.len(), 1);
/// assert_eq!(form.get("otp").map(|m| m.len()), Some(6));
/// ```
#[derive(Default)]
pub struct Registry {
    controls: HashMap<String, Model>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a control over `field` unless one is already live for a field
    /// of the same name, and returns the live control.
    pub fn attach(&mut self, field: Field, config: Config) -> &mut Model {
        let name = field.name().to_string();
        self.controls.entry(name).or_insert_with(|| new(field, config))
    }

    /// The live control for `name`.
    pub fn get(&self, name: &str) -> Option<&Model> {
        self.controls.get(name)
    }

    /// The live control for `name`, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Model> {
        self.controls.get_mut(name)
    }

    /// Destroys the control for `name` and returns its field.
    pub fn detach(&mut self, name: &str) -> Option<Field> {
        self.controls.remove(name).map(Model::destroy)
    }

    /// Whether `name` has a live control.
    pub fn contains(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }

    /// Number of live controls.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Whether no control is live.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}
