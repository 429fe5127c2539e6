//! Construction options for the pincode component.

use super::types::{ChangeFunc, CompleteFunc, ErrorRegion, PinBox};
use bubbletea_rs::KeyMsg;

/// Number of boxes when none is configured.
pub const DEFAULT_INPUTS: usize = 4;

/// Character drawn in place of a masked digit.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Options recognised when building a pincode control.
///
/// ```rust
/// use pincode_input::pincode::Config;
///
/// let config = Config::default()
///     .with_inputs(6)
///     .with_placeholders("a b c d e f")
///     .with_hide_digits(false)
///     .with_on_complete(|code, _key, _err| println!("entered {code}"));
/// assert_eq!(config.inputs, 6);
/// ```
pub struct Config {
    /// Per-box placeholders separated by a single space. Box `i` gets the
    /// `i`-th entry; empty entries and extra entries are ignored.
    pub placeholders: Option<String>,
    /// Number of boxes. Values below 1 are treated as 1.
    pub inputs: usize,
    /// Mask the entered characters.
    pub hide_digits: bool,
    /// Create the decoy field while masking. Only meaningful together with
    /// `hide_digits`.
    pub decoy_field: bool,
    /// Character drawn for a masked box.
    pub mask_char: char,
    /// Invoked after every key-up.
    pub on_change: Option<ChangeFunc>,
    /// Invoked after a key-up that leaves every box filled.
    pub on_complete: Option<CompleteFunc>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            placeholders: None,
            inputs: DEFAULT_INPUTS,
            hide_digits: true,
            decoy_field: true,
            mask_char: DEFAULT_MASK_CHAR,
            on_change: None,
            on_complete: None,
        }
    }
}

impl Config {
    /// Sets the number of boxes.
    pub fn with_inputs(mut self, inputs: usize) -> Self {
        self.inputs = inputs;
        self
    }

    /// Sets the space-separated placeholders.
    pub fn with_placeholders(mut self, placeholders: impl Into<String>) -> Self {
        self.placeholders = Some(placeholders.into());
        self
    }

    /// Turns masking on or off.
    pub fn with_hide_digits(mut self, hide: bool) -> Self {
        self.hide_digits = hide;
        self
    }

    /// Turns the password-manager decoy on or off.
    pub fn with_decoy_field(mut self, decoy: bool) -> Self {
        self.decoy_field = decoy;
        self
    }

    /// Sets the masking character.
    pub fn with_mask_char(mut self, ch: char) -> Self {
        self.mask_char = ch;
        self
    }

    /// Sets the change callback.
    pub fn with_on_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(&PinBox, &str, usize) + Send + 'static,
    {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Sets the completion callback.
    pub fn with_on_complete<F>(mut self, f: F) -> Self
    where
        F: FnMut(&str, &KeyMsg, &mut ErrorRegion) + Send + 'static,
    {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// The placeholder for each box, in order. Missing entries are `None`.
    pub(super) fn split_placeholders(&self, count: usize) -> Vec<Option<String>> {
        let parts: Vec<&str> = self
            .placeholders
            .as_deref()
            .map(|p| p.split(' ').collect())
            .unwrap_or_default();
        (0..count)
            .map(|i| {
                parts
                    .get(i)
                    .filter(|p| !p.is_empty())
                    .map(|p| p.to_string())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.inputs, 4);
        assert!(config.hide_digits);
        assert!(config.decoy_field);
        assert_eq!(config.mask_char, '*');
        assert!(config.placeholders.is_none());
        assert!(config.on_change.is_none());
        assert!(config.on_complete.is_none());
    }

    #[test]
    fn test_split_placeholders_pads_and_truncates() {
        let config = Config::default().with_placeholders("a b");
        assert_eq!(
            config.split_placeholders(4),
            vec![Some("a".into()), Some("b".into()), None, None]
        );

        let config = Config::default().with_placeholders("1 2 3 4 5 6");
        assert_eq!(config.split_placeholders(3).len(), 3);
    }

    #[test]
    fn test_split_placeholders_skips_empty_entries() {
        let config = Config::default().with_placeholders("x  z");
        assert_eq!(
            config.split_placeholders(3),
            vec![Some("x".into()), None, Some("z".into())]
        );
    }
}
