//! Core types for the pincode component.

use bubbletea_rs::{KeyMsg, Msg};

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// Called after every key-up with the affected box, its value and its
/// 1-based position.
pub type ChangeFunc = Box<dyn FnMut(&PinBox, &str, usize) + Send>;

/// Called after a key-up that leaves every box filled, with the full code,
/// the triggering key and the error region the caller may fill in.
pub type CompleteFunc = Box<dyn FnMut(&str, &KeyMsg, &mut ErrorRegion) + Send>;

/// Presentational position of a box in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    /// The leftmost box.
    First,
    /// Any box between the first and the last.
    Mid,
    /// The rightmost box.
    Last,
}

/// Whether a key press was consumed by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// The widget handled the key (or swallowed it); the host should not act on it.
    Suppressed,
    /// The key's default action proceeds and the host may act on it too.
    Passthrough,
}

/// One single-character cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinBox {
    pub(super) index: usize,
    pub(super) value: Option<char>,
    pub(super) masked: bool,
    pub(super) placeholder: Option<String>,
    pub(super) kind: BoxKind,
    pub(super) disabled: bool,
}

impl PinBox {
    pub(super) fn new(index: usize, count: usize, masked: bool) -> Self {
        let kind = if index == 0 {
            BoxKind::First
        } else if index + 1 == count {
            BoxKind::Last
        } else {
            BoxKind::Mid
        };
        Self {
            index,
            value: None,
            masked,
            placeholder: None,
            kind,
            disabled: false,
        }
    }

    /// 0-based position in the row.
    pub fn index(&self) -> usize {
        self.index
    }

    /// 1-based position, as reported to change callbacks.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    /// The character held by this box, if any.
    pub fn char(&self) -> Option<char> {
        self.value
    }

    /// The box content as a string; empty when the box is empty.
    pub fn value(&self) -> String {
        self.value.map(String::from).unwrap_or_default()
    }

    /// Whether the box holds no character.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Whether the box displays its character obscured.
    pub fn masked(&self) -> bool {
        self.masked
    }

    /// Placeholder shown while the box is empty.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// First, middle or last box.
    pub fn kind(&self) -> BoxKind {
        self.kind
    }

    /// Whether the box currently rejects input.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub(super) fn set(&mut self, ch: char) {
        self.value = Some(ch);
    }

    pub(super) fn clear(&mut self) {
        self.value = None;
    }
}

/// The value carrier a pincode control is bound to.
///
/// While a control is live it owns the field, keeps it hidden and mirrors the
/// code into [`Field::value`]. [`Model::destroy`](super::Model::destroy) hands
/// it back visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    name: String,
    value: String,
    hidden: bool,
}

impl Field {
    /// Creates a visible, empty field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets an initial value, builder style.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// The field's name, used as its identity in a [`Registry`](super::Registry).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field's current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the field's value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Whether the field is hidden from display.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub(super) fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

/// Auxiliary hidden field that keeps password managers from treating the
/// masked boxes as a password to save. It never holds part of the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoyField {
    pub(super) masked: bool,
    pub(super) value: String,
}

impl DecoyField {
    pub(super) fn new() -> Self {
        Self {
            masked: true,
            value: String::new(),
        }
    }

    /// Switches the field to plain text and empties it. Runs on every key-down.
    pub(super) fn reset(&mut self) {
        self.masked = false;
        self.value.clear();
    }

    /// Whether the decoy is still in its masked (password) mode.
    pub fn masked(&self) -> bool {
        self.masked
    }

    /// The decoy's content.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Message slot shown under the boxes. Only the caller writes to it, usually
/// from the completion callback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorRegion {
    message: Option<String>,
}

impl ErrorRegion {
    /// Shows `message` under the boxes.
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// Removes any message.
    pub fn clear(&mut self) {
        self.message = None;
    }

    /// The current message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether no message is shown.
    pub fn is_empty(&self) -> bool {
        self.message.as_deref().map_or(true, str::is_empty)
    }
}
