//! Key handling and public operations for the pincode model.

use super::model::{paste, Model};
use super::types::{
    DecoyField, ErrorRegion, Field, KeyDisposition, PasteErrMsg, PasteMsg, PinBox,
};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl Model {
    /// The code entered so far: every box's character in order.
    pub fn value(&self) -> &str {
        self.host.value()
    }

    /// Whether every box holds a character.
    pub fn is_complete(&self) -> bool {
        self.boxes.iter().all(|b| !b.is_empty())
    }

    /// The boxes, left to right.
    pub fn boxes(&self) -> &[PinBox] {
        &self.boxes
    }

    /// Number of boxes. Fixed for the lifetime of the model.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Always false: a model has at least one box.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Index of the box that receives key presses.
    pub fn focused_index(&self) -> usize {
        self.active
    }

    /// The bound field.
    pub fn host(&self) -> &Field {
        &self.host
    }

    /// The decoy field, present only while masking with the decoy enabled.
    pub fn decoy(&self) -> Option<&DecoyField> {
        self.decoy.as_ref()
    }

    /// The error region shown under the boxes.
    pub fn error(&self) -> &ErrorRegion {
        &self.error
    }

    /// Mutable access to the error region, for callers reporting outside the
    /// completion callback.
    pub fn error_mut(&mut self) -> &mut ErrorRegion {
        &mut self.error
    }

    /// Whether the model currently has keyboard focus.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// How the most recent key message was handled.
    ///
    /// [`Model::update`] cannot return it, so a host that routes keys through
    /// `update` reads it here to decide whether to act on tab, ctrl+c or
    /// ctrl+x itself. `None` until the first key.
    pub fn last_disposition(&self) -> Option<KeyDisposition> {
        self.last_disposition
    }

    /// Whether the boxes reject input.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Makes every box accept input again. Values are untouched.
    pub fn enable(&mut self) {
        self.disabled = false;
        for b in &mut self.boxes {
            b.disabled = false;
        }
    }

    /// Makes every box reject input. Values are untouched.
    pub fn disable(&mut self) {
        self.disabled = true;
        for b in &mut self.boxes {
            b.disabled = true;
        }
    }

    /// Focuses the model with the first box selected. Ignored while disabled.
    pub fn focus(&mut self) {
        if self.disabled {
            return;
        }
        self.focus = true;
        self.active = 0;
    }

    /// Removes keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Empties every box and the bound field. No callback is invoked.
    pub fn clear(&mut self) {
        for b in &mut self.boxes {
            b.clear();
        }
        self.sync_host();
    }

    /// Tears the control down and returns the bound field, visible again and
    /// holding the last synchronized value.
    pub fn destroy(mut self) -> Field {
        self.host.set_hidden(false);
        tracing::trace!(field = self.host.name(), "pincode destroyed");
        self.host
    }

    /// Runs the key-down filter for the focused box.
    ///
    /// Mutates the box and moves focus according to the key map, resets the
    /// decoy field, and reports whether the key was consumed. Pair each call
    /// with [`Model::key_up`]; [`Model::handle_key`] does both.
    pub fn key_down(&mut self, key: &KeyMsg) -> KeyDisposition {
        let disposition = self.filter_key(key);
        self.last_disposition = Some(disposition);
        disposition
    }

    fn filter_key(&mut self, key: &KeyMsg) -> KeyDisposition {
        if !self.accepts_input() {
            return KeyDisposition::Passthrough;
        }

        if let Some(decoy) = self.decoy.as_mut() {
            decoy.reset();
        }

        let i = self.active;
        self.pressed = Some(i);

        let disposition = if matches_binding(key, &self.key_map.clear_backward) {
            self.boxes[i].clear();
            self.focus_prev();
            KeyDisposition::Suppressed
        } else if matches_binding(key, &self.key_map.clear_forward) {
            self.boxes[i].clear();
            self.focus_next();
            KeyDisposition::Suppressed
        } else if matches_binding(key, &self.key_map.prev_box) {
            self.focus_prev();
            KeyDisposition::Suppressed
        } else if matches_binding(key, &self.key_map.next_box) {
            self.focus_next();
            KeyDisposition::Suppressed
        } else if let Some(d) = digit(key) {
            self.boxes[i].set(d);
            self.focus_next();
            KeyDisposition::Suppressed
        } else if matches_binding(key, &self.key_map.delete) {
            self.boxes[i].clear();
            KeyDisposition::Passthrough
        } else if matches_binding(key, &self.key_map.paste)
            || matches_binding(key, &self.key_map.passthrough)
        {
            KeyDisposition::Passthrough
        } else {
            KeyDisposition::Suppressed
        };

        tracing::trace!(
            field = self.host.name(),
            key = ?key.key,
            box_index = i,
            ?disposition,
            "pincode key down"
        );
        disposition
    }

    /// Runs the key-up synchronization.
    ///
    /// Writes the concatenated code into the bound field, calls the completion
    /// callback when every box is filled, then calls the change callback for
    /// the box the key was pressed in.
    pub fn key_up(&mut self, key: &KeyMsg) {
        if !self.accepts_input() {
            self.pressed = None;
            return;
        }
        let index = self.pressed.take().unwrap_or(self.active);

        self.sync_host();

        if self.is_complete() {
            tracing::debug!(field = self.host.name(), "pincode complete");
            if let Some(on_complete) = self.on_complete.as_mut() {
                on_complete(self.host.value(), key, &mut self.error);
            }
        }

        if let Some(on_change) = self.on_change.as_mut() {
            let b = &self.boxes[index];
            on_change(b, &b.value(), b.position());
        }
    }

    /// Handles one key press end to end: key-down filter, then key-up sync.
    ///
    /// Clipboard paste is only performed through [`Model::update`], which can
    /// return the command that reads the clipboard.
    pub fn handle_key(&mut self, key: &KeyMsg) -> KeyDisposition {
        let disposition = self.key_down(key);
        self.key_up(key);
        disposition
    }

    /// Update handles key and paste messages.
    ///
    /// A paste key returns the clipboard command; the key-up phase for it
    /// runs once the clipboard result arrives. Whether a key was consumed is
    /// available from [`Model::last_disposition`].
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if !self.accepts_input() {
                self.last_disposition = Some(KeyDisposition::Passthrough);
                return None;
            }
            if matches_binding(key_msg, &self.key_map.paste) {
                self.key_down(key_msg);
                return Some(paste());
            }
            self.handle_key(key_msg);
            return None;
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            self.apply_paste(&paste_msg.0);
            return None;
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            tracing::debug!(field = self.host.name(), error = %paste_err.0, "pincode paste failed");
            if self.pressed.is_some() {
                self.key_up(&paste_key());
            }
        }

        None
    }

    /// Writes the first printable pasted character into the box the paste
    /// key was pressed in, as a one-character field would, then runs key-up
    /// sync. Leading whitespace and control characters are skipped.
    pub(super) fn apply_paste(&mut self, text: &str) {
        if !self.accepts_input() {
            self.pressed = None;
            return;
        }
        let index = *self.pressed.get_or_insert(self.active);
        if let Some(ch) = text.chars().find(|c| !c.is_whitespace() && !c.is_control()) {
            self.boxes[index].set(ch);
        }
        self.key_up(&paste_key());
    }

    /// Mirrors the boxes into the bound field.
    pub(super) fn sync_host(&mut self) {
        let value: String = self.boxes.iter().filter_map(PinBox::char).collect();
        self.host.set_value(value);
    }

    fn accepts_input(&self) -> bool {
        self.focus && !self.disabled
    }

    fn focus_prev(&mut self) {
        if self.active > 0 {
            self.active -= 1;
        }
    }

    fn focus_next(&mut self) {
        if self.active + 1 < self.boxes.len() {
            self.active += 1;
        }
    }
}

/// The digit typed by `key`, if it is an unmodified `0`-`9`.
fn digit(key: &KeyMsg) -> Option<char> {
    match key.key {
        KeyCode::Char(c)
            if c.is_ascii_digit()
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn paste_key() -> KeyMsg {
    KeyMsg {
        key: KeyCode::Char('v'),
        modifiers: KeyModifiers::CONTROL,
    }
}

impl Component for Model {
    /// Focuses the first box. Never returns a command.
    fn focus(&mut self) -> Option<Cmd> {
        Model::focus(self);
        None
    }

    fn blur(&mut self) {
        Model::blur(self)
    }

    fn focused(&self) -> bool {
        Model::focused(self)
    }
}
