//! View rendering for the pincode component.

use super::model::Model;
use super::types::PinBox;
use unicode_width::UnicodeWidthChar;

impl Model {
    /// View renders the boxes on one line, followed by the error region on
    /// the next line when it holds a message.
    pub fn view(&self) -> String {
        let row: Vec<String> = self
            .boxes
            .iter()
            .map(|b| format!("[{}]", self.box_view(b)))
            .collect();
        let mut v = row.join(&self.separator);

        if let Some(message) = self.error.message().filter(|m| !m.is_empty()) {
            v.push('\n');
            v.push_str(&self.error_style.render(message));
        }
        v
    }

    fn box_view(&self, b: &PinBox) -> String {
        let focused = self.focus && !self.disabled && b.index() == self.active;

        let (text, style) = match b.char() {
            Some(ch) => {
                let shown = if b.masked() { self.mask_char } else { ch };
                (shown.to_string(), &self.box_style)
            }
            None => match b.placeholder().and_then(first_cell) {
                Some(p) => (p, &self.placeholder_style),
                None => (" ".to_string(), &self.box_style),
            },
        };

        if focused {
            self.focused_box_style.render(&text)
        } else {
            style.render(&text)
        }
    }
}

/// The leading characters of `s` that fit in a single terminal cell.
fn first_cell(s: &str) -> Option<String> {
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > 1 {
            break;
        }
        width += w;
        out.push(ch);
    }
    (width == 1).then_some(out)
}
