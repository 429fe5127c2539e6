//! Core model implementation for the pincode component.

use super::config::Config;
use super::keymap::{default_key_map, KeyMap};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{
    ChangeFunc, CompleteFunc, DecoyField, ErrorRegion, Field, KeyDisposition, PasteErrMsg, PinBox,
};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::time::Duration;

/// A row of single-character boxes bound to one hidden [`Field`].
///
/// The model owns its field for as long as it is live. Every key press
/// updates the boxes, writes their concatenation into the field and then
/// notifies the completion and change callbacks, in that order.
///
/// # Examples
///
/// ```rust
/// use pincode_input::pincode::{new, Config, Field};
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let mut pin = new(Field::new("otp"), Config::default());
/// pin.focus();
/// for c in "1234".chars() {
///     pin.handle_key(&KeyMsg { key: KeyCode::Char(c), modifiers: KeyModifiers::NONE });
/// }
/// assert_eq!(pin.value(), "1234");
/// assert!(pin.is_complete());
/// ```
pub struct Model {
    /// Style of an unfocused box.
    pub box_style: Style,
    /// Style of the box that has focus.
    pub focused_box_style: Style,
    /// Style of a placeholder in an empty box.
    pub placeholder_style: Style,
    /// Style of the error region.
    pub error_style: Style,
    /// Text between adjacent boxes.
    pub separator: String,
    /// Key bindings.
    pub key_map: KeyMap,
    /// Character drawn for a masked box.
    pub mask_char: char,

    pub(super) host: Field,
    pub(super) boxes: Vec<PinBox>,
    pub(super) decoy: Option<DecoyField>,
    pub(super) error: ErrorRegion,
    pub(super) active: usize,
    pub(super) pressed: Option<usize>,
    pub(super) last_disposition: Option<KeyDisposition>,
    pub(super) focus: bool,
    pub(super) disabled: bool,
    pub(super) on_change: Option<ChangeFunc>,
    pub(super) on_complete: Option<CompleteFunc>,
}

/// Builds a pincode control over `host`.
///
/// The field is hidden, `config.inputs` boxes are created and, when digits
/// are shown and the field already holds a value that fits, the boxes are
/// filled from it. The field value is then resynchronized from the boxes.
pub fn new(host: Field, config: Config) -> Model {
    let count = if config.inputs == 0 {
        tracing::debug!(field = host.name(), "pincode configured with 0 inputs, using 1");
        1
    } else {
        config.inputs
    };

    let placeholders = config.split_placeholders(count);
    let mut boxes: Vec<PinBox> = placeholders
        .into_iter()
        .enumerate()
        .map(|(i, placeholder)| {
            let mut b = PinBox::new(i, count, config.hide_digits);
            b.placeholder = placeholder;
            b
        })
        .collect();

    if !config.hide_digits && !host.value().is_empty() {
        let current: Vec<char> = host.value().chars().collect();
        if current.len() <= count {
            for (b, ch) in boxes.iter_mut().zip(current) {
                b.set(ch);
            }
        } else {
            tracing::debug!(
                field = host.name(),
                len = current.len(),
                inputs = count,
                "initial value longer than the box count, not applied"
            );
        }
    }

    let decoy = (config.hide_digits && config.decoy_field).then(DecoyField::new);

    let mut m = Model {
        box_style: Style::new(),
        focused_box_style: Style::new().reverse(true),
        placeholder_style: Style::new().foreground(Color::from("240")),
        error_style: Style::new().foreground(Color::from("9")),
        separator: " ".to_string(),
        key_map: default_key_map(),
        mask_char: config.mask_char,
        host,
        boxes,
        decoy,
        error: ErrorRegion::default(),
        active: 0,
        pressed: None,
        last_disposition: None,
        focus: false,
        disabled: false,
        on_change: config.on_change,
        on_complete: config.on_complete,
    };

    m.host.set_hidden(true);
    m.sync_host();
    tracing::trace!(field = m.host.name(), inputs = count, "pincode built");
    m
}

impl Default for Model {
    fn default() -> Self {
        new(Field::default(), Config::default())
    }
}

/// Creates a command that reads the system clipboard.
///
/// The command resolves to a [`PasteMsg`](super::PasteMsg) with the clipboard
/// text, or a [`PasteErrMsg`] when the clipboard cannot be read.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Model::default();
        model.focus();
        (model, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
