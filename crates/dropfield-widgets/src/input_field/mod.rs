//! Combobox input: a text field with a dropdown of selectable options.
//!
//! The field keeps three things apart:
//!
//! * the **committed** pair: the last value/index reported with
//!   [`ChangeKind::Commit`] (or supplied by the host);
//! * the **input**: what the user is editing, reported with
//!   [`ChangeKind::Change`] on every accepted edit;
//! * the **preview**: a temporary value/index shown while the pointer hovers
//!   a row or the arrow keys walk the list. It shadows the input until it is
//!   committed or dropped.
//!
//! Arrow keys and hovering only preview. Enter, Tab, a row click or losing
//! focus commit; Escape resets to the committed pair.
//!
//! # Example
//!
//! ```ignore
//! use dropfield_widgets::input_field::InputField;
//!
//! let field = InputField::new("Country")
//!     .with_options(["France", "Germany", "Spain"])
//!     .with_strict(true)
//!     .with_required(true);
//! ```

mod view;

pub use view::{FieldLayout, Hit, InputFieldStyle};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use dropfield_core::command::Command;
use dropfield_core::component::Component;
use dropfield_core::event::{dispatch, Hook, Propagation};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::Frame;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::FieldError;
use crate::field_type::FieldType;
use crate::layered::Layered;
use crate::matcher::{find_index_by_label, label_at};
use crate::normalize::{
    self, clamp_index, min_max_constraints, parse_index, parse_value, Constraints, ErrorText,
    RawValue,
};
use crate::offset::{offset, Direction};

/// A value together with the option index it corresponds to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub value: String,
    /// `None` when the value does not correspond to an option.
    pub index: Option<usize>,
}

impl Selection {
    pub fn new(value: impl Into<String>, index: Option<usize>) -> Self {
        Self {
            value: value.into(),
            index,
        }
    }
}

/// Why a [`FieldChange`] was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// The user edited the text.
    Change,
    /// A value/index pair was accepted.
    Commit,
    /// The field went back to its committed pair.
    Reset,
}

/// A change reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub kind: ChangeKind,
    pub value: String,
    pub index: Option<usize>,
}

impl FieldChange {
    fn new(kind: ChangeKind, selection: &Selection) -> Self {
        Self {
            kind,
            value: selection.value.clone(),
            index: selection.index,
        }
    }
}

/// The part of the field a pointer event happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The field as a whole.
    Field,
    /// The dropdown list as a whole.
    Dropdown,
    /// A single dropdown row.
    Row(usize),
    /// The caret toggle.
    Caret,
}

/// An event offered to a host hook before the field reacts to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Focus,
    Blur,
    MouseEnter(Target),
    MouseLeave(Target),
    MouseDown(Target, MouseButton),
    MouseUp(Target, MouseButton),
}

/// Which hook slot a [`HostEvent`] goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    Focus,
    Blur,
    MouseEnter,
    MouseLeave,
    MouseDown,
    MouseUp,
}

impl HostEvent {
    pub fn kind(&self) -> HookKind {
        match self {
            HostEvent::Focus => HookKind::Focus,
            HostEvent::Blur => HookKind::Blur,
            HostEvent::MouseEnter(_) => HookKind::MouseEnter,
            HostEvent::MouseLeave(_) => HookKind::MouseLeave,
            HostEvent::MouseDown(..) => HookKind::MouseDown,
            HostEvent::MouseUp(..) => HookKind::MouseUp,
        }
    }
}

#[derive(Default)]
struct Hooks {
    focus: Option<Hook<HostEvent>>,
    blur: Option<Hook<HostEvent>>,
    mouse_enter: Option<Hook<HostEvent>>,
    mouse_leave: Option<Hook<HostEvent>>,
    mouse_down: Option<Hook<HostEvent>>,
    mouse_up: Option<Hook<HostEvent>>,
}

impl Hooks {
    fn slot(&mut self, kind: HookKind) -> &mut Option<Hook<HostEvent>> {
        match kind {
            HookKind::Focus => &mut self.focus,
            HookKind::Blur => &mut self.blur,
            HookKind::MouseEnter => &mut self.mouse_enter,
            HookKind::MouseLeave => &mut self.mouse_leave,
            HookKind::MouseDown => &mut self.mouse_down,
            HookKind::MouseUp => &mut self.mouse_up,
        }
    }

    /// Returns `true` when the field should go on with its own reaction.
    fn run(&mut self, event: HostEvent) -> bool {
        dispatch(self.slot(event.kind()).as_mut(), &event)
    }
}

/// Messages for the input field.
#[derive(Debug, Clone)]
pub enum Message {
    /// The field gained keyboard focus.
    Focus,
    /// The field lost keyboard focus.
    Blur,
    /// A keyboard event to process.
    KeyPress(KeyEvent),
    /// Replace the text wholesale (paste, programmatic edit).
    Input(String),
    /// The pointer entered the field.
    PointerEnter,
    /// The pointer left the field.
    PointerLeave,
    /// The pointer entered a dropdown row.
    RowEnter(usize),
    /// The pointer left the dropdown.
    DropdownLeave,
    /// A mouse button went down on a dropdown row.
    RowPress(usize, MouseButton),
    /// A mouse button went up on a dropdown row.
    RowRelease(usize, MouseButton),
    /// The caret toggle was clicked.
    CaretPress,
    /// A raw mouse event, with the area the field was last rendered into.
    Mouse(MouseEvent, Rect),
    /// Emitted when the value changes, is committed or is reset.
    Changed(FieldChange),
    /// Emitted with the raw text an edit tried to apply when the filter refused it.
    Rejected(String),
    /// Emitted for keys the field leaves to its host (Tab, unbound keys).
    Propagate(KeyEvent),
}

enum Edit {
    Applied(Command<Message>),
    Refused(Command<Message>),
}

/// A text input with a dropdown of options.
pub struct InputField {
    label: String,
    options: Vec<Line<'static>>,
    field_type: FieldType,
    min: Option<f64>,
    max: Option<f64>,
    constraints: Constraints,
    error: Option<ErrorText>,
    filter: Option<Regex>,
    strict: bool,
    use_caret: bool,
    readonly: bool,
    required: bool,
    disabled: bool,
    name: Option<String>,
    auto_complete: Option<String>,
    auto_focus: bool,
    max_visible: usize,
    style: InputFieldStyle,
    initial_index: Option<usize>,

    committed: Selection,
    input: Layered<Selection>,
    cursor: usize,
    scroll: usize,
    hover: bool,
    focus: bool,
    dropdown_open: bool,
    pressed_row: Option<usize>,
    pointer_row: Option<usize>,
    hooks: Hooks,
}

impl InputField {
    /// Create an empty text field with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            options: Vec::new(),
            field_type: FieldType::default(),
            min: None,
            max: None,
            constraints: Constraints::default(),
            error: None,
            filter: None,
            strict: false,
            use_caret: true,
            readonly: false,
            required: false,
            disabled: false,
            name: None,
            auto_complete: None,
            auto_focus: false,
            max_visible: 8,
            style: InputFieldStyle::default(),
            initial_index: None,
            committed: Selection::default(),
            input: Layered::default(),
            cursor: 0,
            scroll: 0,
            hover: false,
            focus: false,
            dropdown_open: false,
            pressed_row: None,
            pointer_row: None,
            hooks: Hooks::default(),
        }
    }

    /// Set the dropdown options. An index given to [`with_index`](Self::with_index)
    /// earlier in the chain is applied against these.
    pub fn with_options<I, T>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Line<'static>>,
    {
        self.set_options(options);
        if self.initial_index.is_some() {
            let value = self.committed.value.clone();
            self.set_selection(value, self.initial_index);
        }
        self
    }

    /// Set the input kind.
    pub fn with_type(mut self, field_type: FieldType) -> Self {
        self.field_type = field_type;
        self.constraints = min_max_constraints(field_type, self.min, self.max);
        self
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: impl Into<RawValue>) -> Self {
        let raw = value.into();
        let value = parse_value(Some(&raw));
        self.set_selection(value, self.committed.index);
        self
    }

    /// Set the initial option index. Out-of-range indices mean "no selection".
    pub fn with_index(mut self, index: usize) -> Self {
        self.initial_index = Some(index);
        let value = self.committed.value.clone();
        self.set_selection(value, Some(index));
        self
    }

    /// Set the initial option index from a loosely-typed number (`-1`, `NaN`, ...).
    pub fn with_raw_index(mut self, raw: f64) -> Self {
        self.initial_index = parse_index(Some(raw));
        let value = self.committed.value.clone();
        self.set_selection(value, self.initial_index);
        self
    }

    /// Set the label shown above the input.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Lower bound: the value for number fields, the length otherwise.
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self.constraints = min_max_constraints(self.field_type, self.min, self.max);
        self
    }

    /// Upper bound: the value for number fields, the length otherwise.
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self.constraints = min_max_constraints(self.field_type, self.min, self.max);
        self
    }

    /// Show an error underneath the field.
    pub fn with_error(mut self, error: impl Into<ErrorText>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Only accept edits whose full text matches `pattern`.
    pub fn with_filter(self, pattern: &str) -> Result<Self, FieldError> {
        let regex = Regex::new(pattern)?;
        Ok(self.with_filter_regex(regex))
    }

    /// Only accept edits whose full text matches `regex`.
    pub fn with_filter_regex(mut self, regex: Regex) -> Self {
        self.filter = Some(regex);
        self
    }

    /// In strict mode free text that matches no option is reset instead of committed.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Show a caret toggle for the dropdown instead of opening it on focus.
    pub fn with_caret(mut self, use_caret: bool) -> Self {
        self.use_caret = use_caret;
        self
    }

    /// Disallow text edits. Options can still be picked.
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Mark the field as required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Disable the field. A disabled field ignores every event.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Set the form name of the field.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the autocomplete hint for the field.
    pub fn with_auto_complete(mut self, hint: impl Into<String>) -> Self {
        self.auto_complete = Some(hint.into());
        self
    }

    /// Start out focused.
    pub fn with_auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self.focus = auto_focus;
        self
    }

    /// Set the maximum number of dropdown rows shown at once.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self.ensure_visible();
        self
    }

    /// Set the style configuration.
    pub fn with_style(mut self, style: InputFieldStyle) -> Self {
        self.style = style;
        self
    }

    /// Install a host hook. Returning [`Propagation::Handled`] from it
    /// suppresses the field's own reaction to that event.
    pub fn with_hook(
        mut self,
        kind: HookKind,
        hook: impl FnMut(&HostEvent) -> Propagation + Send + 'static,
    ) -> Self {
        *self.hooks.slot(kind) = Some(Box::new(hook));
        self
    }

    /// Replace the dropdown options. Indices past the new end are dropped.
    pub fn set_options<I, T>(&mut self, options: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Line<'static>>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        let count = self.options.len();
        self.committed.index = clamp_index(self.committed.index, count);
        let mut base = self.input.base().clone();
        base.index = clamp_index(base.index, count);
        let preview = self
            .input
            .preview()
            .filter(|p| clamp_index(p.index, count).is_some())
            .cloned();
        self.input.set_base(base);
        if let Some(preview) = preview {
            self.input.set_preview(preview);
        }
        if self.pressed_row.is_some_and(|row| row >= count) {
            self.pressed_row = None;
        }
        self.scroll = self.scroll.min(count.saturating_sub(1));
        self.ensure_visible();
    }

    /// Replace the committed value and index, as a host re-supplying them would.
    pub fn set_selection(&mut self, value: impl Into<String>, index: Option<usize>) {
        let selection = Selection::new(value, clamp_index(index, self.options.len()));
        self.committed = selection.clone();
        self.input.set_base(selection);
        self.move_cursor_end();
        self.ensure_visible();
    }

    /// Replace or clear the error shown underneath the field.
    pub fn set_error(&mut self, error: Option<ErrorText>) {
        self.error = error;
    }

    /// Enable or disable the field. Disabling closes the dropdown and drops
    /// focus and hover, since the matching blur or leave would be ignored.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.close();
            self.focus = false;
            self.hover = false;
            self.pointer_row = None;
        }
    }

    /// The value currently shown: the preview if any, else the input.
    pub fn value(&self) -> &str {
        &self.current().value
    }

    /// The option index currently highlighted.
    pub fn index(&self) -> Option<usize> {
        self.current().index
    }

    /// The value/index pair currently shown.
    pub fn current(&self) -> &Selection {
        self.input.resolve()
    }

    /// The last committed value/index pair.
    pub fn committed(&self) -> &Selection {
        &self.committed
    }

    /// Whether a preview is shadowing the input.
    pub fn is_previewing(&self) -> bool {
        self.input.is_previewing()
    }

    /// Whether the dropdown is open (it may still have nothing to show).
    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Whether the dropdown is open and has options to show.
    pub fn is_dropdown_visible(&self) -> bool {
        self.dropdown_open && !self.options.is_empty() && !self.disabled
    }

    /// Whether the pointer is over the field.
    pub fn is_hovered(&self) -> bool {
        self.hover
    }

    /// Whether the label should be drawn in its active style.
    pub fn is_active(&self) -> bool {
        self.hover || self.focus || !self.value().is_empty()
    }

    /// Whether the caret toggle is shown.
    pub fn shows_caret(&self) -> bool {
        normalize::show_caret(self.use_caret, self.options.len(), self.disabled)
    }

    /// The error line to display; empty when there is none or the field is disabled.
    pub fn error_message(&self) -> String {
        normalize::error_message(self.error.as_ref(), self.disabled)
    }

    pub fn constraints(&self) -> Constraints {
        self.constraints
    }

    pub fn options(&self) -> &[Line<'static>] {
        &self.options
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn auto_complete(&self) -> Option<&str> {
        self.auto_complete.as_deref()
    }

    pub fn auto_focus(&self) -> bool {
        self.auto_focus
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_readonly(&self) -> bool {
        self.readonly
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Cursor position within the shown value (char index, 0-based).
    pub fn cursor_position(&self) -> usize {
        self.cursor.min(self.value().chars().count())
    }

    fn log_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.label)
    }

    fn move_cursor_end(&mut self) {
        self.cursor = self.value().chars().count();
    }

    /// Index of the option on the first dropdown row.
    pub(crate) fn scroll_offset(&self) -> usize {
        self.scroll
    }

    /// Scroll the dropdown window just enough to show the highlighted option.
    fn ensure_visible(&mut self) {
        let Some(index) = self.index() else {
            return;
        };
        if index < self.scroll {
            self.scroll = index;
        } else if index >= self.scroll + self.max_visible {
            self.scroll = index + 1 - self.max_visible;
        }
    }

    fn set_preview(&mut self, index: usize) {
        let selection = Selection::new(label_at(Some(index), &self.options), Some(index));
        trace!(field = self.log_name(), index, "preview");
        self.input.set_preview(selection);
        self.move_cursor_end();
    }

    fn close(&mut self) {
        self.dropdown_open = false;
        self.input.clear_preview();
        self.pressed_row = None;
    }

    fn commit(&mut self, value: String, index: Option<usize>) -> Command<Message> {
        let selection = Selection::new(value, clamp_index(index, self.options.len()));
        debug!(
            field = self.log_name(),
            value = %selection.value,
            index = ?selection.index,
            "commit"
        );
        self.close();
        self.committed = selection.clone();
        self.input.set_base(selection);
        self.move_cursor_end();
        Command::message(Message::Changed(FieldChange::new(
            ChangeKind::Commit,
            &self.committed,
        )))
    }

    fn commit_option(&mut self, index: usize) -> Command<Message> {
        let value = label_at(Some(index), &self.options);
        self.commit(value, Some(index))
    }

    /// Commit typed text, resolving its index by label.
    fn commit_text(&mut self, value: String) -> Command<Message> {
        let index = find_index_by_label(&value, &self.options);
        self.commit(value, index)
    }

    fn reset(&mut self) -> Command<Message> {
        debug!(
            field = self.log_name(),
            value = %self.committed.value,
            index = ?self.committed.index,
            "reset"
        );
        self.close();
        self.input.set_base(self.committed.clone());
        self.move_cursor_end();
        Command::message(Message::Changed(FieldChange::new(
            ChangeKind::Reset,
            &self.committed,
        )))
    }

    fn edit(&mut self, text: String) -> Edit {
        if self.readonly {
            return Edit::Refused(Command::none());
        }
        if self.constraints.exceeds_max_length(&text) {
            trace!(field = self.log_name(), "edit exceeds max length");
            return Edit::Refused(Command::none());
        }
        if let Some(filter) = &self.filter {
            if !filter.is_match(&text) {
                trace!(field = self.log_name(), text = %text, "edit rejected by filter");
                return Edit::Refused(Command::message(Message::Rejected(text)));
            }
        }
        let index = find_index_by_label(&text, &self.options);
        let selection = Selection::new(text, index);
        self.input.set_base(selection);
        self.dropdown_open = true;
        self.ensure_visible();
        Edit::Applied(Command::message(Message::Changed(FieldChange::new(
            ChangeKind::Change,
            self.input.base(),
        ))))
    }

    /// Apply an edit and put the cursor at `cursor` if it went through.
    fn edit_at(&mut self, text: String, cursor: usize) -> Command<Message> {
        match self.edit(text) {
            Edit::Applied(cmd) => {
                self.cursor = cursor;
                cmd
            }
            Edit::Refused(cmd) => cmd,
        }
    }

    fn on_focus(&mut self) -> Command<Message> {
        if !self.hooks.run(HostEvent::Focus) {
            return Command::none();
        }
        self.focus = true;
        if !self.shows_caret() {
            self.dropdown_open = true;
        }
        Command::none()
    }

    fn on_blur(&mut self) -> Command<Message> {
        if !self.hooks.run(HostEvent::Blur) {
            return Command::none();
        }
        let cmd = if self.dropdown_open {
            let current = self.current().clone();
            match current.index {
                Some(index) => self.commit(current.value, Some(index)),
                None if self.strict => self.reset(),
                None => self.commit_text(current.value),
            }
        } else {
            self.close();
            Command::none()
        };
        self.focus = false;
        self.dropdown_open = false;
        cmd
    }

    fn on_key(&mut self, key: KeyEvent) -> Command<Message> {
        if !self.focus || key.kind == KeyEventKind::Release {
            return Command::none();
        }
        match (key.code, key.modifiers) {
            (KeyCode::Up, _) => self.on_arrow(Direction::Up),
            (KeyCode::Down, _) => self.on_arrow(Direction::Down),
            (KeyCode::Esc, _) => self.reset(),
            (KeyCode::Enter, _) => self.on_enter(),
            (KeyCode::Tab, _) => {
                let cmd = self.on_tab();
                Command::batch([cmd, Command::message(Message::Propagate(key))])
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let mut chars: Vec<char> = self.value().chars().collect();
                let cursor = self.cursor_position();
                chars.insert(cursor, c);
                self.edit_at(chars.into_iter().collect(), cursor + 1)
            }
            (KeyCode::Backspace, _) => {
                let cursor = self.cursor_position();
                if cursor == 0 {
                    return Command::none();
                }
                let mut chars: Vec<char> = self.value().chars().collect();
                chars.remove(cursor - 1);
                self.edit_at(chars.into_iter().collect(), cursor - 1)
            }
            (KeyCode::Delete, _) => {
                let cursor = self.cursor_position();
                let mut chars: Vec<char> = self.value().chars().collect();
                if cursor >= chars.len() {
                    return Command::none();
                }
                chars.remove(cursor);
                self.edit_at(chars.into_iter().collect(), cursor)
            }
            (KeyCode::Left, _) => {
                self.cursor = self.cursor_position().saturating_sub(1);
                Command::none()
            }
            (KeyCode::Right, _) => {
                let len = self.value().chars().count();
                self.cursor = (self.cursor_position() + 1).min(len);
                Command::none()
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                Command::none()
            }
            (KeyCode::End, _) => {
                self.move_cursor_end();
                Command::none()
            }
            _ => Command::message(Message::Propagate(key)),
        }
    }

    fn on_arrow(&mut self, direction: Direction) -> Command<Message> {
        self.dropdown_open = true;
        if let Some(next) = offset(self.index(), direction, self.options.len()) {
            self.set_preview(next);
            self.ensure_visible();
        }
        Command::none()
    }

    fn on_enter(&mut self) -> Command<Message> {
        match self.index() {
            Some(index) if self.dropdown_open => self.commit_option(index),
            _ if !self.options.is_empty() && !self.dropdown_open => {
                self.dropdown_open = true;
                Command::none()
            }
            _ => {
                let value = self.value().to_owned();
                self.commit_text(value)
            }
        }
    }

    fn on_tab(&mut self) -> Command<Message> {
        match self.index() {
            Some(index) if self.dropdown_open => self.commit_option(index),
            _ => {
                let value = self.value().to_owned();
                self.commit_text(value)
            }
        }
    }

    fn on_row_enter(&mut self, row: usize) -> Command<Message> {
        if !self.hooks.run(HostEvent::MouseEnter(Target::Row(row))) || row >= self.options.len() {
            return Command::none();
        }
        self.set_preview(row);
        Command::none()
    }

    fn on_dropdown_leave(&mut self) -> Command<Message> {
        if self.hooks.run(HostEvent::MouseLeave(Target::Dropdown)) {
            self.input.clear_preview();
            self.move_cursor_end();
        }
        Command::none()
    }

    fn on_row_press(&mut self, row: usize, button: MouseButton) -> Command<Message> {
        if self.hooks.run(HostEvent::MouseDown(Target::Row(row), button))
            && button == MouseButton::Left
            && row < self.options.len()
        {
            self.pressed_row = Some(row);
        }
        Command::none()
    }

    fn on_row_release(&mut self, row: usize, button: MouseButton) -> Command<Message> {
        let pressed = self.pressed_row.take();
        if !self.hooks.run(HostEvent::MouseUp(Target::Row(row), button))
            || button != MouseButton::Left
            || pressed != Some(row)
        {
            return Command::none();
        }
        self.commit_option(row)
    }

    fn on_caret_press(&mut self) -> Command<Message> {
        if !self.hooks.run(HostEvent::MouseDown(Target::Caret, MouseButton::Left)) || !self.shows_caret() {
            return Command::none();
        }
        if self.dropdown_open {
            self.close();
        } else {
            self.dropdown_open = true;
        }
        Command::none()
    }

    fn on_pointer(&mut self, inside: bool) -> Command<Message> {
        let event = if inside {
            HostEvent::MouseEnter(Target::Field)
        } else {
            HostEvent::MouseLeave(Target::Field)
        };
        if self.hooks.run(event) {
            self.hover = inside;
        }
        Command::none()
    }

    /// Translate a raw mouse event into the pointer messages it implies.
    fn on_mouse(&mut self, event: MouseEvent, area: Rect) -> Command<Message> {
        // Pin the window that was drawn so hovering a row cannot scroll it
        let layout = self.layout(area);
        if layout.dropdown.is_some() {
            self.scroll = layout.first_row;
        }
        let hit = self.hit_test(area, event.column, event.row);
        let mut messages = Vec::new();

        if hit.is_some() != self.hover {
            messages.push(if hit.is_some() {
                Message::PointerEnter
            } else {
                Message::PointerLeave
            });
        }

        match event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let row = match hit {
                    Some(Hit::Row(row)) => Some(row),
                    _ => None,
                };
                if row != self.pointer_row {
                    match row {
                        Some(row) => messages.push(Message::RowEnter(row)),
                        None => messages.push(Message::DropdownLeave),
                    }
                }
                self.pointer_row = row;
            }
            MouseEventKind::Down(button) => match hit {
                Some(Hit::Row(row)) => messages.push(Message::RowPress(row, button)),
                Some(Hit::Caret) if button == MouseButton::Left => messages.push(Message::CaretPress),
                _ => {}
            },
            MouseEventKind::Up(button) => match hit {
                Some(Hit::Row(row)) => messages.push(Message::RowRelease(row, button)),
                Some(Hit::Input) if button == MouseButton::Left && self.focus => {
                    if !self.options.is_empty() {
                        self.dropdown_open = true;
                    }
                    self.pressed_row = None;
                }
                _ => self.pressed_row = None,
            },
            _ => {}
        }

        Command::batch(messages.into_iter().map(|msg| self.update(msg)))
    }
}

impl Component for InputField {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if self.disabled {
            trace!(field = self.log_name(), "disabled, ignoring {:?}", msg);
            return Command::none();
        }
        match msg {
            Message::Focus => self.on_focus(),
            Message::Blur => self.on_blur(),
            Message::KeyPress(key) => self.on_key(key),
            Message::Input(text) => {
                let cursor = text.chars().count();
                self.edit_at(text, cursor)
            }
            Message::PointerEnter => self.on_pointer(true),
            Message::PointerLeave => self.on_pointer(false),
            Message::RowEnter(row) => self.on_row_enter(row),
            Message::DropdownLeave => self.on_dropdown_leave(),
            Message::RowPress(row, button) => self.on_row_press(row, button),
            Message::RowRelease(row, button) => self.on_row_release(row, button),
            Message::CaretPress => self.on_caret_press(),
            Message::Mouse(event, area) => self.on_mouse(event, area),
            Message::Changed(_) | Message::Rejected(_) | Message::Propagate(_) => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.render(frame, area);
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
