//! Rendering and hit-testing for [`InputField`].
//!
//! Both go through [`InputField::layout`], so a mouse event lands on the
//! same row that was drawn there.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use super::InputField;

const CARET_WIDTH: u16 = 2;
const MASK: char = '•';

/// Style configuration for the input field.
#[derive(Debug, Clone)]
pub struct InputFieldStyle {
    /// Label while the field is idle.
    pub label: Style,
    /// Label while the field is hovered, focused or filled.
    pub label_active: Style,
    /// The required marker.
    pub required: Style,
    /// The input text.
    pub text: Style,
    /// The cursor cell.
    pub cursor: Style,
    /// The caret toggle.
    pub caret: Style,
    /// The error line.
    pub error: Style,
    /// Unhighlighted dropdown rows.
    pub item: Style,
    /// The highlighted dropdown row.
    pub selected_item: Style,
    /// Applied over everything while disabled.
    pub disabled: Style,
}

impl Default for InputFieldStyle {
    fn default() -> Self {
        Self {
            label: Style::default().fg(Color::DarkGray),
            label_active: Style::default().fg(Color::Cyan),
            required: Style::default().fg(Color::Red),
            text: Style::default(),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            caret: Style::default().fg(Color::Cyan),
            error: Style::default().fg(Color::Red),
            item: Style::default(),
            selected_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
        }
    }
}

/// Where each part of the field sits inside the area it renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldLayout {
    pub label: Rect,
    pub input: Rect,
    pub caret: Option<Rect>,
    pub error: Option<Rect>,
    pub dropdown: Option<Rect>,
    /// Index of the option drawn on the first dropdown row.
    pub first_row: usize,
}

impl FieldLayout {
    /// The option index drawn at screen row `y`, if any.
    pub fn row_at(&self, y: u16) -> Option<usize> {
        let dropdown = self.dropdown?;
        if y < dropdown.y || y >= dropdown.bottom() {
            return None;
        }
        Some(self.first_row + (y - dropdown.y) as usize)
    }
}

/// The part of the field under a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Label,
    Input,
    Caret,
    Error,
    Row(usize),
}

fn line_at(area: Rect, offset: u16) -> Option<Rect> {
    (offset < area.height).then(|| Rect {
        y: area.y + offset,
        height: 1,
        ..area
    })
}

/// Cut `text` to at most `width` columns, ending in `…` when shortened.
fn truncate(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_owned();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

impl InputField {
    /// Compute where each part of the field goes inside `area`.
    pub fn layout(&self, area: Rect) -> FieldLayout {
        let label = line_at(area, 0).unwrap_or_default();
        let mut input = line_at(area, 1).unwrap_or_default();
        let mut next = 2;

        let caret = if self.shows_caret() && input.width > CARET_WIDTH {
            input.width -= CARET_WIDTH;
            Some(Rect {
                x: input.right(),
                width: CARET_WIDTH,
                ..input
            })
        } else {
            None
        };

        let error = if self.error_message().is_empty() {
            None
        } else {
            let rect = line_at(area, next);
            next += 1;
            rect
        };

        let mut first_row = 0;
        let dropdown = if self.is_dropdown_visible() && next < area.height {
            let room = (area.height - next) as usize;
            let count = self.options.len();
            let rows = count.min(self.max_visible).min(room);
            first_row = self.scroll_offset().min(count - rows);
            // Only a short area can push the highlight out of the stored window
            if let Some(index) = self.index() {
                if index < first_row {
                    first_row = index;
                } else if index >= first_row + rows {
                    first_row = index + 1 - rows;
                }
            }
            Some(Rect {
                y: area.y + next,
                height: rows as u16,
                ..area
            })
        } else {
            None
        };

        FieldLayout {
            label,
            input,
            caret,
            error,
            dropdown,
            first_row,
        }
    }

    /// Which part of the field rendered into `area` is at (`column`, `row`).
    pub fn hit_test(&self, area: Rect, column: u16, row: u16) -> Option<Hit> {
        let layout = self.layout(area);
        let pos = Position::new(column, row);
        if layout.caret.is_some_and(|r| r.contains(pos)) {
            Some(Hit::Caret)
        } else if layout.input.contains(pos) {
            Some(Hit::Input)
        } else if layout.label.contains(pos) {
            Some(Hit::Label)
        } else if layout.error.is_some_and(|r| r.contains(pos)) {
            Some(Hit::Error)
        } else if layout.dropdown.is_some_and(|r| r.contains(pos)) {
            layout.row_at(row).map(Hit::Row)
        } else {
            None
        }
    }

    fn styled(&self, style: Style) -> Style {
        if self.disabled {
            style.patch(self.style.disabled)
        } else {
            style
        }
    }

    pub(super) fn render(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let layout = self.layout(area);

        // Label and required marker
        let label_style = if self.is_active() {
            self.style.label_active
        } else {
            self.style.label
        };
        let marker = if self.required { " *" } else { "" };
        let room = (layout.label.width as usize).saturating_sub(marker.len());
        let mut spans = vec![Span::styled(
            truncate(&self.label, room),
            self.styled(label_style),
        )];
        if self.required {
            spans.push(Span::styled(marker, self.styled(self.style.required)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), layout.label);

        if layout.input.height > 0 {
            self.render_input(frame, layout.input);
        }

        if let Some(caret) = layout.caret {
            let glyph = if self.dropdown_open { " ▴" } else { " ▾" };
            frame.render_widget(
                Paragraph::new(Span::styled(glyph, self.styled(self.style.caret))),
                caret,
            );
        }

        if let Some(error) = layout.error {
            let text = truncate(&self.error_message(), error.width as usize);
            frame.render_widget(
                Paragraph::new(Span::styled(text, self.styled(self.style.error))),
                error,
            );
        }

        if let Some(dropdown) = layout.dropdown {
            self.render_dropdown(frame, dropdown, layout.first_row);
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let chars: Vec<char> = if self.field_type.is_masked() {
            vec![MASK; self.value().chars().count()]
        } else {
            self.value().chars().collect()
        };
        let text_style = self.styled(self.style.text);
        let available = area.width as usize;

        if !self.focus {
            let shown: String = chars.iter().collect();
            frame.render_widget(
                Paragraph::new(Span::styled(truncate(&shown, available), text_style)),
                area,
            );
            return;
        }

        // Keep the cursor cell on screen
        let cursor = self.cursor_position();
        let start = (cursor + 1).saturating_sub(available);
        let end = (start + available).min(chars.len());

        let mut spans = Vec::new();
        let before: String = chars[start..cursor].iter().collect();
        if !before.is_empty() {
            spans.push(Span::styled(before, text_style));
        }
        if cursor < end {
            spans.push(Span::styled(chars[cursor].to_string(), self.style.cursor));
            let after: String = chars[cursor + 1..end].iter().collect();
            if !after.is_empty() {
                spans.push(Span::styled(after, text_style));
            }
        } else {
            spans.push(Span::styled(" ", self.style.cursor));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_dropdown(&self, frame: &mut Frame, area: Rect, first_row: usize) {
        frame.render_widget(Clear, area);
        let highlighted = self.index();
        for (i, option) in self
            .options
            .iter()
            .enumerate()
            .skip(first_row)
            .take(area.height as usize)
        {
            let row_area = Rect {
                y: area.y + (i - first_row) as u16,
                height: 1,
                ..area
            };
            let is_selected = highlighted == Some(i);
            let style = if is_selected {
                self.style.selected_item
            } else {
                self.style.item
            };
            let prefix = if is_selected { "▸ " } else { "  " };
            let mut spans = vec![Span::raw(prefix)];
            spans.extend(option.spans.iter().cloned());
            frame.render_widget(
                Paragraph::new(Line::from(spans).style(self.styled(style))),
                row_area,
            );
        }
    }
}
