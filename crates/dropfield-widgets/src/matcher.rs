//! Label lookup over an ordered list of options.

use std::borrow::Cow;

use ratatui::text::{Line, Span};

/// Anything that can be reduced to a plain-text option label.
///
/// For styled text the label is the concatenated content of its spans, so
/// an option reads the same whether or not it is decorated.
pub trait OptionLabel {
    fn label(&self) -> Cow<'_, str>;
}

impl OptionLabel for str {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl OptionLabel for &str {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl OptionLabel for String {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl OptionLabel for Span<'_> {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.content.as_ref())
    }
}

impl OptionLabel for Line<'_> {
    fn label(&self) -> Cow<'_, str> {
        match self.spans.as_slice() {
            [] => Cow::Borrowed(""),
            [only] => Cow::Borrowed(only.content.as_ref()),
            spans => Cow::Owned(spans.iter().map(|s| s.content.as_ref()).collect()),
        }
    }
}

/// Index of the first option whose label equals `text`, ignoring case.
pub fn find_index_by_label<T: OptionLabel>(text: &str, options: &[T]) -> Option<usize> {
    if options.is_empty() {
        return None;
    }
    let needle = text.to_lowercase();
    options
        .iter()
        .position(|option| option.label().to_lowercase() == needle)
}

/// Label of the option at `index`, or `""` when there is none.
pub fn label_at<T: OptionLabel>(index: Option<usize>, options: &[T]) -> String {
    index
        .and_then(|i| options.get(i))
        .map(|option| option.label().into_owned())
        .unwrap_or_default()
}
