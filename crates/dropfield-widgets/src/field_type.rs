//! Input kinds an [`InputField`](crate::input_field::InputField) can take.

use std::fmt;

/// The kind of value an input field holds.
///
/// Only [`Number`](FieldType::Number) and [`Password`](FieldType::Password)
/// change behavior: numbers turn min/max into value bounds instead of length
/// bounds, passwords are masked when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldType {
    #[default]
    Text,
    Password,
    Number,
    Tel,
    Email,
    Search,
    Url,
}

impl FieldType {
    /// All field types, in declaration order.
    pub const ALL: [FieldType; 7] = [
        FieldType::Text,
        FieldType::Password,
        FieldType::Number,
        FieldType::Tel,
        FieldType::Email,
        FieldType::Search,
        FieldType::Url,
    ];

    /// The lowercase name of the type (`"text"`, `"number"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Password => "password",
            FieldType::Number => "number",
            FieldType::Tel => "tel",
            FieldType::Email => "email",
            FieldType::Search => "search",
            FieldType::Url => "url",
        }
    }

    /// Parse a type name, case-insensitively. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<FieldType> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }

    /// Parse a type name, falling back to [`FieldType::Text`].
    pub fn from_name_or_default(name: &str) -> FieldType {
        Self::from_name(name).unwrap_or_default()
    }

    /// Whether min/max describe the numeric value rather than its length.
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldType::Number)
    }

    /// Whether the value should be masked on screen.
    pub fn is_masked(self) -> bool {
        matches!(self, FieldType::Password)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
