//! Coercion of loosely-typed host input into canonical field values.
//!
//! Everything here is total: bad input is mapped onto a default instead of
//! being reported.

use std::fmt;
use std::sync::Arc;

use crate::field_type::FieldType;

/// The value a host may hand to a field.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Used verbatim.
    Text(String),
    /// Printed in decimal; `NaN` becomes the empty string.
    Number(f64),
    /// Joined with `,`.
    List(Vec<String>),
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<Vec<String>> for RawValue {
    fn from(items: Vec<String>) -> Self {
        RawValue::List(items)
    }
}

impl From<Vec<&str>> for RawValue {
    fn from(items: Vec<&str>) -> Self {
        RawValue::List(items.into_iter().map(str::to_owned).collect())
    }
}

/// Canonical string for `raw`, or `""` when absent.
pub fn parse_value(raw: Option<&RawValue>) -> String {
    parse_value_or(raw, "")
}

/// Canonical string for `raw`, or `default` when absent.
///
/// `NaN` always yields the empty string, not `default`.
pub fn parse_value_or(raw: Option<&RawValue>, default: &str) -> String {
    match raw {
        Some(RawValue::Text(s)) => s.clone(),
        Some(RawValue::Number(n)) => number_to_string(*n),
        Some(RawValue::List(items)) => items.join(","),
        None => default.to_owned(),
    }
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        String::new()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_owned()
    } else {
        // f64's Display already drops a trailing ".0"
        n.to_string()
    }
}

/// Canonical index for `raw`.
///
/// Absent, `NaN` and negative values mean "no selection". Fractions are
/// truncated. There is no upper bound here; see [`clamp_index`].
pub fn parse_index(raw: Option<f64>) -> Option<usize> {
    match raw {
        Some(n) if !n.is_nan() && n >= 0.0 => Some(n as usize),
        _ => None,
    }
}

/// Drop an index that points past the end of a list of `count` options.
pub fn clamp_index(index: Option<usize>, count: usize) -> Option<usize> {
    index.filter(|&i| i < count)
}

/// Bounds derived from a field's min/max settings.
///
/// Numeric fields bound the value, every other type bounds the length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Constraints {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl Constraints {
    /// Whether no bound is set at all.
    pub fn is_empty(&self) -> bool {
        *self == Constraints::default()
    }

    /// Whether `text` exceeds the maximum length, counted in characters.
    pub fn exceeds_max_length(&self, text: &str) -> bool {
        self.max_length
            .is_some_and(|max| text.chars().count() > max)
    }
}

/// Map min/max onto value or length bounds depending on `field_type`.
pub fn min_max_constraints(field_type: FieldType, min: Option<f64>, max: Option<f64>) -> Constraints {
    if field_type.is_numeric() {
        Constraints {
            min,
            max,
            ..Constraints::default()
        }
    } else {
        Constraints {
            min_length: min.map(length_bound),
            max_length: max.map(length_bound),
            ..Constraints::default()
        }
    }
}

fn length_bound(n: f64) -> usize {
    if n.is_nan() || n <= 0.0 {
        0
    } else {
        n as usize
    }
}

/// An error to show underneath a field.
#[derive(Debug, Clone)]
pub enum ErrorText {
    /// A plain message.
    Message(String),
    /// An error value, shown through its `Display` impl.
    Error(Arc<dyn std::error::Error + Send + Sync>),
}

impl ErrorText {
    /// Wrap any error value.
    pub fn from_error(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        ErrorText::Error(Arc::new(err))
    }
}

impl fmt::Display for ErrorText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorText::Message(msg) => f.write_str(msg),
            ErrorText::Error(err) => write!(f, "{err}"),
        }
    }
}

impl From<&str> for ErrorText {
    fn from(s: &str) -> Self {
        ErrorText::Message(s.to_owned())
    }
}

impl From<String> for ErrorText {
    fn from(s: String) -> Self {
        ErrorText::Message(s)
    }
}

/// The error line to display; empty when there is none or the field is disabled.
pub fn error_message(error: Option<&ErrorText>, disabled: bool) -> String {
    match error {
        Some(err) if !disabled => err.to_string(),
        _ => String::new(),
    }
}

/// Whether the caret toggle is shown instead of opening the dropdown on focus.
pub fn show_caret(use_caret: bool, option_count: usize, disabled: bool) -> bool {
    use_caret && option_count > 0 && !disabled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_passes_through() {
        assert_eq!(parse_value(Some(&RawValue::from("Option 1"))), "Option 1");
    }

    #[test]
    fn numbers_print_in_decimal() {
        assert_eq!(parse_value(Some(&RawValue::Number(3.0))), "3");
        assert_eq!(parse_value(Some(&RawValue::Number(2.5))), "2.5");
        assert_eq!(parse_value(Some(&RawValue::Number(-7.0))), "-7");
        assert_eq!(parse_value(Some(&RawValue::Number(f64::INFINITY))), "Infinity");
    }

    #[test]
    fn nan_is_empty_even_with_default() {
        assert_eq!(parse_value_or(Some(&RawValue::Number(f64::NAN)), "x"), "");
    }

    #[test]
    fn lists_join_with_comma() {
        let raw = RawValue::from(vec!["a", "b", "c"]);
        assert_eq!(parse_value(Some(&raw)), "a,b,c");
        assert_eq!(parse_value(Some(&RawValue::List(vec![]))), "");
    }

    #[test]
    fn absent_value_uses_default() {
        assert_eq!(parse_value(None), "");
        assert_eq!(parse_value_or(None, "fallback"), "fallback");
    }

    #[test]
    fn index_parsing() {
        assert_eq!(parse_index(None), None);
        assert_eq!(parse_index(Some(f64::NAN)), None);
        assert_eq!(parse_index(Some(-1.0)), None);
        assert_eq!(parse_index(Some(-42.0)), None);
        assert_eq!(parse_index(Some(0.0)), Some(0));
        assert_eq!(parse_index(Some(2.9)), Some(2));
        assert_eq!(parse_index(Some(1000.0)), Some(1000));
    }

    #[test]
    fn clamp_drops_out_of_range() {
        assert_eq!(clamp_index(Some(2), 3), Some(2));
        assert_eq!(clamp_index(Some(3), 3), None);
        assert_eq!(clamp_index(Some(0), 0), None);
        assert_eq!(clamp_index(None, 3), None);
    }

    #[test]
    fn numeric_fields_bound_the_value() {
        let c = min_max_constraints(FieldType::Number, Some(1.0), Some(10.0));
        assert_eq!(c.min, Some(1.0));
        assert_eq!(c.max, Some(10.0));
        assert_eq!(c.min_length, None);
        assert_eq!(c.max_length, None);
    }

    #[test]
    fn other_fields_bound_the_length() {
        let c = min_max_constraints(FieldType::Email, Some(3.0), Some(8.0));
        assert_eq!(c.min, None);
        assert_eq!(c.min_length, Some(3));
        assert_eq!(c.max_length, Some(8));
        assert!(c.exceeds_max_length("123456789"));
        assert!(!c.exceeds_max_length("12345678"));
    }

    #[test]
    fn absent_bounds_produce_no_constraint() {
        assert!(min_max_constraints(FieldType::Text, None, None).is_empty());
        assert!(min_max_constraints(FieldType::Number, None, None).is_empty());
        let c = min_max_constraints(FieldType::Text, None, Some(-5.0));
        assert_eq!(c.max_length, Some(0));
    }

    #[test]
    fn error_message_hidden_when_disabled() {
        let err = ErrorText::from("Some error here");
        assert_eq!(error_message(Some(&err), false), "Some error here");
        assert_eq!(error_message(Some(&err), true), "");
        assert_eq!(error_message(None, false), "");
    }

    #[test]
    fn error_values_use_display() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = ErrorText::from_error(io);
        assert_eq!(error_message(Some(&err), false), "disk on fire");
    }

    #[test]
    fn caret_needs_options_and_enabled_field() {
        assert!(show_caret(true, 3, false));
        assert!(!show_caret(false, 3, false));
        assert!(!show_caret(true, 0, false));
        assert!(!show_caret(true, 3, true));
    }
}
