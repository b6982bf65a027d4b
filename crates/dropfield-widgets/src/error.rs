use thiserror::Error;

/// Errors raised while configuring a widget.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The input filter is not a valid regular expression.
    #[error("invalid input filter: {0}")]
    InvalidFilter(#[from] regex::Error),
}
