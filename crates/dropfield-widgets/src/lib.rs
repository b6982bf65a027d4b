//! The combobox widget for **dropfield** and the helpers it is built from.
//!
//! [`InputField`] implements [`dropfield_core::Component`], so it can be
//! embedded inside any [`dropfield_core::Model`] and placed freely within
//! [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`input_field`] | Text input with a dropdown of selectable options |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`normalize`] | Canonical value/index forms, min/max constraints, error text |
//! | [`matcher`] | Case-insensitive lookup of an option by its label |
//! | [`offset`] | Wrap-around keyboard navigation through a list |
//! | [`layered`] | A base value with a temporary preview on top |
//! | [`field_type`] | The kinds of input a field can hold |
//! | [`error`] | Configuration errors |

pub mod error;
pub mod field_type;
pub mod input_field;
pub mod layered;
pub mod matcher;
pub mod normalize;
pub mod offset;

pub use error::FieldError;
pub use field_type::FieldType;
pub use input_field::{ChangeKind, FieldChange, InputField, InputFieldStyle, Selection};
pub use normalize::RawValue;
