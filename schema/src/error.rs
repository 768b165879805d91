//! Error types for schema operations.

use std::fmt;

use crate::field::FieldKind;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur when building an entity from decoded field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The value list does not match the schema's field count.
    FieldCount {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A value's kind does not match the schema's declared kind.
    FieldKind {
        type_name: &'static str,
        field: &'static str,
        expected: FieldKind,
        found: FieldKind,
    },

    /// An integer value does not fit the field's storage width.
    IntRange {
        type_name: &'static str,
        field: &'static str,
        value: i64,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount {
                type_name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{type_name} expects {expected} field values, got {actual}"
                )
            }
            Self::FieldKind {
                type_name,
                field,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{type_name}.{field} expects a {expected} value, got {found}"
                )
            }
            Self::IntRange {
                type_name,
                field,
                value,
            } => {
                write!(f, "{type_name}.{field} cannot hold {value}")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
