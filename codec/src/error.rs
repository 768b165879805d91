//! Error types for save text encoding/decoding.

use std::fmt;

use schema::SchemaError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding save text.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The leading type name has no registered schema.
    ///
    /// Fatal for the rest of the stream: the field count of an unknown type
    /// is unknowable, so no resynchronization is attempted.
    UnknownType { type_name: String },

    /// The input ended in the middle of an entity's fields.
    UnexpectedEnd {
        type_name: &'static str,
        field: &'static str,
    },

    /// A token could not be parsed as the field's declared numeric kind.
    InvalidNumber {
        type_name: &'static str,
        field: &'static str,
        token: String,
    },

    /// A word value cannot be represented as a single whitespace-free token.
    InvalidToken {
        type_name: &'static str,
        field: &'static str,
        value: String,
    },

    /// Decoded values did not satisfy the schema builder.
    Schema(SchemaError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType { type_name } => {
                write!(f, "unknown entity type {type_name:?}")
            }
            Self::UnexpectedEnd { type_name, field } => {
                write!(f, "input ended while reading {type_name}.{field}")
            }
            Self::InvalidNumber {
                type_name,
                field,
                token,
            } => {
                write!(f, "invalid number {token:?} for {type_name}.{field}")
            }
            Self::InvalidToken {
                type_name,
                field,
                value,
            } => {
                write!(
                    f,
                    "value {value:?} for {type_name}.{field} is not a single token"
                )
            }
            Self::Schema(err) => write!(f, "schema error: {err}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Schema(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SchemaError> for CodecError {
    fn from(err: SchemaError) -> Self {
        Self::Schema(err)
    }
}
