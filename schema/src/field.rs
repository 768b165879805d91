//! Field kind, definition, and value types.

use std::fmt;

/// The token-level kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single whitespace-free token (names, AI types, item kinds).
    Word,

    /// A signed integer.
    Int,

    /// A 32-bit float, written in shortest round-trip decimal form.
    Float,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Word => "word",
            Self::Int => "int",
            Self::Float => "float",
        };
        write!(f, "{name}")
    }
}

/// Field definition within an entity schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    /// Creates a word field definition.
    #[must_use]
    pub const fn word(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Word,
        }
    }

    /// Creates a signed integer field definition.
    #[must_use]
    pub const fn int(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Int,
        }
    }

    /// Creates a float field definition.
    #[must_use]
    pub const fn float(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Float,
        }
    }
}

/// A decoded or to-be-encoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Word(String),
    Int(i64),
    Float(f32),
}

impl FieldValue {
    /// Returns the kind this value carries.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Word(_) => FieldKind::Word,
            Self::Int(_) => FieldKind::Int,
            Self::Float(_) => FieldKind::Float,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(word) => write!(f, "{word}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}
