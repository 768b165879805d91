//! Line-oriented text encoding/decoding for savewire entity saves.
//!
//! The wire format is deliberately minimal: one entity per line, whitespace
//! separated tokens, the type name first, then the fields in schema order.
//!
//! ```text
//! Player Hero 10.5 20.3 100 5
//! Enemy Goblin 15 25 15 Aggressive
//! ```
//!
//! Decoding resolves the leading type name through an
//! [`EntityRegistry`](schema::EntityRegistry); unknown names are recoverable
//! errors, never panics. There is no random access, no schema versioning,
//! and no resynchronization after a bad token.
//!
//! # Design Principles
//!
//! - **Untrusted input** - Every decode failure is a structured
//!   [`CodecError`] naming the type, field, and offending token.
//! - **Partial salvage** - [`decode_entities`] keeps the valid prefix of a
//!   truncated or corrupt stream and reports where it stopped.
//! - **Deterministic output** - Encoding the same entities always yields the
//!   same text; floats use Rust's shortest round-trip formatting.

mod decode;
mod encode;
mod error;
mod tokens;

pub use decode::{decode_entities, DecodeReport, Decoder};
pub use encode::{encode_entities, encode_entity};
pub use error::{CodecError, CodecResult};
pub use tokens::Tokens;
