//! Text-to-entity decoding.

use schema::{Entity, EntityRegistry, FieldKind, FieldValue};

use crate::error::{CodecError, CodecResult};
use crate::tokens::Tokens;

/// Streaming decoder over save text.
///
/// The decoder reads one entity per [`Decoder::decode_one`] call. After any
/// error it is failed: subsequent calls read nothing and return `Ok(None)`.
/// Resynchronization is never attempted, because a bad token leaves the
/// field boundary unknowable.
#[derive(Debug)]
pub struct Decoder<'a> {
    tokens: Tokens<'a>,
    registry: &'a EntityRegistry,
    failed: bool,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over `input`, resolving type names via `registry`.
    #[must_use]
    pub const fn new(input: &'a str, registry: &'a EntityRegistry) -> Self {
        Self {
            tokens: Tokens::new(input),
            registry,
            failed: false,
        }
    }

    /// Returns `true` if a previous call hit an error.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.failed
    }

    /// Decodes the next entity.
    ///
    /// `Ok(None)` is end of input, the normal termination of iteration.
    /// An `Err` marks the decoder failed; the offending tokens are not
    /// skipped and no further reads happen.
    pub fn decode_one(&mut self) -> CodecResult<Option<Entity>> {
        if self.failed {
            return Ok(None);
        }
        let Some(type_name) = self.tokens.next_token() else {
            return Ok(None);
        };
        match self.decode_fields(type_name) {
            Ok(entity) => Ok(Some(entity)),
            Err(err) => {
                self.failed = true;
                Err(err)
            }
        }
    }

    fn decode_fields(&mut self, type_name: &str) -> CodecResult<Entity> {
        let def = self
            .registry
            .create(type_name)
            .ok_or_else(|| CodecError::UnknownType {
                type_name: type_name.to_owned(),
            })?;

        let mut values = Vec::with_capacity(def.fields.len());
        for field in def.fields {
            let token = self
                .tokens
                .next_token()
                .ok_or(CodecError::UnexpectedEnd {
                    type_name: def.type_name,
                    field: field.name,
                })?;
            let value = match field.kind {
                FieldKind::Word => FieldValue::Word(token.to_owned()),
                FieldKind::Int => {
                    let parsed =
                        token
                            .parse::<i64>()
                            .map_err(|_| CodecError::InvalidNumber {
                                type_name: def.type_name,
                                field: field.name,
                                token: token.to_owned(),
                            })?;
                    FieldValue::Int(parsed)
                }
                FieldKind::Float => {
                    let parsed =
                        token
                            .parse::<f32>()
                            .map_err(|_| CodecError::InvalidNumber {
                                type_name: def.type_name,
                                field: field.name,
                                token: token.to_owned(),
                            })?;
                    FieldValue::Float(parsed)
                }
            };
            values.push(value);
        }
        Ok((def.build)(&values)?)
    }
}

/// Everything a salvage decode produced.
#[derive(Debug)]
pub struct DecodeReport {
    /// Entities decoded before the stream ended or failed, in input order.
    pub entities: Vec<Entity>,

    /// The error that stopped decoding, if any.
    pub error: Option<CodecError>,
}

impl DecodeReport {
    /// Returns `true` if the whole input decoded cleanly.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Decodes every entity in `input`, salvaging the valid prefix.
///
/// Stops at the first error and returns everything parsed up to that point
/// together with the error. This partial-success policy is deliberate: a
/// truncated or corrupt tail never discards the entities already read.
#[must_use]
pub fn decode_entities(input: &str, registry: &EntityRegistry) -> DecodeReport {
    let mut decoder = Decoder::new(input, registry);
    let mut entities = Vec::new();
    loop {
        match decoder.decode_one() {
            Ok(Some(entity)) => entities.push(entity),
            Ok(None) => {
                return DecodeReport {
                    entities,
                    error: None,
                }
            }
            Err(err) => {
                return DecodeReport {
                    entities,
                    error: Some(err),
                }
            }
        }
    }
}
