//! Inspection and listing helpers for savewire save files.
//!
//! This crate backs the `savewire-tools` binary:
//!
//! - List registered entity types and their field schemas
//! - Decode a save file into a structured report
//! - Normalize a save file into canonical formatting
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Pretty output for people, JSON for scripts.

use std::fmt::Write as _;

use codec::{decode_entities, encode_entities, CodecResult};
use schema::{Entity, EntityRegistry, FieldValue};
use serde::Serialize;

/// One registered entity type and its schema.
#[derive(Debug, Serialize)]
pub struct TypeInfo {
    pub type_name: &'static str,
    pub fields: Vec<FieldInfo>,
}

/// One field of an entity schema.
#[derive(Debug, Serialize)]
pub struct FieldInfo {
    pub name: &'static str,
    pub kind: String,
}

/// Lists registered types in registration order.
#[must_use]
pub fn list_types(registry: &EntityRegistry) -> Vec<TypeInfo> {
    registry
        .keys()
        .filter_map(|key| registry.create(key))
        .map(|def| TypeInfo {
            type_name: def.type_name,
            fields: def
                .fields
                .iter()
                .map(|field| FieldInfo {
                    name: field.name,
                    kind: field.kind.to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Structured result of decoding a save file.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub entities: Vec<EntityReport>,
    pub parsed: usize,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One decoded entity, fields keyed by schema name.
#[derive(Debug, Serialize)]
pub struct EntityReport {
    pub type_name: &'static str,
    pub summary: String,
    pub fields: Vec<FieldReport>,
}

/// One decoded field value.
#[derive(Debug, Serialize)]
pub struct FieldReport {
    pub name: &'static str,
    pub value: serde_json::Value,
}

/// Decodes `input` and reports everything salvaged, plus how decoding ended.
#[must_use]
pub fn inspect_save(input: &str, registry: &EntityRegistry) -> InspectReport {
    let report = decode_entities(input, registry);
    let entities: Vec<_> = report.entities.iter().map(entity_report).collect();
    InspectReport {
        parsed: entities.len(),
        complete: report.is_complete(),
        error: report.error.map(|err| err.to_string()),
        entities,
    }
}

/// Decodes `input` and re-encodes it in canonical formatting.
///
/// Fails if decoding stopped early; normalizing must never silently drop a
/// corrupt tail.
pub fn normalize_save(input: &str, registry: &EntityRegistry) -> CodecResult<String> {
    let report = decode_entities(input, registry);
    if let Some(err) = report.error {
        return Err(err);
    }
    encode_entities(&report.entities)
}

fn entity_report(entity: &Entity) -> EntityReport {
    let def = entity.def();
    let fields = def
        .fields
        .iter()
        .zip(entity.to_fields())
        .map(|(field, value)| FieldReport {
            name: field.name,
            value: field_value_json(&value),
        })
        .collect();
    EntityReport {
        type_name: def.type_name,
        summary: entity.to_string(),
        fields,
    }
}

fn field_value_json(value: &FieldValue) -> serde_json::Value {
    match value {
        FieldValue::Word(word) => serde_json::Value::String(word.clone()),
        FieldValue::Int(int) => serde_json::Value::from(*int),
        FieldValue::Float(float) => serde_json::Number::from_f64(f64::from(*float))
            .map_or_else(|| serde_json::Value::String(float.to_string()), Into::into),
    }
}

/// Renders a type listing for terminals.
#[must_use]
pub fn format_types_pretty(types: &[TypeInfo]) -> String {
    let mut out = String::new();
    for info in types {
        let _ = writeln!(out, "{} ({} fields)", info.type_name, info.fields.len());
        for field in &info.fields {
            let _ = writeln!(out, "  {}: {}", field.name, field.kind);
        }
    }
    out
}

/// Renders an inspect report for terminals.
#[must_use]
pub fn format_inspect_pretty(report: &InspectReport) -> String {
    let mut out = String::new();
    for entity in &report.entities {
        let _ = writeln!(out, "{}", entity.summary);
        for field in &entity.fields {
            let _ = writeln!(out, "  {} = {}", field.name, field.value);
        }
    }
    let _ = writeln!(out, "parsed: {} entities", report.parsed);
    if report.complete {
        let _ = writeln!(out, "status: complete");
    } else {
        let _ = writeln!(out, "status: stopped early");
        if let Some(error) = &report.error {
            let _ = writeln!(out, "error: {error}");
        }
    }
    out
}
