//! Entity model and field schema definitions for the savewire save codec.
//!
//! This crate defines what a save file can contain:
//! - The [`Entity`] variants (`Player`, `Enemy`, `Collectible`, `Trigger`)
//! - Per-variant field schemas declared once as static [`EntityDef`]s
//! - Explicit, deterministic registration of the builtin variants
//!
//! # Design Principles
//!
//! - **Declared-once schemas** - Each variant lists its fields (name, kind,
//!   order) in exactly one place; a generic codec walks the list. There is
//!   no per-type serializer override chain to keep in sync.
//! - **Explicit registration** - [`register_builtin_entities`] is called by
//!   the host, in a fixed order. Nothing registers itself behind the
//!   caller's back.
//! - **Base fields first** - Every schema starts with `name`, `x`, `y`, then
//!   variant-specific fields in declaration order.

mod builtin;
mod entity;
mod error;
mod field;

pub use builtin::{builtin_registry, register_builtin_entities, EntityRegistry};
pub use entity::{
    Collectible, Enemy, Entity, EntityBase, EntityDef, Player, Trigger, COLLECTIBLE_DEF,
    ENEMY_DEF, PLAYER_DEF, TRIGGER_DEF,
};
pub use error::{SchemaError, SchemaResult};
pub use field::{FieldDef, FieldKind, FieldValue};
