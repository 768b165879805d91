//! Entity variants and their declared-once field schemas.
//!
//! Each variant's wire representation is described by one static
//! [`EntityDef`]: the registry key, the ordered field list, a factory for a
//! default instance, and a builder that turns decoded [`FieldValue`]s back
//! into the variant. The codec walks `fields`; it never needs per-variant
//! serialization code.

use crate::error::{SchemaError, SchemaResult};
use crate::field::{FieldDef, FieldValue};

/// Fields shared by every entity variant.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityBase {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

impl EntityBase {
    /// Creates a base with the given name and position.
    #[must_use]
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

impl Default for EntityBase {
    fn default() -> Self {
        Self::new("Unknown", 0.0, 0.0)
    }
}

/// A controllable character.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub base: EntityBase,
    pub health: i32,
    pub level: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            base: EntityBase::default(),
            health: 100,
            level: 1,
        }
    }
}

/// A hostile character with an AI behavior tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub base: EntityBase,
    pub damage: i32,
    pub ai_type: String,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            base: EntityBase::default(),
            damage: 10,
            ai_type: "Patrol".into(),
        }
    }
}

/// A pickup with a value and an item kind tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub base: EntityBase,
    pub value: i32,
    pub item_type: String,
}

impl Default for Collectible {
    fn default() -> Self {
        Self {
            base: EntityBase::default(),
            value: 0,
            item_type: "Coin".into(),
        }
    }
}

/// An invisible zone that fires a named event.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub base: EntityBase,
    pub radius: f32,
    pub event_name: String,
}

impl Default for Trigger {
    fn default() -> Self {
        Self {
            base: EntityBase::default(),
            radius: 1.0,
            event_name: "OnEnter".into(),
        }
    }
}

/// Any entity a save file can contain.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Player(Player),
    Enemy(Enemy),
    Collectible(Collectible),
    Trigger(Trigger),
}

impl From<Player> for Entity {
    fn from(player: Player) -> Self {
        Self::Player(player)
    }
}

impl From<Enemy> for Entity {
    fn from(enemy: Enemy) -> Self {
        Self::Enemy(enemy)
    }
}

impl From<Collectible> for Entity {
    fn from(collectible: Collectible) -> Self {
        Self::Collectible(collectible)
    }
}

impl From<Trigger> for Entity {
    fn from(trigger: Trigger) -> Self {
        Self::Trigger(trigger)
    }
}

impl Entity {
    /// Returns the schema definition for this entity's concrete variant.
    #[must_use]
    pub const fn def(&self) -> &'static EntityDef {
        match self {
            Self::Player(_) => &PLAYER_DEF,
            Self::Enemy(_) => &ENEMY_DEF,
            Self::Collectible(_) => &COLLECTIBLE_DEF,
            Self::Trigger(_) => &TRIGGER_DEF,
        }
    }

    /// Returns the registry key identifying this variant.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.def().type_name
    }

    /// Returns the base fields shared by every variant.
    #[must_use]
    pub const fn base(&self) -> &EntityBase {
        match self {
            Self::Player(player) => &player.base,
            Self::Enemy(enemy) => &enemy.base,
            Self::Collectible(collectible) => &collectible.base,
            Self::Trigger(trigger) => &trigger.base,
        }
    }

    /// Emits this entity's field values in schema order (base fields first).
    ///
    /// The result zips one-to-one with `self.def().fields`.
    #[must_use]
    pub fn to_fields(&self) -> Vec<FieldValue> {
        let base = self.base();
        let mut values = vec![
            FieldValue::Word(base.name.clone()),
            FieldValue::Float(base.x),
            FieldValue::Float(base.y),
        ];
        match self {
            Self::Player(player) => {
                values.push(FieldValue::Int(i64::from(player.health)));
                values.push(FieldValue::Int(i64::from(player.level)));
            }
            Self::Enemy(enemy) => {
                values.push(FieldValue::Int(i64::from(enemy.damage)));
                values.push(FieldValue::Word(enemy.ai_type.clone()));
            }
            Self::Collectible(collectible) => {
                values.push(FieldValue::Int(i64::from(collectible.value)));
                values.push(FieldValue::Word(collectible.item_type.clone()));
            }
            Self::Trigger(trigger) => {
                values.push(FieldValue::Float(trigger.radius));
                values.push(FieldValue::Word(trigger.event_name.clone()));
            }
        }
        values
    }
}

impl std::fmt::Display for Entity {
    /// Human-oriented one-liner, not the wire format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let base = self.base();
        write!(
            f,
            "[{}] {} at ({}, {})",
            self.type_name(),
            base.name,
            base.x,
            base.y
        )
    }
}

/// Schema definition for one entity variant.
///
/// `fields` always begins with the base fields `name`, `x`, `y`. `make`
/// produces a default-constructed instance of exactly this variant; `build`
/// reconstructs the variant from values matching `fields` in order and kind.
pub struct EntityDef {
    pub type_name: &'static str,
    pub fields: &'static [FieldDef],
    pub make: fn() -> Entity,
    pub build: fn(&[FieldValue]) -> SchemaResult<Entity>,
}

impl std::fmt::Debug for EntityDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityDef")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .finish()
    }
}

/// Schema for [`Player`].
pub static PLAYER_DEF: EntityDef = EntityDef {
    type_name: "Player",
    fields: &[
        FieldDef::word("name"),
        FieldDef::float("x"),
        FieldDef::float("y"),
        FieldDef::int("health"),
        FieldDef::int("level"),
    ],
    make: make_player,
    build: build_player,
};

/// Schema for [`Enemy`].
pub static ENEMY_DEF: EntityDef = EntityDef {
    type_name: "Enemy",
    fields: &[
        FieldDef::word("name"),
        FieldDef::float("x"),
        FieldDef::float("y"),
        FieldDef::int("damage"),
        FieldDef::word("ai_type"),
    ],
    make: make_enemy,
    build: build_enemy,
};

/// Schema for [`Collectible`].
pub static COLLECTIBLE_DEF: EntityDef = EntityDef {
    type_name: "Collectible",
    fields: &[
        FieldDef::word("name"),
        FieldDef::float("x"),
        FieldDef::float("y"),
        FieldDef::int("value"),
        FieldDef::word("item_type"),
    ],
    make: make_collectible,
    build: build_collectible,
};

/// Schema for [`Trigger`].
pub static TRIGGER_DEF: EntityDef = EntityDef {
    type_name: "Trigger",
    fields: &[
        FieldDef::word("name"),
        FieldDef::float("x"),
        FieldDef::float("y"),
        FieldDef::float("radius"),
        FieldDef::word("event_name"),
    ],
    make: make_trigger,
    build: build_trigger,
};

fn make_player() -> Entity {
    Entity::Player(Player::default())
}

fn make_enemy() -> Entity {
    Entity::Enemy(Enemy::default())
}

fn make_collectible() -> Entity {
    Entity::Collectible(Collectible::default())
}

fn make_trigger() -> Entity {
    Entity::Trigger(Trigger::default())
}

/// Positional reader over a decoded value list, checked against a schema.
struct Values<'a> {
    def: &'static EntityDef,
    values: &'a [FieldValue],
    at: usize,
}

impl<'a> Values<'a> {
    fn new(def: &'static EntityDef, values: &'a [FieldValue]) -> SchemaResult<Self> {
        if values.len() != def.fields.len() {
            return Err(SchemaError::FieldCount {
                type_name: def.type_name,
                expected: def.fields.len(),
                actual: values.len(),
            });
        }
        Ok(Self { def, values, at: 0 })
    }

    fn mismatch(&self, found: &FieldValue) -> SchemaError {
        let field = self.def.fields[self.at];
        SchemaError::FieldKind {
            type_name: self.def.type_name,
            field: field.name,
            expected: field.kind,
            found: found.kind(),
        }
    }

    fn word(&mut self) -> SchemaResult<String> {
        let value = &self.values[self.at];
        match value {
            FieldValue::Word(word) => {
                self.at += 1;
                Ok(word.clone())
            }
            other => Err(self.mismatch(other)),
        }
    }

    fn int(&mut self) -> SchemaResult<i32> {
        let value = &self.values[self.at];
        match value {
            FieldValue::Int(raw) => {
                let narrowed = i32::try_from(*raw).map_err(|_| SchemaError::IntRange {
                    type_name: self.def.type_name,
                    field: self.def.fields[self.at].name,
                    value: *raw,
                })?;
                self.at += 1;
                Ok(narrowed)
            }
            other => Err(self.mismatch(other)),
        }
    }

    fn float(&mut self) -> SchemaResult<f32> {
        let value = &self.values[self.at];
        match value {
            FieldValue::Float(raw) => {
                self.at += 1;
                Ok(*raw)
            }
            other => Err(self.mismatch(other)),
        }
    }

    fn base(&mut self) -> SchemaResult<EntityBase> {
        Ok(EntityBase {
            name: self.word()?,
            x: self.float()?,
            y: self.float()?,
        })
    }
}

fn build_player(values: &[FieldValue]) -> SchemaResult<Entity> {
    let mut values = Values::new(&PLAYER_DEF, values)?;
    Ok(Entity::Player(Player {
        base: values.base()?,
        health: values.int()?,
        level: values.int()?,
    }))
}

fn build_enemy(values: &[FieldValue]) -> SchemaResult<Entity> {
    let mut values = Values::new(&ENEMY_DEF, values)?;
    Ok(Entity::Enemy(Enemy {
        base: values.base()?,
        damage: values.int()?,
        ai_type: values.word()?,
    }))
}

fn build_collectible(values: &[FieldValue]) -> SchemaResult<Entity> {
    let mut values = Values::new(&COLLECTIBLE_DEF, values)?;
    Ok(Entity::Collectible(Collectible {
        base: values.base()?,
        value: values.int()?,
        item_type: values.word()?,
    }))
}

fn build_trigger(values: &[FieldValue]) -> SchemaResult<Entity> {
    let mut values = Values::new(&TRIGGER_DEF, values)?;
    Ok(Entity::Trigger(Trigger {
        base: values.base()?,
        radius: values.float()?,
        event_name: values.word()?,
    }))
}
