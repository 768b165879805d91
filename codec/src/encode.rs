//! Entity-to-text encoding.

use schema::{Entity, FieldValue};

use crate::error::{CodecError, CodecResult};

/// Appends one entity as a `\n`-terminated line: type name, then fields in
/// schema order, space separated.
///
/// Word values must be single non-empty whitespace-free tokens; anything
/// else cannot survive a round trip through the whitespace-delimited format
/// and is rejected as [`CodecError::InvalidToken`].
pub fn encode_entity(entity: &Entity, out: &mut String) -> CodecResult<()> {
    let def = entity.def();
    let values = entity.to_fields();
    out.push_str(def.type_name);
    for (field, value) in def.fields.iter().zip(&values) {
        if let FieldValue::Word(word) = value {
            if word.is_empty() || word.contains(char::is_whitespace) {
                return Err(CodecError::InvalidToken {
                    type_name: def.type_name,
                    field: field.name,
                    value: word.clone(),
                });
            }
        }
        out.push(' ');
        out.push_str(&value.to_string());
    }
    out.push('\n');
    Ok(())
}

/// Encodes a sequence of entities, one line each, preserving order.
pub fn encode_entities(entities: &[Entity]) -> CodecResult<String> {
    let mut out = String::new();
    for entity in entities {
        encode_entity(entity, &mut out)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::{Collectible, Enemy, EntityBase, Player, Trigger};

    fn hero() -> Entity {
        Entity::from(Player {
            base: EntityBase::new("Hero", 10.5, 20.3),
            health: 100,
            level: 5,
        })
    }

    #[test]
    fn encodes_player_line() {
        let mut out = String::new();
        encode_entity(&hero(), &mut out).unwrap();
        assert_eq!(out, "Player Hero 10.5 20.3 100 5\n");
    }

    #[test]
    fn encodes_whole_floats_without_fraction() {
        let goblin = Entity::from(Enemy {
            base: EntityBase::new("Goblin", 15.0, 25.0),
            damage: 15,
            ai_type: "Aggressive".into(),
        });
        assert_eq!(
            encode_entities(&[goblin]).unwrap(),
            "Enemy Goblin 15 25 15 Aggressive\n"
        );
    }

    #[test]
    fn encodes_entities_in_order() {
        let entities = vec![
            hero(),
            Entity::from(Collectible {
                base: EntityBase::new("Gem", 50.0, 60.0),
                value: 500,
                item_type: "Treasure".into(),
            }),
            Entity::from(Trigger {
                base: EntityBase::new("Checkpoint", 150.0, 250.0),
                radius: 5.0,
                event_name: "SaveGame".into(),
            }),
        ];
        let text = encode_entities(&entities).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Player "));
        assert!(lines[1].starts_with("Collectible "));
        assert!(lines[2].starts_with("Trigger "));
    }

    #[test]
    fn empty_sequence_encodes_to_empty_text() {
        assert_eq!(encode_entities(&[]).unwrap(), "");
    }

    #[test]
    fn rejects_name_with_whitespace() {
        let entity = Entity::from(Player {
            base: EntityBase::new("Brave Hero", 0.0, 0.0),
            health: 1,
            level: 1,
        });
        let err = encode_entities(&[entity]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidToken {
                type_name: "Player",
                field: "name",
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_word_field() {
        let entity = Entity::from(Enemy {
            base: EntityBase::new("Orc", 0.0, 0.0),
            damage: 5,
            ai_type: String::new(),
        });
        let err = encode_entities(&[entity]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidToken {
                field: "ai_type",
                ..
            }
        ));
    }

    #[test]
    fn encoding_is_deterministic() {
        let entities = vec![hero(), hero()];
        assert_eq!(
            encode_entities(&entities).unwrap(),
            encode_entities(&entities).unwrap()
        );
    }
}
