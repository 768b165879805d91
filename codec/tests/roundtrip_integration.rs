//! End-to-end encode/decode tests over the builtin entity types.

use codec::{decode_entities, encode_entities, CodecError, Decoder};
use schema::{
    builtin_registry, Collectible, Enemy, Entity, EntityBase, Player, Trigger,
};

fn sample_entities() -> Vec<Entity> {
    vec![
        Entity::from(Player {
            base: EntityBase::new("Alice", 10.0, 20.0),
            health: 100,
            level: 5,
        }),
        Entity::from(Enemy {
            base: EntityBase::new("Orc", 30.0, 40.0),
            damage: 25,
            ai_type: "Patrol".into(),
        }),
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
    ]
}

#[test]
fn roundtrip_preserves_values_and_order() {
    let registry = builtin_registry();
    let original = sample_entities();

    let text = encode_entities(&original).unwrap();
    let report = decode_entities(&text, &registry);

    assert!(report.is_complete(), "clean input must decode fully");
    assert_eq!(report.entities, original);
}

#[test]
fn roundtrip_single_entity_per_variant() {
    let registry = builtin_registry();
    for original in sample_entities() {
        let text = encode_entities(std::slice::from_ref(&original)).unwrap();
        let mut decoder = Decoder::new(&text, &registry);
        let decoded = decoder.decode_one().unwrap().expect("one entity");
        assert_eq!(decoded.type_name(), original.type_name());
        assert_eq!(decoded, original);
        assert_eq!(decoder.decode_one().unwrap(), None);
    }
}

#[test]
fn reencoding_reproduces_identical_text() {
    let registry = builtin_registry();
    let text = "Enemy Goblin 15 25 15 Aggressive\n";

    let report = decode_entities(text, &registry);
    assert!(report.is_complete());
    let reencoded = encode_entities(&report.entities).unwrap();
    assert_eq!(reencoded, text);
}

#[test]
fn save_file_with_corrupt_tail_salvages_valid_prefix() {
    let registry = builtin_registry();
    let mut text = encode_entities(&sample_entities()[..2]).unwrap();
    text.push_str("Wizard Gandalf 1 2 3 4\n");

    let report = decode_entities(&text, &registry);
    assert_eq!(report.entities.len(), 2);
    assert_eq!(
        report.error,
        Some(CodecError::UnknownType {
            type_name: "Wizard".into(),
        })
    );
}

#[test]
fn truncated_last_line_salvages_earlier_entities() {
    let registry = builtin_registry();
    let full = encode_entities(&sample_entities()).unwrap();
    // Cut the final line short, mid-fields.
    let cut = full.len() - 10;
    let truncated = &full[..cut];

    let report = decode_entities(truncated, &registry);
    assert_eq!(report.entities.len(), 3);
    assert!(matches!(
        report.error,
        Some(CodecError::UnexpectedEnd { .. } | CodecError::InvalidNumber { .. })
    ));
}

#[test]
fn negative_coordinates_roundtrip() {
    let registry = builtin_registry();
    let original = vec![Entity::from(Trigger {
        base: EntityBase::new("Pit", -12.25, -0.5),
        radius: 2.5,
        event_name: "OnFall".into(),
    })];

    let text = encode_entities(&original).unwrap();
    let report = decode_entities(&text, &registry);
    assert!(report.is_complete());
    assert_eq!(report.entities, original);
}

#[test]
fn default_instances_roundtrip() {
    let registry = builtin_registry();
    let defaults: Vec<Entity> = registry
        .keys()
        .map(|key| {
            let def = registry.create(key).unwrap();
            (def.make)()
        })
        .collect();

    let text = encode_entities(&defaults).unwrap();
    let report = decode_entities(&text, &registry);
    assert!(report.is_complete());
    assert_eq!(report.entities, defaults);
}
