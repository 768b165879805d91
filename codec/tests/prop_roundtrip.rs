//! Property tests for the encode/decode round-trip law.

use codec::{decode_entities, encode_entities};
use proptest::prelude::*;
use schema::{
    builtin_registry, Collectible, Enemy, Entity, EntityBase, Player, Trigger,
};

fn word_strategy() -> impl Strategy<Value = String> {
    // Word fields must be single whitespace-free tokens.
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_-]{0,15}").unwrap()
}

fn coord_strategy() -> impl Strategy<Value = f32> {
    -100_000.0f32..100_000.0f32
}

fn base_strategy() -> impl Strategy<Value = EntityBase> {
    (word_strategy(), coord_strategy(), coord_strategy())
        .prop_map(|(name, x, y)| EntityBase { name, x, y })
}

fn entity_strategy() -> impl Strategy<Value = Entity> {
    prop_oneof![
        (base_strategy(), any::<i32>(), any::<i32>()).prop_map(|(base, health, level)| {
            Entity::from(Player {
                base,
                health,
                level,
            })
        }),
        (base_strategy(), any::<i32>(), word_strategy()).prop_map(|(base, damage, ai_type)| {
            Entity::from(Enemy {
                base,
                damage,
                ai_type,
            })
        }),
        (base_strategy(), any::<i32>(), word_strategy()).prop_map(|(base, value, item_type)| {
            Entity::from(Collectible {
                base,
                value,
                item_type,
            })
        }),
        (base_strategy(), coord_strategy(), word_strategy()).prop_map(
            |(base, radius, event_name)| {
                Entity::from(Trigger {
                    base,
                    radius,
                    event_name,
                })
            }
        ),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_entities(entities in prop::collection::vec(entity_strategy(), 0..32)) {
        let registry = builtin_registry();

        let text = encode_entities(&entities).unwrap();
        let report = decode_entities(&text, &registry);

        prop_assert!(report.is_complete(), "encoded text must decode cleanly");
        prop_assert_eq!(report.entities, entities);
    }

    #[test]
    fn prop_encoding_is_canonical(entities in prop::collection::vec(entity_strategy(), 0..16)) {
        let registry = builtin_registry();

        // Decoding then re-encoding must be a fixed point.
        let text = encode_entities(&entities).unwrap();
        let report = decode_entities(&text, &registry);
        prop_assert!(report.is_complete());
        let reencoded = encode_entities(&report.entities).unwrap();
        prop_assert_eq!(reencoded, text);
    }

    #[test]
    fn prop_unknown_type_salvages_prefix(
        entities in prop::collection::vec(entity_strategy(), 0..8),
        bogus in "[A-Z][a-z]{3,10}",
    ) {
        let registry = builtin_registry();
        prop_assume!(!registry.contains(&bogus));

        let mut text = encode_entities(&entities).unwrap();
        text.push_str(&bogus);
        text.push_str(" junk 1 2 3\n");

        let report = decode_entities(&text, &registry);
        prop_assert_eq!(report.entities.len(), entities.len());
        prop_assert_eq!(&report.entities, &entities);
        prop_assert!(!report.is_complete());
    }
}
