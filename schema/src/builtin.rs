//! Explicit registration of the builtin entity variants.
//!
//! Registration is a deterministic, reviewable call sequence run by the host
//! before any decoding starts. Adding a variant means adding one line here;
//! the tradeoff over link-time self-registration is deliberate: nothing can
//! be silently dropped and the enumeration order is fixed.

use registry::Registry;

use crate::entity::{EntityDef, COLLECTIBLE_DEF, ENEMY_DEF, PLAYER_DEF, TRIGGER_DEF};

/// Registry resolving a type name to its schema definition.
pub type EntityRegistry = Registry<&'static EntityDef>;

/// Registers every builtin entity variant, in a fixed order.
///
/// Idempotent: re-registering a key replaces its entry without duplicating
/// the key.
pub fn register_builtin_entities(registry: &mut EntityRegistry) {
    for def in [&PLAYER_DEF, &ENEMY_DEF, &COLLECTIBLE_DEF, &TRIGGER_DEF] {
        registry.register(def.type_name, move || def);
    }
}

/// Creates a registry pre-populated with the builtin variants.
#[must_use]
pub fn builtin_registry() -> EntityRegistry {
    let mut registry = EntityRegistry::new();
    register_builtin_entities(&mut registry);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;

    #[test]
    fn builtin_order_is_fixed() {
        let registry = builtin_registry();
        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, vec!["Player", "Enemy", "Collectible", "Trigger"]);
    }

    #[test]
    fn keys_match_type_names() {
        let registry = builtin_registry();
        for key in registry.keys() {
            let def = registry.create(key).unwrap();
            assert_eq!(def.type_name, key);
            assert_eq!((def.make)().type_name(), key);
        }
    }

    #[test]
    fn create_unknown_type_is_none() {
        let registry = builtin_registry();
        assert!(registry.create("Dragon").is_none());
    }

    #[test]
    fn registration_is_idempotent() {
        let mut registry = builtin_registry();
        register_builtin_entities(&mut registry);
        assert_eq!(registry.len(), 4);
        assert!(matches!(
            registry.create("Enemy").map(|def| (def.make)()),
            Some(Entity::Enemy(_))
        ));
    }
}
