//! Liquid ammunition: which liquid fires which ammo, and how much a shot costs.

use std::collections::HashMap;

use sluice_core::components::LiquidContainer;
use sluice_core::content::{AmmoKey, AmmoType};
use sluice_core::enums::AmmoStatus;
use sluice_core::error::{ContentError, ContentResult};
use sluice_core::types::{ItemId, LiquidId};

/// Maps each liquid a turret accepts to the ammo it fires.
///
/// Built once per turret definition and never mutated afterwards, so one
/// resolver is shared by every placed instance of that turret.
#[derive(Debug, Clone, Default)]
pub struct AmmoResolver {
    ammo: HashMap<LiquidId, AmmoType>,
}

impl AmmoResolver {
    /// Build the liquid → ammo table for the named turret.
    ///
    /// Fails with `ConfigurationConflict` if two entries share a liquid.
    pub fn build(turret: &str, ammo_types: &[AmmoType]) -> ContentResult<Self> {
        let mut ammo = HashMap::with_capacity(ammo_types.len());
        for ammo_type in ammo_types {
            let liquid = match ammo_type.key {
                AmmoKey::Liquid(liquid) => liquid,
                key @ AmmoKey::Item(_) => {
                    return Err(ContentError::MismatchedAmmo {
                        turret: turret.to_string(),
                        expected: "liquid",
                        key: key.to_string(),
                    })
                }
            };
            if ammo.contains_key(&liquid) {
                return Err(ContentError::ConfigurationConflict {
                    turret: turret.to_string(),
                    key: liquid.to_string(),
                });
            }
            ammo.insert(liquid, ammo_type.clone());
        }
        Ok(Self { ammo })
    }

    /// Ammo fired by `liquid`, if any.
    pub fn lookup(&self, liquid: LiquidId) -> Option<&AmmoType> {
        self.ammo.get(&liquid)
    }

    /// Ammo the container would fire next, without consuming anything.
    pub fn peek(&self, container: &LiquidContainer) -> Option<&AmmoType> {
        container.liquid.and_then(|liquid| self.lookup(liquid))
    }

    /// Whether the container holds a registered liquid and enough of it for one shot.
    pub fn can_consume(&self, container: &LiquidContainer) -> bool {
        self.status(container) == AmmoStatus::Ready
    }

    pub fn status(&self, container: &LiquidContainer) -> AmmoStatus {
        match self.peek(container) {
            None => AmmoStatus::NoAmmo,
            Some(ammo) if container.amount >= ammo.quantity => AmmoStatus::Ready,
            Some(_) => AmmoStatus::Insufficient,
        }
    }

    /// Spend one shot's worth of liquid and return the ammo fired.
    ///
    /// The caller must have checked `can_consume`. The subtraction is not
    /// clamped; debug builds assert the precondition instead. Returns `None`
    /// only when the container's liquid is not registered at all.
    pub fn consume(&self, container: &mut LiquidContainer) -> Option<AmmoType> {
        debug_assert!(
            self.can_consume(container),
            "consume called without enough registered liquid: {container:?}"
        );
        let ammo = self.peek(container)?.clone();
        container.amount -= ammo.quantity;
        Some(ammo)
    }

    /// Liquid turrets never take solid items.
    pub fn accepts_item(&self, _item: ItemId) -> bool {
        false
    }

    /// Accept a liquid transfer only if the generic block rules allow it and
    /// the liquid is registered ammunition.
    pub fn accepts_liquid_transfer(&self, liquid: LiquidId, _amount: f64, base_acceptance: bool) -> bool {
        base_acceptance && self.lookup(liquid).is_some()
    }

    pub fn len(&self) -> usize {
        self.ammo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ammo.is_empty()
    }

    /// Registered liquids in id order.
    pub fn liquids(&self) -> Vec<LiquidId> {
        let mut ids: Vec<LiquidId> = self.ammo.keys().copied().collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER: LiquidId = LiquidId(0);
    const SLAG: LiquidId = LiquidId(1);
    const OIL: LiquidId = LiquidId(2);

    fn water_and_slag() -> AmmoResolver {
        AmmoResolver::build(
            "wave",
            &[AmmoType::liquid(WATER, 5.0), AmmoType::liquid(SLAG, 10.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_registered_and_unregistered() {
        let resolver = water_and_slag();
        assert_eq!(resolver.len(), 2);
        assert_eq!(resolver.lookup(WATER).unwrap().quantity, 5.0);
        assert_eq!(resolver.lookup(SLAG).unwrap().quantity, 10.0);
        assert!(resolver.lookup(OIL).is_none());
        assert_eq!(resolver.liquids(), vec![WATER, SLAG]);
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let reversed = AmmoResolver::build(
            "wave",
            &[AmmoType::liquid(SLAG, 10.0), AmmoType::liquid(WATER, 5.0)],
        )
        .unwrap();
        let forward = water_and_slag();
        for liquid in [WATER, SLAG, OIL] {
            assert_eq!(reversed.lookup(liquid), forward.lookup(liquid));
        }
    }

    #[test]
    fn test_duplicate_liquid_is_conflict() {
        let err = AmmoResolver::build(
            "wave",
            &[AmmoType::liquid(WATER, 5.0), AmmoType::liquid(WATER, 3.0)],
        )
        .unwrap_err();
        match err {
            ContentError::ConfigurationConflict { turret, key } => {
                assert_eq!(turret, "wave");
                assert_eq!(key, WATER.to_string());
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_item_entry_is_mismatch() {
        let err = AmmoResolver::build("wave", &[AmmoType::item(ItemId(0), 2)]).unwrap_err();
        assert!(matches!(err, ContentError::MismatchedAmmo { expected: "liquid", .. }));
    }

    #[test]
    fn test_empty_list_builds_empty_resolver() {
        let resolver = AmmoResolver::build("dry", &[]).unwrap();
        assert!(resolver.is_empty());
        assert!(!resolver.can_consume(&LiquidContainer::new(WATER, 100.0)));
    }

    #[test]
    fn test_can_consume_enough_water() {
        let resolver = water_and_slag();
        let mut container = LiquidContainer::new(WATER, 12.0);
        assert!(resolver.can_consume(&container));

        let fired = resolver.consume(&mut container).unwrap();
        assert_eq!(fired.key, AmmoKey::Liquid(WATER));
        assert_eq!(container.amount, 7.0);
    }

    #[test]
    fn test_insufficient_water() {
        let resolver = water_and_slag();
        let container = LiquidContainer::new(WATER, 3.0);
        assert!(!resolver.can_consume(&container));
        assert_eq!(resolver.status(&container), AmmoStatus::Insufficient);
    }

    #[test]
    fn test_exact_amount_is_enough() {
        let resolver = water_and_slag();
        let mut container = LiquidContainer::new(SLAG, 10.0);
        assert!(resolver.can_consume(&container));
        resolver.consume(&mut container).unwrap();
        assert_eq!(container.amount, 0.0);
        assert!(!resolver.can_consume(&container));
    }

    #[test]
    fn test_unregistered_liquid_never_consumable() {
        let resolver = water_and_slag();
        for amount in [0.0, 5.0, 100.0, 1e9] {
            let container = LiquidContainer::new(OIL, amount);
            assert!(!resolver.can_consume(&container));
            assert_eq!(resolver.status(&container), AmmoStatus::NoAmmo);
        }
        assert!(!resolver.can_consume(&LiquidContainer::default()));
    }

    #[test]
    fn test_repeated_consume_subtracts_same_quantity() {
        let resolver = water_and_slag();
        let mut container = LiquidContainer::new(WATER, 20.0);
        let mut shots = 0;
        while resolver.can_consume(&container) {
            let before = container.amount;
            resolver.consume(&mut container).unwrap();
            assert_eq!(before - container.amount, 5.0);
            shots += 1;
        }
        assert_eq!(shots, 4);
        assert_eq!(container.amount, 0.0);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let resolver = water_and_slag();
        let container = LiquidContainer::new(SLAG, 1.0);
        assert_eq!(resolver.peek(&container).unwrap().quantity, 10.0);
        assert_eq!(container.amount, 1.0);
    }

    #[test]
    fn test_never_accepts_items() {
        for item in [ItemId(0), ItemId(1), ItemId(u16::MAX)] {
            assert!(!water_and_slag().accepts_item(item));
            assert!(!AmmoResolver::default().accepts_item(item));
        }
    }

    #[test]
    fn test_liquid_transfer_needs_both_rules() {
        let resolver = water_and_slag();
        assert!(resolver.accepts_liquid_transfer(WATER, 1.0, true));
        assert!(!resolver.accepts_liquid_transfer(WATER, 1.0, false));
        assert!(!resolver.accepts_liquid_transfer(OIL, 1.0, true));
        assert!(!resolver.accepts_liquid_transfer(OIL, 1.0, false));
    }
}
