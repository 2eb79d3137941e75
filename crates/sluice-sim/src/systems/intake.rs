//! Intake: liquid and item offers from neighbouring blocks.
//!
//! The only writers of a turret's stores besides the firing system.

use hecs::{Entity, World};

use sluice_core::components::{ItemAmmoStock, LiquidContainer, TurretBlock};
use sluice_core::events::SimEvent;
use sluice_core::types::{ItemId, LiquidId};

use crate::turret::TurretCatalog;

/// Offer `amount` of `liquid` to a turret. Returns whether it was taken.
pub fn offer_liquid(
    world: &mut World,
    catalog: &TurretCatalog,
    entity: Entity,
    liquid: LiquidId,
    amount: f64,
    events: &mut Vec<SimEvent>,
) -> bool {
    let Ok((block, container)) = world.query_one_mut::<(&TurretBlock, &mut LiquidContainer)>(entity) else {
        return false;
    };
    let Some(def) = catalog.get(block.definition) else {
        return false;
    };

    if def.accepts_liquid(container, liquid, amount) {
        def.handle_liquid(container, liquid, amount);
        true
    } else {
        events.push(SimEvent::TransferRejected {
            turret: block.id,
            reason: def.liquid_reject_reason(container, liquid, amount),
        });
        false
    }
}

/// Offer a single item to a turret. Returns whether it was taken.
pub fn offer_item(
    world: &mut World,
    catalog: &TurretCatalog,
    entity: Entity,
    item: ItemId,
    events: &mut Vec<SimEvent>,
) -> bool {
    let Ok((block, stock)) = world.query_one_mut::<(&TurretBlock, &mut ItemAmmoStock)>(entity) else {
        return false;
    };
    let Some(def) = catalog.get(block.definition) else {
        return false;
    };

    if !def.accepts_item(stock, item) {
        events.push(SimEvent::TransferRejected {
            turret: block.id,
            reason: def.item_reject_reason(item),
        });
        return false;
    }
    if let crate::ammo::AmmoSource::Item(resolver) = &def.source {
        resolver.add_item(stock, item);
    }
    true
}
