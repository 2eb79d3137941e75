//! Snapshot system: reads the world and builds a `SimSnapshot`.
//!
//! This system is read-only.

use hecs::World;

use sluice_core::components::*;
use sluice_core::content::Content;
use sluice_core::enums::AmmoSourceKind;
use sluice_core::events::SimEvent;
use sluice_core::state::*;
use sluice_core::types::{Position, SimTime};

use crate::turret::TurretCatalog;

/// Build a snapshot of every placed turret, sorted by turret id.
pub fn build_snapshot(
    world: &World,
    catalog: &TurretCatalog,
    content: &Content,
    time: &SimTime,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    let mut turrets = Vec::new();
    let mut query = world.query::<(
        &TurretBlock,
        &Position,
        &TurretState,
        &LiquidContainer,
        &ItemAmmoStock,
        &Health,
    )>();
    for (_entity, (block, pos, state, container, stock, health)) in query.iter() {
        let Some(def) = catalog.get(block.definition) else {
            continue;
        };

        let source = def.source.kind();
        let liquid = match source {
            AmmoSourceKind::Liquid => container
                .liquid
                .and_then(|id| content.liquid(id))
                .map(|l| l.name.clone()),
            AmmoSourceKind::Item => None,
        };

        turrets.push(TurretView {
            id: block.id,
            definition: def.name.clone(),
            source,
            position: *pos,
            rotation: state.rotation,
            recoil: state.recoil,
            ammo: def.source.status(container, stock),
            liquid,
            bars: def
                .bars
                .iter()
                .map(|&kind| BarView {
                    kind,
                    value: def.bar_value(kind, health, container, stock),
                })
                .collect(),
        });
    }
    turrets.sort_by_key(|t| t.id);

    SimSnapshot {
        time: *time,
        turrets,
        events,
    }
}
