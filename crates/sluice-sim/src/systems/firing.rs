//! Firing system: aim, reload, spend ammunition, emit muzzle effects.

use std::f64::consts::{PI, TAU};

use hecs::World;

use sluice_core::components::*;
use sluice_core::constants::*;
use sluice_core::content::{AmmoKey, Content};
use sluice_core::events::SimEvent;
use sluice_core::types::{Color, Position};

use crate::turret::TurretCatalog;

/// Run the firing system for one tick.
pub fn run(world: &mut World, catalog: &TurretCatalog, content: &Content, events: &mut Vec<SimEvent>) {
    for (_entity, (block, pos, state, container, stock)) in world.query_mut::<(
        &TurretBlock,
        &Position,
        &mut TurretState,
        &mut LiquidContainer,
        &mut ItemAmmoStock,
    )>() {
        let Some(def) = catalog.get(block.definition) else {
            continue;
        };

        state.recoil = (state.recoil - RECOIL_RECOVERY).max(0.0);
        state.reload = state.reload.saturating_sub(1);

        let Some(target) = state.aim else {
            continue;
        };
        let aimed = rotate_toward(&mut state.rotation, pos.angle_to(&target));

        if !aimed || state.reload > 0 || !def.source.has_ammo(container, stock) {
            continue;
        }
        // No ammo is not an error: the turret simply holds fire.
        let Some(ammo) = def.source.use_ammo(container, stock) else {
            continue;
        };

        state.reload = def.reload_ticks;
        state.recoil = def.recoil;

        let color = match ammo.key {
            AmmoKey::Liquid(liquid) => content.liquid_color(liquid),
            AmmoKey::Item(_) => Color::WHITE,
        };
        let muzzle = pos.offset_rotated(def.barrel_offset, state.rotation);

        events.push(SimEvent::Effect {
            kind: def.shoot_effect,
            color,
            position: muzzle,
            rotation: state.rotation,
        });
        events.push(SimEvent::Effect {
            kind: def.smoke_effect,
            color,
            position: muzzle,
            rotation: state.rotation,
        });
        if def.shoot_shake > 0.0 {
            events.push(SimEvent::Shake {
                turret: block.id,
                intensity: def.shoot_shake,
            });
        }
        events.push(SimEvent::Fired {
            turret: block.id,
            ammo: ammo.key,
        });
    }
}

/// Turn `rotation` toward `target` by at most `ROTATE_SPEED`.
/// Returns true once within `AIM_TOLERANCE`.
pub fn rotate_toward(rotation: &mut f64, target: f64) -> bool {
    let diff = (target - *rotation + PI).rem_euclid(TAU) - PI;
    *rotation = (*rotation + diff.clamp(-ROTATE_SPEED, ROTATE_SPEED)).rem_euclid(TAU);
    (diff.abs() - ROTATE_SPEED).max(0.0) <= AIM_TOLERANCE
}
