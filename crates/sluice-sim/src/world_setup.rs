//! Entity spawn factories.

use hecs::World;

use sluice_core::components::*;
use sluice_core::constants::TURRET_HEALTH;
use sluice_core::types::{Position, TurretId};

/// Spawn a turret of catalog entry `definition` centered on tile `(tile_x, tile_y)`.
/// Every turret carries both stores; its ammo source decides which one is used.
pub fn spawn_turret(
    world: &mut World,
    id: TurretId,
    definition: usize,
    tile_x: i32,
    tile_y: i32,
) -> hecs::Entity {
    world.spawn((
        TurretBlock { id, definition },
        Position::tile_center(tile_x, tile_y),
        TurretState::default(),
        LiquidContainer::default(),
        ItemAmmoStock::default(),
        Health {
            current: TURRET_HEALTH,
            max: TURRET_HEALTH,
        },
    ))
}

/// Find the entity of a placed turret.
pub fn find_turret(world: &World, id: TurretId) -> Option<hecs::Entity> {
    world
        .query::<&TurretBlock>()
        .iter()
        .find(|(_, block)| block.id == id)
        .map(|(entity, _)| entity)
}
