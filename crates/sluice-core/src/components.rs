//! ECS components for hecs entities.
//!
//! Components are plain data structs. Ammunition rules live in the
//! simulation crate, not here.

use serde::{Deserialize, Serialize};

use crate::types::{ItemId, LiquidId, Position, TurretId};

/// Marks an entity as a placed turret and links it to its definition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TurretBlock {
    pub id: TurretId,
    /// Index into the engine's turret definition table.
    pub definition: usize,
}

/// Liquid stored in a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LiquidContainer {
    /// Liquid currently held. `None` until something has flowed in.
    pub liquid: Option<LiquidId>,
    /// Current amount, never negative while callers respect the firing precondition.
    pub amount: f64,
}

impl LiquidContainer {
    pub fn new(liquid: LiquidId, amount: f64) -> Self {
        Self {
            liquid: Some(liquid),
            amount,
        }
    }
}

/// One stack of item ammunition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAmmoEntry {
    pub item: ItemId,
    pub rounds: u32,
}

/// Item ammunition stored in an item-fed turret. The last entry fires first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAmmoStock {
    pub entries: Vec<ItemAmmoEntry>,
    pub total: u32,
}

/// Block hit points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Per-instance turret mechanics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TurretState {
    /// Barrel rotation in radians (0 = +X).
    pub rotation: f64,
    /// Ticks until the turret may fire again.
    pub reload: u32,
    /// Current visual kick-back, decays each tick.
    pub recoil: f64,
    /// Point the turret is ordered to shoot at.
    pub aim: Option<Position>,
}
