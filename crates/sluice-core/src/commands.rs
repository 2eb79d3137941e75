//! Commands sent to the simulation by the host game.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::{Position, TurretId};

/// All actions the host can request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TurretCommand {
    /// Place a turret of the named definition on a tile.
    PlaceTurret { definition: String, tile_x: i32, tile_y: i32 },
    /// Remove a placed turret.
    RemoveTurret { turret: TurretId },
    /// Offer liquid from a neighbouring conduit. Refused offers are reported as events.
    OfferLiquid {
        turret: TurretId,
        liquid: String,
        amount: f64,
    },
    /// Offer one item from a neighbouring conveyor.
    OfferItem { turret: TurretId, item: String },
    /// Point the turret at a world position and keep firing while ammo lasts.
    Aim { turret: TurretId, target: Position },
    /// Stop firing.
    ClearAim { turret: TurretId },
}
