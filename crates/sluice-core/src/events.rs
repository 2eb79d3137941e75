//! Events emitted by the simulation for the effects and UI layers.

use serde::{Deserialize, Serialize};

use crate::content::AmmoKey;
use crate::enums::{EffectKind, RejectReason};
use crate::types::{Color, Position, TurretId};

/// Everything the simulation reports in one tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Play a visual effect.
    Effect {
        kind: EffectKind,
        color: Color,
        position: Position,
        rotation: f64,
    },
    /// Shake the camera around a turret.
    Shake { turret: TurretId, intensity: f64 },
    /// A turret spent one shot of ammunition.
    Fired { turret: TurretId, ammo: AmmoKey },
    /// A liquid or item offer was refused.
    TransferRejected {
        turret: TurretId,
        reason: RejectReason,
    },
}
