//! Simulation snapshot, published after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{AmmoSourceKind, AmmoStatus, BarKind};
use crate::events::SimEvent;
use crate::types::{Position, SimTime, TurretId};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub turrets: Vec<TurretView>,
    pub events: Vec<SimEvent>,
}

/// One turret as the UI sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretView {
    pub id: TurretId,
    pub definition: String,
    pub source: AmmoSourceKind,
    pub position: Position,
    pub rotation: f64,
    pub recoil: f64,
    pub ammo: AmmoStatus,
    /// Liquid name, for liquid turrets holding something.
    pub liquid: Option<String>,
    pub bars: Vec<BarView>,
}

/// A single gauge value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarView {
    pub kind: BarKind,
    pub value: f64,
}
