//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Visual effect kinds emitted when a turret fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Muzzle flash for item ammunition.
    #[default]
    ShootSmall,
    /// Liquid spray at the muzzle.
    ShootLiquid,
    /// Small smoke puff.
    SmokeSmall,
    /// Liquid mist left after a shot.
    SmokeLiquid,
}

/// UI bar gauges a block can publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarKind {
    Health,
    /// Stored item ammunition relative to the maximum.
    Inventory,
    /// Stored liquid relative to the liquid capacity.
    Liquid,
}

/// Readiness of a turret's ammunition supply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmmoStatus {
    /// Nothing stored, or what is stored is not ammunition for this turret.
    #[default]
    NoAmmo,
    /// Valid ammunition stored, but less than one shot's worth.
    Insufficient,
    /// At least one shot available.
    Ready,
}

/// Which ammunition capability a turret definition was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmmoSourceKind {
    Item,
    Liquid,
}

/// Why an offered transfer was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The turret does not fire this liquid or item.
    NotAmmo,
    /// The container or stock has no room for the offer.
    Full,
    /// The container holds a different liquid.
    Mixed,
    /// The turret does not take this kind of resource at all.
    WrongKind,
    /// The offered amount is negative or not a finite number.
    InvalidAmount,
}
