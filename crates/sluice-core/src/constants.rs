//! Simulation constants and tuning parameters.

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// World units per tile edge.
pub const TILE_SIZE: f64 = 8.0;

// --- Liquids ---

/// A container holding at most this much is treated as empty and will
/// accept a different liquid.
pub const LIQUID_EMPTY_EPSILON: f64 = 0.01;

/// Default liquid capacity for turrets whose content entry omits one.
pub const DEFAULT_LIQUID_CAPACITY: f64 = 10.0;

// --- Items ---

/// Default maximum stored rounds for item-fed turrets.
pub const DEFAULT_MAX_AMMO: u32 = 30;

// --- Turrets ---

/// Default ticks between shots.
pub const DEFAULT_RELOAD_TICKS: u32 = 20;

/// Recoil recovered per tick (world units).
pub const RECOIL_RECOVERY: f64 = 0.15;

/// Maximum rotation per tick while aiming (radians).
pub const ROTATE_SPEED: f64 = 0.2;

/// Aim tolerance before a turret is allowed to fire (radians).
pub const AIM_TOLERANCE: f64 = 0.1;

/// Hit points of a freshly placed turret.
pub const TURRET_HEALTH: f64 = 160.0;
