//! Content error types.
//!
//! Everything here is a construction-time failure: a turret definition
//! that fails to build must not be used. Running out of ammunition is
//! never an error.

use thiserror::Error;

/// Errors raised while loading or building game content.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Two ammo entries of one turret are keyed on the same liquid or item.
    #[error("turret \"{turret}\" has two conflicting ammo entries on {key}")]
    ConfigurationConflict { turret: String, key: String },

    /// An ammo entry names a liquid that is not defined.
    #[error("turret \"{turret}\" references unknown liquid \"{liquid}\"")]
    UnknownLiquid { turret: String, liquid: String },

    /// An ammo entry names an item that is not defined.
    #[error("turret \"{turret}\" references unknown item \"{item}\"")]
    UnknownItem { turret: String, item: String },

    /// An ammo entry keyed on the wrong resource kind for its turret.
    #[error("turret \"{turret}\" takes {expected} ammo but an entry is keyed on {key}")]
    MismatchedAmmo {
        turret: String,
        expected: &'static str,
        key: String,
    },

    /// Two liquids, items or turrets share a name.
    #[error("duplicate {kind} \"{name}\"")]
    DuplicateContent { kind: &'static str, name: String },

    /// Ammo quantity must be finite and positive.
    #[error("turret \"{turret}\" has invalid ammo quantity {quantity}")]
    InvalidQuantity { turret: String, quantity: f64 },

    /// A liquid color is not `#rrggbb` or `#rrggbbaa`.
    #[error("liquid \"{liquid}\" has invalid color \"{color}\"")]
    InvalidColor { liquid: String, color: String },

    /// More liquids or items than their ids can address.
    #[error("too many {kind} definitions: {count}")]
    TooManyContent { kind: &'static str, count: usize },

    /// Liquid turrets need room for at least one drop.
    #[error("turret \"{turret}\" has invalid liquid capacity {capacity}")]
    InvalidCapacity { turret: String, capacity: f64 },

    /// The content file is not valid JSON for the content schema.
    #[error("failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    /// The content file could not be read.
    #[error("failed to read content: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;
