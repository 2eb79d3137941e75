//! ECS systems that operate on the simulation world.
//!
//! Systems are plain functions over `&mut World` (or `&World` for
//! read-only work). All per-turret state lives in components; turret
//! definitions are read from the catalog.

pub mod firing;
pub mod intake;
pub mod snapshot;
