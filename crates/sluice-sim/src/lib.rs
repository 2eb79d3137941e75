//! Simulation for SLUICE turrets.
//!
//! Owns the ammunition rules (`ammo`), the turret definitions built
//! from content (`turret`), and a headless engine that runs the intake
//! and firing systems over a hecs world.

pub mod ammo;
pub mod engine;
pub mod systems;
pub mod turret;
pub mod world_setup;

pub use ammo::{AmmoResolver, AmmoSource, ItemAmmoResolver};
pub use engine::{SimConfig, SimulationEngine};
pub use sluice_core as core;
