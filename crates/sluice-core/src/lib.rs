//! Core types and definitions for the SLUICE turret simulation.
//!
//! This crate defines the vocabulary shared by the simulation:
//! content definitions, components, commands, events, snapshots,
//! constants and errors. It owns no game logic.

pub mod commands;
pub mod components;
pub mod constants;
pub mod content;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
