//! Simulation engine.
//!
//! `SimulationEngine` owns the hecs world, the resolved content and the
//! turret catalog. It processes queued commands, runs the firing system
//! once per tick and produces `SimSnapshot`s. Completely headless.

use std::collections::VecDeque;
use std::path::Path;

use hecs::World;
use serde::{Deserialize, Serialize};

use sluice_core::commands::TurretCommand;
use sluice_core::components::TurretState;
use sluice_core::constants::TICK_RATE;
use sluice_core::content::{Content, ContentConfig};
use sluice_core::error::ContentResult;
use sluice_core::events::SimEvent;
use sluice_core::state::SimSnapshot;
use sluice_core::types::{SimTime, TurretId};

use crate::systems;
use crate::turret::TurretCatalog;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub content: ContentConfig,
    /// Ticks per simulated second.
    pub tick_rate: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            content: ContentConfig::builtin(),
            tick_rate: TICK_RATE,
        }
    }
}

impl SimConfig {
    /// Parse a full engine configuration. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ContentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Default settings with content read from a JSON file.
    pub fn from_content_file(path: &Path) -> ContentResult<Self> {
        Ok(Self {
            content: ContentConfig::load(path)?,
            ..Default::default()
        })
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    tick_rate: u32,
    content: Content,
    catalog: TurretCatalog,
    next_turret_id: u32,
    command_queue: VecDeque<TurretCommand>,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine. Fails if any content entry or turret definition is
    /// invalid; nothing is simulated with partially valid content.
    pub fn new(config: SimConfig) -> ContentResult<Self> {
        let content = config.content.resolve()?;
        let catalog = TurretCatalog::build(&content)?;
        tracing::info!(
            liquids = content.liquids.len(),
            items = content.items.len(),
            turrets = catalog.len(),
            "content loaded"
        );

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            tick_rate: config.tick_rate.max(1),
            content,
            catalog,
            next_turret_id: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: TurretCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = TurretCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();
        systems::firing::run(&mut self.world, &self.catalog, &self.content, &mut self.events);
        self.time.advance(self.tick_rate);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.catalog, &self.content, &self.time, events)
    }

    /// Place a turret immediately. Returns `None` for an unknown definition.
    pub fn place_turret(&mut self, definition: &str, tile_x: i32, tile_y: i32) -> Option<TurretId> {
        let Some(index) = self.catalog.index_of(definition) else {
            tracing::debug!(definition, "place ignored: unknown turret definition");
            return None;
        };
        let id = TurretId(self.next_turret_id);
        self.next_turret_id += 1;
        world_setup::spawn_turret(&mut self.world, id, index, tile_x, tile_y);
        tracing::info!(turret = id.0, definition, tile_x, tile_y, "turret placed");
        Some(id)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn catalog(&self) -> &TurretCatalog {
        &self.catalog
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: TurretCommand) {
        match command {
            TurretCommand::PlaceTurret {
                definition,
                tile_x,
                tile_y,
            } => {
                self.place_turret(&definition, tile_x, tile_y);
            }
            TurretCommand::RemoveTurret { turret } => {
                if let Some(entity) = self.turret_entity(turret) {
                    let _ = self.world.despawn(entity);
                }
            }
            TurretCommand::OfferLiquid {
                turret,
                liquid,
                amount,
            } => {
                let Some(entity) = self.turret_entity(turret) else {
                    return;
                };
                let Some(liquid_id) = self.content.liquid_by_name(&liquid).map(|l| l.id) else {
                    tracing::debug!(liquid = %liquid, "offer ignored: unknown liquid");
                    return;
                };
                systems::intake::offer_liquid(
                    &mut self.world,
                    &self.catalog,
                    entity,
                    liquid_id,
                    amount,
                    &mut self.events,
                );
            }
            TurretCommand::OfferItem { turret, item } => {
                let Some(entity) = self.turret_entity(turret) else {
                    return;
                };
                let Some(item_id) = self.content.item_by_name(&item).map(|i| i.id) else {
                    tracing::debug!(item = %item, "offer ignored: unknown item");
                    return;
                };
                systems::intake::offer_item(&mut self.world, &self.catalog, entity, item_id, &mut self.events);
            }
            TurretCommand::Aim { turret, target } => {
                self.with_turret_state(turret, |state| state.aim = Some(target));
            }
            TurretCommand::ClearAim { turret } => {
                self.with_turret_state(turret, |state| state.aim = None);
            }
        }
    }

    fn turret_entity(&self, turret: TurretId) -> Option<hecs::Entity> {
        let entity = world_setup::find_turret(&self.world, turret);
        if entity.is_none() {
            tracing::debug!(turret = turret.0, "command ignored: no such turret");
        }
        entity
    }

    fn with_turret_state(&mut self, turret: TurretId, f: impl FnOnce(&mut TurretState)) {
        if let Some(entity) = self.turret_entity(turret) {
            if let Ok(mut state) = self.world.get::<&mut TurretState>(entity) {
                f(&mut *state);
            }
        }
    }
}
