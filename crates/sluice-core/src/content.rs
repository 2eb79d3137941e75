//! Game content: liquids, items, ammunition and turret definitions.
//!
//! Content is authored by name in JSON (`ContentConfig`) and resolved
//! once into id-keyed records (`Content`). Resolution checks that every
//! name reference exists and every number is usable. Duplicate ammo
//! keys are rejected later, when a turret's ammo resolver is built.

use std::collections::HashMap;
use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{AmmoSourceKind, BarKind, EffectKind};
use crate::error::{ContentError, ContentResult};
use crate::types::{Color, ItemId, LiquidId};

// ---- Authored (by name) ----

/// Complete content file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub liquids: Vec<LiquidConfig>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    #[serde(default)]
    pub turrets: Vec<TurretConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiquidConfig {
    pub name: String,
    /// `#rrggbb` or `#rrggbbaa`.
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,
}

/// One ammunition entry. `resource` names a liquid or an item depending
/// on the turret's ammo source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmmoConfig {
    pub resource: String,
    /// Liquid consumed per shot, or rounds granted per item.
    pub quantity: f64,
    #[serde(default)]
    pub stats: AmmoStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AmmoSourceConfig {
    Item {
        #[serde(default = "default_max_ammo")]
        max_ammo: u32,
        ammo: Vec<AmmoConfig>,
    },
    Liquid {
        #[serde(default = "default_liquid_capacity")]
        capacity: f64,
        ammo: Vec<AmmoConfig>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurretConfig {
    pub name: String,
    pub source: AmmoSourceConfig,
    #[serde(default = "default_reload_ticks")]
    pub reload_ticks: u32,
    #[serde(default)]
    pub recoil: f64,
    #[serde(default)]
    pub shoot_shake: f64,
    /// Muzzle position relative to the tile center at rotation 0.
    #[serde(default)]
    pub barrel_offset: DVec2,
    #[serde(default)]
    pub shoot_effect: Option<EffectKind>,
    #[serde(default)]
    pub smoke_effect: Option<EffectKind>,
}

fn default_max_ammo() -> u32 {
    DEFAULT_MAX_AMMO
}

fn default_liquid_capacity() -> f64 {
    DEFAULT_LIQUID_CAPACITY
}

fn default_reload_ticks() -> u32 {
    DEFAULT_RELOAD_TICKS
}

// ---- Resolved (by id) ----

/// A fluid type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liquid {
    pub id: LiquidId,
    pub name: String,
    pub color: Color,
}

/// A solid item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

/// The resource an ammo entry is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmmoKey {
    Liquid(LiquidId),
    Item(ItemId),
}

impl std::fmt::Display for AmmoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmmoKey::Liquid(id) => write!(f, "{id}"),
            AmmoKey::Item(id) => write!(f, "{id}"),
        }
    }
}

/// Projectile metadata carried with an ammo type. The ammunition
/// bookkeeping never reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoStats {
    pub damage: f64,
    pub speed: f64,
    pub projectile: String,
}

impl Default for AmmoStats {
    fn default() -> Self {
        Self {
            damage: 1.0,
            speed: 2.0,
            projectile: "standard".to_string(),
        }
    }
}

/// Immutable ammunition definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoType {
    pub key: AmmoKey,
    /// Liquid consumed per shot, or rounds granted per item.
    pub quantity: f64,
    pub stats: AmmoStats,
}

impl AmmoType {
    pub fn liquid(liquid: LiquidId, quantity: f64) -> Self {
        Self {
            key: AmmoKey::Liquid(liquid),
            quantity,
            stats: AmmoStats::default(),
        }
    }

    pub fn item(item: ItemId, rounds: u32) -> Self {
        Self {
            key: AmmoKey::Item(item),
            quantity: rounds as f64,
            stats: AmmoStats::default(),
        }
    }

    pub fn with_stats(mut self, stats: AmmoStats) -> Self {
        self.stats = stats;
        self
    }
}

/// Resolved ammo source of a turret. Ammo lists keep their authored order.
#[derive(Debug, Clone, PartialEq)]
pub enum AmmoSourceSpec {
    Item { max_ammo: u32, ammo: Vec<AmmoType> },
    Liquid { capacity: f64, ammo: Vec<AmmoType> },
}

impl AmmoSourceSpec {
    pub fn kind(&self) -> AmmoSourceKind {
        match self {
            AmmoSourceSpec::Item { .. } => AmmoSourceKind::Item,
            AmmoSourceSpec::Liquid { .. } => AmmoSourceKind::Liquid,
        }
    }
}

/// Resolved turret entry, ready to be built into a turret definition.
#[derive(Debug, Clone, PartialEq)]
pub struct TurretSpec {
    pub name: String,
    pub source: AmmoSourceSpec,
    pub reload_ticks: u32,
    pub recoil: f64,
    pub shoot_shake: f64,
    pub barrel_offset: DVec2,
    pub shoot_effect: EffectKind,
    pub smoke_effect: EffectKind,
}

impl TurretSpec {
    /// Bars every turret publishes before its ammo source adjusts them.
    pub fn base_bars() -> Vec<BarKind> {
        vec![BarKind::Health, BarKind::Inventory]
    }
}

/// Resolved content registry.
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub liquids: Vec<Liquid>,
    pub items: Vec<Item>,
    pub turrets: Vec<TurretSpec>,
}

impl Content {
    pub fn liquid(&self, id: LiquidId) -> Option<&Liquid> {
        self.liquids.get(id.0 as usize)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0 as usize)
    }

    pub fn liquid_by_name(&self, name: &str) -> Option<&Liquid> {
        self.liquids.iter().find(|l| l.name == name)
    }

    pub fn item_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn turret_by_name(&self, name: &str) -> Option<&TurretSpec> {
        self.turrets.iter().find(|t| t.name == name)
    }

    /// Display color of a liquid, white if unknown.
    pub fn liquid_color(&self, id: LiquidId) -> Color {
        self.liquid(id).map(|l| l.color).unwrap_or_default()
    }
}

impl ContentConfig {
    /// Parse a content file from a JSON string.
    pub fn from_json_str(json: &str) -> ContentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a content file.
    pub fn load(path: &Path) -> ContentResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Resolve names to ids and validate every entry.
    pub fn resolve(&self) -> ContentResult<Content> {
        let mut liquid_ids: HashMap<&str, LiquidId> = HashMap::new();
        let mut liquids = Vec::with_capacity(self.liquids.len());
        for (idx, cfg) in self.liquids.iter().enumerate() {
            let id = LiquidId(content_id("liquid", idx, self.liquids.len())?);
            if liquid_ids.insert(cfg.name.as_str(), id).is_some() {
                return Err(ContentError::DuplicateContent {
                    kind: "liquid",
                    name: cfg.name.clone(),
                });
            }
            let color = Color::from_hex(&cfg.color).ok_or_else(|| ContentError::InvalidColor {
                liquid: cfg.name.clone(),
                color: cfg.color.clone(),
            })?;
            liquids.push(Liquid {
                id,
                name: cfg.name.clone(),
                color,
            });
        }

        let mut item_ids: HashMap<&str, ItemId> = HashMap::new();
        let mut items = Vec::with_capacity(self.items.len());
        for (idx, cfg) in self.items.iter().enumerate() {
            let id = ItemId(content_id("item", idx, self.items.len())?);
            if item_ids.insert(cfg.name.as_str(), id).is_some() {
                return Err(ContentError::DuplicateContent {
                    kind: "item",
                    name: cfg.name.clone(),
                });
            }
            items.push(Item {
                id,
                name: cfg.name.clone(),
            });
        }

        let mut turrets: Vec<TurretSpec> = Vec::with_capacity(self.turrets.len());
        for cfg in &self.turrets {
            if turrets.iter().any(|t| t.name == cfg.name) {
                return Err(ContentError::DuplicateContent {
                    kind: "turret",
                    name: cfg.name.clone(),
                });
            }
            turrets.push(resolve_turret(cfg, &liquid_ids, &item_ids)?);
        }

        Ok(Content {
            liquids,
            items,
            turrets,
        })
    }

    /// Built-in content used when no content file is supplied.
    pub fn builtin() -> Self {
        let liquid = |name: &str, color: &str| LiquidConfig {
            name: name.to_string(),
            color: color.to_string(),
        };
        let ammo = |resource: &str, quantity: f64, damage: f64, projectile: &str| AmmoConfig {
            resource: resource.to_string(),
            quantity,
            stats: AmmoStats {
                damage,
                speed: 2.5,
                projectile: projectile.to_string(),
            },
        };

        Self {
            liquids: vec![
                liquid("water", "#596ab8"),
                liquid("slag", "#e37341"),
                liquid("oil", "#313131"),
                liquid("cryofluid", "#6ecdec"),
            ],
            items: vec![
                ItemConfig {
                    name: "copper".to_string(),
                },
                ItemConfig {
                    name: "graphite".to_string(),
                },
            ],
            turrets: vec![
                TurretConfig {
                    name: "wave".to_string(),
                    source: AmmoSourceConfig::Liquid {
                        capacity: 40.0,
                        ammo: vec![
                            ammo("water", 5.0, 0.5, "water-shot"),
                            ammo("slag", 10.0, 4.0, "slag-shot"),
                            ammo("cryofluid", 4.0, 1.0, "cryo-shot"),
                        ],
                    },
                    reload_ticks: 3,
                    recoil: 1.0,
                    shoot_shake: 0.0,
                    barrel_offset: DVec2::new(4.0, 0.0),
                    shoot_effect: Some(EffectKind::ShootLiquid),
                    smoke_effect: Some(EffectKind::SmokeLiquid),
                },
                TurretConfig {
                    name: "duo".to_string(),
                    source: AmmoSourceConfig::Item {
                        max_ammo: 30,
                        ammo: vec![
                            ammo("copper", 2.0, 9.0, "standard-copper"),
                            ammo("graphite", 5.0, 18.0, "standard-dense"),
                        ],
                    },
                    reload_ticks: 20,
                    recoil: 0.5,
                    shoot_shake: 0.0,
                    barrel_offset: DVec2::new(3.0, 0.0),
                    shoot_effect: None,
                    smoke_effect: None,
                },
            ],
        }
    }
}

fn resolve_turret(
    cfg: &TurretConfig,
    liquid_ids: &HashMap<&str, LiquidId>,
    item_ids: &HashMap<&str, ItemId>,
) -> ContentResult<TurretSpec> {
    let source = match &cfg.source {
        AmmoSourceConfig::Liquid { capacity, ammo } => {
            if !capacity.is_finite() || *capacity <= 0.0 {
                return Err(ContentError::InvalidCapacity {
                    turret: cfg.name.clone(),
                    capacity: *capacity,
                });
            }
            let mut resolved = Vec::with_capacity(ammo.len());
            for entry in ammo {
                check_quantity(&cfg.name, entry.quantity)?;
                let id = liquid_ids.get(entry.resource.as_str()).copied().ok_or_else(|| {
                    ContentError::UnknownLiquid {
                        turret: cfg.name.clone(),
                        liquid: entry.resource.clone(),
                    }
                })?;
                resolved.push(AmmoType {
                    key: AmmoKey::Liquid(id),
                    quantity: entry.quantity,
                    stats: entry.stats.clone(),
                });
            }
            AmmoSourceSpec::Liquid {
                capacity: *capacity,
                ammo: resolved,
            }
        }
        AmmoSourceConfig::Item { max_ammo, ammo } => {
            let mut resolved = Vec::with_capacity(ammo.len());
            for entry in ammo {
                check_quantity(&cfg.name, entry.quantity)?;
                // Items grant whole rounds, and one item must fit in an empty turret.
                if entry.quantity.fract() != 0.0 || entry.quantity > f64::from(*max_ammo) {
                    return Err(ContentError::InvalidQuantity {
                        turret: cfg.name.clone(),
                        quantity: entry.quantity,
                    });
                }
                let id = item_ids.get(entry.resource.as_str()).copied().ok_or_else(|| {
                    ContentError::UnknownItem {
                        turret: cfg.name.clone(),
                        item: entry.resource.clone(),
                    }
                })?;
                resolved.push(AmmoType {
                    key: AmmoKey::Item(id),
                    quantity: entry.quantity,
                    stats: entry.stats.clone(),
                });
            }
            AmmoSourceSpec::Item {
                max_ammo: *max_ammo,
                ammo: resolved,
            }
        }
    };

    let (default_shoot, default_smoke) = match source.kind() {
        AmmoSourceKind::Liquid => (EffectKind::ShootLiquid, EffectKind::SmokeLiquid),
        AmmoSourceKind::Item => (EffectKind::ShootSmall, EffectKind::SmokeSmall),
    };

    Ok(TurretSpec {
        name: cfg.name.clone(),
        source,
        reload_ticks: cfg.reload_ticks.max(1),
        recoil: cfg.recoil,
        shoot_shake: cfg.shoot_shake,
        barrel_offset: cfg.barrel_offset,
        shoot_effect: cfg.shoot_effect.unwrap_or(default_shoot),
        smoke_effect: cfg.smoke_effect.unwrap_or(default_smoke),
    })
}

fn content_id(kind: &'static str, idx: usize, count: usize) -> ContentResult<u16> {
    u16::try_from(idx).map_err(|_| ContentError::TooManyContent { kind, count })
}

fn check_quantity(turret: &str, quantity: f64) -> ContentResult<()> {
    if quantity.is_finite() && quantity > 0.0 {
        Ok(())
    } else {
        Err(ContentError::InvalidQuantity {
            turret: turret.to_string(),
            quantity,
        })
    }
}
