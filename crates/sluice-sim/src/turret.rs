//! Turret definitions: one immutable record per turret kind, shared by
//! every placed instance.

use std::sync::Arc;

use glam::DVec2;

use sluice_core::components::{Health, ItemAmmoStock, LiquidContainer};
use sluice_core::constants::LIQUID_EMPTY_EPSILON;
use sluice_core::content::{AmmoSourceSpec, Content, TurretSpec};
use sluice_core::enums::{BarKind, EffectKind, RejectReason};
use sluice_core::error::ContentResult;
use sluice_core::types::{ItemId, LiquidId};

use crate::ammo::AmmoSource;

#[derive(Debug, Clone)]
pub struct TurretDefinition {
    pub name: String,
    pub source: AmmoSource,
    /// Whether the block stores liquid at all.
    pub has_liquids: bool,
    pub liquid_capacity: f64,
    pub reload_ticks: u32,
    pub recoil: f64,
    pub shoot_shake: f64,
    pub barrel_offset: DVec2,
    pub shoot_effect: EffectKind,
    pub smoke_effect: EffectKind,
    pub bars: Vec<BarKind>,
}

impl TurretDefinition {
    /// Build a definition from resolved content. A failure here means the
    /// turret kind is invalid and must not be placed.
    pub fn build(spec: &TurretSpec) -> ContentResult<Self> {
        let source = AmmoSource::build(&spec.name, &spec.source)?;

        let (has_liquids, liquid_capacity) = match &spec.source {
            AmmoSourceSpec::Liquid { capacity, .. } => (true, *capacity),
            AmmoSourceSpec::Item { .. } => (false, 0.0),
        };

        let mut bars = TurretSpec::base_bars();
        if has_liquids {
            bars.retain(|bar| !matches!(bar, BarKind::Inventory | BarKind::Liquid));
            bars.push(BarKind::Liquid);
        }

        Ok(Self {
            name: spec.name.clone(),
            source,
            has_liquids,
            liquid_capacity,
            reload_ticks: spec.reload_ticks,
            recoil: spec.recoil,
            shoot_shake: spec.shoot_shake,
            barrel_offset: spec.barrel_offset,
            shoot_effect: spec.shoot_effect,
            smoke_effect: spec.smoke_effect,
            bars,
        })
    }

    /// Generic block rules for taking in liquid: a finite non-negative offer,
    /// room for all of it, and either the same liquid or an effectively
    /// empty container.
    pub fn base_accepts_liquid(&self, container: &LiquidContainer, liquid: LiquidId, amount: f64) -> bool {
        self.has_liquids
            && valid_offer(amount)
            && container.amount + amount < self.liquid_capacity
            && (container.liquid == Some(liquid) || container.amount <= LIQUID_EMPTY_EPSILON)
    }

    pub fn accepts_liquid(&self, container: &LiquidContainer, liquid: LiquidId, amount: f64) -> bool {
        let base = self.base_accepts_liquid(container, liquid, amount);
        self.source.accepts_liquid(liquid, amount, base)
    }

    /// Why `accepts_liquid` said no. Only meaningful after a refusal.
    pub fn liquid_reject_reason(&self, container: &LiquidContainer, liquid: LiquidId, amount: f64) -> RejectReason {
        match &self.source {
            AmmoSource::Item(_) => RejectReason::WrongKind,
            AmmoSource::Liquid(_) if !valid_offer(amount) => RejectReason::InvalidAmount,
            AmmoSource::Liquid(resolver) if resolver.lookup(liquid).is_none() => RejectReason::NotAmmo,
            AmmoSource::Liquid(_) => {
                if container.amount + amount >= self.liquid_capacity {
                    RejectReason::Full
                } else {
                    RejectReason::Mixed
                }
            }
        }
    }

    /// Take in an accepted liquid offer.
    pub fn handle_liquid(&self, container: &mut LiquidContainer, liquid: LiquidId, amount: f64) {
        container.liquid = Some(liquid);
        container.amount += amount;
    }

    pub fn accepts_item(&self, stock: &ItemAmmoStock, item: ItemId) -> bool {
        self.source.accepts_item(stock, item)
    }

    pub fn item_reject_reason(&self, item: ItemId) -> RejectReason {
        match &self.source {
            AmmoSource::Liquid(_) => RejectReason::WrongKind,
            AmmoSource::Item(resolver) if resolver.lookup(item).is_none() => RejectReason::NotAmmo,
            AmmoSource::Item(_) => RejectReason::Full,
        }
    }

    /// Gauge value of one bar, clamped to `[0, 1]`.
    pub fn bar_value(
        &self,
        bar: BarKind,
        health: &Health,
        container: &LiquidContainer,
        stock: &ItemAmmoStock,
    ) -> f64 {
        let value = match bar {
            BarKind::Health if health.max > 0.0 => health.current / health.max,
            BarKind::Liquid if self.liquid_capacity > 0.0 => container.amount / self.liquid_capacity,
            BarKind::Inventory => match &self.source {
                AmmoSource::Item(resolver) if resolver.max_ammo() > 0 => {
                    stock.total as f64 / resolver.max_ammo() as f64
                }
                _ => 0.0,
            },
            _ => 0.0,
        };
        value.clamp(0.0, 1.0)
    }
}

fn valid_offer(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

/// Every buildable turret kind, indexed by `TurretBlock::definition`.
#[derive(Debug, Clone, Default)]
pub struct TurretCatalog {
    definitions: Vec<Arc<TurretDefinition>>,
}

impl TurretCatalog {
    /// Build every turret in the content. The first invalid turret aborts the whole catalog.
    pub fn build(content: &Content) -> ContentResult<Self> {
        let mut definitions = Vec::with_capacity(content.turrets.len());
        for spec in &content.turrets {
            match TurretDefinition::build(spec) {
                Ok(def) => definitions.push(Arc::new(def)),
                Err(err) => {
                    tracing::warn!(turret = %spec.name, error = %err, "turret definition rejected");
                    return Err(err);
                }
            }
        }
        Ok(Self { definitions })
    }

    pub fn get(&self, index: usize) -> Option<&Arc<TurretDefinition>> {
        self.definitions.get(index)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.definitions.iter().position(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
