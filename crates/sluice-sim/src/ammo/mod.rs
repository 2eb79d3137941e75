//! Ammunition capabilities a turret definition can be configured with.
//!
//! A turret does not subclass anything to change how it is fed. Its
//! definition holds one `AmmoSource`, picked when content is built, and
//! every ammo question goes through it.

pub mod item;
pub mod liquid;

use sluice_core::components::{ItemAmmoStock, LiquidContainer};
use sluice_core::content::{AmmoSourceSpec, AmmoType};
use sluice_core::enums::{AmmoSourceKind, AmmoStatus};
use sluice_core::error::ContentResult;
use sluice_core::types::{ItemId, LiquidId};

pub use item::ItemAmmoResolver;
pub use liquid::AmmoResolver;

#[derive(Debug, Clone)]
pub enum AmmoSource {
    /// Fed solid items by conveyors.
    Item(ItemAmmoResolver),
    /// Fed liquid by conduits.
    Liquid(AmmoResolver),
}

impl AmmoSource {
    /// Build the capability described by a resolved content entry.
    pub fn build(turret: &str, spec: &AmmoSourceSpec) -> ContentResult<Self> {
        Ok(match spec {
            AmmoSourceSpec::Item { max_ammo, ammo } => {
                AmmoSource::Item(ItemAmmoResolver::build(turret, ammo, *max_ammo)?)
            }
            AmmoSourceSpec::Liquid { ammo, .. } => AmmoSource::Liquid(AmmoResolver::build(turret, ammo)?),
        })
    }

    pub fn kind(&self) -> AmmoSourceKind {
        match self {
            AmmoSource::Item(_) => AmmoSourceKind::Item,
            AmmoSource::Liquid(_) => AmmoSourceKind::Liquid,
        }
    }

    /// Ammo the next shot would use.
    pub fn peek<'a>(&'a self, liquid: &LiquidContainer, items: &ItemAmmoStock) -> Option<&'a AmmoType> {
        match self {
            AmmoSource::Item(resolver) => resolver.peek(items),
            AmmoSource::Liquid(resolver) => resolver.peek(liquid),
        }
    }

    pub fn status(&self, liquid: &LiquidContainer, items: &ItemAmmoStock) -> AmmoStatus {
        match self {
            AmmoSource::Item(resolver) => resolver.status(items),
            AmmoSource::Liquid(resolver) => resolver.status(liquid),
        }
    }

    pub fn has_ammo(&self, liquid: &LiquidContainer, items: &ItemAmmoStock) -> bool {
        self.status(liquid, items) == AmmoStatus::Ready
    }

    /// Spend one shot. Call only after `has_ammo` returned true.
    pub fn use_ammo(&self, liquid: &mut LiquidContainer, items: &mut ItemAmmoStock) -> Option<AmmoType> {
        match self {
            AmmoSource::Item(resolver) => resolver.consume(items),
            AmmoSource::Liquid(resolver) => resolver.consume(liquid),
        }
    }

    pub fn accepts_item(&self, items: &ItemAmmoStock, item: ItemId) -> bool {
        match self {
            AmmoSource::Item(resolver) => resolver.accepts_item(items, item),
            AmmoSource::Liquid(resolver) => resolver.accepts_item(item),
        }
    }

    /// Combine the block's generic liquid rules with the ammo table.
    pub fn accepts_liquid(&self, liquid: LiquidId, amount: f64, base_acceptance: bool) -> bool {
        match self {
            AmmoSource::Item(_) => false,
            AmmoSource::Liquid(resolver) => resolver.accepts_liquid_transfer(liquid, amount, base_acceptance),
        }
    }
}
