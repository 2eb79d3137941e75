//! Item ammunition for conveyor-fed turrets.

use std::collections::HashMap;

use sluice_core::components::{ItemAmmoEntry, ItemAmmoStock};
use sluice_core::content::{AmmoKey, AmmoType};
use sluice_core::enums::AmmoStatus;
use sluice_core::error::{ContentError, ContentResult};
use sluice_core::types::ItemId;

/// Maps each accepted item to the ammo it loads, with a cap on stored rounds.
#[derive(Debug, Clone)]
pub struct ItemAmmoResolver {
    ammo: HashMap<ItemId, AmmoType>,
    max_ammo: u32,
}

impl ItemAmmoResolver {
    pub fn build(turret: &str, ammo_types: &[AmmoType], max_ammo: u32) -> ContentResult<Self> {
        let mut ammo = HashMap::with_capacity(ammo_types.len());
        for ammo_type in ammo_types {
            let item = match ammo_type.key {
                AmmoKey::Item(item) => item,
                key @ AmmoKey::Liquid(_) => {
                    return Err(ContentError::MismatchedAmmo {
                        turret: turret.to_string(),
                        expected: "item",
                        key: key.to_string(),
                    })
                }
            };
            if ammo.insert(item, ammo_type.clone()).is_some() {
                return Err(ContentError::ConfigurationConflict {
                    turret: turret.to_string(),
                    key: item.to_string(),
                });
            }
        }
        Ok(Self { ammo, max_ammo })
    }

    pub fn lookup(&self, item: ItemId) -> Option<&AmmoType> {
        self.ammo.get(&item)
    }

    pub fn max_ammo(&self) -> u32 {
        self.max_ammo
    }

    /// Rounds one unit of `item` loads.
    fn rounds_for(&self, item: ItemId) -> Option<u32> {
        self.lookup(item).map(|ammo| ammo.quantity as u32)
    }

    /// An item is accepted if it is ammunition and its rounds fit under the cap.
    pub fn accepts_item(&self, stock: &ItemAmmoStock, item: ItemId) -> bool {
        match self.rounds_for(item) {
            Some(rounds) => stock.total.checked_add(rounds).is_some_and(|total| total <= self.max_ammo),
            None => false,
        }
    }

    /// Load one item. The matching stack moves to the top so it fires next.
    pub fn add_item(&self, stock: &mut ItemAmmoStock, item: ItemId) {
        let Some(rounds) = self.rounds_for(item) else {
            return;
        };
        stock.total = stock.total.saturating_add(rounds);
        match stock.entries.iter().position(|e| e.item == item) {
            Some(idx) => {
                let mut entry = stock.entries.remove(idx);
                entry.rounds = entry.rounds.saturating_add(rounds);
                stock.entries.push(entry);
            }
            None => stock.entries.push(ItemAmmoEntry { item, rounds }),
        }
    }

    pub fn peek(&self, stock: &ItemAmmoStock) -> Option<&AmmoType> {
        stock.entries.last().and_then(|e| self.lookup(e.item))
    }

    pub fn status(&self, stock: &ItemAmmoStock) -> AmmoStatus {
        if stock.total > 0 && self.peek(stock).is_some() {
            AmmoStatus::Ready
        } else {
            AmmoStatus::NoAmmo
        }
    }

    pub fn has_ammo(&self, stock: &ItemAmmoStock) -> bool {
        self.status(stock) == AmmoStatus::Ready
    }

    /// Fire one round from the top stack.
    pub fn consume(&self, stock: &mut ItemAmmoStock) -> Option<AmmoType> {
        let ammo = self.peek(stock)?.clone();
        let entry = stock.entries.last_mut()?;
        entry.rounds = entry.rounds.saturating_sub(1);
        if entry.rounds == 0 {
            stock.entries.pop();
        }
        stock.total = stock.total.saturating_sub(1);
        Some(ammo)
    }
}
