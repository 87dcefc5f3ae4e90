use super::error::InventoryError;
use super::item::{ConsumableEffect, InventoryItem, ItemKind};
use crate::stats::PlayerStats;
use serde::{Deserialize, Serialize};

/// Stack slots available by default
pub const DEFAULT_CAPACITY: usize = 20;

/// Bounded stack-list inventory
///
/// Capacity counts stacks, not individual items. Inserting an item whose
/// (kind, element, power) key matches an existing stack merges by summing
/// quantities; anything else appends a new stack or fails when full.
///
/// Invariant: every stored stack has quantity >= 1. Consuming the last item
/// of a stack removes the stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<InventoryItem>,
    capacity: usize,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Inventory {
            items: Vec::new(),
            capacity,
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Total quantity across all stacks
    #[allow(dead_code)] // Reserved for a HUD item counter
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Inserts an item, merging into a matching stack when one exists
    ///
    /// A full inventory rejects NEW stacks only: merging into an existing
    /// stack always succeeds. On rejection the contents are untouched.
    pub fn add(&mut self, item: InventoryItem) -> Result<(), InventoryError> {
        if item.quantity == 0 {
            return Err(InventoryError::EmptyStack);
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.stacks_with(&item)) {
            existing.quantity += item.quantity;
            return Ok(());
        }

        if self.is_full() {
            return Err(InventoryError::InventoryFull);
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes the whole stack at `index`, splicing the list
    pub fn remove(&mut self, index: usize) -> Result<InventoryItem, InventoryError> {
        if index >= self.items.len() {
            return Err(InventoryError::InvalidIndex(index));
        }
        Ok(self.items.remove(index))
    }

    /// Uses one item from the stack at `index`
    ///
    /// Consumables apply their effect to the player and shrink the stack,
    /// removing it at zero. Returns true if anything was consumed; echo
    /// crystals are inert on use and return false.
    pub fn use_item(
        &mut self,
        index: usize,
        stats: &mut PlayerStats,
    ) -> Result<bool, InventoryError> {
        let item = self
            .items
            .get_mut(index)
            .ok_or(InventoryError::InvalidIndex(index))?;

        let effect = match item.kind {
            ItemKind::Consumable(effect) => effect,
            ItemKind::EchoCrystal => return Ok(false),
        };

        match effect {
            ConsumableEffect::RestoreHealth(amount) => {
                stats.health.restore(amount as f32);
            }
            ConsumableEffect::RestoreMana(amount) => {
                stats.mana.restore(amount as f32);
            }
        }

        item.quantity -= 1;
        if item.quantity == 0 {
            self.items.remove(index);
        }
        Ok(true)
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crystal::Element;

    #[test]
    fn test_add_appends_new_stack() {
        let mut inv = Inventory::default();
        inv.add(InventoryItem::echo_crystal(Element::Fire, 3)).unwrap();

        assert_eq!(inv.len(), 1);
        assert_eq!(inv.items()[0].quantity, 1);
    }

    #[test]
    fn test_identical_items_merge_into_one_stack() {
        let mut inv = Inventory::default();
        inv.add(InventoryItem::echo_crystal(Element::Fire, 3)).unwrap();
        inv.add(InventoryItem::echo_crystal(Element::Fire, 3)).unwrap();

        assert_eq!(inv.len(), 1);
        assert_eq!(inv.items()[0].quantity, 2);
    }

    #[test]
    fn test_different_power_stays_separate() {
        let mut inv = Inventory::default();
        inv.add(InventoryItem::echo_crystal(Element::Fire, 3)).unwrap();
        inv.add(InventoryItem::echo_crystal(Element::Fire, 7)).unwrap();

        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_full_inventory_rejects_and_stays_unchanged() {
        let mut inv = Inventory::new(2);
        inv.add(InventoryItem::echo_crystal(Element::Fire, 1)).unwrap();
        inv.add(InventoryItem::echo_crystal(Element::Ice, 1)).unwrap();

        let before = inv.items().to_vec();
        let err = inv
            .add(InventoryItem::echo_crystal(Element::Void, 1))
            .unwrap_err();

        assert_eq!(err, InventoryError::InventoryFull);
        assert_eq!(inv.items(), before.as_slice());
        assert_eq!(inv.len(), 2);
    }

    #[test]
    fn test_merge_into_full_inventory_still_succeeds() {
        let mut inv = Inventory::new(1);
        inv.add(InventoryItem::echo_crystal(Element::Fire, 3)).unwrap();
        inv.add(InventoryItem::echo_crystal(Element::Fire, 3)).unwrap();

        assert_eq!(inv.len(), 1);
        assert_eq!(inv.items()[0].quantity, 2);
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut inv = Inventory::new(3);
        for (i, element) in Element::ALL.iter().enumerate() {
            let _ = inv.add(InventoryItem::echo_crystal(*element, i as u32 + 1));
        }
        assert_eq!(inv.len(), 3);
    }

    #[test]
    fn test_remove_splices_by_index() {
        let mut inv = Inventory::default();
        inv.add(InventoryItem::echo_crystal(Element::Fire, 1)).unwrap();
        inv.add(InventoryItem::echo_crystal(Element::Ice, 1)).unwrap();
        inv.add(InventoryItem::echo_crystal(Element::Void, 1)).unwrap();

        let removed = inv.remove(1).unwrap();
        assert_eq!(removed.element, Some(Element::Ice));
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.items()[1].element, Some(Element::Void));
    }

    #[test]
    fn test_remove_out_of_bounds() {
        let mut inv = Inventory::default();
        assert_eq!(inv.remove(0).unwrap_err(), InventoryError::InvalidIndex(0));
    }

    #[test]
    fn test_reject_zero_quantity_stack() {
        let mut inv = Inventory::default();
        let mut item = InventoryItem::echo_crystal(Element::Fire, 1);
        item.quantity = 0;
        assert_eq!(inv.add(item).unwrap_err(), InventoryError::EmptyStack);
    }

    #[test]
    fn test_use_consumable_restores_and_shrinks() {
        let mut inv = Inventory::default();
        let mut stats = PlayerStats::new();
        stats.health.deplete(40.0);

        let mut tonic =
            InventoryItem::consumable("Minor Tonic", ConsumableEffect::RestoreHealth(25));
        tonic.quantity = 2;
        inv.add(tonic).unwrap();

        assert!(inv.use_item(0, &mut stats).unwrap());
        assert_eq!(stats.health.current(), 85.0);
        assert_eq!(inv.items()[0].quantity, 1);

        // Last one removes the stack
        assert!(inv.use_item(0, &mut stats).unwrap());
        assert!(inv.is_empty());
        assert_eq!(stats.health.current(), 100.0); // capped at max
    }

    #[test]
    fn test_use_echo_crystal_is_inert() {
        let mut inv = Inventory::default();
        let mut stats = PlayerStats::new();
        inv.add(InventoryItem::echo_crystal(Element::Arcane, 5)).unwrap();

        assert!(!inv.use_item(0, &mut stats).unwrap());
        assert_eq!(inv.items()[0].quantity, 1);
    }

    #[test]
    fn test_total_quantity_counts_across_stacks() {
        let mut inv = Inventory::default();
        inv.add(InventoryItem::echo_crystal(Element::Fire, 3)).unwrap();
        inv.add(InventoryItem::echo_crystal(Element::Fire, 3)).unwrap();
        inv.add(InventoryItem::echo_crystal(Element::Ice, 2)).unwrap();

        assert_eq!(inv.total_quantity(), 3);
    }
}
