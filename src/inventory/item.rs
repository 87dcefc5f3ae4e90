use crate::crystal::Element;
use serde::{Deserialize, Serialize};

/// Effects applied when a consumable is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumableEffect {
    RestoreHealth(u32),
    RestoreMana(u32),
}

/// Categories of items the inventory can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Collected crystal, the main pickup
    EchoCrystal,
    /// Usable item with an immediate effect
    Consumable(ConsumableEffect),
}

/// A stackable inventory record
///
/// Stacks are identified by (kind, element, power): two echo crystals of the
/// same element and power merge into one record, a stronger crystal of the
/// same element stays separate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub kind: ItemKind,
    pub name: String,
    pub element: Option<Element>,
    pub power: u32,
    pub quantity: u32,
}

impl InventoryItem {
    /// The item produced by collecting a crystal, e.g. "Fire Echo Crystal"
    pub fn echo_crystal(element: Element, power: u32) -> Self {
        InventoryItem {
            kind: ItemKind::EchoCrystal,
            name: format!("{} Echo Crystal", element.display_name()),
            element: Some(element),
            power,
            quantity: 1,
        }
    }

    pub fn consumable(name: impl Into<String>, effect: ConsumableEffect) -> Self {
        InventoryItem {
            kind: ItemKind::Consumable(effect),
            name: name.into(),
            element: None,
            power: 0,
            quantity: 1,
        }
    }

    /// The merge key: items with equal keys share one stack
    pub fn stack_key(&self) -> (ItemKind, Option<Element>, u32) {
        (self.kind, self.element, self.power)
    }

    pub fn stacks_with(&self, other: &InventoryItem) -> bool {
        self.stack_key() == other.stack_key()
    }
}
