//! Per-player item storage.
//!
//! Items are grouped by kind. Kinds keep the order in which they were first
//! acquired, and instances inside a kind are FIFO.

use std::collections::VecDeque;

use super::{Item, ItemKind};

/// Held items grouped by kind.
///
/// # Invariants
///
/// - Every stored kind has at least one instance
/// - A kind appears at most once
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    entries: Vec<(ItemKind, VecDeque<Item>)>,
}

impl InventoryState {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an inventory holding `items` in the given order.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut inventory = Self::empty();
        for item in items {
            inventory.add(item);
        }
        inventory
    }

    /// Appends `item` to its kind, creating the kind entry if absent.
    pub fn add(&mut self, item: Item) {
        match self.entries.iter_mut().find(|(kind, _)| *kind == item.kind) {
            Some((_, held)) => held.push_back(item),
            None => self.entries.push((item.kind, VecDeque::from([item]))),
        }
    }

    /// Removes and returns the oldest instance of `kind`.
    ///
    /// Removing the last instance drops the kind entry, so a later `add`
    /// appends the kind at the end of the acquisition order.
    pub fn remove(&mut self, kind: ItemKind) -> Option<Item> {
        let index = self.entries.iter().position(|(held, _)| *held == kind)?;
        let item = self.entries[index].1.pop_front();
        if self.entries[index].1.is_empty() {
            self.entries.remove(index);
        }
        item
    }

    pub fn contains(&self, kind: ItemKind) -> bool {
        self.count(kind) > 0
    }

    pub fn count(&self, kind: ItemKind) -> usize {
        self.entries
            .iter()
            .find(|(held, _)| *held == kind)
            .map(|(_, items)| items.len())
            .unwrap_or(0)
    }


    /// Count per held kind in first-acquisition order.
    pub fn summary(&self) -> Vec<(ItemKind, usize)> {
        self.entries
            .iter()
            .map(|(kind, items)| (*kind, items.len()))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    fn potion(column: i32) -> Item {
        Item::new(ItemKind::Potion, Position::new(0, column))
    }

    #[test]
    fn remove_is_fifo_per_kind() {
        let mut inventory = InventoryState::with_items([potion(1), potion(2), potion(3)]);

        assert_eq!(inventory.remove(ItemKind::Potion), Some(potion(1)));
        assert_eq!(inventory.remove(ItemKind::Potion), Some(potion(2)));

        assert_eq!(inventory.count(ItemKind::Potion), 1);
        assert_eq!(inventory.remove(ItemKind::Potion), Some(potion(3)));
    }

    #[test]
    fn removing_last_instance_drops_the_kind() {
        let mut inventory = InventoryState::with_items([potion(1)]);

        assert!(inventory.remove(ItemKind::Potion).is_some());

        assert!(!inventory.contains(ItemKind::Potion));
        assert!(inventory.summary().is_empty());
        assert_eq!(inventory.remove(ItemKind::Potion), None);
    }

    #[test]
    fn summary_keeps_first_acquisition_order() {
        let coin = Item::new(ItemKind::Coin, Position::ORIGIN);
        let water = Item::new(ItemKind::Water, Position::ORIGIN);
        let mut inventory = InventoryState::with_items([water, coin, water, potion(0)]);

        assert_eq!(
            inventory.summary(),
            vec![
                (ItemKind::Water, 2),
                (ItemKind::Coin, 1),
                (ItemKind::Potion, 1)
            ]
        );

        inventory.remove(ItemKind::Coin);
        inventory.add(coin);

        assert_eq!(
            inventory.summary(),
            vec![
                (ItemKind::Water, 2),
                (ItemKind::Potion, 1),
                (ItemKind::Coin, 1)
            ]
        );
    }
}
