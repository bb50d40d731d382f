use std::collections::BTreeMap;

use super::{ItemKind, Position};
use crate::state::StateError;

/// Dynamic thing standing on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupant {
    Player,
    Item(ItemKind),
}

impl Occupant {
    pub fn item(self) -> Option<ItemKind> {
        match self {
            Self::Item(kind) => Some(kind),
            Self::Player => None,
        }
    }
}

/// Position-keyed occupants layered on top of the static grid.
///
/// Cells without an entry are plain floor as far as the overlay is concerned.
///
/// # Invariants
///
/// - At most one occupant per position
/// - At most one `Occupant::Player` entry
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overlay {
    occupancy: BTreeMap<Position, Occupant>,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn occupant(&self, position: Position) -> Option<Occupant> {
        self.occupancy.get(&position).copied()
    }

    /// Places an item on an empty cell.
    pub fn place_item(&mut self, position: Position, kind: ItemKind) -> Result<(), StateError> {
        self.insert(position, Occupant::Item(kind))
    }

    /// Places the player, removing any previous player entry first.
    pub fn place_player(&mut self, position: Position) -> Result<(), StateError> {
        if self.player_position() == Some(position) {
            return Ok(());
        }
        if self.occupancy.contains_key(&position) {
            return Err(StateError::PositionOccupied { position });
        }
        self.occupancy.retain(|_, occupant| *occupant != Occupant::Player);
        self.insert(position, Occupant::Player)
    }

    /// Removes and returns the item at `position`, if any.
    pub fn take_item(&mut self, position: Position) -> Option<ItemKind> {
        let kind = self.occupant(position)?.item()?;
        self.occupancy.remove(&position);
        Some(kind)
    }

    /// Moves the player entry from `from` to `to`.
    ///
    /// Returns false without changing anything if `from` does not hold the
    /// player or `to` is occupied.
    pub fn move_player(&mut self, from: Position, to: Position) -> bool {
        if self.occupant(from) != Some(Occupant::Player) {
            return false;
        }
        if from == to {
            return true;
        }
        if self.occupancy.contains_key(&to) {
            return false;
        }
        self.occupancy.remove(&from);
        self.occupancy.insert(to, Occupant::Player);
        true
    }

    pub fn player_position(&self) -> Option<Position> {
        self.occupancy
            .iter()
            .find_map(|(position, occupant)| (*occupant == Occupant::Player).then_some(*position))
    }

    /// Item entries only, the player excluded.
    pub fn items(&self) -> impl Iterator<Item = (Position, ItemKind)> + '_ {
        self.occupancy
            .iter()
            .filter_map(|(position, occupant)| occupant.item().map(|kind| (*position, kind)))
    }

    pub fn count(&self, kind: ItemKind) -> usize {
        self.items().filter(|(_, held)| *held == kind).count()
    }

    fn insert(&mut self, position: Position, occupant: Occupant) -> Result<(), StateError> {
        if self.occupancy.contains_key(&position) {
            return Err(StateError::PositionOccupied { position });
        }
        self.occupancy.insert(position, occupant);
        Ok(())
    }
}
