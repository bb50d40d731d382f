use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Item, ItemKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumeError {
    #[error("no {0} in the inventory")]
    ItemUnavailable(ItemKind),
}

impl GameError for ConsumeError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConsumeError::ItemUnavailable(_) => "CONSUME_ITEM_UNAVAILABLE",
        }
    }
}

/// Applies and discards the oldest held instance of a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumeAction {
    pub kind: ItemKind,
}

impl ConsumeAction {
    pub fn new(kind: ItemKind) -> Self {
        Self { kind }
    }
}

impl ActionTransition for ConsumeAction {
    type Error = ConsumeError;
    type Result = Item;

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        if state.player().inventory().contains(self.kind) {
            Ok(())
        } else {
            Err(ConsumeError::ItemUnavailable(self.kind))
        }
    }

    fn apply(&self, state: &mut GameState, config: &GameConfig) -> Result<Item, Self::Error> {
        let player = state.player_mut();
        let item = player
            .inventory_mut()
            .remove(self.kind)
            .ok_or(ConsumeError::ItemUnavailable(self.kind))?;
        item.kind.apply(player, config);
        Ok(item)
    }
}
