//! Player commands and how each one mutates the session.
//!
//! - `movement`: unit steps, door unlock, item pickup, attrition
//! - `inventory`: consuming held items
//!
//! Session-level consequences (level advance, win/loss) are settled by the
//! engine after the action itself has run.

pub mod inventory;
pub mod movement;

pub use inventory::{ConsumeAction, ConsumeError};
pub use movement::{CardinalDirection, MoveAction, MoveError, MoveReport, MoveStep};

use crate::config::GameConfig;
use crate::state::{GameState, ItemKind};

/// Defines how a concrete action mutates game state.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    ///
    /// Everything that can reject the command is checked here, so a failing
    /// command leaves the state untouched.
    fn pre_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        config: &GameConfig,
    ) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A single command submitted by the interaction layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Move(MoveAction),
    Consume(ConsumeAction),
}

impl Command {
    pub fn step(direction: CardinalDirection) -> Self {
        Self::Move(MoveAction::new(direction))
    }

    pub fn consume(kind: ItemKind) -> Self {
        Self::Consume(ConsumeAction::new(kind))
    }
}

impl From<MoveAction> for Command {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<ConsumeAction> for Command {
    fn from(action: ConsumeAction) -> Self {
        Self::Consume(action)
    }
}
