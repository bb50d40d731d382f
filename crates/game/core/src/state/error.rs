//! State management errors.
//!
//! Errors raised while building a session or querying the grid outside its
//! bounds.

use crate::error::{ErrorSeverity, GameError};
use crate::state::Position;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Position is outside the grid.
    #[error("position {position} is out of bounds (grid size: {rows}x{columns})")]
    OutOfBounds {
        position: Position,
        rows: u32,
        columns: u32,
    },

    /// Level never declared where the player starts.
    #[error("level '{level}' has no player start")]
    NoPlayerStart { level: String },

    /// Grid dimensions exceed what a level may allocate.
    #[error("grid of {rows}x{columns} is too large")]
    GridTooLarge { rows: u32, columns: u32 },

    /// Session was created without any level.
    #[error("no levels to play")]
    NoLevels,

    /// Overlay cell already holds an occupant.
    #[error("position {position} is already occupied")]
    PositionOccupied { position: Position },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            OutOfBounds { .. } | PositionOccupied { .. } => ErrorSeverity::Validation,

            // A session cannot start from unusable level data
            NoPlayerStart { .. } | GridTooLarge { .. } | NoLevels => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            OutOfBounds { .. } => "STATE_OUT_OF_BOUNDS",
            NoPlayerStart { .. } => "STATE_NO_PLAYER_START",
            GridTooLarge { .. } => "STATE_GRID_TOO_LARGE",
            NoLevels => "STATE_NO_LEVELS",
            PositionOccupied { .. } => "STATE_POSITION_OCCUPIED",
        }
    }
}
