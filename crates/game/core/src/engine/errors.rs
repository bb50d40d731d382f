//! Error types for the command execution pipeline.

use crate::action::{ActionTransition, ConsumeAction, MoveAction};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{SessionStatus, StateError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a command through the game engine.
///
/// None of them leave a partially applied turn behind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("move failed: {0}")]
    Move(TransitionPhaseError<<MoveAction as ActionTransition>::Error>),

    #[error("consume failed: {0}")]
    Consume(TransitionPhaseError<<ConsumeAction as ActionTransition>::Error>),

    #[error("level transition failed: {0}")]
    LevelTransition(StateError),

    #[error("session is over ({status}); no further commands are accepted")]
    SessionOver { status: SessionStatus },
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ExecuteError::Move(inner) => inner.error.severity(),
            ExecuteError::Consume(inner) => inner.error.severity(),
            ExecuteError::LevelTransition(_) => ErrorSeverity::Internal,
            ExecuteError::SessionOver { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ExecuteError::Move(inner) => inner.error.error_code(),
            ExecuteError::Consume(inner) => inner.error.error_code(),
            ExecuteError::LevelTransition(_) => "EXECUTE_LEVEL_TRANSITION",
            ExecuteError::SessionOver { .. } => "EXECUTE_SESSION_OVER",
        }
    }
}
