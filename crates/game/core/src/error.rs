//! Common error infrastructure for maze-core.
//!
//! Domain errors (`MoveError`, `ConsumeError`, `StateError`) live next to the
//! code that raises them. This module only provides the classification shared
//! by all of them, so callers can decide whether to re-prompt, reject or abort
//! without matching on every variant.

/// Severity level of an error, used to decide how the caller recovers.
///
/// - **Recoverable**: the command was refused; try a different one
/// - **Validation**: the request or the loaded data is unusable as given
/// - **Internal**: engine state disagrees with itself (a bug)
/// - **Fatal**: the session cannot be started or continued
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: moving off the grid, consuming an item that is not held.
    Recoverable,

    /// Examples: a command after the session ended, a position off the grid.
    Validation,

    /// Examples: overlay and player disagree about the player position.
    Internal,

    /// Examples: no levels to play, a level without a player start.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller may simply retry with another command.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an engine bug or corrupt setup.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all maze-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable strings suitable for logs and tests
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
