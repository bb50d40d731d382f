//! Command dispatch through the three-phase transition pipeline.

use crate::action::{ActionTransition, Command, MoveStep};
use crate::config::GameConfig;
use crate::state::{GameState, Item};

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Raw result of a command before session settlement.
pub(super) enum ActionResult {
    Move(MoveStep),
    Consume(Item),
}

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    config: &GameConfig,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, config)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each command to its transition and wraps the result.
pub(super) fn execute_transition(
    command: &Command,
    state: &mut GameState,
    config: &GameConfig,
) -> Result<ActionResult, ExecuteError> {
    match command {
        Command::Move(transition) => drive_transition(transition, state, config)
            .map(ActionResult::Move)
            .map_err(ExecuteError::Move),
        Command::Consume(transition) => drive_transition(transition, state, config)
            .map(ActionResult::Consume)
            .map_err(ExecuteError::Consume),
    }
}
