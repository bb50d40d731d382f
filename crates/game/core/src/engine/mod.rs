//! Turn resolution.
//!
//! The [`GameEngine`] is the only mutator of [`GameState`]. Each command is
//! driven through its transition pipeline, then the engine settles the
//! session-level consequences in a fixed order: level advance first, loss
//! last, so a loss on the same turn overrides a level advance or a win.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Command, MoveReport, MoveStep};
use crate::config::GameConfig;
use crate::env::TileKind;
use crate::state::{GameState, Item, Position, SessionStatus};

use transition::ActionResult;

/// How a completed move changed the current level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LevelAdvance {
    /// The session moved on to `level`, with the player placed at `start`.
    Next { level: usize, start: Position },
    /// The final level's door was entered.
    Completed,
}

/// What a single accepted command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    /// The step ran into a wall or a locked door. Nothing changed.
    Blocked {
        destination: Position,
        tile: TileKind,
    },
    Moved {
        report: MoveReport,
        advance: Option<LevelAdvance>,
    },
    Consumed {
        item: Item,
    },
}

/// Complete outcome of one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    pub event: TurnEvent,
    /// Session status after settlement.
    pub status: SessionStatus,
    /// Nonce assigned to this command.
    pub nonce: u64,
}

/// Game engine that resolves commands into state transitions.
///
/// Commands are strictly sequential: each one is fully resolved before the
/// next is accepted. Once the session is won or lost every command is
/// rejected with [`ExecuteError::SessionOver`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Resolves one command.
    ///
    /// Errors are reported before anything is mutated, so the caller can
    /// retry with another command.
    pub fn execute(&mut self, command: &Command) -> Result<TurnOutcome, ExecuteError> {
        let status = self.state.status();
        if status.is_terminal() {
            return Err(ExecuteError::SessionOver { status });
        }

        let event = match transition::execute_transition(command, self.state, self.config)? {
            ActionResult::Move(MoveStep::Blocked { destination, tile }) => {
                TurnEvent::Blocked { destination, tile }
            }
            ActionResult::Move(MoveStep::Moved(report)) => self.settle_move(report)?,
            ActionResult::Consume(item) => TurnEvent::Consumed { item },
        };

        let turn = self.state.turn_mut();
        let nonce = turn.nonce;
        turn.nonce += 1;

        Ok(TurnOutcome {
            event,
            status: self.state.status(),
            nonce,
        })
    }

    /// Commits the level transition of a completed move, then evaluates loss.
    fn settle_move(&mut self, report: MoveReport) -> Result<TurnEvent, ExecuteError> {
        let mut advance = None;
        if report.advance_pending {
            advance = Some(
                match self
                    .state
                    .enter_next_level()
                    .map_err(ExecuteError::LevelTransition)?
                {
                    Some((level, start)) => LevelAdvance::Next { level, start },
                    None => {
                        self.state.turn_mut().status = SessionStatus::Won;
                        LevelAdvance::Completed
                    }
                },
            );
        }

        if self.state.player().is_depleted() {
            self.state.turn_mut().status = SessionStatus::Lost;
        }

        Ok(TurnEvent::Moved { report, advance })
    }
}
