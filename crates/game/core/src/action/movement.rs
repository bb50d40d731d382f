use crate::action::ActionTransition;
use crate::config::GameConfig;
use crate::env::TileKind;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameState, Item, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("cannot move from {origin} to {destination}: outside the maze")]
    InvalidMove {
        origin: Position,
        destination: Position,
    },

    #[error("overlay desync: player expected at {expected}, overlay has {found:?}")]
    OccupancyDesync {
        expected: Position,
        found: Option<Position>,
    },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::InvalidMove { .. } => ErrorSeverity::Recoverable,
            MoveError::OccupancyDesync { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::InvalidMove { .. } => "MOVE_INVALID_MOVE",
            MoveError::OccupancyDesync { .. } => "MOVE_OCCUPANCY_DESYNC",
        }
    }
}

/// One of the four unit steps.
///
/// Parses from the keyboard tokens (`w`, `a`, `s`, `d`), `up`/`down`/`left`/
/// `right` or the compass names, case-insensitively.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CardinalDirection {
    #[strum(to_string = "north", serialize = "w", serialize = "up")]
    North,
    #[strum(to_string = "south", serialize = "s", serialize = "down")]
    South,
    #[strum(to_string = "east", serialize = "d", serialize = "right")]
    East,
    #[strum(to_string = "west", serialize = "a", serialize = "left")]
    West,
}

impl CardinalDirection {
    /// Returns the (row, column) delta. Rows grow downward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            CardinalDirection::North => (-1, 0),
            CardinalDirection::South => (1, 0),
            CardinalDirection::East => (0, 1),
            CardinalDirection::West => (0, -1),
        }
    }
}

/// High-level movement intent for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub direction: CardinalDirection,
}

impl MoveAction {
    pub fn new(direction: CardinalDirection) -> Self {
        Self { direction }
    }

    pub fn destination_from(&self, origin: Position) -> Position {
        origin.offset(self.direction.delta())
    }
}

/// What happened on the level during a move, before the session is settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveStep {
    /// Wall or locked door. Nothing changed.
    Blocked {
        destination: Position,
        tile: TileKind,
    },
    Moved(MoveReport),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveReport {
    pub from: Position,
    pub to: Position,
    /// Tile entered, as it reads after any unlock.
    pub tile: TileKind,
    pub collected: Option<Item>,
    /// Hunger and thirst rose on this move.
    pub attrition: bool,
    /// Total health lost (lava plus passive decay), after clamping.
    pub health_lost: u32,
    /// The door was opened and entered; the level is complete.
    pub advance_pending: bool,
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = MoveStep;

    fn pre_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        let expected = state.player().position();
        let level = state.current_level();
        let found = level.player_position();
        if found != Some(expected) {
            return Err(MoveError::OccupancyDesync { expected, found });
        }

        let destination = self.destination_from(expected);
        if !level.grid().contains(destination) {
            return Err(MoveError::InvalidMove {
                origin: expected,
                destination,
            });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, config: &GameConfig) -> Result<MoveStep, Self::Error> {
        let (level, player) = state.level_and_player_mut();
        let origin = player.position();
        let destination = self.destination_from(origin);
        let invalid = MoveError::InvalidMove {
            origin,
            destination,
        };

        // Eligibility is fixed before anything on this step is collected
        let eligible = level.is_door_unlock_eligible();

        let mut tile = level.tile_at(destination).map_err(|_| invalid)?;
        let mut advance_pending = false;
        if tile.is_door() && eligible {
            level.try_unlock_door();
            tile = level.tile_at(destination).map_err(|_| invalid)?;
            advance_pending = true;
        }

        if tile.is_blocking() {
            return Ok(MoveStep::Blocked { destination, tile });
        }

        let collected = level
            .overlay_mut()
            .take_item(destination)
            .map(|kind| Item::new(kind, destination));
        if let Some(item) = collected {
            player.add_item(item);
        }

        if !level.overlay_mut().move_player(origin, destination) {
            return Err(MoveError::OccupancyDesync {
                expected: origin,
                found: level.player_position(),
            });
        }
        player.move_to(destination);

        let health_before = player.health();
        player.adjust_health(-i64::from(tile.damage(config)));
        player.adjust_health(-i64::from(config.passive_health_decay));
        let health_lost = health_before - player.health();

        let turn = state.turn_mut();
        turn.moves_made += 1;
        turn.move_streak += 1;
        let attrition =
            config.attrition_interval > 0 && turn.move_streak >= config.attrition_interval;
        if attrition {
            turn.move_streak = 0;
            let player = state.player_mut();
            player.adjust_hunger(i64::from(config.attrition_amount));
            player.adjust_thirst(i64::from(config.attrition_amount));
        }

        Ok(MoveStep::Moved(MoveReport {
            from: origin,
            to: destination,
            tile,
            collected,
            attrition,
            health_lost,
            advance_pending,
        }))
    }

    fn post_validate(&self, state: &GameState, _config: &GameConfig) -> Result<(), Self::Error> {
        let expected = state.player().position();
        let found = state.current_level().player_position();
        if found == Some(expected) {
            Ok(())
        } else {
            Err(MoveError::OccupancyDesync { expected, found })
        }
    }
}
