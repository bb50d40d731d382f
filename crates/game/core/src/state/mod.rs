//! Authoritative session state.
//!
//! This module owns the levels, the player and turn bookkeeping. Callers read
//! it freely but mutate it exclusively through [`crate::engine::GameEngine`].
pub mod error;
pub mod snapshot;
pub mod types;

pub use error::StateError;
pub use snapshot::RenderView;
pub use types::{
    InventoryState, Item, ItemKind, Level, LevelSpec, Occupant, Overlay, Player, Position,
    ResourceMeter, SessionStatus, TurnState, Vitals,
};

use crate::config::GameConfig;

/// Canonical snapshot of one play session.
///
/// # Invariants
///
/// - `levels` is non-empty and `turn.current_level` always indexes into it
/// - Every level has a recorded player start
/// - The current level's overlay holds the player at `player.position()`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    levels: Vec<Level>,
    player: Player,
    turn: TurnState,
}

impl GameState {
    /// Starts a session on the first level with a fresh player.
    ///
    /// Fails if there are no levels or any level lacks a player start.
    pub fn new(levels: Vec<Level>, config: &GameConfig) -> Result<Self, StateError> {
        let first = levels.first().ok_or(StateError::NoLevels)?;
        for level in &levels {
            level.start_position()?;
        }
        let start = first.start_position()?;

        let mut state = Self {
            levels,
            player: Player::new(start, config),
            turn: TurnState::new(),
        };
        state.current_level_mut().place_player_at_start()?;
        Ok(state)
    }

    /// Builds every level from its description, in order, and starts a session.
    pub fn from_specs<'a, I>(specs: I, config: &GameConfig) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = &'a LevelSpec>,
    {
        let levels = specs
            .into_iter()
            .map(Level::from_spec)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(levels, config)
    }

    /// Overrides the player's vitals, e.g. to resume a scenario mid-way.
    pub fn with_vitals(mut self, vitals: Vitals) -> Self {
        self.player = self.player.with_vitals(vitals);
        self
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level_index(&self) -> usize {
        self.turn.current_level
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.turn.current_level]
    }

    pub(crate) fn current_level_mut(&mut self) -> &mut Level {
        &mut self.levels[self.turn.current_level]
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Splits the borrow so the engine can update the level and the player together.
    pub(crate) fn level_and_player_mut(&mut self) -> (&mut Level, &mut Player) {
        (&mut self.levels[self.turn.current_level], &mut self.player)
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub(crate) fn turn_mut(&mut self) -> &mut TurnState {
        &mut self.turn
    }

    pub fn status(&self) -> SessionStatus {
        self.turn.status
    }

    pub fn has_won(&self) -> bool {
        self.turn.status == SessionStatus::Won
    }

    pub fn has_lost(&self) -> bool {
        self.turn.status == SessionStatus::Lost
    }

    /// Moves the session onto the next level and resets the player to its start.
    ///
    /// Returns the new level index and start, or `None` when the current
    /// level was the last one. Vitals and inventory carry over.
    pub(crate) fn enter_next_level(&mut self) -> Result<Option<(usize, Position)>, StateError> {
        let next = self.turn.current_level + 1;
        if next >= self.levels.len() {
            return Ok(None);
        }

        self.turn.current_level = next;
        let start = self.current_level_mut().place_player_at_start()?;
        self.player.move_to(start);
        Ok(Some((next, start)))
    }

    /// Projection consumed by presentation layers.
    pub fn render_view(&self) -> RenderView<'_> {
        RenderView::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::GridDimensions;

    fn spec(name: &str, rows: &[&str]) -> LevelSpec {
        let columns = rows.first().map(|row| row.len()).unwrap_or(0) as u32;
        LevelSpec::new(name, GridDimensions::new(rows.len() as u32, columns))
            .with_lines(rows.iter().copied())
    }

    #[test]
    fn session_starts_on_first_level() {
        let specs = [spec("one", &["P D"]), spec("two", &["D P"])];
        let state = GameState::from_specs(&specs, &GameConfig::default()).unwrap();

        assert_eq!(state.level_index(), 0);
        assert_eq!(state.current_level().name(), "one");
        assert_eq!(state.player().position(), Position::ORIGIN);
        assert_eq!(state.status(), SessionStatus::Playing);
    }

    #[test]
    fn empty_level_list_is_rejected() {
        let result = GameState::new(Vec::new(), &GameConfig::default());
        assert_eq!(result, Err(StateError::NoLevels));
    }

    #[test]
    fn any_level_without_start_is_rejected_at_load() {
        let specs = [spec("one", &["P D"]), spec("two", &["  D"])];
        let result = GameState::from_specs(&specs, &GameConfig::default());

        assert_eq!(
            result,
            Err(StateError::NoPlayerStart {
                level: "two".to_string()
            })
        );
    }

    #[test]
    fn oversized_level_is_rejected_at_load() {
        let specs = [
            spec("one", &["P D"]),
            LevelSpec::new("huge", GridDimensions::new(4_000_000_000, 4_000_000_000)),
        ];
        let result = GameState::from_specs(&specs, &GameConfig::default());

        assert_eq!(
            result,
            Err(StateError::GridTooLarge {
                rows: 4_000_000_000,
                columns: 4_000_000_000
            })
        );
    }

    #[test]
    fn next_level_resets_position_and_keeps_vitals() {
        let specs = [spec("one", &["P D"]), spec("two", &["D P"])];
        let mut state = GameState::from_specs(&specs, &GameConfig::default())
            .unwrap()
            .with_vitals(Vitals::new(40, 3, 4));

        assert_eq!(
            state.enter_next_level(),
            Ok(Some((1, Position::new(0, 2))))
        );
        assert_eq!(state.player().position(), Position::new(0, 2));
        assert_eq!(state.player().vitals(), Vitals::new(40, 3, 4));
        assert_eq!(state.enter_next_level(), Ok(None));
        assert_eq!(state.level_index(), 1);
    }
}
