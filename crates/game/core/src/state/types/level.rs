use crate::env::{Grid, GridDimensions, TileKind};
use crate::state::StateError;

use super::{ItemKind, Occupant, Overlay, Position};

/// Parsed description of one level, as produced by a level-file loader.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSpec {
    pub name: String,
    pub dimensions: GridDimensions,
    /// Raw row lines in file order, including any of the wrong length.
    pub lines: Vec<String>,
}

impl LevelSpec {
    pub fn new(name: impl Into<String>, dimensions: GridDimensions) -> Self {
        Self {
            name: name.into(),
            dimensions,
            lines: Vec::new(),
        }
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

/// One playable maze: static grid, dynamic overlay and the recorded start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    name: String,
    grid: Grid,
    overlay: Overlay,
    /// Recorded once at load; later overlay changes never touch it.
    player_start: Option<Position>,
}

impl Level {
    pub const PLAYER_GLYPH: char = 'P';

    /// Builds a level from its description.
    ///
    /// Loading is tolerant: the grid normalizes bad rows and characters, and
    /// entity glyphs seed the overlay. Only the first player glyph counts as
    /// the start. Fails only if the dimensions are too large for a grid.
    pub fn from_spec(spec: &LevelSpec) -> Result<Self, StateError> {
        let dimensions = spec.dimensions;
        let rows = dimensions.placed_rows(spec.lines.iter().map(String::as_str));
        let grid = Grid::from_rows(dimensions, rows.iter().copied())?;

        let mut overlay = Overlay::new();
        let mut player_start = None;

        for (row, line) in rows.iter().enumerate() {
            for (column, glyph) in line.chars().enumerate() {
                let position = Position::new(row as i32, column as i32);
                if glyph == Self::PLAYER_GLYPH {
                    if player_start.is_none() && overlay.place_player(position).is_ok() {
                        player_start = Some(position);
                    }
                } else if let Some(kind) = ItemKind::from_glyph(glyph) {
                    // cells are visited once, so the cell is always free
                    let _ = overlay.place_item(position, kind);
                }
            }
        }

        Ok(Self {
            name: spec.name.clone(),
            grid,
            overlay,
            player_start,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.grid.dimensions()
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub(crate) fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }

    pub fn tile_at(&self, position: Position) -> Result<TileKind, StateError> {
        self.grid.tile_at(position)
    }

    pub fn start_position(&self) -> Result<Position, StateError> {
        self.player_start.ok_or_else(|| StateError::NoPlayerStart {
            level: self.name.clone(),
        })
    }

    /// Overlay entries that are items, keyed by position.
    pub fn items_at(&self) -> impl Iterator<Item = (Position, ItemKind)> + '_ {
        self.overlay.items()
    }

    pub fn coins_remaining(&self) -> usize {
        self.overlay.count(ItemKind::Coin)
    }

    /// The door may open once no coin is left anywhere in the level.
    pub fn is_door_unlock_eligible(&self) -> bool {
        self.coins_remaining() == 0
    }

    /// Unlocks the door if every coin has been collected, else does nothing.
    ///
    /// Returns whether the door is unlocked afterwards.
    pub fn try_unlock_door(&mut self) -> bool {
        if self.is_door_unlock_eligible() {
            self.grid.unlock_door();
        }
        !self.grid.is_door_locked()
    }

    /// Puts the player back on the recorded start cell.
    pub(crate) fn place_player_at_start(&mut self) -> Result<Position, StateError> {
        let start = self.start_position()?;
        self.overlay.place_player(start)?;
        Ok(start)
    }

    pub fn player_position(&self) -> Option<Position> {
        self.overlay.player_position()
    }

    pub fn occupant(&self, position: Position) -> Option<Occupant> {
        self.overlay.occupant(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(rows: &[&str]) -> Level {
        let columns = rows.first().map(|row| row.chars().count()).unwrap_or(0) as u32;
        let spec = LevelSpec::new("test", GridDimensions::new(rows.len() as u32, columns))
            .with_lines(rows.iter().copied());
        Level::from_spec(&spec).unwrap()
    }

    #[test]
    fn entity_glyphs_seed_overlay_on_floor() {
        let level = level(&["#####", "PCM D", "#AWH#"]);

        assert_eq!(level.start_position(), Ok(Position::new(1, 0)));
        assert_eq!(level.player_position(), Some(Position::new(1, 0)));
        assert_eq!(level.tile_at(Position::new(1, 1)), Ok(TileKind::Empty));
        assert_eq!(
            level.items_at().collect::<Vec<_>>(),
            vec![
                (Position::new(1, 1), ItemKind::Coin),
                (Position::new(1, 2), ItemKind::Potion),
                (Position::new(2, 1), ItemKind::Apple),
                (Position::new(2, 2), ItemKind::Water),
                (Position::new(2, 3), ItemKind::Honey),
            ]
        );
        assert_eq!(level.coins_remaining(), 1);
    }

    #[test]
    fn missing_start_is_reported() {
        let level = level(&["# D"]);

        assert_eq!(
            level.start_position(),
            Err(StateError::NoPlayerStart {
                level: "test".to_string()
            })
        );
    }

    #[test]
    fn only_first_player_glyph_is_the_start() {
        let level = level(&["P P"]);

        assert_eq!(level.start_position(), Ok(Position::new(0, 0)));
        assert_eq!(level.occupant(Position::new(0, 2)), None);
    }

    #[test]
    fn start_survives_overlay_changes() {
        let mut level = level(&["P  "]);

        assert!(level
            .overlay_mut()
            .move_player(Position::ORIGIN, Position::new(0, 2)));

        assert_eq!(level.start_position(), Ok(Position::ORIGIN));
    }

    #[test]
    fn door_unlocks_only_without_coins() {
        let mut level = level(&["PCD"]);
        assert!(!level.try_unlock_door());
        assert!(level.grid().is_door_locked());

        level.overlay_mut().take_item(Position::new(0, 1));

        assert!(level.try_unlock_door());
        assert!(level.try_unlock_door());
        assert_eq!(
            level.tile_at(Position::new(0, 2)),
            Ok(TileKind::Door { locked: false })
        );
    }
}
