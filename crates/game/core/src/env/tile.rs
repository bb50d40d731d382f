use crate::config::GameConfig;

/// Floor kind of a single grid cell.
///
/// Doors carry their lock flag; every other kind is stateless. The flag is
/// only ever cleared, by [`crate::env::Grid::unlock_door`].
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TileKind {
    Wall,
    #[default]
    Empty,
    Lava,
    Door { locked: bool },
}

impl TileKind {
    pub const WALL_GLYPH: char = '#';
    pub const EMPTY_GLYPH: char = ' ';
    pub const LAVA_GLYPH: char = 'L';
    pub const DOOR_GLYPH: char = 'D';

    /// A freshly loaded door.
    pub const LOCKED_DOOR: Self = Self::Door { locked: true };

    /// Maps a level-file character to its floor kind.
    ///
    /// Anything outside the tile vocabulary (entity glyphs included) is
    /// plain floor.
    pub fn from_glyph(glyph: char) -> Self {
        match glyph {
            Self::WALL_GLYPH => Self::Wall,
            Self::LAVA_GLYPH => Self::Lava,
            Self::DOOR_GLYPH => Self::LOCKED_DOOR,
            _ => Self::Empty,
        }
    }

    /// Character used to draw the tile. An unlocked door draws as floor.
    pub fn glyph(self) -> char {
        match self {
            Self::Wall => Self::WALL_GLYPH,
            Self::Empty | Self::Door { locked: false } => Self::EMPTY_GLYPH,
            Self::Lava => Self::LAVA_GLYPH,
            Self::Door { locked: true } => Self::DOOR_GLYPH,
        }
    }

    /// Whether the player is prevented from stepping onto this tile.
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::Wall | Self::Door { locked: true })
    }

    /// Health lost when the player enters this tile.
    pub fn damage(self, config: &GameConfig) -> u32 {
        match self {
            Self::Lava => config.lava_damage,
            _ => 0,
        }
    }

    pub fn is_door(self) -> bool {
        matches!(self, Self::Door { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_follows_kind_and_lock() {
        assert!(TileKind::Wall.is_blocking());
        assert!(TileKind::LOCKED_DOOR.is_blocking());
        assert!(!TileKind::Door { locked: false }.is_blocking());
        assert!(!TileKind::Empty.is_blocking());
        assert!(!TileKind::Lava.is_blocking());
    }

    #[test]
    fn only_lava_deals_damage() {
        let config = GameConfig::default();
        assert_eq!(TileKind::Lava.damage(&config), 5);
        assert_eq!(TileKind::Wall.damage(&config), 0);
        assert_eq!(TileKind::Empty.damage(&config), 0);
        assert_eq!(TileKind::LOCKED_DOOR.damage(&config), 0);
    }

    #[test]
    fn unknown_glyphs_are_floor() {
        assert_eq!(TileKind::from_glyph('?'), TileKind::Empty);
        assert_eq!(TileKind::from_glyph('C'), TileKind::Empty);
        assert_eq!(TileKind::from_glyph('D'), TileKind::LOCKED_DOOR);
        assert_eq!(TileKind::from_glyph('?'), TileKind::default());
    }
}
