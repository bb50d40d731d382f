//! Item-related state types.
//!
//! - ItemKind: closed set of collectable kinds and their effects
//! - Item: one held instance, remembering where it was picked up

use crate::config::GameConfig;

use super::{Player, Position};

/// Closed set of collectable items.
///
/// Parsing accepts the display name in any case (`"potion"`, `"Potion"`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ItemKind {
    Coin,
    Potion,
    Water,
    Apple,
    Honey,
}

impl ItemKind {
    pub const COIN_GLYPH: char = 'C';
    pub const POTION_GLYPH: char = 'M';
    pub const WATER_GLYPH: char = 'W';
    pub const APPLE_GLYPH: char = 'A';
    pub const HONEY_GLYPH: char = 'H';

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            Self::COIN_GLYPH => Some(Self::Coin),
            Self::POTION_GLYPH => Some(Self::Potion),
            Self::WATER_GLYPH => Some(Self::Water),
            Self::APPLE_GLYPH => Some(Self::Apple),
            Self::HONEY_GLYPH => Some(Self::Honey),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Self::Coin => Self::COIN_GLYPH,
            Self::Potion => Self::POTION_GLYPH,
            Self::Water => Self::WATER_GLYPH,
            Self::Apple => Self::APPLE_GLYPH,
            Self::Honey => Self::HONEY_GLYPH,
        }
    }

    /// Applies the consumption effect. Vitals clamp inside [`Player`].
    pub fn apply(self, player: &mut Player, config: &GameConfig) {
        match self {
            Self::Coin => {}
            Self::Potion => player.adjust_health(i64::from(config.potion_amount)),
            Self::Water => player.adjust_thirst(-i64::from(config.water_amount)),
            Self::Apple => player.adjust_hunger(-i64::from(config.apple_amount)),
            Self::Honey => player.adjust_hunger(-i64::from(config.honey_amount)),
        }
    }
}

/// A held item instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub kind: ItemKind,
    /// Cell the item was collected from.
    pub found_at: Position,
}

impl Item {
    pub fn new(kind: ItemKind, found_at: Position) -> Self {
        Self { kind, found_at }
    }
}
