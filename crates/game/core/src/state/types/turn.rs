/// Where the session stands. `Won` and `Lost` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Turn bookkeeping carried across levels.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Index into the ordered level list.
    pub current_level: usize,

    pub status: SessionStatus,

    /// Completed moves since the last attrition tick.
    pub move_streak: u32,

    /// Completed moves over the whole session.
    pub moves_made: u64,

    /// Sequential identifier incremented for every accepted command,
    /// blocked moves included.
    pub nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
