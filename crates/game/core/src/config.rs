/// Game rules: vital ranges, damage, attrition cadence and item strengths.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Upper bound for health. A fresh player starts at this value.
    pub max_health: u32,
    /// Hunger upper bound. Reaching it loses the session.
    pub max_hunger: u32,
    /// Thirst upper bound. Reaching it loses the session.
    pub max_thirst: u32,

    /// Health lost when stepping onto lava.
    pub lava_damage: u32,
    /// Health lost on every completed move regardless of the tile entered.
    pub passive_health_decay: u32,

    /// Every `attrition_interval`-th completed move raises hunger and thirst.
    pub attrition_interval: u32,
    /// Amount hunger and thirst rise by on an attrition tick.
    pub attrition_amount: u32,

    pub potion_amount: u32,
    pub water_amount: u32,
    pub apple_amount: u32,
    pub honey_amount: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_MAX_HUNGER: u32 = 10;
    pub const DEFAULT_MAX_THIRST: u32 = 10;
    pub const DEFAULT_LAVA_DAMAGE: u32 = 5;
    pub const DEFAULT_PASSIVE_HEALTH_DECAY: u32 = 1;
    pub const DEFAULT_ATTRITION_INTERVAL: u32 = 5;
    pub const DEFAULT_ATTRITION_AMOUNT: u32 = 1;
    pub const DEFAULT_POTION_AMOUNT: u32 = 20;
    pub const DEFAULT_WATER_AMOUNT: u32 = 5;
    pub const DEFAULT_APPLE_AMOUNT: u32 = 1;
    pub const DEFAULT_HONEY_AMOUNT: u32 = 5;

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            max_hunger: Self::DEFAULT_MAX_HUNGER,
            max_thirst: Self::DEFAULT_MAX_THIRST,
            lava_damage: Self::DEFAULT_LAVA_DAMAGE,
            passive_health_decay: Self::DEFAULT_PASSIVE_HEALTH_DECAY,
            attrition_interval: Self::DEFAULT_ATTRITION_INTERVAL,
            attrition_amount: Self::DEFAULT_ATTRITION_AMOUNT,
            potion_amount: Self::DEFAULT_POTION_AMOUNT,
            water_amount: Self::DEFAULT_WATER_AMOUNT,
            apple_amount: Self::DEFAULT_APPLE_AMOUNT,
            honey_amount: Self::DEFAULT_HONEY_AMOUNT,
        }
    }

    pub fn with_lava_damage(mut self, lava_damage: u32) -> Self {
        self.lava_damage = lava_damage;
        self
    }

    pub fn with_attrition_interval(mut self, attrition_interval: u32) -> Self {
        self.attrition_interval = attrition_interval;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
