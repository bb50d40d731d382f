use crate::config::GameConfig;

use super::{InventoryState, Item, Position, ResourceMeter};

/// Health, hunger and thirst as plain numbers, for display and recording.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vitals {
    pub health: u32,
    pub hunger: u32,
    pub thirst: u32,
}

impl Vitals {
    pub const fn new(health: u32, hunger: u32, thirst: u32) -> Self {
        Self {
            health,
            hunger,
            thirst,
        }
    }
}

/// The controllable player.
///
/// Every player owns fresh meters and an empty inventory; nothing is shared
/// between instances.
///
/// # Invariants
///
/// - health ∈ [0, max_health], hunger ∈ [0, max_hunger], thirst ∈ [0, max_thirst]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    position: Position,
    health: ResourceMeter,
    hunger: ResourceMeter,
    thirst: ResourceMeter,
    inventory: InventoryState,
}

impl Player {
    /// Creates a player at full health, not hungry, not thirsty.
    pub fn new(position: Position, config: &GameConfig) -> Self {
        Self {
            position,
            health: ResourceMeter::full(config.max_health),
            hunger: ResourceMeter::empty(config.max_hunger),
            thirst: ResourceMeter::empty(config.max_thirst),
            inventory: InventoryState::empty(),
        }
    }

    /// Overrides the starting vitals (clamped).
    pub fn with_vitals(mut self, vitals: Vitals) -> Self {
        self.health = ResourceMeter::new(vitals.health, self.health.maximum());
        self.hunger = ResourceMeter::new(vitals.hunger, self.hunger.maximum());
        self.thirst = ResourceMeter::new(vitals.thirst, self.thirst.maximum());
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Overwrites the position. Blocking is validated by the engine.
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    pub fn health(&self) -> u32 {
        self.health.current()
    }

    pub fn hunger(&self) -> u32 {
        self.hunger.current()
    }

    pub fn thirst(&self) -> u32 {
        self.thirst.current()
    }

    pub fn vitals(&self) -> Vitals {
        Vitals::new(self.health(), self.hunger(), self.thirst())
    }

    pub fn adjust_health(&mut self, delta: i64) {
        self.health.adjust(delta);
    }

    pub fn adjust_hunger(&mut self, delta: i64) {
        self.hunger.adjust(delta);
    }

    pub fn adjust_thirst(&mut self, delta: i64) {
        self.thirst.adjust(delta);
    }

    /// True once health hit zero or hunger or thirst hit their maximum.
    pub fn is_depleted(&self) -> bool {
        self.health.is_empty() || self.hunger.is_full() || self.thirst.is_full()
    }

    pub fn inventory(&self) -> &InventoryState {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryState {
        &mut self.inventory
    }

    pub fn add_item(&mut self, item: Item) {
        self.inventory.add(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ItemKind;

    fn fresh() -> Player {
        Player::new(Position::ORIGIN, &GameConfig::default())
    }

    #[test]
    fn starts_healthy() {
        let player = fresh();
        assert_eq!(player.vitals(), Vitals::new(100, 0, 0));
        assert!(!player.is_depleted());
    }

    #[test]
    fn vitals_stay_in_range_for_any_adjustment_sequence() {
        let mut player = fresh();
        let deltas = [
            -7, 250, -1_000, 3, 9, 11, -4, i64::from(u32::MAX), -1, 42, -42, 0,
        ];

        for (step, delta) in deltas.into_iter().enumerate() {
            match step % 3 {
                0 => player.adjust_health(delta),
                1 => player.adjust_hunger(delta),
                _ => player.adjust_thirst(delta),
            }
            let vitals = player.vitals();
            assert!(vitals.health <= 100);
            assert!(vitals.hunger <= 10);
            assert!(vitals.thirst <= 10);
        }
    }

    #[test]
    fn boundaries_trigger_depletion() {
        let mut player = fresh();
        player.adjust_health(-100);
        assert!(player.is_depleted());

        let mut player = fresh();
        player.adjust_hunger(10);
        assert!(player.is_depleted());

        let mut player = fresh();
        player.adjust_thirst(25);
        assert_eq!(player.thirst(), 10);
        assert!(player.is_depleted());
    }

    #[test]
    fn potion_caps_at_max_health() {
        let config = GameConfig::default();
        let mut player = fresh().with_vitals(Vitals::new(95, 0, 0));

        ItemKind::Potion.apply(&mut player, &config);

        assert_eq!(player.health(), 100);
    }

    #[test]
    fn water_floors_thirst_at_zero() {
        let config = GameConfig::default();
        let mut player = fresh().with_vitals(Vitals::new(100, 0, 2));

        ItemKind::Water.apply(&mut player, &config);

        assert_eq!(player.thirst(), 0);
    }

    #[test]
    fn food_relieves_hunger_by_kind() {
        let config = GameConfig::default();
        let mut player = fresh().with_vitals(Vitals::new(100, 8, 0));

        ItemKind::Apple.apply(&mut player, &config);
        assert_eq!(player.hunger(), 7);

        ItemKind::Honey.apply(&mut player, &config);
        assert_eq!(player.hunger(), 2);

        ItemKind::Coin.apply(&mut player, &config);
        assert_eq!(player.vitals(), Vitals::new(100, 2, 0));
    }

    #[test]
    fn move_to_overwrites_position() {
        let mut player = fresh();
        player.move_to(Position::new(4, 2));
        assert_eq!(player.position(), Position::new(4, 2));
    }
}
