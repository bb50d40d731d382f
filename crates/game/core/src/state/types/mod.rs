pub mod common;
pub mod inventory;
pub mod item;
pub mod level;
pub mod overlay;
pub mod player;
pub mod turn;

pub use common::{Position, ResourceMeter};
pub use inventory::InventoryState;
pub use item::{Item, ItemKind};
pub use level::{Level, LevelSpec};
pub use overlay::{Occupant, Overlay};
pub use player::{Player, Vitals};
pub use turn::{SessionStatus, TurnState};
