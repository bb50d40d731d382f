//! Deterministic rules for the maze crawler.
//!
//! `maze-core` owns the session state (levels, player, turn bookkeeping), the
//! player commands and the engine that resolves them. It performs no I/O:
//! level files are parsed by `maze-content` and drawn by the client.
//! All state mutation flows through [`engine::GameEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{
    ActionTransition, CardinalDirection, Command, ConsumeAction, ConsumeError, MoveAction,
    MoveError, MoveReport, MoveStep,
};
pub use config::GameConfig;
pub use engine::{
    ExecuteError, GameEngine, LevelAdvance, TransitionPhase, TransitionPhaseError, TurnEvent,
    TurnOutcome,
};
pub use env::{Grid, GridDimensions, TileKind};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    GameState, InventoryState, Item, ItemKind, Level, LevelSpec, Occupant, Overlay, Player,
    Position, RenderView, ResourceMeter, SessionStatus, StateError, TurnState, Vitals,
};
pub use state::snapshot::CellView;
