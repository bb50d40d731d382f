//! Level and rules content for the maze crawler.
//!
//! This crate turns files on disk into the descriptions `maze-core` plays:
//! - Level files (plain text, one or more mazes per file)
//! - Game rules (TOML)
//!
//! Nothing here touches a running session. The core only ever sees the
//! resulting [`maze_core::LevelSpec`] list and [`maze_core::GameConfig`].

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LevelLoader};
