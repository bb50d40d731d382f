//! Text client for the maze crawler.
//!
//! Reads commands line by line, feeds them to the engine and redraws the
//! level after every accepted command. The game loop is generic over its
//! input and output so it can be driven from in-memory buffers.
pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod presentation;

pub use app::{MazeApp, SessionEnd};
pub use config::{Args, ClientConfig};
