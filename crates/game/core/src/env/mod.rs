//! Static floor layer: tile kinds and the per-level grid.
//!
//! Everything here is fixed when a level is loaded, except the door lock.
//! Dynamic occupants (items, the player) live in [`crate::state::Overlay`].

mod grid;
mod tile;

pub use grid::{Grid, GridDimensions};
pub use tile::TileKind;
