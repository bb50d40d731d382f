//! Render-ready projection of the session.
//!
//! The core never formats text. Presentation layers pull everything they
//! draw from a [`RenderView`]: the grid for floor lookups, the item overlay,
//! the player position, the inventory summary and the vitals.

use std::collections::BTreeMap;

use crate::env::{Grid, TileKind};

use super::{GameState, ItemKind, Position, SessionStatus, Vitals};

/// What a cell shows, topmost layer first: player, then item, then floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellView {
    Player,
    Item(ItemKind),
    Tile(TileKind),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderView<'a> {
    pub level_index: usize,
    pub level_count: usize,
    pub level_name: &'a str,
    pub grid: &'a Grid,
    pub items: BTreeMap<Position, ItemKind>,
    pub player: Position,
    pub inventory: Vec<(ItemKind, usize)>,
    pub vitals: Vitals,
    pub status: SessionStatus,
}

impl<'a> RenderView<'a> {
    pub(super) fn new(state: &'a GameState) -> Self {
        let level = state.current_level();
        let player = state.player();

        Self {
            level_index: state.level_index(),
            level_count: state.levels().len(),
            level_name: level.name(),
            grid: level.grid(),
            items: level.items_at().collect(),
            player: player.position(),
            inventory: player.inventory().summary(),
            vitals: player.vitals(),
            status: state.status(),
        }
    }

    /// Layered content of a cell, or `None` outside the grid.
    pub fn cell(&self, position: Position) -> Option<CellView> {
        let tile = self.grid.tile_at(position).ok()?;
        if position == self.player {
            return Some(CellView::Player);
        }
        Some(match self.items.get(&position) {
            Some(kind) => CellView::Item(*kind),
            None => CellView::Tile(tile),
        })
    }

    /// Rows of layered cells, top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = Vec<CellView>> + '_ {
        let dimensions = self.grid.dimensions();
        (0..dimensions.rows as i32).map(move |row| {
            (0..dimensions.columns as i32)
                .filter_map(|column| self.cell(Position::new(row, column)))
                .collect()
        })
    }
}
