//! Text rendering of the session projection.

use std::io::{self, Write};

use maze_core::{CellView, RenderView};

/// Draws the level, the inventory and the vitals.
///
/// ```text
/// #####
/// P C D
/// #####
///
/// Inventory:
/// Coin: 1
///
/// Health: 98
/// Hunger: 0
/// Thirst: 0
/// ```
pub fn draw<W: Write>(output: &mut W, view: &RenderView<'_>) -> io::Result<()> {
    writeln!(
        output,
        "Level {}/{}: {}",
        view.level_index + 1,
        view.level_count,
        view.level_name
    )?;
    for row in view.cells() {
        let line: String = row.into_iter().map(cell_glyph).collect();
        writeln!(output, "{line}")?;
    }

    writeln!(output)?;
    writeln!(output, "Inventory:")?;
    for (kind, count) in &view.inventory {
        writeln!(output, "{kind}: {count}")?;
    }

    writeln!(output)?;
    writeln!(output, "Health: {}", view.vitals.health)?;
    writeln!(output, "Hunger: {}", view.vitals.hunger)?;
    writeln!(output, "Thirst: {}", view.vitals.thirst)
}

fn cell_glyph(cell: CellView) -> char {
    match cell {
        CellView::Player => maze_core::Level::PLAYER_GLYPH,
        CellView::Item(kind) => kind.glyph(),
        CellView::Tile(tile) => tile.glyph(),
    }
}

#[cfg(test)]
mod tests {
    use maze_core::{GameConfig, GameState, GridDimensions, LevelSpec};

    use super::*;

    fn render(state: &GameState) -> String {
        let mut buffer = Vec::new();
        draw(&mut buffer, &state.render_view()).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn draws_grid_inventory_and_vitals() {
        let spec = LevelSpec::new("hall", GridDimensions::new(3, 5))
            .with_lines(["#####", "P CLD", "#####"]);
        let state = GameState::from_specs([&spec], &GameConfig::default()).unwrap();

        assert_eq!(
            render(&state),
            "Level 1/1: hall\n\
             #####\n\
             P CLD\n\
             #####\n\
             \n\
             Inventory:\n\
             \n\
             Health: 100\n\
             Hunger: 0\n\
             Thirst: 0\n"
        );
    }

    #[test]
    fn unknown_characters_draw_as_floor() {
        let spec = LevelSpec::new("odd", GridDimensions::new(1, 4)).with_lines(["P?xD"]);
        let state = GameState::from_specs([&spec], &GameConfig::default()).unwrap();

        assert!(render(&state).contains("\nP  D\n"));
    }
}
