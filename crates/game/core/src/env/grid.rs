use crate::state::{Position, StateError};

use super::TileKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub rows: u32,
    pub columns: u32,
}

impl GridDimensions {
    /// Largest number of cells a grid may hold.
    pub const MAX_CELLS: u64 = 1 << 20;

    pub const fn new(rows: u32, columns: u32) -> Self {
        Self { rows, columns }
    }

    /// Number of cells, or `None` if the grid cannot be built.
    ///
    /// Each side must fit a signed coordinate and the area must stay within
    /// [`Self::MAX_CELLS`].
    pub fn cell_count(&self) -> Option<usize> {
        let side_limit = i32::MAX as u32;
        if self.rows > side_limit || self.columns > side_limit {
            return None;
        }
        let cells = u64::from(self.rows) * u64::from(self.columns);
        (cells <= Self::MAX_CELLS).then_some(cells as usize)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.column >= 0
            && i64::from(position.row) < i64::from(self.rows)
            && i64::from(position.column) < i64::from(self.columns)
    }

    /// Returns true if `line` has exactly `columns` characters.
    pub fn accepts_row(&self, line: &str) -> bool {
        line.chars().count() == self.columns as usize
    }

    /// Selects the rows that are placed into the grid, top to bottom.
    ///
    /// Lines of the wrong length are skipped and anything past `rows`
    /// accepted lines is ignored.
    pub fn placed_rows<'a, I>(&self, lines: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines
            .into_iter()
            .filter(|line| self.accepts_row(line))
            .take(self.rows as usize)
            .collect()
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        // bounds checked above, both coordinates are non-negative
        Some(position.row as usize * self.columns as usize + position.column as usize)
    }
}

/// Fixed-size rectangular floor layout of one level.
///
/// Dimensions never change after construction. The only mutation is clearing
/// the door lock.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: GridDimensions,
    tiles: Vec<TileKind>,
}

impl Grid {
    /// Builds a grid of plain floor.
    pub fn empty(dimensions: GridDimensions) -> Result<Self, StateError> {
        let cells = dimensions
            .cell_count()
            .ok_or(StateError::GridTooLarge {
                rows: dimensions.rows,
                columns: dimensions.columns,
            })?;
        Ok(Self {
            dimensions,
            tiles: vec![TileKind::Empty; cells],
        })
    }

    /// Builds a grid from level-file lines.
    ///
    /// Only oversized dimensions fail. Rows of the wrong length are rejected,
    /// rows that are never supplied stay plain floor and unknown characters
    /// map to [`TileKind::Empty`].
    pub fn from_rows<'a, I>(dimensions: GridDimensions, lines: I) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut grid = Self::empty(dimensions)?;
        let columns = dimensions.columns as usize;

        for (row, line) in dimensions.placed_rows(lines).into_iter().enumerate() {
            for (column, glyph) in line.chars().enumerate() {
                grid.tiles[row * columns + column] = TileKind::from_glyph(glyph);
            }
        }

        Ok(grid)
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    pub fn tile_at(&self, position: Position) -> Result<TileKind, StateError> {
        self.dimensions
            .index(position)
            .map(|index| self.tiles[index])
            .ok_or(StateError::OutOfBounds {
                position,
                rows: self.dimensions.rows,
                columns: self.dimensions.columns,
            })
    }

    /// Clears the door lock. No-op without a door or when already unlocked.
    pub fn unlock_door(&mut self) {
        for tile in self.tiles.iter_mut() {
            if let TileKind::Door { locked } = tile {
                *locked = false;
            }
        }
    }

    pub fn is_door_locked(&self) -> bool {
        self.tiles
            .iter()
            .any(|tile| matches!(tile, TileKind::Door { locked: true }))
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        let columns = rows.first().map(|row| row.len()).unwrap_or(0) as u32;
        Grid::from_rows(
            GridDimensions::new(rows.len() as u32, columns),
            rows.iter().copied(),
        )
        .unwrap()
    }

    #[test]
    fn tile_at_reads_layout() {
        let grid = grid(&["#####", "#L D#", "#####"]);

        assert_eq!(grid.tile_at(Position::new(0, 0)), Ok(TileKind::Wall));
        assert_eq!(grid.tile_at(Position::new(1, 1)), Ok(TileKind::Lava));
        assert_eq!(grid.tile_at(Position::new(1, 2)), Ok(TileKind::Empty));
        assert_eq!(grid.tile_at(Position::new(1, 3)), Ok(TileKind::LOCKED_DOOR));
    }

    #[test]
    fn tile_at_rejects_positions_off_the_grid() {
        let grid = grid(&["   "]);

        for position in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(1, 0),
            Position::new(0, 3),
        ] {
            assert_eq!(
                grid.tile_at(position),
                Err(StateError::OutOfBounds {
                    position,
                    rows: 1,
                    columns: 3,
                })
            );
        }
    }

    #[test]
    fn wrong_length_rows_are_rejected_from_placement() {
        let dimensions = GridDimensions::new(2, 3);
        let grid = Grid::from_rows(dimensions, ["##", "#L#", "####", "LLL", "###"]).unwrap();

        assert_eq!(grid.tile_at(Position::new(0, 1)), Ok(TileKind::Lava));
        assert_eq!(grid.tile_at(Position::new(1, 0)), Ok(TileKind::Lava));
        assert!(grid.tile_at(Position::new(2, 0)).is_err());
    }

    #[test]
    fn missing_rows_stay_floor() {
        let grid = Grid::from_rows(GridDimensions::new(3, 2), ["##"]).unwrap();

        assert_eq!(grid.tile_at(Position::new(2, 1)), Ok(TileKind::Empty));
    }

    #[test]
    fn unlock_door_is_idempotent() {
        let mut grid = grid(&["P D"]);
        assert!(grid.is_door_locked());

        grid.unlock_door();
        grid.unlock_door();

        assert!(!grid.is_door_locked());
        assert_eq!(
            grid.tile_at(Position::new(0, 2)),
            Ok(TileKind::Door { locked: false })
        );
    }

    #[test]
    fn unlock_door_without_door_is_noop() {
        let mut grid = grid(&["# #"]);
        let before = grid.clone();

        grid.unlock_door();

        assert_eq!(grid, before);
    }

    #[test]
    fn oversized_dimensions_are_rejected_before_allocating() {
        for (rows, columns) in [(4_000_000_000, 4_000_000_000), (1, 3_000_000_000), (2048, 1024)] {
            assert_eq!(
                Grid::from_rows(GridDimensions::new(rows, columns), ["P D"]),
                Err(StateError::GridTooLarge { rows, columns })
            );
        }
    }

    #[test]
    fn cell_count_allows_degenerate_and_boundary_grids() {
        assert_eq!(GridDimensions::new(0, 0).cell_count(), Some(0));
        assert_eq!(GridDimensions::new(1024, 1024).cell_count(), Some(1 << 20));
        assert_eq!(GridDimensions::new(u32::MAX, 0).cell_count(), None);
    }
}
