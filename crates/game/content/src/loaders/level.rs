//! Level file loader.
//!
//! A level file holds one or more mazes, each introduced by a header line:
//!
//! ```text
//! Maze <name> - <rows> <columns>
//! <row>
//! ...
//! ```
//!
//! Rows are kept verbatim apart from the line ending, so leading and
//! trailing floor survives. Rows of the wrong width are passed through and
//! dropped by the grid, which logs nothing; they are reported here instead.

use std::path::Path;

use maze_core::{GridDimensions, LevelSpec};

use crate::loaders::{LoadResult, read_file};

const HEADER_PREFIX: &str = "Maze";
const NAME_SEPARATOR: &str = " - ";

/// Loader for text level files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load every level in a file, in file order.
    pub fn load(path: &Path) -> LoadResult<Vec<LevelSpec>> {
        let content = read_file(path)?;
        let levels = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(path = %path.display(), levels = levels.len(), "loaded level file");
        Ok(levels)
    }

    /// Parse level text. An empty input yields an empty list.
    pub fn parse(content: &str) -> LoadResult<Vec<LevelSpec>> {
        let mut levels: Vec<LevelSpec> = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = raw.strip_suffix('\r').unwrap_or(raw);

            if line.trim_start().starts_with(HEADER_PREFIX) {
                let spec = parse_header(line.trim(), line_number)?;
                tracing::debug!(
                    line = line_number,
                    name = %spec.name,
                    rows = spec.dimensions.rows,
                    columns = spec.dimensions.columns,
                    "level header"
                );
                levels.push(spec);
                continue;
            }

            if line.is_empty() {
                continue;
            }

            let Some(level) = levels.last_mut() else {
                tracing::warn!(line = line_number, "ignoring row before the first level header");
                continue;
            };

            let dimensions = level.dimensions;
            if !dimensions.accepts_row(line) {
                tracing::warn!(
                    line = line_number,
                    level = %level.name,
                    expected = dimensions.columns,
                    found = line.chars().count(),
                    "row has the wrong width and will be skipped"
                );
            } else if accepted_rows(level) >= dimensions.rows as usize {
                tracing::warn!(
                    line = line_number,
                    level = %level.name,
                    "row beyond the declared row count will be ignored"
                );
            }
            level.push_line(line);
        }

        for level in &levels {
            let accepted = accepted_rows(level);
            if accepted < level.dimensions.rows as usize {
                tracing::warn!(
                    level = %level.name,
                    expected = level.dimensions.rows,
                    found = accepted,
                    "missing rows are filled with floor"
                );
            }
        }

        Ok(levels)
    }
}

fn accepted_rows(level: &LevelSpec) -> usize {
    level
        .lines
        .iter()
        .filter(|line| level.dimensions.accepts_row(line))
        .count()
}

/// Parses `Maze <name> - <rows> <columns>`.
fn parse_header(line: &str, line_number: usize) -> LoadResult<LevelSpec> {
    let rest = line[HEADER_PREFIX.len()..].trim_start();
    let (name, dimensions) = match rest.split_once(NAME_SEPARATOR) {
        Some((name, dimensions)) => (name.trim(), dimensions),
        None => ("", rest),
    };

    let numbers = dimensions
        .split_whitespace()
        .map(str::parse::<u32>)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| anyhow::anyhow!("Invalid dimensions on line {}: {}", line_number, e))?;

    let [rows, columns] = numbers[..] else {
        return Err(anyhow::anyhow!(
            "Expected `<rows> <columns>` on line {}, found {:?}",
            line_number,
            dimensions.trim()
        ));
    };

    let dimensions = GridDimensions::new(rows, columns);
    if dimensions.cell_count().is_none() {
        return Err(anyhow::anyhow!(
            "Level on line {} is too large: {}x{} (at most {} cells)",
            line_number,
            rows,
            columns,
            GridDimensions::MAX_CELLS
        ));
    }

    Ok(LevelSpec::new(name, dimensions))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use maze_core::{GameConfig, GameState, ItemKind, Position, StateError, TileKind};

    use super::*;

    const TWO_LEVELS: &str = "\
Maze level1 - 3 5
#####
PC  D
#####

Maze level2 - 2 4
P LD
 MW#
";

    #[test]
    fn parses_levels_in_file_order() {
        let levels = LevelLoader::parse(TWO_LEVELS).unwrap();

        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].name, "level1");
        assert_eq!(levels[0].dimensions, GridDimensions::new(3, 5));
        assert_eq!(levels[0].lines, vec!["#####", "PC  D", "#####"]);
        assert_eq!(levels[1].name, "level2");
        assert_eq!(levels[1].lines, vec!["P LD", " MW#"]);
    }

    #[test]
    fn parsed_levels_start_a_session() {
        let levels = LevelLoader::parse(TWO_LEVELS).unwrap();
        let state = GameState::from_specs(&levels, &GameConfig::default()).unwrap();

        let second = &state.levels()[1];
        assert_eq!(second.tile_at(Position::new(0, 2)), Ok(TileKind::Lava));
        assert_eq!(
            second.items_at().collect::<Vec<_>>(),
            vec![
                (Position::new(1, 1), ItemKind::Potion),
                (Position::new(1, 2), ItemKind::Water),
            ]
        );
        assert_eq!(state.current_level().coins_remaining(), 1);
    }

    #[test]
    fn rows_keep_leading_and_trailing_spaces() {
        let levels = LevelLoader::parse("Maze open - 2 3\r\n P \r\n  D\r\n").unwrap();

        assert_eq!(levels[0].lines, vec![" P ", "  D"]);
    }

    #[test]
    fn lines_before_any_header_are_ignored() {
        let levels = LevelLoader::parse("notes\n###\nMaze only - 1 3\nP D\n").unwrap();

        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].lines, vec!["P D"]);
    }

    #[test]
    fn empty_input_yields_no_levels() {
        let levels = LevelLoader::parse("").unwrap();
        assert!(levels.is_empty());

        let result = GameState::from_specs(&levels, &GameConfig::default());
        assert_eq!(result, Err(StateError::NoLevels));
    }

    #[test]
    fn name_may_contain_spaces() {
        let levels = LevelLoader::parse("Maze the long hall - 1 2\nPD\n").unwrap();

        assert_eq!(levels[0].name, "the long hall");
    }

    #[test]
    fn malformed_dimensions_name_the_line() {
        let error = LevelLoader::parse("Maze one - 1 2\nPD\nMaze two - x 3\n").unwrap_err();
        assert!(error.to_string().contains("line 3"));

        let error = LevelLoader::parse("Maze three - 4\n").unwrap_err();
        assert!(error.to_string().contains("line 1"));
    }

    #[test]
    fn oversized_dimensions_name_the_line() {
        for header in [
            "Maze big - 4000000000 4000000000\n",
            "Maze wide - 1 3000000000\n",
        ] {
            let message = LevelLoader::parse(header).unwrap_err().to_string();
            assert!(message.contains("line 1"), "{message}");
            assert!(message.contains("too large"), "{message}");
        }
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{TWO_LEVELS}").unwrap();

        let levels = LevelLoader::load(file.path()).unwrap();

        assert_eq!(levels.len(), 2);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.txt");

        let message = LevelLoader::load(&path).unwrap_err().to_string();

        assert!(message.contains("nowhere.txt"));
    }
}
