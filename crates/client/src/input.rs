//! Line-based command parsing.
//!
//! This module owns the text-to-command mapping so the game loop never deals
//! with raw input.

use maze_core::{CardinalDirection, Command, ItemKind};

pub const HELP: &str = "\
Commands:
  w        move up (also: up, north)
  s        move down (also: down, south)
  a        move left (also: left, west)
  d        move right (also: right, east)
  i <item> use an item from your inventory (e.g. i Potion)
  h        show this help
  q        quit";

/// High-level outcome of parsing one input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Submit the decoded command to the engine.
    Command(Command),
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter a command (h for help).")]
    Empty,

    #[error("Usage: i <item>")]
    MissingItem,

    /// Not an item kind at all. Treated like an item the player does not hold.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    #[error("Unknown command: {0} (h for help)")]
    Unknown(String),
}

/// Parses one line of user input. Surrounding whitespace is ignored.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    let mut parts = line.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or_default();

    if head.eq_ignore_ascii_case("i") {
        let name = parts.next().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(InputError::MissingItem);
        }
        return name
            .parse::<ItemKind>()
            .map(|kind| Input::Command(Command::consume(kind)))
            .map_err(|_| InputError::UnknownItem(name.to_string()));
    }

    if parts.next().is_some() {
        return Err(InputError::Unknown(line.to_string()));
    }

    match head.to_ascii_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "q" => Ok(Input::Quit),
        "h" => Ok(Input::Help),
        _ => head
            .parse::<CardinalDirection>()
            .map(movement)
            .map_err(|_| InputError::Unknown(line.to_string())),
    }
}

fn movement(direction: CardinalDirection) -> Input {
    Input::Command(Command::step(direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_maps_to_directions() {
        assert_eq!(parse_input("w"), Ok(movement(CardinalDirection::North)));
        assert_eq!(parse_input("S\n"), Ok(movement(CardinalDirection::South)));
        assert_eq!(parse_input(" a "), Ok(movement(CardinalDirection::West)));
        assert_eq!(parse_input("d"), Ok(movement(CardinalDirection::East)));
    }

    #[test]
    fn direction_names_are_accepted() {
        assert_eq!(parse_input("up"), Ok(movement(CardinalDirection::North)));
        assert_eq!(parse_input("LEFT"), Ok(movement(CardinalDirection::West)));
        assert_eq!(parse_input("south"), Ok(movement(CardinalDirection::South)));
        assert_eq!(
            parse_input("upward"),
            Err(InputError::Unknown("upward".to_string()))
        );
    }

    #[test]
    fn consume_takes_a_case_insensitive_item_name() {
        assert_eq!(
            parse_input("i Potion"),
            Ok(Input::Command(Command::consume(ItemKind::Potion)))
        );
        assert_eq!(
            parse_input("i  honey\n"),
            Ok(Input::Command(Command::consume(ItemKind::Honey)))
        );
    }

    #[test]
    fn consume_rejects_missing_or_unknown_items() {
        assert_eq!(parse_input("i"), Err(InputError::MissingItem));
        assert_eq!(
            parse_input("i Sword"),
            Err(InputError::UnknownItem("Sword".to_string()))
        );
    }

    #[test]
    fn control_commands_and_garbage() {
        assert_eq!(parse_input("q"), Ok(Input::Quit));
        assert_eq!(parse_input("H"), Ok(Input::Help));
        assert_eq!(parse_input("\n"), Err(InputError::Empty));
        assert_eq!(parse_input("x"), Err(InputError::Unknown("x".to_string())));
        assert_eq!(
            parse_input("w w"),
            Err(InputError::Unknown("w w".to_string()))
        );
    }
}
