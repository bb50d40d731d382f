//! Client configuration.
//!
//! Values come from the environment first (a `.env` file is honoured by the
//! binary), then command-line flags override them.
use std::env;
use std::path::PathBuf;

use clap::Parser;

/// Settings the client needs to start a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Level file to play.
    pub game_file: PathBuf,
    /// Optional TOML rules file. `None` plays with the default rules.
    pub rules_file: Option<PathBuf>,
    /// Directory receiving the client log file.
    pub log_dir: PathBuf,
}

impl ClientConfig {
    pub const DEFAULT_GAME_FILE: &'static str = "games/game1.txt";
    pub const DEFAULT_LOG_DIR: &'static str = "logs";

    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MAZE_GAME_FILE` - Level file (default: games/game1.txt)
    /// - `MAZE_RULES_FILE` - Rules TOML file (default: none)
    /// - `MAZE_LOG_DIR` - Log directory (default: logs)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(path) = read_env::<PathBuf>("MAZE_GAME_FILE") {
            config.game_file = path;
        }
        if let Some(path) = read_env::<PathBuf>("MAZE_RULES_FILE") {
            config.rules_file = Some(path);
        }
        if let Some(path) = read_env::<PathBuf>("MAZE_LOG_DIR") {
            config.log_dir = path;
        }

        config
    }

    /// Applies command-line overrides.
    pub fn with_args(mut self, args: Args) -> Self {
        if let Some(path) = args.game_file {
            self.game_file = path;
        }
        if let Some(path) = args.rules {
            self.rules_file = Some(path);
        }
        if let Some(path) = args.log_dir {
            self.log_dir = path;
        }
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            game_file: PathBuf::from(Self::DEFAULT_GAME_FILE),
            rules_file: None,
            log_dir: PathBuf::from(Self::DEFAULT_LOG_DIR),
        }
    }
}

/// Turn-based maze crawler
#[derive(Parser, Debug, Default)]
#[command(name = "maze")]
#[command(about = "Collect every coin, open the door, survive the maze", long_about = None)]
#[command(version)]
pub struct Args {
    /// Level file to play (overrides MAZE_GAME_FILE)
    #[arg(value_name = "GAME_FILE")]
    pub game_file: Option<PathBuf>,

    /// TOML file with game rules (overrides MAZE_RULES_FILE)
    #[arg(long, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Directory for the log file (overrides MAZE_LOG_DIR)
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key)
        .ok()
        .filter(|value| !value.is_empty())?
        .parse()
        .ok()
}
