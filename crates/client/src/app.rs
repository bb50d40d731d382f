//! Glue code tying level content, the engine and the text interface together.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use maze_content::{ConfigLoader, LevelLoader};
use maze_core::{
    Command, ExecuteError, GameConfig, GameEngine, GameError, GameState,
    LevelAdvance, SessionStatus, TurnEvent, TurnOutcome,
};

use crate::config::ClientConfig;
use crate::input::{HELP, Input, InputError, parse_input};
use crate::presentation::draw;

pub const PROMPT: &str = "Enter a move: ";
pub const ITEM_UNAVAILABLE_MESSAGE: &str = "That item is not in your inventory.";
pub const WIN_MESSAGE: &str = "Congratulations! You have finished all levels and won the game!";
pub const LOSS_MESSAGE: &str = "You lose :(";
const BLOCKED_MESSAGE: &str = "You can't move there.";
const OUTSIDE_MESSAGE: &str = "You can't leave the maze.";
const LEVEL_COMPLETE_MESSAGE: &str = "The door opens. On to the next level!";

/// Why [`MazeApp::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum SessionEnd {
    Won,
    Lost,
    Quit,
    EndOfInput,
}

pub struct MazeApp {
    state: GameState,
    config: GameConfig,
}

impl MazeApp {
    pub fn new(state: GameState, config: GameConfig) -> Self {
        Self { state, config }
    }

    /// Loads the rules and the level file named by the client configuration.
    pub fn from_config(client: &ClientConfig) -> Result<Self> {
        let config = match &client.rules_file {
            Some(path) => ConfigLoader::load(path)?,
            None => GameConfig::default(),
        };

        let levels = LevelLoader::load(&client.game_file)?;
        let state = GameState::from_specs(&levels, &config).with_context(|| {
            format!("Cannot start a game from {}", client.game_file.display())
        })?;

        tracing::info!(
            game_file = %client.game_file.display(),
            levels = levels.len(),
            "session created"
        );
        Ok(Self::new(state, config))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays until the session ends, the player quits or input runs out.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<SessionEnd>
    where
        R: BufRead,
        W: Write,
    {
        tracing::info!(level = self.state.current_level().name(), "session started");
        draw(&mut output, &self.state.render_view())?;

        let mut line = String::new();
        loop {
            write!(output, "\n{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                tracing::info!("input closed");
                return Ok(SessionEnd::EndOfInput);
            }

            let command = match parse_input(&line) {
                Ok(Input::Command(command)) => command,
                Ok(Input::Help) => {
                    writeln!(output, "{HELP}")?;
                    continue;
                }
                Ok(Input::Quit) => {
                    tracing::info!("player quit");
                    return Ok(SessionEnd::Quit);
                }
                Err(InputError::UnknownItem(name)) => {
                    tracing::debug!(%name, "unknown item requested");
                    writeln!(output, "{ITEM_UNAVAILABLE_MESSAGE}")?;
                    continue;
                }
                Err(error) => {
                    writeln!(output, "{error}")?;
                    continue;
                }
            };

            let Some(outcome) = self.submit(&command, &mut output)? else {
                continue;
            };

            match outcome.status {
                SessionStatus::Won => {
                    writeln!(output, "{WIN_MESSAGE}")?;
                    tracing::info!(nonce = outcome.nonce, "session won");
                    return Ok(SessionEnd::Won);
                }
                SessionStatus::Lost => {
                    draw(&mut output, &self.state.render_view())?;
                    writeln!(output, "{LOSS_MESSAGE}")?;
                    tracing::info!(nonce = outcome.nonce, "session lost");
                    return Ok(SessionEnd::Lost);
                }
                SessionStatus::Playing => draw(&mut output, &self.state.render_view())?,
            }
        }
    }

    /// Runs one command through the engine and reports it to the player.
    ///
    /// Rejected commands print a notice and yield `None`. Internal engine
    /// errors abort the session.
    fn submit<W: Write>(
        &mut self,
        command: &Command,
        output: &mut W,
    ) -> Result<Option<TurnOutcome>> {
        let result = GameEngine::new(&mut self.state, &self.config).execute(command);

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(error) => {
                let severity = error.severity();
                if severity.is_internal() {
                    tracing::error!(code = error.error_code(), %error, "engine failure");
                    return Err(anyhow::Error::new(error).context("The game engine failed"));
                }
                if severity.is_recoverable() {
                    tracing::debug!(code = error.error_code(), %error, "command rejected");
                } else {
                    tracing::warn!(code = error.error_code(), %error, "invalid command");
                }
                writeln!(output, "{}", rejection_message(&error))?;
                return Ok(None);
            }
        };

        tracing::debug!(
            nonce = outcome.nonce,
            event = ?outcome.event,
            status = %outcome.status,
            "command resolved"
        );
        match outcome.event {
            TurnEvent::Blocked { .. } => writeln!(output, "{BLOCKED_MESSAGE}")?,
            TurnEvent::Moved {
                advance: Some(LevelAdvance::Next { level, .. }),
                ..
            } => {
                tracing::info!(level, name = self.state.current_level().name(), "level advanced");
                if outcome.status == SessionStatus::Playing {
                    writeln!(output, "{LEVEL_COMPLETE_MESSAGE}")?;
                }
            }
            TurnEvent::Consumed { item } => writeln!(output, "You used a {}.", item.kind)?,
            TurnEvent::Moved { .. } => {}
        }

        Ok(Some(outcome))
    }
}

fn rejection_message(error: &ExecuteError) -> &'static str {
    match error {
        ExecuteError::Consume(_) => ITEM_UNAVAILABLE_MESSAGE,
        ExecuteError::Move(_) => OUTSIDE_MESSAGE,
        ExecuteError::SessionOver { .. } | ExecuteError::LevelTransition(_) => {
            "The game is over."
        }
    }
}
