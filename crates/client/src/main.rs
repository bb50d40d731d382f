//! Maze crawler binary.
//!
//! ```bash
//! cargo run -p maze-client -- games/game1.txt --rules config/game.toml
//! ```

use anyhow::Result;
use clap::Parser;
use maze_client::{Args, ClientConfig, MazeApp, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env().with_args(Args::parse());
    let _guard = logging::setup_logging(&config.log_dir)?;

    let mut app = MazeApp::from_config(&config)?;
    let end = app.run(std::io::stdin().lock(), std::io::stdout().lock())?;

    tracing::info!(%end, "session ended");
    Ok(())
}
