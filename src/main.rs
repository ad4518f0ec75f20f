use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use gridsnake::app::App;
use gridsnake::game::GameConfig;
use gridsnake::score::FileScoreStore;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Terminal snake game")]
struct Cli {
    /// File the high score is persisted to
    #[arg(long, default_value = "snake_scores.json")]
    scores: PathBuf,

    /// Write logs to this file (the terminal itself is the game screen)
    #[arg(long)]
    log: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        let file =
            File::create(path).with_context(|| format!("failed to create log file {path:?}"))?;
        WriteLogger::init(LevelFilter::Info, LogConfig::default(), file)
            .context("failed to initialize logger")?;
    }

    let store = FileScoreStore::new(cli.scores);
    let mut app = App::new(GameConfig::default(), Box::new(store));
    app.run().await
}
