//! Tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tictactoe_cli::{
    Cli, Command, MarkArg, ModeKind, Orchestrator, PlayConfig, analyze, spawn_stdin_reader,
};
use tictactoe_core::{Board, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            computer,
            delay_ms,
            config,
        } => run_play(mode, computer, delay_ms, config).await,
        Command::Best { board, mark } => run_best(&board, mark),
    }
}

/// Run an interactive game
async fn run_play(
    mode: Option<ModeKind>,
    computer: Option<MarkArg>,
    delay_ms: Option<u64>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = match config {
        Some(path) => PlayConfig::from_file(path)?,
        None => PlayConfig::default(),
    }
    .with_overrides(mode, computer.map(Into::into), delay_ms);

    info!(?config, "Starting game");
    println!("Type 1-9 to play, r to reset, m to switch mode, q to quit");

    let session = Session::new(config.session_mode());
    let mut orchestrator = Orchestrator::new(
        session,
        config.delay(),
        spawn_stdin_reader(),
        std::io::stdout(),
    );
    orchestrator.run().await
}

/// Print the optimal move for a board
fn run_best(board: &str, mark: MarkArg) -> Result<()> {
    let board: Board = board.parse()?;
    let analysis = analyze(&board, mark.into());
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
