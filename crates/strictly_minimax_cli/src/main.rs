//! Strictly Minimax - analysis CLI
//!
//! Solves tic-tac-toe positions and plays out optimal lines.

#![warn(missing_docs)]

mod cli;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use report::{PlayoutReport, SolveReport};
use serde::Serialize;
use strictly_minimax::{Board, SearchConfig, Searcher, outcome, player, terminal};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut searcher = Searcher::new(config);

    match cli.command {
        Command::Solve { board, json } => run_solve(&mut searcher, board, json),
        Command::Playout { board, json } => run_playout(&mut searcher, board, json),
    }
}

/// Resolves the search configuration from file and flags.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<SearchConfig> {
    let config = match &cli.config {
        Some(path) => SearchConfig::from_file(path)?,
        None => SearchConfig::default(),
    };
    let config = if cli.exhaustive {
        config.with_early_exit(false)
    } else {
        config
    };
    debug!(?config, "Using search config");
    Ok(config)
}

/// Solve a single position.
#[instrument(skip(searcher, board))]
fn run_solve(searcher: &mut Searcher, board: Board, json: bool) -> Result<()> {
    let to_move = (!terminal(&board)).then(|| player(&board));
    let result = searcher.search(&board);
    info!(value = result.value(), "Solved position");

    let report = SolveReport::new(board, to_move, result, searcher.last_stats());
    emit(&report, json)
}

/// Play out a position under optimal play.
#[instrument(skip(searcher, board))]
fn run_playout(searcher: &mut Searcher, board: Board, json: bool) -> Result<()> {
    let (end, line) = searcher.play_out(&board);
    info!(plies = line.len(), "Play-out finished");

    let report = PlayoutReport {
        start: board,
        line,
        end,
        outcome: outcome(&end),
    };
    emit(&report, json)
}

fn emit<T: Serialize + std::fmt::Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
