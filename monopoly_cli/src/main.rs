//! Prints the property registry of a board, in board order.

mod listing;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use monopoly_rules::GameConfig;

#[derive(Debug, Parser)]
#[command(name = "monopoly", version)]
#[command(about = "List the properties of a Monopoly board and their rents")]
struct Args {
    /// TOML file with rules and an optional custom board
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the board as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log rule decisions at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let board = config.build_board().context("building the board")?;
    log::info!("board has {} properties", board.len());

    if args.json {
        let json = serde_json::to_string_pretty(&board).context("serializing the board")?;
        println!("{json}");
    } else {
        print!("{}", listing::render(&board));
    }
    Ok(())
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
