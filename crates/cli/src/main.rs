mod autoplay;
mod game;
mod settings;
mod tui;
mod ui;

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::{Env, Target};
use log::debug;
use twenty48_core::advisor::TieBreak;
use twenty48_core::constants::{MAX_GRID_SIZE, MIN_GRID_SIZE};

use game::{Game, resolve_size};
use settings::SettingsStore;

#[derive(Args, Debug, Clone)]
struct GameParams {
    /// Grid edge length; defaults to the size last played
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u8).range(MIN_GRID_SIZE as i64..=MAX_GRID_SIZE as i64)
    )]
    size: Option<u8>,

    /// Seed for reproducible tile spawns
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Which direction the hint prefers when gains are equal
    #[arg(long = "tie-break", global = true, value_name = "last|first", default_value = "last")]
    tie_break: TieBreak,

    /// Settings file holding the size and best score
    #[arg(long, global = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    store: Option<PathBuf>,

    /// Write log records to this file
    #[arg(long = "log-file", global = true, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    log_file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(version, about = "Sliding tile puzzle for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<SubCommands>,

    #[command(flatten)]
    params: GameParams,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    /// Line-oriented mode without the full-screen interface
    Plain,
    /// Play games headlessly by always following the hint
    Autoplay {
        /// Number of games to play
        #[arg(long, default_value = "10")]
        games: u32,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let params = cli.params;
    init_logging(params.log_file.as_deref(), cli.command.is_none())?;
    let requested = params.size.map(usize::from);

    match cli.command {
        Some(SubCommands::Autoplay { games }) => {
            autoplay::run(resolve_size(requested, None), games, params.seed, params.tie_break)
        }
        Some(SubCommands::Plain) => {
            let game = open_game(&params, requested)?;
            ui::ui_loop(game).map_err(anyhow::Error::msg)
        }
        None => {
            let game = open_game(&params, requested)?;
            tui::run(game).map_err(anyhow::Error::msg)
        }
    }
}

fn open_game(params: &GameParams, requested: Option<usize>) -> Result<Game> {
    let path = params
        .store
        .clone()
        .unwrap_or_else(SettingsStore::default_path);
    let store = SettingsStore::open(path);
    debug!("settings file: {}", store.path().display());
    let size = resolve_size(requested, store.size());
    Game::new(size, params.seed, params.tie_break, store)
}

/// Installs the logger.
///
/// The full-screen interface owns the terminal, so without a log file it
/// stays silent unless `RUST_LOG` says otherwise.
fn init_logging(log_file: Option<&Path>, full_screen: bool) -> Result<()> {
    let default_filter = if full_screen && log_file.is_none() {
        "off"
    } else {
        "warn"
    };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}
