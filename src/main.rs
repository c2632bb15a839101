use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::GameConfig;
use grid_snake::error::AppError;
use grid_snake::food::{FoodPlacement, RandomPlacement};
use grid_snake::game::GameEngine;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::logging::{default_log_path, init_file_logger};
use grid_snake::score::{BestScoreStore, JsonFileStore, MemoryStore};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use grid_snake::terminal_view::TerminalView;
use log::info;

/// Frame pacing of the render/input loop; ticks run on their own cadence.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Grid snake in the terminal")]
struct Cli {
    /// JSON config file with `gridSize` and `tickIntervalMs`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length in cells; overrides the config file.
    #[arg(long = "grid-size")]
    grid_size: Option<u16>,

    /// Milliseconds between ticks; overrides the config file.
    #[arg(long = "tick-interval-ms")]
    tick_interval_ms: Option<u64>,

    /// Best-score file location.
    #[arg(long = "scores-file", conflicts_with = "no_persist")]
    scores_file: Option<PathBuf>,

    /// Keep the best score in memory only.
    #[arg(long = "no-persist")]
    no_persist: bool,

    /// Seed food placement for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = load_config(&cli)?;

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(error) = init_file_logger(&log_path, cli.verbose) {
        eprintln!(
            "Failed to open log file {}: {error}; continuing without logs",
            log_path.display()
        );
    }
    info!("starting with {config:?}");

    let store: Box<dyn BestScoreStore> = if cli.no_persist {
        Box::new(MemoryStore::default())
    } else {
        let store = match &cli.scores_file {
            Some(path) => JsonFileStore::new(path),
            None => JsonFileStore::at_default_location(),
        };
        info!("best score file: {}", store.path().display());
        Box::new(store)
    };
    let placement: Box<dyn FoodPlacement> = match cli.seed {
        Some(seed) => Box::new(RandomPlacement::seeded(seed)),
        None => Box::new(RandomPlacement::from_entropy()),
    };

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut engine = GameEngine::new(config, TerminalView::new(config.grid()), store, placement)?;

    loop {
        session.draw(engine.view().scene())?;

        if let Some(game_input) = input.poll_input(FRAME_INTERVAL)? {
            match game_input {
                GameInput::Quit => break,
                GameInput::Restart => {
                    let _ = engine.restart();
                }
                GameInput::Direction(direction) => engine.request_direction(direction),
            }
        }

        let _ = engine.advance(Instant::now());
    }

    info!("quit with best score {}", engine.best_score());
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig, AppError> {
    let mut config = GameConfig::load(cli.config.as_deref())?;

    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    if let Some(tick_interval_ms) = cli.tick_interval_ms {
        config.tick_interval_ms = tick_interval_ms;
    }

    Ok(config.validate()?)
}
