use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event};

use gridsnake::config::{ConfigError, EngineConfig, FRAME_POLL_INTERVAL_MS};
use gridsnake::engine::{GameEngine, GameStatus};
use gridsnake::input::{map_key_event, GameInput};
use gridsnake::renderer;
use gridsnake::terminal_runtime::{install_panic_hook, TerminalSession};
use gridsnake::theme::{self, Theme};

#[derive(Debug, Parser)]
#[command(version, about = "Grid-based Snake in the terminal")]
struct Cli {
    /// Grid height in cells.
    #[arg(long)]
    rows: Option<u16>,

    /// Grid width in cells.
    #[arg(long)]
    cols: Option<u16>,

    /// Starting tick interval in milliseconds.
    #[arg(long)]
    speed: Option<u64>,

    /// Wrap around grid edges instead of dying at walls.
    #[arg(long)]
    wrap: bool,

    /// Color theme.
    #[arg(long, default_value = "classic")]
    theme: String,

    /// JSON file with engine settings; flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("gridsnake: {error}");
            return ExitCode::from(2);
        }
    };

    let Some(theme) = theme::theme_by_name(&cli.theme) else {
        eprintln!(
            "gridsnake: unknown theme {:?} (available: {})",
            cli.theme,
            theme::theme_names().join(", ")
        );
        return ExitCode::from(2);
    };

    let engine = match GameEngine::new(config) {
        Ok(engine) => engine,
        Err(error) => {
            eprintln!("gridsnake: {error}");
            return ExitCode::from(2);
        }
    };

    install_panic_hook();

    if let Err(error) = run(engine, theme) {
        eprintln!("gridsnake: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn build_config(cli: &Cli) -> Result<EngineConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.cols = cols;
    }
    if let Some(speed) = cli.speed {
        config.initial_speed_ms = speed;
    }
    if cli.wrap {
        config.die_from_walls = false;
    }

    config.validate()?;
    Ok(config)
}

fn run(mut engine: GameEngine, theme: &Theme) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let clock = Instant::now();

    loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &engine, theme))?;

        if event::poll(Duration::from_millis(FRAME_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                match map_key_event(key) {
                    Some(GameInput::Quit) => break,
                    Some(GameInput::Direction(direction)) => engine.set_direction(direction),
                    Some(GameInput::PauseToggle) => match engine.status() {
                        GameStatus::Idle => engine.start(),
                        _ => engine.toggle_pause(),
                    },
                    Some(GameInput::Reset) => match engine.status() {
                        GameStatus::Idle => engine.start(),
                        _ => engine.reset(),
                    },
                    None => {}
                }
            }
        }

        let now_ms = u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);
        engine.advance(now_ms);
    }

    engine.stop();
    Ok(())
}
