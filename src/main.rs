use std::fs::File;
use std::path::Path;
use std::time::Instant;

use clap::Parser;
use crossterm::event::{self, Event};
use env_logger::{Env, Target};
use grid_snake::config::{Cli, TICK_INTERVAL};
use grid_snake::error::AppError;
use grid_snake::game::GameController;
use grid_snake::grid::Grid;
use grid_snake::input::{GameInput, map_key_event};
use grid_snake::renderer;
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{LevelFilter, info};

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;
    install_panic_hook();

    let grid = Grid::default();
    let mut game = match cli.seed {
        Some(seed) => GameController::with_seed(grid, seed),
        None => GameController::from_entropy(grid),
    };
    info!(
        "starting {0}x{0} session (seed: {1:?})",
        grid.count(),
        cli.seed
    );

    // Records written to stderr would tear the alternate screen.
    let max_level = log::max_level();
    if cli.log_file.is_none() {
        log::set_max_level(LevelFilter::Off);
    }
    let result = run(grid, &mut game);
    log::set_max_level(max_level);

    info!(
        "session finished after {} ticks and {} completed runs, final score {}",
        game.ticks(),
        game.runs(),
        game.snake().score()
    );
    result
}

fn run(grid: Grid, game: &mut GameController) -> Result<(), AppError> {
    let mut session = TerminalSession::enter(grid)?;
    session
        .terminal_mut()
        .draw(|frame| renderer::render(frame, &game.snapshot()))?;

    let mut last_tick = Instant::now();
    loop {
        let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match map_key_event(key) {
                    Some(GameInput::Quit) => break,
                    Some(GameInput::Direction(direction)) => game.handle_input(direction),
                    None => {}
                },
                Event::Resize(..) => {
                    session
                        .terminal_mut()
                        .draw(|frame| renderer::render(frame, &game.snapshot()))?;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            let snapshot = game.step();
            session
                .terminal_mut()
                .draw(|frame| renderer::render(frame, &snapshot))?;
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<(), AppError> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));

    if let Some(path) = log_file {
        let file = File::create(path).map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
