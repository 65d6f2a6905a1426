use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ratatui::style::Color;

/// Side length of the square play field in reference pixels.
pub const WINDOW_SIZE: u16 = 800;

/// Side length of one grid cell in reference pixels.
pub const CELL_SIZE: u16 = 20;

/// Number of cells along each grid axis.
pub const GRID_COUNT: u16 = WINDOW_SIZE / CELL_SIZE;

/// Simulation steps per second.
pub const TICKS_PER_SECOND: u64 = 10;

/// Wall-clock time between two simulation steps.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND);

/// Snake segment color.
pub const SNAKE_COLOR: Color = Color::Green;

/// Food color.
pub const FOOD_COLOR: Color = Color::Red;

/// Empty board color.
pub const BOARD_BG: Color = Color::Black;

/// Border and score text color.
pub const BORDER_FG: Color = Color::White;

/// Upper half-block glyph; fg paints the upper cell, bg the lower one.
pub const GLYPH_HALF_UPPER: &str = "▀";

/// Command-line flags of the terminal host.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Seed the food generator for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write log records to this file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
