use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the terminal host. The simulation itself cannot fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(
        "terminal is {actual_width}x{actual_height} but the board needs at least {needed_width}x{needed_height}"
    )]
    TerminalTooSmall {
        needed_width: u16,
        needed_height: u16,
        actual_width: u16,
        actual_height: u16,
    },

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
