//! Errors that end the game session before an outcome is reached.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Screen is too narrow ({width} columns; need at least {needed})")]
    ScreenTooNarrow { width: u16, needed: u16 },
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
