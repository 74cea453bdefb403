//! Error types for the fallible edges of the crate.
//!
//! The window manager itself never fails: unknown ids are ignored and bad
//! geometry is clamped. Only configuration and the terminal host can error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::layout::Size;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("minimum window size must be non-zero in both axes, got {0}")]
    DegenerateMinimum(Size),
    #[error("card size {card} is smaller than the minimum window size {min}")]
    CardBelowMinimum { card: Size, min: Size },
    #[error("stack group size must be at least 1")]
    ZeroStackGroup,
    #[error("cell metrics must be non-zero, got {width}x{height}")]
    ZeroCellMetrics { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
