//! Error types for codemap.
//!
//! Only the scan root and configuration loading are fallible. Everything
//! encountered during a walk (unreadable entries, undecodable files,
//! unrecognized syntax) degrades to a skip, never an error.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that codemap can return to a caller.
#[derive(Debug, Error)]
pub enum CodemapError {
    /// The scan root does not exist or is not a directory.
    #[error("scan root is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// I/O failure on the scan root itself.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A config file could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodemapError>;
