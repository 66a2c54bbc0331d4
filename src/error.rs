use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

/// Errors surfaced by generation and checking.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid value '{value}' for --{flag}")]
    InvalidArgument { flag: &'static str, value: String },

    #[error("I/O failure on {}: {source}", path.display())]
    IoFailure { path: PathBuf, source: io::Error },

    #[error("Malformed row at line {line}: {reason}")]
    Malformed { line: u64, reason: String },

    #[error("Generation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Could not initialise logging: {0}")]
    Logging(String),
}

impl Error {
    pub fn invalid(flag: &'static str, value: impl ToString) -> Self {
        Error::InvalidArgument {
            flag,
            value: value.to_string(),
        }
    }

    pub fn io(path: &Path, source: io::Error) -> Self {
        Error::IoFailure {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Error::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
