use crate::config::ConfigError;
use thiserror::Error;

/// Failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid trigger '{ch}' at position {position}: expected '+' or '-'")]
    InvalidSequence { ch: char, position: usize },
}

impl AppError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidSequence { .. } => 2,
            AppError::Config(_) | AppError::Io(_) => 1,
        }
    }
}
