use std::io;

use thiserror::Error;

/// Library-wide error type for cmcron operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// YAML serialization failure.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The given input directory does not exist or is not a directory.
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    /// An interactive prompt could not be completed.
    #[error("{0}")]
    Prompt(String),
}

impl AppError {
    pub(crate) fn prompt_error<S: Into<String>>(message: S) -> Self {
        AppError::Prompt(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Yaml(_) => io::ErrorKind::InvalidData,
            AppError::DirectoryNotFound(_) => io::ErrorKind::NotFound,
            AppError::Prompt(_) => io::ErrorKind::InvalidInput,
        }
    }
}
