//! Error types for KalaAlign

use std::path::PathBuf;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// KalaAlign error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required input file is missing
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed series or match file
    #[error("Parse error in {}:{line}: {message}", .path.display())]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// 1-based line number (0 when the problem is not tied to a line)
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
