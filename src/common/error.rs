use crate::review::CheckError;
use thiserror::Error;

/// Result type for sjcheck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for a verification run
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {source}")]
    Invalid {
        /// 1-based line the run stopped on
        line: usize,
        #[source]
        source: CheckError,
    },
}

impl Error {
    /// Attach the line number a check failed on
    pub fn invalid(line: usize, source: CheckError) -> Self {
        Self::Invalid { line, source }
    }

    /// The structural problem, if this is not an I/O failure
    pub fn check_error(&self) -> Option<&CheckError> {
        match self {
            Self::Invalid { source, .. } => Some(source),
            Self::Io(_) => None,
        }
    }

    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Invalid { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}
