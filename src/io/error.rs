//! Error types for board configuration and solution output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum PentominoError {
    /// Width and height do not describe a tileable board
    ///
    /// Occurs when either side is below the minimum or the area is neither
    /// the 60 cells covered by the pieces nor 64 cells with the blocker.
    InvalidDimensions {
        /// Requested board width
        width: usize,
        /// Requested board height
        height: usize,
        /// Explanation of why the pair was rejected
        reason: String,
    },

    /// Size argument could not be read as a width and height
    InvalidSize {
        /// The text that was supplied
        value: String,
        /// Description of what's wrong with the text
        reason: String,
    },

    /// Writing rendered output failed
    Output {
        /// Destination file, or `None` for standard output
        path: Option<PathBuf>,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PentominoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid board {width}x{height}: {reason}")
            }
            Self::InvalidSize { value, reason } => {
                write!(f, "Invalid board size '{value}': {reason}")
            }
            Self::Output {
                path,
                operation,
                source,
            } => match path {
                Some(path) => write!(
                    f,
                    "Output error during {operation} on '{}': {source}",
                    path.display()
                ),
                None => write!(f, "Output error during {operation} on stdout: {source}"),
            },
        }
    }
}

impl std::error::Error for PentominoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, PentominoError>;

impl From<std::io::Error> for PentominoError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            path: None,
            operation: "write",
            source: err,
        }
    }
}

/// Create an invalid dimensions error
pub fn invalid_dimensions(width: usize, height: usize, reason: &impl ToString) -> PentominoError {
    PentominoError::InvalidDimensions {
        width,
        height,
        reason: reason.to_string(),
    }
}

/// Create an invalid size-argument error
pub fn invalid_size(value: &impl ToString, reason: &impl ToString) -> PentominoError {
    PentominoError::InvalidSize {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an output error for a specific file
pub fn output_error(
    path: Option<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> PentominoError {
    PentominoError::Output {
        path,
        operation,
        source,
    }
}
