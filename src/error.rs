//! Global error handling for repodump
//!
//! A single error type shared by the tree renderer, the content serializer
//! and the output writer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for repodump operations
#[derive(Error, Debug)]
pub enum RepoDumpError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Directory traversal errors
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A single file could not be read or decoded as UTF-8
    #[error("Could not read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Path not found
    #[error("Path {0} does not exist")]
    PathNotFound(String),

    /// Unexpected error
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Specialized Result type for repodump operations
pub type Result<T> = std::result::Result<T, RepoDumpError>;

/// Creates a RepoDumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::RepoDumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

/// Extension trait for adding context to errors
pub trait ResultExt<T, E> {
    /// Add additional context to an error
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E: std::error::Error + 'static> ResultExt<T, E> for std::result::Result<T, E> {
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|e| {
            let context = f();
            RepoDumpError::Unexpected(format!("{}: {}", context, e))
        })
    }
}

// main() reports through io::Result
impl From<RepoDumpError> for io::Error {
    fn from(err: RepoDumpError) -> Self {
        match err {
            RepoDumpError::Io(e) => e,
            missing @ RepoDumpError::PathNotFound(_) => {
                io::Error::new(io::ErrorKind::NotFound, missing.to_string())
            }
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
