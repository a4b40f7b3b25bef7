//! Error types for the dynascope engines.

use std::path::PathBuf;

/// Error type shared by the collector, inspector, and lookup engines.
#[derive(Debug, thiserror::Error)]
pub enum DynascopeError {
    /// A file or directory could not be read, created, or walked.
    #[error("i/o failure on {}: {source}", .path.display())]
    Io {
        /// The path the operation touched.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Writing to a report or dump stream failed.
    #[error("output write failed: {0}")]
    Output(#[source] std::io::Error),

    /// A store call failed: connectivity, authorization, or a missing table.
    #[error("store {operation} failed: {message}")]
    Store {
        /// The store operation that was issued.
        operation: &'static str,
        /// The rendered failure, including any service error detail.
        message: String,
    },

    /// A descriptor or item could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl DynascopeError {
    /// Build an [`DynascopeError::Io`] for the given path.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`DynascopeError::Store`] for the given operation.
    pub(crate) fn store(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Store {
            operation,
            message: message.into(),
        }
    }
}

/// Convenience result alias for engine operations.
pub type DynascopeResult<T> = Result<T, DynascopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_render_io_error_with_path() {
        let err = DynascopeError::io(
            "/tmp/missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.to_string(), "i/o failure on /tmp/missing.txt: gone");
    }

    #[test]
    fn test_should_render_store_error_with_operation() {
        let err = DynascopeError::store("DescribeTable", "table not found");
        assert_eq!(
            err.to_string(),
            "store DescribeTable failed: table not found"
        );
    }
}
