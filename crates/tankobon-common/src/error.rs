//! Common error types used throughout tankobon.
//!
//! The parsing engine itself never fails on malformed input data; these errors
//! cover the collaborators around it (reading files, loading archives).

/// Common error type for tankobon.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested file or archive entry was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("ComicInfo.xml");
        assert_eq!(err.to_string(), "Not found: ComicInfo.xml");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_result_type() {
        fn error_fn() -> Result<i32> {
            Err(Error::not_found("x"))
        }
        assert!(error_fn().is_err());
    }
}
