//! Error types for pushbeat
//!
//! Uses `thiserror` for ergonomic error handling with automatic `Display` and
//! `Error` trait implementations. Only startup configuration problems are ever
//! fatal; everything that goes wrong during a push cycle is folded into the
//! per-attempt outcome instead.

use thiserror::Error;

/// The primary error type for push operations.
#[derive(Error, Debug)]
pub enum PushError {
    /// Configuration-related errors (invalid URL, bad interval, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request errors (request construction, transport failures)
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// A specialized `Result` type for push operations.
pub type Result<T> = std::result::Result<T, PushError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PushError::Config("interval must be non-negative".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: interval must be non-negative"
        );
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }
}
