//! Errors produced while converting colors.

use thiserror::Error;

/// Errors produced by color conversions.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A string was not `#` followed by exactly 6 hexadecimal digits.
    #[error("invalid hex color format: {0:?}")]
    InvalidFormat(String),
}

/// Result type for fallible color conversions.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_includes_input() {
        let err = Error::InvalidFormat("#ff00".into());
        let msg = format!("{err}");
        assert!(msg.contains("#ff00"), "missing input in: {msg}");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }

    #[test]
    fn error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<Error>();
    }
}
