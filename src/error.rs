use thiserror::Error;

/// Unified error type for git-versioning operations
#[derive(Error, Debug)]
pub enum VersioningError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown release mode: '{0}'")]
    UnknownReleaseMode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-versioning
pub type Result<T> = std::result::Result<T, VersioningError>;

impl VersioningError {
    /// Create an invalid argument error with context
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        VersioningError::InvalidArgument(msg.into())
    }

    /// Create an unknown release mode error for the given name
    pub fn unknown_release_mode(name: impl Into<String>) -> Self {
        VersioningError::UnknownReleaseMode(name.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersioningError::Config(msg.into())
    }
}

impl From<toml::de::Error> for VersioningError {
    fn from(err: toml::de::Error) -> Self {
        VersioningError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VersioningError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VersioningError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("snapshot = ").unwrap_err();
        let err: VersioningError = toml_err.into();
        assert!(matches!(err, VersioningError::Config(_)));
    }

    #[test]
    fn test_unknown_release_mode_quotes_name() {
        let err = VersioningError::unknown_release_mode("nightly");
        assert_eq!(err.to_string(), "Unknown release mode: 'nightly'");
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VersioningError::invalid_argument("x"), "Invalid argument"),
            (VersioningError::unknown_release_mode("x"), "Unknown release mode"),
            (VersioningError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            VersioningError::invalid_argument(""),
            VersioningError::config(""),
        ];

        for err in errors {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }
}
