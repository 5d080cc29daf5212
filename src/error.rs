//! Error types for pagewise
//!
//! The pagination engine itself never fails: malformed query input degrades
//! to defaults and bad cursors decode to `None`. Errors only surface from the
//! edges of the crate (configuration loading, URL handling and the CLI).

use thiserror::Error;

/// The main error type for pagewise
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Invalid cursor: {cursor}")]
    InvalidCursor { cursor: String },

    #[error("Invalid timestamp '{value}': {message}")]
    InvalidTimestamp { value: String, message: String },

    #[error("Invalid number '{value}': {message}")]
    InvalidNumber { value: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid cursor error
    pub fn invalid_cursor(cursor: impl Into<String>) -> Self {
        Self::InvalidCursor {
            cursor: cursor.into(),
        }
    }

    /// Create an invalid timestamp error
    pub fn invalid_timestamp(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidNumber {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Check if this error was caused by caller input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCursor { .. }
                | Error::InvalidTimestamp { .. }
                | Error::InvalidNumber { .. }
                | Error::InvalidUrl(_)
        )
    }
}

/// Result type alias for pagewise
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
