// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur while feeding, navigating,
//! and coercing configuration values. All errors use `thiserror` for proper error
//! handling and conversion.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// Lookup and coercion failures are ordinary values the caller can recover from.
/// Only [`ConfigError::FeedError`] is produced while constructing a store, and it
/// leaves no store behind. The enum is marked `#[non_exhaustive]` to allow for
/// future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use feedcfg::domain::errors::ConfigError;
///
/// fn get_config_value() -> Result<String, ConfigError> {
///     Err(ConfigError::NotFound {
///         path: "database.host".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A feeder failed to produce its data while the store was being built.
    #[error("Feeder '{feeder}' failed: {source}")]
    FeedError {
        /// The name of the feeder that failed
        feeder: String,
        /// The underlying cause
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A path segment does not exist in the configuration tree.
    #[error("Configuration path not found: {path}")]
    NotFound {
        /// The full path that was requested
        path: String,
    },

    /// A path segment could not be used against the node it addresses.
    #[error("Invalid segment '{segment}' in configuration path '{path}'")]
    InvalidPath {
        /// The full path that was requested
        path: String,
        /// The offending segment
        segment: String,
    },

    /// A numeric segment is beyond the bounds of a sequence.
    #[error("Index {index} out of range for sequence of length {len} in path '{path}'")]
    IndexOutOfRange {
        /// The full path that was requested
        path: String,
        /// The requested index
        index: usize,
        /// The length of the sequence
        len: usize,
    },

    /// The value at a path cannot be converted to the requested type.
    #[error("Value at '{path}' is {found}, expected {expected}")]
    TypeMismatch {
        /// The path of the value being converted
        path: String,
        /// The requested type
        expected: String,
        /// The kind of the value that was found
        found: String,
        /// The underlying conversion error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A feeder could not reach its underlying data.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse configuration file content.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a `TypeMismatch` without an underlying cause.
    pub fn mismatch(path: &str, expected: &str, found: &str) -> Self {
        ConfigError::TypeMismatch {
            path: path.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
            source: None,
        }
    }

    /// Creates a `TypeMismatch` that wraps a parsing or conversion error.
    pub fn mismatch_with<E>(path: &str, expected: &str, found: &str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::TypeMismatch {
            path: path.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Returns `true` if this error came from path navigation rather than coercion.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            ConfigError::NotFound { .. }
                | ConfigError::InvalidPath { .. }
                | ConfigError::IndexOutOfRange { .. }
        )
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = ConfigError::NotFound {
            path: "test.key".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration path not found: test.key");
        assert!(error.is_lookup_error());
    }

    #[test]
    fn test_invalid_path_error() {
        let error = ConfigError::InvalidPath {
            path: "numbers.x".to_string(),
            segment: "x".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid segment 'x' in configuration path 'numbers.x'"
        );
    }

    #[test]
    fn test_index_out_of_range_error() {
        let error = ConfigError::IndexOutOfRange {
            path: "numbers.9".to_string(),
            index: 9,
            len: 3,
        };
        assert!(error.to_string().contains("Index 9"));
        assert!(error.to_string().contains("length 3"));
        assert!(error.is_lookup_error());
    }

    #[test]
    fn test_type_mismatch_error() {
        let source_error = "invalid value".parse::<i64>().unwrap_err();
        let error = ConfigError::mismatch_with("test.key", "integer", "string", source_error);
        assert!(error.to_string().contains("test.key"));
        assert!(error.to_string().contains("integer"));
        assert!(std::error::Error::source(&error).is_some());
        assert!(!error.is_lookup_error());
    }

    #[test]
    fn test_type_mismatch_without_source() {
        let error = ConfigError::mismatch("a", "float", "mapping");
        assert_eq!(error.to_string(), "Value at 'a' is mapping, expected float");
        assert!(std::error::Error::source(&error).is_none());
    }

    #[test]
    fn test_feed_error_wraps_cause() {
        let cause = ConfigError::ParseError {
            message: "Invalid JSON".to_string(),
            source: None,
        };
        let error = ConfigError::FeedError {
            feeder: "json-file".to_string(),
            source: Box::new(cause),
        };
        assert_eq!(
            error.to_string(),
            "Feeder 'json-file' failed: Failed to parse configuration: Invalid JSON"
        );
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_source_error() {
        let error = ConfigError::SourceError {
            source_name: "json-file".to_string(),
            message: "Failed to read file".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "Configuration source 'json-file' error: Failed to read file"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ConfigError::from(io_error);
        assert!(matches!(error, ConfigError::IoError(_)));
    }
}
