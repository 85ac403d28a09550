//! Error types for the stamp reporting system.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Data-quality problems in the stamps themselves are never errors: the
//! corrector repairs them and records notifications instead.

use thiserror::Error;

/// The main error type for the stamp reporting system.
///
/// # Example
///
/// ```
/// use stamp_reports::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/reporting.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/reporting.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A caller-supplied argument was rejected.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// The name of the rejected argument.
        argument: String,
        /// A description of why the argument was rejected.
        message: String,
    },

    /// The stamp store could not supply the requested stamps.
    #[error("Stamp store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidArgument`].
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
