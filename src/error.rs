//! Error types for ex-command.
//!
//! Defines the main error enum used throughout the crate. An unknown command
//! is not an error: the parser reports it as an absent result.

use thiserror::Error;

/// Main error type for ex-command operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExError {
    /// The command line does not begin with the `:` marker.
    #[error("Malformed command line: {0}")]
    MalformedMarker(String),

    /// Configuration errors (unreadable file, invalid command entries, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A log subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

impl ExError {
    /// Creates a malformed-marker error for the given input line.
    pub fn malformed_marker(line: impl Into<String>) -> Self {
        Self::MalformedMarker(line.into())
    }

    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a logging error with the given message.
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::MalformedMarker(_) => "Input Error",
            Self::Config(_) => "Configuration Error",
            Self::Logging(_) => "Logging Error",
        }
    }
}

/// Result type alias using ExError.
pub type Result<T> = std::result::Result<T, ExError>;
