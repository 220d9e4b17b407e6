//! Error types for QuillKV
//!
//! Provides a unified error type for all client operations, plus the
//! input-level errors raised while parsing a command line.

use thiserror::Error;

/// Result type alias using QuillError
pub type Result<T> = std::result::Result<T, QuillError>;

/// Unified error type for QuillKV operations
#[derive(Debug, Error)]
pub enum QuillError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Parse(#[from] ParseError),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Errors produced while turning a command line into a request.
///
/// Every variant is local to one input line; the caller reports it and
/// moves on to the next line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unmatched quotes in input")]
    UnmatchedQuotes,

    #[error("no command entered")]
    NoCommand,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Fewer tokens than the command's minimum arity
    #[error("{command} requires {usage}")]
    MissingArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// Arguments given to a command that takes none
    #[error("{0} does not require any arguments")]
    UnexpectedArguments(&'static str),

    #[error("invalid expiry value: {0}")]
    InvalidExpiry(String),
}
