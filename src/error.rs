//! Error types for keactl
//!
//! Provides a unified error type for all operations. Every failure a caller
//! can observe falls into exactly one of these classes; nothing from the
//! HTTP layer leaks through unclassified.

use thiserror::Error;

/// Result type alias using KeaError
pub type Result<T> = std::result::Result<T, KeaError>;

/// Unified error type for keactl operations
#[derive(Debug, Error)]
pub enum KeaError {
    // -------------------------------------------------------------------------
    // Local Validation Errors (raised before any network call)
    // -------------------------------------------------------------------------
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    // -------------------------------------------------------------------------
    // Envelope Errors
    // -------------------------------------------------------------------------
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Remote Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Remote operation failed (result {code}): {text}")]
    Remote { code: i64, text: String },

    #[error("Not found: {0}")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KeaError {
    /// True for the distinguished "not found" classification
    pub fn is_not_found(&self) -> bool {
        matches!(self, KeaError::NotFound(_))
    }

    /// True for errors raised by local input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, KeaError::Validation(_))
    }
}

/// Caller-supplied identifying fields that failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid IP address: {0:?}")]
    InvalidAddress(String),

    #[error("invalid hardware address: {0:?}")]
    InvalidHardwareAddress(String),

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("invalid prefix or range: {0:?}")]
    InvalidPrefix(String),
}

/// Network-level failures of the HTTP exchange
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("host unreachable: {0}")]
    Unreachable(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected HTTP status {code}: {body}")]
    Status { code: u16, body: String },

    #[error("request failed: {0}")]
    Request(String),
}

impl From<serde_json::Error> for KeaError {
    fn from(err: serde_json::Error) -> Self {
        KeaError::Serialization(err.to_string())
    }
}
