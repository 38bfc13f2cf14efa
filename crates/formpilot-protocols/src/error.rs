//! Error taxonomy.
//!
//! Structural mismatches inside the engine (missing labels, absent option
//! menus, unresolved write targets) are not errors - they degrade to empty
//! or false results. The enums here cover the genuinely fallible surfaces:
//! fixture parsing, request decoding, and the transport.

use thiserror::Error;

/// Document construction errors.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Fixture parse failed: {0}")]
    ParseFailed(String),

    #[error("Fixture has no nodes")]
    Empty,
}

/// Request dispatch errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Transport errors, surfaced to the caller of the push primitive only;
/// scan and write operations never depend on the transport succeeding.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Transport closed")]
    Closed,
}
