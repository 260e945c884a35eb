//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint version is not supported by this version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint names a state the table does not know
    #[error("Checkpoint state '{0}' does not exist in this table")]
    UnknownState(String),

    /// The saved tape holds symbols outside the table's alphabet
    #[error("Checkpoint tape is invalid: {0}")]
    InvalidTape(#[from] crate::engine::RunError),
}
