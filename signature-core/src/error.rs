//! Error types for signature capture.

use thiserror::Error;

/// Result type for signature operations.
pub type SignatureResult<T> = Result<T, SignatureError>;

/// Errors that can occur while capturing a signature.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// A stroke was started while another one was still active.
    ///
    /// Only a single simultaneous contact is supported, so this usually means
    /// a second finger touched down.
    #[error("Stroke already active: overlapping contacts are not supported")]
    StrokeAlreadyActive,

    /// A host-supplied coordinate is NaN or infinite.
    #[error("Invalid point: ({0})")]
    InvalidPoint(String),

    /// A host-supplied touch phase could not be recognized.
    #[error("Invalid touch phase: {0}")]
    InvalidPhase(String),

    /// The style configuration is unusable.
    #[error("Invalid style: {0}")]
    InvalidStyle(String),

    /// Drawing or style serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
