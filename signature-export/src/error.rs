//! Export error types.

use signature_core::SignatureError;
use thiserror::Error;

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while exporting a drawing.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Export configuration is unusable.
    #[error("Invalid export configuration: {0}")]
    InvalidConfig(String),

    /// The drawing's style is unusable.
    #[error(transparent)]
    Style(#[from] SignatureError),

    /// Format not compiled into this build.
    #[error("Unsupported export format: {0}")]
    Unsupported(String),

    /// Rasterization or encoding failed.
    #[error("Export failed: {0}")]
    Export(String),
}
