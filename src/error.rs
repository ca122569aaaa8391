//! Error types for the resource pack report generator.

use thiserror::Error;

/// Result type alias using ReportError.
pub type Result<T> = std::result::Result<T, ReportError>;

/// Main error type for report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to read or parse a ZIP archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid resource pack structure.
    #[error("Invalid resource pack: {0}")]
    InvalidResourcePack(String),

    /// Configuration file is present but not usable.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// HTML template is missing a required placeholder.
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// No archives found, or none containing item definitions.
    #[error("No usable input: {0}")]
    NoUsableInput(String),
}
