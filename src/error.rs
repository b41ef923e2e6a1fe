use std::path::PathBuf;
use thiserror::Error;

/// Why a single file produced no metadata.
///
/// These never abort a run: the extractor logs them and hands back `None`.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Path is a directory, not a file: {}", .0.display())]
    IsDirectory(PathBuf),

    /// Holds the extension with its leading dot, or `(none)`.
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    /// The parser's error, with its whole context chain.
    #[error("{0:#}")]
    Parse(anyhow::Error),
}

/// Errors that end the whole invocation with a non-zero exit code.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("No image files specified")]
    NoFiles,

    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Whether the usage text should follow the diagnostic.
    pub fn shows_usage(&self) -> bool {
        matches!(self, Self::NoFiles)
    }
}
