use thiserror::Error;

use crate::converters::svg::SvgConversionError;
use crate::lines::FormatError;

/// Errors surfaced by the public entry points of this crate.
#[derive(Error, Debug)]
pub enum RmToolsError {
    /// The `.lines` byte stream is malformed. Never retried.
    #[error("Invalid .lines data: {0}")]
    Format(#[from] FormatError),

    /// Writing the SVG document failed.
    #[error("SVG conversion failed: {0}")]
    Svg(#[from] SvgConversionError),

    /// A `.metadata` or `.content` sidecar could not be parsed.
    #[error("Failed to parse JSON sidecar: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while reading input or writing output files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input was provided to a function (bad option, unknown format version, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A type alias for `Result<T, RmToolsError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, RmToolsError>;
