use thiserror::Error;

/// Why a byte buffer could not be decoded as a `.lines` page.
///
/// Every variant is fatal: no partial page is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Fewer bytes than the fixed header (magic + layer count).
    #[error("file too short to be a valid .lines file: {len} bytes, need at least {needed}")]
    TooShort { len: usize, needed: usize },

    /// The magic string matches neither supported version.
    #[error("not a supported .lines file: expected header {expected}, found {found:?}")]
    BadHeader { expected: String, found: String },

    /// The header declares no layers.
    #[error("invalid layer count {0}, a page has at least one layer")]
    InvalidLayerCount(u32),

    /// A fixed-size record runs past the end of the buffer.
    #[error("truncated {record} at offset {offset}: need {needed} bytes, {available} remaining")]
    Truncated {
        record: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },
}

/// A specialized Result type for decoding operations.
pub type Result<T> = std::result::Result<T, FormatError>;
