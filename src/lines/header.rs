//! The fixed file header: an ASCII magic string, space padded, followed by
//! the `u32` layer count.
//!
//! The canonical magic is 45 bytes long. Device firmware writes the same text
//! with two fewer trailing spaces (43 bytes); both layouts are accepted. The
//! two cannot be confused in practice: reading a 43-byte header as a 45-byte
//! one would require the layer count's two low bytes to both be `0x20`.

use serde::{Deserialize, Serialize};

/// Canonical magic string of a version 3 file.
pub const HEADER_V3: &[u8; HEADER_LEN] = b"reMarkable .lines file, version=3            ";
/// Canonical magic string of a version 5 file.
pub const HEADER_V5: &[u8; HEADER_LEN] = b"reMarkable .lines file, version=5            ";

/// Length of the canonical magic string.
pub const HEADER_LEN: usize = 45;
/// Length of the magic string as written by device firmware.
pub const COMPACT_HEADER_LEN: usize = 43;
/// Canonical magic string followed by the `u32` layer count.
pub const FIXED_HEADER_LEN: usize = HEADER_LEN + 4;

/// Size in bytes of one segment record (six `f32`), identical in both versions.
pub const SEGMENT_RECORD_LEN: usize = 6 * 4;

/// The supported on-disk format versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Version {
    V3,
    V5,
}

impl Version {
    pub fn magic(&self) -> &'static [u8; HEADER_LEN] {
        match self {
            Version::V3 => HEADER_V3,
            Version::V5 => HEADER_V5,
        }
    }

    /// Size in bytes of one stroke header record.
    pub fn stroke_record_len(&self) -> usize {
        match self {
            // pen, color, reserved, width, nsegments
            Version::V3 => 5 * 4,
            // pen, color, reserved, width, extra, nsegments
            Version::V5 => 6 * 4,
        }
    }

    pub fn number(&self) -> u32 {
        match self {
            Version::V3 => 3,
            Version::V5 => 5,
        }
    }
}

/// Identifies the version from the start of a buffer.
///
/// Returns the version and the length of the magic string that matched.
/// Matching is exact: a prefix that is not byte-for-byte one of the
/// supported literals yields `None`.
pub fn match_magic(bytes: &[u8]) -> Option<(Version, usize)> {
    for version in [Version::V3, Version::V5] {
        let magic = version.magic();
        if bytes.len() >= HEADER_LEN && &bytes[..HEADER_LEN] == magic {
            return Some((version, HEADER_LEN));
        }
        if bytes.len() >= COMPACT_HEADER_LEN
            && bytes[..COMPACT_HEADER_LEN] == magic[..COMPACT_HEADER_LEN]
        {
            return Some((version, COMPACT_HEADER_LEN));
        }
    }
    None
}

/// Human readable list of accepted headers, for error messages.
pub(crate) fn expected_headers() -> String {
    format!(
        "{:?} or {:?}",
        String::from_utf8_lossy(HEADER_V3),
        String::from_utf8_lossy(HEADER_V5)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_headers_are_45_bytes() {
        assert_eq!(HEADER_V3.len(), 45);
        assert_eq!(HEADER_V5.len(), 45);
        assert_eq!(FIXED_HEADER_LEN, 49);
    }

    #[test]
    fn matches_canonical_header() {
        let mut bytes = HEADER_V5.to_vec();
        bytes.extend_from_slice(&1u32.to_le_bytes());
        assert_eq!(match_magic(&bytes), Some((Version::V5, HEADER_LEN)));
    }

    #[test]
    fn matches_device_header() {
        let mut bytes = HEADER_V3[..COMPACT_HEADER_LEN].to_vec();
        bytes.extend_from_slice(&1u32.to_le_bytes());
        assert_eq!(match_magic(&bytes), Some((Version::V3, COMPACT_HEADER_LEN)));
    }

    #[test]
    fn rejects_other_versions() {
        let bytes = b"reMarkable .lines file, version=6            \x01\x00\x00\x00";
        assert_eq!(match_magic(bytes), None);
    }
}
