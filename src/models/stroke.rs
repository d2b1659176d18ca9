use serde::{Deserialize, Serialize};

use crate::models::pen::PenKind;

/// One raw sample of a stroke, exactly as stored in the file.
///
/// All fields are `f32` because that is the on-disk representation. The
/// physical fields (`speed`, `tilt`, `width`, `pressure`) are already
/// normalized by the device firmware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Zero-based index of the sample within its stroke.
    pub id: usize,
    /// Horizontal position in device units (native canvas is 1404 wide).
    pub x: f32,
    /// Vertical position in device units (native canvas is 1872 high).
    pub y: f32,
    pub speed: f32,
    pub tilt: f32,
    pub width: f32,
    pub pressure: f32,
}

/// A stroke drawn with one pen. Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    /// Zero-based index of the stroke within its layer.
    pub id: usize,
    /// The raw pen code as stored in the file.
    pub pen_code: u32,
    /// Index into the active color palette.
    pub color: u32,
    /// Reserved header word, preserved for re-encoding.
    pub reserved: u32,
    /// Base width as declared by the device.
    pub width: f32,
    /// Only present in version 5 files; meaning undocumented.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<f32>,
    /// Stroke level opacity.
    pub opacity: f32,
    /// Raw samples in recording order. Order is significant.
    pub segments: Vec<Segment>,
}

impl Stroke {
    /// The pen behavior selected by this stroke's pen code.
    pub fn pen(&self) -> PenKind {
        PenKind::from_code(self.pen_code)
    }
}
