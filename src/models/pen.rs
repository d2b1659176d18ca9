use serde::{Deserialize, Serialize};

/// The pen behavior a stroke was drawn with.
///
/// The device has renumbered its tools across firmware releases, so most
/// variants answer to two codes: the legacy one and the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PenKind {
    /// Codes 0 and 12.
    Brush,
    /// Codes 1 and 14.
    Pencil,
    /// Codes 2 and 15.
    Ballpoint,
    /// Codes 3 and 16.
    Marker,
    /// Codes 4 and 17.
    Fineliner,
    /// Codes 5 and 18.
    Highlighter,
    /// Code 6.
    Eraser,
    /// Codes 7 and 13.
    MechanicalPencil,
    /// Code 8. Marks a deleted region; never visible.
    EraseArea,
    /// Code 21.
    Calligraphy,
    /// Any code not listed above, carrying the raw value.
    Unsupported(u32),
}

impl PenKind {
    /// Resolves a raw pen code. Never fails: unknown codes map to `Unsupported`.
    pub fn from_code(code: u32) -> Self {
        match code {
            0 | 12 => PenKind::Brush,
            1 | 14 => PenKind::Pencil,
            2 | 15 => PenKind::Ballpoint,
            3 | 16 => PenKind::Marker,
            4 | 17 => PenKind::Fineliner,
            5 | 18 => PenKind::Highlighter,
            6 => PenKind::Eraser,
            7 | 13 => PenKind::MechanicalPencil,
            8 => PenKind::EraseArea,
            21 => PenKind::Calligraphy,
            other => PenKind::Unsupported(other),
        }
    }

    /// Human readable tool name, as used in SVG comments and logs.
    pub fn name(&self) -> &'static str {
        match self {
            PenKind::Brush => "Brush",
            PenKind::Pencil => "Pencil",
            PenKind::Ballpoint => "Ballpoint",
            PenKind::Marker => "Marker",
            PenKind::Fineliner => "Fineliner",
            PenKind::Highlighter => "Highlighter",
            PenKind::Eraser => "Eraser",
            PenKind::MechanicalPencil => "Mechanical Pencil",
            PenKind::EraseArea => "Erase Area",
            PenKind::Calligraphy => "Calligraphy",
            PenKind::Unsupported(_) => "Unsupported",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, PenKind::Unsupported(_))
    }
}

/// Shape drawn at the open ends of a polyline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl LineCap {
    /// Value for the SVG `stroke-linecap` attribute.
    pub fn as_svg(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}
