use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GREY: Rgb = Rgb::new(125, 125, 125);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const DARK_RED: Rgb = Rgb::new(150, 0, 0);
    pub const DARK_BLUE: Rgb = Rgb::new(0, 0, 125);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// All three channels set to the same value.
    pub const fn grey(level: u8) -> Self {
        Self::new(level, level, level)
    }
}

/// Formats as a CSS/SVG functional color, e.g. `rgb(125,125,125)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

/// The two color tables the renderer knows about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PalettePreset {
    /// Black, grey and white, as on the device screen.
    #[default]
    Monochrome,
    /// Colors suited to marking up a background document.
    Annotation,
}

/// Palette index that always resolves to white; the eraser draws with it.
pub const WHITE_INDEX: u32 = 2;
/// Annotation palette index used for highlighter strokes.
pub const ANNOTATION_HIGHLIGHT_INDEX: u32 = 3;
/// Annotation palette index used for ballpoint strokes.
pub const ANNOTATION_BALLPOINT_INDEX: u32 = 4;

/// Maps a stroke's color index to a concrete color.
///
/// The palette is an explicit value threaded through rendering, so choosing
/// a preset can never race with resolving a stroke's color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    preset: PalettePreset,
    colors: IndexMap<u32, Rgb>,
}

impl Palette {
    pub fn new(preset: PalettePreset) -> Self {
        let colors: IndexMap<u32, Rgb> = match preset {
            PalettePreset::Monochrome => [(0, Rgb::BLACK), (1, Rgb::GREY), (2, Rgb::WHITE)]
                .into_iter()
                .collect(),
            PalettePreset::Annotation => [
                (0, Rgb::BLACK),
                (1, Rgb::RED),
                (2, Rgb::WHITE),
                (3, Rgb::DARK_RED),
                (4, Rgb::DARK_BLUE),
            ]
            .into_iter()
            .collect(),
        };
        Self { preset, colors }
    }

    pub fn monochrome() -> Self {
        Self::new(PalettePreset::Monochrome)
    }

    pub fn annotation() -> Self {
        Self::new(PalettePreset::Annotation)
    }

    /// Selects the preset from the "coloured annotations" flag.
    pub fn from_coloured_annotations(coloured: bool) -> Self {
        if coloured {
            Self::annotation()
        } else {
            Self::monochrome()
        }
    }

    pub fn preset(&self) -> PalettePreset {
        self.preset
    }

    pub fn is_annotation(&self) -> bool {
        self.preset == PalettePreset::Annotation
    }

    /// Exact lookup; `None` for an index the preset does not define.
    pub fn get(&self, index: u32) -> Option<Rgb> {
        self.colors.get(&index).copied()
    }

    /// Entries in index order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, Rgb)> + '_ {
        self.colors.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::monochrome()
    }
}
