//! Conversion of decoded pages into drawable output.
//!
//! [`render`] is the pen model producing styled polyline pieces; [`svg`]
//! serializes those pieces as an SVG document.

pub mod render;
pub mod svg;

pub use render::{render_page, render_stroke, RenderOptions, RenderOptionsBuilder, RenderSegment};
pub use svg::{convert_page_to_svg, lines_to_svg};
