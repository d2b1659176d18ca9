//! Converts a decoded page into a Scalable Vector Graphics (SVG) document.
//!
//! # Current Features & Limitations:
//! *   One SVG document per page, sized to the requested output size.
//! *   Every rendered piece of a stroke becomes one `<polyline>` with its own
//!     color, width, opacity and line cap.
//! *   Layers and strokes are annotated with comments naming the pen.
//! *   No blur or texture effects; pencil grain is approximated with opacity only.

// Declare the submodules
mod constants;
mod elements;
mod error;
mod structure;
mod utils;

// Re-export the main error type and result alias for consumers of this module
pub use error::{Result, SvgConversionError};

use crate::converters::render::RenderOptions;
use crate::errors::Result as CrateResult;
use crate::lines::decode;
use crate::models::Page;
use structure::write_document;

/// Converts a decoded `Page` into one SVG document.
///
/// # Arguments
/// * `page` - The decoded page.
/// * `options` - Output size and palette.
///
/// # Returns
/// The SVG markup, ending with `</svg>` and a newline.
pub fn convert_page_to_svg(page: &Page, options: &RenderOptions) -> Result<String> {
    write_document(page, options)
}

/// Decodes a `.lines` buffer and converts it to SVG in one step.
pub fn lines_to_svg(bytes: &[u8], options: &RenderOptions) -> CrateResult<String> {
    let page = decode(bytes)?;
    Ok(convert_page_to_svg(&page, options)?)
}
