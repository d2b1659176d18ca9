//! Handles the overall document structure: the root `<svg>` element, the
//! page group, one comment per layer and the page-flip overlay.

use log::info;

use super::{
    constants::*,
    elements::write_stroke,
    error::Result,
};
use crate::converters::render::RenderOptions;
use crate::models::{Layer, Page};
use std::fmt::Write;

fn write_layer(out: &mut String, layer: &Layer, options: &RenderOptions) -> Result<usize> {
    writeln!(out, "        <!-- layer: {} -->", layer.id)?;
    let mut polylines = 0;
    for stroke in &layer.strokes {
        polylines += write_stroke(out, stroke, options)?;
    }
    Ok(polylines)
}

/// Writes the complete SVG document for one page.
pub(crate) fn write_document(page: &Page, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        r#"<svg xmlns="{}" height="{}" width="{}">"#,
        SVG_NAMESPACE,
        options.height(),
        options.width()
    )?;
    out.push_str(PAGE_SCRIPT);
    writeln!(out, r#"    <g id="{}" style="display:inline">"#, PAGE_GROUP_ID)?;

    let mut polylines = 0;
    for layer in &page.layers {
        polylines += write_layer(&mut out, layer, options)?;
    }

    // Transparent overlay, so the page stays clickable for page flipping.
    writeln!(out)?;
    writeln!(
        out,
        r#"        <rect x="0" y="0" width="{}" height="{}" fill-opacity="0"/>"#,
        options.width(),
        options.height()
    )?;
    writeln!(out, "    </g>")?;
    writeln!(out, "</svg>")?;

    info!(
        "Wrote SVG page: {} layer(s), {} stroke(s), {} polyline(s)",
        page.layers.len(),
        page.stroke_count(),
        polylines
    );
    Ok(out)
}
