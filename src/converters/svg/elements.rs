//! Writes rendered strokes as SVG `<polyline>` elements.

use log::debug;

use super::{
    error::Result,
    utils::{escape_comment, format_opacity, format_width, write_points},
};
use crate::converters::render::{RenderOptions, RenderSegment, StrokeRenderer};
use crate::models::Stroke;
use std::fmt::Write;

const INDENT: &str = "        ";

/// Writes one `<polyline>` for a rendered piece.
pub(crate) fn write_polyline(out: &mut String, piece: &RenderSegment) -> Result<()> {
    write!(
        out,
        r#"{INDENT}<polyline style="fill:none;stroke:{};stroke-width:{};opacity:{}" stroke-linecap="{}" points=""#,
        piece.color,
        format_width(piece.width),
        format_opacity(piece.opacity),
        piece.cap.as_svg(),
    )?;
    write_points(out, &piece.points)?;
    writeln!(out, r#""/>"#)?;
    Ok(())
}

/// Writes a stroke: a comment naming the pen, then one polyline per piece.
///
/// Returns the number of polylines written.
pub(crate) fn write_stroke(
    out: &mut String,
    stroke: &Stroke,
    options: &RenderOptions,
) -> Result<usize> {
    let renderer = StrokeRenderer::new(stroke, options);
    writeln!(
        out,
        r#"{INDENT}<!-- stroke: {} pen: "{}" -->"#,
        stroke.id,
        escape_comment(renderer.pen_kind().name())
    )?;

    let mut count = 0;
    for piece in renderer {
        write_polyline(out, &piece)?;
        count += 1;
    }
    if count == 0 {
        debug!("Stroke {} has no segments, nothing drawn", stroke.id);
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::render::Point;
    use crate::models::pen::LineCap;
    use crate::models::Rgb;

    #[test]
    fn polyline_markup() {
        let piece = RenderSegment {
            points: vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
            color: Rgb::new(10, 20, 30),
            width: 2.5,
            opacity: 0.3,
            cap: LineCap::Square,
        };
        let mut out = String::new();
        write_polyline(&mut out, &piece).unwrap();
        assert_eq!(
            out,
            "        <polyline style=\"fill:none;stroke:rgb(10,20,30);stroke-width:2.500;opacity:0.3\" \
             stroke-linecap=\"square\" points=\"1.000,2.000 3.000,4.000 \"/>\n"
        );
    }
}
