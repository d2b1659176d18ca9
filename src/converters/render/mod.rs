//! Turns decoded strokes into styled polyline pieces.
//!
//! Each stroke is walked in groups of `stride` raw segments. The first
//! segment of a group defines the group's color, width and opacity (using the
//! previous group's width as feedback), and every segment of the group becomes
//! a point of the same polyline. A group's polyline starts with the last point
//! of the previous group so the pieces join up visually.

mod pens;
mod transform;

pub use pens::{clamp01, PenStyle, Sample, HIGHLIGHTER_WIDTH, STATIC_STRIDE};
pub use transform::{CanvasTransform, Point, NATIVE_HEIGHT, NATIVE_WIDTH};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, RmToolsError};
use crate::models::pen::LineCap;
use crate::models::{Palette, Page, PenKind, Rgb, Segment, Stroke};

/// Output size and palette for a render. Built with [`RenderOptionsBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    width: f64,
    height: f64,
    palette: Palette,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn transform(&self) -> CanvasTransform {
        CanvasTransform::new(self.width, self.height)
    }
}

impl Default for RenderOptions {
    /// The native canvas size with the monochrome palette.
    fn default() -> Self {
        Self {
            width: NATIVE_WIDTH,
            height: NATIVE_HEIGHT,
            palette: Palette::monochrome(),
        }
    }
}

/// Builder for [`RenderOptions`].
#[derive(Default)]
pub struct RenderOptionsBuilder {
    width: Option<f64>,
    height: Option<f64>,
    coloured_annotations: bool,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the output width; defaults to the native 1404.
    pub fn set_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the output height; defaults to the native 1872.
    pub fn set_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Selects the annotation palette instead of the monochrome one.
    pub fn set_coloured_annotations(mut self, coloured: bool) -> Self {
        self.coloured_annotations = coloured;
        self
    }

    /// Builds the options. Returns an error for a non-finite or non-positive size.
    pub fn build(self) -> Result<RenderOptions> {
        let width = self.width.unwrap_or(NATIVE_WIDTH);
        let height = self.height.unwrap_or(NATIVE_HEIGHT);
        for (name, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(RmToolsError::InvalidInput(format!(
                    "output {} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        Ok(RenderOptions {
            width,
            height,
            palette: Palette::from_coloured_annotations(self.coloured_annotations),
        })
    }
}

/// One styled polyline piece of a stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSegment {
    pub points: Vec<Point>,
    pub color: Rgb,
    pub width: f64,
    pub opacity: f64,
    pub cap: LineCap,
}

/// Lazily renders one stroke. Each call to `next` consumes one stride of
/// raw segments; the iterator is finite and cannot be restarted.
pub struct StrokeRenderer<'a> {
    pen: PenStyle,
    groups: std::slice::Chunks<'a, Segment>,
    transform: CanvasTransform,
    last_point: Option<Point>,
    last_width: f64,
}

impl<'a> StrokeRenderer<'a> {
    pub fn new(stroke: &'a Stroke, options: &RenderOptions) -> Self {
        let pen = PenStyle::resolve(stroke, options.palette());
        debug!(
            "Rendering stroke {} ({}, {} segment(s), stride {})",
            stroke.id,
            pen.kind.name(),
            stroke.segments.len(),
            pen.segment_stride()
        );
        let stride = pen.segment_stride();
        Self {
            pen,
            groups: stroke.segments.chunks(stride),
            transform: options.transform(),
            last_point: None,
            last_width: 0.0,
        }
    }

    pub fn pen(&self) -> &PenStyle {
        &self.pen
    }

    pub fn pen_kind(&self) -> PenKind {
        self.pen.kind
    }
}

impl Iterator for StrokeRenderer<'_> {
    type Item = RenderSegment;

    fn next(&mut self) -> Option<RenderSegment> {
        let group = self.groups.next()?;
        let first = group.first()?;

        let sample = Sample::from(first);
        let width = self.pen.segment_width(&sample, self.last_width);
        let color = self.pen.segment_color(&sample, self.last_width);
        let opacity = self.pen.segment_opacity(&sample, self.last_width);
        self.last_width = width;

        let mut points = Vec::with_capacity(group.len() + 1);
        points.extend(self.last_point);
        points.extend(group.iter().map(|s| self.transform.apply(s.x, s.y)));
        self.last_point = points.last().copied();

        Some(RenderSegment {
            points,
            color,
            width,
            opacity,
            cap: self.pen.cap(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.groups.size_hint()
    }
}

/// Renders a single stroke.
pub fn render_stroke<'a>(stroke: &'a Stroke, options: &RenderOptions) -> StrokeRenderer<'a> {
    StrokeRenderer::new(stroke, options)
}

/// Renders a whole page, stroke after stroke, in layer order.
pub fn render_page<'a>(
    page: &'a Page,
    options: &'a RenderOptions,
) -> impl Iterator<Item = RenderSegment> + 'a {
    page.strokes()
        .flat_map(move |stroke| StrokeRenderer::new(stroke, options))
}
