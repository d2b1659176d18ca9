//! Per-pen formulas turning raw samples into color, width and opacity.
//!
//! Every pen shares one contract: a segment stride, a cap style, a base
//! width/opacity/color fixed when the stroke starts, and three pure
//! functions of `(sample, last_width)`. Dispatch is a single `match` on
//! [`PenKind`]; pens without per-sample behavior fall through to the base
//! values.

use log::warn;

use crate::models::colors::{ANNOTATION_BALLPOINT_INDEX, ANNOTATION_HIGHLIGHT_INDEX, WHITE_INDEX};
use crate::models::pen::LineCap;
use crate::models::{Palette, PenKind, Rgb, Segment, Stroke};

/// Stride of pens whose style never changes along the stroke.
pub const STATIC_STRIDE: usize = 1000;
/// Fixed width of highlighter strokes.
pub const HIGHLIGHTER_WIDTH: f64 = 15.0;

/// Speed normalization used by the width formulas.
const WIDTH_SPEED_SCALE: f64 = 50.0;
/// Speed normalization used by the color and opacity formulas.
const SHADE_SPEED_SCALE: f64 = 35.0;

/// Clamps to `[0, 1]`. NaN maps to 0.
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// The raw physical fields of a sample, widened to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub speed: f64,
    pub tilt: f64,
    pub width: f64,
    pub pressure: f64,
}

impl From<&Segment> for Sample {
    fn from(segment: &Segment) -> Self {
        Self {
            speed: segment.speed as f64,
            tilt: segment.tilt as f64,
            width: segment.width as f64,
            pressure: segment.pressure as f64,
        }
    }
}

/// A pen resolved against one stroke and the active palette.
#[derive(Debug, Clone, PartialEq)]
pub struct PenStyle {
    pub kind: PenKind,
    pub base_width: f64,
    pub base_color: Rgb,
    pub base_opacity: f64,
}

impl PenStyle {
    /// Resolves the pen of `stroke`, applying the base width/opacity
    /// transforms and the palette special cases.
    pub fn resolve(stroke: &Stroke, palette: &Palette) -> Self {
        let kind = stroke.pen();
        let width = stroke.width as f64;

        let color_index = match kind {
            PenKind::Eraser => WHITE_INDEX,
            PenKind::Ballpoint if palette.is_annotation() => ANNOTATION_BALLPOINT_INDEX,
            PenKind::Highlighter if palette.is_annotation() => ANNOTATION_HIGHLIGHT_INDEX,
            _ => stroke.color,
        };
        let base_color = palette.get(color_index).unwrap_or_else(|| {
            warn!(
                "Stroke {}: color index {} is not in the {:?} palette, using index 0",
                stroke.id,
                color_index,
                palette.preset()
            );
            palette.get(0).unwrap_or(Rgb::BLACK)
        });

        let base_width = match kind {
            PenKind::Fineliner => width.powf(2.1) * 1.3,
            PenKind::MechanicalPencil => width * width,
            PenKind::Eraser => width * 2.0,
            PenKind::Highlighter => HIGHLIGHTER_WIDTH,
            _ => width,
        };

        let base_opacity = match kind {
            PenKind::Highlighter => 0.3,
            PenKind::MechanicalPencil => 0.7,
            PenKind::EraseArea | PenKind::Unsupported(_) => 0.0,
            _ => stroke.opacity as f64,
        };

        Self {
            kind,
            base_width,
            base_color,
            base_opacity,
        }
    }

    /// How many raw segments share one style before it is recomputed.
    pub fn segment_stride(&self) -> usize {
        match self.kind {
            PenKind::Brush | PenKind::Pencil | PenKind::Calligraphy => 2,
            PenKind::Marker => 3,
            PenKind::Ballpoint => 5,
            _ => STATIC_STRIDE,
        }
    }

    pub fn cap(&self) -> LineCap {
        match self.kind {
            PenKind::Highlighter | PenKind::Eraser | PenKind::EraseArea => LineCap::Square,
            _ => LineCap::Round,
        }
    }

    pub fn segment_width(&self, s: &Sample, last_width: f64) -> f64 {
        match self.kind {
            PenKind::Ballpoint => {
                (0.5 + s.pressure) + s.width - 0.5 * (s.speed / WIDTH_SPEED_SCALE)
            }
            PenKind::Marker => 0.9 * (s.width - 0.4 * s.tilt) + 0.1 * last_width,
            PenKind::Pencil => {
                let w = 0.7
                    * ((0.8 * self.base_width + 0.5 * s.pressure) * s.width
                        - 0.25 * s.tilt.max(0.0).powf(1.8)
                        - 0.6 * s.speed / WIDTH_SPEED_SCALE);
                w.min(self.base_width * 10.0)
            }
            PenKind::Brush => {
                0.7 * ((1.0 + 1.4 * s.pressure) * s.width
                    - 0.5 * s.tilt
                    - 0.5 * s.speed / WIDTH_SPEED_SCALE)
            }
            PenKind::Calligraphy => {
                0.9 * ((1.0 + s.pressure) * s.width - 0.3 * s.tilt) + 0.1 * last_width
            }
            _ => self.base_width,
        }
    }

    pub fn segment_color(&self, s: &Sample, _last_width: f64) -> Rgb {
        match self.kind {
            PenKind::Ballpoint => {
                let intensity =
                    clamp01(-0.1 * (s.speed / SHADE_SPEED_SCALE) + 1.2 * s.pressure + 0.5);
                Rgb::grey(channel((1.0 - intensity) * 255.0))
            }
            PenKind::Brush => {
                let intensity =
                    clamp01((s.pressure.powf(1.5) - 0.2 * (s.speed / WIDTH_SPEED_SCALE)) * 1.5);
                let rev = 1.0 - intensity;
                let c = self.base_color;
                Rgb::new(
                    channel(rev * (255.0 - c.red as f64)),
                    channel(rev * (255.0 - c.green as f64)),
                    channel(rev * (255.0 - c.blue as f64)),
                )
            }
            _ => self.base_color,
        }
    }

    /// Always within `[0, 1]`, also for non-finite samples.
    pub fn segment_opacity(&self, s: &Sample, _last_width: f64) -> f64 {
        let opacity = match self.kind {
            PenKind::Pencil => {
                clamp01(-0.1 * (s.speed / SHADE_SPEED_SCALE) + s.pressure) - 0.1
            }
            _ => self.base_opacity,
        };
        clamp01(opacity)
    }
}

/// Truncates toward zero into a color channel. NaN maps to 0.
fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke(pen_code: u32, color: u32, width: f32) -> Stroke {
        Stroke {
            id: 0,
            pen_code,
            color,
            reserved: 0,
            width,
            extra: None,
            opacity: 1.0,
            segments: Vec::new(),
        }
    }

    fn sample(speed: f64, tilt: f64, width: f64, pressure: f64) -> Sample {
        Sample {
            speed,
            tilt,
            width,
            pressure,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fineliner_width_is_power_law_of_base() {
        let pen = PenStyle::resolve(&stroke(4, 0, 2.0), &Palette::monochrome());
        let expected = 2.0f64.powf(2.1) * 1.3;
        assert!(close(pen.base_width, expected));
        let s = sample(30.0, 0.7, 3.0, 0.9);
        assert!(close(pen.segment_width(&s, 12.0), expected));
        assert_eq!(pen.segment_stride(), STATIC_STRIDE);
        assert_eq!(pen.cap(), LineCap::Round);
    }

    #[test]
    fn mechanical_pencil_squares_width() {
        let pen = PenStyle::resolve(&stroke(13, 1, 3.0), &Palette::monochrome());
        assert!(close(pen.base_width, 9.0));
        assert!(close(pen.segment_opacity(&sample(0.0, 0.0, 0.0, 0.0), 0.0), 0.7));
        assert_eq!(pen.base_color, Rgb::GREY);
    }

    #[test]
    fn ballpoint_formulas() {
        let pen = PenStyle::resolve(&stroke(2, 0, 2.0), &Palette::monochrome());
        assert_eq!(pen.segment_stride(), 5);
        let s = sample(50.0, 0.0, 1.0, 0.5);
        assert!(close(pen.segment_width(&s, 0.0), 0.5 + 0.5 + 1.0 - 0.5));
        // intensity = -0.1 * 50/35 + 0.6 + 0.5 = 0.957142...
        let intensity = -0.1 * (50.0 / 35.0) + 1.2 * 0.5 + 0.5;
        let level = ((1.0 - intensity) * 255.0) as u8;
        assert_eq!(pen.segment_color(&s, 0.0), Rgb::grey(level));
        // Saturated pressure gives full intensity, i.e. black.
        assert_eq!(pen.segment_color(&sample(0.0, 0.0, 1.0, 1.0), 0.0), Rgb::BLACK);
    }

    #[test]
    fn marker_blends_previous_width() {
        let pen = PenStyle::resolve(&stroke(16, 0, 2.0), &Palette::monochrome());
        assert_eq!(pen.segment_stride(), 3);
        let s = sample(0.0, 1.0, 5.0, 0.0);
        assert!(close(pen.segment_width(&s, 10.0), 0.9 * (5.0 - 0.4) + 1.0));
    }

    #[test]
    fn pencil_width_is_capped() {
        let pen = PenStyle::resolve(&stroke(1, 0, 1.0), &Palette::monochrome());
        let huge = sample(0.0, 0.0, 1000.0, 1.0);
        assert!(close(pen.segment_width(&huge, 0.0), 10.0));
        let s = sample(0.0, 1.0, 2.0, 0.5);
        let expected = 0.7 * ((0.8 + 0.25) * 2.0 - 0.25);
        assert!(close(pen.segment_width(&s, 0.0), expected));
    }

    #[test]
    fn pencil_opacity_stays_in_range() {
        let pen = PenStyle::resolve(&stroke(14, 0, 1.0), &Palette::monochrome());
        assert_eq!(pen.segment_opacity(&sample(100.0, 0.0, 1.0, 0.0), 0.0), 0.0);
        assert!(close(pen.segment_opacity(&sample(0.0, 0.0, 1.0, 0.6), 0.0), 0.5));
        assert!(close(pen.segment_opacity(&sample(0.0, 0.0, 1.0, 5.0), 0.0), 0.9));
    }

    #[test]
    fn pencil_nan_speed_is_transparent() {
        let pen = PenStyle::resolve(&stroke(1, 0, 2.0), &Palette::monochrome());
        let s = sample(f64::NAN, 0.0, 1.0, 0.5);
        assert_eq!(pen.segment_opacity(&s, 0.0), 0.0);
    }

    #[test]
    fn pencil_negative_tilt_counts_as_upright() {
        let pen = PenStyle::resolve(&stroke(1, 0, 1.0), &Palette::monochrome());
        let tilted = pen.segment_width(&sample(0.0, -0.5, 2.0, 0.5), 0.0);
        let upright = pen.segment_width(&sample(0.0, 0.0, 2.0, 0.5), 0.0);
        assert!(tilted.is_finite());
        assert!(close(tilted, upright));
    }

    #[test]
    fn brush_color_inverts_base_channels() {
        let pen = PenStyle::resolve(&stroke(0, 0, 2.0), &Palette::monochrome());
        assert_eq!(pen.segment_stride(), 2);
        assert_eq!(pen.segment_color(&sample(0.0, 0.0, 1.0, 0.0), 0.0), Rgb::WHITE);
        assert_eq!(pen.segment_color(&sample(0.0, 0.0, 1.0, 1.0), 0.0), Rgb::BLACK);
        let s = sample(50.0, 1.0, 2.0, 1.0);
        assert!(close(pen.segment_width(&s, 0.0), 0.7 * (2.4 * 2.0 - 0.5 - 0.5)));
    }

    #[test]
    fn calligraphy_width() {
        let pen = PenStyle::resolve(&stroke(21, 0, 2.0), &Palette::monochrome());
        let s = sample(0.0, 1.0, 2.0, 0.5);
        assert!(close(pen.segment_width(&s, 4.0), 0.9 * (3.0 - 0.3) + 0.4));
    }

    #[test]
    fn eraser_is_white_square_and_doubled() {
        for palette in [Palette::monochrome(), Palette::annotation()] {
            let pen = PenStyle::resolve(&stroke(6, 1, 2.5), &palette);
            assert_eq!(pen.base_color, Rgb::WHITE);
            assert_eq!(pen.cap(), LineCap::Square);
            assert!(close(pen.base_width, 5.0));
        }
    }

    #[test]
    fn highlighter_annotation_color() {
        let mono = PenStyle::resolve(&stroke(18, 0, 2.0), &Palette::monochrome());
        assert_eq!(mono.base_color, Rgb::BLACK);
        assert!(close(mono.base_width, HIGHLIGHTER_WIDTH));
        assert_eq!(mono.cap(), LineCap::Square);
        assert!(close(mono.segment_opacity(&sample(0.0, 0.0, 0.0, 0.0), 0.0), 0.3));

        let annotated = PenStyle::resolve(&stroke(18, 0, 2.0), &Palette::annotation());
        assert_eq!(annotated.base_color, Rgb::DARK_RED);
    }

    #[test]
    fn ballpoint_annotation_color() {
        let pen = PenStyle::resolve(&stroke(15, 0, 2.0), &Palette::annotation());
        assert_eq!(pen.base_color, Rgb::DARK_BLUE);
    }

    #[test]
    fn invisible_pens() {
        for code in [8, 9, 255] {
            let pen = PenStyle::resolve(&stroke(code, 0, 2.0), &Palette::monochrome());
            assert_eq!(pen.segment_opacity(&sample(1.0, 1.0, 1.0, 1.0), 0.0), 0.0);
        }
    }

    #[test]
    fn unknown_color_index_falls_back() {
        let pen = PenStyle::resolve(&stroke(4, 9, 2.0), &Palette::monochrome());
        assert_eq!(pen.base_color, Rgb::BLACK);
    }

    #[test]
    fn outputs_stay_in_valid_ranges() {
        let values = [
            f64::NAN,
            -10.0,
            -1.0,
            0.0,
            0.25,
            0.5,
            1.0,
            2.0,
            60.0,
            500.0,
            f64::INFINITY,
        ];
        let palettes = [Palette::monochrome(), Palette::annotation()];
        for code in 0..=22u32 {
            for palette in &palettes {
                let pen = PenStyle::resolve(&stroke(code, 1, 2.0), palette);
                for &speed in &values {
                    for &pressure in &values {
                        for &tilt in &[f64::NAN, -1.0, 0.0, 0.5, 1.0] {
                            let s = sample(speed, tilt, 1.5, pressure);
                            let opacity = pen.segment_opacity(&s, 1.0);
                            assert!(
                                (0.0..=1.0).contains(&opacity),
                                "pen {} opacity {} out of range",
                                code,
                                opacity
                            );
                            // Channels are u8, so only check the computation does not panic.
                            let _ = pen.segment_color(&s, 1.0);
                        }
                    }
                }
            }
        }
    }
}
