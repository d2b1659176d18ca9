//! Utility functions for SVG conversion: escaping and number formatting.

use super::constants::COORD_PRECISION;
use crate::converters::render::Point;
use std::fmt::Write;

/// Escapes characters that would end an XML comment early.
pub fn escape_comment(text: &str) -> String {
    text.replace("--", "- -")
}

/// Formats a length with fixed precision, never negative.
///
/// Some pen formulas can go below zero for extreme samples; SVG rejects
/// negative stroke widths.
pub fn format_width(width: f64) -> String {
    let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    format!("{:.*}", COORD_PRECISION, width)
}

/// Formats an opacity, trimming trailing zeros (`1`, `0.3`, `0.257`).
pub fn format_opacity(opacity: f64) -> String {
    if !opacity.is_finite() {
        return "0".to_string();
    }
    let s = format!("{:.3}", opacity);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Appends `x,y ` pairs for the `points` attribute. Non-finite coordinates
/// are written as 0.
pub fn write_points(out: &mut String, points: &[Point]) -> std::fmt::Result {
    for p in points {
        write!(
            out,
            "{:.*},{:.*} ",
            COORD_PRECISION,
            finite_or_zero(p.x),
            COORD_PRECISION,
            finite_or_zero(p.y)
        )?;
    }
    Ok(())
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_are_clamped_and_fixed() {
        assert_eq!(format_width(1.23456), "1.235");
        assert_eq!(format_width(-2.0), "0.000");
        assert_eq!(format_width(f64::NAN), "0.000");
    }

    #[test]
    fn opacity_trims_zeros() {
        assert_eq!(format_opacity(1.0), "1");
        assert_eq!(format_opacity(0.3), "0.3");
        assert_eq!(format_opacity(0.0), "0");
        assert_eq!(format_opacity(0.2574), "0.257");
        assert_eq!(format_opacity(f64::NAN), "0");
        assert_eq!(format_opacity(f64::INFINITY), "0");
    }

    #[test]
    fn points_attribute() {
        let mut out = String::new();
        write_points(&mut out, &[Point::new(1.0, 2.5), Point::new(3.14159, 0.0)]).unwrap();
        assert_eq!(out, "1.000,2.500 3.142,0.000 ");
    }

    #[test]
    fn non_finite_points_are_zeroed() {
        let mut out = String::new();
        write_points(&mut out, &[Point::new(f64::NAN, f64::NEG_INFINITY)]).unwrap();
        assert_eq!(out, "0.000,0.000 ");
    }

    #[test]
    fn comment_escaping() {
        assert_eq!(escape_comment("a--b"), "a- -b");
    }
}
