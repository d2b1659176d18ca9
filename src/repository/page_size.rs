//! Output size of a page, in device pixels and in millimetres.
//!
//! A plain notebook page is the device screen, 1404×1872 px, which exports
//! as 157×210 mm. A page annotating a background document takes the
//! physical size of that document's page instead.

use crate::converters::render::{NATIVE_HEIGHT, NATIVE_WIDTH};

/// Physical width of the device canvas.
pub const NATIVE_WIDTH_MM: f64 = 157.0;
/// Physical height of the device canvas.
pub const NATIVE_HEIGHT_MM: f64 = 210.0;

const MM_PER_INCH: f64 = 25.4;
const PT_PER_INCH: f64 = 72.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_px: f64,
    pub height_px: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageSize {
    /// The size of a notebook page without a background document.
    pub fn native() -> Self {
        Self::from_mm(NATIVE_WIDTH_MM, NATIVE_HEIGHT_MM)
    }

    /// Size for a background page measured in PostScript points.
    pub fn from_points(width_pt: f64, height_pt: f64) -> Self {
        Self::from_mm(
            width_pt / PT_PER_INCH * MM_PER_INCH,
            height_pt / PT_PER_INCH * MM_PER_INCH,
        )
    }

    pub fn from_mm(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_px: width_mm * px_per_mm_x(),
            height_px: height_mm * px_per_mm_y(),
            width_mm,
            height_mm,
        }
    }
}

fn px_per_mm_x() -> f64 {
    NATIVE_WIDTH / NATIVE_WIDTH_MM
}

fn px_per_mm_y() -> f64 {
    NATIVE_HEIGHT / NATIVE_HEIGHT_MM
}

/// Selects the page size: the background page when one is known, else native.
pub fn page_size(background_pt: Option<(f64, f64)>) -> PageSize {
    match background_pt {
        Some((w, h)) => PageSize::from_points(w, h),
        None => PageSize::native(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_page_maps_to_screen() {
        let size = page_size(None);
        assert!((size.width_px - 1404.0).abs() < 1e-9);
        assert!((size.height_px - 1872.0).abs() < 1e-9);
        assert_eq!(size.width_mm, 157.0);
    }

    #[test]
    fn a4_background() {
        // A4 is 595.276 x 841.89 pt.
        let size = page_size(Some((595.276, 841.89)));
        assert!((size.width_mm - 210.0).abs() < 0.01);
        assert!((size.height_mm - 297.0).abs() < 0.01);
        assert!((size.width_px - 210.0 * 1404.0 / 157.0).abs() < 0.1);
    }
}
