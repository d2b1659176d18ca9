//! Maps device coordinates on the native 1404×1872 canvas to an output size.

use serde::{Deserialize, Serialize};

/// Width of the device canvas in device units.
pub const NATIVE_WIDTH: f64 = 1404.0;
/// Height of the device canvas in device units.
pub const NATIVE_HEIGHT: f64 = 1872.0;

/// A point in output coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Document-wide coordinate scale, derived once from the requested output
/// size and applied uniformly to every sample.
///
/// The axis that is relatively too short for the native aspect ratio is
/// stretched by the ratio between the two aspect ratios, so the scale is
/// anisotropic unless the output has the native aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    width: f64,
    height: f64,
    ratio: f64,
}

impl CanvasTransform {
    pub fn new(width: f64, height: f64) -> Self {
        let ratio = (height / width) / (NATIVE_HEIGHT / NATIVE_WIDTH);
        Self {
            width,
            height,
            ratio,
        }
    }

    /// The identity transform for the native canvas.
    pub fn native() -> Self {
        Self::new(NATIVE_WIDTH, NATIVE_HEIGHT)
    }

    /// Output aspect ratio divided by the native one.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn apply(&self, x: f32, y: f32) -> Point {
        let x = x as f64 * self.width / NATIVE_WIDTH;
        let y = y as f64 * self.height / NATIVE_HEIGHT;
        if self.ratio > 1.0 {
            Point::new(self.ratio * x, y)
        } else {
            Point::new(x, (1.0 / self.ratio) * y)
        }
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::native()
    }
}
