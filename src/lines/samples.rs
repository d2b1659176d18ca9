//! Flat, one-row-per-sample view of a `.lines` file, for working out what the
//! undocumented fields of the format mean.

use serde::{Deserialize, Serialize};

use super::decoder::decode;
use super::error::Result;
use crate::models::Page;

/// One raw sample together with the header fields of its stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRecord {
    pub layer: usize,
    pub stroke: usize,
    pub segment: usize,
    pub pen_code: u32,
    pub color: u32,
    pub reserved: u32,
    pub stroke_width: f32,
    pub extra: Option<f32>,
    pub segment_count: usize,
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub tilt: f32,
    pub width: f32,
    pub pressure: f32,
}

/// Decodes `bytes` and flattens every sample into a [`SampleRecord`].
pub fn extract_samples(bytes: &[u8]) -> Result<Vec<SampleRecord>> {
    Ok(flatten(&decode(bytes)?))
}

/// Flattens an already decoded page, in file order.
pub fn flatten(page: &Page) -> Vec<SampleRecord> {
    let mut records = Vec::new();
    for layer in &page.layers {
        for stroke in &layer.strokes {
            records.extend(stroke.segments.iter().map(|segment| SampleRecord {
                layer: layer.id,
                stroke: stroke.id,
                segment: segment.id,
                pen_code: stroke.pen_code,
                color: stroke.color,
                reserved: stroke.reserved,
                stroke_width: stroke.width,
                extra: stroke.extra,
                segment_count: stroke.segments.len(),
                x: segment.x,
                y: segment.y,
                speed: segment.speed,
                tilt: segment.tilt,
                width: segment.width,
                pressure: segment.pressure,
            }));
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::{encode, Version};
    use crate::models::{Layer, Segment, Stroke};

    #[test]
    fn one_record_per_segment() {
        let segments = (0..3)
            .map(|id| Segment {
                id,
                x: 100.0 + id as f32,
                pressure: 0.5,
                ..Default::default()
            })
            .collect();
        let page = Page {
            layers: vec![Layer {
                id: 0,
                strokes: vec![Stroke {
                    id: 0,
                    pen_code: 15,
                    color: 1,
                    reserved: 0,
                    width: 2.0,
                    extra: Some(1.0),
                    opacity: 1.0,
                    segments,
                }],
            }],
        };
        let records = extract_samples(&encode(&page, Version::V5)).expect("valid page");
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].segment, 2);
        assert_eq!(records[2].x, 102.0);
        assert_eq!(records[2].segment_count, 3);
        assert_eq!(records[0].pen_code, 15);
        assert_eq!(records[0].extra, Some(1.0));

        let json = serde_json::to_string(&records[0]).expect("records serialize");
        assert!(json.contains("\"penCode\":15"), "json was: {}", json);
    }
}
