//! Serializes a [`Page`] back into the `.lines` byte layout.
//!
//! Mainly used to build fixtures and to check that decoding preserves the
//! structure of a file. Always writes the canonical 45-byte header.

use byteorder::{ByteOrder, LittleEndian};

use super::header::Version;
use crate::models::{Page, Stroke};

/// Encodes `page` in the layout of `version`.
///
/// A version 5 stroke without an `extra` value is written with `0.0`; the
/// field is dropped when encoding as version 3.
pub fn encode(page: &Page, version: Version) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(version.magic());
    put_u32(&mut out, page.layers.len() as u32);

    for layer in &page.layers {
        put_u32(&mut out, layer.strokes.len() as u32);
        for stroke in &layer.strokes {
            encode_stroke(&mut out, stroke, version);
        }
    }
    out
}

fn encode_stroke(out: &mut Vec<u8>, stroke: &Stroke, version: Version) {
    put_u32(out, stroke.pen_code);
    put_u32(out, stroke.color);
    put_u32(out, stroke.reserved);
    put_f32(out, stroke.width);
    if version == Version::V5 {
        put_f32(out, stroke.extra.unwrap_or(0.0));
    }
    put_u32(out, stroke.segments.len() as u32);

    for segment in &stroke.segments {
        for value in [
            segment.x,
            segment.y,
            segment.speed,
            segment.tilt,
            segment.width,
            segment.pressure,
        ] {
            put_f32(out, value);
        }
    }
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    let mut buf = [0u8; 4];
    LittleEndian::write_u32(&mut buf, value);
    out.extend_from_slice(&buf);
}

fn put_f32(out: &mut Vec<u8>, value: f32) {
    let mut buf = [0u8; 4];
    LittleEndian::write_f32(&mut buf, value);
    out.extend_from_slice(&buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::decode_versioned;
    use crate::lines::header::{FIXED_HEADER_LEN, SEGMENT_RECORD_LEN};
    use crate::models::{Layer, Segment};

    fn stroke(pen_code: u32, nsegments: usize) -> Stroke {
        Stroke {
            id: 0,
            pen_code,
            color: 0,
            reserved: 0,
            width: 2.0,
            extra: None,
            opacity: 1.0,
            segments: (0..nsegments)
                .map(|id| Segment {
                    id,
                    x: id as f32,
                    y: id as f32 * 2.0,
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn encoded_length_matches_layout() {
        let page = Page {
            layers: vec![Layer {
                id: 0,
                strokes: vec![stroke(2, 3)],
            }],
        };
        let v3 = encode(&page, Version::V3);
        assert_eq!(v3.len(), FIXED_HEADER_LEN + 4 + 20 + 3 * SEGMENT_RECORD_LEN);
        let v5 = encode(&page, Version::V5);
        assert_eq!(v5.len(), v3.len() + 4);
    }

    #[test]
    fn structure_survives_decoding() {
        let page = Page {
            layers: vec![
                Layer {
                    id: 0,
                    strokes: vec![stroke(0, 4), stroke(3, 0)],
                },
                Layer::new(1),
                Layer {
                    id: 2,
                    strokes: vec![stroke(21, 7)],
                },
            ],
        };
        for version in [Version::V3, Version::V5] {
            let bytes = encode(&page, version);
            let (found, decoded) = decode_versioned(&bytes).expect("encoded page decodes");
            assert_eq!(found, version);
            assert_eq!(decoded.layers.len(), 3);
            let counts: Vec<Vec<usize>> = decoded
                .layers
                .iter()
                .map(|l| l.strokes.iter().map(|s| s.segments.len()).collect())
                .collect();
            assert_eq!(counts, vec![vec![4, 0], vec![], vec![7]]);
            assert_eq!(encode(&decoded, version), bytes, "re-encoding is stable");
        }
    }
}
