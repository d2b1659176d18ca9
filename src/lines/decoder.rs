//! Parses a `.lines` byte buffer into a [`Page`].

use log::{debug, warn};

use super::error::{FormatError, Result};
use super::header::{expected_headers, match_magic, Version, FIXED_HEADER_LEN, HEADER_LEN, SEGMENT_RECORD_LEN};
use super::reader::ByteReader;
use crate::models::{Layer, Page, PenKind, Segment, Stroke};

/// Stroke level opacity of highlighter strokes. Kept on the decoded stroke
/// only; the highlighter pen renders with its own fixed opacity.
const HIGHLIGHTER_STROKE_OPACITY: f32 = 0.2;

/// Decodes one `.lines` file held in memory.
///
/// Fails with [`FormatError`] on a bad header, a layer count below one, or
/// any record that does not fit in the remaining bytes. Unknown pen codes are
/// not an error; they are logged and kept on the stroke.
pub fn decode(bytes: &[u8]) -> Result<Page> {
    decode_versioned(bytes).map(|(_, page)| page)
}

/// Like [`decode`], also returning the format version found in the header.
pub fn decode_versioned(bytes: &[u8]) -> Result<(Version, Page)> {
    if bytes.len() < FIXED_HEADER_LEN {
        return Err(FormatError::TooShort {
            len: bytes.len(),
            needed: FIXED_HEADER_LEN,
        });
    }

    let (version, header_len) = match_magic(bytes).ok_or_else(|| FormatError::BadHeader {
        expected: expected_headers(),
        found: String::from_utf8_lossy(&bytes[..HEADER_LEN]).into_owned(),
    })?;

    let mut reader = ByteReader::new(bytes);
    reader.skip("header", header_len)?;
    let nlayers = reader.read_u32("layer count")?;
    if nlayers < 1 {
        return Err(FormatError::InvalidLayerCount(nlayers));
    }
    debug!("Decoding version {} page with {} layer(s)", version.number(), nlayers);

    let mut layers = Vec::new();
    for layer_id in 0..nlayers as usize {
        layers.push(read_layer(&mut reader, version, layer_id)?);
    }

    if reader.remaining() > 0 {
        debug!(
            "Ignoring {} trailing byte(s) at offset {}",
            reader.remaining(),
            reader.offset()
        );
    }

    Ok((version, Page { layers }))
}

fn read_layer(reader: &mut ByteReader<'_>, version: Version, layer_id: usize) -> Result<Layer> {
    let nstrokes = reader.read_u32("stroke count")? as usize;
    debug!("Layer {}: {} stroke(s)", layer_id, nstrokes);

    // Never trust a declared count for allocation beyond what the buffer could hold.
    let capacity = nstrokes.min(reader.remaining() / version.stroke_record_len());
    let mut layer = Layer {
        id: layer_id,
        strokes: Vec::with_capacity(capacity),
    };
    for stroke_id in 0..nstrokes {
        layer.strokes.push(read_stroke(reader, version, stroke_id)?);
    }
    Ok(layer)
}

fn read_stroke(reader: &mut ByteReader<'_>, version: Version, stroke_id: usize) -> Result<Stroke> {
    reader.require("stroke header", version.stroke_record_len())?;
    let pen_code = reader.read_u32("stroke header")?;
    let color = reader.read_u32("stroke header")?;
    let reserved = reader.read_u32("stroke header")?;
    let width = reader.read_f32("stroke header")?;
    let extra = match version {
        Version::V3 => None,
        Version::V5 => Some(reader.read_f32("stroke header")?),
    };
    let nsegments = reader.read_u32("stroke header")? as usize;

    let pen = PenKind::from_code(pen_code);
    if let PenKind::Unsupported(code) = pen {
        warn!(
            "Stroke {}: unsupported pen code {}, it will be rendered invisible",
            stroke_id, code
        );
    }

    let block_len = nsegments
        .checked_mul(SEGMENT_RECORD_LEN)
        .unwrap_or(usize::MAX);
    reader.require("segment records", block_len)?;

    let mut segments = Vec::with_capacity(nsegments);
    for id in 0..nsegments {
        segments.push(read_segment(reader, id)?);
    }

    let opacity = if pen == PenKind::Highlighter {
        HIGHLIGHTER_STROKE_OPACITY
    } else {
        1.0
    };

    Ok(Stroke {
        id: stroke_id,
        pen_code,
        color,
        reserved,
        width,
        extra,
        opacity,
        segments,
    })
}

fn read_segment(reader: &mut ByteReader<'_>, id: usize) -> Result<Segment> {
    // Field order is fixed by the byte layout; names follow the newer firmware.
    Ok(Segment {
        id,
        x: reader.read_f32("segment")?,
        y: reader.read_f32("segment")?,
        speed: reader.read_f32("segment")?,
        tilt: reader.read_f32("segment")?,
        width: reader.read_f32("segment")?,
        pressure: reader.read_f32("segment")?,
    })
}
