//! Decoder for the tablet's `.lines` stroke format, versions 3 and 5.
//!
//! # Layout (little-endian throughout)
//!
//! ```text
//! header     magic (45 bytes, space padded)  u32 nlayers
//! layer      u32 nstrokes, then nstrokes strokes
//! stroke v3  u32 pen  u32 color  u32 reserved  f32 width  u32 nsegments
//! stroke v5  u32 pen  u32 color  u32 reserved  f32 width  f32 extra  u32 nsegments
//! segment    f32 x  f32 y  f32 speed  f32 tilt  f32 width  f32 pressure
//! ```
//!
//! There are no checksums. Every count is trusted only as far as the
//! remaining bytes can back it.

mod decoder;
mod encoder;
mod error;
pub mod header;
mod reader;
mod samples;

pub use decoder::{decode, decode_versioned};
pub use encoder::encode;
pub use error::{FormatError, Result};
pub use header::Version;
pub use samples::{extract_samples, flatten, SampleRecord};
