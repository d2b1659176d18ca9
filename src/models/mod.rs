//! In-memory representation of a decoded `.lines` page and of the JSON sidecar
//! files that accompany it in a document repository.

pub mod colors;
pub mod metadata;
pub mod page;
pub mod pen;
pub mod stroke;

pub use colors::{Palette, Rgb};
pub use page::{Layer, Page};
pub use pen::PenKind;
pub use stroke::{Segment, Stroke};
