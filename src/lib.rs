pub mod converters;
pub mod errors;
pub mod lines;
pub mod models;
pub mod repository;

pub use converters::svg::{convert_page_to_svg, lines_to_svg};
pub use converters::RenderOptions;
pub use errors::{Result, RmToolsError};
pub use lines::decode;
pub use models::Page;

// wasm entry points
pub mod wasm;
