//! Helpers for the tablet's document repository: a flat directory where each
//! entry `<uuid>` has a `<uuid>.metadata` JSON file, documents also have a
//! `<uuid>.content` file, and notebook pages live at `<uuid>/<page>.rm`.
//!
//! Only reading and planning happen here; turning pages into PDFs and
//! overlaying background documents is left to external tools.

mod page_size;
mod tree;

pub use page_size::{page_size, PageSize, NATIVE_HEIGHT_MM, NATIVE_WIDTH_MM};
pub use tree::{build_tree, plan_conversions, render_listing, ConversionJob, RepoNode};

use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::converters::{svg::lines_to_svg, RenderOptions};
use crate::errors::Result;
use crate::models::metadata::{DocumentContent, DocumentMetadata};

/// Reads every `*.metadata` file in `root_dir` and builds the folder tree.
///
/// A metadata file that fails to parse is skipped with a warning; I/O errors
/// on the directory itself are returned.
pub fn load_tree(root_dir: &Path) -> Result<RepoNode> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(root_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("metadata") {
            continue;
        }
        let Some(uuid) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let json = fs::read_to_string(&path)?;
        match serde_json::from_str::<DocumentMetadata>(&json) {
            Ok(metadata) => entries.push((uuid.to_string(), metadata)),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }
    debug!("Loaded {} metadata entries from {}", entries.len(), root_dir.display());
    Ok(build_tree(entries))
}

/// Reads `<uuid>.content`.
pub fn load_content(root_dir: &Path, uuid: &str) -> Result<DocumentContent> {
    let json = fs::read_to_string(root_dir.join(format!("{}.content", uuid)))?;
    DocumentContent::from_json(&json)
}

/// Paths of a document's `.rm` page files, in display order.
pub fn page_paths(root_dir: &Path, uuid: &str) -> Result<Vec<PathBuf>> {
    let content = load_content(root_dir, uuid)?;
    let doc_dir = root_dir.join(uuid);
    Ok(content
        .page_ids()?
        .into_iter()
        .map(|page| doc_dir.join(format!("{}.rm", page)))
        .collect())
}

/// Path of the background PDF of a document, if it has one.
pub fn background_pdf(root_dir: &Path, uuid: &str) -> Option<PathBuf> {
    let path = root_dir.join(format!("{}.pdf", uuid));
    path.exists().then_some(path)
}

/// Render options for one page of a document: sized like the background
/// page when its size is known, always with the annotation palette.
pub fn page_options(background_pt: Option<(f64, f64)>) -> Result<RenderOptions> {
    let size = page_size(background_pt);
    RenderOptions::builder()
        .set_width(size.width_px)
        .set_height(size.height_px)
        .set_coloured_annotations(true)
        .build()
}

/// Renders every page of a document to SVG, in display order.
///
/// `background_pt` holds the background document's page sizes in points,
/// indexed like the pages; pages past its end use the native size. Every
/// page file must exist.
pub fn render_document(
    root_dir: &Path,
    uuid: &str,
    background_pt: &[(f64, f64)],
) -> Result<Vec<String>> {
    let paths = page_paths(root_dir, uuid)?;
    let mut pages = Vec::with_capacity(paths.len());
    for (index, path) in paths.iter().enumerate() {
        let options = page_options(background_pt.get(index).copied())?;
        debug!(
            "Rendering {} at {}x{}",
            path.display(),
            options.width(),
            options.height()
        );
        let bytes = fs::read(path)?;
        pages.push(lines_to_svg(&bytes, &options)?);
    }
    info!("Rendered {} page(s) of {}", pages.len(), uuid);
    Ok(pages)
}

/// True unless an output exists that is newer than the document.
pub fn needs_conversion(output_mtime: Option<SystemTime>, last_modified_ms: u64) -> bool {
    match output_mtime {
        Some(mtime) => mtime <= UNIX_EPOCH + Duration::from_millis(last_modified_ms),
        None => true,
    }
}
