// demos/convert.rs
//
// Renders every document of a copied xochitl directory to one SVG per page,
// mirroring the folder tree under the output directory.
//
// Usage: convert <xochitl dir> <outdir> [--page-pt WIDTH HEIGHT]...
//
// Background PDF page sizes are not read here; pass them in points with
// `--page-pt`, once per page, for documents that have a background.

use std::{env, fs, path::PathBuf};

use anyhow::{bail, Context};
use rm_tools::repository::{
    background_pdf, load_tree, needs_conversion, plan_conversions, render_document,
};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut positional = Vec::new();
    let mut background = Vec::new();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--page-pt" {
            let width = args.next().context("--page-pt needs a width")?;
            let height = args.next().context("--page-pt needs a height")?;
            background.push((
                width.parse::<f64>().context("invalid page width")?,
                height.parse::<f64>().context("invalid page height")?,
            ));
        } else {
            positional.push(arg);
        }
    }
    let [root, outdir] = positional.as_slice() else {
        bail!("usage: convert <xochitl dir> <outdir> [--page-pt W H]...");
    };
    let root = PathBuf::from(root);

    let tree = load_tree(&root)?;
    for job in plan_conversions(&tree, &PathBuf::from(outdir)) {
        let first_page = job.output.with_extension("1.svg");
        let mtime = fs::metadata(&first_page).and_then(|m| m.modified()).ok();
        if !needs_conversion(mtime, job.last_modified) {
            log::debug!("{} is up to date", first_page.display());
            continue;
        }

        let sizes: &[(f64, f64)] = match background_pdf(&root, &job.uuid) {
            Some(pdf) => {
                if background.is_empty() {
                    log::warn!("{} has no --page-pt sizes, using the native size", pdf.display());
                }
                &background
            }
            None => &[],
        };

        let pages = match render_document(&root, &job.uuid, sizes) {
            Ok(pages) => pages,
            Err(e) => {
                log::warn!("Skipping {}: {}", job.uuid, e);
                continue;
            }
        };
        if let Some(parent) = job.output.parent() {
            fs::create_dir_all(parent)?;
        }
        for (index, svg) in pages.iter().enumerate() {
            let path = job.output.with_extension(format!("{}.svg", index + 1));
            fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
        }
        log::info!("{} -> {} page(s)", job.output.display(), pages.len());
    }
    Ok(())
}
