// demos/list_repo.rs
//
// Lists a copied xochitl directory as a tree and, with an output directory,
// shows which documents would be (re)converted and their page files.

use std::{env, fs, path::PathBuf};

use anyhow::Context;
use rm_tools::repository::{load_tree, needs_conversion, page_paths, plan_conversions, render_listing};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = env::args().skip(1);
    let root = PathBuf::from(args.next().context("usage: list_repo <xochitl dir> [outdir]")?);
    let tree = load_tree(&root)?;
    print!("{}", render_listing(&tree));

    let Some(outdir) = args.next() else {
        return Ok(());
    };
    for job in plan_conversions(&tree, &PathBuf::from(outdir)) {
        let mtime = fs::metadata(&job.output).and_then(|m| m.modified()).ok();
        if !needs_conversion(mtime, job.last_modified) {
            log::debug!("{} is up to date", job.output.display());
            continue;
        }
        match page_paths(&root, &job.uuid) {
            Ok(pages) => log::info!("{} <- {} page(s)", job.output.display(), pages.len()),
            Err(e) => log::warn!("Skipping {}: {}", job.uuid, e),
        }
    }
    Ok(())
}
