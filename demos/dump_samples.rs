// demos/dump_samples.rs
//
// Prints every raw sample of a .lines file as pretty JSON, one record per
// sample with its stroke's header fields.

use std::{env, fs};

use anyhow::Context;
use rm_tools::lines::extract_samples;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let path = env::args()
        .nth(1)
        .context("usage: dump_samples <input.rm>")?;
    let bytes = fs::read(&path).with_context(|| format!("reading {}", path))?;
    let samples = extract_samples(&bytes)?;
    log::info!("{} samples in {}", samples.len(), path);

    println!("{}", serde_json::to_string_pretty(&samples)?);
    Ok(())
}
