// demos/rm2svg.rs
//
// Usage: rm2svg <input.rm> [output.svg] [-w WIDTH] [-h HEIGHT] [-c]

use std::{env, fs};

use anyhow::{bail, Context};
use rm_tools::{lines_to_svg, RenderOptions};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut input = None;
    let mut output = None;
    let mut builder = RenderOptions::builder();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-w" | "--width" => {
                let value = args.next().context("--width needs a value")?;
                builder = builder.set_width(value.parse::<f64>().context("invalid width")?);
            }
            "-h" | "--height" => {
                let value = args.next().context("--height needs a value")?;
                builder = builder.set_height(value.parse::<f64>().context("invalid height")?);
            }
            "-c" | "--coloured_annotations" => {
                builder = builder.set_coloured_annotations(true);
            }
            other if input.is_none() => input = Some(other.to_string()),
            other if output.is_none() => output = Some(other.to_string()),
            other => bail!("unexpected argument {:?}", other),
        }
    }

    let input = input.context("usage: rm2svg <input.rm> [output.svg] [-w W] [-h H] [-c]")?;
    let options = builder.build()?;

    log::info!("Reading {}", input);
    let bytes = fs::read(&input).with_context(|| format!("reading {}", input))?;
    let svg = lines_to_svg(&bytes, &options)?;

    match output {
        Some(path) => {
            fs::write(&path, svg).with_context(|| format!("writing {}", path))?;
            log::info!("SVG saved to {}", path);
        }
        None => print!("{}", svg),
    }
    Ok(())
}
