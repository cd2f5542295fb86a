// d3d12ma-dumpvis: D3D12 Memory Allocator dump visualization

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use d3d12ma_dumpvis::dump::load_dump;
use d3d12ma_dumpvis::layout::calc_params;
use d3d12ma_dumpvis::render::{render_page, resolve_typeface, save_image};

const PROGRAM_VERSION: &str = "D3D12MA Dump Visualization 1.0.0";

/// Visualization of D3D12 Memory Allocator JSON dump
#[derive(Parser)]
#[command(
    name = "d3d12ma-dumpvis",
    version = PROGRAM_VERSION,
    disable_version_flag = true,
    about,
    long_about = None
)]
struct Cli {
    /// Path to source JSON file with memory dump created by D3D12 Memory Allocator library
    #[arg(value_name = "DUMP_FILE")]
    dump_file: PathBuf,

    /// Path to destination image file (e.g. PNG)
    #[arg(short, long)]
    output: PathBuf,

    /// TrueType/OpenType font for labels (defaults to a system font)
    #[arg(long)]
    font: Option<PathBuf>,

    /// More log output (--verbose info, twice for debug)
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let dump = load_dump(&cli.dump_file)
        .with_context(|| format!("Cannot load dump '{}'", cli.dump_file.display()))?;
    let params = calc_params(&dump).context("Cannot lay out image")?;
    let typeface = resolve_typeface(cli.font.as_deref())?;

    let image = render_page(&dump, &params, typeface).into_image();
    save_image(&image, &cli.output)
        .with_context(|| format!("Cannot write image '{}'", cli.output.display()))?;

    info!(
        "Wrote {}x{} image to {}",
        image.width(),
        image.height(),
        cli.output.display()
    );
    Ok(())
}
