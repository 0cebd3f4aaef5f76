// File: crates/piece-gen/src/main.rs
// Summary: CLI that renders the twelve chess piece PNGs into an output directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use piece_core::{generate_all, GeneratorConfig, RenderOptions, Style};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleArg {
    Flat,
    Realistic,
}

impl From<StyleArg> for Style {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Flat => Style::Flat,
            StyleArg::Realistic => Style::Realistic,
        }
    }
}

/// Procedurally draw chess piece images with transparent backgrounds.
#[derive(Debug, Parser)]
#[command(name = "piece-gen", version, about)]
struct Args {
    /// Directory receiving `<color>_<kind>.png`; created if missing.
    #[arg(short, long, env = "PIECE_GEN_OUT_DIR", default_value = "assets")]
    out_dir: PathBuf,

    /// Side length of each square image in pixels.
    #[arg(short, long, default_value_t = piece_core::REFERENCE_SIZE)]
    size: u32,

    #[arg(long, value_enum, default_value_t = StyleArg::Realistic)]
    style: StyleArg,

    /// Render pieces concurrently.
    #[arg(long)]
    parallel: bool,

    /// Attempt every piece and list failures at the end.
    #[arg(long)]
    keep_going: bool,

    /// Log per-primitive detail.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    let config = GeneratorConfig {
        output_dir: args.out_dir.clone(),
        render: RenderOptions::new(args.size, args.style.into()),
        parallel: args.parallel,
        keep_going: args.keep_going,
    };

    let report = generate_all(&config)
        .with_context(|| format!("generating piece images into '{}'", args.out_dir.display()))?;
    println!("Wrote {} images to {}", report.created.len(), args.out_dir.display());
    Ok(())
}
