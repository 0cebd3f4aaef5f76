// File: crates/piece-core/src/batch.rs
// Summary: Batch driver: renders all twelve pieces and hands them to a sink.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use log::{info, warn};
use rayon::prelude::*;

use crate::canvas::PixelBuffer;
use crate::error::{Error, Result};
use crate::render::{render_piece, RenderOptions};
use crate::sink::{ImageSink, PngDirSink};
use crate::types::{all_pieces, file_name, PieceColor, PieceKind};

pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub render: RenderOptions,
    /// Render pieces on the rayon pool instead of one after another.
    pub parallel: bool,
    /// Attempt every piece and report failures at the end instead of
    /// stopping at the first one.
    pub keep_going: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets"),
            render: RenderOptions::default(),
            parallel: false,
            keep_going: false,
        }
    }
}

impl GeneratorConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into(), ..Self::default() }
    }
}

/// Outcome of a batch in which every piece was written.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// File names written, in enumeration order.
    pub created: Vec<String>,
    pub elapsed: Duration,
}

/// Create the output directory and write all twelve pieces into it.
pub fn generate_all(config: &GeneratorConfig) -> Result<BatchReport> {
    config.render.validate()?;
    let sink = PngDirSink::new(&config.output_dir)?;
    info!(
        "Generating {} chess piece images ({}px) into {}",
        config.render.style,
        config.render.size,
        sink.dir().display()
    );
    generate_into(config, &sink)
}

/// Render every (kind, color) pair and save it to `sink`.
///
/// Saves happen in the fixed order (White K, Q, R, B, N, P then Black) even
/// when rendering runs in parallel. Without `keep_going` the first failure is
/// returned as is; with it, every piece is attempted and the failures come
/// back as [`Error::Batch`] together with their causes.
pub fn generate_into(config: &GeneratorConfig, sink: &dyn ImageSink) -> Result<BatchReport> {
    config.render.validate()?;
    let started = Instant::now();
    let pieces: Vec<(PieceKind, PieceColor)> = all_pieces().collect();
    let opts = config.render;

    let mut report = BatchReport::default();
    let mut failed: Vec<(String, Error)> = Vec::new();
    let mut record = |name: String, outcome: Result<()>| -> Result<()> {
        match outcome {
            Ok(()) => {
                info!("Created: {name}");
                report.created.push(name);
                Ok(())
            }
            Err(e) if config.keep_going => {
                warn!("Failed: {name}: {e}");
                failed.push((name, e));
                Ok(())
            }
            Err(e) => Err(e),
        }
    };

    if config.parallel {
        let rendered: Vec<Result<PixelBuffer>> =
            pieces.par_iter().map(|&(kind, color)| render_piece(kind, color, &opts)).collect();
        for ((kind, color), buffer) in pieces.iter().zip(rendered) {
            let name = file_name(*kind, *color);
            let outcome = buffer.and_then(|b| sink.save(&b, &name));
            record(name, outcome)?;
        }
    } else {
        for (kind, color) in pieces {
            let name = file_name(kind, color);
            let outcome = render_piece(kind, color, &opts).and_then(|b| sink.save(&b, &name));
            record(name, outcome)?;
        }
    }

    report.elapsed = started.elapsed();
    if !failed.is_empty() {
        return Err(Error::Batch { created: report.created, failed });
    }
    info!("All {} chess piece images generated in {:?}", report.created.len(), report.elapsed);
    Ok(report)
}
