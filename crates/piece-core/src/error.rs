// File: crates/piece-core/src/error.rs
// Summary: Error type shared by rendering, saving and batch generation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Rejected before any drawing happens.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The drawing backend failed while composing one piece.
    #[error("rendering {piece} failed: {reason}")]
    Render { piece: String, reason: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG encoding failed for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Keep-going batch that finished with failures. `created` lists the
    /// files that were written anyway; `failed` pairs each file with its cause.
    #[error("failed to generate {} of {} pieces: {}", failed.len(), failed.len() + created.len(), failed_names(failed))]
    Batch { created: Vec<String>, failed: Vec<(String, Error)> },
}

fn failed_names(failed: &[(String, Error)]) -> String {
    failed.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>().join(", ")
}

impl Error {
    pub(crate) fn render(piece: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Render { piece: piece.into(), reason: reason.into() }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
