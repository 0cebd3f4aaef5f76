// File: crates/piece-core/src/sink.rs
// Summary: Persistence seam for finished pieces: PNG directory writer and in-memory sink.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;

use crate::canvas::PixelBuffer;
use crate::error::{Error, Result};

/// Accepts finished buffers under a file name. Implementations must accept
/// concurrent saves of distinct names.
pub trait ImageSink: Sync {
    fn save(&self, buffer: &PixelBuffer, file_name: &str) -> Result<()>;
}

/// Encode a buffer as an RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer, name: &str) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    image::write_buffer_with_format(
        &mut out,
        buffer.as_raw(),
        buffer.width(),
        buffer.height(),
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|source| Error::Encode { path: PathBuf::from(name), source })?;
    Ok(out.into_inner())
}

/// Writes `<dir>/<file_name>` PNGs, overwriting existing files.
#[derive(Clone, Debug)]
pub struct PngDirSink {
    dir: PathBuf,
}

impl PngDirSink {
    /// Create the directory (recursively) if it is missing.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("output directory must not be empty".into()));
        }
        if !dir.is_dir() {
            debug!("creating output directory {}", dir.display());
            std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
        Ok(Self { dir: dir.to_path_buf() })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

impl ImageSink for PngDirSink {
    fn save(&self, buffer: &PixelBuffer, file_name: &str) -> Result<()> {
        let path = self.path_for(file_name);
        let bytes = encode_png(buffer, file_name).map_err(|e| match e {
            Error::Encode { source, .. } => Error::Encode { path: path.clone(), source },
            other => other,
        })?;
        std::fs::write(&path, bytes).map_err(|e| Error::io(&path, e))
    }
}

/// Keeps saved buffers in memory, in save order.
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: Mutex<Vec<(String, PixelBuffer)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<String> {
        self.lock().iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn get(&self, file_name: &str) -> Option<PixelBuffer> {
        self.lock().iter().find(|(n, _)| n == file_name).map(|(_, b)| b.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(String, PixelBuffer)>> {
        // A panicked writer cannot leave the Vec half-pushed.
        self.saved.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ImageSink for MemorySink {
    fn save(&self, buffer: &PixelBuffer, file_name: &str) -> Result<()> {
        let mut saved = self.lock();
        match saved.iter_mut().find(|(n, _)| n == file_name) {
            Some(slot) => slot.1 = buffer.clone(),
            None => saved.push((file_name.to_string(), buffer.clone())),
        }
        Ok(())
    }
}
