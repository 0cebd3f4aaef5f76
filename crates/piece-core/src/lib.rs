// File: crates/piece-core/src/lib.rs
// Summary: Core library entry point; exports the piece rendering and batch generation API.

pub mod types;
pub mod geometry;
pub mod palette;
pub mod recipe;
pub mod flat;
pub mod realistic;
pub mod canvas;
pub mod render;
pub mod sink;
pub mod batch;
pub mod error;

pub use types::{all_pieces, file_name, PieceColor, PieceKind, Rgba, Style, REFERENCE_SIZE};
pub use palette::Palette;
pub use recipe::{recipe, Fill, GradientDirection, Primitive, Recipe, Shape, Stroke};
pub use canvas::{Canvas, PixelBuffer, RecordingCanvas, SkiaCanvas};
pub use render::{render_piece, render_with, RenderOptions};
pub use sink::{encode_png, ImageSink, MemorySink, PngDirSink};
pub use batch::{generate_all, generate_into, BatchReport, GeneratorConfig};
pub use error::{Error, Result};
