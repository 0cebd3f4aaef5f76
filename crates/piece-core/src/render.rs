// File: crates/piece-core/src/render.rs
// Summary: Recipe interpreter: scales a piece recipe to the canvas and replays it.

use log::debug;

use crate::canvas::{Canvas, PixelBuffer, SkiaCanvas};
use crate::error::{Error, Result};
use crate::geometry::Layout;
use crate::recipe::{recipe, Fill, Primitive, Shape, Stroke};
use crate::types::{file_name, PieceColor, PieceKind, Style, MAX_SIZE, REFERENCE_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Side length of the square canvas in pixels.
    pub size: u32,
    pub style: Style,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { size: REFERENCE_SIZE, style: Style::default() }
    }
}

impl RenderOptions {
    pub fn new(size: u32, style: Style) -> Self {
        Self { size, style }
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::InvalidConfig("canvas size must be positive".into()));
        }
        if self.size > MAX_SIZE {
            return Err(Error::InvalidConfig(format!(
                "canvas size {} exceeds the maximum of {MAX_SIZE}",
                self.size
            )));
        }
        Ok(())
    }
}

/// Render one piece to a fresh transparent raster buffer.
pub fn render_piece(kind: PieceKind, color: PieceColor, opts: &RenderOptions) -> Result<PixelBuffer> {
    opts.validate()?;
    let label = file_name(kind, color);
    let canvas = SkiaCanvas::new(opts.size, label)?;
    render_with(canvas, kind, color, opts.style)
}

/// Replay the (kind, style) recipe on any canvas, scaled to its size.
pub fn render_with<C: Canvas>(mut canvas: C, kind: PieceKind, color: PieceColor, style: Style) -> Result<C::Output> {
    RenderOptions::new(canvas.size(), style).validate()?;
    let layout = Layout::new(canvas.size(), REFERENCE_SIZE);
    let primitives = recipe(kind, color, style);
    debug!("{color} {kind} ({style}): {} primitives at {}px", primitives.len(), canvas.size());
    for p in &primitives {
        canvas.draw(&place(p, &layout))?;
    }
    canvas.finish()
}

/// Move a recipe primitive from reference offsets into canvas pixels.
pub fn place(p: &Primitive, layout: &Layout) -> Primitive {
    let shape = match &p.shape {
        Shape::Ellipse(r) => Shape::Ellipse(layout.rect(*r)),
        Shape::Rect(r) => Shape::Rect(layout.rect(*r)),
        Shape::Polygon(points) => Shape::Polygon(points.iter().map(|&q| layout.point(q)).collect()),
        Shape::Curve { points, tension } => Shape::Curve {
            points: points.iter().map(|&q| layout.point(q)).collect(),
            tension: *tension,
        },
        Shape::Line { from, to } => Shape::Line { from: layout.point(*from), to: layout.point(*to) },
    };
    let fill = p.fill.as_ref().map(|f| match f {
        Fill::Linear { from, to, direction, bounds } => Fill::Linear {
            from: *from,
            to: *to,
            direction: *direction,
            bounds: bounds.map(|b| layout.rect(b)),
        },
        other => other.clone(),
    });
    let stroke = p.stroke.map(|s| Stroke { color: s.color, width: layout.length(s.width) });
    Primitive { shape, fill, stroke }
}
