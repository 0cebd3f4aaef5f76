// File: crates/piece-core/src/recipe.rs
// Summary: Declarative primitive descriptors and the (kind, style) recipe lookup.
// Notes:
// - Every coordinate is an offset from the canvas center at REFERENCE_SIZE.
// - A recipe is drawn front to back in Vec order; fill precedes stroke.

use crate::geometry::{PointF, RectF};
use crate::palette::Palette;
use crate::types::{PieceColor, PieceKind, Rgba, Style};
use crate::{flat, realistic};

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Ellipse(RectF),
    Rect(RectF),
    Polygon(Vec<PointF>),
    /// Closed cardinal spline through the points.
    Curve { points: Vec<PointF>, tension: f32 },
    Line { from: PointF, to: PointF },
}

impl Shape {
    pub fn ellipse(left: f32, top: f32, width: f32, height: f32) -> Self {
        Shape::Ellipse(RectF::from_ltwh(left, top, width, height))
    }

    pub fn rect(left: f32, top: f32, width: f32, height: f32) -> Self {
        Shape::Rect(RectF::from_ltwh(left, top, width, height))
    }

    pub fn polygon(points: &[(f32, f32)]) -> Self {
        Shape::Polygon(to_points(points))
    }

    pub fn curve(points: &[(f32, f32)], tension: f32) -> Self {
        Shape::Curve { points: to_points(points), tension }
    }

    pub fn line(from: (f32, f32), to: (f32, f32)) -> Self {
        Shape::Line { from: PointF::new(from.0, from.1), to: PointF::new(to.0, to.1) }
    }

    /// Axis-aligned bounds of the shape's defining geometry.
    pub fn bounds(&self) -> RectF {
        match self {
            Shape::Ellipse(r) | Shape::Rect(r) => *r,
            Shape::Polygon(points) | Shape::Curve { points, .. } => {
                RectF::bounding(points).unwrap_or(RectF::from_ltwh(0.0, 0.0, 0.0, 0.0))
            }
            Shape::Line { from, to } => {
                RectF::bounding(&[*from, *to]).unwrap_or(RectF::from_ltwh(0.0, 0.0, 0.0, 0.0))
            }
        }
    }
}

fn to_points(points: &[(f32, f32)]) -> Vec<PointF> {
    points.iter().map(|&(x, y)| PointF::new(x, y)).collect()
}

/// Axis of a two-color linear gradient across its bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientDirection {
    /// Left edge to right edge.
    Horizontal,
    /// Top edge to bottom edge.
    Vertical,
    /// Clockwise from the +x axis, in degrees, spanning the whole rect.
    Angle(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Rgba),
    Linear {
        from: Rgba,
        to: Rgba,
        direction: GradientDirection,
        /// Brush rect; defaults to the shape bounds.
        bounds: Option<RectF>,
    },
    /// Center color at the shape centroid blending out to the rim.
    /// Surround colors are spread by angle, one per vertex.
    Radial { center: Rgba, surround: Vec<Rgba> },
}

impl Fill {
    pub fn linear(from: Rgba, to: Rgba, direction: GradientDirection) -> Self {
        Fill::Linear { from, to, direction, bounds: None }
    }

    pub fn linear_in(from: Rgba, to: Rgba, direction: GradientDirection, bounds: RectF) -> Self {
        Fill::Linear { from, to, direction, bounds: Some(bounds) }
    }

    pub fn colors(&self) -> Vec<Rgba> {
        match self {
            Fill::Solid(c) => vec![*c],
            Fill::Linear { from, to, .. } => vec![*from, *to],
            Fill::Radial { center, surround } => {
                std::iter::once(*center).chain(surround.iter().copied()).collect()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
}

impl Primitive {
    pub fn new(shape: Shape) -> Self {
        Self { shape, fill: None, stroke: None }
    }

    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn solid(self, color: Rgba) -> Self {
        self.fill(Fill::Solid(color))
    }

    pub fn stroke(mut self, color: Rgba, width: f32) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }

    /// True when any paint of this primitive is partially transparent.
    pub fn is_translucent(&self) -> bool {
        let fill = self.fill.iter().flat_map(Fill::colors);
        let stroke = self.stroke.iter().map(|s| s.color);
        fill.chain(stroke).any(|c| c.a < 255)
    }
}

/// Ordered primitive list for one piece.
pub type Recipe = Vec<Primitive>;

/// Look up the recipe for a piece in the given style.
pub fn recipe(kind: PieceKind, color: PieceColor, style: Style) -> Recipe {
    let palette = Palette::resolve(color, style);
    match style {
        Style::Flat => flat::recipe(kind, &palette),
        Style::Realistic => realistic::recipe(kind, color, &palette),
    }
}
