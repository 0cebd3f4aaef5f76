// File: crates/piece-core/src/realistic.rs
// Summary: Realistic-style recipes: gradient shading, dark outlines, specular highlights.

use crate::geometry::{ring_points, PointF, RectF};
use crate::palette::{highlight, Palette};
use crate::recipe::{Fill, Primitive, Recipe, Shape};
use crate::types::{PieceColor, PieceKind};

use crate::recipe::GradientDirection::{Angle, Horizontal, Vertical};

pub const QUEEN_RING_RADIUS: f32 = 24.0;
pub const QUEEN_RING_DY: f32 = -5.0;

/// Curve tension of the knight's head outline.
const KNIGHT_TENSION: f32 = 0.5;

pub fn recipe(kind: PieceKind, color: PieceColor, palette: &Palette) -> Recipe {
    let Palette { main, dark, light } = *palette;

    let mut r = match kind {
        PieceKind::Pawn => vec![
            Primitive::new(Shape::ellipse(-18.0, 15.0, 36.0, 8.0))
                .fill(Fill::Radial { center: main, surround: vec![dark] }),
            Primitive::new(Shape::ellipse(-10.0, -10.0, 20.0, 25.0))
                .fill(Fill::linear(light, dark, Horizontal))
                .stroke(dark, 2.0),
            Primitive::new(Shape::ellipse(-14.0, -25.0, 28.0, 28.0))
                .fill(Fill::linear(light, main, Angle(45.0)))
                .stroke(dark, 2.0),
        ],
        PieceKind::Rook => {
            let mut r = vec![
                Primitive::new(Shape::rect(-20.0, 10.0, 40.0, 12.0))
                    .fill(Fill::linear(main, dark, Vertical)),
                Primitive::new(Shape::rect(-16.0, -15.0, 32.0, 25.0))
                    .fill(Fill::linear(light, dark, Horizontal))
                    .stroke(dark, 2.0),
            ];
            r.extend((0..3).map(|i| {
                Primitive::new(Shape::rect(-14.0 + i as f32 * 12.0, -25.0, 10.0, 10.0))
                    .fill(Fill::linear(light, main, Vertical))
                    .stroke(dark, 1.5)
            }));
            r
        }
        PieceKind::Knight => vec![
            Primitive::new(Shape::ellipse(-18.0, 12.0, 36.0, 10.0))
                .fill(Fill::linear(main, dark, Vertical)),
            Primitive::new(Shape::curve(
                &[
                    (-8.0, 12.0),  // bottom left
                    (-10.0, -5.0), // neck
                    (-5.0, -18.0), // ear
                    (8.0, -15.0),  // crown of head
                    (15.0, -8.0),  // nose
                    (12.0, 0.0),   // jaw
                    (8.0, 12.0),   // bottom right
                ],
                KNIGHT_TENSION,
            ))
            .fill(Fill::Radial {
                center: light,
                surround: vec![dark, dark, main, dark, dark, dark, dark],
            })
            .stroke(dark, 2.0),
            Primitive::new(Shape::ellipse(5.0, -10.0, 4.0, 4.0)).solid(dark),
        ],
        PieceKind::Bishop => vec![
            Primitive::new(Shape::ellipse(-18.0, 12.0, 36.0, 10.0))
                .fill(Fill::linear(main, dark, Vertical)),
            Primitive::new(Shape::polygon(&[(-15.0, 12.0), (-10.0, -8.0), (10.0, -8.0), (15.0, 12.0)]))
                .fill(Fill::linear_in(
                    light,
                    dark,
                    Horizontal,
                    RectF::from_ltwh(-15.0, -8.0, 30.0, 20.0),
                ))
                .stroke(dark, 2.0),
            Primitive::new(Shape::ellipse(-10.0, -22.0, 20.0, 20.0))
                .fill(Fill::linear(light, main, Angle(45.0)))
                .stroke(dark, 2.0),
            // Mitre slit.
            Primitive::new(Shape::line((-3.0, -18.0), (3.0, -18.0))).stroke(dark, 3.0),
        ],
        PieceKind::Queen => {
            let mut r = vec![
                Primitive::new(Shape::ellipse(-20.0, 12.0, 40.0, 10.0))
                    .fill(Fill::linear(main, dark, Vertical)),
                Primitive::new(Shape::ellipse(-18.0, -12.0, 36.0, 36.0))
                    .fill(Fill::linear(light, dark, Angle(45.0)))
                    .stroke(dark, 2.0),
            ];
            for p in ring_points(PointF::new(0.0, QUEEN_RING_DY), QUEEN_RING_RADIUS, 5) {
                r.push(
                    Primitive::new(Shape::Ellipse(RectF::centered_square(p, 10.0)))
                        .fill(Fill::linear(light, dark, Vertical))
                        .stroke(dark, 1.5),
                );
            }
            r
        }
        PieceKind::King => {
            let vertical = RectF::from_ltwh(-3.0, -32.0, 6.0, 20.0);
            let horizontal = RectF::from_ltwh(-10.0, -25.0, 20.0, 6.0);
            // Both bars share one brush spanning the vertical bar.
            let cross = Fill::linear_in(light, main, Vertical, vertical);
            vec![
                Primitive::new(Shape::ellipse(-20.0, 12.0, 40.0, 10.0))
                    .fill(Fill::linear(main, dark, Vertical)),
                Primitive::new(Shape::ellipse(-16.0, -10.0, 32.0, 32.0))
                    .fill(Fill::linear(light, dark, Angle(45.0)))
                    .stroke(dark, 2.0),
                Primitive::new(Shape::Rect(vertical)).fill(cross.clone()),
                Primitive::new(Shape::Rect(horizontal)).fill(cross),
                Primitive::new(Shape::Rect(vertical)).stroke(dark, 2.0),
                Primitive::new(Shape::Rect(horizontal)).stroke(dark, 2.0),
            ]
        }
    };

    if color.is_light() {
        if let Some(h) = highlight_layer(kind) {
            r.push(h);
        }
    }
    r
}

/// Specular overlay for the most prominent curved surface, if the kind has one.
pub fn highlight_layer(kind: PieceKind) -> Option<Primitive> {
    let (shape, alpha) = match kind {
        PieceKind::Pawn => (Shape::ellipse(-8.0, -22.0, 12.0, 10.0), 100),
        PieceKind::Rook => (Shape::rect(-14.0, -10.0, 8.0, 15.0), 80),
        PieceKind::Queen => (Shape::ellipse(-10.0, -8.0, 15.0, 12.0), 100),
        PieceKind::King => (Shape::ellipse(-10.0, -6.0, 15.0, 12.0), 100),
        PieceKind::Bishop | PieceKind::Knight => return None,
    };
    Some(Primitive::new(shape).solid(highlight(alpha)))
}
