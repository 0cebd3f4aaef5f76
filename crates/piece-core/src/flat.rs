// File: crates/piece-core/src/flat.rs
// Summary: Flat-style recipes: solid fills with a single outline color.

use crate::geometry::{ring_points, PointF};
use crate::palette::Palette;
use crate::recipe::{Primitive, Recipe, Shape};
use crate::types::PieceKind;

/// Crown ring of the queen: radius and vertical offset of its center.
pub const QUEEN_RING_RADIUS: f32 = 22.0;
pub const QUEEN_RING_DY: f32 = -15.0;

pub fn recipe(kind: PieceKind, palette: &Palette) -> Recipe {
    let fill = palette.fill();
    let outline = palette.outline();
    let outlined = |shape: Shape, width: f32| Primitive::new(shape).solid(fill).stroke(outline, width);

    match kind {
        PieceKind::Pawn => vec![
            outlined(Shape::ellipse(-12.0, -20.0, 24.0, 24.0), 2.0),
            outlined(Shape::rect(-8.0, -5.0, 16.0, 15.0), 2.0),
        ],
        PieceKind::Rook => {
            let mut r = vec![outlined(Shape::rect(-15.0, -15.0, 30.0, 35.0), 2.0)];
            r.extend((0..3).map(|i| {
                outlined(Shape::rect(-13.0 + i as f32 * 10.0, -25.0, 8.0, 10.0), 1.0)
            }));
            r
        }
        PieceKind::Knight => vec![outlined(
            Shape::polygon(&[
                (-10.0, 10.0),
                (-5.0, -10.0),
                (5.0, -15.0),
                (10.0, -10.0),
                (10.0, 10.0),
                (2.0, 15.0),
                (-10.0, 15.0),
            ]),
            2.0,
        )],
        PieceKind::Bishop => vec![
            outlined(Shape::ellipse(-5.0, -28.0, 10.0, 10.0), 2.0),
            outlined(Shape::polygon(&[(0.0, -15.0), (-15.0, 20.0), (15.0, 20.0)]), 2.0),
        ],
        PieceKind::Queen => {
            let mut r = vec![outlined(Shape::ellipse(-18.0, -15.0, 36.0, 36.0), 2.0)];
            // Crown points are solid outline-colored dots without a stroke.
            for p in ring_points(PointF::new(0.0, QUEEN_RING_DY), QUEEN_RING_RADIUS, 5) {
                r.push(Primitive::new(Shape::ellipse(p.x - 4.0, p.y - 4.0, 8.0, 8.0)).solid(outline));
            }
            r
        }
        PieceKind::King => vec![
            outlined(Shape::ellipse(-16.0, -12.0, 32.0, 32.0), 2.0),
            Primitive::new(Shape::rect(-2.0, -32.0, 4.0, 18.0)).solid(outline),
            Primitive::new(Shape::rect(-7.0, -25.0, 14.0, 4.0)).solid(outline),
        ],
    }
}
