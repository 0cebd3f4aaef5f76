// File: crates/piece-core/tests/highlight.rs
// Purpose: Specular overlay appears on light realistic pieces only.

use piece_core::geometry::Layout;
use piece_core::render::place;
use piece_core::{
    recipe, render_piece, render_with, Canvas, PieceColor, PieceKind, RecordingCanvas, RenderOptions, SkiaCanvas,
    Style, REFERENCE_SIZE,
};

const HIGHLIGHTED: [PieceKind; 4] = [PieceKind::King, PieceKind::Queen, PieceKind::Rook, PieceKind::Pawn];

#[test]
fn light_pieces_finish_with_translucent_white() {
    for kind in HIGHLIGHTED {
        let drawn = render_with(RecordingCanvas::new(80), kind, PieceColor::White, Style::Realistic).unwrap();
        let last = drawn.last().unwrap();
        assert!(last.is_translucent(), "{kind}");
        assert!(last.stroke.is_none());
        let alpha = last.fill.as_ref().unwrap().colors()[0].a;
        assert!((80..=100).contains(&alpha), "{kind} highlight alpha {alpha}");
    }
}

#[test]
fn dark_pieces_have_no_translucent_layer() {
    for kind in PieceKind::ALL {
        let drawn = render_with(RecordingCanvas::new(80), kind, PieceColor::Black, Style::Realistic).unwrap();
        assert!(drawn.iter().all(|p| !p.is_translucent()), "{kind}");
    }
}

#[test]
fn flat_style_never_highlights() {
    for (kind, color) in piece_core::all_pieces() {
        assert!(recipe(kind, color, Style::Flat).iter().all(|p| !p.is_translucent()));
    }
}

#[test]
fn highlight_lightens_the_surface_beneath() {
    let layout = Layout::new(80, REFERENCE_SIZE);
    for kind in HIGHLIGHTED {
        let full = render_piece(kind, PieceColor::White, &RenderOptions::new(80, Style::Realistic)).unwrap();

        let mut layers = recipe(kind, PieceColor::White, Style::Realistic);
        let overlay = layers.pop().unwrap();
        let mut canvas = SkiaCanvas::new(80, "base").unwrap();
        for p in &layers {
            canvas.draw(&place(p, &layout)).unwrap();
        }
        let base = canvas.finish().unwrap();

        let c = layout.rect(overlay.shape.bounds()).center();
        let (x, y) = (c.x as u32, c.y as u32);
        let lit = full.pixel(x, y).unwrap();
        let unlit = base.pixel(x, y).unwrap();
        assert!(lit.is_opaque() && unlit.is_opaque(), "{kind}: overlay sits on an opaque body");
        assert!(lit.luma() >= unlit.luma(), "{kind}: {lit:?} vs {unlit:?}");
        if kind == PieceKind::Rook {
            assert!(lit.luma() > unlit.luma());
        }
    }
}
