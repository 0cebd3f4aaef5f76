// File: crates/piece-core/tests/gradients.rs
// Purpose: Gradient direction and color order in rendered realistic pieces.

use piece_core::{render_piece, Palette, PieceColor, PieceKind, PixelBuffer, RenderOptions, Rgba, Style};

fn render(kind: PieceKind, color: PieceColor) -> PixelBuffer {
    render_piece(kind, color, &RenderOptions::new(80, Style::Realistic)).expect("render")
}

fn px(buf: &PixelBuffer, x: u32, y: u32) -> Rgba {
    let p = buf.pixel(x, y).expect("in bounds");
    assert_eq!(p.a, 255, "({x},{y}) should be opaque");
    p
}

fn near(got: Rgba, want: Rgba, tol: u8) -> bool {
    got.r.abs_diff(want.r) <= tol && got.g.abs_diff(want.g) <= tol && got.b.abs_diff(want.b) <= tol
}

#[test]
fn rook_body_runs_light_to_dark_left_to_right() {
    // Body spans x 24..56, y 25..50; row 47 is below the white overlay.
    for color in PieceColor::ALL {
        let buf = render(PieceKind::Rook, color);
        let left = px(&buf, 28, 47);
        let right = px(&buf, 52, 47);
        assert!(left.r > right.r + 20, "{color}: left {left:?} right {right:?}");
    }
}

#[test]
fn pawn_head_runs_light_to_main_along_the_diagonal() {
    // Head spans (26,15)..(54,43); black has no overlay over the top-left.
    let buf = render(PieceKind::Pawn, PieceColor::Black);
    let top_left = px(&buf, 33, 22);
    let bottom_right = px(&buf, 47, 36);
    assert!(top_left.r > bottom_right.r + 8, "{top_left:?} vs {bottom_right:?}");

    let palette = Palette::resolve(PieceColor::Black, Style::Realistic);
    assert!(top_left.r <= palette.light.r && bottom_right.r >= palette.main.r);
}

#[test]
fn king_cross_shares_one_vertical_brush() {
    for color in PieceColor::ALL {
        let palette = Palette::resolve(color, Style::Realistic);
        let buf = render(PieceKind::King, color);
        // Vertical bar spans y 8..28 at x 37..43.
        let top = px(&buf, 40, 11);
        let bottom = px(&buf, 40, 25);
        let step = (palette.light.r - palette.main.r) / 3;
        assert!(top.r > bottom.r + step, "{color}: top {top:?} bottom {bottom:?}");

        // One vertical brush fills both bars: color depends on the row only.
        let bar = px(&buf, 32, 18);
        let stem = px(&buf, 40, 18);
        assert!(near(bar, stem, 1), "{color}: bar {bar:?} stem {stem:?}");
    }
}

#[test]
fn knight_body_is_light_at_the_centroid_and_dark_at_the_rim() {
    for color in PieceColor::ALL {
        let palette = Palette::resolve(color, Style::Realistic);
        let buf = render(PieceKind::Knight, color);
        // Vertex centroid of the head outline sits near (42.9, 36.9).
        let centre = px(&buf, 42, 36);
        // Just inside the bottom edge, between two dark rim vertices.
        let rim = px(&buf, 40, 52);
        assert!(near(centre, palette.light, 12), "{color}: centre {centre:?}");
        assert!(near(rim, palette.dark, 16), "{color}: rim {rim:?}");
        assert!(centre.r > rim.r, "{color}");
    }
}
