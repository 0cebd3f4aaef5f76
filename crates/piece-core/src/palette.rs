// File: crates/piece-core/src/palette.rs
// Summary: Per-side working colors for each rendering style.

use crate::types::{PieceColor, Rgba, Style};

/// Three working tones of one piece.
/// Flat pieces only use `main` (fill) and `dark` (outline); `light` mirrors `main`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub main: Rgba,
    pub dark: Rgba,
    pub light: Rgba,
}

impl Palette {
    pub fn resolve(color: PieceColor, style: Style) -> Self {
        match (style, color) {
            (Style::Flat, PieceColor::White) => Self::flat(Rgba::WHITE, Rgba::BLACK),
            (Style::Flat, PieceColor::Black) => {
                Self::flat(Rgba::rgb(40, 40, 40), Rgba::rgb(220, 220, 220))
            }
            (Style::Realistic, PieceColor::White) => Self {
                main: Rgba::rgb(240, 240, 240),
                dark: Rgba::rgb(180, 180, 180),
                light: Rgba::WHITE,
            },
            (Style::Realistic, PieceColor::Black) => Self {
                main: Rgba::rgb(60, 60, 60),
                dark: Rgba::rgb(30, 30, 30),
                light: Rgba::rgb(90, 90, 90),
            },
        }
    }

    const fn flat(fill: Rgba, outline: Rgba) -> Self {
        Self { main: fill, dark: outline, light: fill }
    }

    /// Flat-style fill color.
    pub const fn fill(&self) -> Rgba { self.main }
    /// Flat-style outline color.
    pub const fn outline(&self) -> Rgba { self.dark }
}

/// Overlay used for the specular highlight on light realistic pieces.
pub const fn highlight(alpha: u8) -> Rgba {
    Rgba::rgba(255, 255, 255, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn realistic_constants_are_exact() {
        let w = Palette::resolve(PieceColor::White, Style::Realistic);
        assert_eq!(w.main, Rgba::rgb(240, 240, 240));
        assert_eq!(w.dark, Rgba::rgb(180, 180, 180));
        assert_eq!(w.light, Rgba::rgb(255, 255, 255));
        let b = Palette::resolve(PieceColor::Black, Style::Realistic);
        assert_eq!(b.main, Rgba::rgb(60, 60, 60));
        assert_eq!(b.dark, Rgba::rgb(30, 30, 30));
        assert_eq!(b.light, Rgba::rgb(90, 90, 90));
    }

    #[test]
    fn realistic_tones_are_ordered() {
        for c in PieceColor::ALL {
            let p = Palette::resolve(c, Style::Realistic);
            assert!(p.dark.luma() < p.main.luma());
            assert!(p.light.luma() >= p.main.luma());
        }
    }

    #[test]
    fn flat_uses_fill_and_outline_pairs() {
        let w = Palette::resolve(PieceColor::White, Style::Flat);
        assert_eq!((w.fill(), w.outline()), (Rgba::WHITE, Rgba::BLACK));
        let b = Palette::resolve(PieceColor::Black, Style::Flat);
        assert_eq!(b.fill(), Rgba::rgb(40, 40, 40));
        assert_eq!(b.outline(), Rgba::rgb(220, 220, 220));
    }
}
