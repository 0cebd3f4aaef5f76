// File: crates/piece-core/src/types.rs
// Summary: Shared types and constants (piece kinds, sides, styles, colors, sizes).

use std::fmt;
use std::str::FromStr;

/// Canvas side length the recipe offsets are authored at, in pixels.
pub const REFERENCE_SIZE: u32 = 80;
/// Largest canvas side accepted by the renderer.
pub const MAX_SIZE: u32 = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All kinds in batch enumeration order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Pawn => "pawn",
        }
    }
}

/// Side a piece belongs to. White is the light variant, Black the dark one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub const ALL: [PieceColor; 2] = [PieceColor::White, PieceColor::Black];

    pub const fn name(self) -> &'static str {
        match self {
            PieceColor::White => "white",
            PieceColor::Black => "black",
        }
    }

    pub const fn is_light(self) -> bool {
        matches!(self, PieceColor::White)
    }
}

/// Rendering family: solid fills or gradient shading with highlights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    Flat,
    #[default]
    Realistic,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Flat, Style::Realistic];

    pub const fn name(self) -> &'static str {
        match self {
            Style::Flat => "flat",
            Style::Realistic => "realistic",
        }
    }
}

macro_rules! impl_name_traits {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| format!("unknown {} '{}'", $what, s))
            }
        }
    };
}

impl_name_traits!(PieceKind, "piece kind");
impl_name_traits!(PieceColor, "piece color");
impl_name_traits!(Style, "style");

/// Output file name for a piece, e.g. `white_king.png`.
pub fn file_name(kind: PieceKind, color: PieceColor) -> String {
    format!("{}_{}.png", color.name(), kind.name())
}

/// The twelve (kind, color) pairs: all White kinds first, then all Black.
pub fn all_pieces() -> impl Iterator<Item = (PieceKind, PieceColor)> {
    PieceColor::ALL
        .into_iter()
        .flat_map(|c| PieceKind::ALL.into_iter().map(move |k| (k, c)))
}

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Perceived brightness (Rec. 601 luma), 0..=255.
    pub fn luma(&self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }

    pub const fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Channel-wise linear blend; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgba::rgba(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b), mix(self.a, other.a))
    }

    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba::rgba(self.r, self.g, self.b, a)
    }
}
