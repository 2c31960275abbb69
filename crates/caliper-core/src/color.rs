//! Stroke colors: a serializable RGBA value plus the sidebar draw palette.

use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable stroke color (RGBA components as u8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Color from explicit components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Default stroke for new lines.
    pub fn black() -> Self {
        Self::opaque(0, 0, 0)
    }

    /// Default stroke for new polylines.
    pub fn blue() -> Self {
        Self::opaque(0, 0, 255)
    }

    /// Default stroke for new circles.
    pub fn red() -> Self {
        Self::opaque(255, 0, 0)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

/// Stroke colors offered by the sidebar picker, ordered warm to cool.
pub const DRAW_PALETTE: [Rgba; 23] = [
    Rgba::opaque(255, 0, 0),    // red
    Rgba::opaque(220, 20, 60),  // crimson
    Rgba::opaque(255, 69, 0),   // orange red
    Rgba::opaque(255, 140, 0),  // dark orange
    Rgba::opaque(255, 165, 0),  // orange
    Rgba::opaque(255, 215, 0),  // gold
    Rgba::opaque(255, 255, 0),  // yellow
    Rgba::opaque(173, 255, 47), // green yellow
    Rgba::opaque(124, 252, 0),  // lawn green
    Rgba::opaque(50, 205, 50),  // lime green
    Rgba::opaque(0, 255, 127),  // spring green
    Rgba::opaque(0, 250, 154),  // medium spring green
    Rgba::opaque(127, 255, 212), // aquamarine
    Rgba::opaque(64, 224, 208), // turquoise
    Rgba::opaque(0, 255, 255),  // aqua
    Rgba::opaque(0, 191, 255),  // deep sky blue
    Rgba::opaque(30, 144, 255), // dodger blue
    Rgba::opaque(123, 104, 238), // medium slate blue
    Rgba::opaque(147, 112, 219), // medium purple
    Rgba::opaque(138, 43, 226), // blue violet
    Rgba::opaque(148, 0, 211),  // dark violet
    Rgba::opaque(128, 0, 128),  // purple
    Rgba::opaque(199, 21, 133), // medium violet red
];

/// Palette entry for the n-th drawn shape, cycling once the palette is
/// exhausted.
pub fn palette_color(index: usize) -> Rgba {
    DRAW_PALETTE[index % DRAW_PALETTE.len()]
}
