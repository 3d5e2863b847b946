//! Color definitions for hex outlines, glyphs and highlights

use serde::{Deserialize, Serialize};

/// RGBA color (0.0 to 1.0 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Complementary color, alpha kept
    pub fn invert(&self) -> Self {
        Self {
            r: 1.0 - self.r,
            g: 1.0 - self.g,
            b: 1.0 - self.b,
            a: self.a,
        }
    }
}

pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

/// Border of a selected hex
pub const HIGHLIGHT: Color = Color::rgb(1.0, 0.0, 0.0);

/// River hexsides
pub const SKY_BLUE: Color = Color::rgb(0.529, 0.808, 0.922);

/// Highlight that stays visible on top of `fill`.
pub fn highlight_for(fill: Color) -> Color {
    if fill == HIGHLIGHT {
        HIGHLIGHT.invert()
    } else {
        HIGHLIGHT
    }
}
