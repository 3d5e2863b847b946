//! Core type definitions used throughout the codebase

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

/// Integer pixel position
pub type Point = IVec2;

/// Sub-pixel position used for vertex math
pub type Point2D = DVec2;

/// Round half up, the way pixel coordinates are snapped everywhere in the crate.
///
/// `f64::round` rounds half away from zero, which disagrees for negative
/// halves (`-2.5` must become `-2`).
#[inline]
pub fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Snap a sub-pixel position to the pixel grid.
#[inline]
pub fn to_pixel(p: Point2D) -> Point {
    IVec2::new(round_half_up(p.x), round_half_up(p.y))
}

/// Axis-aligned integer rectangle (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// A rectangle with no positive area
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open containment, matching how pixels are addressed.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Smallest rectangle covering the given float extents.
    pub fn enclosing(min: Point2D, max: Point2D) -> Self {
        let x = min.x.floor() as i32;
        let y = min.y.floor() as i32;
        Self {
            x,
            y,
            width: max.x.ceil() as i32 - x,
            height: max.y.ceil() as i32 - y,
        }
    }
}

/// Container dimensions as reported by the host window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Border space reserved by the container on each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Insets {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Insets {
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self { top, left, bottom, right }
    }

    pub const fn uniform(v: i32) -> Self {
        Self::new(v, v, v, v)
    }
}

/// Everything the layout pass reads from the container on each resize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    pub size: Size,
    pub insets: Insets,
}

impl Frame {
    pub const fn new(size: Size, insets: Insets) -> Self {
        Self { size, insets }
    }

    /// Space left for cells once insets are removed. May be negative while
    /// the host has not sized the container yet.
    pub fn inner_width(&self) -> i32 {
        self.size.width - (self.insets.left + self.insets.right)
    }

    pub fn inner_height(&self) -> i32 {
        self.size.height - (self.insets.top + self.insets.bottom)
    }
}
