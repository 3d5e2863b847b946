//! Hexagon geometry for hex cells

pub mod decoration;
pub mod shape;

pub use decoration::{edge_angle, ArcSpec, Decoration, Gate, Hexside};
pub use shape::{even_odd_contains, HexShape, SQRT3};
