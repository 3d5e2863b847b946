//! Layout of hex cells inside a resizable container

pub mod grid_spec;
pub mod true_hex;

pub use grid_spec::{GridSpec, MAX_DIMENSION};
pub use true_hex::{GridMetrics, LayoutCell, NonRectangular, TrueHexGridLayout};
