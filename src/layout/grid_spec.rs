//! Grid dimensions and shape options for one layout

use crate::core::error::{HexError, Result};
use serde::{Deserialize, Serialize};

/// Largest row or column count accepted from configuration
pub const MAX_DIMENSION: u32 = 4096;

/// Immutable configuration of a true hex grid
///
/// A zero `rows` or `cols` is derived from the number of cells at layout
/// time. When both are zero the grid is laid out as close to square as the
/// cell count allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub rows: u32,
    pub cols: u32,
    /// Indent the first, third, fifth... rows (odd counting from one) and
    /// keep the others flush left. Cleared, the second, fourth... rows are
    /// indented instead.
    pub indent_odd_rows: bool,
    /// Force square cells, wasting space on the longer container axis.
    pub isometric: bool,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            indent_odd_rows: false,
            isometric: true,
        }
    }
}

impl GridSpec {
    pub const fn new(rows: u32, cols: u32, indent_odd_rows: bool, isometric: bool) -> Self {
        Self {
            rows,
            cols,
            indent_odd_rows,
            isometric,
        }
    }

    /// Isometric grid, the common case for battle boards.
    pub const fn isometric(rows: u32, cols: u32, indent_odd_rows: bool) -> Self {
        Self::new(rows, cols, indent_odd_rows, true)
    }

    /// Resolve the actual row and column counts for `count` cells.
    ///
    /// Returns `None` when there is nothing to lay out.
    pub fn resolve(&self, count: usize) -> Option<(usize, usize)> {
        if count == 0 {
            return None;
        }
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let resolved = if cols > 0 {
            (count.div_ceil(cols), cols)
        } else if rows > 0 {
            (rows, count.div_ceil(rows))
        } else {
            let side = square_side(count);
            (count.div_ceil(side), side)
        };
        Some(resolved)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(HexError::InvalidGrid(format!(
                "{}x{} exceeds the {} cell limit per axis",
                self.rows, self.cols, MAX_DIMENSION
            )));
        }
        Ok(())
    }
}

/// Smallest side whose square holds `count` cells.
fn square_side(count: usize) -> usize {
    let mut side = (count as f64).sqrt() as usize;
    while side * side < count {
        side += 1;
    }
    side.max(1)
}
