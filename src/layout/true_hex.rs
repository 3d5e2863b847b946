//! True hexagonal grid layout
//!
//! Cells are placed in a rectangular grid where alternate rows are shifted
//! right by half a cell and rows are separated by a vertical gap sized so
//! that each hexagon's pointed parts can be drawn into it. The result is a
//! hexagonal tessellation built from plain rectangles.
//!
//! All arithmetic is integer division truncating toward zero. Every row's
//! `y` accumulates the rounding of the rows above it, so changing any step
//! shifts the whole board.

use super::grid_spec::GridSpec;
use crate::core::types::{Frame, Rect};

/// Receives the rectangle a layout pass assigns to it
pub trait LayoutCell {
    /// Generic bounds assignment for cells without internal geometry
    fn set_bounds(&mut self, bounds: Rect);

    /// Cells that derive their own geometry from the rectangle expose it here.
    fn non_rectangular(&mut self) -> Option<&mut dyn NonRectangular> {
        None
    }
}

/// A cell whose visible shape is not its bounding rectangle
pub trait NonRectangular {
    /// Take `rect` as the new base rectangle and rebuild the shape from it
    /// in the same step.
    fn resize_base_rectangle(&mut self, rect: Rect);
}

impl LayoutCell for Rect {
    fn set_bounds(&mut self, bounds: Rect) {
        *self = bounds;
    }
}

impl<T: LayoutCell + ?Sized> LayoutCell for Box<T> {
    fn set_bounds(&mut self, bounds: Rect) {
        (**self).set_bounds(bounds);
    }

    fn non_rectangular(&mut self) -> Option<&mut dyn NonRectangular> {
        (**self).non_rectangular()
    }
}

/// An empty slot keeps its index but receives nothing.
impl<T: LayoutCell> LayoutCell for Option<T> {
    fn set_bounds(&mut self, bounds: Rect) {
        if let Some(cell) = self {
            cell.set_bounds(bounds);
        }
    }

    fn non_rectangular(&mut self) -> Option<&mut dyn NonRectangular> {
        self.as_mut().and_then(|cell| cell.non_rectangular())
    }
}

/// Sizes derived for one layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub rows: usize,
    pub cols: usize,
    pub comp_width: i32,
    pub comp_height: i32,
    /// Horizontal shift of indented rows. Computed before the isometric
    /// clamp, so it can exceed half of `comp_width`.
    pub row_indent: i32,
    pub vgap: i32,
}

impl GridMetrics {
    /// Distance between the tops of consecutive rows
    pub fn row_pitch(&self) -> i32 {
        self.comp_height + self.vgap
    }
}

/// Layout manager for true hex grids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrueHexGridLayout {
    spec: GridSpec,
}

impl TrueHexGridLayout {
    pub fn new(spec: GridSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Compute cell sizes for `count` cells in `frame`.
    ///
    /// `None` when there are no cells. Unsized containers give zero or
    /// negative sizes rather than failing.
    pub fn metrics(&self, frame: Frame, count: usize) -> Option<GridMetrics> {
        let (rows, cols) = self.spec.resolve(count)?;

        let mut width = frame.inner_width() as i64;
        let mut height = frame.inner_height() as i64;
        if self.spec.isometric {
            if height > width {
                height = width;
            } else {
                width = height;
            }
        }

        // The extra half cell is room for the indented rows.
        let mut comp_width = (width * 2) / (cols as i64 * 2 + 1);
        let row_indent = comp_width / 2;
        let mut vgap = height / (rows as i64 * 5 + 1);
        let mut comp_height = vgap * 4;
        if self.spec.isometric {
            if comp_width > comp_height {
                comp_width = comp_height;
            } else {
                comp_height = comp_width;
            }
            vgap = comp_height / 4;
        }

        Some(GridMetrics {
            rows,
            cols,
            comp_width: comp_width as i32,
            comp_height: comp_height as i32,
            row_indent: row_indent as i32,
            vgap: vgap as i32,
        })
    }

    /// Whether cells in `row` are shifted right by `row_indent`.
    pub fn is_indented(&self, row: usize) -> bool {
        let even = row % 2 == 0;
        even == self.spec.indent_odd_rows
    }

    /// Rectangles for cells `0..count`, in row-major order.
    pub fn compute(&self, frame: Frame, count: usize) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(count);
        self.walk(frame, count, |_, rect| rects.push(rect));
        rects
    }

    /// Assign a rectangle to every cell.
    ///
    /// Cells exposing [`NonRectangular`] are resized through that hook;
    /// the rest get a plain bounds assignment.
    pub fn layout_cells<C: LayoutCell>(&self, frame: Frame, cells: &mut [C]) {
        self.walk(frame, cells.len(), |i, rect| {
            let cell = &mut cells[i];
            match cell.non_rectangular() {
                Some(shaped) => shaped.resize_base_rectangle(rect),
                None => cell.set_bounds(rect),
            }
        });
    }

    fn walk(&self, frame: Frame, count: usize, mut place: impl FnMut(usize, Rect)) {
        let Some(m) = self.metrics(frame, count) else {
            return;
        };
        if m.comp_width <= 0 || m.comp_height <= 0 {
            tracing::debug!(?frame, ?m, "Container not sized yet, cells will be degenerate");
        }
        tracing::debug!(
            rows = m.rows,
            cols = m.cols,
            comp_width = m.comp_width,
            comp_height = m.comp_height,
            vgap = m.vgap,
            count,
            "Laying out true hex grid"
        );

        // layout left to right one row at a time, top to bottom
        let mut y = frame.insets.top + m.vgap;
        for row in 0..m.rows {
            let mut x = if self.is_indented(row) {
                frame.insets.left + m.row_indent
            } else {
                frame.insets.left
            };
            for col in 0..m.cols {
                let i = row * m.cols + col;
                if i < count {
                    let rect = Rect::new(x, y, m.comp_width, m.comp_height);
                    tracing::trace!(index = i, ?rect, "Placed cell");
                    place(i, rect);
                }
                x += m.comp_width;
            }
            y += m.row_pitch();
        }
    }
}
