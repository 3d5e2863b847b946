//! A grid view: cells, their layout and the renderer settings they share

use crate::cell::HexCell;
use crate::core::config::{RenderConfig, ViewConfig};
use crate::core::types::{Frame, Point};
use crate::layout::{GridMetrics, GridSpec, TrueHexGridLayout};

/// Owns the cells of one hex grid view.
///
/// All mutation goes through `&mut self`; the host calls [`HexBoard::relayout`]
/// from its UI thread whenever the container is resized.
#[derive(Debug, Clone)]
pub struct HexBoard<M> {
    layout: TrueHexGridLayout,
    render: RenderConfig,
    cells: Vec<HexCell<M>>,
    frame: Option<Frame>,
}

impl<M> HexBoard<M> {
    pub fn new(spec: GridSpec, render: RenderConfig) -> Self {
        Self {
            layout: TrueHexGridLayout::new(spec),
            render,
            cells: Vec::new(),
            frame: None,
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(config.grid, config.render)
    }

    /// Build a board with one cell per model, in row-major order.
    pub fn with_models(spec: GridSpec, render: RenderConfig, models: impl IntoIterator<Item = M>) -> Self {
        let mut board = Self::new(spec, render);
        board.cells = models.into_iter().map(HexCell::new).collect();
        board
    }

    pub fn spec(&self) -> &GridSpec {
        self.layout.spec()
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    pub fn set_render_config(&mut self, render: RenderConfig) {
        self.render = render;
    }

    /// Append a cell, laying the board out again if it has been sized.
    pub fn push(&mut self, model: M) {
        self.cells.push(HexCell::new(model));
        if let Some(frame) = self.frame {
            self.relayout(frame);
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[HexCell<M>] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&HexCell<M>> {
        self.cells.get(index)
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut HexCell<M>> {
        self.cells.get_mut(index)
    }

    /// Lay the cells out for a new container size.
    pub fn relayout(&mut self, frame: Frame) {
        self.frame = Some(frame);
        self.layout.layout_cells(frame, &mut self.cells);
    }

    /// Metrics of the most recent layout pass
    pub fn metrics(&self) -> Option<GridMetrics> {
        self.frame
            .and_then(|frame| self.layout.metrics(frame, self.cells.len()))
    }

    /// Index of the cell whose hexagon contains `point`.
    ///
    /// Neighbouring rectangles overlap where rows interlock, so this tests
    /// the hexagons rather than their rectangles.
    pub fn index_at(&self, point: Point) -> Option<usize> {
        self.cells.iter().position(|cell| cell.contains(point))
    }

    pub fn cell_at(&self, point: Point) -> Option<&HexCell<M>> {
        self.index_at(point).map(|i| &self.cells[i])
    }

    /// Select every cell matching `pred`, returning how many changed.
    pub fn select_where(&mut self, mut pred: impl FnMut(&M) -> bool) -> usize {
        let mut changed = 0;
        for cell in &mut self.cells {
            if !cell.is_selected() && pred(cell.model()) {
                cell.select();
                changed += 1;
            }
        }
        changed
    }

    /// Unselect every cell matching `pred`, returning how many changed.
    pub fn unselect_where(&mut self, mut pred: impl FnMut(&M) -> bool) -> usize {
        let mut changed = 0;
        for cell in &mut self.cells {
            if cell.is_selected() && pred(cell.model()) {
                cell.unselect();
                changed += 1;
            }
        }
        changed
    }

    pub fn unselect_all(&mut self) -> usize {
        self.unselect_where(|_| true)
    }

    pub fn selected(&self) -> impl Iterator<Item = &HexCell<M>> {
        self.cells.iter().filter(|cell| cell.is_selected())
    }
}

impl<M: PartialEq> HexBoard<M> {
    /// The cell rendering `model`.
    pub fn find(&self, model: &M) -> Option<&HexCell<M>> {
        self.cells.iter().find(|cell| cell.model() == model)
    }

    pub fn find_mut(&mut self, model: &M) -> Option<&mut HexCell<M>> {
        self.cells.iter_mut().find(|cell| cell.model() == model)
    }
}
