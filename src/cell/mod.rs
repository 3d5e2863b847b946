//! Hex cells: a model object paired with the geometry it is drawn with

use crate::core::types::{Point, Point2D, Rect};
use crate::hex::HexShape;
use crate::layout::{LayoutCell, NonRectangular};

/// One rendered hex
///
/// The model is only read. The rectangle can only change through
/// [`NonRectangular::resize_base_rectangle`], which rebuilds the hexagon in the
/// same call, so the vertices always match the current rectangle.
#[derive(Debug, Clone)]
pub struct HexCell<M> {
    model: M,
    shape: HexShape,
    selected: bool,
}

impl<M> HexCell<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            shape: HexShape::default(),
            selected: false,
        }
    }

    pub fn with_rect(model: M, rect: Rect) -> Self {
        Self {
            model,
            shape: HexShape::new(rect),
            selected: false,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn set_model(&mut self, model: M) {
        self.model = model;
    }

    pub fn shape(&self) -> &HexShape {
        &self.shape
    }

    pub fn bounds(&self) -> Rect {
        self.shape.base_rect()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.shape.contains(point)
    }

    pub fn find_center(&self) -> Point {
        self.shape.find_center()
    }

    pub fn find_center_2d(&self) -> Point2D {
        self.shape.find_center_2d()
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn unselect(&mut self) {
        self.selected = false;
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

impl<M> NonRectangular for HexCell<M> {
    fn resize_base_rectangle(&mut self, rect: Rect) {
        self.shape.compute_vertices(rect);
    }
}

impl<M> LayoutCell for HexCell<M> {
    fn set_bounds(&mut self, bounds: Rect) {
        self.resize_base_rectangle(bounds);
    }

    fn non_rectangular(&mut self) -> Option<&mut dyn NonRectangular> {
        Some(self)
    }
}
