//! Draw lists for hex cells
//!
//! Turns a cell's geometry into backend-neutral primitives. Nothing here
//! rasterises, loads images or touches the cell; the host replays the list
//! with whatever graphics API it uses.

pub mod colors;

use crate::cell::HexCell;
use crate::core::config::RenderConfig;
use crate::core::types::{Point2D, Rect};
use crate::hex::{ArcSpec, Decoration, Gate, HexShape, Hexside};
use colors::{highlight_for, Color, BLACK, SKY_BLUE, WHITE};
use geo::Polygon;
use serde::Serialize;

/// Width of the line drawn for rivers
pub const RIVER_WIDTH: f32 = 5.0;

/// One drawing operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Primitive {
    FillPolygon { points: Vec<Point2D>, color: Color },
    StrokePath { points: Vec<Point2D>, closed: bool, color: Color },
    Line { from: Point2D, to: Point2D, width: f32, color: Color },
    FillArc { arc: ArcSpec, color: Color },
    StrokeArc { arc: ArcSpec, color: Color },
    /// Terrain overlay image stretched over `bounds`, supplied by the host
    Overlay { bounds: Rect },
    /// Text centred on `anchor`, never antialiased
    Text { text: String, anchor: Point2D, color: Color },
}

/// Primitives for one cell, in paint order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DrawList {
    pub antialias: bool,
    pub primitives: Vec<Primitive>,
}

impl DrawList {
    fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// What the model says a hex looks like
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HexAppearance {
    pub fill: Option<Color>,
    /// Terrain name, drawn across the middle
    pub name: Option<String>,
    /// Hex label, drawn in the upper left unless `label_side` says otherwise
    pub label: Option<String>,
    /// Master board hexes put the label beside one edge, 0 top then clockwise
    pub label_side: Option<u8>,
    /// Master board hex pointing down; moves long terrain names up
    pub inverted: bool,
    /// Hazards on each edge, drawn from this side
    pub hexsides: [Hexside; 6],
    /// Hazards owned by the neighbour across each edge, drawn back toward it
    pub opposite_hexsides: [Hexside; 6],
    pub exits: [Gate; 6],
    pub entrances: [Gate; 6],
}

/// Build the draw list for one cell.
pub fn paint_hex<M>(cell: &HexCell<M>, appearance: &HexAppearance, config: &RenderConfig) -> DrawList {
    let shape = cell.shape();
    let outline: Vec<Point2D> = shape.vertices().to_vec();
    let fill = appearance.fill.unwrap_or(WHITE);
    let mut list = DrawList {
        antialias: config.antialias,
        primitives: Vec::new(),
    };

    if cell.is_selected() {
        list.push(Primitive::FillPolygon {
            points: outline.clone(),
            color: highlight_for(fill),
        });
        let inner = ring_points(&shape.inner_hexagon(config.inner_scale));
        list.push(Primitive::FillPolygon {
            points: inner.clone(),
            color: fill,
        });
        list.push(Primitive::StrokePath {
            points: inner,
            closed: true,
            color: BLACK,
        });
    } else {
        list.push(Primitive::FillPolygon {
            points: outline.clone(),
            color: fill,
        });
    }
    list.push(Primitive::StrokePath {
        points: outline,
        closed: true,
        color: BLACK,
    });

    if config.overlay {
        list.push(Primitive::Overlay { bounds: cell.bounds() });
    } else {
        push_edge_glyphs(&mut list, shape, appearance);
    }
    push_gates(&mut list, shape, appearance);
    push_labels(&mut list, shape, appearance, !config.overlay);
    list
}

/// Label anchor as fractions of the base rectangle's width and height
fn label_anchor(side: Option<u8>) -> (f64, f64) {
    match side.map(|s| s % 6) {
        Some(0) => (1.0 / 2.0, 1.0 / 10.0),
        Some(1) => (5.0 / 6.0, 1.0 / 8.0),
        Some(2) => (5.0 / 6.0, 7.0 / 8.0),
        Some(3) => (1.0 / 2.0, 9.0 / 10.0),
        Some(4) => (1.0 / 6.0, 5.0 / 6.0),
        Some(_) => (1.0 / 6.0, 1.0 / 8.0),
        None => (1.0 / 3.0, 1.0 / 4.0),
    }
}

/// Long names only fit across the wide part of a master board hex.
fn name_height(name: &str, inverted: bool) -> f64 {
    if name.chars().count() < 8 {
        1.0 / 2.0
    } else if inverted {
        1.0 / 3.0
    } else {
        2.0 / 3.0
    }
}

fn push_edge_glyphs(list: &mut DrawList, shape: &HexShape, appearance: &HexAppearance) {
    for i in 0..6 {
        if appearance.hexsides[i] != Hexside::Nothing {
            for d in shape.edge_decorations(i, appearance.hexsides[i]) {
                push_decoration(list, d);
            }
        }
        if appearance.opposite_hexsides[i] != Hexside::Nothing {
            for d in shape.opposite_edge_decorations(i, appearance.opposite_hexsides[i]) {
                push_decoration(list, d);
            }
        }
    }
}

fn push_gates(list: &mut DrawList, shape: &HexShape, appearance: &HexAppearance) {
    for i in 0..6 {
        let (from, to) = shape.edge(i);
        if appearance.exits[i] != Gate::None {
            for d in shape.gate_decorations(from, to, appearance.exits[i]) {
                push_decoration(list, d);
            }
        }
        // Exits reach into the neighbour and get painted over, so they are
        // drawn again from this side as entrances.
        if appearance.entrances[i] != Gate::None {
            for d in shape.gate_decorations(to, from, appearance.entrances[i]) {
                push_decoration(list, d);
            }
        }
    }
}

fn push_labels(list: &mut DrawList, shape: &HexShape, appearance: &HexAppearance, with_name: bool) {
    let b = shape.base_rect();
    let (x, y, w, h) = (b.x as f64, b.y as f64, b.width as f64, b.height as f64);
    if let Some(name) = appearance.name.as_deref().filter(|_| with_name) {
        list.push(Primitive::Text {
            text: name.to_uppercase(),
            anchor: Point2D::new(x + w / 2.0, y + h * name_height(name, appearance.inverted)),
            color: BLACK,
        });
    }
    if let Some(label) = &appearance.label {
        let (fx, fy) = label_anchor(appearance.label_side);
        list.push(Primitive::Text {
            text: label.clone(),
            anchor: Point2D::new(x + w * fx, y + h * fy),
            color: BLACK,
        });
    }
}

fn push_decoration(list: &mut DrawList, decoration: Decoration) {
    match decoration {
        Decoration::Triangle(points) => push_filled_glyph(list, points.to_vec()),
        Decoration::Block(points) => push_filled_glyph(list, points.to_vec()),
        Decoration::SlopeLines(p) => {
            list.push(black_line(p[0], p[1]));
            list.push(black_line(p[2], p[3]));
        }
        Decoration::Arc(arc) => {
            list.push(Primitive::FillArc { arc, color: WHITE });
            list.push(Primitive::StrokeArc { arc, color: BLACK });
        }
        Decoration::River(from, to) => list.push(Primitive::Line {
            from,
            to,
            width: RIVER_WIDTH,
            color: SKY_BLUE,
        }),
        Decoration::Arch { arc, opening } => {
            list.push(Primitive::FillArc { arc, color: WHITE });
            list.push(Primitive::StrokeArc { arc, color: BLACK });
            list.push(Primitive::FillPolygon {
                points: opening.to_vec(),
                color: WHITE,
            });
            list.push(Primitive::Line {
                from: opening[3],
                to: opening[0],
                width: 1.0,
                color: WHITE,
            });
            list.push(black_line(opening[0], opening[1]));
            list.push(black_line(opening[2], opening[3]));
        }
    }
}

fn push_filled_glyph(list: &mut DrawList, points: Vec<Point2D>) {
    list.push(Primitive::FillPolygon {
        points: points.clone(),
        color: WHITE,
    });
    list.push(Primitive::StrokePath {
        points,
        closed: false,
        color: BLACK,
    });
}

fn black_line(from: Point2D, to: Point2D) -> Primitive {
    Primitive::Line {
        from,
        to,
        width: 1.0,
        color: BLACK,
    }
}

/// Exterior ring without the closing duplicate
fn ring_points(polygon: &Polygon<f64>) -> Vec<Point2D> {
    let mut points: Vec<Point2D> = polygon
        .exterior()
        .coords()
        .map(|c| Point2D::new(c.x, c.y))
        .collect();
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}
