//! Glyphs drawn along hex edges: terrain hazards on battle hexes and gates
//! on board hexes.
//!
//! Every glyph is placed in one of three slots along the edge. Slot `j`
//! spans the fractions `(2 + 3j)/12 .. (4 + 3j)/12` of the edge and its
//! points are pushed perpendicular to the edge by the shape's decoration
//! length. Edges are directed: drawing from the other side flips which way
//! the glyph points.

use super::shape::HexShape;
use crate::core::error::{HexError, Result};
use crate::core::types::Point2D;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

/// Terrain feature on a battle hexside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Hexside {
    #[default]
    Nothing,
    Cliff,
    Dune,
    Slope,
    Wall,
    River,
}

impl Hexside {
    /// Parse the single-character code used by battle land files.
    pub fn from_code(code: char) -> Result<Self> {
        match code {
            ' ' => Ok(Hexside::Nothing),
            'c' => Ok(Hexside::Cliff),
            'd' => Ok(Hexside::Dune),
            's' => Ok(Hexside::Slope),
            'w' => Ok(Hexside::Wall),
            'r' => Ok(Hexside::River),
            other => Err(HexError::UnknownHexside(other)),
        }
    }

    pub fn code(&self) -> char {
        match self {
            Hexside::Nothing => ' ',
            Hexside::Cliff => 'c',
            Hexside::Dune => 'd',
            Hexside::Slope => 's',
            Hexside::Wall => 'w',
            Hexside::River => 'r',
        }
    }
}

impl TryFrom<char> for Hexside {
    type Error = HexError;

    fn try_from(code: char) -> Result<Self> {
        Self::from_code(code)
    }
}

/// Exit or entrance marking on a board hexside
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gate {
    #[default]
    None,
    Block,
    Arch,
    Arrow,
    Arrows,
}

impl FromStr for Gate {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Gate::None),
            "block" => Ok(Gate::Block),
            "arch" => Ok(Gate::Arch),
            "arrow" => Ok(Gate::Arrow),
            "arrows" => Ok(Gate::Arrows),
            _ => Err(HexError::UnknownGate(s.to_string())),
        }
    }
}

/// Open circular arc, angles in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArcSpec {
    pub center: Point2D,
    pub radius: f64,
    pub start_degrees: f64,
    pub extent_degrees: f64,
}

/// One glyph, in the coordinates of the hex it decorates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Decoration {
    /// Open three-point path, filled: cliffs and arrows
    Triangle([Point2D; 3]),
    /// Open four-point path, filled: walls and blocked gates
    Block([Point2D; 4]),
    /// Two strokes, points 0-1 and 2-3
    SlopeLines([Point2D; 4]),
    /// Filled half circle: dunes
    Arc(ArcSpec),
    /// Thick line along the whole edge
    River(Point2D, Point2D),
    /// Archway: the opening `[edge_end, inset_end, inset_start, edge_start]`
    /// is filled and its sides (0-1 and 2-3) stroked. The edge between 3
    /// and 0 is painted over.
    Arch { arc: ArcSpec, opening: [Point2D; 4] },
}

/// Direction of the edge `from -> to` in radians
pub fn edge_angle(from: Point2D, to: Point2D) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// The two focus points bounding slot `j` on the edge.
fn slot(j: u32, from: Point2D, to: Point2D) -> (Point2D, Point2D) {
    let d = to - from;
    let a = f64::from(2 + 3 * j);
    let b = f64::from(4 + 3 * j);
    (from + d * a / 12.0, from + d * b / 12.0)
}

impl HexShape {
    /// Triangle in slot `j`: both base points pushed one way, the apex the other.
    pub fn cliff_or_arrow_points(&self, j: u32, from: Point2D, to: Point2D, theta: f64) -> [Point2D; 3] {
        let (p0, p1) = slot(j, from, to);
        let offset = Point2D::new(-self.decoration_len() * theta.sin(), self.decoration_len() * theta.cos());
        [p0 + offset, (p0 + p1) / 2.0 - offset, p1 + offset]
    }

    /// Quadrilateral in slot `j`, half-thickness `len / size`.
    pub fn wall_or_slope_points(&self, j: u32, from: Point2D, to: Point2D, theta: f64, size: u32) -> [Point2D; 4] {
        let (p0, p1) = slot(j, from, to);
        let d = self.decoration_len() / f64::from(size);
        let offset = Point2D::new(-d * theta.sin(), d * theta.cos());
        [p0 + offset, p0 - offset, p1 - offset, p1 + offset]
    }

    /// Glyphs for a hazard on the directed edge `from -> to`.
    pub fn hexside_decorations(&self, from: Point2D, to: Point2D, hexside: Hexside) -> Vec<Decoration> {
        let theta = edge_angle(from, to);
        match hexside {
            Hexside::Nothing => Vec::new(),
            Hexside::Cliff => (0..3)
                .map(|j| Decoration::Triangle(self.cliff_or_arrow_points(j, from, to, theta)))
                .collect(),
            Hexside::Dune => (0..3)
                .map(|j| {
                    let (p0, p1) = slot(j, from, to);
                    Decoration::Arc(ArcSpec {
                        center: (p0 + p1) / 2.0,
                        radius: self.decoration_len(),
                        start_degrees: (2.0 * PI - theta).to_degrees(),
                        extent_degrees: 180.0,
                    })
                })
                .collect(),
            Hexside::Slope => (0..3)
                .map(|j| Decoration::SlopeLines(self.wall_or_slope_points(j, from, to, theta, 3)))
                .collect(),
            Hexside::Wall => (0..3)
                .map(|j| Decoration::Block(self.wall_or_slope_points(j, from, to, theta, 2)))
                .collect(),
            Hexside::River => vec![Decoration::River(from, to)],
        }
    }

    /// Glyphs for a gate on the directed edge `from -> to`.
    pub fn gate_decorations(&self, from: Point2D, to: Point2D, gate: Gate) -> Vec<Decoration> {
        let theta = edge_angle(from, to);
        match gate {
            Gate::None => {
                tracing::warn!("Gate decorations requested for an edge without a gate");
                Vec::new()
            }
            Gate::Block => vec![Decoration::Block(self.wall_or_slope_points(0, from, to, theta, 1))],
            Gate::Arch => {
                let (p0, p1) = slot(0, from, to);
                let block = self.wall_or_slope_points(0, from, to, theta, 1);
                let arc = ArcSpec {
                    center: (p0 + p1) / 2.0,
                    radius: self.decoration_len(),
                    start_degrees: (-theta).to_degrees(),
                    extent_degrees: 180.0,
                };
                vec![Decoration::Arch {
                    arc,
                    opening: [p1, block[3], block[0], p0],
                }]
            }
            Gate::Arrow => vec![Decoration::Triangle(self.cliff_or_arrow_points(0, from, to, theta))],
            Gate::Arrows => (0..3)
                .map(|j| Decoration::Triangle(self.cliff_or_arrow_points(j, from, to, theta)))
                .collect(),
        }
    }

    /// Hazard glyphs for edge `i` as seen from this hex.
    pub fn edge_decorations(&self, i: usize, hexside: Hexside) -> Vec<Decoration> {
        let (from, to) = self.edge(i);
        self.hexside_decorations(from, to, hexside)
    }

    /// Hazard glyphs for edge `i` as drawn from the neighbouring hex.
    pub fn opposite_edge_decorations(&self, i: usize, hexside: Hexside) -> Vec<Decoration> {
        let (from, to) = self.edge(i);
        self.hexside_decorations(to, from, hexside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Rect;

    fn shape_with_len_5() -> HexShape {
        HexShape::new(Rect::new(0, 0, 60, 60))
    }

    const FROM: Point2D = Point2D::new(0.0, 0.0);
    const TO: Point2D = Point2D::new(12.0, 0.0);

    #[test]
    fn test_hexside_codes() {
        for code in [' ', 'c', 'd', 's', 'w', 'r'] {
            assert_eq!(Hexside::from_code(code).unwrap().code(), code);
        }
        assert!(matches!(Hexside::try_from('x'), Err(HexError::UnknownHexside('x'))));
    }

    #[test]
    fn test_gate_parse() {
        assert_eq!("ARROWS".parse::<Gate>().unwrap(), Gate::Arrows);
        assert!("portcullis".parse::<Gate>().is_err());
    }

    #[test]
    fn test_cliff_points_on_horizontal_edge() {
        let shape = shape_with_len_5();
        let pts = shape.cliff_or_arrow_points(0, FROM, TO, 0.0);
        assert_eq!(pts, [Point2D::new(2.0, 5.0), Point2D::new(3.0, -5.0), Point2D::new(4.0, 5.0)]);
    }

    #[test]
    fn test_wall_points_scale_with_size() {
        let shape = shape_with_len_5();
        let block = shape.wall_or_slope_points(1, FROM, TO, 0.0, 1);
        assert_eq!(
            block,
            [
                Point2D::new(5.0, 5.0),
                Point2D::new(5.0, -5.0),
                Point2D::new(7.0, -5.0),
                Point2D::new(7.0, 5.0)
            ]
        );
        let wall = shape.wall_or_slope_points(1, FROM, TO, 0.0, 2);
        assert_eq!(wall[0], Point2D::new(5.0, 2.5));
    }

    #[test]
    fn test_reversed_edge_points_the_other_way() {
        let shape = shape_with_len_5();
        let forward = shape.edge_decorations(0, Hexside::Cliff);
        let backward = shape.opposite_edge_decorations(0, Hexside::Cliff);
        let (Decoration::Triangle(f), Decoration::Triangle(b)) = (&forward[0], &backward[0]) else {
            panic!("cliffs are triangles");
        };
        // Top edge: forward apex points up and out, backward apex points down and in
        assert!(f[1].y < f[0].y);
        assert!(b[1].y > b[0].y);
    }

    #[test]
    fn test_glyph_counts() {
        let shape = shape_with_len_5();
        assert!(shape.edge_decorations(2, Hexside::Nothing).is_empty());
        assert_eq!(shape.edge_decorations(2, Hexside::Dune).len(), 3);
        assert_eq!(shape.edge_decorations(2, Hexside::Slope).len(), 3);
        assert_eq!(shape.edge_decorations(2, Hexside::River).len(), 1);
        assert_eq!(shape.gate_decorations(FROM, TO, Gate::Arrows).len(), 3);
        assert_eq!(shape.gate_decorations(FROM, TO, Gate::Arrow).len(), 1);
        assert!(shape.gate_decorations(FROM, TO, Gate::None).is_empty());
    }

    #[test]
    fn test_arch_opening() {
        let shape = shape_with_len_5();
        let arch = shape.gate_decorations(FROM, TO, Gate::Arch);
        let Decoration::Arch { arc, opening } = &arch[0] else {
            panic!("expected an arch");
        };
        assert_eq!(arc.center, Point2D::new(3.0, 0.0));
        assert_eq!(arc.radius, 5.0);
        assert_eq!(opening[0], Point2D::new(4.0, 0.0));
        assert_eq!(opening[3], Point2D::new(2.0, 0.0));
        assert_eq!(opening[1], Point2D::new(4.0, 5.0));
        assert_eq!(opening[2], Point2D::new(2.0, 5.0));
    }
}
