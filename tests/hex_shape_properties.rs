//! Property tests for hexagon vertex geometry

use hexweave::cell::HexCell;
use hexweave::core::types::{Point, Point2D, Rect};
use hexweave::hex::{HexShape, Hexside, SQRT3};
use hexweave::layout::NonRectangular;
use proptest::prelude::*;

fn rect_strategy(min_side: i32) -> impl Strategy<Value = Rect> {
    (-2000i32..2000, -2000i32..2000, min_side..2000, min_side..2000)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

/// Twice the signed area; positive means clockwise on a y-down screen.
fn signed_area2(v: &[Point2D; 6]) -> f64 {
    (0..6)
        .map(|i| {
            let a = v[i];
            let b = v[(i + 1) % 6];
            a.x * b.y - b.x * a.y
        })
        .sum()
}

proptest! {
    #[test]
    fn prop_vertices_stay_inside_rect(rect in rect_strategy(1)) {
        let shape = HexShape::new(rect);
        for v in shape.vertices() {
            prop_assert!(v.x >= rect.x as f64 && v.x <= rect.right() as f64, "{:?} outside {:?}", v, rect);
            prop_assert!(v.y >= rect.y as f64 && v.y <= rect.bottom() as f64, "{:?} outside {:?}", v, rect);
        }
    }

    #[test]
    fn prop_center_is_inside(rect in rect_strategy(2)) {
        let shape = HexShape::new(rect);
        prop_assert!(shape.contains(shape.find_center()));
    }

    #[test]
    fn prop_recompute_is_bit_identical(rect in rect_strategy(0)) {
        let mut shape = HexShape::default();
        let first = shape.compute_vertices(rect);
        let second = shape.compute_vertices(rect);
        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
            prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }

    #[test]
    fn prop_center_formula_matches_vertex_mean(rect in rect_strategy(1)) {
        let shape = HexShape::new(rect);
        let v = shape.vertices();
        let mean = v.iter().copied().sum::<Point2D>() / 6.0;
        let center = shape.find_center_2d();
        prop_assert!((center - mean).length() < 1e-6);
        // Vertices 2 and 5 sit on the centre row, 0 and 3 mirror each
        // other about the centre column.
        prop_assert_eq!(v[2].y, v[5].y);
        prop_assert!((v[0].x + v[3].x - 2.0 * center.x).abs() < 1e-6);
    }

    #[test]
    fn prop_fixed_winding_and_regular_aspect(rect in rect_strategy(2)) {
        let shape = HexShape::new(rect);
        let v = shape.vertices();
        prop_assert!(signed_area2(v) > 0.0);
        let width = v[2].x - v[5].x;
        let height = v[3].y - v[0].y;
        prop_assert!((width * SQRT3 / 2.0 - height).abs() < 1e-6);
    }

    #[test]
    fn prop_corners_of_rect_are_outside(rect in rect_strategy(8)) {
        let shape = HexShape::new(rect);
        prop_assert!(!shape.contains(Point::new(rect.x, rect.y)));
        prop_assert!(!shape.contains(Point::new(rect.right(), rect.bottom())));
    }
}

#[test]
fn test_degenerate_rect_gives_zero_area_hexagon() {
    for rect in [Rect::new(0, 0, 0, 10), Rect::new(0, 0, 10, 0), Rect::new(3, 3, -5, -5)] {
        let shape = HexShape::new(rect);
        assert_eq!(signed_area2(shape.vertices()), 0.0);
        assert!(!shape.contains(shape.find_center()));
    }
}

#[test]
fn test_cell_decorations_follow_relayout() {
    let mut cell = HexCell::with_rect(Hexside::Cliff, Rect::new(0, 0, 60, 60));
    let before = cell.shape().edge_decorations(0, *cell.model());
    cell.resize_base_rectangle(Rect::new(0, 0, 120, 120));
    let after = cell.shape().edge_decorations(0, *cell.model());
    assert_ne!(before, after);
    assert_eq!(cell.shape().decoration_len(), 10.0);
}
