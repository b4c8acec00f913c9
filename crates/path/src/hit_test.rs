//! Determine whether a point is inside a contour.

use crate::geom::LineSegment;
use crate::math::Point;
use crate::WindingRule;

/// Returns whether the point is inside the polygon.
///
/// The polygon is implicitly closed: its last point connects back to its first one.
pub fn hit_test_polygon(point: Point, polygon: &[Point], winding_rule: WindingRule) -> bool {
    winding_rule.is_inside(polygon_winding_number_at_position(point, polygon))
}

/// Compute the winding number of a given position with respect to an implicitly closed polygon.
pub fn polygon_winding_number_at_position(point: Point, polygon: &[Point]) -> i32 {
    let mut winding = 0;
    if polygon.len() < 2 {
        return winding;
    }

    let mut from = polygon[polygon.len() - 1];
    for &to in polygon {
        test_segment(point, &LineSegment { from, to }, &mut winding);
        from = to;
    }

    winding
}

fn test_segment(point: Point, segment: &LineSegment, winding: &mut i32) {
    let y0 = segment.from.y;
    let y1 = segment.to.y;
    let min_y = f64::min(y0, y1);
    let max_y = f64::max(y0, y1);

    if min_y > point.y || max_y <= point.y || f64::min(segment.from.x, segment.to.x) > point.x {
        return;
    }

    if y0 == y1 {
        return;
    }

    let d = y1 - y0;

    let t = (point.y - y0) / d;
    let x = segment.sample(t).x;

    if x > point.x {
        return;
    }

    let w = if d > 0.0 { 1 } else { -1 };

    *winding += w;
}

#[cfg(test)]
fn square_with_hole() -> Vec<Point> {
    use crate::math::point;

    // Outer and inner squares wound in opposite directions, joined by a
    // zero-width bridge so that they form a single polygon.
    vec![
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
        point(0.0, 0.0),
        point(0.25, 0.25),
        point(0.25, 0.75),
        point(0.75, 0.75),
        point(0.75, 0.25),
        point(0.25, 0.25),
    ]
}

#[test]
fn test_hit_test_polygon() {
    use crate::math::point;

    let polygon = square_with_hole();

    assert!(!hit_test_polygon(point(-1.0, 0.5), &polygon, WindingRule::EvenOdd));
    assert!(!hit_test_polygon(point(2.0, 0.5), &polygon, WindingRule::EvenOdd));
    assert!(!hit_test_polygon(point(0.5, -1.0), &polygon, WindingRule::EvenOdd));
    assert!(hit_test_polygon(point(0.1, 0.5), &polygon, WindingRule::EvenOdd));
    assert!(hit_test_polygon(point(0.9, 0.5), &polygon, WindingRule::NonZero));
    assert!(!hit_test_polygon(point(0.5, 0.5), &polygon, WindingRule::EvenOdd));
    assert!(!hit_test_polygon(point(0.5, 0.5), &polygon, WindingRule::NonZero));
}

#[test]
fn test_winding_rules_differ_on_overlap() {
    use crate::math::point;

    // The same square twice: winding number 2 inside.
    let polygon = vec![
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];

    assert_eq!(
        polygon_winding_number_at_position(point(0.5, 0.5), &polygon).abs(),
        2
    );
    assert!(hit_test_polygon(point(0.5, 0.5), &polygon, WindingRule::NonZero));
    assert!(!hit_test_polygon(point(0.5, 0.5), &polygon, WindingRule::EvenOdd));
}
