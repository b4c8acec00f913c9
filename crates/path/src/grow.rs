//! Grow or shrink a closed polygon by a fixed distance.
//!
//! This is how stroke and fill outlines are made wider or narrower than the path
//! they are computed from.

use crate::math::{vector, Point, Vector};

/// Offsets the edges of an implicitly closed polygon by `grow`.
///
/// Positive values move the edges outward, negative values inward, whatever the
/// orientation of the polygon. Corners use miter joins, replaced with bevel joins
/// when the ratio between the miter length and `grow` exceeds `miter_limit`.
///
/// Polygons with less than three distinct points or a zero area are returned
/// unchanged (minus duplicate points).
pub fn grow_polygon(points: &[Point], grow: f64, miter_limit: f64) -> Vec<Point> {
    let points = remove_duplicates(points);
    let n = points.len();
    if n < 3 || grow == 0.0 {
        return points;
    }

    let area = signed_area(&points);
    if area == 0.0 {
        return points;
    }
    let orientation = area.signum();

    let outward_normal = |from: Point, to: Point| -> Vector {
        let d = (to - from).normalize();
        vector(d.y, -d.x) * orientation
    };

    let mut result = Vec::with_capacity(n * 2);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let p = points[i];
        let next = points[(i + 1) % n];

        let n0 = outward_normal(prev, p);
        let n1 = outward_normal(p, next);
        let dot_plus_one = 1.0 + n0.dot(n1);

        let miter_ratio_squared = if dot_plus_one > 1e-12 {
            2.0 / dot_plus_one
        } else {
            f64::INFINITY
        };

        if miter_ratio_squared > miter_limit * miter_limit {
            result.push(p + n0 * grow);
            result.push(p + n1 * grow);
        } else {
            result.push(p + (n0 + n1) * (grow / dot_plus_one));
        }
    }

    result
}

/// Twice the signed area of an implicitly closed polygon.
///
/// Positive for polygons going counter-clockwise in a y-up coordinate system.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }

    sum
}

fn remove_duplicates(points: &[Point]) -> Vec<Point> {
    let mut result: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if result.last() != Some(&p) {
            result.push(p);
        }
    }

    while result.len() > 1 && result.first() == result.last() {
        result.pop();
    }

    result
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn assert_polygon_eq(actual: &[Point], expected: &[Point]) {
    use crate::geom::euclid::approxeq::ApproxEq;

    assert_eq!(actual.len(), expected.len(), "{:?}", actual);
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(a.approx_eq(e), "{:?} != {:?}", a, e);
    }
}

#[test]
fn grow_square_outward() {
    let square = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ];

    assert_polygon_eq(
        &grow_polygon(&square, 1.0, 10.0),
        &[
            point(-1.0, -1.0),
            point(11.0, -1.0),
            point(11.0, 11.0),
            point(-1.0, 11.0),
        ],
    );

    // The orientation doesn't matter.
    let reversed: Vec<Point> = square.iter().rev().cloned().collect();
    assert_polygon_eq(
        &grow_polygon(&reversed, 1.0, 10.0),
        &[
            point(-1.0, 11.0),
            point(11.0, 11.0),
            point(11.0, -1.0),
            point(-1.0, -1.0),
        ],
    );
}

#[test]
fn shrink_square() {
    let square = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
        point(0.0, 0.0),
    ];

    assert_polygon_eq(
        &grow_polygon(&square, -2.0, 10.0),
        &[
            point(2.0, 2.0),
            point(8.0, 2.0),
            point(8.0, 8.0),
            point(2.0, 8.0),
        ],
    );
}

#[test]
fn miter_limit_bevels_corners() {
    let square = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
        point(0.0, 10.0),
    ];

    // A right angle has a miter ratio of sqrt(2).
    let grown = grow_polygon(&square, 1.0, 1.2);
    assert_eq!(grown.len(), 8);
    assert_polygon_eq(&grown[0..2], &[point(-1.0, 0.0), point(0.0, -1.0)]);
}

#[test]
fn degenerate_polygons() {
    let line = [point(0.0, 0.0), point(10.0, 0.0), point(0.0, 0.0)];
    assert_eq!(
        grow_polygon(&line, 1.0, 10.0),
        vec![point(0.0, 0.0), point(10.0, 0.0)]
    );

    let flat = [point(0.0, 0.0), point(5.0, 0.0), point(10.0, 0.0)];
    assert_eq!(grow_polygon(&flat, 1.0, 10.0).len(), 3);
    assert_eq!(signed_area(&flat), 0.0);
    assert!(grow_polygon(&[], 1.0, 10.0).is_empty());
}
