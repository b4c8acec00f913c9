//! Bounding rectangle computation for sequences of segments.

use crate::geom::BezierSegment;
use crate::math::{point, Box2D, Point};

/// Computes a conservative axis-aligned rectangle that contains the segments.
///
/// This bounding rectangle approximation is faster but less precise than
/// [`bounding_box`](fn.bounding_box.html): it contains the control points of the curves.
pub fn fast_bounding_box<Iter>(segments: Iter) -> Box2D
where
    Iter: IntoIterator<Item = BezierSegment>,
{
    union_of(segments.into_iter().map(|segment| segment.fast_bounding_box()))
}

/// Computes the smallest axis-aligned rectangle that contains the segments.
pub fn bounding_box<Iter>(segments: Iter) -> Box2D
where
    Iter: IntoIterator<Item = BezierSegment>,
{
    union_of(segments.into_iter().map(|segment| segment.bounding_box()))
}

/// Computes the smallest axis-aligned rectangle that contains the points.
pub fn points_bounding_box<Iter>(points: Iter) -> Box2D
where
    Iter: IntoIterator<Item = Point>,
{
    union_of(points.into_iter().map(|p| Box2D { min: p, max: p }))
}

fn union_of<Iter>(boxes: Iter) -> Box2D
where
    Iter: Iterator<Item = Box2D>,
{
    let mut min = point(f64::MAX, f64::MAX);
    let mut max = point(f64::MIN, f64::MIN);
    for b in boxes {
        min = Point::min(min, b.min);
        max = Point::max(max, b.max);
    }

    // Return an empty rectangle by default if there was no segment.
    if min == point(f64::MAX, f64::MAX) {
        return Box2D::zero();
    }

    Box2D { min, max }
}

#[test]
fn simple_bounding_box() {
    use crate::geom::{CubicBezierSegment, LineSegment};

    let segments = [
        BezierSegment::Linear(LineSegment {
            from: point(-1.0, 0.0),
            to: point(1.0, 3.0),
        }),
        BezierSegment::Cubic(CubicBezierSegment {
            from: point(1.0, 3.0),
            ctrl1: point(1.0, 13.0),
            ctrl2: point(5.0, 13.0),
            to: point(5.0, 3.0),
        }),
    ];

    let tight = bounding_box(segments.iter().cloned());
    assert_eq!(tight.min, point(-1.0, 0.0));
    assert_eq!(tight.max, point(5.0, 10.5));

    let fast = fast_bounding_box(segments.iter().cloned());
    assert_eq!(fast.max, point(5.0, 13.0));

    assert_eq!(bounding_box(core::iter::empty()), Box2D::zero());
    assert_eq!(
        points_bounding_box(vec![point(2.0, 1.0), point(-1.0, 4.0)]),
        Box2D {
            min: point(-1.0, 1.0),
            max: point(2.0, 4.0)
        }
    );
}
