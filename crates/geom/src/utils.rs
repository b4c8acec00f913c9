//! Scalar and point helpers used when editing and hit-testing paths.

use crate::math::{point, Point};
use crate::LineSegment;

#[inline]
pub fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn length(p1: Point, p2: Point) -> f64 {
    (p2 - p1).length()
}

/// Returns true if `p` is within `tolerance` of the segment `from -> to`.
///
/// Only the extent of the segment counts, not the infinite line through it.
/// A segment with coincident end points behaves like a single point.
pub fn line_contains_point(from: Point, to: Point, p: Point, tolerance: f64) -> bool {
    let tolerance = tolerance.max(0.0);
    if from == to {
        return length(from, p) <= tolerance;
    }

    // Cheap rejection against the segment's box grown by the tolerance.
    if p.x < from.x.min(to.x) - tolerance
        || p.x > from.x.max(to.x) + tolerance
        || p.y < from.y.min(to.y) - tolerance
        || p.y > from.y.max(to.y) + tolerance
    {
        return false;
    }

    LineSegment { from, to }.square_distance_to_point(p) <= tolerance * tolerance
}

/// Moves `anchor` along the line going through `towards` by `signed_length`.
///
/// A negative length moves the anchor towards `towards`, a positive one moves it
/// away. Shortening never overshoots: if the requested shortening is longer than
/// the segment, `towards` is returned. If both points coincide, `anchor` is returned.
///
/// ```
/// use figura_geom::math::point;
/// use figura_geom::utils::cap;
///
/// assert_eq!(cap(point(10.0, 0.0), point(0.0, 0.0), -3.0), point(7.0, 0.0));
/// assert_eq!(cap(point(10.0, 0.0), point(0.0, 0.0), -15.0), point(0.0, 0.0));
/// ```
pub fn cap(anchor: Point, towards: Point, signed_length: f64) -> Point {
    let v = anchor - towards;
    let segment_length = v.length();
    if segment_length == 0.0 {
        return anchor;
    }

    if signed_length <= -segment_length {
        return towards;
    }

    anchor + (v * signed_length) / segment_length
}

/// Average of a set of points.
///
/// Returns the origin for an empty set.
pub fn centroid<I>(points: I) -> Point
where
    I: IntoIterator<Item = Point>,
{
    let mut sum = point(0.0, 0.0);
    let mut count = 0usize;
    for p in points {
        sum += p.to_vector();
        count += 1;
    }

    if count == 0 {
        return point(0.0, 0.0);
    }

    sum / count as f64
}

/// Index of the point farthest from `center`, lowest index on ties.
pub fn outermost_index<I>(points: I, center: Point) -> Option<usize>
where
    I: IntoIterator<Item = Point>,
{
    let mut result = None;
    let mut max_distance = -1.0;
    for (idx, p) in points.into_iter().enumerate() {
        let d = (p - center).square_length();
        if d > max_distance {
            max_distance = d;
            result = Some(idx);
        }
    }

    result
}

#[test]
fn cap_shortens_towards_the_other_point() {
    let p = cap(point(10.0, 0.0), point(0.0, 0.0), -3.0);
    assert!((p.x - 7.0).abs() < 1e-12);
    assert!(p.y.abs() < 1e-12);

    // Positive lengths extend beyond the anchor.
    let p = cap(point(0.0, 10.0), point(0.0, 0.0), 2.0);
    assert!((p.y - 12.0).abs() < 1e-12);
}

#[test]
fn cap_clamps_to_the_far_end() {
    assert_eq!(cap(point(10.0, 0.0), point(0.0, 0.0), -15.0), point(0.0, 0.0));
    assert_eq!(cap(point(10.0, 0.0), point(0.0, 0.0), -10.0), point(0.0, 0.0));
}

#[test]
fn cap_degenerate_segment() {
    let p = cap(point(3.0, 4.0), point(3.0, 4.0), -5.0);
    assert_eq!(p, point(3.0, 4.0));
    assert!(p.x.is_finite() && p.y.is_finite());
}

#[test]
fn line_contains_point_within_extent() {
    let from = point(0.0, 0.0);
    let to = point(10.0, 0.0);

    assert!(line_contains_point(from, to, point(5.0, 0.5), 1.0));
    assert!(line_contains_point(from, to, point(5.0, 0.0), 0.0));
    assert!(!line_contains_point(from, to, point(5.0, 1.5), 1.0));
    // On the infinite line but outside of the segment.
    assert!(!line_contains_point(from, to, point(15.0, 0.0), 1.0));
    assert!(!line_contains_point(from, to, point(-2.0, 0.0), 1.0));
}

#[test]
fn line_contains_point_degenerate() {
    let p = point(1.0, 1.0);
    assert!(line_contains_point(p, p, point(1.5, 1.0), 1.0));
    assert!(!line_contains_point(p, p, point(3.0, 1.0), 1.0));
}

#[test]
fn centroid_and_outermost() {
    let points = [
        point(0.0, 0.0),
        point(4.0, 0.0),
        point(4.0, 4.0),
        point(0.0, 4.0),
    ];

    assert_eq!(centroid(points.iter().cloned()), point(2.0, 2.0));
    assert_eq!(centroid(core::iter::empty()), point(0.0, 0.0));
    // All corners are at the same distance, the first one wins.
    assert_eq!(outermost_index(points.iter().cloned(), point(2.0, 2.0)), Some(0));
    assert_eq!(outermost_index(points.iter().cloned(), point(3.0, 3.0)), Some(0));
    assert_eq!(outermost_index(points.iter().cloned(), point(1.0, 3.0)), Some(1));
    assert_eq!(outermost_index(core::iter::empty(), point(0.0, 0.0)), None);
    assert!((length(points[0], points[2]) - 32f64.sqrt()).abs() < 1e-12);
}
