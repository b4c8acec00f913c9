//! Move along a flattened path by distance.
//!
//! Walking a path is similar to iterating over it, but instead of receiving the
//! segments (of varying sizes), the walker advances by a given distance along
//! the path.

use crate::math::Point;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WalkerEvent {
    pub position: Point,
    pub distance: f64,
}

/// Total length of a polyline.
pub fn polyline_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).length()).sum()
}

/// Returns the position at `distance` along the polyline.
///
/// The distance is clamped to the length of the polyline. Returns `None` when the
/// polyline has no point.
pub fn sample_at_distance(points: &[Point], distance: f64) -> Option<WalkerEvent> {
    let first = *points.first()?;
    let mut distance = distance.max(0.0);
    let mut advancement = 0.0;

    for w in points.windows(2) {
        let edge = w[1] - w[0];
        let edge_length = edge.length();
        if edge_length == 0.0 {
            continue;
        }

        if distance <= edge_length {
            return Some(WalkerEvent {
                position: w[0] + edge * (distance / edge_length),
                distance: advancement + distance,
            });
        }

        distance -= edge_length;
        advancement += edge_length;
    }

    Some(WalkerEvent {
        position: points.last().cloned().unwrap_or(first),
        distance: advancement,
    })
}

#[test]
fn walk_along_polyline() {
    use crate::geom::euclid::approxeq::ApproxEq;
    use crate::math::point;

    let points = [
        point(0.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 0.0),
        point(10.0, 10.0),
    ];

    assert_eq!(polyline_length(&points), 20.0);

    let evt = sample_at_distance(&points, 5.0).unwrap();
    assert!(evt.position.approx_eq(&point(5.0, 0.0)));

    let evt = sample_at_distance(&points, 15.0).unwrap();
    assert!(evt.position.approx_eq(&point(10.0, 5.0)));
    assert_eq!(evt.distance, 15.0);

    // Clamped at both ends.
    assert_eq!(sample_at_distance(&points, -3.0).unwrap().position, point(0.0, 0.0));
    let end = sample_at_distance(&points, 100.0).unwrap();
    assert_eq!(end.position, point(10.0, 10.0));
    assert_eq!(end.distance, 20.0);

    assert!(sample_at_distance(&[], 1.0).is_none());
    let single = sample_at_distance(&[point(3.0, 3.0)], 1.0).unwrap();
    assert_eq!(single.position, point(3.0, 3.0));
    assert_eq!(single.distance, 0.0);
}
