use crate::math::{point, Box2D, Point, Vector};
use crate::utils::min_max;

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f64) -> Point {
        self.from.lerp(self.to, t)
    }

    /// Return the smallest rectangle containing this segment.
    #[inline]
    pub fn bounding_box(&self) -> Box2D {
        let (min_x, max_x) = min_max(self.from.x, self.to.x);
        let (min_y, max_y) = min_max(self.from.y, self.to.y);

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    /// Computes the intersection (if any) between this segment and an infinite line.
    ///
    /// The result is the `t` parameter of this segment.
    pub fn line_intersection_t(&self, line: &Line) -> Option<f64> {
        let v1 = self.to_vector();
        let v2 = line.vector;

        let v1_cross_v2 = v1.cross(v2);

        if v1_cross_v2 == 0.0 {
            // The segment and the line are parallel.
            return None;
        }

        let sign_v1_cross_v2 = v1_cross_v2.signum();
        let abs_v1_cross_v2 = v1_cross_v2.abs();

        let v3 = line.point - self.from;
        let t = v3.cross(v2) * sign_v1_cross_v2;

        if t < 0.0 || t > abs_v1_cross_v2 {
            return None;
        }

        Some(t / abs_v1_cross_v2)
    }

    #[inline]
    pub fn line_intersection(&self, line: &Line) -> Option<Point> {
        self.line_intersection_t(line).map(|t| self.sample(t))
    }

    /// Computes the distance between this segment and a point.
    #[inline]
    pub fn distance_to_point(&self, p: Point) -> f64 {
        self.square_distance_to_point(p).sqrt()
    }

    /// Computes the squared distance between this segment and a point.
    ///
    /// Can be useful to save a square root when comparing against
    /// a distance that can be squared.
    #[inline]
    pub fn square_distance_to_point(&self, p: Point) -> f64 {
        (self.closest_point(p) - p).square_length()
    }

    /// Computes the closest point on this segment to `p`.
    ///
    /// A degenerate segment is treated as a single point.
    #[inline]
    pub fn closest_point(&self, p: Point) -> Point {
        let v1 = self.to - self.from;
        let len2 = v1.dot(v1);
        if len2 == 0.0 {
            return self.from;
        }
        let v2 = p - self.from;
        let t = (v2.dot(v1) / len2).max(0.0).min(1.0);

        self.from + v1 * t
    }
}

/// An infinite line defined by a point and a vector.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Line {
    pub point: Point,
    pub vector: Vector,
}

#[cfg(test)]
use euclid::approxeq::ApproxEq;

#[test]
fn bounding_box() {
    let l1 = LineSegment {
        from: point(1.0, 5.0),
        to: point(5.0, 7.0),
    };
    let l2 = LineSegment {
        from: point(5.0, 5.0),
        to: point(1.0, 1.0),
    };

    assert_eq!(
        l1.bounding_box(),
        Box2D {
            min: point(1.0, 5.0),
            max: point(5.0, 7.0)
        }
    );
    assert_eq!(
        l2.bounding_box(),
        Box2D {
            min: point(1.0, 1.0),
            max: point(5.0, 5.0)
        }
    );
}

#[test]
fn closest_point_is_clamped_to_the_segment() {
    let l = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    };

    assert!(l.closest_point(point(5.0, 3.0)).approx_eq(&point(5.0, 0.0)));
    assert!(l.closest_point(point(-4.0, 3.0)).approx_eq(&point(0.0, 0.0)));
    assert!(l.closest_point(point(14.0, -3.0)).approx_eq(&point(10.0, 0.0)));
    assert!((l.distance_to_point(point(13.0, 4.0)) - 5.0).abs() < 1e-9);
}

#[test]
fn closest_point_of_degenerate_segment() {
    let l = LineSegment {
        from: point(2.0, 2.0),
        to: point(2.0, 2.0),
    };

    let p = l.closest_point(point(5.0, 6.0));
    assert_eq!(p, point(2.0, 2.0));
    assert!((l.distance_to_point(point(5.0, 6.0)) - 5.0).abs() < 1e-9);
}

#[test]
fn segment_line_intersection() {
    let l = LineSegment {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
    };
    let vertical = Line {
        point: point(4.0, -5.0),
        vector: crate::math::vector(0.0, 1.0),
    };
    let parallel = Line {
        point: point(0.0, 5.0),
        vector: crate::math::vector(1.0, 0.0),
    };
    let outside = Line {
        point: point(12.0, -5.0),
        vector: crate::math::vector(0.0, 1.0),
    };

    assert!((l.line_intersection_t(&vertical).unwrap() - 0.4).abs() < 1e-9);
    assert!(l
        .line_intersection(&vertical)
        .unwrap()
        .approx_eq(&point(4.0, 0.0)));
    assert!(l.line_intersection_t(&parallel).is_none());
    assert!(l.line_intersection_t(&outside).is_none());
}
