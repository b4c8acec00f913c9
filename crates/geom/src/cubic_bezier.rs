//! Cubic bézier curve segments.

use crate::math::{point, Box2D, Point};
use crate::{LineSegment, MAX_FLATTENED_SEGMENTS, MIN_TOLERANCE};
use arrayvec::ArrayVec;

use core::ops::Range;

/// A 2d curve segment defined by four points: the beginning of the segment, two control
/// points and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * from + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CubicBezierSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicBezierSegment {
    /// Builds the cubic curve equivalent to the quadratic curve `from, ctrl, to`.
    pub fn from_quadratic(from: Point, ctrl: Point, to: Point) -> Self {
        CubicBezierSegment {
            from,
            ctrl1: from + (ctrl - from) * (2.0 / 3.0),
            ctrl2: to + (ctrl - to) * (2.0 / 3.0),
            to,
        }
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: f64) -> Point {
        let t2 = t * t;
        let t3 = t2 * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;
        let one_t3 = one_t2 * one_t;

        self.from * one_t3
            + self.ctrl1.to_vector() * 3.0 * one_t2 * t
            + self.ctrl2.to_vector() * 3.0 * one_t * t2
            + self.to.to_vector() * t3
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: f64) -> f64 {
        Self::sample_1d(self.from.x, self.ctrl1.x, self.ctrl2.x, self.to.x, t)
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: f64) -> f64 {
        Self::sample_1d(self.from.y, self.ctrl1.y, self.ctrl2.y, self.to.y, t)
    }

    #[inline]
    fn sample_1d(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
        let one_t = 1.0 - t;
        p0 * one_t * one_t * one_t
            + p1 * 3.0 * one_t * one_t * t
            + p2 * 3.0 * one_t * t * t
            + p3 * t * t * t
    }

    /// Number of line segments needed to stay within `tolerance` of the curve
    /// when subdividing it uniformly.
    ///
    /// The flattening error of `n` uniform chords is bounded by `max|B''| / (8 n²)`
    /// and `max|B''|` is bounded by six times the largest second difference of the
    /// control polygon.
    pub fn num_flattened_segments(&self, tolerance: f64) -> u32 {
        let tolerance = tolerance.max(MIN_TOLERANCE);
        let dd1 = (self.from.to_vector() - self.ctrl1.to_vector() * 2.0 + self.ctrl2.to_vector())
            .length();
        let dd2 = (self.ctrl1.to_vector() - self.ctrl2.to_vector() * 2.0 + self.to.to_vector())
            .length();
        let dd = dd1.max(dd2);

        let n = (0.75 * dd / tolerance).sqrt().ceil();
        if !n.is_finite() || n < 1.0 {
            return 1;
        }

        (n as u32).min(MAX_FLATTENED_SEGMENTS)
    }

    /// Approximates the curve with sequence of line segments.
    ///
    /// The `tolerance` parameter defines the maximum distance between the curve and
    /// its approximation.
    pub fn for_each_flattened<F: FnMut(&LineSegment)>(&self, tolerance: f64, callback: &mut F) {
        self.for_each_flattened_with_t(tolerance, &mut |segment, _| callback(segment));
    }

    /// Approximates the curve with sequence of line segments.
    ///
    /// The `tolerance` parameter defines the maximum distance between the curve and
    /// its approximation.
    ///
    /// The end of the t parameter range at the final segment is guaranteed to be equal to `1.0`
    /// and the final segment ends exactly at `self.to`.
    pub fn for_each_flattened_with_t<F: FnMut(&LineSegment, Range<f64>)>(
        &self,
        tolerance: f64,
        callback: &mut F,
    ) {
        let n = self.num_flattened_segments(tolerance);
        let step = 1.0 / n as f64;
        let mut from = self.from;
        let mut t0 = 0.0;
        for i in 1..n {
            let t1 = i as f64 * step;
            let to = self.sample(t1);
            callback(&LineSegment { from, to }, t0..t1);
            from = to;
            t0 = t1;
        }

        callback(&LineSegment { from, to: self.to }, t0..1.0);
    }

    /// Return local x extrema.
    ///
    /// This returns the advancements along the curve, not the actual x position.
    pub fn local_x_extrema_t(&self) -> ArrayVec<f64, 2> {
        Self::local_extrema(self.from.x, self.ctrl1.x, self.ctrl2.x, self.to.x)
    }

    /// Return local y extrema.
    ///
    /// This returns the advancements along the curve, not the actual y position.
    pub fn local_y_extrema_t(&self) -> ArrayVec<f64, 2> {
        Self::local_extrema(self.from.y, self.ctrl1.y, self.ctrl2.y, self.to.y)
    }

    fn local_extrema(p0: f64, p1: f64, p2: f64, p3: f64) -> ArrayVec<f64, 2> {
        // The derivative of a cubic bézier curve is a second degree polynomial
        // a * t² + b * t + c whose roots in ]0, 1[ are the local extrema.
        let a = 3.0 * (p3 + 3.0 * (p1 - p2) - p0);
        let b = 6.0 * (p2 - 2.0 * p1 + p0);
        let c = 3.0 * (p1 - p0);

        let mut result = ArrayVec::new();
        let mut push = |t: f64| {
            if t > 0.0 && t < 1.0 && !result.is_full() {
                result.push(t);
            }
        };

        if a == 0.0 {
            if b != 0.0 {
                push(-c / b);
            }
            return result;
        }

        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return result;
        }

        if discriminant == 0.0 {
            push(-b / (2.0 * a));
            return result;
        }

        let discriminant_sqrt = discriminant.sqrt();
        let mut first = (-b - discriminant_sqrt) / (2.0 * a);
        let mut second = (-b + discriminant_sqrt) / (2.0 * a);
        if first > second {
            core::mem::swap(&mut first, &mut second);
        }
        push(first);
        push(second);

        result
    }

    /// Returns the smallest range of x that contains this curve.
    pub fn bounding_range_x(&self) -> (f64, f64) {
        let (mut min, mut max) = crate::utils::min_max(self.from.x, self.to.x);
        for t in self.local_x_extrema_t() {
            let x = self.x(t);
            min = min.min(x);
            max = max.max(x);
        }

        (min, max)
    }

    /// Returns the smallest range of y that contains this curve.
    pub fn bounding_range_y(&self) -> (f64, f64) {
        let (mut min, mut max) = crate::utils::min_max(self.from.y, self.to.y);
        for t in self.local_y_extrema_t() {
            let y = self.y(t);
            min = min.min(y);
            max = max.max(y);
        }

        (min, max)
    }

    /// Returns the smallest rectangle that contains the curve.
    ///
    /// Unlike `fast_bounding_box` this accounts for the curve's extrema rather
    /// than its control polygon.
    pub fn bounding_box(&self) -> Box2D {
        let (min_x, max_x) = self.bounding_range_x();
        let (min_y, max_y) = self.bounding_range_y();

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }

    /// Returns a conservative rectangle the curve is contained in.
    ///
    /// This method is faster than `bounding_box` but more conservative.
    pub fn fast_bounding_box(&self) -> Box2D {
        let min_x = self.from.x.min(self.ctrl1.x).min(self.ctrl2.x).min(self.to.x);
        let max_x = self.from.x.max(self.ctrl1.x).max(self.ctrl2.x).max(self.to.x);
        let min_y = self.from.y.min(self.ctrl1.y).min(self.ctrl2.y).min(self.to.y);
        let max_y = self.from.y.max(self.ctrl1.y).max(self.ctrl2.y).max(self.to.y);

        Box2D {
            min: point(min_x, min_y),
            max: point(max_x, max_y),
        }
    }
}

#[cfg(test)]
use euclid::approxeq::ApproxEq;

#[cfg(test)]
fn arch() -> CubicBezierSegment {
    CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 10.0),
        ctrl2: point(10.0, 10.0),
        to: point(10.0, 0.0),
    }
}

#[test]
fn sample_end_points() {
    let c = arch();
    assert!(c.sample(0.0).approx_eq(&c.from));
    assert!(c.sample(1.0).approx_eq(&c.to));
    assert!(c.sample(0.5).approx_eq(&point(5.0, 7.5)));
    assert!((c.x(0.5) - 5.0).abs() < 1e-12);
    assert!((c.y(0.5) - 7.5).abs() < 1e-12);
}

#[test]
fn bounding_box_uses_extrema() {
    let c = arch();
    let tight = c.bounding_box();
    let fast = c.fast_bounding_box();

    assert!(tight.min.approx_eq(&point(0.0, 0.0)));
    assert!(tight.max.approx_eq(&point(10.0, 7.5)));
    assert!(fast.max.approx_eq(&point(10.0, 10.0)));
}

#[test]
fn bounding_box_of_s_curve() {
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(10.0, 10.0),
        ctrl2: point(-10.0, 10.0),
        to: point(0.0, 20.0),
    };
    let (min_x, max_x) = c.bounding_range_x();
    let mut sampled_min: f64 = 0.0;
    let mut sampled_max: f64 = 0.0;
    for i in 0..=1000 {
        let x = c.x(i as f64 / 1000.0);
        sampled_min = sampled_min.min(x);
        sampled_max = sampled_max.max(x);
    }

    assert!(min_x < 0.0 && max_x > 0.0);
    assert!((min_x - sampled_min).abs() < 1e-3);
    assert!((max_x - sampled_max).abs() < 1e-3);
}

#[test]
fn flattening_stays_within_tolerance() {
    let c = arch();
    for &tolerance in &[1.0, 0.1, 0.01] {
        let mut count = 0;
        let mut last = c.from;
        c.for_each_flattened_with_t(tolerance, &mut |segment, range| {
            assert_eq!(segment.from, last);
            last = segment.to;
            count += 1;
            // The chord's middle must be close to the curve's middle on that range.
            let mid_t = (range.start + range.end) * 0.5;
            let on_curve = c.sample(mid_t);
            assert!(segment.distance_to_point(on_curve) <= tolerance * 1.01);
        });
        assert_eq!(last, c.to);
        assert!(count >= 1);
    }
}

#[test]
fn flattening_straight_curve_is_one_segment() {
    let c = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 0.0),
        ctrl2: point(10.0, 0.0),
        to: point(10.0, 0.0),
    };
    assert!(c.num_flattened_segments(0.1) >= 1);

    let degenerate = CubicBezierSegment {
        from: point(1.0, 1.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(1.0, 1.0),
        to: point(1.0, 1.0),
    };
    assert_eq!(degenerate.num_flattened_segments(0.1), 1);
}

#[test]
fn quadratic_degree_elevation() {
    let c = CubicBezierSegment::from_quadratic(point(0.0, 0.0), point(5.0, 10.0), point(10.0, 0.0));
    // The quadratic's middle point is (from + 2 * ctrl + to) / 4.
    assert!(c.sample(0.5).approx_eq(&point(5.0, 5.0)));
}
