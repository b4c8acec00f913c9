use crate::math::{Box2D, Point};
use crate::{CubicBezierSegment, LineSegment};

/// Either a line segment or a cubic bézier curve.
///
/// This is what an edge between two consecutive nodes of a path turns into.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum BezierSegment {
    Linear(LineSegment),
    Cubic(CubicBezierSegment),
}

impl BezierSegment {
    /// Start of the segment.
    #[inline]
    pub fn from(&self) -> Point {
        match self {
            BezierSegment::Linear(segment) => segment.from,
            BezierSegment::Cubic(segment) => segment.from,
        }
    }

    /// End of the segment.
    #[inline]
    pub fn to(&self) -> Point {
        match self {
            BezierSegment::Linear(segment) => segment.to,
            BezierSegment::Cubic(segment) => segment.to,
        }
    }

    /// Returns the smallest rectangle that contains the segment.
    pub fn bounding_box(&self) -> Box2D {
        match self {
            BezierSegment::Linear(segment) => segment.bounding_box(),
            BezierSegment::Cubic(segment) => segment.bounding_box(),
        }
    }

    /// Returns a conservative rectangle that contains the segment.
    pub fn fast_bounding_box(&self) -> Box2D {
        match self {
            BezierSegment::Linear(segment) => segment.bounding_box(),
            BezierSegment::Cubic(segment) => segment.fast_bounding_box(),
        }
    }

    /// Approximates the segment with a sequence of line segments.
    ///
    /// Linear segments are passed through as they are.
    pub fn for_each_flattened<F: FnMut(&LineSegment)>(&self, tolerance: f64, callback: &mut F) {
        match self {
            BezierSegment::Linear(segment) => callback(segment),
            BezierSegment::Cubic(segment) => segment.for_each_flattened(tolerance, callback),
        }
    }
}

impl From<LineSegment> for BezierSegment {
    fn from(s: LineSegment) -> Self {
        BezierSegment::Linear(s)
    }
}

impl From<CubicBezierSegment> for BezierSegment {
    fn from(s: CubicBezierSegment) -> Self {
        BezierSegment::Cubic(s)
    }
}

#[test]
fn linear_segment_flattens_to_itself() {
    use crate::math::point;

    let line = LineSegment {
        from: point(0.0, 0.0),
        to: point(3.0, 4.0),
    };
    let segment: BezierSegment = line.into();

    let mut count = 0;
    segment.for_each_flattened(0.1, &mut |s| {
        assert_eq!(*s, line);
        count += 1;
    });
    assert_eq!(count, 1);
    assert_eq!(segment.from(), point(0.0, 0.0));
    assert_eq!(segment.to(), point(3.0, 4.0));
}

#[test]
fn cubic_segment_bounds() {
    use crate::math::point;

    let segment: BezierSegment = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(0.0, 10.0),
        ctrl2: point(10.0, 10.0),
        to: point(10.0, 0.0),
    }
    .into();

    assert_eq!(segment.bounding_box().max.y, 7.5);
    assert_eq!(segment.fast_bounding_box().max.y, 10.0);
    assert_eq!(segment.to(), point(10.0, 0.0));
}
