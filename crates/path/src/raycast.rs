//! Find the first collision between a ray and a contour.

use crate::geom::{Line, LineSegment};
use crate::math::{point, vector, Point, Vector};

pub struct Ray {
    pub origin: Point,
    pub direction: Vector,
}

// Position and normal at the point of contact between a ray and a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub position: Point,
    pub normal: Vector,
}

/// Find a collision between a ray and an implicitly closed polygon.
///
/// Among the crossings in front of the origin, the one closest to `target` is kept.
/// Passing the ray's origin as `target` yields the first crossing along the ray.
pub fn raycast_polygon(ray: &Ray, polygon: &[Point], target: Point) -> Option<Hit> {
    let mut state = RayCastInner::new(ray, target)?;
    if polygon.len() < 2 {
        return None;
    }

    let mut from = polygon[polygon.len() - 1];
    for &to in polygon {
        test_segment(&mut state, &LineSegment { from, to });
        from = to;
    }

    state.finish(ray)
}

struct RayCastInner {
    ray: Line,
    target: Point,
    min_distance: f64,
    result: Point,
    normal: Vector,
}

impl RayCastInner {
    fn new(ray: &Ray, target: Point) -> Option<Self> {
        let ray_len = ray.direction.square_length();
        if ray_len == 0.0 || ray_len.is_nan() {
            return None;
        }

        Some(RayCastInner {
            ray: Line {
                point: ray.origin,
                vector: ray.direction,
            },
            target,
            min_distance: f64::MAX,
            result: point(0.0, 0.0),
            normal: vector(0.0, 0.0),
        })
    }

    fn finish(mut self, ray: &Ray) -> Option<Hit> {
        if self.min_distance == f64::MAX {
            return None;
        }

        if self.normal.dot(ray.direction) > 0.0 {
            self.normal = -self.normal;
        }

        Some(Hit {
            position: self.result,
            normal: self.normal.normalize(),
        })
    }
}

fn test_segment(state: &mut RayCastInner, segment: &LineSegment) {
    if let Some(pos) = segment.line_intersection(&state.ray) {
        let dot = (pos - state.ray.point).dot(state.ray.vector);
        let distance = (pos - state.target).square_length();
        if dot >= 0.0 && distance < state.min_distance {
            state.min_distance = distance;
            state.result = pos;
            let v = segment.to_vector();
            state.normal = vector(-v.y, v.x);
        }
    }
}

#[test]
fn test_raycast() {
    use crate::geom::euclid::approxeq::ApproxEq;

    let square = [
        point(0.0, 0.0),
        point(1.0, 0.0),
        point(1.0, 1.0),
        point(0.0, 1.0),
    ];

    let ray = Ray {
        origin: point(-1.0, 2.0),
        direction: vector(1.0, 0.0),
    };
    assert!(raycast_polygon(&ray, &square, ray.origin).is_none());

    let ray = Ray {
        origin: point(-1.0, 0.5),
        direction: vector(1.0, 0.0),
    };
    let hit = raycast_polygon(&ray, &square, ray.origin).unwrap();
    assert!(hit.position.approx_eq(&point(0.0, 0.5)));
    assert!(hit.normal.approx_eq(&vector(-1.0, 0.0)));

    // Aiming past the square picks the far side.
    let hit = raycast_polygon(&ray, &square, point(3.0, 0.5)).unwrap();
    assert!(hit.position.approx_eq(&point(1.0, 0.5)));
    assert!(hit.normal.approx_eq(&vector(-1.0, 0.0)));

    // From the inside, crossings behind the origin are ignored.
    let ray = Ray {
        origin: point(0.5, 0.5),
        direction: vector(0.0, 3.0),
    };
    let hit = raycast_polygon(&ray, &square, point(0.5, -5.0)).unwrap();
    assert!(hit.position.approx_eq(&point(0.5, 1.0)));

    let ray = Ray {
        origin: point(0.5, 0.5),
        direction: vector(0.0, 0.0),
    };
    assert!(raycast_polygon(&ray, &square, ray.origin).is_none());
}

#[test]
fn test_raycast_concave() {
    use crate::geom::euclid::approxeq::ApproxEq;

    // A U opening upward, the ray crosses the bottom of the notch first.
    let u = [
        point(0.0, 0.0),
        point(30.0, 0.0),
        point(30.0, 30.0),
        point(20.0, 30.0),
        point(20.0, 10.0),
        point(10.0, 10.0),
        point(10.0, 30.0),
        point(0.0, 30.0),
    ];
    let ray = Ray {
        origin: point(15.0, 17.5),
        direction: vector(0.0, -27.5),
    };

    let first = raycast_polygon(&ray, &u, ray.origin).unwrap();
    assert!(first.position.approx_eq(&point(15.0, 10.0)));

    let outer = raycast_polygon(&ray, &u, point(15.0, -10.0)).unwrap();
    assert!(outer.position.approx_eq(&point(15.0, 0.0)));
    assert!(outer.normal.approx_eq(&vector(0.0, 1.0)));
}
