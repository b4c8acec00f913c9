//! The editable bézier path data structure.

use crate::geom::utils::{centroid, line_contains_point, outermost_index};
use crate::geom::{BezierSegment, CubicBezierSegment, LineSegment, MIN_TOLERANCE};
use crate::math::{Box2D, Point, Transform};
use crate::raycast::{raycast_polygon, Ray};
use crate::{aabb, hit_test, walk};
use crate::{Coord, Node, PathError};

use core::cell::OnceCell;
use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

/// The fill rule defines how to determine what is inside and what is outside of a
/// self-intersecting contour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum WindingRule {
    EvenOdd,
    NonZero,
}

impl WindingRule {
    #[inline]
    pub fn is_inside(&self, winding: i32) -> bool {
        match *self {
            WindingRule::EvenOdd => winding % 2 != 0,
            WindingRule::NonZero => winding != 0,
        }
    }

    /// Numeric code of the rule: `0` for even-odd, `1` for non-zero.
    #[inline]
    pub fn code(&self) -> i32 {
        match *self {
            WindingRule::EvenOdd => 0,
            WindingRule::NonZero => 1,
        }
    }
}

impl Default for WindingRule {
    fn default() -> Self {
        WindingRule::EvenOdd
    }
}

impl fmt::Display for WindingRule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            WindingRule::EvenOdd => write!(f, "even-odd"),
            WindingRule::NonZero => write!(f, "non-zero"),
        }
    }
}

impl FromStr for WindingRule {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, PathError> {
        match s.to_ascii_lowercase().as_str() {
            "even-odd" | "evenodd" | "even_odd" => Ok(WindingRule::EvenOdd),
            "non-zero" | "nonzero" | "non_zero" => Ok(WindingRule::NonZero),
            _ => Err(PathError::UnknownWindingRule(s.to_string())),
        }
    }
}

impl TryFrom<i32> for WindingRule {
    type Error = PathError;

    fn try_from(code: i32) -> Result<Self, PathError> {
        match code {
            0 => Ok(WindingRule::EvenOdd),
            1 => Ok(WindingRule::NonZero),
            _ => Err(PathError::InvalidWindingRuleCode(code)),
        }
    }
}

/// Geometry derived from the nodes of a path.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    polygon: Vec<Point>,
    bounds: Box2D,
}

impl Outline {
    /// The path flattened with [`BezierPath::DEFAULT_TOLERANCE`].
    ///
    /// Closed paths end with their first point.
    #[inline]
    pub fn polygon(&self) -> &[Point] {
        &self.polygon
    }

    /// The smallest rectangle containing the path's curves.
    #[inline]
    pub fn bounds(&self) -> Box2D {
        self.bounds
    }
}

/// Lazily computed outline.
///
/// Cloning the cache produces an empty one.
#[derive(Default)]
struct OutlineCache {
    outline: OnceCell<Outline>,
}

impl OutlineCache {
    fn get_or_build<F: FnOnce() -> Outline>(&self, build: F) -> &Outline {
        self.outline.get_or_init(build)
    }

    fn invalidate(&mut self) {
        self.outline.take();
    }
}

impl Clone for OutlineCache {
    fn clone(&self) -> Self {
        OutlineCache::default()
    }
}

impl fmt::Debug for OutlineCache {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.outline.get() {
            Some(_) => write!(f, "OutlineCache(valid)"),
            None => write!(f, "OutlineCache(invalid)"),
        }
    }
}

/// A single contour made of editable nodes.
///
/// The edge `i` goes from node `i` to node `i + 1`. Closed paths have an extra
/// closing edge from the last node back to the first one.
///
/// The kind of an edge depends on the control points of its two nodes: a cubic
/// curve if the outgoing control point of the first node and the incoming one of
/// the second node are both active, a quadratic curve (stored as a cubic) if only
/// one of them is, a line otherwise.
///
/// Every mutation drops the cached outline, which is rebuilt on the next query.
#[derive(Clone, Debug, Default)]
pub struct BezierPath {
    nodes: Vec<Node>,
    closed: bool,
    winding_rule: WindingRule,
    cache: OutlineCache,
}

impl BezierPath {
    /// Flattening tolerance of the cached outline.
    pub const DEFAULT_TOLERANCE: f64 = 0.01;

    /// Creates an empty, open path.
    pub fn new() -> Self {
        BezierPath::default()
    }

    pub fn from_nodes(nodes: Vec<Node>, closed: bool) -> Self {
        BezierPath {
            nodes,
            closed,
            winding_rule: WindingRule::default(),
            cache: OutlineCache::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> core::slice::Iter<Node> {
        self.nodes.iter()
    }

    fn check_index(&self, index: usize) -> Result<(), PathError> {
        if index >= self.nodes.len() {
            return Err(PathError::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            });
        }

        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&Node, PathError> {
        self.check_index(index)?;
        Ok(&self.nodes[index])
    }

    /// Returns one point of a node.
    pub fn point(&self, index: usize, coord: Coord) -> Result<Point, PathError> {
        Ok(self.get(index)?.point(coord))
    }

    pub fn set(&mut self, index: usize, node: Node) -> Result<(), PathError> {
        self.check_index(index)?;
        self.nodes[index] = node;
        self.invalidate();
        Ok(())
    }

    /// Moves a single point of a node.
    pub fn set_point(&mut self, index: usize, coord: Coord, p: Point) -> Result<(), PathError> {
        self.check_index(index)?;
        self.nodes[index].set_point(coord, p);
        self.invalidate();
        Ok(())
    }

    /// Inserts a node at `index`, which can be equal to the number of nodes.
    pub fn insert(&mut self, index: usize, node: Node) -> Result<(), PathError> {
        if index > self.nodes.len() {
            return Err(PathError::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            });
        }

        self.nodes.insert(index, node);
        self.invalidate();
        Ok(())
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
        self.invalidate();
    }

    pub fn remove(&mut self, index: usize) -> Result<Node, PathError> {
        self.check_index(index)?;
        let node = self.nodes.remove(index);
        self.invalidate();
        Ok(node)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.invalidate();
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_closed(&mut self, closed: bool) {
        if self.closed != closed {
            self.closed = closed;
            self.invalidate();
        }
    }

    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    pub fn set_winding_rule(&mut self, winding_rule: WindingRule) {
        if self.winding_rule != winding_rule {
            self.winding_rule = winding_rule;
            self.invalidate();
        }
    }

    /// Drops the cached outline.
    #[inline]
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }

    /// Replaces the content of this path with the content of another one.
    pub fn set_to(&mut self, other: &BezierPath) {
        self.nodes.clear();
        self.nodes.extend_from_slice(&other.nodes);
        self.closed = other.closed;
        self.winding_rule = other.winding_rule;
        self.invalidate();
    }

    /// Applies the transform to every point of every node.
    pub fn transform(&mut self, transform: &Transform) {
        for node in &mut self.nodes {
            *node = node.transformed(transform);
        }
        self.invalidate();
    }

    /// Number of edges of the contour.
    pub fn num_edges(&self) -> usize {
        match self.nodes.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Returns the edge starting at node `index`.
    pub fn edge(&self, index: usize) -> Option<BezierSegment> {
        if index >= self.num_edges() {
            return None;
        }

        let len = self.nodes.len();
        Some(edge_between(&self.nodes[index], &self.nodes[(index + 1) % len]))
    }

    /// Iterates over the edges of the contour, including the closing edge.
    pub fn edges(&self) -> Edges {
        Edges {
            nodes: &self.nodes,
            index: 0,
            count: self.num_edges(),
        }
    }

    /// Approximates the contour with a polyline.
    ///
    /// Closed paths end with their first anchor.
    pub fn flatten(&self, tolerance: f64) -> Vec<Point> {
        let mut points = Vec::new();
        let first = match self.nodes.first() {
            Some(node) => node.anchor(),
            None => return points,
        };

        points.push(first);
        for edge in self.edges() {
            edge.for_each_flattened(tolerance, &mut |line| {
                points.push(line.to);
            });
        }

        points
    }

    /// Returns the cached outline, rebuilding it if needed.
    pub fn outline(&self) -> &Outline {
        self.cache.get_or_build(|| {
            log::trace!("Rebuilding the outline of a path with {} nodes", self.nodes.len());
            let bounds = if self.nodes.len() < 2 {
                aabb::points_bounding_box(self.nodes.iter().map(Node::anchor))
            } else {
                aabb::bounding_box(self.edges())
            };

            Outline {
                polygon: self.flatten(Self::DEFAULT_TOLERANCE),
                bounds,
            }
        })
    }

    /// Axis-aligned bounding box of the contour.
    ///
    /// An empty path has a zero-sized box at the origin.
    pub fn bounds(&self) -> Box2D {
        self.outline().bounds()
    }

    /// Returns whether the point is inside the area enclosed by the contour.
    ///
    /// Open paths are implicitly closed.
    pub fn contains(&self, p: Point) -> bool {
        if self.nodes.len() < 2 {
            return false;
        }

        hit_test::hit_test_polygon(p, self.outline().polygon(), self.winding_rule)
    }

    /// Returns whether the point is within `tolerance` of the contour's edges.
    pub fn outline_contains(&self, p: Point, tolerance: f64) -> bool {
        if self.nodes.len() < 2 {
            return false;
        }

        self.edges().any(|edge| edge_hit(&edge, p, tolerance).is_some())
    }

    /// Returns the point at `relative` (between 0 and 1) of the length of the contour.
    ///
    /// The length is measured on the contour flattened with `flatness`. Returns `None`
    /// for an empty path.
    pub fn point_on_path(&self, relative: f64, flatness: f64) -> Option<Point> {
        let polyline = self.flatten(flatness);
        let length = walk::polyline_length(&polyline);
        let relative = if relative.is_nan() {
            0.0
        } else {
            relative.max(0.0).min(1.0)
        };

        walk::sample_at_distance(&polyline, relative * length).map(|evt| evt.position)
    }

    /// Index of the first edge passing within `tolerance` of the point.
    pub fn find_segment(&self, p: Point, tolerance: f64) -> Option<usize> {
        self.edges()
            .position(|edge| edge_hit(&edge, p, tolerance).is_some())
    }

    /// Inserts a straight node on the first edge passing within `tolerance` of the point.
    ///
    /// The node is placed at the point projected onto the edge. Returns its index.
    pub fn split_segment(&mut self, p: Point, tolerance: f64) -> Option<usize> {
        let (segment, position) = self
            .edges()
            .enumerate()
            .find_map(|(i, edge)| edge_hit(&edge, p, tolerance).map(|position| (i, position)))?;

        let index = segment + 1;
        log::debug!("Splitting edge {} at {:?}", segment, position);
        self.nodes.insert(index, Node::new(position));
        self.invalidate();

        Some(index)
    }

    /// Index of the node `join_segments` would remove, without removing it.
    ///
    /// This is the node whose anchor is the closest to the point, within `tolerance`.
    /// A node is only eligible if at least two nodes remain afterwards. The first and
    /// last nodes of an open path are never eligible. When several anchors are at the
    /// same distance, a straight node without control points is preferred, so that
    /// joining where `split_segment` inserted a node picks that node.
    pub fn find_joinable_node(&self, p: Point, tolerance: f64) -> Option<usize> {
        let len = self.nodes.len();
        if len <= 2 {
            return None;
        }

        let removable = if self.closed { 0..len } else { 1..len - 1 };
        let tolerance_squared = tolerance * tolerance;
        let mut best: Option<(usize, f64, bool)> = None;
        for i in removable {
            let node = &self.nodes[i];
            let d = (node.anchor() - p).square_length();
            if d > tolerance_squared {
                continue;
            }
            let straight = *node == Node::new(node.anchor());
            let better = match best {
                None => true,
                Some((_, best_d, best_straight)) => {
                    d < best_d || (d == best_d && straight && !best_straight)
                }
            };
            if better {
                best = Some((i, d, straight));
            }
        }

        best.map(|(index, _, _)| index)
    }

    /// Removes the node picked by `find_joinable_node`, merging the two edges around it.
    ///
    /// Returns the index of the removed node.
    pub fn join_segments(&mut self, p: Point, tolerance: f64) -> Option<usize> {
        let index = self.find_joinable_node(p, tolerance)?;
        log::debug!("Joining the edges around node {}", index);
        self.nodes.remove(index);
        self.invalidate();

        Some(index)
    }

    /// Returns the point where a ray going from the center of the path toward `p`
    /// crosses the contour.
    ///
    /// If the ray crosses the contour several times, the crossing closest to `p` is
    /// kept. When there is no crossing, the closest point of the contour is returned
    /// instead.
    pub fn chop(&self, p: Point) -> Point {
        match self.nodes.len() {
            0 => return p,
            1 => return self.nodes[0].anchor(),
            _ => {}
        }

        let polygon = self.outline().polygon();
        let center = self.center();
        let ray = Ray {
            origin: center,
            direction: p - center,
        };
        if let Some(hit) = raycast_polygon(&ray, polygon, p) {
            return hit.position;
        }

        closest_point_on_polygon(polygon, p).unwrap_or(p)
    }

    /// Average of the node anchors.
    pub fn center(&self) -> Point {
        centroid(self.nodes.iter().map(Node::anchor))
    }

    /// Index of the node whose anchor is the farthest from the center.
    pub fn index_of_outermost_node(&self) -> Option<usize> {
        outermost_index(self.nodes.iter().map(Node::anchor), self.center())
    }
}

impl PartialEq for BezierPath {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
            && self.closed == other.closed
            && self.winding_rule == other.winding_rule
    }
}

impl<'l> IntoIterator for &'l BezierPath {
    type Item = &'l Node;
    type IntoIter = core::slice::Iter<'l, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// An iterator over the edges of a [`BezierPath`].
pub struct Edges<'l> {
    nodes: &'l [Node],
    index: usize,
    count: usize,
}

impl<'l> Iterator for Edges<'l> {
    type Item = BezierSegment;

    fn next(&mut self) -> Option<BezierSegment> {
        if self.index >= self.count {
            return None;
        }

        let from = &self.nodes[self.index];
        let to = &self.nodes[(self.index + 1) % self.nodes.len()];
        self.index += 1;

        Some(edge_between(from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl<'l> ExactSizeIterator for Edges<'l> {}

fn edge_between(a: &Node, b: &Node) -> BezierSegment {
    let from = a.anchor();
    let to = b.anchor();
    match (a.has_c2(), b.has_c1()) {
        (true, true) => BezierSegment::Cubic(CubicBezierSegment {
            from,
            ctrl1: a.point(Coord::C2),
            ctrl2: b.point(Coord::C1),
            to,
        }),
        (true, false) => BezierSegment::Cubic(CubicBezierSegment::from_quadratic(
            from,
            a.point(Coord::C2),
            to,
        )),
        (false, true) => BezierSegment::Cubic(CubicBezierSegment::from_quadratic(
            from,
            b.point(Coord::C1),
            to,
        )),
        (false, false) => BezierSegment::Linear(LineSegment { from, to }),
    }
}

/// If the edge passes within `tolerance` of `p`, returns the closest point of the
/// first flattened piece of the edge that does.
fn edge_hit(edge: &BezierSegment, p: Point, tolerance: f64) -> Option<Point> {
    let tolerance = tolerance.max(0.0);
    let bounds = edge.fast_bounding_box();
    if p.x < bounds.min.x - tolerance
        || p.x > bounds.max.x + tolerance
        || p.y < bounds.min.y - tolerance
        || p.y > bounds.max.y + tolerance
    {
        return None;
    }

    let mut result = None;
    edge.for_each_flattened((tolerance * 0.5).max(MIN_TOLERANCE), &mut |line| {
        if result.is_none() && line_contains_point(line.from, line.to, p, tolerance) {
            result = Some(line.closest_point(p));
        }
    });

    result
}

fn closest_point_on_polygon(polygon: &[Point], p: Point) -> Option<Point> {
    let mut best: Option<(Point, f64)> = None;
    let last = *polygon.last()?;
    let mut from = last;
    for &to in polygon {
        let candidate = LineSegment { from, to }.closest_point(p);
        let d = (candidate - p).square_length();
        if best.map_or(true, |(_, best_d)| d < best_d) {
            best = Some((candidate, d));
        }
        from = to;
    }

    best.map(|(point, _)| point)
}

#[cfg(test)]
use crate::geom::euclid::approxeq::ApproxEq;
#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::NodeMask;

#[cfg(test)]
fn polyline(points: &[(f64, f64)], closed: bool) -> BezierPath {
    BezierPath::from_nodes(
        points.iter().map(|&(x, y)| Node::new(point(x, y))).collect(),
        closed,
    )
}

#[cfg(test)]
fn arch() -> BezierPath {
    // Closed by a straight edge along the x axis.
    BezierPath::from_nodes(
        vec![
            Node::with_mask(
                NodeMask::C2,
                point(0.0, 0.0),
                point(0.0, 0.0),
                point(0.0, 10.0),
            ),
            Node::with_mask(
                NodeMask::C1,
                point(10.0, 0.0),
                point(10.0, 10.0),
                point(10.0, 0.0),
            ),
        ],
        true,
    )
}

#[test]
fn index_errors_leave_the_path_untouched() {
    let mut path = polyline(&[(0.0, 0.0), (10.0, 0.0)], false);

    assert_eq!(
        path.get(5).err(),
        Some(PathError::IndexOutOfRange { index: 5, len: 2 })
    );
    assert!(path.remove(2).is_err());
    assert!(path.set(2, Node::new(point(1.0, 1.0))).is_err());
    assert!(path.set_point(3, Coord::C1, point(1.0, 1.0)).is_err());
    assert!(path.insert(3, Node::new(point(1.0, 1.0))).is_err());
    assert_eq!(path.len(), 2);
    assert_eq!(path, polyline(&[(0.0, 0.0), (10.0, 0.0)], false));

    // Insertion accepts the end of the list.
    path.insert(2, Node::new(point(10.0, 10.0))).unwrap();
    assert_eq!(path.point(2, Coord::Anchor), Ok(point(10.0, 10.0)));
    assert_eq!(path.remove(0).unwrap().anchor(), point(0.0, 0.0));
    path.clear();
    assert!(path.is_empty());
}

#[test]
fn edge_kinds() {
    let a = Node::with_mask(NodeMask::C2, point(0.0, 0.0), point(0.0, 0.0), point(0.0, 5.0));
    let b = Node::curve(point(10.0, 0.0), point(10.0, 5.0), point(10.0, -5.0));
    let c = Node::new(point(20.0, 0.0));
    let d = Node::new(point(30.0, 0.0));
    let path = BezierPath::from_nodes(vec![a, b, c, d], false);

    let edges: Vec<BezierSegment> = path.edges().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(
        edges[0],
        BezierSegment::Cubic(CubicBezierSegment {
            from: point(0.0, 0.0),
            ctrl1: point(0.0, 5.0),
            ctrl2: point(10.0, 5.0),
            to: point(10.0, 0.0),
        })
    );
    // Only one active control point: a quadratic curve.
    assert_eq!(
        edges[1],
        BezierSegment::Cubic(CubicBezierSegment::from_quadratic(
            point(10.0, 0.0),
            point(10.0, -5.0),
            point(20.0, 0.0)
        ))
    );
    assert_eq!(
        edges[2],
        BezierSegment::Linear(LineSegment {
            from: point(20.0, 0.0),
            to: point(30.0, 0.0)
        })
    );

    let mut closed = path.clone();
    closed.set_closed(true);
    assert_eq!(closed.num_edges(), 4);
    assert_eq!(closed.edge(3).map(|e| e.to()), Some(point(0.0, 0.0)));
    assert_eq!(closed.edge(4), None);

    assert_eq!(BezierPath::new().edges().count(), 0);
    assert_eq!(polyline(&[(1.0, 1.0)], true).edges().count(), 0);
}

#[test]
fn flatten_closed_path_returns_to_start() {
    let path = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], true);
    assert_eq!(
        path.flatten(0.1),
        vec![
            point(0.0, 0.0),
            point(10.0, 0.0),
            point(10.0, 10.0),
            point(0.0, 0.0)
        ]
    );
    assert!(BezierPath::new().flatten(0.1).is_empty());
}

#[test]
fn bounds_follow_the_curve() {
    let path = arch();
    let bounds = path.bounds();
    assert!(bounds.min.approx_eq(&point(0.0, 0.0)));
    assert!(bounds.max.approx_eq(&point(10.0, 7.5)));

    assert_eq!(BezierPath::new().bounds(), Box2D::zero());
    let single = polyline(&[(3.0, 4.0)], false);
    assert_eq!(single.bounds().min, point(3.0, 4.0));
    assert_eq!(single.bounds().max, point(3.0, 4.0));
}

#[test]
fn bounds_are_recomputed_after_mutations() {
    let mut path = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], false);
    assert_eq!(path.bounds().max, point(10.0, 10.0));

    path.set_point(2, Coord::Anchor, point(20.0, 30.0)).unwrap();
    assert_eq!(path.bounds().max, point(20.0, 30.0));

    path.push(Node::new(point(-5.0, 0.0)));
    assert_eq!(path.bounds().min, point(-5.0, 0.0));

    path.transform(&Transform::translation(1.0, 1.0));
    assert_eq!(path.bounds().min, point(-4.0, 1.0));
    assert_eq!(path.bounds().max, point(21.0, 31.0));
}

#[test]
fn clone_is_independent() {
    let path = arch();
    let bounds = path.bounds();

    let mut copy = path.clone();
    assert_eq!(copy.bounds(), bounds);
    assert_eq!(copy, path);

    copy.set_point(1, Coord::Anchor, point(50.0, 50.0)).unwrap();
    copy.transform(&Transform::scale(2.0, 2.0));
    assert_ne!(copy.bounds(), bounds);
    assert_eq!(path.bounds(), bounds);
}

#[test]
fn contains_uses_the_curve() {
    let path = arch();
    assert!(path.contains(point(5.0, 7.0)));
    // Inside the control polygon but above the curve.
    assert!(!path.contains(point(5.0, 8.0)));
    assert!(!path.contains(point(-1.0, 1.0)));

    assert!(!BezierPath::new().contains(point(0.0, 0.0)));
    assert!(!polyline(&[(0.0, 0.0)], true).contains(point(0.0, 0.0)));
}

#[test]
fn contains_honors_the_winding_rule() {
    // A pentagram: the center is covered twice.
    let mut star = polyline(
        &[
            (0.0, 10.0),
            (5.878, -8.09),
            (-9.511, 3.09),
            (9.511, 3.09),
            (-5.878, -8.09),
        ],
        true,
    );

    assert!(!star.contains(point(0.0, 0.0)));
    star.set_winding_rule(WindingRule::NonZero);
    assert!(star.contains(point(0.0, 0.0)));
}

#[test]
fn contains_is_invariant_under_rotation_of_the_node_list() {
    let points = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (5.0, 4.0), (0.0, 10.0)];
    let samples = [
        point(1.0, 1.0),
        point(5.0, 2.0),
        point(5.0, 6.0),
        point(9.0, 9.0),
        point(1.0, 9.0),
        point(-1.0, 5.0),
    ];

    let reference = polyline(&points, true);
    for shift in 1..points.len() {
        let mut rotated = points.to_vec();
        rotated.rotate_left(shift);
        let rotated = polyline(&rotated, true);
        for sample in &samples {
            assert_eq!(rotated.contains(*sample), reference.contains(*sample));
        }
    }

    assert!(reference.contains(point(1.0, 1.0)));
    assert!(!reference.contains(point(5.0, 6.0)));
}

#[test]
fn outline_contains() {
    let path = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], false);
    assert!(path.outline_contains(point(5.0, 0.5), 1.0));
    assert!(path.outline_contains(point(10.5, 5.0), 1.0));
    assert!(!path.outline_contains(point(5.0, 5.0), 1.0));
    // No closing edge on open paths.
    assert!(!path.outline_contains(point(5.0, 5.0), 0.1));

    let mut closed = path.clone();
    closed.set_closed(true);
    assert!(closed.outline_contains(point(5.0, 5.0), 0.1));

    let curve = arch();
    assert!(curve.outline_contains(point(5.0, 7.5), 0.05));
    assert!(!curve.outline_contains(point(5.0, 9.0), 0.5));
}

#[test]
fn find_segment() {
    let path = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], true);

    assert_eq!(path.find_segment(point(5.0, 0.0), 0.001), Some(0));
    assert_eq!(path.find_segment(point(10.0, 5.0), 0.001), Some(1));
    assert_eq!(path.find_segment(point(5.0, 5.0), 0.001), Some(2));
    assert_eq!(path.find_segment(point(5.0, 3.0), 0.001), None);
    assert_eq!(path.find_segment(point(50.0, 50.0), 1.0), None);
    // Both edges touch the shared node, the lowest index wins.
    assert_eq!(path.find_segment(point(10.0, 0.0), 0.5), Some(0));
}

#[test]
fn split_then_join_restores_the_path() {
    let original = BezierPath::from_nodes(
        vec![
            Node::new(point(0.0, 0.0)),
            Node::with_mask(
                NodeMask::C2,
                point(10.0, 0.0),
                point(10.0, 0.0),
                point(12.0, 2.0),
            ),
            Node::new(point(20.0, 10.0)),
        ],
        false,
    );
    let bounds = original.bounds();

    let mut path = original.clone();
    let index = path.split_segment(point(4.0, 0.2), 0.5);
    assert_eq!(index, Some(1));
    assert_eq!(path.len(), 4);
    assert!(path.point(1, Coord::Anchor).unwrap().approx_eq(&point(4.0, 0.0)));

    assert_eq!(path.join_segments(point(4.0, 0.2), 0.5), Some(1));
    assert_eq!(path.len(), 3);
    assert_eq!(path, original);
    assert!(path.bounds().min.approx_eq(&bounds.min));
    assert!(path.bounds().max.approx_eq(&bounds.max));
}

#[test]
fn join_after_split_next_to_a_curved_node() {
    // The inserted node lands on top of the curved first node of a closed path.
    let original = BezierPath::from_nodes(
        vec![
            Node::with_mask(
                NodeMask::C1,
                point(0.0, 0.0),
                point(-5.0, 5.0),
                point(0.0, 0.0),
            ),
            Node::new(point(10.0, 0.0)),
            Node::new(point(10.0, 10.0)),
        ],
        true,
    );
    let bounds = original.bounds();

    let mut path = original.clone();
    assert_eq!(path.split_segment(point(-0.3, 0.0), 0.5), Some(1));
    assert_eq!(path.len(), 4);
    assert_eq!(path.point(0, Coord::Anchor), path.point(1, Coord::Anchor));

    assert_eq!(path.find_joinable_node(point(-0.3, 0.0), 0.5), Some(1));
    assert_eq!(path.join_segments(point(-0.3, 0.0), 0.5), Some(1));
    assert_eq!(path, original);
    assert_eq!(path.nodes()[0].mask(), NodeMask::C1);
    assert!(path.bounds().min.approx_eq(&bounds.min));
    assert!(path.bounds().max.approx_eq(&bounds.max));
}

#[test]
fn split_closing_edge() {
    let mut path = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], true);
    assert_eq!(path.split_segment(point(5.0, 5.0), 0.1), Some(3));
    assert_eq!(path.len(), 4);
    assert_eq!(path.split_segment(point(50.0, 5.0), 0.1), None);
    assert_eq!(path.len(), 4);
}

#[test]
fn join_segments_rules() {
    // End points of open paths are never removed.
    let mut open = polyline(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)], false);
    assert_eq!(open.join_segments(point(0.0, 0.0), 1.0), None);
    assert_eq!(open.join_segments(point(20.0, 0.0), 1.0), None);
    assert_eq!(open.join_segments(point(15.0, 0.0), 1.0), None);
    assert_eq!(open.join_segments(point(10.5, 0.0), 1.0), Some(1));
    // Only two nodes left.
    assert_eq!(open.join_segments(point(0.0, 0.0), 1.0), None);
    assert_eq!(open.len(), 2);

    // Any node of a closed path can go, as long as two remain.
    let mut closed = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], true);
    assert_eq!(closed.join_segments(point(0.2, 0.0), 1.0), Some(0));
    assert_eq!(closed.join_segments(point(10.0, 10.0), 1.0), None);

    // The closest node wins.
    let mut close_nodes = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.5, 0.0), (20.0, 0.0)], false);
    assert_eq!(close_nodes.find_joinable_node(point(10.4, 0.0), 1.0), Some(2));
    assert_eq!(close_nodes.len(), 4);
    assert_eq!(close_nodes.join_segments(point(10.4, 0.0), 1.0), Some(2));
}

#[test]
fn point_on_path_uses_arc_length() {
    let path = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 30.0)], false);

    assert!(path.point_on_path(0.0, 0.1).unwrap().approx_eq(&point(0.0, 0.0)));
    assert!(path.point_on_path(0.125, 0.1).unwrap().approx_eq(&point(5.0, 0.0)));
    assert!(path.point_on_path(0.5, 0.1).unwrap().approx_eq(&point(10.0, 10.0)));
    assert!(path.point_on_path(1.0, 0.1).unwrap().approx_eq(&point(10.0, 30.0)));
    assert!(path.point_on_path(2.0, 0.1).unwrap().approx_eq(&point(10.0, 30.0)));
    assert!(path.point_on_path(-1.0, 0.1).unwrap().approx_eq(&point(0.0, 0.0)));

    let mut closed = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], true);
    assert!(closed.point_on_path(0.875, 0.1).unwrap().approx_eq(&point(0.0, 5.0)));
    closed.clear();
    assert_eq!(closed.point_on_path(0.5, 0.1), None);
}

#[test]
fn chop_finds_the_boundary() {
    let square = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], true);

    assert!(square.chop(point(20.0, 5.0)).approx_eq(&point(10.0, 5.0)));
    assert!(square.chop(point(5.0, -30.0)).approx_eq(&point(5.0, 0.0)));
    assert!(square.chop(point(20.0, 20.0)).approx_eq(&point(10.0, 10.0)));
    // No direction: falls back to the closest point of the contour.
    let at_center = square.chop(point(5.0, 5.0));
    assert!(((at_center - point(5.0, 5.0)).length() - 5.0).abs() < 1e-9);

    // Concave contour: the outer crossing is kept, not the bottom of the notch.
    let u = polyline(
        &[
            (0.0, 0.0),
            (30.0, 0.0),
            (30.0, 30.0),
            (20.0, 30.0),
            (20.0, 10.0),
            (10.0, 10.0),
            (10.0, 30.0),
            (0.0, 30.0),
        ],
        true,
    );
    assert_eq!(u.center(), point(15.0, 17.5));
    assert!(u.chop(point(15.0, -10.0)).approx_eq(&point(15.0, 0.0)));
    assert!(u.chop(point(15.0, 12.0)).approx_eq(&point(15.0, 10.0)));

    assert_eq!(BezierPath::new().chop(point(1.0, 2.0)), point(1.0, 2.0));
    assert_eq!(polyline(&[(3.0, 3.0)], false).chop(point(1.0, 2.0)), point(3.0, 3.0));
}

#[test]
fn center_and_outermost_node() {
    let path = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], true);
    assert_eq!(path.center(), point(5.0, 5.0));
    // Every node is at the same distance: the lowest index wins.
    assert_eq!(path.index_of_outermost_node(), Some(0));

    let path = polyline(&[(0.0, 0.0), (1.0, 0.0), (20.0, 0.0)], false);
    assert_eq!(path.index_of_outermost_node(), Some(2));

    assert_eq!(BezierPath::new().center(), point(0.0, 0.0));
    assert_eq!(BezierPath::new().index_of_outermost_node(), None);
}

#[test]
fn set_to_copies_flags() {
    let mut path = BezierPath::new();
    let mut other = arch();
    other.set_winding_rule(WindingRule::NonZero);

    path.set_to(&other);
    assert_eq!(path, other);
    assert!(path.is_closed());
    assert_eq!(path.winding_rule(), WindingRule::NonZero);
    assert_eq!(path.bounds(), other.bounds());
}

#[test]
fn winding_rule_parsing() {
    assert_eq!("even-odd".parse::<WindingRule>(), Ok(WindingRule::EvenOdd));
    assert_eq!("NonZero".parse::<WindingRule>(), Ok(WindingRule::NonZero));
    assert_eq!(
        "sideways".parse::<WindingRule>(),
        Err(PathError::UnknownWindingRule("sideways".to_string()))
    );
    assert_eq!(WindingRule::try_from(1), Ok(WindingRule::NonZero));
    assert_eq!(
        WindingRule::try_from(7),
        Err(PathError::InvalidWindingRuleCode(7))
    );
    assert_eq!(WindingRule::try_from(WindingRule::EvenOdd.code()), Ok(WindingRule::EvenOdd));
    assert_eq!(WindingRule::NonZero.to_string(), "non-zero");
    assert_eq!(WindingRule::default(), WindingRule::EvenOdd);
}
