use crate::math::{Point, Transform, Vector};
use crate::PathError;

use core::convert::TryFrom;
use core::ops::BitOr;

/// Identifies one of the three points of a [`Node`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Coord {
    /// The point the path goes through.
    Anchor = 0,
    /// The control point used by the segment arriving at the node.
    C1 = 1,
    /// The control point used by the segment leaving the node.
    C2 = 2,
}

impl Coord {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The control point on the other side of the anchor, if any.
    #[inline]
    pub fn opposite(self) -> Option<Coord> {
        match self {
            Coord::Anchor => None,
            Coord::C1 => Some(Coord::C2),
            Coord::C2 => Some(Coord::C1),
        }
    }
}

impl TryFrom<usize> for Coord {
    type Error = PathError;

    fn try_from(idx: usize) -> Result<Self, PathError> {
        match idx {
            0 => Ok(Coord::Anchor),
            1 => Ok(Coord::C1),
            2 => Ok(Coord::C2),
            _ => Err(PathError::InvalidCoordIndex(idx)),
        }
    }
}

/// Flags telling which control points of a node are active.
///
/// Bits that are not known by this crate are preserved as is so that a node read from
/// a record is written back unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct NodeMask(pub u32);

impl NodeMask {
    /// Straight node, only the anchor is used.
    pub const C0: Self = NodeMask(0);
    /// The incoming control point is active.
    pub const C1: Self = NodeMask(1);
    /// The outgoing control point is active.
    pub const C2: Self = NodeMask(2);
    /// Both control points are active.
    pub const C1C2: Self = NodeMask(3);

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn with(self, other: Self) -> Self {
        NodeMask(self.0 | other.0)
    }

    #[inline]
    pub fn without(self, other: Self) -> Self {
        NodeMask(self.0 & !other.0)
    }
}

impl BitOr for NodeMask {
    type Output = Self;
    fn bitor(self, other: Self) -> Self {
        self.with(other)
    }
}

/// A single editable point of a bézier path.
///
/// A node always has an anchor. Control points are only meaningful when the
/// corresponding bit of the mask is set; inactive control points are kept equal
/// to the anchor when the node is created but follow the anchor only through
/// [`Node::move_to`] and [`Node::translate`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Node {
    points: [Point; 3],
    mask: NodeMask,
    /// When set, dragging one control point rotates the opposite one so that
    /// both stay on a line going through the anchor.
    pub keep_colinear: bool,
}

impl Node {
    /// A straight node.
    pub fn new(anchor: Point) -> Self {
        Node {
            points: [anchor; 3],
            mask: NodeMask::C0,
            keep_colinear: true,
        }
    }

    /// A curve node with both control points active.
    pub fn curve(anchor: Point, c1: Point, c2: Point) -> Self {
        Node {
            points: [anchor, c1, c2],
            mask: NodeMask::C1C2,
            keep_colinear: true,
        }
    }

    pub fn with_mask(mask: NodeMask, anchor: Point, c1: Point, c2: Point) -> Self {
        Node {
            points: [anchor, c1, c2],
            mask,
            keep_colinear: true,
        }
    }

    #[inline]
    pub fn anchor(&self) -> Point {
        self.points[0]
    }

    #[inline]
    pub fn point(&self, coord: Coord) -> Point {
        self.points[coord.index()]
    }

    /// Moves a single point of the node, leaving the two others untouched.
    #[inline]
    pub fn set_point(&mut self, coord: Coord, p: Point) {
        self.points[coord.index()] = p;
    }

    /// Moves the anchor to `p` and both control points by the same amount.
    pub fn move_to(&mut self, p: Point) {
        let delta = p - self.anchor();
        self.translate(delta);
    }

    pub fn translate(&mut self, v: Vector) {
        for p in &mut self.points {
            *p += v;
        }
    }

    /// Moves one point of the node the way a control point handle is dragged.
    ///
    /// Moving the anchor moves the whole node. Moving a control point of a node that
    /// keeps its control points colinear rotates the opposite control point around
    /// the anchor, preserving its distance to the anchor.
    pub fn set_colinear_point(&mut self, coord: Coord, p: Point) {
        let opposite = match coord.opposite() {
            Some(opposite) => opposite,
            None => {
                self.move_to(p);
                return;
            }
        };

        self.set_point(coord, p);

        if !self.keep_colinear || !self.mask.contains(NodeMask::C1C2) {
            return;
        }

        let anchor = self.anchor();
        let direction = anchor - p;
        let direction_length = direction.length();
        if direction_length == 0.0 {
            return;
        }

        let distance = (self.point(opposite) - anchor).length();
        self.set_point(opposite, anchor + direction * (distance / direction_length));
    }

    #[inline]
    pub fn mask(&self) -> NodeMask {
        self.mask
    }

    #[inline]
    pub fn set_mask(&mut self, mask: NodeMask) {
        self.mask = mask;
    }

    #[inline]
    pub fn has_c1(&self) -> bool {
        self.mask.contains(NodeMask::C1)
    }

    #[inline]
    pub fn has_c2(&self) -> bool {
        self.mask.contains(NodeMask::C2)
    }

    /// Applies the transform to the three points of the node.
    pub fn transformed(&self, transform: &Transform) -> Self {
        let mut node = *self;
        for p in &mut node.points {
            *p = transform.transform_point(*p);
        }

        node
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn coord_from_index() {
    assert_eq!(Coord::try_from(0), Ok(Coord::Anchor));
    assert_eq!(Coord::try_from(2), Ok(Coord::C2));
    assert_eq!(Coord::try_from(3), Err(PathError::InvalidCoordIndex(3)));
    assert_eq!(Coord::C1.opposite(), Some(Coord::C2));
    assert_eq!(Coord::Anchor.opposite(), None);
}

#[test]
fn mask_bits() {
    assert!(NodeMask::C1C2.contains(NodeMask::C1));
    assert!(NodeMask::C1C2.contains(NodeMask::C2));
    assert!(!NodeMask::C1.contains(NodeMask::C2));
    assert_eq!(NodeMask::C1 | NodeMask::C2, NodeMask::C1C2);
    assert_eq!(NodeMask::C1C2.without(NodeMask::C1), NodeMask::C2);
    // Unknown bits survive.
    assert_eq!(NodeMask(8).with(NodeMask::C1).bits(), 9);
}

#[test]
fn straight_node_points() {
    let node = Node::new(point(1.0, 2.0));
    assert_eq!(node.point(Coord::C1), point(1.0, 2.0));
    assert_eq!(node.point(Coord::C2), point(1.0, 2.0));
    assert!(!node.has_c1());
    assert!(!node.has_c2());
    assert!(node.keep_colinear);
}

#[test]
fn move_to_shifts_every_point() {
    let mut node = Node::curve(point(0.0, 0.0), point(-1.0, 0.0), point(1.0, 1.0));
    node.move_to(point(10.0, 5.0));
    assert_eq!(node.anchor(), point(10.0, 5.0));
    assert_eq!(node.point(Coord::C1), point(9.0, 5.0));
    assert_eq!(node.point(Coord::C2), point(11.0, 6.0));
}

#[test]
fn set_point_moves_one_point() {
    let mut node = Node::curve(point(0.0, 0.0), point(-1.0, 0.0), point(1.0, 0.0));
    node.set_point(Coord::C1, point(-3.0, 3.0));
    assert_eq!(node.anchor(), point(0.0, 0.0));
    assert_eq!(node.point(Coord::C1), point(-3.0, 3.0));
    assert_eq!(node.point(Coord::C2), point(1.0, 0.0));
}

#[test]
fn colinear_drag_rotates_opposite_control() {
    use crate::geom::euclid::approxeq::ApproxEq;

    let mut node = Node::curve(point(0.0, 0.0), point(-2.0, 0.0), point(3.0, 0.0));
    node.set_colinear_point(Coord::C1, point(0.0, -5.0));
    assert_eq!(node.point(Coord::C1), point(0.0, -5.0));
    assert!(node.point(Coord::C2).approx_eq(&point(0.0, 3.0)));

    // Without the constraint the opposite control point stays put.
    let mut node = Node::curve(point(0.0, 0.0), point(-2.0, 0.0), point(3.0, 0.0));
    node.keep_colinear = false;
    node.set_colinear_point(Coord::C1, point(0.0, -5.0));
    assert_eq!(node.point(Coord::C2), point(3.0, 0.0));

    // Dragging onto the anchor leaves the opposite control point alone.
    let mut node = Node::curve(point(0.0, 0.0), point(-2.0, 0.0), point(3.0, 0.0));
    node.set_colinear_point(Coord::C2, point(0.0, 0.0));
    assert_eq!(node.point(Coord::C1), point(-2.0, 0.0));
}

#[test]
fn transformed_node() {
    let node = Node::curve(point(1.0, 0.0), point(0.0, 0.0), point(2.0, 0.0));
    let t = Transform::translation(0.0, 4.0);
    let moved = node.transformed(&t);
    assert_eq!(moved.anchor(), point(1.0, 4.0));
    assert_eq!(moved.point(Coord::C2), point(2.0, 4.0));
    assert_eq!(moved.mask(), NodeMask::C1C2);
}
