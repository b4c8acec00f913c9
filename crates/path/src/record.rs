//! Flat records of paths and nodes, as written to and read from persisted documents.
//!
//! Control point coordinates equal to the anchor's are left out when writing and
//! default to the anchor's when reading.

use crate::math::point;
use crate::{BezierPath, Coord, Node, NodeMask};

#[cfg(feature = "serialization")]
fn default_colinear() -> bool {
    true
}

/// The persisted fields of a [`Node`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct NodeRecord {
    #[cfg_attr(feature = "serialization", serde(default))]
    pub mask: u32,
    #[cfg_attr(feature = "serialization", serde(default = "default_colinear"))]
    pub colinear: bool,
    pub x: f64,
    pub y: f64,
    #[cfg_attr(
        feature = "serialization",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub c1x: Option<f64>,
    #[cfg_attr(
        feature = "serialization",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub c1y: Option<f64>,
    #[cfg_attr(
        feature = "serialization",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub c2x: Option<f64>,
    #[cfg_attr(
        feature = "serialization",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub c2y: Option<f64>,
}

impl NodeRecord {
    /// A record of a straight node with only its anchor.
    pub fn anchor(x: f64, y: f64) -> Self {
        NodeRecord {
            mask: NodeMask::C0.bits(),
            colinear: true,
            x,
            y,
            c1x: None,
            c1y: None,
            c2x: None,
            c2y: None,
        }
    }

    pub fn to_node(&self) -> Node {
        let mut node = Node::with_mask(
            NodeMask(self.mask),
            point(self.x, self.y),
            point(
                self.c1x.unwrap_or(self.x),
                self.c1y.unwrap_or(self.y),
            ),
            point(
                self.c2x.unwrap_or(self.x),
                self.c2y.unwrap_or(self.y),
            ),
        );
        node.keep_colinear = self.colinear;

        node
    }
}

fn unless_equal(value: f64, reference: f64) -> Option<f64> {
    if value == reference {
        None
    } else {
        Some(value)
    }
}

impl<'l> From<&'l Node> for NodeRecord {
    fn from(node: &'l Node) -> Self {
        let anchor = node.anchor();
        let c1 = node.point(Coord::C1);
        let c2 = node.point(Coord::C2);

        NodeRecord {
            mask: node.mask().bits(),
            colinear: node.keep_colinear,
            x: anchor.x,
            y: anchor.y,
            c1x: unless_equal(c1.x, anchor.x),
            c1y: unless_equal(c1.y, anchor.y),
            c2x: unless_equal(c2.x, anchor.x),
            c2y: unless_equal(c2.y, anchor.y),
        }
    }
}

/// The persisted fields of a [`BezierPath`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathRecord {
    #[cfg_attr(feature = "serialization", serde(default))]
    pub closed: bool,
    #[cfg_attr(feature = "serialization", serde(default))]
    pub nodes: Vec<NodeRecord>,
}

impl PathRecord {
    pub fn to_path(&self) -> BezierPath {
        BezierPath::from_nodes(
            self.nodes.iter().map(NodeRecord::to_node).collect(),
            self.closed,
        )
    }
}

impl<'l> From<&'l BezierPath> for PathRecord {
    fn from(path: &'l BezierPath) -> Self {
        PathRecord {
            closed: path.is_closed(),
            nodes: path.iter().map(NodeRecord::from).collect(),
        }
    }
}

#[cfg(test)]
fn mixed_path() -> BezierPath {
    let mut smooth = Node::curve(point(10.0, 0.0), point(8.0, 2.0), point(12.0, -2.0));
    smooth.keep_colinear = false;

    BezierPath::from_nodes(
        vec![
            Node::new(point(0.0, 0.0)),
            smooth,
            Node::with_mask(
                NodeMask::C1,
                point(20.0, 0.0),
                point(20.0, 5.0),
                point(20.0, 0.0),
            ),
        ],
        true,
    )
}

#[test]
fn compact_records() {
    let path = mixed_path();
    let record = PathRecord::from(&path);

    assert!(record.closed);
    assert_eq!(record.nodes[0], NodeRecord::anchor(0.0, 0.0));
    assert_eq!(record.nodes[1].c1x, Some(8.0));
    assert_eq!(record.nodes[1].c2y, Some(-2.0));
    assert!(!record.nodes[1].colinear);
    assert_eq!(record.nodes[1].mask, 3);
    // Only the coordinate that differs from the anchor is written.
    assert_eq!(record.nodes[2].c1x, None);
    assert_eq!(record.nodes[2].c1y, Some(5.0));
    assert_eq!(record.nodes[2].c2x, None);
    assert_eq!(record.nodes[2].c2y, None);
}

#[test]
fn records_round_trip() {
    let path = mixed_path();
    let restored = PathRecord::from(&path).to_path();

    assert_eq!(restored, path);
    assert_eq!(restored.bounds(), path.bounds());
}

#[test]
fn missing_control_points_default_to_the_anchor() {
    let record = PathRecord {
        closed: false,
        nodes: vec![
            NodeRecord::anchor(1.0, 2.0),
            NodeRecord {
                mask: NodeMask::C1.bits(),
                c1x: Some(4.0),
                ..NodeRecord::anchor(5.0, 6.0)
            },
        ],
    };

    let path = record.to_path();
    assert!(!path.is_closed());
    let first = path.get(0).unwrap();
    assert_eq!(first.point(Coord::C1), point(1.0, 2.0));
    assert_eq!(first.point(Coord::C2), point(1.0, 2.0));
    let second = path.get(1).unwrap();
    assert!(second.has_c1());
    assert_eq!(second.point(Coord::C1), point(4.0, 6.0));
    assert_eq!(second.point(Coord::C2), point(5.0, 6.0));

    assert_eq!(PathRecord::from(&path), record);
}

#[cfg(feature = "serialization")]
#[test]
fn serde_round_trip() {
    let json = r#"{
        "closed": true,
        "nodes": [
            { "x": 0.0, "y": 0.0 },
            { "mask": 3, "colinear": false, "x": 10.0, "y": 0.0,
              "c1x": 8.0, "c1y": 2.0, "c2x": 12.0, "c2y": -2.0 },
            { "mask": 1, "x": 20.0, "y": 0.0, "c1y": 5.0 }
        ]
    }"#;

    let record: PathRecord = serde_json::from_str(json).unwrap();
    let path = record.to_path();
    assert_eq!(path, mixed_path());

    let written = serde_json::to_string(&PathRecord::from(&path)).unwrap();
    let straight = serde_json::to_string(&NodeRecord::from(&path.nodes()[0])).unwrap();
    assert!(!straight.contains("c1x"));
    assert!(!straight.contains("c2y"));
    let reread: PathRecord = serde_json::from_str(&written).unwrap();
    assert_eq!(reread.to_path(), path);
}
