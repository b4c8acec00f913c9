#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! An editable bézier path and the algorithms that query it.
//!
//! A [`BezierPath`] is an ordered list of [`Node`]s forming a single contour, open or
//! closed. Each node carries an anchor and up to two control points. Derived geometry
//! (the flattened outline and its bounds) is cached and rebuilt lazily after every
//! mutation.
//!
//! This crate is reexported in [figura](https://docs.rs/figura/).
//!
//! # Examples
//!
//! ```
//! use figura_path::{BezierPath, Node};
//! use figura_path::math::point;
//!
//! let mut path = BezierPath::new();
//! path.push(Node::new(point(0.0, 0.0)));
//! path.push(Node::new(point(10.0, 0.0)));
//! path.push(Node::new(point(10.0, 10.0)));
//! path.set_closed(true);
//!
//! assert!(path.contains(point(8.0, 2.0)));
//! assert!(!path.contains(point(2.0, 8.0)));
//!
//! // Insert a node in the middle of the first edge.
//! let index = path.split_segment(point(5.0, 0.0), 0.5);
//! assert_eq!(index, Some(1));
//! assert_eq!(path.len(), 4);
//! ```

pub use figura_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod aabb;
mod error;
pub mod grow;
pub mod hit_test;
mod node;
pub mod path;
pub mod raycast;
pub mod record;
pub mod walk;

pub use crate::error::PathError;
pub use crate::node::{Coord, Node, NodeMask};
#[doc(inline)]
pub use crate::path::{BezierPath, Outline, WindingRule};
#[doc(inline)]
pub use crate::record::{NodeRecord, PathRecord};

pub mod math {
    //! f64 version of the euclid types used everywhere. Reexported from figura_geom.

    pub use figura_geom::math::*;
}
