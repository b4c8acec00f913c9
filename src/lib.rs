#![deny(bare_trait_objects)]

//! Geometry core of a vector drawing editor.
//!
//! figura is split into several crates, all reexported here:
//!
//! - [geom](https://docs.rs/figura_geom/): line segments, cubic bézier curves and the
//!   small geometric helpers editing tools need.
//! - [path](https://docs.rs/figura_path/): the editable [`BezierPath`](path::BezierPath),
//!   its [`Node`](path::Node)s, hit testing, and structural editing.
//! - [figure](https://docs.rs/figura_figure/): the drawable
//!   [`BezierFigure`](figure::BezierFigure) with attributes, end decorations and change
//!   notifications.
//!
//! # Feature flags
//!
//! `serialization` derives serde's traits for the public types, including the
//! records nodes are persisted with.
//!
//! # Examples
//!
//! ```
//! use figura::figure::{Attribute, BezierFigure, Color, RecordingRasterizer};
//! use figura::math::point;
//! use figura::path::Node;
//!
//! let mut figure = BezierFigure::new(true);
//! figure.add_node(Node::new(point(0.0, 0.0)));
//! figure.add_node(Node::new(point(10.0, 0.0)));
//! figure.add_node(Node::new(point(10.0, 10.0)));
//! figure.set(Attribute::FillColor(Some(Color::WHITE)));
//!
//! assert!(figure.contains(point(8.0, 2.0)));
//!
//! let mut target = RecordingRasterizer::new();
//! figure.draw(&mut target, 1.0);
//! assert_eq!(target.fills().count(), 1);
//! assert_eq!(target.strokes().count(), 1);
//! ```

pub extern crate figura_figure;
pub extern crate figura_geom;
pub extern crate figura_path;

pub use figura_figure as figure;
pub use figura_geom as geom;
pub use figura_path as path;

pub use path::math;
