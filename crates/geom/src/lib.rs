#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives on top of euclid.
//!
//! This crate is reexported in [figura](https://docs.rs/figura/).
//!
//! # Overview.
//!
//! This crate implements the maths needed by an editable bézier path:
//!
//! - line segments and lines,
//! - cubic bézier curves (quadratic curves are degree-elevated to cubics),
//! - a handful of scalar helpers used when hit-testing and capping path ends.
//!
//! All coordinates are `f64`.
//!
//! # Flattening
//!
//! Flattening is the action of approximating a curve with a succession of line segments.
//!
//! The tolerance threshold taken as input by the flattening algorithms corresponds
//! to the maximum distance between the curve and its linear approximation.
//! The smaller the tolerance is, the more precise the approximation and the more segments
//! are generated. This value is typically chosen in function of the zoom level.

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

pub mod cubic_bezier;
mod line;
mod segment;
pub mod utils;

#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::line::{Line, LineSegment};
#[doc(inline)]
pub use crate::segment::BezierSegment;

pub mod math {
    //! f64 version of the euclid types used everywhere. The other figura
    //! crates reexport them.

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Size2D<f64>```.
    pub type Size = euclid::default::Size2D<f64>;

    /// Alias for ```euclid::default::Box2D<f64>```.
    pub type Box2D = euclid::default::Box2D<f64>;

    /// Alias for ```euclid::default::Transform2D<f64>```.
    pub type Transform = euclid::default::Transform2D<f64>;

    /// An angle in radians (f64).
    pub type Angle = euclid::Angle<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }
}

/// Smallest flattening tolerance accepted by the flattening routines.
///
/// Smaller values are clamped to this one so that a zero tolerance cannot
/// request an unbounded number of segments.
pub const MIN_TOLERANCE: f64 = 1e-6;

/// Upper bound on the number of line segments a single curve is flattened into.
pub const MAX_FLATTENED_SEGMENTS: u32 = 4096;
