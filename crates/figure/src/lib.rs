#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! A drawable, hit-testable figure made of a single bézier path.
//!
//! A [`BezierFigure`] wraps a [`BezierPath`](path::BezierPath) with drawing
//! [attributes](FigureAttributes), optional [decorations](LineDecoration) at the ends of
//! open paths, and change notifications for the editor hosting it. Figures do not
//! rasterize anything themselves: they hand flattened [shapes](Shape) over to a
//! [`Rasterizer`].
//!
//! This crate is reexported in [figura](https://docs.rs/figura/).
//!
//! # Examples
//!
//! ```
//! use figura_figure::{ArrowTip, Attribute, BezierFigure};
//! use figura_figure::math::point;
//! use std::rc::Rc;
//!
//! let mut figure = BezierFigure::new(false);
//! figure.set_bounds(point(0.0, 0.0), point(100.0, 0.0));
//! figure.set(Attribute::EndDecoration(Some(Rc::new(ArrowTip::DEFAULT))));
//!
//! // The stroke stops short of the arrow head.
//! let end = figure.capped_path().nodes()[1].anchor();
//! assert!(end.x < 100.0);
//! assert!(figure.contains(point(50.0, 1.0)));
//! ```

pub use figura_path as path;
pub use figura_path::geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod attributes;
pub mod decoration;
mod edit;
mod figure;
mod listener;
pub mod rasterizer;

#[doc(inline)]
pub use crate::attributes::{
    Attribute, Color, FigureAttributes, FillUnderStroke, LineJoin, StrokePlacement,
};
#[doc(inline)]
pub use crate::decoration::{ArrowTip, LineDecoration};
pub use crate::edit::SplitSegmentEdit;
pub use crate::figure::BezierFigure;
pub use crate::listener::FigureListener;
#[doc(inline)]
pub use crate::rasterizer::{DrawCommand, Rasterizer, RecordingRasterizer, Shape, StrokeStyle};
pub use figura_path::PathError;

pub mod math {
    //! f64 version of the euclid types used everywhere. Reexported from figura_geom.

    pub use figura_path::math::*;
}
