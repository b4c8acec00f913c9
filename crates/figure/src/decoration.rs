//! Glyphs drawn at the ends of open figures.

use crate::attributes::{FigureAttributes, LineJoin};
use crate::math::{vector, Box2D, Point};
use crate::path::WindingRule;
use crate::rasterizer::{Rasterizer, Shape, StrokeStyle};

use std::fmt;

/// A decoration drawn at the start or at the end of a figure.
///
/// `p1` is the end point of the figure the decoration is attached to and `p2` a point
/// giving the direction of the line arriving at `p1`.
pub trait LineDecoration: fmt::Debug {
    /// Draws the decoration.
    fn draw(&self, target: &mut dyn Rasterizer, attributes: &FigureAttributes, p1: Point, p2: Point);

    /// Distance the line is shortened by to make room for the decoration.
    fn decoration_radius(&self, attributes: &FigureAttributes) -> f64;

    /// Area the decoration draws into.
    fn drawing_area(&self, attributes: &FigureAttributes, p1: Point, p2: Point) -> Box2D;
}

/// An arrow head.
///
/// The tip of the arrow is at the decorated point. Its two wings go back along the
/// line, `outer_radius` away from the tip and `angle` radians away from the line on
/// each side. A non-zero `inner_radius` carves a notch at that distance from the tip.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArrowTip {
    pub angle: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub filled: bool,
    pub stroked: bool,
}

impl ArrowTip {
    pub const DEFAULT: Self = ArrowTip {
        angle: 0.35,
        outer_radius: 12.0,
        inner_radius: 11.3,
        filled: true,
        stroked: false,
    };

    pub fn new(angle: f64, outer_radius: f64, inner_radius: f64) -> Self {
        ArrowTip {
            angle,
            outer_radius,
            inner_radius,
            ..Self::DEFAULT
        }
    }

    #[inline]
    pub const fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    #[inline]
    pub const fn with_stroked(mut self, stroked: bool) -> Self {
        self.stroked = stroked;
        self
    }

    /// Thick strokes get bigger arrows.
    fn scale_factor(attributes: &FigureAttributes) -> f64 {
        let stroke_width = attributes.stroke_width;
        if stroke_width > 1.0 {
            1.0 + (stroke_width - 1.0) / 2.0
        } else {
            1.0
        }
    }

    /// The polygon of the arrow pointing at `p1`, coming from `p2`.
    pub fn glyph(&self, attributes: &FigureAttributes, p1: Point, p2: Point) -> Vec<Point> {
        let scale = Self::scale_factor(attributes);
        let back = p2 - p1;
        let length = back.length();
        let direction = if length > 0.0 {
            back / length
        } else {
            vector(1.0, 0.0)
        };
        let normal = vector(-direction.y, direction.x);
        let at = |along: f64, across: f64| -> Point { p1 + direction * along + normal * across };

        let (sin, cos) = self.angle.sin_cos();
        let outer = self.outer_radius * scale;
        let mut points = vec![at(outer * cos, -outer * sin), p1, at(outer * cos, outer * sin)];
        if self.inner_radius != 0.0 {
            points.push(at(self.inner_radius * scale, 0.0));
        }

        points
    }
}

impl Default for ArrowTip {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl LineDecoration for ArrowTip {
    fn draw(&self, target: &mut dyn Rasterizer, attributes: &FigureAttributes, p1: Point, p2: Point) {
        let color = match attributes.stroke_color {
            Some(color) => color,
            None => return,
        };

        let shape = Shape::new(self.glyph(attributes, p1, p2), true, WindingRule::NonZero);
        if self.filled {
            target.fill(&shape, color);
        }
        if self.stroked {
            target.stroke(
                &shape,
                &StrokeStyle {
                    color,
                    width: attributes.stroke_width,
                    line_join: LineJoin::Miter,
                    miter_limit: attributes.stroke_miter_limit,
                },
            );
        }
    }

    fn decoration_radius(&self, attributes: &FigureAttributes) -> f64 {
        self.inner_radius * Self::scale_factor(attributes)
    }

    fn drawing_area(&self, attributes: &FigureAttributes, p1: Point, p2: Point) -> Box2D {
        let glyph = Shape::new(self.glyph(attributes, p1, p2), true, WindingRule::NonZero);
        let grow = attributes.stroke_width / 2.0;

        glyph.bounding_box().inflate(grow, grow)
    }
}

#[cfg(test)]
use crate::geom::euclid::approxeq::ApproxEq;
#[cfg(test)]
use crate::math::point;

#[test]
fn arrow_glyph_points_at_the_end() {
    let arrow = ArrowTip::new(core::f64::consts::FRAC_PI_4, 2f64.sqrt(), 1.0);
    let attributes = FigureAttributes::DEFAULT;

    let glyph = arrow.glyph(&attributes, point(0.0, 0.0), point(10.0, 0.0));
    assert_eq!(glyph.len(), 4);
    assert!(glyph[0].approx_eq(&point(1.0, -1.0)));
    assert_eq!(glyph[1], point(0.0, 0.0));
    assert!(glyph[2].approx_eq(&point(1.0, 1.0)));
    assert!(glyph[3].approx_eq(&point(1.0, 0.0)));

    let no_notch = ArrowTip::new(0.3, 5.0, 0.0);
    assert_eq!(no_notch.glyph(&attributes, point(0.0, 0.0), point(0.0, 3.0)).len(), 3);
}

#[test]
fn arrow_radius_grows_with_the_stroke() {
    let arrow = ArrowTip::DEFAULT;
    let thin = FigureAttributes::DEFAULT;
    let thick = FigureAttributes::DEFAULT.with_stroke_width(3.0);

    assert_eq!(arrow.decoration_radius(&thin), 11.3);
    assert!((arrow.decoration_radius(&thick) - 22.6).abs() < 1e-12);
}

#[test]
fn arrow_drawing_area() {
    let arrow = ArrowTip::new(core::f64::consts::FRAC_PI_4, 2f64.sqrt(), 1.0);
    let attributes = FigureAttributes::DEFAULT.with_stroke_width(1.0);

    let area = arrow.drawing_area(&attributes, point(0.0, 0.0), point(10.0, 0.0));
    assert!(area.min.approx_eq(&point(-0.5, -1.5)));
    assert!(area.max.approx_eq(&point(1.5, 1.5)));
}

#[test]
fn arrow_draws_with_the_stroke_color() {
    use crate::attributes::Color;
    use crate::rasterizer::{DrawCommand, RecordingRasterizer};

    let arrow = ArrowTip::DEFAULT.with_stroked(true);
    let red = Color::new(1.0, 0.0, 0.0, 1.0);
    let attributes = FigureAttributes::DEFAULT.with_stroke_color(Some(red));

    let mut target = RecordingRasterizer::new();
    arrow.draw(&mut target, &attributes, point(0.0, 0.0), point(0.0, 20.0));
    assert_eq!(target.commands.len(), 2);
    match &target.commands[0] {
        DrawCommand::Fill(shape, color) => {
            assert_eq!(*color, red);
            assert!(shape.closed);
        }
        other => panic!("unexpected {:?}", other),
    }

    let mut target = RecordingRasterizer::new();
    arrow.draw(
        &mut target,
        &attributes.with_stroke_color(None),
        point(0.0, 0.0),
        point(0.0, 20.0),
    );
    assert!(target.commands.is_empty());
}
