//! The interface figures draw themselves through.
//!
//! Figures never produce pixels: they compute outlines and hand them over to a
//! [`Rasterizer`].

use crate::attributes::{Color, LineJoin};
use crate::math::{Box2D, Point};
use crate::path::aabb::points_bounding_box;
use crate::path::WindingRule;

/// A flattened outline ready to be filled or stroked.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub points: Vec<Point>,
    /// Whether the last point connects back to the first one.
    pub closed: bool,
    pub winding_rule: WindingRule,
}

impl Shape {
    pub fn new(points: Vec<Point>, closed: bool, winding_rule: WindingRule) -> Self {
        Shape {
            points,
            closed,
            winding_rule,
        }
    }

    pub fn bounding_box(&self) -> Box2D {
        points_bounding_box(self.points.iter().cloned())
    }
}

/// Parameters of a stroke.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub line_join: LineJoin,
    pub miter_limit: f64,
}

/// Performs the actual drawing of shapes.
pub trait Rasterizer {
    fn fill(&mut self, shape: &Shape, color: Color);

    fn stroke(&mut self, shape: &Shape, style: &StrokeStyle);
}

/// A rasterizer that records the drawing commands it receives.
///
/// Useful to inspect what a figure draws without rendering anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordingRasterizer {
    pub commands: Vec<DrawCommand>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Fill(Shape, Color),
    Stroke(Shape, StrokeStyle),
}

impl RecordingRasterizer {
    pub fn new() -> Self {
        RecordingRasterizer::default()
    }

    pub fn fills(&self) -> impl Iterator<Item = &Shape> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Fill(shape, _) => Some(shape),
            DrawCommand::Stroke(..) => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = &Shape> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Stroke(shape, _) => Some(shape),
            DrawCommand::Fill(..) => None,
        })
    }
}

impl Rasterizer for RecordingRasterizer {
    fn fill(&mut self, shape: &Shape, color: Color) {
        self.commands.push(DrawCommand::Fill(shape.clone(), color));
    }

    fn stroke(&mut self, shape: &Shape, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Stroke(shape.clone(), *style));
    }
}

#[test]
fn recording_rasterizer() {
    use crate::math::point;

    let shape = Shape::new(
        vec![point(0.0, 0.0), point(2.0, 1.0)],
        false,
        WindingRule::NonZero,
    );
    let style = StrokeStyle {
        color: Color::BLACK,
        width: 1.0,
        line_join: LineJoin::Bevel,
        miter_limit: 1.0,
    };

    let mut target = RecordingRasterizer::new();
    target.fill(&shape, Color::WHITE);
    target.stroke(&shape, &style);

    assert_eq!(target.fills().count(), 1);
    assert_eq!(target.strokes().count(), 1);
    assert_eq!(target.commands[1], DrawCommand::Stroke(shape.clone(), style));
    assert_eq!(shape.bounding_box().max, point(2.0, 1.0));
}
