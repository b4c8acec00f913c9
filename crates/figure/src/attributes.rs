//! Drawing attributes of a figure.

use crate::decoration::LineDecoration;
use crate::path::WindingRule;

use std::rc::Rc;

/// An RGBA color with components between 0 and 1.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Color::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Color { r, g, b, a }
    }
}

/// Line join as defined by the SVG specification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum LineJoin {
    /// A sharp corner is to be used to join path segments.
    Miter,
    /// A round corner is to be used to join path segments.
    Round,
    /// A beveled corner is to be used to join path segments.
    Bevel,
}

/// Where the stroke is drawn relative to the path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum StrokePlacement {
    Inside,
    Center,
    Outside,
}

/// How far the fill extends under the stroke.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FillUnderStroke {
    /// The fill stops where the stroke starts.
    None,
    /// The fill goes up to the path.
    Center,
    /// The fill goes up to the outer edge of the stroke.
    Full,
}

/// The attributes a figure is drawn and hit-tested with.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct FigureAttributes {
    /// Width of the stroke.
    ///
    /// Default value: `FigureAttributes::DEFAULT_STROKE_WIDTH`.
    pub stroke_width: f64,

    /// Ratio of the miter length to half of the stroke width, see `LineJoin::Miter`.
    ///
    /// Default value: `FigureAttributes::DEFAULT_MITER_LIMIT`.
    pub stroke_miter_limit: f64,

    pub stroke_join: LineJoin,

    pub stroke_placement: StrokePlacement,

    pub fill_under_stroke: FillUnderStroke,

    /// When set, the stroke width is in device pixels and does not grow with the zoom.
    pub stroke_pixel_sized: bool,

    /// No fill if `None`.
    pub fill_color: Option<Color>,

    /// No stroke if `None`.
    pub stroke_color: Option<Color>,

    /// Fill open paths as if they were closed.
    pub unclosed_path_filled: bool,
}

impl FigureAttributes {
    /// Minimum miter limit as defined by the SVG specification.
    pub const MINIMUM_MITER_LIMIT: f64 = 1.0;
    pub const DEFAULT_MITER_LIMIT: f64 = 3.0;
    pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
    pub const DEFAULT_LINE_JOIN: LineJoin = LineJoin::Miter;

    pub const DEFAULT: Self = FigureAttributes {
        stroke_width: Self::DEFAULT_STROKE_WIDTH,
        stroke_miter_limit: Self::DEFAULT_MITER_LIMIT,
        stroke_join: Self::DEFAULT_LINE_JOIN,
        stroke_placement: StrokePlacement::Center,
        fill_under_stroke: FillUnderStroke::Center,
        stroke_pixel_sized: false,
        fill_color: None,
        stroke_color: Some(Color::BLACK),
        unclosed_path_filled: false,
    };

    #[inline]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[inline]
    pub fn with_stroke_miter_limit(mut self, limit: f64) -> Self {
        assert!(limit >= Self::MINIMUM_MITER_LIMIT);
        self.stroke_miter_limit = limit;
        self
    }

    #[inline]
    pub const fn with_stroke_join(mut self, join: LineJoin) -> Self {
        self.stroke_join = join;
        self
    }

    #[inline]
    pub const fn with_stroke_placement(mut self, placement: StrokePlacement) -> Self {
        self.stroke_placement = placement;
        self
    }

    #[inline]
    pub const fn with_fill_under_stroke(mut self, fill_under_stroke: FillUnderStroke) -> Self {
        self.fill_under_stroke = fill_under_stroke;
        self
    }

    #[inline]
    pub const fn with_stroke_pixel_sized(mut self, pixel_sized: bool) -> Self {
        self.stroke_pixel_sized = pixel_sized;
        self
    }

    #[inline]
    pub const fn with_fill_color(mut self, color: Option<Color>) -> Self {
        self.fill_color = color;
        self
    }

    #[inline]
    pub const fn with_stroke_color(mut self, color: Option<Color>) -> Self {
        self.stroke_color = color;
        self
    }

    #[inline]
    pub const fn with_unclosed_path_filled(mut self, filled: bool) -> Self {
        self.unclosed_path_filled = filled;
        self
    }

    /// Width of the stroke at a given zoom level.
    pub fn stroke_total_width(&self, scale: f64) -> f64 {
        if self.stroke_pixel_sized && scale > 0.0 {
            self.stroke_width / scale
        } else {
            self.stroke_width
        }
    }

    /// How far the outer edge of the stroke is from the path.
    pub fn perpendicular_draw_growth(&self, scale: f64) -> f64 {
        let half_width = self.stroke_total_width(scale) / 2.0;
        match self.stroke_placement {
            StrokePlacement::Inside => -half_width,
            StrokePlacement::Center => 0.0,
            StrokePlacement::Outside => half_width,
        }
    }

    /// How far the edge of the fill is from the path.
    pub fn perpendicular_fill_growth(&self, scale: f64) -> f64 {
        let half_width = self.stroke_total_width(scale) / 2.0;
        let draw_growth = self.perpendicular_draw_growth(scale);
        match self.fill_under_stroke {
            FillUnderStroke::Full => draw_growth + half_width,
            FillUnderStroke::Center => draw_growth,
            FillUnderStroke::None => draw_growth - half_width,
        }
    }

    /// How far from the path a point still hits the figure.
    pub fn perpendicular_hit_growth(&self, scale: f64) -> f64 {
        let half_width = self.stroke_total_width(scale) / 2.0;
        f64::max(
            self.perpendicular_draw_growth(scale) + half_width,
            self.perpendicular_fill_growth(scale),
        )
    }

    /// Miter limit to grow an outline by `grow` with, as a ratio of the miter length
    /// to `grow`.
    pub(crate) fn grow_miter_limit(&self, grow: f64, scale: f64) -> f64 {
        if grow == 0.0 {
            return Self::MINIMUM_MITER_LIMIT;
        }

        let limit = self.stroke_total_width(scale) * self.stroke_miter_limit / grow.abs();
        limit.max(Self::MINIMUM_MITER_LIMIT)
    }
}

impl Default for FigureAttributes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single attribute change, applied with `BezierFigure::set`.
#[derive(Clone, Debug)]
pub enum Attribute {
    StrokeWidth(f64),
    /// Values below `FigureAttributes::MINIMUM_MITER_LIMIT` are clamped.
    StrokeMiterLimit(f64),
    StrokeJoin(LineJoin),
    StrokePlacement(StrokePlacement),
    FillUnderStroke(FillUnderStroke),
    StrokePixelSized(bool),
    FillColor(Option<Color>),
    StrokeColor(Option<Color>),
    UnclosedPathFilled(bool),
    PathClosed(bool),
    WindingRule(WindingRule),
    StartDecoration(Option<Rc<dyn LineDecoration>>),
    EndDecoration(Option<Rc<dyn LineDecoration>>),
}

impl FigureAttributes {
    /// Applies the attributes stored in this struct. Returns the attribute back if it
    /// is stored somewhere else.
    pub(crate) fn apply(&mut self, attribute: Attribute) -> Option<Attribute> {
        match attribute {
            Attribute::StrokeWidth(width) => self.stroke_width = width,
            Attribute::StrokeMiterLimit(limit) => {
                self.stroke_miter_limit = limit.max(Self::MINIMUM_MITER_LIMIT)
            }
            Attribute::StrokeJoin(join) => self.stroke_join = join,
            Attribute::StrokePlacement(placement) => self.stroke_placement = placement,
            Attribute::FillUnderStroke(fill) => self.fill_under_stroke = fill,
            Attribute::StrokePixelSized(pixel_sized) => self.stroke_pixel_sized = pixel_sized,
            Attribute::FillColor(color) => self.fill_color = color,
            Attribute::StrokeColor(color) => self.stroke_color = color,
            Attribute::UnclosedPathFilled(filled) => self.unclosed_path_filled = filled,
            other => return Some(other),
        }

        None
    }
}

#[test]
fn growth_factors() {
    let attributes = FigureAttributes::DEFAULT.with_stroke_width(4.0);
    assert_eq!(attributes.perpendicular_draw_growth(1.0), 0.0);
    assert_eq!(attributes.perpendicular_fill_growth(1.0), 0.0);
    assert_eq!(attributes.perpendicular_hit_growth(1.0), 2.0);

    let outside = attributes
        .with_stroke_placement(StrokePlacement::Outside)
        .with_fill_under_stroke(FillUnderStroke::Full);
    assert_eq!(outside.perpendicular_draw_growth(1.0), 2.0);
    assert_eq!(outside.perpendicular_fill_growth(1.0), 4.0);
    assert_eq!(outside.perpendicular_hit_growth(1.0), 4.0);

    let inside = attributes
        .with_stroke_placement(StrokePlacement::Inside)
        .with_fill_under_stroke(FillUnderStroke::None);
    assert_eq!(inside.perpendicular_draw_growth(1.0), -2.0);
    assert_eq!(inside.perpendicular_fill_growth(1.0), -4.0);
    assert_eq!(inside.perpendicular_hit_growth(1.0), 0.0);
}

#[test]
fn pixel_sized_stroke() {
    let attributes = FigureAttributes::DEFAULT.with_stroke_width(2.0);
    assert_eq!(attributes.stroke_total_width(4.0), 2.0);

    let pixel_sized = attributes.with_stroke_pixel_sized(true);
    assert_eq!(pixel_sized.stroke_total_width(4.0), 0.5);
    assert_eq!(pixel_sized.perpendicular_hit_growth(4.0), 0.25);
}

#[test]
fn apply_attributes() {
    let mut attributes = FigureAttributes::default();
    assert!(attributes.apply(Attribute::StrokeWidth(3.0)).is_none());
    assert!(attributes.apply(Attribute::StrokeMiterLimit(0.2)).is_none());
    assert!(attributes.apply(Attribute::FillColor(Some(Color::WHITE))).is_none());
    assert!(attributes.apply(Attribute::PathClosed(true)).is_some());

    assert_eq!(attributes.stroke_width, 3.0);
    assert_eq!(attributes.stroke_miter_limit, 1.0);
    assert_eq!(attributes.fill_color, Some(Color::WHITE));

    // A miter limit of 3 on a stroke of width 3 allows miters up to 9 units long.
    assert_eq!(
        FigureAttributes::DEFAULT
            .with_stroke_width(3.0)
            .grow_miter_limit(1.5, 1.0),
        6.0
    );
}

#[test]
#[should_panic]
fn invalid_miter_limit() {
    let _ = FigureAttributes::DEFAULT.with_stroke_miter_limit(0.5);
}
