use crate::attributes::{Attribute, FigureAttributes, LineJoin};
use crate::decoration::LineDecoration;
use crate::edit::SplitSegmentEdit;
use crate::listener::FigureListener;
use crate::math::{Box2D, Point, Transform};
use crate::path::geom::utils::{cap, line_contains_point};
use crate::path::grow::grow_polygon;
use crate::path::hit_test::hit_test_polygon;
use crate::path::raycast::{raycast_polygon, Ray};
use crate::path::{BezierPath, Coord, Node, PathError, PathRecord, WindingRule};
use crate::rasterizer::{Rasterizer, Shape, StrokeStyle};

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

/// A figure made of a single bézier path, with drawing attributes and optional
/// decorations at the ends of open paths.
///
/// Every mutation is surrounded by `figure_will_change` and `figure_changed`
/// notifications to the registered listeners, and drops the derived geometry.
///
/// When the figure has a start or an end decoration, the path it strokes is the
/// "capped" path: a copy of the path whose end anchors are pulled back by the radius
/// of the decoration, so that the line does not poke through the decoration.
pub struct BezierFigure {
    path: BezierPath,
    attributes: FigureAttributes,
    start_decoration: Option<Rc<dyn LineDecoration>>,
    end_decoration: Option<Rc<dyn LineDecoration>>,
    capped_path: OnceCell<BezierPath>,
    connectable: bool,
    listeners: Vec<Rc<dyn FigureListener>>,
    change_depth: u32,
}

impl BezierFigure {
    /// Creates a figure without nodes.
    pub fn new(closed: bool) -> Self {
        let mut path = BezierPath::new();
        path.set_closed(closed);

        Self::with_path(path)
    }

    /// Creates a figure drawing the given path.
    pub fn with_path(path: BezierPath) -> Self {
        let connectable = path.is_closed();
        BezierFigure {
            path,
            attributes: FigureAttributes::DEFAULT,
            start_decoration: None,
            end_decoration: None,
            capped_path: OnceCell::new(),
            connectable,
            listeners: Vec::new(),
            change_depth: 0,
        }
    }

    pub fn add_listener(&mut self, listener: Rc<dyn FigureListener>) {
        self.listeners.push(listener);
    }

    pub fn remove_listeners(&mut self) {
        self.listeners.clear();
    }

    /// Opens a change. Listeners are notified when the outermost change opens.
    pub fn will_change(&mut self) {
        if self.change_depth == 0 {
            let figure: &BezierFigure = self;
            for listener in &figure.listeners {
                listener.figure_will_change(figure);
            }
        }
        self.change_depth += 1;
    }

    /// Closes a change opened with `will_change`.
    ///
    /// Drops the derived geometry, and notifies the listeners when the outermost
    /// change closes.
    pub fn changed(&mut self) {
        self.change_depth = self.change_depth.saturating_sub(1);
        self.invalidate();
        if self.change_depth == 0 {
            let figure: &BezierFigure = self;
            for listener in &figure.listeners {
                listener.figure_changed(figure);
            }
        }
    }

    fn edit<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        self.will_change();
        let result = f(self);
        self.changed();

        result
    }

    /// Drops the cached outlines of the path and of the capped path.
    pub fn invalidate(&mut self) {
        self.path.invalidate();
        self.capped_path.take();
    }

    #[inline]
    pub fn attributes(&self) -> &FigureAttributes {
        &self.attributes
    }

    pub fn set_attributes(&mut self, attributes: FigureAttributes) {
        self.edit(|figure| figure.attributes = attributes);
    }

    /// Changes a single attribute.
    pub fn set(&mut self, attribute: Attribute) {
        self.edit(|figure| {
            if let Some(attribute) = figure.attributes.apply(attribute) {
                match attribute {
                    Attribute::PathClosed(closed) => {
                        figure.path.set_closed(closed);
                        figure.connectable = closed;
                    }
                    Attribute::WindingRule(rule) => figure.path.set_winding_rule(rule),
                    Attribute::StartDecoration(decoration) => figure.start_decoration = decoration,
                    Attribute::EndDecoration(decoration) => figure.end_decoration = decoration,
                    _ => {}
                }
            }
        });
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.path.is_closed()
    }

    /// Opens or closes the path. Only closed figures are connectable.
    pub fn set_closed(&mut self, closed: bool) {
        self.set(Attribute::PathClosed(closed));
    }

    #[inline]
    pub fn is_connectable(&self) -> bool {
        self.connectable
    }

    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.path.winding_rule()
    }

    pub fn start_decoration(&self) -> Option<&Rc<dyn LineDecoration>> {
        self.start_decoration.as_ref()
    }

    pub fn end_decoration(&self) -> Option<&Rc<dyn LineDecoration>> {
        self.end_decoration.as_ref()
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.path.len()
    }

    pub fn node(&self, index: usize) -> Result<Node, PathError> {
        self.path.get(index).map(|node| *node)
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        self.path.nodes()
    }

    pub fn add_node(&mut self, node: Node) {
        self.edit(|figure| figure.path.push(node));
    }

    pub fn insert_node(&mut self, index: usize, node: Node) -> Result<(), PathError> {
        if index > self.path.len() {
            return Err(PathError::IndexOutOfRange {
                index,
                len: self.path.len(),
            });
        }
        log::debug!("Inserting node {}", index);

        self.edit(|figure| figure.path.insert(index, node))
    }

    pub fn set_node(&mut self, index: usize, node: Node) -> Result<(), PathError> {
        self.path.get(index)?;

        self.edit(|figure| figure.path.set(index, node))
    }

    pub fn remove_node(&mut self, index: usize) -> Result<Node, PathError> {
        self.path.get(index)?;
        log::debug!("Removing node {}", index);

        self.edit(|figure| figure.path.remove(index))
    }

    pub fn remove_all_nodes(&mut self) {
        self.edit(|figure| figure.path.clear());
    }

    pub fn point(&self, index: usize, coord: Coord) -> Result<Point, PathError> {
        self.path.point(index, coord)
    }

    /// Moves a node so that its anchor lands on `p`. The control points follow.
    pub fn set_point(&mut self, index: usize, p: Point) -> Result<(), PathError> {
        let mut node = *self.path.get(index)?;
        node.move_to(p);

        self.set_node(index, node)
    }

    /// Moves a single point of a node, leaving the others untouched.
    pub fn set_control_point(&mut self, index: usize, coord: Coord, p: Point) -> Result<(), PathError> {
        let mut node = *self.path.get(index)?;
        node.set_point(coord, p);

        self.set_node(index, node)
    }

    /// Moves a point of a node the way a handle is dragged, see
    /// [`Node::set_colinear_point`].
    pub fn drag_control_point(&mut self, index: usize, coord: Coord, p: Point) -> Result<(), PathError> {
        let mut node = *self.path.get(index)?;
        node.set_colinear_point(coord, p);

        self.set_node(index, node)
    }

    /// Moves the first node to `p`, adding nodes if the figure has less than two.
    pub fn set_start_point(&mut self, p: Point) {
        self.edit(|figure| figure.move_end_node(true, p));
    }

    /// Moves the last node to `p`, adding nodes if the figure has less than two.
    pub fn set_end_point(&mut self, p: Point) {
        self.edit(|figure| figure.move_end_node(false, p));
    }

    /// Moves the start point to `anchor` and the end point to `lead`.
    pub fn set_bounds(&mut self, anchor: Point, lead: Point) {
        self.edit(|figure| {
            figure.set_start_point(anchor);
            figure.set_end_point(lead);
        });
    }

    fn move_end_node(&mut self, start: bool, p: Point) {
        let mut nodes = self.path.nodes().to_vec();
        while nodes.len() < 2 {
            nodes.insert(0, Node::new(p));
        }
        let index = if start { 0 } else { nodes.len() - 1 };
        nodes[index].move_to(p);

        let mut path = BezierPath::from_nodes(nodes, self.path.is_closed());
        path.set_winding_rule(self.path.winding_rule());
        self.path = path;
    }

    pub fn start_point(&self) -> Option<Point> {
        self.path.nodes().first().map(Node::anchor)
    }

    pub fn end_point(&self) -> Option<Point> {
        self.path.nodes().last().map(Node::anchor)
    }

    /// Index of the first node whose anchor is exactly `p`.
    pub fn find_node(&self, p: Point) -> Option<usize> {
        self.path.iter().position(|node| node.anchor() == p)
    }

    pub fn find_segment(&self, p: Point, tolerance: f64) -> Option<usize> {
        self.path.find_segment(p, tolerance)
    }

    /// See [`BezierPath::split_segment`].
    ///
    /// Listeners are only notified when an edge is hit.
    pub fn split_segment(&mut self, p: Point, tolerance: f64) -> Option<usize> {
        self.path.find_segment(p, tolerance)?;
        self.edit(|figure| figure.path.split_segment(p, tolerance))
    }

    /// See [`BezierPath::join_segments`].
    ///
    /// Listeners are only notified when a node is removed.
    pub fn join_segments(&mut self, p: Point, tolerance: f64) -> Option<usize> {
        self.path.find_joinable_node(p, tolerance)?;
        self.edit(|figure| figure.path.join_segments(p, tolerance))
    }

    /// Splits the segment under a click at a given zoom level.
    ///
    /// The click tolerance is five device pixels. Returns the edit to store in an undo
    /// history.
    pub fn split_segment_at_click(&mut self, p: Point, scale: f64) -> Option<SplitSegmentEdit> {
        let tolerance = if scale > 0.0 { 5.0 / scale } else { 5.0 };
        self.path.find_segment(p, tolerance)?;

        self.edit(|figure| {
            let index = figure.path.split_segment(p, tolerance)?;
            let node = *figure.path.get(index).ok()?;
            log::debug!("Split segment at click, new node {}", index);

            Some(SplitSegmentEdit::new(index, node))
        })
    }

    #[inline]
    pub fn path(&self) -> &BezierPath {
        &self.path
    }

    /// A copy of the path.
    pub fn bezier_path(&self) -> BezierPath {
        self.path.clone()
    }

    pub fn set_bezier_path(&mut self, path: &BezierPath) {
        self.edit(|figure| figure.path.set_to(path));
    }

    /// The path as it is stroked, with its ends pulled back to make room for the
    /// decorations.
    ///
    /// Closed paths and paths with less than two nodes are never capped.
    pub fn capped_path(&self) -> &BezierPath {
        self.capped_path.get_or_init(|| self.build_capped_path())
    }

    fn build_capped_path(&self) -> BezierPath {
        log::trace!("Rebuilding the capped path of a figure with {} nodes", self.path.len());
        let len = self.path.len();
        if self.path.is_closed() || len < 2 {
            return self.path.clone();
        }

        let mut nodes = self.path.nodes().to_vec();
        if let Some(decoration) = &self.start_decoration {
            let radius = decoration.decoration_radius(&self.attributes);
            let towards = if nodes[0].has_c2() {
                nodes[0].point(Coord::C2)
            } else if nodes[1].has_c1() {
                nodes[1].point(Coord::C1)
            } else {
                nodes[1].anchor()
            };
            let anchor = capped_anchor(nodes[0].anchor(), towards, radius);
            nodes[0].set_point(Coord::Anchor, anchor);
        }

        if let Some(decoration) = &self.end_decoration {
            let radius = decoration.decoration_radius(&self.attributes);
            let last = len - 1;
            let towards = if nodes[last].has_c1() {
                nodes[last].point(Coord::C1)
            } else if nodes[last - 1].has_c2() {
                nodes[last - 1].point(Coord::C2)
            } else {
                nodes[last - 1].anchor()
            };
            let anchor = capped_anchor(nodes[last].anchor(), towards, radius);
            nodes[last].set_point(Coord::Anchor, anchor);
        }

        let mut capped = BezierPath::from_nodes(nodes, false);
        capped.set_winding_rule(self.path.winding_rule());

        capped
    }

    /// The decorated end point and the point the decoration is oriented towards.
    ///
    /// Requires at least two nodes.
    fn decoration_points(&self, start: bool) -> (Point, Point) {
        let nodes = self.path.nodes();
        let len = nodes.len();
        let (end, neighbour) = if start { (0, 1) } else { (len - 1, len - 2) };

        let p1 = nodes[end].anchor();
        let mut p2 = self.capped_path().nodes()[end].anchor();
        if p2 == p1 {
            p2 = nodes[neighbour].anchor();
        }

        (p1, p2)
    }

    fn decorations(&self) -> impl Iterator<Item = (bool, &Rc<dyn LineDecoration>)> {
        self.start_decoration
            .iter()
            .map(|decoration| (true, decoration))
            .chain(self.end_decoration.iter().map(|decoration| (false, decoration)))
    }

    /// The outline of the path moved outward by `grow`.
    fn grown_outline(&self, grow: f64, scale: f64) -> Vec<Point> {
        let polygon = self.path.outline().polygon();
        if grow == 0.0 {
            return polygon.to_vec();
        }

        grow_polygon(polygon, grow, self.attributes.grow_miter_limit(grow, scale))
    }

    /// Bounding box of the path, without the stroke.
    pub fn bounds(&self) -> Box2D {
        self.path.bounds()
    }

    /// The area that drawing the figure at a given zoom level may touch.
    pub fn drawing_area(&self, scale: f64) -> Box2D {
        let mut grow = self.attributes.stroke_total_width(scale) / 2.0;
        if self.attributes.stroke_join == LineJoin::Miter {
            grow *= self.attributes.stroke_miter_limit;
        }
        grow += 1.0;

        let mut area = self.bounds().inflate(grow, grow);
        let nodes = self.path.nodes();
        let len = nodes.len();
        if len > 1 {
            if let Some(decoration) = &self.start_decoration {
                area = area.union(&decoration.drawing_area(
                    &self.attributes,
                    nodes[0].anchor(),
                    nodes[1].anchor(),
                ));
            }
            if let Some(decoration) = &self.end_decoration {
                area = area.union(&decoration.drawing_area(
                    &self.attributes,
                    nodes[len - 1].anchor(),
                    nodes[len - 2].anchor(),
                ));
            }
        }

        area
    }

    /// Returns whether a click at `p` hits the figure.
    ///
    /// Filled areas hit when the point is inside them, grown by the stroke. Open paths
    /// also hit within a tolerance of their capped outline and of the stretches
    /// covered by the decorations.
    pub fn contains(&self, p: Point) -> bool {
        let attributes = &self.attributes;
        let tolerance = f64::max(2.0, attributes.stroke_total_width(1.0) / 2.0);
        let closed = self.is_closed();

        if closed || (attributes.fill_color.is_some() && attributes.unclosed_path_filled) {
            if self.path.contains(p) {
                return true;
            }

            let grow = attributes.perpendicular_hit_growth(1.0);
            if grow > 0.0 && hit_test_polygon(p, &self.grown_outline(grow, 1.0), self.winding_rule()) {
                return true;
            }

            if closed {
                return false;
            }
        }

        if self.capped_path().outline_contains(p, tolerance) {
            return true;
        }

        if self.path.len() < 2 {
            return false;
        }

        let nodes = self.path.nodes();
        let capped = self.capped_path().nodes();
        let last = nodes.len() - 1;
        self.decorations().any(|(start, _)| {
            let end = if start { 0 } else { last };
            line_contains_point(nodes[end].anchor(), capped[end].anchor(), p, tolerance)
        })
    }

    /// Average of the node anchors.
    pub fn center(&self) -> Point {
        self.path.center()
    }

    /// Anchor of the node that is the farthest from the center.
    pub fn outermost_point(&self) -> Option<Point> {
        let index = self.path.index_of_outermost_node()?;
        self.path.point(index, Coord::Anchor).ok()
    }

    /// See [`BezierPath::point_on_path`].
    pub fn point_on_path(&self, relative: f64, flatness: f64) -> Option<Point> {
        self.path.point_on_path(relative, flatness)
    }

    /// Returns the point where a ray going from the center of the figure toward `p`
    /// leaves the figure.
    ///
    /// The outline of closed figures is grown by the stroke first. Among several
    /// crossings, the one closest to `p` is kept.
    pub fn chop(&self, p: Point) -> Point {
        if self.is_closed() && self.path.len() > 1 {
            let grow = self.attributes.perpendicular_hit_growth(1.0);
            if grow != 0.0 {
                let outline = self.grown_outline(grow, 1.0);
                let center = self.path.center();
                let ray = Ray {
                    origin: center,
                    direction: p - center,
                };
                if let Some(hit) = raycast_polygon(&ray, &outline, p) {
                    return hit.position;
                }
            }
        }

        self.path.chop(p)
    }

    pub fn transform(&mut self, transform: &Transform) {
        self.edit(|figure| figure.path.transform(transform));
    }

    /// Everything `restore_transform_to` needs to undo a transform.
    pub fn transform_restore_data(&self) -> BezierPath {
        self.path.clone()
    }

    pub fn restore_transform_to(&mut self, data: &BezierPath) {
        self.edit(|figure| figure.path.set_to(data));
    }

    /// Draws the figure at a given zoom level.
    pub fn draw(&self, target: &mut dyn Rasterizer, scale: f64) {
        if self.path.len() < 2 {
            return;
        }

        self.draw_fill(target, scale);
        self.draw_stroke(target, scale);
    }

    fn draw_fill(&self, target: &mut dyn Rasterizer, scale: f64) {
        let color = match self.attributes.fill_color {
            Some(color) => color,
            None => return,
        };
        if !self.is_closed() && !self.attributes.unclosed_path_filled {
            return;
        }

        let grow = self.attributes.perpendicular_fill_growth(scale);
        let shape = Shape::new(self.grown_outline(grow, scale), true, self.winding_rule());
        target.fill(&shape, color);
    }

    fn draw_stroke(&self, target: &mut dyn Rasterizer, scale: f64) {
        let color = match self.attributes.stroke_color {
            Some(color) => color,
            None => return,
        };
        let width = self.attributes.stroke_total_width(scale);
        if width <= 0.0 {
            return;
        }

        let style = StrokeStyle {
            color,
            width,
            line_join: self.attributes.stroke_join,
            miter_limit: self.attributes.stroke_miter_limit,
        };

        let shape = if self.is_closed() {
            let grow = self.attributes.perpendicular_draw_growth(scale);
            Shape::new(self.grown_outline(grow, scale), true, self.winding_rule())
        } else {
            Shape::new(
                self.capped_path().flatten(BezierPath::DEFAULT_TOLERANCE),
                false,
                self.winding_rule(),
            )
        };
        target.stroke(&shape, &style);

        for (start, decoration) in self.decorations() {
            let (p1, p2) = self.decoration_points(start);
            decoration.draw(target, &self.attributes, p1, p2);
        }
    }

    /// The nodes of the figure, as persisted.
    pub fn write_points(&self) -> PathRecord {
        PathRecord::from(&self.path)
    }

    /// Replaces the nodes of the figure with persisted ones.
    pub fn read_points(&mut self, record: &PathRecord) {
        self.edit(|figure| {
            let mut path = record.to_path();
            path.set_winding_rule(figure.path.winding_rule());
            figure.path = path;
            if record.closed {
                figure.connectable = true;
            }
        });
    }
}

fn capped_anchor(anchor: Point, towards: Point, radius: f64) -> Point {
    let length = (anchor - towards).length();

    cap(anchor, towards, -radius.max(0.0).min(length))
}

/// Copies the path, the attributes and the decorations. Listeners are not copied.
impl Clone for BezierFigure {
    fn clone(&self) -> Self {
        BezierFigure {
            path: self.path.clone(),
            attributes: self.attributes,
            start_decoration: self.start_decoration.clone(),
            end_decoration: self.end_decoration.clone(),
            capped_path: OnceCell::new(),
            connectable: self.connectable,
            listeners: Vec::new(),
            change_depth: 0,
        }
    }
}

impl fmt::Debug for BezierFigure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BezierFigure")
            .field("path", &self.path)
            .field("attributes", &self.attributes)
            .field("start_decoration", &self.start_decoration)
            .field("end_decoration", &self.end_decoration)
            .field("connectable", &self.connectable)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
use crate::decoration::ArrowTip;
#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn polyline(points: &[(f64, f64)], closed: bool) -> BezierFigure {
    let mut figure = BezierFigure::new(closed);
    for &(x, y) in points {
        figure.add_node(Node::new(point(x, y)));
    }

    figure
}

#[cfg(test)]
fn square() -> BezierFigure {
    polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], true)
}

#[cfg(test)]
fn decoration(radius: f64) -> Option<Rc<dyn LineDecoration>> {
    Some(Rc::new(ArrowTip::new(0.35, radius, radius)))
}

#[test]
fn set_point_moves_the_whole_node() {
    let mut figure = BezierFigure::new(false);
    figure.add_node(Node::curve(point(0.0, 0.0), point(-1.0, 0.0), point(1.0, 1.0)));
    figure.add_node(Node::new(point(10.0, 0.0)));

    figure.set_point(0, point(5.0, 5.0)).unwrap();
    let node = figure.node(0).unwrap();
    assert_eq!(node.anchor(), point(5.0, 5.0));
    assert_eq!(node.point(Coord::C1), point(4.0, 5.0));
    assert_eq!(node.point(Coord::C2), point(6.0, 6.0));

    figure.set_control_point(0, Coord::C2, point(0.0, 0.0)).unwrap();
    let node = figure.node(0).unwrap();
    assert_eq!(node.anchor(), point(5.0, 5.0));
    assert_eq!(node.point(Coord::C1), point(4.0, 5.0));
    assert_eq!(node.point(Coord::C2), point(0.0, 0.0));

    assert_eq!(
        figure.set_point(2, point(0.0, 0.0)),
        Err(PathError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(figure.node_count(), 2);
}

#[test]
fn drag_keeps_control_points_colinear() {
    let mut figure = BezierFigure::new(false);
    figure.add_node(Node::curve(point(0.0, 0.0), point(-2.0, 0.0), point(3.0, 0.0)));

    figure.drag_control_point(0, Coord::C1, point(0.0, -5.0)).unwrap();
    let c2 = figure.point(0, Coord::C2).unwrap();
    assert!(c2.x.abs() < 1e-12);
    assert!((c2.y - 3.0).abs() < 1e-12);
}

#[test]
fn start_and_end_points() {
    let mut figure = BezierFigure::new(false);
    assert_eq!(figure.start_point(), None);

    figure.set_start_point(point(1.0, 1.0));
    assert_eq!(figure.node_count(), 2);
    assert_eq!(figure.start_point(), Some(point(1.0, 1.0)));
    assert_eq!(figure.end_point(), Some(point(1.0, 1.0)));

    figure.set_end_point(point(8.0, 3.0));
    assert_eq!(figure.node_count(), 2);
    assert_eq!(figure.end_point(), Some(point(8.0, 3.0)));

    let mut figure = BezierFigure::new(false);
    figure.add_node(Node::new(point(5.0, 5.0)));
    figure.set_start_point(point(0.0, 0.0));
    assert_eq!(figure.node_count(), 2);
    assert_eq!(figure.start_point(), Some(point(0.0, 0.0)));
    assert_eq!(figure.end_point(), Some(point(5.0, 5.0)));

    let mut figure = BezierFigure::new(false);
    figure.set_bounds(point(0.0, 0.0), point(4.0, 2.0));
    assert_eq!(figure.start_point(), Some(point(0.0, 0.0)));
    assert_eq!(figure.end_point(), Some(point(4.0, 2.0)));
    assert_eq!(figure.find_node(point(4.0, 2.0)), Some(1));
    assert_eq!(figure.find_node(point(4.0, 2.5)), None);
}

#[test]
fn capped_path_pulls_the_ends_back() {
    let mut figure = polyline(&[(0.0, 0.0), (10.0, 0.0)], false);
    assert_eq!(figure.capped_path(), figure.path());

    figure.set(Attribute::StartDecoration(decoration(3.0)));
    let capped = figure.capped_path().nodes()[0].anchor();
    assert!((capped.x - 3.0).abs() < 1e-12);
    assert!(capped.y.abs() < 1e-12);
    // The path itself is untouched.
    assert_eq!(figure.start_point(), Some(point(0.0, 0.0)));

    // The cap never goes past the other end of the segment.
    figure.set(Attribute::StartDecoration(decoration(15.0)));
    assert_eq!(figure.capped_path().nodes()[0].anchor(), point(10.0, 0.0));

    figure.set(Attribute::StartDecoration(None));
    figure.set(Attribute::EndDecoration(decoration(4.0)));
    let capped = figure.capped_path().nodes()[1].anchor();
    assert!((capped.x - 6.0).abs() < 1e-12);
    assert_eq!(figure.capped_path().nodes()[0].anchor(), point(0.0, 0.0));

    // Closed figures are not capped.
    figure.set_closed(true);
    assert_eq!(figure.capped_path().nodes(), figure.path().nodes());
}

#[test]
fn capped_path_follows_the_control_points() {
    let mut figure = BezierFigure::new(false);
    figure.add_node(Node::with_mask(
        crate::path::NodeMask::C2,
        point(0.0, 0.0),
        point(0.0, 0.0),
        point(0.0, 10.0),
    ));
    figure.add_node(Node::new(point(10.0, 10.0)));
    figure.set(Attribute::StartDecoration(decoration(2.0)));

    let capped = figure.capped_path().nodes()[0];
    assert!(capped.anchor().x.abs() < 1e-12);
    assert!((capped.anchor().y - 2.0).abs() < 1e-12);
    // Only the anchor moves.
    assert_eq!(capped.point(Coord::C2), point(0.0, 10.0));
}

#[test]
fn closed_figure_contains() {
    let figure = square();
    assert!(figure.contains(point(5.0, 5.0)));
    // Within the stroke.
    assert!(figure.contains(point(10.4, 5.0)));
    assert!(!figure.contains(point(11.0, 5.0)));
    assert!(!figure.contains(point(20.0, 20.0)));

    let mut thick = square();
    thick.set(Attribute::StrokeWidth(4.0));
    assert!(thick.contains(point(11.5, 5.0)));
    assert!(!thick.contains(point(12.5, 5.0)));
}

#[test]
fn open_figure_contains() {
    let mut figure = polyline(&[(0.0, 0.0), (20.0, 0.0)], false);
    assert!(figure.contains(point(10.0, 1.5)));
    assert!(!figure.contains(point(10.0, 3.0)));

    // The part covered by the decoration still hits.
    figure.set(Attribute::StartDecoration(decoration(10.0)));
    assert!(figure.contains(point(4.0, 0.0)));
    assert!(figure.contains(point(15.0, 0.0)));
    assert!(!figure.contains(point(4.0, 5.0)));

    // Open figures are not filled unless asked to.
    let mut triangle = polyline(&[(0.0, 0.0), (20.0, 0.0), (10.0, 20.0)], false);
    assert!(!triangle.contains(point(10.0, 5.0)));
    triangle.set(Attribute::FillColor(Some(crate::attributes::Color::WHITE)));
    triangle.set(Attribute::UnclosedPathFilled(true));
    assert!(triangle.contains(point(10.0, 5.0)));
}

#[test]
fn drawing_area_covers_stroke_and_decorations() {
    let mut figure = polyline(&[(0.0, 0.0), (10.0, 0.0)], false);
    figure.set(Attribute::StrokeJoin(LineJoin::Bevel));
    let area = figure.drawing_area(1.0);
    assert_eq!(area.min, point(-1.5, -1.5));
    assert_eq!(area.max, point(11.5, 1.5));

    figure.set(Attribute::StrokeJoin(LineJoin::Miter));
    let area = figure.drawing_area(1.0);
    assert_eq!(area.min, point(-2.5, -2.5));

    figure.set(Attribute::EndDecoration(Some(Rc::new(ArrowTip::new(1.2, 12.0, 0.0)))));
    let area = figure.drawing_area(1.0);
    assert!(area.max.y > 10.0);
    assert!(area.min.y < -10.0);
}

#[test]
fn draw_closed_figure() {
    use crate::attributes::Color;
    use crate::rasterizer::{DrawCommand, RecordingRasterizer};

    let mut figure = square();
    figure.set(Attribute::FillColor(Some(Color::WHITE)));

    let mut target = RecordingRasterizer::new();
    figure.draw(&mut target, 1.0);
    assert_eq!(target.commands.len(), 2);
    match &target.commands[0] {
        DrawCommand::Fill(shape, color) => {
            assert_eq!(*color, Color::WHITE);
            assert!(shape.closed);
            assert_eq!(shape.bounding_box(), figure.bounds());
        }
        other => panic!("unexpected {:?}", other),
    }
    match &target.commands[1] {
        DrawCommand::Stroke(shape, style) => {
            assert_eq!(style.width, 1.0);
            assert!(shape.closed);
        }
        other => panic!("unexpected {:?}", other),
    }

    // Outside strokes are drawn on a grown outline.
    figure.set(Attribute::StrokePlacement(crate::attributes::StrokePlacement::Outside));
    figure.set(Attribute::FillColor(None));
    let mut target = RecordingRasterizer::new();
    figure.draw(&mut target, 1.0);
    assert_eq!(target.commands.len(), 1);
    let bounds = target.strokes().next().unwrap().bounding_box();
    assert!((bounds.min.x + 0.5).abs() < 1e-9);
    assert!((bounds.max.x - 10.5).abs() < 1e-9);
}

#[test]
fn draw_open_figure_with_decoration() {
    use crate::rasterizer::{DrawCommand, RecordingRasterizer};

    let mut figure = polyline(&[(0.0, 0.0), (20.0, 0.0)], false);
    figure.set(Attribute::EndDecoration(decoration(5.0)));

    let mut target = RecordingRasterizer::new();
    figure.draw(&mut target, 1.0);
    assert_eq!(target.commands.len(), 2);
    match &target.commands[0] {
        DrawCommand::Stroke(shape, _) => {
            assert!(!shape.closed);
            assert_eq!(shape.points[0], point(0.0, 0.0));
            let end = shape.points[shape.points.len() - 1];
            assert!((end.x - 15.0).abs() < 1e-9);
        }
        other => panic!("unexpected {:?}", other),
    }
    match &target.commands[1] {
        DrawCommand::Fill(shape, _) => {
            // The arrow points at the end of the path.
            assert!(shape.points.contains(&point(20.0, 0.0)));
        }
        other => panic!("unexpected {:?}", other),
    }

    // Nothing to draw with less than two nodes.
    let single = polyline(&[(0.0, 0.0)], false);
    let mut target = RecordingRasterizer::new();
    single.draw(&mut target, 1.0);
    assert!(target.commands.is_empty());
}

#[test]
fn listeners_see_one_change_per_outer_edit() {
    use std::cell::Cell;

    #[derive(Default)]
    struct Counter {
        will_change: Cell<u32>,
        changed: Cell<u32>,
        nodes_when_changed: Cell<usize>,
    }

    impl FigureListener for Counter {
        fn figure_will_change(&self, _figure: &BezierFigure) {
            self.will_change.set(self.will_change.get() + 1);
        }

        fn figure_changed(&self, figure: &BezierFigure) {
            self.changed.set(self.changed.get() + 1);
            self.nodes_when_changed.set(figure.node_count());
        }
    }

    let counter = Rc::new(Counter::default());
    let mut figure = BezierFigure::new(false);
    figure.add_listener(counter.clone());

    figure.add_node(Node::new(point(0.0, 0.0)));
    assert_eq!(counter.will_change.get(), 1);
    assert_eq!(counter.changed.get(), 1);
    assert_eq!(counter.nodes_when_changed.get(), 1);

    // Nested edits.
    figure.set_bounds(point(0.0, 0.0), point(5.0, 5.0));
    assert_eq!(counter.will_change.get(), 2);
    assert_eq!(counter.changed.get(), 2);

    figure.will_change();
    figure.add_node(Node::new(point(9.0, 0.0)));
    figure.add_node(Node::new(point(9.0, 9.0)));
    assert_eq!(counter.changed.get(), 2);
    figure.changed();
    assert_eq!(counter.will_change.get(), 3);
    assert_eq!(counter.changed.get(), 3);
    assert_eq!(counter.nodes_when_changed.get(), 4);

    // Failed edits are not notified.
    assert!(figure.remove_node(10).is_err());
    assert_eq!(counter.will_change.get(), 3);

    // Neither are splits and joins that miss.
    let far = point(1000.0, 1000.0);
    assert_eq!(figure.split_segment(far, 0.1), None);
    assert_eq!(figure.join_segments(far, 0.1), None);
    assert!(figure.split_segment_at_click(far, 1.0).is_none());
    assert_eq!(counter.will_change.get(), 3);
    assert_eq!(counter.changed.get(), 3);

    assert_eq!(figure.join_segments(point(9.0, 0.0), 0.1), Some(2));
    assert_eq!(counter.will_change.get(), 4);
    assert_eq!(counter.changed.get(), 4);
    assert_eq!(counter.nodes_when_changed.get(), 3);

    figure.remove_listeners();
    figure.remove_all_nodes();
    assert_eq!(counter.changed.get(), 4);
}

#[test]
fn derived_geometry_follows_edits() {
    let mut figure = polyline(&[(0.0, 0.0), (10.0, 0.0)], false);
    assert_eq!(figure.bounds().max, point(10.0, 0.0));

    figure.add_node(Node::new(point(10.0, 10.0)));
    assert_eq!(figure.bounds().max, point(10.0, 10.0));

    figure.transform(&Transform::translation(5.0, 0.0));
    assert_eq!(figure.bounds().min, point(5.0, 0.0));
}

#[test]
fn split_segment_edit_undo_redo() {
    let mut figure = square();

    assert!(figure.split_segment_at_click(point(5.0, 30.0), 1.0).is_none());
    assert_eq!(figure.node_count(), 4);

    // Five pixels at a zoom of 2 are 2.5 units.
    assert!(figure.split_segment_at_click(point(5.0, 3.0), 2.0).is_none());
    let edit = figure.split_segment_at_click(point(5.0, 2.0), 2.0).unwrap();
    assert_eq!(edit.index(), 1);
    assert_eq!(edit.node().anchor(), point(5.0, 0.0));
    assert_eq!(edit.presentation_name(), "Split Segment");
    assert_eq!(figure.node_count(), 5);

    let removed = edit.undo(&mut figure).unwrap();
    assert_eq!(removed.anchor(), point(5.0, 0.0));
    assert_eq!(figure.node_count(), 4);

    edit.redo(&mut figure).unwrap();
    assert_eq!(figure.node(1).unwrap().anchor(), point(5.0, 0.0));

    assert_eq!(figure.join_segments(point(5.0, 0.5), 1.0), Some(1));
    assert_eq!(figure.node_count(), 4);
    assert_eq!(figure.find_segment(point(10.0, 5.0), 1.0), Some(1));
}

#[test]
fn chop_on_grown_outline() {
    let figure = square();
    let chopped = figure.chop(point(30.0, 5.0));
    assert!((chopped.x - 10.5).abs() < 1e-9);
    assert!((chopped.y - 5.0).abs() < 1e-9);

    let open = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], false);
    assert_eq!(open.chop(point(30.0, 30.0)), open.path().chop(point(30.0, 30.0)));

    // The ray from the center crosses the grown notch before the outer edge.
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
    let chopped = u.chop(point(15.0, -10.0));
    assert!((chopped.x - 15.0).abs() < 1e-9);
    assert!((chopped.y + 0.5).abs() < 1e-9);
}

#[test]
fn outermost_point_and_center() {
    let figure = polyline(&[(0.0, 0.0), (2.0, 0.0), (1.0, 9.0)], false);
    assert_eq!(figure.center(), point(1.0, 3.0));
    assert_eq!(figure.outermost_point(), Some(point(1.0, 9.0)));
    assert_eq!(BezierFigure::new(false).outermost_point(), None);
    assert_eq!(figure.point_on_path(0.0, 0.1), Some(point(0.0, 0.0)));
}

#[test]
fn transform_and_restore() {
    let mut figure = square();
    let data = figure.transform_restore_data();

    figure.transform(&Transform::scale(2.0, 2.0));
    assert_eq!(figure.bounds().max, point(20.0, 20.0));

    figure.restore_transform_to(&data);
    assert_eq!(figure.bounds().max, point(10.0, 10.0));
    assert_eq!(figure.bezier_path(), data);
}

#[test]
fn closing_makes_connectable() {
    let mut figure = polyline(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)], false);
    assert!(!figure.is_connectable());

    figure.set_closed(true);
    assert!(figure.is_closed());
    assert!(figure.is_connectable());

    figure.set(Attribute::WindingRule(WindingRule::NonZero));
    assert_eq!(figure.winding_rule(), WindingRule::NonZero);
}

#[test]
fn write_and_read_points() {
    let figure = square();
    let record = figure.write_points();
    assert!(record.closed);
    assert_eq!(record.nodes.len(), 4);

    let mut other = BezierFigure::new(false);
    other.add_node(Node::new(point(100.0, 100.0)));
    other.read_points(&record);
    assert!(other.is_closed());
    assert!(other.is_connectable());
    assert_eq!(other.nodes(), figure.nodes());
    assert_eq!(other.bounds(), figure.bounds());
}

#[test]
fn clones_are_independent() {
    let mut figure = polyline(&[(0.0, 0.0), (10.0, 0.0)], false);
    figure.set(Attribute::StartDecoration(decoration(3.0)));

    let mut copy = figure.clone();
    copy.set_point(1, point(20.0, 0.0)).unwrap();

    assert_eq!(figure.end_point(), Some(point(10.0, 0.0)));
    assert_eq!(copy.end_point(), Some(point(20.0, 0.0)));
    assert!(copy.start_decoration().is_some());
    assert_eq!(copy.bounds().max, point(20.0, 0.0));
    assert_eq!(figure.bounds().max, point(10.0, 0.0));
}
