use crate::figure::BezierFigure;

/// Receives change notifications from figures.
///
/// `figure_will_change` is called before a mutation and `figure_changed` after it.
/// Nested mutations are notified once, around the outermost one.
pub trait FigureListener {
    fn figure_will_change(&self, _figure: &BezierFigure) {}

    fn figure_changed(&self, _figure: &BezierFigure) {}
}
