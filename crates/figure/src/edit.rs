//! Reversible edits produced by interactive operations.

use crate::figure::BezierFigure;
use crate::path::{Node, PathError};

/// The insertion of a node by splitting a segment.
///
/// Produced by [`BezierFigure::split_segment_at_click`]; the host keeps it in its own
/// undo history.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SplitSegmentEdit {
    index: usize,
    node: Node,
}

impl SplitSegmentEdit {
    pub(crate) fn new(index: usize, node: Node) -> Self {
        SplitSegmentEdit { index, node }
    }

    /// Index of the inserted node.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The inserted node.
    #[inline]
    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn presentation_name(&self) -> &'static str {
        "Split Segment"
    }

    /// Removes the inserted node.
    pub fn undo(&self, figure: &mut BezierFigure) -> Result<Node, PathError> {
        figure.remove_node(self.index)
    }

    /// Inserts the node again.
    pub fn redo(&self, figure: &mut BezierFigure) -> Result<(), PathError> {
        figure.insert_node(self.index, self.node)
    }
}
