use thiserror::Error;

/// An error that can happen when editing or configuring a path.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PathError {
    #[error("Node index {index} is out of range (the path has {len} nodes)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid control point index {0}, expected 0, 1 or 2")]
    InvalidCoordIndex(usize),
    #[error("Unknown winding rule {0:?}")]
    UnknownWindingRule(String),
    #[error("Invalid winding rule code {0}")]
    InvalidWindingRuleCode(i32),
}

#[test]
fn error_messages() {
    let err = PathError::IndexOutOfRange { index: 4, len: 2 };
    assert_eq!(
        err.to_string(),
        "Node index 4 is out of range (the path has 2 nodes)"
    );
    assert_eq!(
        PathError::InvalidCoordIndex(3).to_string(),
        "Invalid control point index 3, expected 0, 1 or 2"
    );
}
