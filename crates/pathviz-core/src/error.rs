//! Errors raised by structural edits on grids and trees.
//!
//! Searches never fail; only caller-driven edits (toggling walls, choosing a
//! goal, adding nodes) can be rejected.

use std::fmt;

use crate::geom::Point;

/// Errors that can occur when editing a grid or tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The point is outside the grid.
    OutOfBounds(Point),
    /// The start or end cell cannot become a wall.
    ProtectedCell(Point),
    /// Start and end must be distinct cells inside the grid.
    InvalidEndpoints { start: Point, end: Point },
    /// No node with this id exists in the tree.
    UnknownNode(String),
    /// The start node cannot be chosen as goal or blocked.
    StartNode(String),
    /// A node with this id already exists in the tree.
    DuplicateId(String),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(p) => write!(f, "cell {p} is outside the grid"),
            Self::ProtectedCell(p) => {
                write!(f, "cell {p} is the start or end and cannot be a wall")
            }
            Self::InvalidEndpoints { start, end } => {
                write!(f, "invalid grid endpoints: start {start}, end {end}")
            }
            Self::UnknownNode(id) => write!(f, "no tree node with id \u{201c}{id}\u{201d}"),
            Self::StartNode(id) => {
                write!(f, "node \u{201c}{id}\u{201d} is the start and cannot be changed")
            }
            Self::DuplicateId(id) => write!(f, "duplicate tree node id \u{201c}{id}\u{201d}"),
        }
    }
}

impl std::error::Error for ModelError {}
