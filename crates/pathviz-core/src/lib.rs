//! **pathviz-core**: data model for search visualisation.
//!
//! This crate provides the structures that searches run over: geometry
//! primitives, a copy-on-write [`Grid`] of [`GridCell`]s with walls, and an
//! arena-backed [`Tree`] of [`TreeNode`]s with optional edge weights. Both
//! carry mutable search-state flags that a run writes and
//! `reset_search` clears.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod tree;

pub use cell::{GridCell, UNREACHABLE};
pub use error::ModelError;
pub use geom::{Point, Pos, Range};
pub use grid::Grid;
pub use tree::{NodeId, Tree, TreeEdge, TreeNode};
