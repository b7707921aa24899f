use pathviz_core::{Grid, NodeId, Point, Tree};

use crate::distance;

/// Minimal grid search interface: neighbor enumeration.
pub trait Pather {
    /// Append the passable neighbors of `p` into `buf`, in search order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) steps.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// Full A* pather with a heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}

/// Cardinal moves in up, down, left, right order; walls and off-grid cells
/// are skipped.
impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.cardinal().into_iter().filter(|&n| self.is_passable(n)));
    }
}

/// Every step costs 1.
impl WeightedPather for Grid {
    fn cost(&self, _from: Point, _to: Point) -> i32 {
        1
    }
}

/// Manhattan distance, exact on an open 4-connected grid.
impl AstarPather for Grid {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        distance::manhattan(from, to)
    }
}

/// Remaining-cost estimate for cost-ordered tree searches.
pub trait TreeEstimate {
    /// Estimate of the cost from `node` to `goal`.
    fn estimate(&self, tree: &Tree, node: NodeId, goal: NodeId) -> f64;
}

/// No estimate: the search orders purely by accumulated cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEstimate;

impl TreeEstimate for NoEstimate {
    fn estimate(&self, _tree: &Tree, _node: NodeId, _goal: NodeId) -> f64 {
        0.0
    }
}

/// Straight-line distance between layout positions, scaled down by
/// [`distance::LAYOUT_SCALE`].
///
/// Positional, not graph-theoretic: not guaranteed admissible.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEstimate;

impl TreeEstimate for LayoutEstimate {
    fn estimate(&self, tree: &Tree, node: NodeId, goal: NodeId) -> f64 {
        distance::layout_distance(tree, node, goal)
    }
}
