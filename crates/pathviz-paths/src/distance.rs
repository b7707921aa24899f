use pathviz_core::{NodeId, Point, Tree};

/// Divisor applied to layout distances so they stay comparable to edge
/// costs.
pub const LAYOUT_SCALE: f64 = 100.0;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Euclidean distance between the layout positions of two tree nodes,
/// divided by [`LAYOUT_SCALE`]. Zero when either node is not in `tree`.
#[inline]
pub fn layout_distance(tree: &Tree, a: NodeId, b: NodeId) -> f64 {
    match (tree.get(a), tree.get(b)) {
        (Some(x), Some(y)) => x.pos.distance(y.pos) / LAYOUT_SCALE,
        _ => 0.0,
    }
}

/// Absolute difference between the numeric labels of two tree nodes.
///
/// `None` when either node is missing or its label does not start with an
/// integer.
#[inline]
pub fn label_distance(tree: &Tree, a: NodeId, b: NodeId) -> Option<u64> {
    let x = tree.get(a)?.numeric_label()?;
    let y = tree.get(b)?.numeric_label()?;
    Some(x.abs_diff(y))
}
