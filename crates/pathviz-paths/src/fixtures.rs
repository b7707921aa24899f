//! Small hand-built structures shared by the unit tests.

use pathviz_core::{Grid, NodeId, Point, Pos, Tree};

/// A → {B, C}, B → D (goal).
pub(crate) fn scenario_a() -> (Tree, [NodeId; 4]) {
    let mut t = Tree::new("A", "A", Pos::new(400.0, 50.0));
    let a = t.root();
    let b = t.add_child(a, "B", "B", Pos::new(200.0, 150.0)).unwrap();
    let c = t.add_child(a, "C", "C", Pos::new(600.0, 150.0)).unwrap();
    let d = t.add_child(b, "D", "D", Pos::new(150.0, 250.0)).unwrap();
    t.set_goal(d).unwrap();
    (t, [a, b, c, d])
}

/// Seven nodes over three levels with numeric labels and edge weights:
///
/// ```text
///            1
///        /       \
///     2 (w5)     3 (w1)
///     |         /      \
///   4 (w1)   5 (w1)   6 (w7)
///               |
///             7 (w1)
/// ```
pub(crate) fn weighted() -> (Tree, [NodeId; 7]) {
    let mut t = Tree::new("n1", "1", Pos::new(400.0, 50.0));
    let n1 = t.root();
    let n2 = t.add_child(n1, "n2", "2", Pos::new(250.0, 150.0)).unwrap();
    let n3 = t.add_child(n1, "n3", "3", Pos::new(550.0, 150.0)).unwrap();
    let n4 = t.add_child(n2, "n4", "4", Pos::new(250.0, 250.0)).unwrap();
    let n5 = t.add_child(n3, "n5", "5", Pos::new(480.0, 250.0)).unwrap();
    let n6 = t.add_child(n3, "n6", "6", Pos::new(620.0, 250.0)).unwrap();
    let n7 = t.add_child(n5, "n7", "7", Pos::new(480.0, 350.0)).unwrap();
    for (id, w) in [(n2, 5), (n3, 1), (n4, 1), (n5, 1), (n6, 7), (n7, 1)] {
        t[id].weight = Some(w);
    }
    (t, [n1, n2, n3, n4, n5, n6, n7])
}

/// Open 3×3 grid from the top-left to the bottom-right corner.
pub(crate) fn grid3() -> Grid {
    Grid::new(3, 3, Point::at(0, 0), Point::at(2, 2)).unwrap()
}

/// Every consecutive pair of `path` is a parent→child edge.
pub(crate) fn is_tree_path(tree: &Tree, path: &[NodeId]) -> bool {
    path.windows(2).all(|w| tree.is_edge(w[0], w[1]))
}

/// Every consecutive pair of `path` is a pair of adjacent open cells.
pub(crate) fn is_grid_path(grid: &Grid, path: &[Point]) -> bool {
    path.windows(2).all(|w| w[0].is_adjacent(w[1]))
        && path.iter().all(|&p| grid.is_passable(p))
}
