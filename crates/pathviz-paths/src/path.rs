//! Path reconstruction from back-links.

use pathviz_core::{Grid, NodeId, Point, Tree};

/// Follow parent links from `goal` up to `start` (or the root if `start` is
/// not an ancestor), mark every node on the way as path, and return the
/// nodes start-first.
pub fn reconstruct_tree_path(tree: &mut Tree, start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut cur = Some(goal);
    while let Some(id) = cur {
        tree[id].is_path = true;
        path.push(id);
        if id == start {
            break;
        }
        cur = tree.parent(id);
    }
    path.reverse();
    path
}

/// Mark every node of an already-known path.
pub fn mark_tree_path(tree: &mut Tree, path: &[NodeId]) {
    for &id in path {
        tree[id].is_path = true;
    }
}

/// Walk `previous` links backward from `end` and return the chain
/// start-first.
///
/// If `end` was never reached the chain is just `[end]`; check the search
/// result's `found` flag rather than the chain length. The walk is bounded
/// by the grid size so stale links cannot loop forever.
pub fn grid_path_chain(grid: &Grid, end: Point) -> Vec<Point> {
    let mut chain = Vec::new();
    let mut cur = Some(end);
    while let Some(p) = cur {
        if chain.len() > grid.bounds().len() {
            break;
        }
        let Some(cell) = grid.at(p) else {
            break;
        };
        chain.push(p);
        cur = cell.previous;
    }
    chain.reverse();
    chain
}

/// Rebuild the start→end path of a finished grid search and mark its cells.
pub fn reconstruct_grid_path(grid: &mut Grid, end: Point) -> Vec<Point> {
    let chain = grid_path_chain(grid, end);
    for &p in &chain {
        if let Some(cell) = grid.at_mut(p) {
            cell.is_path = true;
        }
    }
    chain
}
