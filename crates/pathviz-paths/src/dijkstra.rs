use pathviz_core::{Grid, NodeId, Point, Tree};

use crate::path::{mark_tree_path, reconstruct_grid_path};
use crate::queue::{PriorityQueue, Score};
use crate::result::SearchResult;
use crate::traits::{NoEstimate, Pather, TreeEstimate, WeightedPather};

/// Uniform-cost (Dijkstra) search on a grid.
///
/// Cells are settled in order of accumulated step cost; each settled cell
/// keeps its cost in `distance`. Equal costs settle in the order they were
/// queued.
pub fn uniform_cost(grid: &mut Grid, start: Point, end: Point) -> SearchResult<Point> {
    grid_cost_search(grid, start, end, |_, _| 0)
}

/// Uniform-cost search on a tree.
///
/// Each queue entry carries its node, its accumulated cost and the full path
/// that led to it, so the goal's path is known the moment it is popped. Edge
/// cost is the child's weight when `weighted` is set, otherwise 1.
pub fn uniform_cost_search(
    tree: &mut Tree,
    start: NodeId,
    goal: NodeId,
    weighted: bool,
) -> SearchResult<NodeId> {
    tree_cost_search(tree, start, goal, weighted, &NoEstimate)
}

/// Best-first search over grid cells ordered by `cost + estimate`.
pub(crate) fn grid_cost_search(
    grid: &mut Grid,
    start: Point,
    end: Point,
    estimate: impl Fn(&Grid, Point) -> i32,
) -> SearchResult<Point> {
    let mut visited = Vec::new();
    let Some(cell) = grid.at_mut(start) else {
        return SearchResult::not_found(visited);
    };
    cell.distance = 0;

    let mut open = PriorityQueue::new();
    open.enqueue(start, estimate(grid, start));
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = open.dequeue() {
        let Some(c) = grid.at_mut(cur) else {
            continue;
        };
        // Skip stale entries.
        if c.is_visited {
            continue;
        }
        c.is_visited = true;
        let current_g = c.distance;
        visited.push(cur);

        if cur == end {
            let path = reconstruct_grid_path(grid, end);
            return SearchResult::found(visited, path);
        }

        nbuf.clear();
        grid.neighbors(cur, &mut nbuf);

        for &np in nbuf.iter() {
            let tentative_g = current_g + grid.cost(cur, np);
            let h = estimate(grid, np);
            let Some(n) = grid.at_mut(np) else {
                continue;
            };
            if n.is_visited || tentative_g >= n.distance {
                continue;
            }
            n.distance = tentative_g;
            n.previous = Some(cur);
            open.enqueue(np, tentative_g + h);
        }
    }

    SearchResult::not_found(visited)
}

/// A queued tree node with the cost and path that reached it.
struct Frontier {
    node: NodeId,
    cost: u32,
    path: Vec<NodeId>,
}

/// Cost-ordered tree search with priority `cost + estimate`.
pub(crate) fn tree_cost_search<E: TreeEstimate>(
    tree: &mut Tree,
    start: NodeId,
    goal: NodeId,
    weighted: bool,
    estimator: &E,
) -> SearchResult<NodeId> {
    let mut visited = Vec::new();
    if tree.get(start).is_none() {
        return SearchResult::not_found(visited);
    }
    let mut closed = vec![false; tree.len()];
    let mut order = 0;

    let mut open = PriorityQueue::new();
    open.enqueue(
        Frontier {
            node: start,
            cost: 0,
            path: vec![start],
        },
        Score(estimator.estimate(tree, start, goal)),
    );

    while let Some(Frontier { node: cur, cost, path }) = open.dequeue() {
        if closed[cur.index()] {
            continue;
        }
        closed[cur.index()] = true;
        let node = &mut tree[cur];
        node.is_visited = true;
        node.visit_order = Some(order);
        order += 1;
        visited.push(cur);

        if cur == goal {
            mark_tree_path(tree, &path);
            return SearchResult::found(visited, path);
        }

        for &child in tree.children(cur) {
            if closed[child.index()] || tree[child].is_blocked {
                continue;
            }
            let child_cost = cost + tree.edge_cost(child, weighted);
            let mut child_path = path.clone();
            child_path.push(child);
            let f = child_cost as f64 + estimator.estimate(tree, child, goal);
            open.enqueue(
                Frontier {
                    node: child,
                    cost: child_cost,
                    path: child_path,
                },
                Score(f),
            );
        }
    }

    SearchResult::not_found(visited)
}
