use pathviz_core::{Grid, NodeId, Point, Tree};

use crate::path::{reconstruct_grid_path, reconstruct_tree_path};
use crate::result::SearchResult;
use crate::traits::Pather;

/// Depth-first search on a grid.
///
/// LIFO frontier. Unvisited neighbors are pushed in reverse so that the
/// first neighbor in up/down/left/right order is explored first. A cell may
/// be pushed several times; the visited check happens at pop time and the
/// first pop wins. The pusher is recorded as back-link on every push, which
/// keeps the chain pointing at already-settled cells. No shortest-path
/// guarantee.
pub fn dfs(grid: &mut Grid, start: Point, end: Point) -> SearchResult<Point> {
    let mut visited = Vec::new();
    let Some(cell) = grid.at_mut(start) else {
        return SearchResult::not_found(visited);
    };
    cell.distance = 0;

    let mut stack = vec![start];
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = stack.pop() {
        let Some(c) = grid.at_mut(cur) else {
            continue;
        };
        if c.is_visited {
            continue;
        }
        c.is_visited = true;
        let dist = c.distance;
        visited.push(cur);

        if cur == end {
            let path = reconstruct_grid_path(grid, end);
            return SearchResult::found(visited, path);
        }

        nbuf.clear();
        grid.neighbors(cur, &mut nbuf);
        for &np in nbuf.iter().rev() {
            let Some(n) = grid.at_mut(np) else {
                continue;
            };
            if n.is_visited {
                continue;
            }
            n.previous = Some(cur);
            n.distance = dist + 1;
            stack.push(np);
        }
    }

    SearchResult::not_found(visited)
}

/// Depth-first search on a tree.
///
/// Pre-order: a node is settled before any of its children, children are
/// explored left to right, and blocked nodes are skipped together with their
/// subtrees.
pub fn tree_dfs(tree: &mut Tree, start: NodeId, goal: NodeId) -> SearchResult<NodeId> {
    let (visited, found) = limited_walk(tree, start, goal, None);
    if found {
        let path = reconstruct_tree_path(tree, start, goal);
        SearchResult::found(visited, path)
    } else {
        SearchResult::not_found(visited)
    }
}

/// Depth-first search that never descends below `limit` levels under
/// `start`.
pub fn depth_limited(
    tree: &mut Tree,
    start: NodeId,
    goal: NodeId,
    limit: u32,
) -> SearchResult<NodeId> {
    let (visited, found) = limited_walk(tree, start, goal, Some(limit));
    if found {
        let path = reconstruct_tree_path(tree, start, goal);
        SearchResult::found(visited, path)
    } else {
        SearchResult::not_found(visited)
    }
}

/// Iterative deepening: depth-limited searches with limits `0..=max_depth`.
///
/// The height of the tree under `start` is computed once up front. The
/// visited trace concatenates every iteration, so shallow nodes appear once
/// per iteration. Returns as soon as an iteration reaches the goal.
pub fn iterative_deepening(tree: &mut Tree, start: NodeId, goal: NodeId) -> SearchResult<NodeId> {
    if tree.get(start).is_none() {
        return SearchResult::not_found(Vec::new());
    }
    let max_depth = tree.depth_below(start);
    let mut all_visited = Vec::new();

    for limit in 0..=max_depth {
        let result = depth_limited(tree, start, goal, limit);
        all_visited.extend(result.visited);
        if result.found {
            return SearchResult::found(all_visited, result.path);
        }
    }

    SearchResult::not_found(all_visited)
}

/// Pre-order walk shared by the tree DFS variants. Visit order restarts at 0
/// on every call.
fn limited_walk(
    tree: &mut Tree,
    start: NodeId,
    goal: NodeId,
    limit: Option<u32>,
) -> (Vec<NodeId>, bool) {
    let mut visited = Vec::new();
    if tree.get(start).is_none() {
        return (visited, false);
    }
    let mut closed = vec![false; tree.len()];
    let mut stack = vec![(start, 0u32)];
    let mut order = 0;

    while let Some((cur, depth)) = stack.pop() {
        if limit.is_some_and(|l| depth > l) || closed[cur.index()] || tree[cur].is_blocked {
            continue;
        }
        closed[cur.index()] = true;
        let node = &mut tree[cur];
        node.is_visited = true;
        node.visit_order = Some(order);
        order += 1;
        visited.push(cur);

        if cur == goal {
            return (visited, true);
        }

        for &child in tree.children(cur).iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    (visited, false)
}
