use std::collections::VecDeque;

use pathviz_core::{Grid, NodeId, Point, Tree};

use crate::path::{reconstruct_grid_path, reconstruct_tree_path};
use crate::result::SearchResult;
use crate::traits::Pather;

/// Breadth-first search on a grid.
///
/// FIFO frontier, neighbors in up/down/left/right order. A neighbor is
/// marked visited (with its back-link and step distance) the moment it is
/// enqueued, so each cell enters the queue at most once. Stops as soon as
/// `end` is dequeued. The path has the minimum number of steps.
pub fn bfs(grid: &mut Grid, start: Point, end: Point) -> SearchResult<Point> {
    let mut visited = Vec::new();
    let Some(cell) = grid.at_mut(start) else {
        return SearchResult::not_found(visited);
    };
    cell.is_visited = true;
    cell.distance = 0;

    let mut queue = VecDeque::from([start]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(cur) = queue.pop_front() {
        visited.push(cur);
        if cur == end {
            let path = reconstruct_grid_path(grid, end);
            return SearchResult::found(visited, path);
        }

        let dist = grid.at(cur).map_or(0, |c| c.distance);
        nbuf.clear();
        grid.neighbors(cur, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(n) = grid.at_mut(np) else {
                continue;
            };
            if n.is_visited {
                continue;
            }
            n.is_visited = true;
            n.previous = Some(cur);
            n.distance = dist + 1;
            queue.push_back(np);
        }
    }

    SearchResult::not_found(visited)
}

/// Breadth-first search on a tree.
///
/// Nodes are settled in FIFO order, each receiving the next `visit_order`.
/// Blocked children are never enqueued. On reaching `goal` the path is
/// rebuilt from parent links and marked.
pub fn tree_bfs(tree: &mut Tree, start: NodeId, goal: NodeId) -> SearchResult<NodeId> {
    let mut visited = Vec::new();
    if tree.get(start).is_none() {
        return SearchResult::not_found(visited);
    }
    let mut closed = vec![false; tree.len()];
    let mut queue = VecDeque::from([start]);
    let mut order = 0;

    while let Some(cur) = queue.pop_front() {
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
            let path = reconstruct_tree_path(tree, start, goal);
            return SearchResult::found(visited, path);
        }

        for &child in tree.children(cur) {
            if !closed[child.index()] && !tree[child].is_blocked {
                queue.push_back(child);
            }
        }
    }

    SearchResult::not_found(visited)
}
