use pathviz_core::{NodeId, Tree};

use crate::distance::label_distance;
use crate::path::reconstruct_tree_path;
use crate::queue::PriorityQueue;
use crate::result::SearchResult;

/// Greedy best-first search on a tree.
///
/// The frontier is ordered only by the distance between a node's numeric
/// label and the goal's. Nodes whose label has no numeric value rank after
/// every scored node and among themselves in insertion order. Neither
/// complete under blocking nor optimal.
pub fn best_first_search(tree: &mut Tree, start: NodeId, goal: NodeId) -> SearchResult<NodeId> {
    let mut visited = Vec::new();
    if tree.get(start).is_none() {
        return SearchResult::not_found(visited);
    }
    let mut closed = vec![false; tree.len()];
    let mut order = 0;

    let mut open = PriorityQueue::new();
    open.enqueue(start, label_key(tree, start, goal));

    while let Some(cur) = open.dequeue() {
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
                open.enqueue(child, label_key(tree, child, goal));
            }
        }
    }

    SearchResult::not_found(visited)
}

/// `(unscored, distance)`: unscored nodes sort last.
fn label_key(tree: &Tree, node: NodeId, goal: NodeId) -> (bool, u64) {
    match label_distance(tree, node, goal) {
        Some(d) => (false, d),
        None => (true, 0),
    }
}
