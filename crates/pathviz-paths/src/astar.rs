use pathviz_core::{Grid, NodeId, Point, Tree};

use crate::dijkstra::{grid_cost_search, tree_cost_search};
use crate::result::SearchResult;
use crate::traits::{AstarPather, LayoutEstimate};

/// A* search on a grid with the Manhattan heuristic.
///
/// Priority is `steps + manhattan(cell, end)`; on an open 4-connected grid
/// the heuristic is exact, so the path is shortest and ties settle in queue
/// order.
pub fn astar(grid: &mut Grid, start: Point, end: Point) -> SearchResult<Point> {
    grid_cost_search(grid, start, end, |g, p| g.estimate(p, end))
}

/// A* search on a tree.
///
/// Same queue discipline as [`uniform_cost_search`](crate::uniform_cost_search)
/// with priority `cost + layout_distance(node, goal)`. The layout heuristic
/// is positional; the returned path is least-cost whenever it does not
/// overestimate.
pub fn a_star(
    tree: &mut Tree,
    start: NodeId,
    goal: NodeId,
    weighted: bool,
) -> SearchResult<NodeId> {
    tree_cost_search(tree, start, goal, weighted, &LayoutEstimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs;
    use crate::dijkstra::uniform_cost_search;
    use crate::fixtures::{grid3, is_grid_path, is_tree_path, scenario_a, weighted};

    #[test]
    fn a_star_weighted_matches_ucs_cost() {
        let (t0, [n1, _, n3, _, n5, _, n7]) = weighted();
        let mut t = t0.clone();
        let r = a_star(&mut t, n1, n7, true);
        assert!(r.found);
        assert_eq!(r.path, vec![n1, n3, n5, n7]);
        assert_eq!(r.visited, vec![n1, n3, n5, n7]);

        let mut u = t0.clone();
        let ucs = uniform_cost_search(&mut u, n1, n7, true);
        assert_eq!(t.path_cost(&r.path, true), u.path_cost(&ucs.path, true));
    }

    #[test]
    fn a_star_unweighted_explores_less_than_ucs() {
        let (t0, ids) = weighted();
        let mut t = t0.clone();
        let r = a_star(&mut t, ids[0], ids[6], false);
        let mut u = t0.clone();
        let ucs = uniform_cost_search(&mut u, ids[0], ids[6], false);
        assert_eq!(r.visited, vec![ids[0], ids[2], ids[4], ids[6]]);
        assert!(r.visited.len() < ucs.visited.len());
        assert_eq!(r.path, ucs.path);
    }

    #[test]
    fn a_star_scenario_a() {
        let (mut t, [a, b, _, d]) = scenario_a();
        let r = a_star(&mut t, a, d, false);
        assert!(r.found);
        assert_eq!(r.path, vec![a, b, d]);
        assert!(is_tree_path(&t, &r.path));
        assert!(t[d].is_path);
    }

    #[test]
    fn a_star_reset_rerun_is_identical() {
        let (mut t, ids) = weighted();
        let first = a_star(&mut t, ids[0], ids[3], true);
        t.reset_search();
        let second = a_star(&mut t, ids[0], ids[3], true);
        assert_eq!(first, second);
    }

    #[test]
    fn grid_astar_scenario_b() {
        let mut g = grid3();
        let (s, e) = (g.start(), g.end());
        let r = astar(&mut g, s, e);
        assert!(r.found);
        assert_eq!(r.path.len(), 5);
        assert!(r.visited.len() <= 9);
        assert!(is_grid_path(&g, &r.path));
    }

    #[test]
    fn grid_astar_visits_no_more_than_bfs() {
        let mut g = Grid::new(7, 7, Point::at(3, 0), Point::at(3, 6)).unwrap();
        for r in 1..6 {
            g.set_wall(Point::at(r, 3), true).unwrap();
        }
        let mut g2 = g.clone();
        let (s, e) = (g.start(), g.end());
        let a = astar(&mut g, s, e);
        let b = bfs(&mut g2, s, e);
        assert!(a.found && b.found);
        assert_eq!(a.path.len(), b.path.len());
        assert!(a.visited.len() <= b.visited.len());
        assert!(is_grid_path(&g, &a.path));
    }

    #[test]
    fn grid_astar_walled_off() {
        let mut g = grid3();
        g.set_wall(Point::at(1, 2), true).unwrap();
        g.set_wall(Point::at(2, 1), true).unwrap();
        let (s, e) = (g.start(), g.end());
        let r = astar(&mut g, s, e);
        assert!(!r.found);
        assert!(r.path.is_empty());
        assert_eq!(r.visited.len(), 6);
    }
}
