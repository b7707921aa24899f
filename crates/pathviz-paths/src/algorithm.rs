//! Algorithm selectors, their dispatch and descriptive metadata.

use std::fmt;
use std::str::FromStr;

use pathviz_core::{Grid, NodeId, Point, Tree};

use crate::astar::{a_star, astar};
use crate::best_first::best_first_search;
use crate::bfs::{bfs, tree_bfs};
use crate::dfs::{dfs, iterative_deepening, tree_dfs};
use crate::dijkstra::{uniform_cost, uniform_cost_search};
use crate::result::SearchResult;

/// Static description of a search algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub description: &'static str,
    pub properties: &'static [&'static str],
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub optimal: bool,
    pub complete: bool,
}

const BFS_INFO: AlgorithmInfo = AlgorithmInfo {
    description: "Explores all nodes at the current depth before moving to the next depth level. Uses a queue (FIFO).",
    properties: &[
        "Systematic level-by-level exploration",
        "Guarantees shortest path in unweighted graphs",
        "Uses queue data structure",
    ],
    time_complexity: "O(V + E)",
    space_complexity: "O(V)",
    optimal: true,
    complete: true,
};

const DFS_INFO: AlgorithmInfo = AlgorithmInfo {
    description: "Explores as far as possible along each branch before backtracking. Uses a stack (LIFO).",
    properties: &[
        "Goes deep into one path before trying others",
        "May not find shortest path",
        "Uses stack data structure",
    ],
    time_complexity: "O(V + E)",
    space_complexity: "O(h)",
    optimal: false,
    complete: true,
};

const IDDFS_INFO: AlgorithmInfo = AlgorithmInfo {
    description: "Combines benefits of BFS and DFS by performing depth-limited DFS with increasing depth limits.",
    properties: &[
        "Memory efficient like DFS",
        "Complete like BFS",
        "Finds optimal solution",
    ],
    time_complexity: "O(b^d)",
    space_complexity: "O(d)",
    optimal: true,
    complete: true,
};

const BEST_FIRST_INFO: AlgorithmInfo = AlgorithmInfo {
    description: "Uses a heuristic function to guide the search towards the most promising nodes first.",
    properties: &[
        "Uses heuristic to guide search",
        "Can be faster than uninformed search",
        "May not find optimal path",
    ],
    time_complexity: "O(b^m)",
    space_complexity: "O(b^m)",
    optimal: false,
    complete: false,
};

const UCS_INFO: AlgorithmInfo = AlgorithmInfo {
    description: "Expands the frontier node with the lowest accumulated path cost. Uses a priority queue.",
    properties: &[
        "Honours edge weights",
        "Finds the least-cost path",
        "Uses priority queue data structure",
    ],
    time_complexity: "O(b^(1 + C*/e))",
    space_complexity: "O(b^(1 + C*/e))",
    optimal: true,
    complete: true,
};

const ASTAR_INFO: AlgorithmInfo = AlgorithmInfo {
    description: "Orders the frontier by accumulated cost plus a distance estimate to the goal.",
    properties: &[
        "Combines path cost with a heuristic",
        "Explores fewer nodes than uniform-cost search",
        "Optimal when the heuristic never overestimates",
    ],
    time_complexity: "O(b^d)",
    space_complexity: "O(b^d)",
    optimal: true,
    complete: true,
};

/// Error returned when an algorithm name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(pub String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search algorithm: {:?}", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

/// Lowercase and drop separators, so "Best-First Search" and
/// "best_first_search" compare equal.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Searches available on the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TreeAlgorithm {
    #[default]
    BreadthFirst,
    DepthFirst,
    IterativeDeepening,
    BestFirst,
    UniformCost,
    AStar,
}

impl TreeAlgorithm {
    pub const ALL: [TreeAlgorithm; 6] = [
        TreeAlgorithm::BreadthFirst,
        TreeAlgorithm::DepthFirst,
        TreeAlgorithm::IterativeDeepening,
        TreeAlgorithm::BestFirst,
        TreeAlgorithm::UniformCost,
        TreeAlgorithm::AStar,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            TreeAlgorithm::BreadthFirst => "BFS",
            TreeAlgorithm::DepthFirst => "DFS",
            TreeAlgorithm::IterativeDeepening => "Iterative Deepening",
            TreeAlgorithm::BestFirst => "Best-First Search",
            TreeAlgorithm::UniformCost => "UCS",
            TreeAlgorithm::AStar => "A*",
        }
    }

    pub const fn info(self) -> &'static AlgorithmInfo {
        match self {
            TreeAlgorithm::BreadthFirst => &BFS_INFO,
            TreeAlgorithm::DepthFirst => &DFS_INFO,
            TreeAlgorithm::IterativeDeepening => &IDDFS_INFO,
            TreeAlgorithm::BestFirst => &BEST_FIRST_INFO,
            TreeAlgorithm::UniformCost => &UCS_INFO,
            TreeAlgorithm::AStar => &ASTAR_INFO,
        }
    }

    /// Whether the "use edge weights" flag changes this search.
    pub const fn uses_weights(self) -> bool {
        matches!(self, TreeAlgorithm::UniformCost | TreeAlgorithm::AStar)
    }

    /// Run the search. `weighted` is ignored unless
    /// [`uses_weights`](Self::uses_weights) is true.
    pub fn run(
        self,
        tree: &mut Tree,
        start: NodeId,
        goal: NodeId,
        weighted: bool,
    ) -> SearchResult<NodeId> {
        match self {
            TreeAlgorithm::BreadthFirst => tree_bfs(tree, start, goal),
            TreeAlgorithm::DepthFirst => tree_dfs(tree, start, goal),
            TreeAlgorithm::IterativeDeepening => iterative_deepening(tree, start, goal),
            TreeAlgorithm::BestFirst => best_first_search(tree, start, goal),
            TreeAlgorithm::UniformCost => uniform_cost_search(tree, start, goal, weighted),
            TreeAlgorithm::AStar => a_star(tree, start, goal, weighted),
        }
    }
}

impl fmt::Display for TreeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TreeAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "bfs" | "breadthfirst" | "breadthfirstsearch" => Ok(Self::BreadthFirst),
            "dfs" | "depthfirst" | "depthfirstsearch" => Ok(Self::DepthFirst),
            "iterativedeepening" | "iddfs" | "ids" => Ok(Self::IterativeDeepening),
            "bestfirstsearch" | "bestfirst" | "greedy" | "greedybestfirst" => Ok(Self::BestFirst),
            "ucs" | "uniformcost" | "uniformcostsearch" | "dijkstra" => Ok(Self::UniformCost),
            "a*" | "astar" | "a*search" => Ok(Self::AStar),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Searches available on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridAlgorithm {
    #[default]
    BreadthFirst,
    DepthFirst,
    UniformCost,
    AStar,
}

impl GridAlgorithm {
    pub const ALL: [GridAlgorithm; 4] = [
        GridAlgorithm::BreadthFirst,
        GridAlgorithm::DepthFirst,
        GridAlgorithm::UniformCost,
        GridAlgorithm::AStar,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            GridAlgorithm::BreadthFirst => "BFS",
            GridAlgorithm::DepthFirst => "DFS",
            GridAlgorithm::UniformCost => "UCS",
            GridAlgorithm::AStar => "A*",
        }
    }

    pub const fn info(self) -> &'static AlgorithmInfo {
        match self {
            GridAlgorithm::BreadthFirst => &BFS_INFO,
            GridAlgorithm::DepthFirst => &DFS_INFO,
            GridAlgorithm::UniformCost => &UCS_INFO,
            GridAlgorithm::AStar => &ASTAR_INFO,
        }
    }

    pub fn run(self, grid: &mut Grid, start: Point, end: Point) -> SearchResult<Point> {
        match self {
            GridAlgorithm::BreadthFirst => bfs(grid, start, end),
            GridAlgorithm::DepthFirst => dfs(grid, start, end),
            GridAlgorithm::UniformCost => uniform_cost(grid, start, end),
            GridAlgorithm::AStar => astar(grid, start, end),
        }
    }
}

impl fmt::Display for GridAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GridAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<TreeAlgorithm>()? {
            TreeAlgorithm::BreadthFirst => Ok(Self::BreadthFirst),
            TreeAlgorithm::DepthFirst => Ok(Self::DepthFirst),
            TreeAlgorithm::UniformCost => Ok(Self::UniformCost),
            TreeAlgorithm::AStar => Ok(Self::AStar),
            TreeAlgorithm::IterativeDeepening | TreeAlgorithm::BestFirst => {
                Err(ParseAlgorithmError(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{grid3, is_grid_path, is_tree_path, weighted};

    #[test]
    fn names_round_trip_through_from_str() {
        for algo in TreeAlgorithm::ALL {
            assert_eq!(algo.name().parse::<TreeAlgorithm>(), Ok(algo));
            assert_eq!(algo.to_string(), algo.name());
        }
        for algo in GridAlgorithm::ALL {
            assert_eq!(algo.name().parse::<GridAlgorithm>(), Ok(algo));
        }
    }

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("best_first_search".parse::<TreeAlgorithm>(), Ok(TreeAlgorithm::BestFirst));
        assert_eq!("A-Star".parse::<TreeAlgorithm>(), Ok(TreeAlgorithm::AStar));
        assert_eq!("iddfs".parse::<TreeAlgorithm>(), Ok(TreeAlgorithm::IterativeDeepening));
        assert_eq!("Uniform Cost Search".parse::<GridAlgorithm>(), Ok(GridAlgorithm::UniformCost));
        assert!("bogus".parse::<TreeAlgorithm>().is_err());
        assert!("iterative deepening".parse::<GridAlgorithm>().is_err());
    }

    #[test]
    fn only_cost_searches_use_weights() {
        let weighted: Vec<_> = TreeAlgorithm::ALL
            .into_iter()
            .filter(|a| a.uses_weights())
            .collect();
        assert_eq!(weighted, vec![TreeAlgorithm::UniformCost, TreeAlgorithm::AStar]);
    }

    #[test]
    fn info_flags() {
        assert!(TreeAlgorithm::BreadthFirst.info().optimal);
        assert!(!TreeAlgorithm::DepthFirst.info().optimal);
        assert!(!TreeAlgorithm::BestFirst.info().complete);
        assert_eq!(TreeAlgorithm::BreadthFirst.info(), GridAlgorithm::BreadthFirst.info());
        assert_eq!(TreeAlgorithm::IterativeDeepening.info().properties.len(), 3);
    }

    #[test]
    fn every_tree_algorithm_reaches_the_goal() {
        let (t0, ids) = weighted();
        for algo in TreeAlgorithm::ALL {
            let mut t = t0.clone();
            let r = algo.run(&mut t, ids[0], ids[6], true);
            assert!(r.found, "{algo}");
            assert_eq!(r.path.first(), Some(&ids[0]), "{algo}");
            assert_eq!(r.path.last(), Some(&ids[6]), "{algo}");
            assert!(is_tree_path(&t, &r.path), "{algo}");
            assert!(r.path.iter().all(|&id| t[id].is_path), "{algo}");
        }
    }

    #[test]
    fn every_grid_algorithm_reaches_the_end() {
        for algo in GridAlgorithm::ALL {
            let mut g = grid3();
            let (s, e) = (g.start(), g.end());
            let r = algo.run(&mut g, s, e);
            assert!(r.found, "{algo}");
            assert!(is_grid_path(&g, &r.path), "{algo}");
            assert_eq!(r.path.last(), Some(&e), "{algo}");
        }
    }

    #[test]
    fn missing_nodes_are_a_plain_miss() {
        let (t0, ids) = weighted();
        for algo in TreeAlgorithm::ALL {
            let mut t = t0.clone();
            let r = algo.run(&mut t, ids[0], NodeId(99), true);
            assert!(!r.found, "{algo}");
            assert!(r.path.is_empty(), "{algo}");
            assert!(r.visited.contains(&ids[6]), "{algo}");

            let mut t = t0.clone();
            let r = algo.run(&mut t, NodeId(99), ids[6], true);
            assert!(!r.found, "{algo}");
            assert!(r.visited.is_empty(), "{algo}");
            assert!(t.ids().all(|id| !t[id].is_visited), "{algo}");
        }
    }

    #[test]
    fn grid_searches_repeat_after_reset() {
        for algo in GridAlgorithm::ALL {
            let mut g = grid3();
            g.set_wall(Point::at(1, 1), true).unwrap();
            let (s, e) = (g.start(), g.end());
            let first = algo.run(&mut g, s, e);
            let marked = g.clone();
            g.reset_search();
            assert!(g.iter().all(|c| !c.has_search_state()), "{algo}");
            let second = algo.run(&mut g, s, e);
            assert_eq!(first, second, "{algo}");
            assert!(g.iter().eq(marked.iter()), "{algo}");
        }
    }
}
