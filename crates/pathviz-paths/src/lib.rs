//! Uninformed and informed search over grids and trees.
//!
//! Every search takes a mutable structure plus a start and a goal, runs
//! synchronously to completion and returns a [`SearchResult`]: the nodes in
//! the order they were settled, the start→goal path and whether the goal was
//! reached. Search-state flags (`is_visited`, `is_path`, `visit_order`,
//! `distance`, `previous`) are written in place; call the structure's
//! `reset_search` before running again.
//!
//! | Search | Grid | Tree |
//! |---|---|---|
//! | Breadth-first | [`bfs`] | [`tree_bfs`] |
//! | Depth-first | [`dfs`] | [`tree_dfs`] |
//! | Iterative deepening | | [`iterative_deepening`] |
//! | Greedy best-first | | [`best_first_search`] |
//! | Uniform-cost | [`uniform_cost`] | [`uniform_cost_search`] |
//! | A\* | [`astar`] | [`a_star`] |
//!
//! [`GridAlgorithm`] and [`TreeAlgorithm`] select one of these by name.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | grid BFS, DFS |
//! | [`WeightedPather`] : [`Pather`] | grid uniform-cost |
//! | [`AstarPather`] : [`WeightedPather`] | grid A\* |
//! | [`TreeEstimate`] | tree uniform-cost ([`NoEstimate`]), A\* ([`LayoutEstimate`]) |

mod algorithm;
mod astar;
mod best_first;
mod bfs;
mod dfs;
mod dijkstra;
pub mod distance;
pub mod path;
mod queue;
mod result;
mod traits;

#[cfg(test)]
mod fixtures;

pub use algorithm::{AlgorithmInfo, GridAlgorithm, ParseAlgorithmError, TreeAlgorithm};
pub use astar::{a_star, astar};
pub use best_first::best_first_search;
pub use bfs::{bfs, tree_bfs};
pub use dfs::{depth_limited, dfs, iterative_deepening, tree_dfs};
pub use dijkstra::{uniform_cost, uniform_cost_search};
pub use distance::{label_distance, layout_distance, manhattan};
pub use path::{grid_path_chain, reconstruct_grid_path, reconstruct_tree_path};
pub use queue::{PriorityQueue, Score};
pub use result::{SearchResult, SearchStats};
pub use traits::{AstarPather, LayoutEstimate, NoEstimate, Pather, TreeEstimate, WeightedPather};
