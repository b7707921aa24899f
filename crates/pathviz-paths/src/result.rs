//! Search outcomes and the statistics derived from them.

/// Outcome of one search run.
///
/// `visited` lists nodes in the order they were settled (iterative deepening
/// may list a node once per iteration). `path` runs from start to goal and
/// is empty when the goal was not reached.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult<N> {
    pub visited: Vec<N>,
    pub path: Vec<N>,
    pub found: bool,
}

impl<N> SearchResult<N> {
    /// A successful run.
    pub fn found(visited: Vec<N>, path: Vec<N>) -> Self {
        Self {
            visited,
            path,
            found: true,
        }
    }

    /// A run whose frontier was exhausted without reaching the goal.
    pub fn not_found(visited: Vec<N>) -> Self {
        Self {
            visited,
            path: Vec::new(),
            found: false,
        }
    }

    /// Number of settle events.
    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of nodes on the path (0 when not found).
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }

    /// Number of edges on the path.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Summary figures for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    pub visited_count: usize,
    pub path_length: usize,
    pub total_nodes: usize,
    pub found: bool,
}

impl SearchStats {
    /// Statistics for `result` over a structure of `total_nodes` nodes.
    pub fn from_result<N>(result: &SearchResult<N>, total_nodes: usize) -> Self {
        Self {
            visited_count: result.visited_count(),
            path_length: result.path_len(),
            total_nodes,
            found: result.found,
        }
    }

    /// Visited nodes as a percentage of all nodes.
    ///
    /// May exceed 100 for iterative deepening, which revisits nodes.
    pub fn explored_pct(&self) -> f64 {
        if self.total_nodes == 0 {
            return 0.0;
        }
        self.visited_count as f64 / self.total_nodes as f64 * 100.0
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn result_round_trip() {
        let r = SearchResult::found(vec![0usize, 1, 3], vec![0, 3]);
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult<usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
