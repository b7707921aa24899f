//! Replay plans: a finished search laid out on a timeline.

use pathviz_paths::SearchResult;

/// Flag a replay step sets on its node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    Visited,
    Path,
}

/// One timed delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayStep<N> {
    /// Offset from the start of the replay.
    pub at_ms: u64,
    pub node: N,
    pub mark: Mark,
}

/// Delay between consecutive steps of each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayTiming {
    pub visited_step_ms: u64,
    pub path_step_ms: u64,
}

impl ReplayTiming {
    /// Tree view: 1 ms per visited node, 1 ms per path node.
    pub const TREE: Self = Self {
        visited_step_ms: 1,
        path_step_ms: 1,
    };

    /// Grid view: 10 ms per visited cell, 50 ms per path cell.
    pub const GRID: Self = Self {
        visited_step_ms: 10,
        path_step_ms: 50,
    };
}

impl Default for ReplayTiming {
    fn default() -> Self {
        Self::TREE
    }
}

/// Immutable, time-ordered list of replay steps.
///
/// The visited trace plays first, one step every `visited_step_ms`; the path
/// starts right after the last visited step's slot and plays one step every
/// `path_step_ms`. The replay is over at
/// [`duration_ms`](Self::duration_ms), one path slot after the last path
/// step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayPlan<N> {
    steps: Vec<ReplayStep<N>>,
    duration_ms: u64,
}

impl<N: Copy> ReplayPlan<N> {
    /// Lay out `result` with the given timing. A result that did not reach
    /// its goal has no path phase.
    pub fn from_result(result: &SearchResult<N>, timing: ReplayTiming) -> Self {
        let mut steps = Vec::with_capacity(result.visited.len() + result.path.len());
        for (i, &node) in result.visited.iter().enumerate() {
            steps.push(ReplayStep {
                at_ms: i as u64 * timing.visited_step_ms,
                node,
                mark: Mark::Visited,
            });
        }
        let path_start = result.visited.len() as u64 * timing.visited_step_ms;
        let path: &[N] = if result.found { &result.path } else { &[] };
        for (i, &node) in path.iter().enumerate() {
            steps.push(ReplayStep {
                at_ms: path_start + i as u64 * timing.path_step_ms,
                node,
                mark: Mark::Path,
            });
        }
        Self {
            steps,
            duration_ms: path_start + path.len() as u64 * timing.path_step_ms,
        }
    }
}

impl<N> ReplayPlan<N> {
    #[inline]
    pub fn steps(&self) -> &[ReplayStep<N>] {
        &self.steps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Offset at which the replay counts as finished.
    #[inline]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn plan_round_trip() {
        let r = SearchResult::found(vec![0u32, 1], vec![0, 1]);
        let plan = ReplayPlan::from_result(&r, ReplayTiming::GRID);
        let json = serde_json::to_string(&plan).unwrap();
        let back: ReplayPlan<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }
}
