//! Controller for the tree view.

use pathviz_core::{NodeId, Tree};
use pathviz_gen::{TreeGen, add_weights, remove_weights};
use pathviz_paths::{SearchResult, SearchStats, TreeAlgorithm};
use rand::Rng;

use crate::cursor::Replay;
use crate::error::SessionError;
use crate::plan::{ReplayPlan, ReplayTiming};

/// Owns the current tree and everything the tree view selects on it.
///
/// Searches run synchronously on a scratch copy; their trace is then played
/// back onto the live tree by [`tick`](Self::tick). While a replay is in
/// flight, [`visualize`](Self::visualize) and
/// [`clear_path`](Self::clear_path) are refused. Every other edit goes
/// through.
pub struct TreeSession<R: Rng> {
    tree: Tree,
    treegen: TreeGen<R>,
    algorithm: TreeAlgorithm,
    weighted: bool,
    timing: ReplayTiming,
    replay: Option<Replay<NodeId>>,
    /// The tree a running replay was started on, once regeneration has
    /// replaced it.
    retired: Option<Tree>,
    stats: Option<SearchStats>,
    last_result: Option<SearchResult<NodeId>>,
}

impl<R: Rng> TreeSession<R> {
    /// Start a session on a freshly generated tree.
    pub fn new(mut treegen: TreeGen<R>) -> Self {
        let tree = treegen.generate();
        Self::with_tree(tree, treegen)
    }

    /// Start a session on an existing tree. Weighted mode follows whether the
    /// tree already carries weights.
    pub fn with_tree(tree: Tree, treegen: TreeGen<R>) -> Self {
        Self {
            weighted: tree.has_weights(),
            tree,
            treegen,
            algorithm: TreeAlgorithm::default(),
            timing: ReplayTiming::TREE,
            replay: None,
            retired: None,
            stats: None,
            last_result: None,
        }
    }

    #[inline]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    #[inline]
    pub fn algorithm(&self) -> TreeAlgorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: TreeAlgorithm) {
        self.algorithm = algorithm;
    }

    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    #[inline]
    pub fn goal(&self) -> Option<NodeId> {
        self.tree.goal()
    }

    pub fn set_timing(&mut self, timing: ReplayTiming) {
        self.timing = timing;
    }

    /// Whether a replay is still running.
    #[inline]
    pub fn is_in_flight(&self) -> bool {
        self.replay.is_some()
    }

    /// Figures of the last search, cleared by path clears and regeneration.
    #[inline]
    pub fn stats(&self) -> Option<SearchStats> {
        self.stats
    }

    #[inline]
    pub fn last_result(&self) -> Option<&SearchResult<NodeId>> {
        self.last_result.as_ref()
    }

    /// Replace the tree with a new random one. Weighted mode is switched off
    /// and the new tree's goal becomes the selection.
    pub fn regenerate(&mut self) {
        let tree = self.treegen.generate();
        let old = std::mem::replace(&mut self.tree, tree);
        if self.replay.is_some() {
            self.retired = Some(old);
        }
        self.weighted = false;
        self.stats = None;
        self.last_result = None;
        log::debug!("tree regenerated: {} nodes", self.tree.len());
    }

    /// Clear visited and path marks.
    pub fn clear_path(&mut self) -> Result<(), SessionError> {
        if self.is_in_flight() {
            log::warn!("clear path refused: replay in flight");
            return Err(SessionError::InFlight);
        }
        self.tree.reset_search();
        self.stats = None;
        Ok(())
    }

    /// Switch weighted mode, drawing fresh weights when turned on and
    /// dropping them when turned off.
    pub fn set_weighted(&mut self, weighted: bool) {
        self.weighted = weighted;
        if weighted {
            add_weights(&mut self.tree, &mut self.treegen.rng);
        } else {
            remove_weights(&mut self.tree);
        }
    }

    /// Make `id` the goal. Selecting the current goal changes nothing; the
    /// start node cannot be selected.
    pub fn select_goal(&mut self, id: NodeId) -> Result<(), SessionError> {
        if self.tree.goal() == Some(id) {
            return Ok(());
        }
        self.tree.set_goal(id)?;
        Ok(())
    }

    /// Flip the blocked flag of `id`, returning the new value.
    pub fn toggle_blocked(&mut self, id: NodeId) -> Result<bool, SessionError> {
        Ok(self.tree.toggle_blocked(id)?)
    }

    /// Clear the previous marks, run the selected search from the root to
    /// the goal and start replaying it at `now_ms`.
    pub fn visualize(&mut self, now_ms: u64) -> Result<SearchStats, SessionError> {
        if self.is_in_flight() {
            log::warn!("visualize refused: replay in flight");
            return Err(SessionError::InFlight);
        }
        let goal = self.tree.goal().ok_or(SessionError::NoGoal)?;
        self.tree.reset_search();

        let mut scratch = self.tree.clone();
        let start = scratch.start();
        let result = self.algorithm.run(&mut scratch, start, goal, self.weighted);
        let stats = SearchStats::from_result(&result, self.tree.len());
        log::info!(
            "{} on {} nodes: visited {}, path {}, found {}",
            self.algorithm,
            stats.total_nodes,
            stats.visited_count,
            stats.path_length,
            stats.found
        );

        let plan = ReplayPlan::from_result(&result, self.timing);
        self.replay = Some(Replay::new(plan, now_ms));
        self.stats = Some(stats);
        self.last_result = Some(result);
        self.tick(now_ms);
        Ok(stats)
    }

    /// Apply due replay steps. Returns how many were applied. The in-flight
    /// guard drops once the replay has run its full duration.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let Some(replay) = self.replay.as_mut() else {
            return 0;
        };
        let target = self.retired.as_mut().unwrap_or(&mut self.tree);
        let applied = replay.advance(now_ms, target);
        if replay.is_finished(now_ms) {
            log::debug!("tree replay finished after {} steps", replay.applied());
            self.replay = None;
            self.retired = None;
        }
        applied
    }
}
