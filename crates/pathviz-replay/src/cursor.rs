//! Applying a [`ReplayPlan`] to a structure as time passes.

use pathviz_core::{Grid, NodeId, Point, Tree};

use crate::plan::{Mark, ReplayPlan};

/// A structure replay steps can be applied to.
pub trait Markable<N> {
    /// Set `mark` on `node`. Nodes the structure does not hold are ignored.
    fn mark(&mut self, node: N, mark: Mark);
}

impl Markable<NodeId> for Tree {
    fn mark(&mut self, node: NodeId, mark: Mark) {
        if let Some(n) = self.get_mut(node) {
            match mark {
                Mark::Visited => n.is_visited = true,
                Mark::Path => n.is_path = true,
            }
        }
    }
}

impl Markable<Point> for Grid {
    fn mark(&mut self, node: Point, mark: Mark) {
        if let Some(c) = self.at_mut(node) {
            match mark {
                Mark::Visited => c.is_visited = true,
                Mark::Path => c.is_path = true,
            }
        }
    }
}

/// Playback position within a plan.
///
/// Time is supplied by the caller in milliseconds on any monotonic clock;
/// the cursor never sleeps or schedules. Steps are applied once each, in
/// plan order, and there is no way to skip or cancel them.
#[derive(Debug, Clone)]
pub struct Replay<N> {
    plan: ReplayPlan<N>,
    started_ms: u64,
    next: usize,
}

impl<N: Copy> Replay<N> {
    /// Start playing `plan` at `now_ms`.
    pub fn new(plan: ReplayPlan<N>, now_ms: u64) -> Self {
        Self {
            plan,
            started_ms: now_ms,
            next: 0,
        }
    }

    /// Apply every step due at `now_ms` to `target`. Returns how many steps
    /// were applied.
    pub fn advance<M: Markable<N> + ?Sized>(&mut self, now_ms: u64, target: &mut M) -> usize {
        if now_ms < self.started_ms {
            return 0;
        }
        let elapsed = now_ms - self.started_ms;
        let steps = self.plan.steps();
        let first = self.next;
        while let Some(step) = steps.get(self.next) {
            if step.at_ms > elapsed {
                break;
            }
            target.mark(step.node, step.mark);
            self.next += 1;
        }
        self.next - first
    }

    /// Apply every remaining step regardless of time.
    pub fn finish<M: Markable<N> + ?Sized>(&mut self, target: &mut M) -> usize {
        self.advance(u64::MAX, target)
    }

    /// Whether all steps are applied and the plan's duration has elapsed.
    pub fn is_finished(&self, now_ms: u64) -> bool {
        self.next >= self.plan.len()
            && now_ms.saturating_sub(self.started_ms) >= self.plan.duration_ms()
    }

    /// Number of steps applied so far.
    #[inline]
    pub fn applied(&self) -> usize {
        self.next
    }

    /// Absolute time at which the replay is over.
    #[inline]
    pub fn end_ms(&self) -> u64 {
        self.started_ms.saturating_add(self.plan.duration_ms())
    }

    #[inline]
    pub fn plan(&self) -> &ReplayPlan<N> {
        &self.plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::ReplayTiming;
    use pathviz_core::Pos;
    use pathviz_paths::{SearchResult, bfs};

    fn small_tree() -> Tree {
        let mut t = Tree::new("A", "A", Pos::default());
        let a = t.root();
        let b = t.add_child(a, "B", "B", Pos::default()).unwrap();
        t.add_child(a, "C", "C", Pos::default()).unwrap();
        t.add_child(b, "D", "D", Pos::default()).unwrap();
        t
    }

    #[test]
    fn advance_applies_only_due_steps() {
        let mut t = small_tree();
        let ids: Vec<NodeId> = t.ids().collect();
        let result = SearchResult::found(ids.clone(), vec![ids[0], ids[1], ids[3]]);
        let plan = ReplayPlan::from_result(&result, ReplayTiming::GRID);
        let mut replay = Replay::new(plan, 1000);

        assert_eq!(replay.advance(999, &mut t), 0);
        assert_eq!(replay.advance(1000, &mut t), 1);
        assert!(t[ids[0]].is_visited && !t[ids[1]].is_visited);

        assert_eq!(replay.advance(1025, &mut t), 2);
        assert!(t[ids[2]].is_visited && !t[ids[3]].is_visited);

        // Visited ends at +40, path cells at +40, +90, +140.
        assert_eq!(replay.advance(1040, &mut t), 2);
        assert!(t[ids[0]].is_path && !t[ids[1]].is_path);
        assert!(!replay.is_finished(1100));

        assert_eq!(replay.advance(1140, &mut t), 2);
        assert!(!replay.is_finished(1140));
        assert!(replay.is_finished(1190));
        assert_eq!(replay.end_ms(), 1190);
        assert!(t[ids[3]].is_path && !t[ids[2]].is_path);
    }

    #[test]
    fn advance_is_idempotent_for_the_same_time() {
        let mut t = small_tree();
        let ids: Vec<NodeId> = t.ids().collect();
        let plan = ReplayPlan::from_result(&SearchResult::not_found(ids), ReplayTiming::TREE);
        let mut replay = Replay::new(plan, 0);
        assert_eq!(replay.advance(1, &mut t), 2);
        assert_eq!(replay.advance(1, &mut t), 0);
        assert_eq!(replay.applied(), 2);
        assert_eq!(replay.finish(&mut t), 2);
        assert!(replay.is_finished(4));
    }

    #[test]
    fn replay_rebuilds_search_marks_on_clean_grid() {
        let mut searched = Grid::new(3, 3, Point::at(0, 0), Point::at(2, 2)).unwrap();
        let mut live = searched.clone();
        let (s, e) = (searched.start(), searched.end());
        let result = bfs(&mut searched, s, e);
        assert!(live.iter().all(|c| !c.is_visited));

        let mut replay = Replay::new(ReplayPlan::from_result(&result, ReplayTiming::GRID), 0);
        replay.finish(&mut live);
        // The search also flags cells it queued but never settled.
        for (a, b) in live.iter().zip(searched.iter()) {
            assert!(!a.is_visited || b.is_visited, "{:?}", a.pos());
            assert_eq!(a.is_path, b.is_path, "{:?}", a.pos());
        }
        assert_eq!(live.iter().filter(|c| c.is_visited).count(), result.visited.len());
    }

    #[test]
    fn unknown_nodes_are_ignored() {
        let mut t = small_tree();
        let plan =
            ReplayPlan::from_result(&SearchResult::not_found(vec![NodeId(99)]), ReplayTiming::TREE);
        let mut replay = Replay::new(plan, 0);
        assert_eq!(replay.finish(&mut t), 1);
        assert!(t.ids().all(|id| !t[id].is_visited));
    }
}
