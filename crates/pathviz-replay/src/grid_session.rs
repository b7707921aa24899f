//! Controller for the grid view.

use pathviz_core::{Grid, ModelError, Point};
use pathviz_gen::GridConfig;
use pathviz_paths::{GridAlgorithm, SearchResult, SearchStats};

use crate::cursor::Replay;
use crate::error::SessionError;
use crate::plan::{ReplayPlan, ReplayTiming};

/// Owns the current grid board, the selected algorithm and the running
/// replay.
///
/// Wall edits replace the board copy-on-write, so a [`snapshot`] taken
/// earlier keeps the state it saw. The in-flight guard refuses only
/// [`visualize`](Self::visualize) and [`clear_path`](Self::clear_path).
///
/// [`snapshot`]: Self::snapshot
pub struct GridSession {
    config: GridConfig,
    grid: Grid,
    algorithm: GridAlgorithm,
    timing: ReplayTiming,
    replay: Option<Replay<Point>>,
    stats: Option<SearchStats>,
    last_result: Option<SearchResult<Point>>,
}

impl GridSession {
    /// Start a session on an empty board built from `config`.
    pub fn new(config: GridConfig) -> Result<Self, ModelError> {
        let grid = config.build()?;
        Ok(Self {
            config,
            grid,
            algorithm: GridAlgorithm::default(),
            timing: ReplayTiming::GRID,
            replay: None,
            stats: None,
            last_result: None,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// A cheap copy of the current board that later edits do not affect.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    #[inline]
    pub fn algorithm(&self) -> GridAlgorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: GridAlgorithm) {
        self.algorithm = algorithm;
    }

    pub fn set_timing(&mut self, timing: ReplayTiming) {
        self.timing = timing;
    }

    #[inline]
    pub fn is_in_flight(&self) -> bool {
        self.replay.is_some()
    }

    #[inline]
    pub fn stats(&self) -> Option<SearchStats> {
        self.stats
    }

    #[inline]
    pub fn last_result(&self) -> Option<&SearchResult<Point>> {
        self.last_result.as_ref()
    }

    /// Flip the wall at `p`, returning whether it is now a wall. Start and
    /// end cannot become walls.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, SessionError> {
        self.grid = self.grid.with_wall_toggled(p)?;
        Ok(self.grid.at(p).is_some_and(|c| c.is_wall))
    }

    /// Replace the board with an empty one.
    pub fn clear_board(&mut self) -> Result<(), SessionError> {
        self.grid = self.config.build()?;
        self.stats = None;
        self.last_result = None;
        Ok(())
    }

    /// Clear visited and path marks, keeping walls.
    pub fn clear_path(&mut self) -> Result<(), SessionError> {
        if self.is_in_flight() {
            log::warn!("clear path refused: replay in flight");
            return Err(SessionError::InFlight);
        }
        self.grid.reset_search();
        self.stats = None;
        Ok(())
    }

    /// Clear the previous marks, run the selected search from start to end
    /// and start replaying it at `now_ms`.
    pub fn visualize(&mut self, now_ms: u64) -> Result<SearchStats, SessionError> {
        if self.is_in_flight() {
            log::warn!("visualize refused: replay in flight");
            return Err(SessionError::InFlight);
        }
        self.grid.reset_search();

        let mut scratch = self.grid.clone();
        let (start, end) = (scratch.start(), scratch.end());
        let result = self.algorithm.run(&mut scratch, start, end);
        let stats = SearchStats::from_result(&result, self.grid.bounds().len());
        log::info!(
            "{} on {}x{} grid: visited {}, path {}, found {}",
            self.algorithm,
            self.grid.rows(),
            self.grid.cols(),
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

    /// Apply due replay steps to the current board. Returns how many were
    /// applied.
    pub fn tick(&mut self, now_ms: u64) -> usize {
        let Some(replay) = self.replay.as_mut() else {
            return 0;
        };
        let applied = replay.advance(now_ms, &mut self.grid);
        if replay.is_finished(now_ms) {
            log::debug!("grid replay finished after {} steps", replay.applied());
            self.replay = None;
        }
        applied
    }
}
