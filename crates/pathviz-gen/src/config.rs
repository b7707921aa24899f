//! Generator settings.

use pathviz_core::{Grid, ModelError, Point, Pos};

/// How generated tree nodes are labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelStyle {
    /// `B`, `C`, … `Z`, `A1`, `B1`, …: the n-th node takes letter `n % 26`
    /// followed by `n / 26` when that is non-zero.
    #[default]
    Letters,
    /// The creation counter itself, so the greedy label heuristic has
    /// numbers to compare.
    Numbers,
}

/// Shape and layout of a random tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeGenConfig {
    /// Upper bound on the node count, root included.
    pub max_nodes: usize,
    /// Smallest depth that may be drawn.
    pub min_depth: u32,
    /// Largest depth that may be drawn.
    pub max_depth: u32,
    pub root_pos: Pos,
    /// Vertical distance between levels.
    pub level_height: f64,
    /// Width of the band the root's children are spread across.
    pub band_width: f64,
    /// Factor applied to the band at each deeper level.
    pub band_shrink: f64,
    pub viewport_width: f64,
    /// Minimum distance kept between a node and either viewport edge.
    pub margin: f64,
    pub labels: LabelStyle,
}

impl Default for TreeGenConfig {
    fn default() -> Self {
        Self {
            max_nodes: 10,
            min_depth: 2,
            max_depth: 4,
            root_pos: Pos::new(400.0, 50.0),
            level_height: 100.0,
            band_width: 600.0,
            band_shrink: 0.7,
            viewport_width: 800.0,
            margin: 30.0,
            labels: LabelStyle::Letters,
        }
    }
}

impl TreeGenConfig {
    /// Clamp an x coordinate into the visible part of the viewport.
    pub fn clamp_x(&self, x: f64) -> f64 {
        let hi = (self.viewport_width - self.margin).max(self.margin);
        x.clamp(self.margin, hi)
    }
}

/// Dimensions and endpoints of the grid board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Point,
    pub end: Point,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            cols: 50,
            start: Point::at(10, 15),
            end: Point::at(10, 35),
        }
    }
}

impl GridConfig {
    /// Build a wall-free grid.
    pub fn build(&self) -> Result<Grid, ModelError> {
        Grid::new(self.rows, self.cols, self.start, self.end)
    }
}
