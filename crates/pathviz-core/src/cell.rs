//! The [`GridCell`] type, one square of the search grid.

use crate::geom::Point;

/// Sentinel distance meaning "not reached by the last search".
pub const UNREACHABLE: i32 = i32::MAX;

/// A grid square with its static role and its per-run search state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub row: i32,
    pub col: i32,
    pub is_start: bool,
    pub is_end: bool,
    pub is_wall: bool,
    pub is_visited: bool,
    pub is_path: bool,
    /// Steps from the start, or [`UNREACHABLE`].
    pub distance: i32,
    /// The cell this one was reached from during the last search.
    pub previous: Option<Point>,
}

impl GridCell {
    /// A plain open cell at `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self {
            row,
            col,
            is_start: false,
            is_end: false,
            is_wall: false,
            is_visited: false,
            is_path: false,
            distance: UNREACHABLE,
            previous: None,
        }
    }

    /// Grid coordinate of this cell.
    #[inline]
    pub const fn pos(&self) -> Point {
        Point::at(self.row, self.col)
    }

    /// Whether any search-state field differs from its pristine value.
    #[inline]
    pub fn has_search_state(&self) -> bool {
        self.is_visited || self.is_path || self.distance != UNREACHABLE || self.previous.is_some()
    }

    /// Clear visited/path flags, distance and back-link.
    #[inline]
    pub fn clear_search(&mut self) {
        self.is_visited = false;
        self.is_path = false;
        self.distance = UNREACHABLE;
        self.previous = None;
    }
}
