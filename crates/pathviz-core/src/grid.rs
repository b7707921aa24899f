//! The [`Grid`] type: a 2D board of [`GridCell`]s with copy-on-write rows.
//!
//! Rows are reference counted. Cloning a `Grid` is cheap and shares every
//! row; the first write to a row through either copy detaches that row only.
//! A replay holding an older grid therefore keeps seeing the state it was
//! started with while the caller toggles walls on a newer one.

use std::rc::Rc;

use crate::cell::GridCell;
use crate::error::ModelError;
use crate::geom::{Point, Range};

/// A rectangular search board with one start and one end cell.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Rc<Vec<GridCell>>>,
    bounds: Range,
    start: Point,
    end: Point,
}

impl Grid {
    /// Create a `rows` × `cols` grid of open cells with the given endpoints.
    pub fn new(rows: i32, cols: i32, start: Point, end: Point) -> Result<Self, ModelError> {
        let bounds = Range::new(0, 0, cols.max(0), rows.max(0));
        if !bounds.contains(start) || !bounds.contains(end) || start == end {
            return Err(ModelError::InvalidEndpoints { start, end });
        }
        let rows = (0..bounds.height())
            .map(|r| {
                let row: Vec<GridCell> = (0..bounds.width())
                    .map(|c| {
                        let mut cell = GridCell::new(r, c);
                        cell.is_start = cell.pos() == start;
                        cell.is_end = cell.pos() == end;
                        cell
                    })
                    .collect();
                Rc::new(row)
            })
            .collect();
        Ok(Self {
            rows,
            bounds,
            start,
            end,
        })
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.width()
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The end cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Read the cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<&GridCell> {
        if !self.contains(p) {
            return None;
        }
        Some(&self.rows[p.y as usize][p.x as usize])
    }

    /// Mutable access to the cell at `p`. Detaches the row if it is shared.
    pub fn at_mut(&mut self, p: Point) -> Option<&mut GridCell> {
        if !self.contains(p) {
            return None;
        }
        let row = Rc::make_mut(&mut self.rows[p.y as usize]);
        Some(&mut row[p.x as usize])
    }

    /// Whether a search may step onto `p`: in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(|c| !c.is_wall)
    }

    /// Set or clear a wall. Start and end cells are protected.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), ModelError> {
        if p == self.start || p == self.end {
            return Err(ModelError::ProtectedCell(p));
        }
        let cell = self.at_mut(p).ok_or(ModelError::OutOfBounds(p))?;
        cell.is_wall = wall;
        Ok(())
    }

    /// Flip the wall flag at `p`, returning the new value.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, ModelError> {
        let wall = !self.at(p).ok_or(ModelError::OutOfBounds(p))?.is_wall;
        self.set_wall(p, wall)?;
        Ok(wall)
    }

    /// Return a new grid with the wall at `p` flipped, leaving `self` intact.
    ///
    /// Only the touched row is copied.
    pub fn with_wall_toggled(&self, p: Point) -> Result<Grid, ModelError> {
        let mut next = self.clone();
        next.toggle_wall(p)?;
        Ok(next)
    }

    /// Clear visited/path flags, distances and back-links in place.
    ///
    /// Walls and endpoints are untouched. Rows without search state are not
    /// detached, so shared rows stay shared.
    pub fn reset_search(&mut self) {
        for row in self.rows.iter_mut() {
            if !row.iter().any(GridCell::has_search_state) {
                continue;
            }
            for cell in Rc::make_mut(row).iter_mut() {
                cell.clear_search();
            }
        }
    }

    /// Remove every wall and clear search state.
    pub fn clear_walls(&mut self) {
        self.reset_search();
        for row in self.rows.iter_mut() {
            if !row.iter().any(|c| c.is_wall) {
                continue;
            }
            for cell in Rc::make_mut(row).iter_mut() {
                cell.is_wall = false;
            }
        }
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.iter().filter(|c| c.is_wall).count()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> impl Iterator<Item = &GridCell> + '_ {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Whether `self` and `other` share the storage of row `row`.
    pub fn shares_row(&self, other: &Grid, row: i32) -> bool {
        match (self.rows.get(row as usize), other.rows.get(row as usize)) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
