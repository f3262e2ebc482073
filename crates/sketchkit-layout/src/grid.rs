//! # Grid Layout Module
//!
//! Lays copies of a set of paths out in a translated grid. Every source path
//! shares one offset computed from the aggregate bounds, so the group as a
//! whole is moved to `(x_offset, y_offset)` and repeated with padding.
//!
//! Two layouts are available:
//! - [`GridLayout::build`] / [`make_grid`]: one row per source path with
//!   `x_count` cells. `y_count` only selects the vertical offset of that row
//!   (the last row index wins), it never adds cells.
//! - [`GridLayout::build_expanded`] / [`make_grid_expanded`]: one row per
//!   `(path, column)` pair holding `y_count` cells, one per row index.
//!
//! Grids are plain data; nothing here draws.

use crate::bounds::{compute_bounds, BoundedPath};
use serde::{Deserialize, Serialize};
use sketchkit_core::BoundingBox;

/// A path copy and the absolute position it should be drawn at.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell<P> {
    pub path: P,
    pub x: f64,
    pub y: f64,
}

/// Rows of positioned path copies. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P> {
    rows: Vec<Vec<GridCell<P>>>,
}

impl<P> Grid<P> {
    pub fn rows(&self) -> &[Vec<GridCell<P>>] {
        &self.rows
    }

    /// Hand the rows, and the path copies in them, to the caller.
    pub fn into_rows(self) -> Vec<Vec<GridCell<P>>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// True when the grid holds no cells (it may still hold empty rows).
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Row-major iteration yielding `(row, column, cell)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &GridCell<P>)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (r, c, cell))
        })
    }
}

impl<P: BoundedPath> Grid<P> {
    /// Bounds of every cell's copy once translated to its position.
    pub fn bounds(&self) -> BoundingBox {
        self.cells()
            .map(|(_, _, cell)| cell.path.bounds().translated(cell.x, cell.y))
            .reduce(|acc, bb| acc.union(&bb))
            .unwrap_or(BoundingBox::EMPTY)
    }
}

impl<P> IntoIterator for Grid<P> {
    type Item = Vec<GridCell<P>>;
    type IntoIter = std::vec::IntoIter<Vec<GridCell<P>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Parameters for a grid layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    /// Extra horizontal translation applied to every cell
    pub x_offset: f64,
    /// Extra vertical translation applied to every cell
    pub y_offset: f64,
    /// Number of repetitions along x
    pub x_count: usize,
    /// Number of repetitions along y
    pub y_count: usize,
    /// Gap between repetitions along x (may be negative)
    pub x_pad: f64,
    /// Gap between repetitions along y (may be negative)
    pub y_pad: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            x_offset: 0.0,
            y_offset: 0.0,
            x_count: 1,
            y_count: 1,
            x_pad: 0.0,
            y_pad: 0.0,
        }
    }
}

impl GridLayout {
    /// Create new grid parameters with no offset and no padding
    pub fn new(x_count: usize, y_count: usize) -> Self {
        Self {
            x_count,
            y_count,
            ..Self::default()
        }
    }

    pub fn with_offset(mut self, x_offset: f64, y_offset: f64) -> Self {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
        self
    }

    pub fn with_padding(mut self, x_pad: f64, y_pad: f64) -> Self {
        self.x_pad = x_pad;
        self.y_pad = y_pad;
        self
    }

    /// Horizontal and vertical distance between neighbouring repetitions of a
    /// group with the given aggregate bounds.
    fn steps(&self, bounds: &BoundingBox) -> (f64, f64) {
        (bounds.width() + self.x_pad, bounds.height() + self.y_pad)
    }

    /// Position shared by cell `(0, 0)` of every source path.
    fn zero(&self, bounds: &BoundingBox) -> (f64, f64) {
        (-bounds.x() + self.x_offset, -bounds.y() + self.y_offset)
    }

    /// Build the grid: one row per source path, `x_count` cells per row.
    ///
    /// Each column slot is rewritten once per row index, so only the last
    /// one (`y_count - 1`) survives. `y_count == 0` leaves every row empty.
    pub fn build<P: BoundedPath>(&self, paths: &[P]) -> Grid<P> {
        let bounds = compute_bounds(paths);
        let (zero_x, zero_y) = self.zero(&bounds);
        let (step_x, step_y) = self.steps(&bounds);

        let row_offset = self
            .y_count
            .checked_sub(1)
            .map(|last_j| zero_y + last_j as f64 * step_y);

        let rows = paths
            .iter()
            .map(|path| match row_offset {
                Some(y) => (0..self.x_count)
                    .map(|i| GridCell {
                        path: path.clone(),
                        x: zero_x + i as f64 * step_x,
                        y,
                    })
                    .collect(),
                None => Vec::new(),
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            "Built grid with {} rows of {} cells from {} paths",
            rows.len(),
            if row_offset.is_some() { self.x_count } else { 0 },
            paths.len()
        );

        Grid { rows }
    }

    /// Build the expanded grid: one row per `(path, column)` pair, each with
    /// `y_count` cells stepping down by row index.
    pub fn build_expanded<P: BoundedPath>(&self, paths: &[P]) -> Grid<P> {
        let bounds = compute_bounds(paths);
        let (zero_x, zero_y) = self.zero(&bounds);
        let (step_x, step_y) = self.steps(&bounds);

        let mut rows = Vec::with_capacity(paths.len() * self.x_count);
        for path in paths {
            for i in 0..self.x_count {
                let x = zero_x + i as f64 * step_x;
                let row = (0..self.y_count)
                    .map(|j| GridCell {
                        path: path.clone(),
                        x,
                        y: zero_y + j as f64 * step_y,
                    })
                    .collect();
                rows.push(row);
            }
        }

        tracing::debug!(
            "Built expanded grid with {} rows of {} cells from {} paths",
            rows.len(),
            self.y_count,
            paths.len()
        );

        Grid { rows }
    }
}

/// Lay `paths` out in a grid. See [`GridLayout::build`].
pub fn make_grid<P: BoundedPath>(
    paths: &[P],
    x_offset: f64,
    y_offset: f64,
    x_count: usize,
    y_count: usize,
    x_pad: f64,
    y_pad: f64,
) -> Grid<P> {
    GridLayout {
        x_offset,
        y_offset,
        x_count,
        y_count,
        x_pad,
        y_pad,
    }
    .build(paths)
}

/// Lay `paths` out with one cell per `(column, row)` pair. See
/// [`GridLayout::build_expanded`].
pub fn make_grid_expanded<P: BoundedPath>(
    paths: &[P],
    x_offset: f64,
    y_offset: f64,
    x_count: usize,
    y_count: usize,
    x_pad: f64,
    y_pad: f64,
) -> Grid<P> {
    GridLayout {
        x_offset,
        y_offset,
        x_count,
        y_count,
        x_pad,
        y_pad,
    }
    .build_expanded(paths)
}
