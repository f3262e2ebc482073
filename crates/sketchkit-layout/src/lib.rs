//! # SketchKit Layout
//!
//! Pure geometry for sketches: nothing in this crate touches a drawing
//! backend.
//!
//! ## Core Components
//!
//! - **Bounds**: aggregate axis-aligned bounds over any [`BoundedPath`]
//! - **Grid**: translated grids of path copies, tagged with the absolute
//!   position each copy should be drawn at
//! - **Path**: [`SketchPath`], a lyon path with bounds and transforms
//! - **Motifs**: sine bars, plane paths, clouds and planets
//!
//! ## Usage
//!
//! ```rust
//! use sketchkit_layout::{make_grid, SketchPath};
//!
//! let tile = SketchPath::rectangle(0.0, 0.0, 10.0, 10.0);
//! let grid = make_grid(&[tile], 0.0, 0.0, 3, 1, 2.0, 0.0);
//!
//! let xs: Vec<f64> = grid.rows()[0].iter().map(|cell| cell.x).collect();
//! assert_eq!(xs, vec![0.0, 12.0, 24.0]);
//! ```

pub mod bounds;
pub mod grid;
pub mod motifs;
pub mod path;

pub use bounds::{compute_bounds, compute_zero_offset, BoundedPath};
pub use grid::{make_grid, make_grid_expanded, Grid, GridCell, GridLayout};
pub use motifs::{Cloud, PlanePaths, Planet, SineBars};
pub use path::SketchPath;
