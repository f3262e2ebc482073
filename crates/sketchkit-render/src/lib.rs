//! # SketchKit Render
//!
//! Drawing contexts and the functions that draw grids and motifs onto them.
//!
//! Drawing code only sees the [`RenderContext`] trait. Two backends ship
//! with the crate:
//!
//! - [`SkiaContext`]: raster output through tiny-skia, saved as PNG
//! - [`SvgContext`]: SVG markup
//!
//! ```rust
//! use sketchkit_core::DrawStyle;
//! use sketchkit_layout::{make_grid, SketchPath};
//! use sketchkit_render::{render_grid, SvgContext};
//!
//! let tile = SketchPath::rectangle(0.0, 0.0, 10.0, 10.0);
//! let grid = make_grid(&[tile], 0.0, 0.0, 3, 1, 2.0, 0.0);
//!
//! let mut ctx = SvgContext::new(40.0, 10.0);
//! render_grid(&mut ctx, &grid, &DrawStyle::default());
//! assert_eq!(ctx.element_count(), 3);
//! ```

pub mod context;
pub mod draw;
pub mod grid_render;
pub mod skia;
pub mod svg;

pub use context::{fill_background, with_saved_state, DrawState, RenderContext, StateStack};
pub use draw::{
    draw_clouds, draw_plane_paths, draw_planet, draw_sine_bars, draw_styled, styled_clouds,
    styled_plane_paths, styled_planet, styled_sine_bars, StyledPath,
};
pub use grid_render::{render_grid, Drawable};
pub use skia::SkiaContext;
pub use svg::SvgContext;
