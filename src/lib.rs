//! # SketchKit
//!
//! Procedural layout and motif helpers for generative-art sketches:
//! - Aggregate bounds and zero offsets over sets of paths
//! - Translated grids of path copies
//! - Sine bars, plane paths, clouds and planets drawn through an injected
//!   drawing context
//!
//! ## Architecture
//!
//! SketchKit is organized as a workspace with multiple crates:
//!
//! 1. **sketchkit-core** - Geometry primitives, colors, style, errors
//! 2. **sketchkit-layout** - Bounds, grid layout, paths, motif geometry
//! 3. **sketchkit-render** - Drawing contexts (tiny-skia, SVG) and drawing
//! 4. **sketchkit-settings** - Sketch configuration files
//! 5. **sketchkit** - Scene composition and the main binary

pub mod scene;

pub use sketchkit_core::{
    BoundingBox, Color, DrawStyle, Error, Palette, Point, RenderError, Result, RoundRange, Size,
};
pub use sketchkit_layout::{
    compute_bounds, compute_zero_offset, make_grid, make_grid_expanded, BoundedPath, Cloud, Grid,
    GridCell, GridLayout, PlanePaths, Planet, SineBars, SketchPath,
};
pub use sketchkit_render::{
    render_grid, with_saved_state, RenderContext, SkiaContext, StyledPath, SvgContext,
};
pub use sketchkit_settings::{CanvasSettings, MotifSettings, SettingsError, SketchConfig};

pub use scene::{render_scene, render_to_file};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
