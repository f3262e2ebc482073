//! # SketchKit Core
//!
//! Core types shared by every SketchKit crate: geometry values, colors,
//! the explicit drawing style, and the error types used at I/O boundaries.

pub mod color;
pub mod error;
pub mod geometry;
pub mod style;

pub use color::{Color, Palette, ParseColorError};
pub use error::{Error, RenderError, Result};
pub use geometry::{BoundingBox, Point, Size};
pub use style::{DrawStyle, RoundRange};
