//! Drawing style passed explicitly to every drawing function.

use crate::color::Palette;
use serde::{Deserialize, Serialize};

/// Inclusive range of corner roundness, each end a fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundRange {
    pub min: f64,
    pub max: f64,
}

impl RoundRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range that always yields `value`.
    pub fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.min) && (0.0..=1.0).contains(&self.max) && self.min <= self.max
    }

    /// Map `t` in `[0, 1]` onto the range.
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + (self.max - self.min) * t.clamp(0.0, 1.0)
    }
}

impl Default for RoundRange {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Palette, tilt and roundness for a drawing pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawStyle {
    #[serde(default)]
    pub palette: Palette,
    /// Rotation applied to motifs, in degrees
    #[serde(default)]
    pub tilt: f64,
    #[serde(default)]
    pub round_range: RoundRange,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

fn default_stroke_width() -> f64 {
    2.0
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            tilt: 0.0,
            round_range: RoundRange::default(),
            stroke_width: default_stroke_width(),
        }
    }
}

impl DrawStyle {
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_tilt(mut self, degrees: f64) -> Self {
        self.tilt = degrees;
        self
    }

    pub fn with_round_range(mut self, range: RoundRange) -> Self {
        self.round_range = range;
        self
    }
}
