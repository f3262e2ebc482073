//! # Motif Geometry
//!
//! Procedural generators for the decorative motifs:
//! - Sine bars (a bar chart whose heights follow a sine wave)
//! - Plane paths (parallel logarithmic trails)
//! - Clouds (a base ellipse with circular puffs, filled as one union)
//! - Planets (a body ellipse plus an offset tint ellipse)
//!
//! Generators only produce geometry. Colors, tilt and roundness ranges are
//! applied by the drawing layer.

use rand::Rng;
use serde::{Deserialize, Serialize};
use sketchkit_core::Point;

use crate::path::SketchPath;

/// Parameters for a row of sine-shaped bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SineBars {
    /// Left end of the baseline
    pub origin: Point,
    pub bar_count: usize,
    pub bar_width: f64,
    /// Horizontal gap between bars
    pub gap: f64,
    /// Height of a bar at the crest of the wave
    pub amplitude: f64,
    /// Phase advance per bar, in radians
    pub frequency: f64,
    /// Phase of the first bar, in radians
    pub phase: f64,
}

impl Default for SineBars {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 100.0),
            bar_count: 24,
            bar_width: 8.0,
            gap: 4.0,
            amplitude: 80.0,
            frequency: 0.4,
            phase: 0.0,
        }
    }
}

impl SineBars {
    /// Height of bar `index`, in `[0, amplitude]`.
    pub fn bar_height(&self, index: usize) -> f64 {
        self.amplitude * (1.0 + (self.phase + index as f64 * self.frequency).sin()) / 2.0
    }

    /// Build the bars. `roundness(i)` gives bar `i`'s corner roundness as a
    /// fraction of half its smaller side.
    pub fn bars(&self, mut roundness: impl FnMut(usize) -> f64) -> Vec<SketchPath> {
        (0..self.bar_count)
            .map(|i| {
                let height = self.bar_height(i);
                let x = self.origin.x + i as f64 * (self.bar_width + self.gap);
                let y = self.origin.y - height;
                let r = roundness(i).clamp(0.0, 1.0) * self.bar_width.min(height) / 2.0;
                SketchPath::rounded_rectangle(x, y, self.bar_width, height, r)
            })
            .collect()
    }
}

/// Parameters for a set of logarithmic trails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanePaths {
    pub origin: Point,
    /// Number of trails
    pub count: usize,
    /// Horizontal length of each trail
    pub length: f64,
    /// Vertical distance between neighbouring trails
    pub spacing: f64,
    /// Vertical scale of the logarithmic rise
    pub growth: f64,
    /// Segments per trail
    pub samples: usize,
}

impl Default for PlanePaths {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            count: 3,
            length: 200.0,
            spacing: 6.0,
            growth: 20.0,
            samples: 64,
        }
    }
}

impl PlanePaths {
    /// Sample points of trail `index`.
    pub fn trail_points(&self, index: usize) -> Vec<Point> {
        if self.samples == 0 {
            return Vec::new();
        }
        let base_y = self.origin.y + index as f64 * self.spacing;
        (0..=self.samples)
            .map(|s| {
                let x = self.length * s as f64 / self.samples as f64;
                Point::new(self.origin.x + x, base_y - self.growth * x.ln_1p())
            })
            .collect()
    }

    /// Build the open trails. `samples == 0` yields none.
    pub fn paths(&self) -> Vec<SketchPath> {
        if self.samples == 0 {
            return Vec::new();
        }
        (0..self.count)
            .map(|k| SketchPath::polyline(&self.trail_points(k), false))
            .collect()
    }
}

/// Parameters for a cloud blob
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cloud {
    pub center: Point,
    /// Width of the base ellipse
    pub width: f64,
    /// Height of the base ellipse
    pub height: f64,
    /// Number of circular puffs
    pub puffs: usize,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl Default for Cloud {
    fn default() -> Self {
        Self {
            center: Point::new(100.0, 60.0),
            width: 120.0,
            height: 40.0,
            puffs: 5,
            min_radius: 14.0,
            max_radius: 26.0,
        }
    }
}

impl Cloud {
    /// Build the compound cloud path.
    pub fn path<R: Rng>(&self, rng: &mut R) -> SketchPath {
        let mut parts = Vec::with_capacity(self.puffs + 1);
        parts.push(SketchPath::ellipse(
            self.center,
            self.width / 2.0,
            self.height / 2.0,
            0.0,
        ));

        let (lo, hi) = if self.min_radius <= self.max_radius {
            (self.min_radius, self.max_radius)
        } else {
            (self.max_radius, self.min_radius)
        };
        let jitter = self.height.abs() / 4.0;

        for i in 0..self.puffs {
            let t = if self.puffs == 1 {
                0.5
            } else {
                i as f64 / (self.puffs - 1) as f64
            };
            let cx = self.center.x - self.width / 2.0 + self.width * t;
            let cy = self.center.y + rng.gen_range(-jitter..=jitter);
            let radius = rng.gen_range(lo..=hi);
            parts.push(SketchPath::circle(Point::new(cx, cy), radius));
        }

        SketchPath::compound(&parts)
    }
}

/// Parameters for a tinted planet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Planet {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    /// How far the tint is pushed toward the upper-left, as a fraction of the
    /// radii. Clamped to `[0, 1)`.
    pub tint_offset: f64,
}

impl Default for Planet {
    fn default() -> Self {
        Self {
            center: Point::new(100.0, 100.0),
            rx: 50.0,
            ry: 50.0,
            tint_offset: 0.2,
        }
    }
}

impl Planet {
    /// Build `(body, tint)`.
    pub fn paths(&self) -> (SketchPath, SketchPath) {
        let offset = self.tint_offset.clamp(0.0, 1.0 - f64::EPSILON);
        let body = SketchPath::ellipse(self.center, self.rx, self.ry, 0.0);
        let tint = SketchPath::ellipse(
            self.center.offset(-self.rx * offset, -self.ry * offset),
            self.rx * (1.0 - offset),
            self.ry * (1.0 - offset),
            0.0,
        );
        (body, tint)
    }
}
