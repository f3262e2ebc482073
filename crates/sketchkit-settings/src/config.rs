//! Sketch configuration
//!
//! Describes one sketch: the canvas, the drawing style, an optional grid
//! layout, the motifs to draw, the random seed and the output file. Loaded
//! from and saved to JSON or TOML, chosen by file extension.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use sketchkit_core::{Color, DrawStyle, Point};
use sketchkit_layout::{Cloud, GridLayout, PlanePaths, Planet, SineBars};
use std::path::{Path, PathBuf};

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "sketchkit";
/// File name of the default sketch config.
pub const CONFIG_FILE_NAME: &str = "sketch.toml";

/// Canvas size and background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    pub background: Color,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::rgb(0x0b, 0x13, 0x2b),
        }
    }
}

/// One motif entry of a sketch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotifSettings {
    SineBars(SineBars),
    PlanePaths(PlanePaths),
    Clouds { clouds: Vec<Cloud> },
    Planet(Planet),
}

impl MotifSettings {
    /// Config name of this motif kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SineBars(_) => "sine_bars",
            Self::PlanePaths(_) => "plane_paths",
            Self::Clouds { .. } => "clouds",
            Self::Planet(_) => "planet",
        }
    }

    /// Every float parameter of the motif, keyed by its path inside the
    /// motif entry.
    pub fn numeric_fields(&self) -> Vec<(String, f64)> {
        fn point(prefix: &str, p: &Point) -> [(String, f64); 2] {
            [(format!("{prefix}.x"), p.x), (format!("{prefix}.y"), p.y)]
        }

        let mut fields = Vec::new();
        match self {
            Self::SineBars(bars) => {
                fields.extend(point("origin", &bars.origin));
                fields.extend([
                    ("bar_width".to_string(), bars.bar_width),
                    ("gap".to_string(), bars.gap),
                    ("amplitude".to_string(), bars.amplitude),
                    ("frequency".to_string(), bars.frequency),
                    ("phase".to_string(), bars.phase),
                ]);
            }
            Self::PlanePaths(trails) => {
                fields.extend(point("origin", &trails.origin));
                fields.extend([
                    ("length".to_string(), trails.length),
                    ("spacing".to_string(), trails.spacing),
                    ("growth".to_string(), trails.growth),
                ]);
            }
            Self::Clouds { clouds } => {
                for (j, cloud) in clouds.iter().enumerate() {
                    let prefix = format!("clouds[{j}]");
                    fields.extend(point(&format!("{prefix}.center"), &cloud.center));
                    fields.extend([
                        (format!("{prefix}.width"), cloud.width),
                        (format!("{prefix}.height"), cloud.height),
                        (format!("{prefix}.min_radius"), cloud.min_radius),
                        (format!("{prefix}.max_radius"), cloud.max_radius),
                    ]);
                }
            }
            Self::Planet(planet) => {
                fields.extend(point("center", &planet.center));
                fields.extend([
                    ("rx".to_string(), planet.rx),
                    ("ry".to_string(), planet.ry),
                    ("tint_offset".to_string(), planet.tint_offset),
                ]);
            }
        }
        fields
    }
}

/// Complete sketch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Seed for every random choice in the sketch
    pub seed: u64,
    /// PNG file written by the renderer
    pub output: PathBuf,
    pub canvas: CanvasSettings,
    pub style: DrawStyle,
    /// When set, all motif paths are repeated in this grid
    pub grid: Option<GridLayout>,
    pub motifs: Vec<MotifSettings>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            output: PathBuf::from("sketch.png"),
            canvas: CanvasSettings::default(),
            style: DrawStyle::default(),
            grid: None,
            motifs: vec![
                MotifSettings::Planet(Planet {
                    center: Point::new(600.0, 150.0),
                    rx: 80.0,
                    ry: 80.0,
                    tint_offset: 0.25,
                }),
                MotifSettings::Clouds {
                    clouds: vec![
                        Cloud {
                            center: Point::new(200.0, 120.0),
                            ..Cloud::default()
                        },
                        Cloud {
                            center: Point::new(450.0, 220.0),
                            ..Cloud::default()
                        },
                    ],
                },
                MotifSettings::PlanePaths(PlanePaths {
                    origin: Point::new(80.0, 420.0),
                    length: 320.0,
                    ..PlanePaths::default()
                }),
                MotifSettings::SineBars(SineBars {
                    origin: Point::new(100.0, 580.0),
                    ..SineBars::default()
                }),
            ],
        }
    }
}

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl SketchConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform location of the default config file
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!(
            "Loaded sketch config from {} ({} motifs)",
            path.display(),
            config.motifs.len()
        );
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = Format::from_path(path)?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Saved sketch config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SettingsError::invalid(
                "canvas",
                format!(
                    "size must be positive, got {}x{}",
                    self.canvas.width, self.canvas.height
                ),
            ));
        }

        if self.style.palette.is_empty() {
            return Err(SettingsError::invalid(
                "style.palette",
                "must contain at least one color",
            ));
        }

        let range = self.style.round_range;
        if !range.is_valid() {
            return Err(SettingsError::invalid(
                "style.round_range",
                format!(
                    "must satisfy 0 <= min <= max <= 1, got [{}, {}]",
                    range.min, range.max
                ),
            ));
        }

        if !self.style.tilt.is_finite() {
            return Err(SettingsError::invalid("style.tilt", "must be finite"));
        }

        if !(self.style.stroke_width.is_finite() && self.style.stroke_width >= 0.0) {
            return Err(SettingsError::invalid(
                "style.stroke_width",
                "must be a finite non-negative number",
            ));
        }

        if let Some(grid) = &self.grid {
            let values = [grid.x_offset, grid.y_offset, grid.x_pad, grid.y_pad];
            if values.iter().any(|v| !v.is_finite()) {
                return Err(SettingsError::invalid(
                    "grid",
                    "offsets and paddings must be finite",
                ));
            }
        }

        // Geometry builders and rng ranges panic on NaN and infinity.
        for (i, motif) in self.motifs.iter().enumerate() {
            if let Some((field, _)) = motif
                .numeric_fields()
                .into_iter()
                .find(|(_, value)| !value.is_finite())
            {
                return Err(SettingsError::invalid(
                    format!("motifs[{i}].{field}"),
                    "must be finite",
                ));
            }
        }

        Ok(())
    }
}
