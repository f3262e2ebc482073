//! # Motif Drawing
//!
//! Applies a [`DrawStyle`] to motif geometry and draws the result.
//!
//! Each motif has a `styled_*` function returning [`StyledPath`]s (geometry
//! plus paint, tilt already applied) and a `draw_*` function that draws those
//! onto a context. Tilt rotates a motif about the center of its bounds.

use crate::context::{with_saved_state, RenderContext};
use rand::Rng;
use sketchkit_core::{Color, DrawStyle};
use sketchkit_layout::{compute_bounds, BoundedPath, Cloud, PlanePaths, Planet, SineBars, SketchPath};

/// Amount the planet tint is mixed toward white.
const TINT_LIGHTEN: f64 = 0.35;
/// Planet tint alpha (60%).
const TINT_ALPHA: u8 = 153;

/// A path and the paint it is drawn with.
#[derive(Debug, Clone)]
pub struct StyledPath {
    pub path: SketchPath,
    pub fill: Option<Color>,
    pub stroke: Option<(Color, f64)>,
}

impl StyledPath {
    pub fn filled(path: SketchPath, color: Color) -> Self {
        Self {
            path,
            fill: Some(color),
            stroke: None,
        }
    }

    pub fn stroked(path: SketchPath, color: Color, width: f64) -> Self {
        Self {
            path,
            fill: None,
            stroke: Some((color, width)),
        }
    }
}

impl BoundedPath for StyledPath {
    fn bounds(&self) -> sketchkit_core::BoundingBox {
        self.path.bounds()
    }
}

/// Rotate every path by `tilt` degrees about the center of their joint
/// bounds.
fn apply_tilt(paths: Vec<StyledPath>, tilt: f64) -> Vec<StyledPath> {
    if tilt == 0.0 || paths.is_empty() {
        return paths;
    }
    let center = compute_bounds(&paths).center();
    paths
        .into_iter()
        .map(|sp| StyledPath {
            path: sp.path.rotated(tilt, center),
            ..sp
        })
        .collect()
}

/// Draw styled paths, each in its own saved state.
pub fn draw_styled(ctx: &mut dyn RenderContext, paths: &[StyledPath]) {
    for sp in paths {
        with_saved_state(ctx, |ctx| {
            ctx.set_fill(sp.fill);
            match sp.stroke {
                Some((color, width)) => ctx.set_stroke(Some(color), width),
                None => ctx.set_stroke(None, 0.0),
            }
            ctx.draw_path(sp.path.path());
        });
    }
}

/// Bars filled by palette index, each with a roundness drawn from the
/// style's range.
pub fn styled_sine_bars<R: Rng>(params: &SineBars, style: &DrawStyle, rng: &mut R) -> Vec<StyledPath> {
    let range = style.round_range;
    let bars = params.bars(|_| range.lerp(rng.gen::<f64>()));
    let styled = bars
        .into_iter()
        .enumerate()
        .map(|(i, bar)| StyledPath::filled(bar, style.palette.get(i)))
        .collect();
    apply_tilt(styled, style.tilt)
}

/// Open trails stroked by palette index.
pub fn styled_plane_paths(params: &PlanePaths, style: &DrawStyle) -> Vec<StyledPath> {
    let styled = params
        .paths()
        .into_iter()
        .enumerate()
        .map(|(k, trail)| StyledPath::stroked(trail, style.palette.get(k), style.stroke_width))
        .collect();
    apply_tilt(styled, style.tilt)
}

/// One filled blob per cloud, in the palette's last color. Each cloud is
/// tilted about its own center.
pub fn styled_clouds<R: Rng>(clouds: &[Cloud], style: &DrawStyle, rng: &mut R) -> Vec<StyledPath> {
    let color = style.palette.last();
    clouds
        .iter()
        .flat_map(|cloud| {
            let blob = StyledPath::filled(cloud.path(rng), color);
            apply_tilt(vec![blob], style.tilt)
        })
        .collect()
}

/// Body in the palette's first color, then a lighter translucent tint.
pub fn styled_planet(planet: &Planet, style: &DrawStyle) -> Vec<StyledPath> {
    let (body, tint) = planet.paths();
    let body_color = style.palette.get(0);
    let tint_color = body_color.lighten(TINT_LIGHTEN).with_alpha(TINT_ALPHA);
    apply_tilt(
        vec![
            StyledPath::filled(body, body_color),
            StyledPath::filled(tint, tint_color),
        ],
        style.tilt,
    )
}

pub fn draw_sine_bars<R: Rng>(
    ctx: &mut dyn RenderContext,
    params: &SineBars,
    style: &DrawStyle,
    rng: &mut R,
) {
    let paths = styled_sine_bars(params, style, rng);
    tracing::debug!("Drawing {} sine bars", paths.len());
    draw_styled(ctx, &paths);
}

pub fn draw_plane_paths(ctx: &mut dyn RenderContext, params: &PlanePaths, style: &DrawStyle) {
    let paths = styled_plane_paths(params, style);
    tracing::debug!("Drawing {} plane paths", paths.len());
    draw_styled(ctx, &paths);
}

pub fn draw_clouds<R: Rng>(
    ctx: &mut dyn RenderContext,
    clouds: &[Cloud],
    style: &DrawStyle,
    rng: &mut R,
) {
    let paths = styled_clouds(clouds, style, rng);
    tracing::debug!("Drawing {} clouds", paths.len());
    draw_styled(ctx, &paths);
}

pub fn draw_planet(ctx: &mut dyn RenderContext, planet: &Planet, style: &DrawStyle) {
    draw_styled(ctx, &styled_planet(planet, style));
}
