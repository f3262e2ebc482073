//! Scene composition
//!
//! Turns a [`SketchConfig`] into drawing calls on a [`RenderContext`]. All
//! randomness comes from one `StdRng` seeded with `config.seed`, so a config
//! always renders the same picture.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sketchkit_layout::SketchPath;
use sketchkit_render::{
    draw_clouds, draw_plane_paths, draw_planet, draw_sine_bars, fill_background, render_grid,
    styled_clouds, styled_plane_paths, styled_planet, styled_sine_bars, RenderContext,
    SkiaContext, StyledPath, SvgContext,
};
use sketchkit_settings::{MotifSettings, SketchConfig};

/// Draw the configured sketch onto `ctx`.
///
/// The canvas is cleared to the background first. Without a grid each motif
/// is drawn in order with its own paint. With a grid, every motif path is
/// collected and the whole set is repeated through the grid, filled by
/// palette row.
pub fn render_scene(config: &SketchConfig, ctx: &mut dyn RenderContext) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let style = &config.style;

    fill_background(ctx, config.canvas.background);

    match &config.grid {
        None => {
            for motif in &config.motifs {
                match motif {
                    MotifSettings::SineBars(params) => draw_sine_bars(ctx, params, style, &mut rng),
                    MotifSettings::PlanePaths(params) => draw_plane_paths(ctx, params, style),
                    MotifSettings::Clouds { clouds } => draw_clouds(ctx, clouds, style, &mut rng),
                    MotifSettings::Planet(planet) => draw_planet(ctx, planet, style),
                }
            }
            tracing::info!("Rendered {} motifs", config.motifs.len());
        }
        Some(layout) => {
            let paths: Vec<SketchPath> = config
                .motifs
                .iter()
                .flat_map(|motif| styled_motif(motif, config, &mut rng))
                .map(|styled| styled.path)
                .collect();
            let grid = layout.build(&paths);
            render_grid(ctx, &grid, style);
            tracing::info!(
                "Rendered {} motif paths through a {}x{} grid ({} cells)",
                paths.len(),
                layout.x_count,
                layout.y_count,
                grid.cell_count()
            );
        }
    }
}

fn styled_motif(motif: &MotifSettings, config: &SketchConfig, rng: &mut StdRng) -> Vec<StyledPath> {
    let style = &config.style;
    match motif {
        MotifSettings::SineBars(params) => styled_sine_bars(params, style, rng),
        MotifSettings::PlanePaths(params) => styled_plane_paths(params, style),
        MotifSettings::Clouds { clouds } => styled_clouds(clouds, style, rng),
        MotifSettings::Planet(planet) => styled_planet(planet, style),
    }
}

/// Render the sketch to `config.output`: SVG for a `.svg` extension, PNG
/// otherwise.
pub fn render_to_file(config: &SketchConfig) -> anyhow::Result<()> {
    let output = &config.output;
    let is_svg = output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let mut ctx = SvgContext::new(config.canvas.width as f64, config.canvas.height as f64);
        render_scene(config, &mut ctx);
        std::fs::write(output, ctx.finish())?;
        tracing::info!("Wrote {}", output.display());
    } else {
        let mut ctx = SkiaContext::new(config.canvas.width, config.canvas.height)?;
        render_scene(config, &mut ctx);
        ctx.save_png(output)?;
    }
    Ok(())
}
