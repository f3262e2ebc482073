use lyon::path::Path;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sketchkit_core::{Color, DrawStyle, Palette, Point};
use sketchkit_layout::{make_grid, BoundedPath, Cloud, SineBars, SketchPath};
use sketchkit_render::{
    draw_clouds, draw_sine_bars, fill_background, render_grid, RenderContext, SkiaContext,
    SvgContext,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Save,
    Restore,
    Translate(f64, f64),
    Fill(Option<Color>),
    Stroke(Option<Color>),
    Draw,
}

#[derive(Default)]
struct RecordingContext {
    calls: Vec<Call>,
}

impl RenderContext for RecordingContext {
    fn size(&self) -> (f64, f64) {
        (100.0, 100.0)
    }

    fn save(&mut self) {
        self.calls.push(Call::Save);
    }

    fn restore(&mut self) {
        self.calls.push(Call::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.calls.push(Call::Translate(dx, dy));
    }

    fn set_fill(&mut self, color: Option<Color>) {
        self.calls.push(Call::Fill(color));
    }

    fn set_stroke(&mut self, color: Option<Color>, _width: f64) {
        self.calls.push(Call::Stroke(color));
    }

    fn draw_path(&mut self, _path: &Path) {
        self.calls.push(Call::Draw);
    }
}

fn red() -> Color {
    Color::rgb(255, 0, 0)
}

fn blue() -> Color {
    Color::rgb(0, 0, 255)
}

#[test]
fn test_render_grid_call_sequence() {
    let tile = SketchPath::rectangle(0.0, 0.0, 10.0, 10.0);
    let grid = make_grid(&[tile.clone(), tile], 0.0, 0.0, 2, 1, 5.0, 0.0);
    let style = DrawStyle::default().with_palette(Palette::new(vec![red(), blue()]));

    let mut ctx = RecordingContext::default();
    render_grid(&mut ctx, &grid, &style);

    let expected = vec![
        Call::Save,
        Call::Translate(0.0, 0.0),
        Call::Fill(Some(red())),
        Call::Draw,
        Call::Restore,
        Call::Save,
        Call::Translate(15.0, 0.0),
        Call::Fill(Some(red())),
        Call::Draw,
        Call::Restore,
        Call::Save,
        Call::Translate(0.0, 0.0),
        Call::Fill(Some(blue())),
        Call::Draw,
        Call::Restore,
        Call::Save,
        Call::Translate(15.0, 0.0),
        Call::Fill(Some(blue())),
        Call::Draw,
        Call::Restore,
    ];
    assert_eq!(ctx.calls, expected);
}

#[test]
fn test_motif_drawing_is_balanced() {
    let mut ctx = RecordingContext::default();
    let mut rng = StdRng::seed_from_u64(9);
    let style = DrawStyle::default();

    draw_sine_bars(&mut ctx, &SineBars::default(), &style, &mut rng);
    draw_clouds(&mut ctx, &[Cloud::default()], &style, &mut rng);

    let saves = ctx.calls.iter().filter(|c| **c == Call::Save).count();
    let restores = ctx.calls.iter().filter(|c| **c == Call::Restore).count();
    let draws = ctx.calls.iter().filter(|c| **c == Call::Draw).count();
    assert_eq!(saves, restores);
    assert_eq!(draws, SineBars::default().bar_count + 1);
}

#[test]
fn test_grid_renders_to_pixels() {
    let mut ctx = SkiaContext::new(60, 20).unwrap();
    fill_background(&mut ctx, Color::BLACK);

    let tile = SketchPath::rectangle(0.0, 0.0, 10.0, 10.0);
    let grid = make_grid(&[tile], 5.0, 5.0, 3, 1, 10.0, 0.0);
    let style = DrawStyle::default().with_palette(Palette::new(vec![Color::WHITE]));
    render_grid(&mut ctx, &grid, &style);

    // Cells at x = 5, 25, 45, gaps in between.
    assert_eq!(ctx.pixel(10, 10), Some(Color::WHITE));
    assert_eq!(ctx.pixel(30, 10), Some(Color::WHITE));
    assert_eq!(ctx.pixel(50, 10), Some(Color::WHITE));
    assert_eq!(ctx.pixel(20, 10), Some(Color::BLACK));
    assert_eq!(ctx.pixel(2, 2), Some(Color::BLACK));
}

#[test]
fn test_svg_document_for_cloud_grid() {
    let cloud = Cloud {
        center: Point::new(30.0, 20.0),
        ..Cloud::default()
    }
    .path(&mut StdRng::seed_from_u64(5));
    let bounds = cloud.bounds();
    let grid = make_grid(&[cloud], 0.0, 0.0, 2, 2, 4.0, 4.0);

    let mut ctx = SvgContext::new(2.0 * bounds.width() + 4.0, 2.0 * bounds.height() + 4.0);
    render_grid(&mut ctx, &grid, &DrawStyle::default());
    let doc = ctx.finish();

    assert_eq!(doc.matches("<path ").count(), 2);
    assert!(doc.contains("fill-rule=\"nonzero\""));
}
