//! Raster backend
//! Renders into a tiny-skia pixmap and writes PNG files.
//!
//! Features:
//! - Anti-aliased fills and strokes
//! - Non-zero fill rule, so compound paths render as their union
//! - Translation-only state stack

use crate::context::{RenderContext, StateStack};
use lyon::path::{Event, Path};
use sketchkit_core::{Color, RenderError, Result};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Drawing context backed by a `tiny_skia::Pixmap`.
pub struct SkiaContext {
    pixmap: Pixmap,
    state: StateStack,
}

impl SkiaContext {
    /// Allocate a transparent canvas.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::InvalidCanvas { width, height })?;
        tracing::debug!("Allocated {}x{} raster canvas", width, height);
        Ok(Self {
            pixmap,
            state: StateStack::new(),
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Color at pixel `(x, y)`, un-premultiplied.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(c.red(), c.green(), c.blue(), c.alpha()))
    }

    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let bytes = self.pixmap.encode_png().map_err(|e| RenderError::Encode {
            reason: e.to_string(),
        })?;
        Ok(bytes)
    }

    /// Write the canvas to `path` as PNG.
    pub fn save_png(&self, path: &std::path::Path) -> Result<()> {
        let bytes = self.encode_png()?;
        std::fs::write(path, bytes)?;
        tracing::info!("Wrote {}", path.display());
        Ok(())
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Convert a lyon path into a tiny-skia path. Empty or degenerate paths give
/// `None`.
pub fn to_skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => pb.move_to(at.x, at.y),
            Event::Line { to, .. } => pb.line_to(to.x, to.y),
            Event::Quadratic { ctrl, to, .. } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y),
            Event::End { close, .. } => {
                if close {
                    pb.close();
                }
            }
        }
    }
    pb.finish()
}

impl RenderContext for SkiaContext {
    fn size(&self) -> (f64, f64) {
        (self.pixmap.width() as f64, self.pixmap.height() as f64)
    }

    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.state.translate(dx, dy);
    }

    fn set_fill(&mut self, color: Option<Color>) {
        self.state.set_fill(color);
    }

    fn set_stroke(&mut self, color: Option<Color>, width: f64) {
        self.state.set_stroke(color, width);
    }

    fn draw_path(&mut self, path: &Path) {
        let Some(skia_path) = to_skia_path(path) else {
            tracing::trace!("Skipping empty or degenerate path");
            return;
        };

        let state = *self.state.current();
        let transform = Transform::from_translate(state.dx as f32, state.dy as f32);

        if let Some(fill) = state.fill {
            self.pixmap.fill_path(
                &skia_path,
                &paint_for(fill),
                FillRule::Winding,
                transform,
                None,
            );
        }

        if let Some((color, width)) = state.stroke {
            let stroke = Stroke {
                width: width as f32,
                ..Default::default()
            };
            self.pixmap
                .stroke_path(&skia_path, &paint_for(color), &stroke, transform, None);
        }
    }
}
