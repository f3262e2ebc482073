//! The drawing capability handed to every drawing function.
//!
//! Backends implement [`RenderContext`]; geometry code never names a backend.
//! State (translation, fill, stroke) is saved and restored as a stack so a
//! caller can scope its changes with [`with_saved_state`].

use lyon::path::Path;
use sketchkit_core::Color;

pub trait RenderContext {
    /// Canvas size in pixels.
    fn size(&self) -> (f64, f64);

    /// Push the current state.
    fn save(&mut self);

    /// Pop to the last saved state. Does nothing when nothing was saved.
    fn restore(&mut self);

    /// Move the origin of subsequent draws by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);

    fn set_fill(&mut self, color: Option<Color>);

    fn set_stroke(&mut self, color: Option<Color>, width: f64);

    /// Fill then stroke `path` with the current state.
    fn draw_path(&mut self, path: &Path);
}

/// Run `f` between a `save` and the matching `restore`.
pub fn with_saved_state<C, T, F>(ctx: &mut C, f: F) -> T
where
    C: RenderContext + ?Sized,
    F: FnOnce(&mut C) -> T,
{
    ctx.save();
    let out = f(ctx);
    ctx.restore();
    out
}

/// Cover the whole canvas with `color`.
pub fn fill_background(ctx: &mut dyn RenderContext, color: Color) {
    let (width, height) = ctx.size();
    let mut builder = Path::builder();
    builder.add_rectangle(
        &lyon::math::Box2D::new(
            lyon::math::point(0.0, 0.0),
            lyon::math::point(width as f32, height as f32),
        ),
        lyon::path::Winding::Positive,
    );
    let rect = builder.build();
    with_saved_state(ctx, |ctx| {
        ctx.set_fill(Some(color));
        ctx.set_stroke(None, 0.0);
        ctx.draw_path(&rect);
    });
}

/// Translation, fill and stroke in effect for the next draw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DrawState {
    pub dx: f64,
    pub dy: f64,
    pub fill: Option<Color>,
    pub stroke: Option<(Color, f64)>,
}

/// Save/restore stack shared by the backends.
#[derive(Debug, Clone, Default)]
pub struct StateStack {
    current: DrawState,
    saved: Vec<DrawState>,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &DrawState {
        &self.current
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub fn restore(&mut self) {
        match self.saved.pop() {
            Some(state) => self.current = state,
            None => tracing::debug!("restore() without matching save(), ignoring"),
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.current.dx += dx;
        self.current.dy += dy;
    }

    pub fn set_fill(&mut self, color: Option<Color>) {
        self.current.fill = color;
    }

    pub fn set_stroke(&mut self, color: Option<Color>, width: f64) {
        self.current.stroke = color.map(|c| (c, width));
    }
}
