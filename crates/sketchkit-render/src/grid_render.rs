//! Drawing a laid-out grid onto a context.

use crate::context::{with_saved_state, RenderContext};
use lyon::path::Path;
use sketchkit_core::DrawStyle;
use sketchkit_layout::{Grid, SketchPath};

/// Anything that can hand a lyon path to a context.
pub trait Drawable {
    fn as_path(&self) -> &Path;
}

impl Drawable for SketchPath {
    fn as_path(&self) -> &Path {
        self.path()
    }
}

impl Drawable for Path {
    fn as_path(&self) -> &Path {
        self
    }
}

/// Draw every cell of `grid` at its position.
///
/// Each cell is drawn inside its own saved state, so the context is left as
/// it was found. Row `r` is filled with `style.palette.get(r)`.
pub fn render_grid<P: Drawable>(ctx: &mut dyn RenderContext, grid: &Grid<P>, style: &DrawStyle) {
    tracing::debug!(
        "Rendering grid: {} rows, {} cells",
        grid.row_count(),
        grid.cell_count()
    );

    for (row, _, cell) in grid.cells() {
        let fill = style.palette.get(row);
        with_saved_state(ctx, |ctx| {
            ctx.translate(cell.x, cell.y);
            ctx.set_fill(Some(fill));
            ctx.draw_path(cell.path.as_path());
        });
    }
}
