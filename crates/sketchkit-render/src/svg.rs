//! SVG backend
//! Accumulates drawn paths as `<path>` elements and emits an SVG document.
//! Features:
//! - Translation written as a `transform` attribute per element
//! - Fill and stroke alpha written as separate opacity attributes
//! - Non-zero fill rule, matching the raster backend

use crate::context::{DrawState, RenderContext, StateStack};
use lyon::path::Path;
use sketchkit_core::Color;
use sketchkit_layout::path::path_to_svg_data;

/// Drawing context that records SVG markup.
#[derive(Debug, Clone)]
pub struct SvgContext {
    width: f64,
    height: f64,
    state: StateStack,
    elements: Vec<String>,
}

impl SvgContext {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            state: StateStack::new(),
            elements: Vec::new(),
        }
    }

    /// Number of `<path>` elements drawn so far.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Wrap the drawn elements in an `<svg>` document.
    pub fn finish(&self) -> String {
        let mut doc = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        for element in &self.elements {
            doc.push_str("  ");
            doc.push_str(element);
            doc.push('\n');
        }
        doc.push_str("</svg>\n");
        doc
    }
}

fn paint_attrs(attr: &str, color: Color) -> String {
    if color.a == u8::MAX {
        format!(" {attr}=\"{}\"", color.with_alpha(u8::MAX).to_hex())
    } else {
        format!(
            " {attr}=\"{}\" {attr}-opacity=\"{:.3}\"",
            color.with_alpha(u8::MAX).to_hex(),
            color.alpha_f32()
        )
    }
}

fn path_element(data: &str, state: &DrawState) -> String {
    let mut el = format!("<path d=\"{data}\"");
    if state.dx != 0.0 || state.dy != 0.0 {
        el.push_str(&format!(" transform=\"translate({} {})\"", state.dx, state.dy));
    }
    match state.fill {
        Some(fill) => el.push_str(&paint_attrs("fill", fill)),
        None => el.push_str(" fill=\"none\""),
    }
    if let Some((stroke, width)) = state.stroke {
        el.push_str(&paint_attrs("stroke", stroke));
        el.push_str(&format!(" stroke-width=\"{width}\""));
    }
    el.push_str(" fill-rule=\"nonzero\"/>");
    el
}

impl RenderContext for SvgContext {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
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
        let data = path_to_svg_data(path);
        if data.is_empty() {
            return;
        }
        self.elements.push(path_element(&data, self.state.current()));
    }
}
