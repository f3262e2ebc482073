//! Lyon-backed path values.
//!
//! `SketchPath` is the concrete path type the motif generators produce and the
//! render crate draws. Transformations return new values so that grid cells
//! can hold independent copies.

use lyon::math::{point, vector, Angle, Box2D, Transform};
use lyon::path::builder::BorderRadii;
use lyon::path::{Event, Path, Winding};
use sketchkit_core::{BoundingBox, Point};

use crate::bounds::BoundedPath;

#[derive(Debug, Clone)]
pub struct SketchPath {
    path: Path,
}

impl Default for SketchPath {
    fn default() -> Self {
        Self { path: Path::new() }
    }
}

impl From<Path> for SketchPath {
    fn from(path: Path) -> Self {
        Self::from_path(path)
    }
}

impl SketchPath {
    pub fn from_path(path: Path) -> Self {
        Self { path }
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut builder = Path::builder();
        builder.add_rectangle(
            &Box2D::new(
                point(x as f32, y as f32),
                point((x + width) as f32, (y + height) as f32),
            ),
            Winding::Positive,
        );
        Self::from_path(builder.build())
    }

    /// Rectangle with rounded corners. The radius is clamped to half the
    /// smaller side; a non-positive radius gives a plain rectangle.
    pub fn rounded_rectangle(x: f64, y: f64, width: f64, height: f64, radius: f64) -> Self {
        let max_radius = (width.abs().min(height.abs()) / 2.0).max(0.0);
        let radius = radius.min(max_radius);
        if radius <= 0.0 {
            return Self::rectangle(x, y, width, height);
        }

        let mut builder = Path::builder();
        builder.add_rounded_rectangle(
            &Box2D::new(
                point(x as f32, y as f32),
                point((x + width) as f32, (y + height) as f32),
            ),
            &BorderRadii::new(radius as f32),
            Winding::Positive,
        );
        Self::from_path(builder.build())
    }

    pub fn ellipse(center: Point, rx: f64, ry: f64, rotation_deg: f64) -> Self {
        let mut builder = Path::builder();
        builder.add_ellipse(
            point(center.x as f32, center.y as f32),
            vector(rx as f32, ry as f32),
            Angle::degrees(rotation_deg as f32),
            Winding::Positive,
        );
        Self::from_path(builder.build())
    }

    pub fn circle(center: Point, radius: f64) -> Self {
        let mut builder = Path::builder();
        builder.add_circle(
            point(center.x as f32, center.y as f32),
            radius as f32,
            Winding::Positive,
        );
        Self::from_path(builder.build())
    }

    /// Path through `points` in order. Fewer than two points give an empty
    /// path.
    pub fn polyline(points: &[Point], closed: bool) -> Self {
        if points.len() < 2 {
            return Self::default();
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x as f32, points[0].y as f32));
        for p in &points[1..] {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.end(closed);
        Self::from_path(builder.build())
    }

    /// Concatenate the sub-paths of `parts` into one compound path.
    ///
    /// Filled with the non-zero rule, a compound of positively wound shapes
    /// renders as their union.
    pub fn compound(parts: &[SketchPath]) -> Self {
        let mut builder = Path::builder();
        for part in parts {
            for event in part.path.iter() {
                match event {
                    Event::Begin { at } => {
                        builder.begin(at);
                    }
                    Event::Line { to, .. } => {
                        builder.line_to(to);
                    }
                    Event::Quadratic { ctrl, to, .. } => {
                        builder.quadratic_bezier_to(ctrl, to);
                    }
                    Event::Cubic {
                        ctrl1, ctrl2, to, ..
                    } => {
                        builder.cubic_bezier_to(ctrl1, ctrl2, to);
                    }
                    Event::End { close, .. } => {
                        builder.end(close);
                    }
                }
            }
        }
        Self::from_path(builder.build())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    pub fn is_empty(&self) -> bool {
        self.path.iter().next().is_none()
    }

    /// Number of sub-paths.
    pub fn subpath_count(&self) -> usize {
        self.path
            .iter()
            .filter(|e| matches!(e, Event::Begin { .. }))
            .count()
    }

    pub fn transformed(&self, transform: &Transform) -> Self {
        Self::from_path(self.path.clone().transformed(transform))
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        self.transformed(&Transform::translation(dx as f32, dy as f32))
    }

    /// Rotate by `angle_deg` around `center`.
    pub fn rotated(&self, angle_deg: f64, center: Point) -> Self {
        let t = Transform::translation(-center.x as f32, -center.y as f32)
            .then_rotate(Angle::degrees(angle_deg as f32))
            .then_translate(vector(center.x as f32, center.y as f32));
        self.transformed(&t)
    }

    /// SVG path data (`d` attribute) for this path.
    pub fn to_svg_data(&self) -> String {
        path_to_svg_data(&self.path)
    }
}

impl BoundedPath for SketchPath {
    fn bounds(&self) -> BoundingBox {
        path_bounds(&self.path)
    }
}

impl BoundedPath for Path {
    fn bounds(&self) -> BoundingBox {
        path_bounds(self)
    }
}

fn path_bounds(path: &Path) -> BoundingBox {
    if path.iter().next().is_none() {
        return BoundingBox::EMPTY;
    }
    let bb = lyon::algorithms::aabb::bounding_box(path.iter());
    BoundingBox::from_min_max(
        bb.min.x as f64,
        bb.min.y as f64,
        bb.max.x as f64,
        bb.max.y as f64,
    )
}

/// Write `path` as SVG path data.
pub fn path_to_svg_data(path: &Path) -> String {
    let mut svg = String::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => svg.push_str(&format!("M {} {} ", at.x, at.y)),
            Event::Line { to, .. } => svg.push_str(&format!("L {} {} ", to.x, to.y)),
            Event::Quadratic { ctrl, to, .. } => {
                svg.push_str(&format!("Q {} {} {} {} ", ctrl.x, ctrl.y, to.x, to.y))
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => svg.push_str(&format!(
                "C {} {} {} {} {} {} ",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            )),
            Event::End { close, .. } => {
                if close {
                    svg.push_str("Z ");
                }
            }
        }
    }
    svg.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_bounds(actual: BoundingBox, expected: BoundingBox) {
        let eps = 1e-3;
        assert!(
            (actual.x() - expected.x()).abs() < eps
                && (actual.y() - expected.y()).abs() < eps
                && (actual.width() - expected.width()).abs() < eps
                && (actual.height() - expected.height()).abs() < eps,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_rectangle_bounds() {
        let rect = SketchPath::rectangle(2.0, 3.0, 10.0, 5.0);
        assert_bounds(rect.bounds(), BoundingBox::new(2.0, 3.0, 10.0, 5.0));
    }

    #[test]
    fn test_rounded_rectangle_keeps_bounds() {
        let rect = SketchPath::rounded_rectangle(0.0, 0.0, 10.0, 4.0, 100.0);
        assert_bounds(rect.bounds(), BoundingBox::new(0.0, 0.0, 10.0, 4.0));
    }

    #[test]
    fn test_circle_bounds() {
        let circle = SketchPath::circle(Point::new(5.0, 5.0), 2.0);
        assert_bounds(circle.bounds(), BoundingBox::new(3.0, 3.0, 4.0, 4.0));
    }

    #[test]
    fn test_empty_path_bounds() {
        let path = SketchPath::default();
        assert!(path.is_empty());
        assert_eq!(path.bounds(), BoundingBox::EMPTY);
        assert!(SketchPath::polyline(&[Point::new(1.0, 1.0)], false).is_empty());
    }

    #[test]
    fn test_translated_is_independent_copy() {
        let rect = SketchPath::rectangle(0.0, 0.0, 1.0, 1.0);
        let moved = rect.translated(10.0, 20.0);
        assert_bounds(rect.bounds(), BoundingBox::new(0.0, 0.0, 1.0, 1.0));
        assert_bounds(moved.bounds(), BoundingBox::new(10.0, 20.0, 1.0, 1.0));
    }

    #[test]
    fn test_rotated_quarter_turn() {
        let rect = SketchPath::rectangle(0.0, 0.0, 4.0, 2.0);
        let rotated = rect.rotated(90.0, Point::new(2.0, 1.0));
        assert_bounds(rotated.bounds(), BoundingBox::new(1.0, -1.0, 2.0, 4.0));
    }

    #[test]
    fn test_compound_keeps_subpaths() {
        let a = SketchPath::circle(Point::new(0.0, 0.0), 1.0);
        let b = SketchPath::circle(Point::new(5.0, 0.0), 1.0);
        let both = SketchPath::compound(&[a, b]);
        assert_eq!(both.subpath_count(), 2);
        assert_bounds(both.bounds(), BoundingBox::new(-1.0, -1.0, 7.0, 2.0));
    }

    #[test]
    fn test_svg_data() {
        let line = SketchPath::polyline(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)], false);
        assert_eq!(line.to_svg_data(), "M 0 0 L 3 4");

        let tri = SketchPath::polyline(
            &[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)],
            true,
        );
        assert_eq!(tri.to_svg_data(), "M 0 0 L 1 0 L 0 1 Z");
    }
}
