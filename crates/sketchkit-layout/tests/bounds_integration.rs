use sketchkit_core::{BoundingBox, Point};
use sketchkit_layout::{compute_bounds, compute_zero_offset, BoundedPath, SketchPath};

#[derive(Debug, Clone)]
struct FixedPath {
    bounds: BoundingBox,
    label: &'static str,
}

impl FixedPath {
    fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            bounds: BoundingBox::new(x, y, w, h),
            label: "fixed",
        }
    }
}

impl BoundedPath for FixedPath {
    fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}

#[test]
fn test_empty_collection_is_degenerate_box() {
    let paths: Vec<FixedPath> = vec![];
    let bb = compute_bounds(&paths);
    assert_eq!(bb.origin, Point::new(0.0, 0.0));
    assert_eq!(bb.width(), 0.0);
    assert_eq!(bb.height(), 0.0);
    assert!(bb.x().is_finite() && bb.y().is_finite());
}

#[test]
fn test_single_path_bounds_are_its_own() {
    let p = FixedPath::new(2.0, 3.0, 10.0, 5.0);
    assert_eq!(compute_bounds(&[p]), BoundingBox::new(2.0, 3.0, 10.0, 5.0));
}

#[test]
fn test_two_path_union() {
    let paths = vec![
        FixedPath::new(0.0, 0.0, 4.0, 4.0),
        FixedPath::new(5.0, 5.0, 2.0, 2.0),
    ];
    let bb = compute_bounds(&paths);
    assert_eq!(bb.origin, Point::new(0.0, 0.0));
    assert_eq!(bb.width(), 7.0);
    assert_eq!(bb.height(), 7.0);
}

#[test]
fn test_zero_offset_negates_origin() {
    let paths = vec![
        FixedPath::new(-3.0, 8.0, 1.0, 1.0),
        FixedPath::new(4.0, 2.0, 1.0, 1.0),
    ];
    let bb = compute_bounds(&paths);
    assert_eq!(compute_zero_offset(&paths), (-bb.x(), -bb.y()));
    assert_eq!(compute_zero_offset(&paths), (3.0, -2.0));
}

#[test]
fn test_input_is_not_consumed() {
    let paths = vec![FixedPath::new(1.0, 1.0, 1.0, 1.0)];
    let _ = compute_bounds(&paths);
    assert_eq!(paths[0].label, "fixed");
    assert_eq!(paths.len(), 1);
}

#[test]
fn test_sketch_paths_mix_with_bounds() {
    let paths = vec![
        SketchPath::rectangle(0.0, 0.0, 10.0, 10.0),
        SketchPath::circle(Point::new(20.0, 5.0), 5.0),
    ];
    let bb = compute_bounds(&paths);
    assert!((bb.x() - 0.0).abs() < 1e-3);
    assert!((bb.max_x() - 25.0).abs() < 1e-3);
    assert!((bb.max_y() - 10.0).abs() < 1e-3);
}
