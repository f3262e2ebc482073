use sketchkit_core::BoundingBox;
use sketchkit_layout::{
    make_grid, make_grid_expanded, BoundedPath, GridLayout, SketchPath,
};

fn tile() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, 10.0, 10.0)
}

#[test]
fn test_empty_paths_give_no_rows() {
    let paths: Vec<BoundingBox> = Vec::new();
    for (x_count, y_count) in [(0, 0), (1, 1), (5, 3)] {
        let grid = make_grid(&paths, 4.0, 4.0, x_count, y_count, 1.0, 1.0);
        assert_eq!(grid.row_count(), 0);
        assert!(grid.is_empty());
    }
}

#[test]
fn test_row_of_three_with_padding() {
    let grid = make_grid(&[tile()], 0.0, 0.0, 3, 1, 2.0, 0.0);
    assert_eq!(grid.row_count(), 1);
    let row = &grid.rows()[0];
    assert_eq!(row.len(), 3);
    assert_eq!(row.iter().map(|c| c.x).collect::<Vec<_>>(), vec![0.0, 12.0, 24.0]);
    assert!(row.iter().all(|c| c.y == 0.0));
}

#[test]
fn test_one_row_per_source_path() {
    let paths = vec![tile(), tile().translated(3.0, 3.0), tile()];
    let grid = make_grid(&paths, 0.0, 0.0, 4, 2, 0.0, 0.0);
    assert_eq!(grid.row_count(), 3);
    assert!(grid.rows().iter().all(|row| row.len() == 4));
    assert_eq!(grid.cell_count(), 12);
}

#[test]
fn test_zero_counts_are_not_errors() {
    let grid = make_grid(&[tile()], 0.0, 0.0, 0, 3, 0.0, 0.0);
    assert!(grid.rows().iter().all(|row| row.is_empty()));

    let grid = make_grid(&[tile()], 0.0, 0.0, 3, 0, 0.0, 0.0);
    assert!(grid.rows().iter().all(|row| row.is_empty()));
}

#[test]
fn test_negative_padding_overlaps() {
    let grid = make_grid(&[tile()], 0.0, 0.0, 3, 1, -4.0, 0.0);
    let xs: Vec<f64> = grid.rows()[0].iter().map(|c| c.x).collect();
    assert_eq!(xs, vec![0.0, 6.0, 12.0]);
}

#[test]
fn test_identical_inputs_identical_positions() {
    let paths = vec![
        SketchPath::rectangle(1.0, 2.0, 3.0, 4.0),
        SketchPath::circle(sketchkit_core::Point::new(9.0, 9.0), 2.0),
    ];
    let a = make_grid(&paths, 5.0, -5.0, 3, 2, 1.5, 2.5);
    let b = make_grid(&paths, 5.0, -5.0, 3, 2, 1.5, 2.5);
    let pos = |g: &sketchkit_layout::Grid<SketchPath>| {
        g.cells().map(|(_, _, c)| (c.x, c.y)).collect::<Vec<_>>()
    };
    assert_eq!(pos(&a), pos(&b));
}

#[test]
fn test_cells_hold_independent_copies() {
    let source = vec![SketchPath::rectangle(0.0, 0.0, 2.0, 2.0)];
    let grid = make_grid(&source, 0.0, 0.0, 2, 1, 0.0, 0.0);
    drop(source);

    let mut rows = grid.into_rows();
    let cell = rows[0].remove(0);
    let moved = cell.path.translated(100.0, 0.0);
    assert!((moved.bounds().x() - 100.0).abs() < 1e-3);
    assert!((rows[0][0].path.bounds().x() - 0.0).abs() < 1e-3);
}

#[test]
fn test_layout_builder_matches_free_function() {
    let layout = GridLayout::new(3, 2).with_offset(10.0, 20.0).with_padding(1.0, 2.0);
    let from_builder = layout.build(&[tile()]);
    let from_fn = make_grid(&[tile()], 10.0, 20.0, 3, 2, 1.0, 2.0);
    assert_eq!(from_builder, from_fn);
    assert_eq!(from_builder.rows()[0][2].x, 10.0 + 2.0 * 11.0);
    assert_eq!(from_builder.rows()[0][2].y, 20.0 + 12.0);
}

#[test]
fn test_expanded_grid_adds_rows() {
    let grid = make_grid_expanded(&[tile()], 0.0, 0.0, 3, 2, 2.0, 1.0);
    assert_eq!(grid.row_count(), 3);
    for (i, row) in grid.rows().iter().enumerate() {
        assert_eq!(row.len(), 2);
        assert_eq!(row[0].x, i as f64 * 12.0);
        assert_eq!(row[0].y, 0.0);
        assert_eq!(row[1].y, 11.0);
    }

    let empty = make_grid_expanded(&[tile()], 0.0, 0.0, 3, 0, 2.0, 1.0);
    assert!(empty.is_empty());
}

#[test]
fn test_grid_bounds_cover_all_cells() {
    let grid = make_grid_expanded(&[tile()], 5.0, 5.0, 2, 2, 0.0, 0.0);
    assert_eq!(grid.bounds(), BoundingBox::new(5.0, 5.0, 20.0, 20.0));
}
