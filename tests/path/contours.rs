use super::*;

#[test]
fn contour_ranges_for_each_element() {
    let path = path(THREE_CONTOURS);

    assert!(path.contour_is_open(1).unwrap() == (true, 0, 2));
    assert!(path.contour_is_closed(1).unwrap() == (false, 0, 2));
    assert!(path.contour_is_open(3).unwrap() == (false, 2, 5));
    assert!(path.contour_is_closed(3).unwrap() == (true, 2, 5));
    assert!(path.contour_is_open(6).unwrap() == (false, 5, 10));
    assert!(path.contour_is_closed(6).unwrap() == (true, 5, 10));
}

#[test]
fn contour_range_from_move_and_close() {
    let path = path(THREE_CONTOURS);

    assert!(path.contour_range(0).unwrap() == ContourRange { start: 0, end: 2, is_closed: false });
    assert!(path.contour_range(2).unwrap() == ContourRange { start: 2, end: 5, is_closed: true });
    assert!(path.contour_range(4).unwrap() == ContourRange { start: 2, end: 5, is_closed: true });
    assert!(path.contour_range(9).unwrap() == ContourRange { start: 5, end: 10, is_closed: true });
}

#[test]
fn contour_range_out_of_range_is_an_error() {
    let path = path(THREE_CONTOURS);

    assert!(matches!(path.contour_range(10), Err(PathError::IndexOutOfRange { index: 10, count: 10 })));
}

#[test]
fn contours_partition_path() {
    let path    = path(THREE_CONTOURS);
    let ranges  = path.contour_ranges();

    assert!(ranges == vec![
        ContourRange { start: 0, end: 2, is_closed: false },
        ContourRange { start: 2, end: 5, is_closed: true },
        ContourRange { start: 5, end: 10, is_closed: true },
    ]);

    // Closed iff the last element is a close
    for range in ranges {
        assert!(range.is_closed == path.element(range.end-1).unwrap().is_close());
        assert!(path.element(range.start).unwrap().is_move());
    }
}

#[test]
fn split_into_contours() {
    let path = path(THREE_CONTOURS);

    assert!(path.contours().len() == 3);
    assert!(path.open_contours().len() == 1);
    assert!(path.closed_contours().len() == 2);
    assert!(path.open_contours().len() + path.closed_contours().len() == path.contours().len());

    assert!(path.contours()[0] == path.open_contours()[0]);
    assert!(path.contours()[1] == path.closed_contours()[0]);
    assert!(path.contours()[2] == path.closed_contours()[1]);
}

#[test]
fn contours_are_renumbered_copies() {
    let path        = path(THREE_CONTOURS);
    let contours    = path.contours();

    assert!(contours[1].element_count() == 3);
    assert!(contours[1].element(0).unwrap() == PathElement::Move(Coord2(30.0, 10.0)));
    assert!(contours[1].element(2).unwrap() == PathElement::Close);
    assert!(contours[1].elements() == &path.elements()[2..5]);
}

#[test]
fn contour_paths_concatenate_contours() {
    let path = path(THREE_CONTOURS);

    assert!(path.open_contour_path() == path.open_contours()[0]);

    let closed = path.closed_contour_path();
    assert!(closed.element_count() == 8);
    assert!(closed.elements().first() == path.closed_contours()[0].elements().first());
    assert!(closed.elements().last() == path.closed_contours()[1].elements().last());
    assert!(closed.elements() == &path.elements()[2..10]);
}

#[test]
fn contour_views_borrow_path() {
    let path    = path(THREE_CONTOURS);
    let views   = path.contour_views().collect::<Vec<_>>();

    assert!(views.len() == 3);
    assert!(views[0].is_open());
    assert!(views[1].is_closed());
    assert!(views[2].range() == ContourRange { start: 5, end: 10, is_closed: true });
    assert!(views[2].elements().len() == 5);
    assert!(views[2].to_path() == path.contours()[2]);
}

#[test]
fn contours_are_idempotent() {
    let path = path(THREE_CONTOURS);

    assert!(path.contours() == path.contours());
    assert!(path.contour_ranges() == path.contour_ranges());
}

#[test]
fn empty_path_has_no_contours() {
    let path = Path::new();

    assert!(path.contours().is_empty());
    assert!(path.open_contour_path().is_empty());
    assert!(path.closed_contour_path().is_empty());
}

#[test]
fn contour_without_close_at_end_is_open() {
    let path = path("M 0 0 L 10 0 L 10 10");

    assert!(path.contour_range(2).unwrap() == ContourRange { start: 0, end: 3, is_closed: false });
    assert!(path.closed_contours().is_empty());
    assert!(path.open_contour_path() == path);
}

#[test]
fn modifying_contour_does_not_affect_path() {
    let path            = path(THREE_CONTOURS);
    let mut contour     = path.contours()[1].clone();

    contour.remove_last().unwrap();

    assert!(path.contour_range(3).unwrap().is_closed);
    assert!(path.contours()[1].element_count() == 3);
}

#[test]
fn contour_range_agrees_with_contour_ranges_after_close() {
    // A line after a close with no move in between starts a contour of its own
    let path = Path::from_elements(vec![
        PathElement::Move(Coord2(0.0, 0.0)),
        PathElement::Line(Coord2(10.0, 0.0)),
        PathElement::Line(Coord2(10.0, 10.0)),
        PathElement::Close,
        PathElement::Line(Coord2(20.0, 20.0)),
        PathElement::Line(Coord2(30.0, 20.0))
    ]);

    let ranges = path.contour_ranges();
    assert!(ranges == vec![
        ContourRange { start: 0, end: 4, is_closed: true },
        ContourRange { start: 4, end: 6, is_closed: false }
    ]);

    for index in 0..path.element_count() {
        let range = path.contour_range(index).unwrap();
        assert!(ranges.contains(&range));
        assert!(range.as_range().contains(&index));
    }
}
