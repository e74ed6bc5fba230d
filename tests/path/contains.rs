use super::*;

#[test]
fn shape_contains_points() {
    let path = path(SHAPE);

    assert!(path.contains_point(&Coord2(15.0, 10.0)));
    assert!(!path.contains_point(&Coord2(2.0, 2.0)));
    assert!(!path.contains_point(&Coord2(20.0, 20.0)));
    assert!(path.contains_point(&Coord2(15.0, 17.0)));
}

#[test]
fn curved_edges_are_followed() {
    let path = path(SHAPE);

    // Inside the bounds, but above the quadratic curve
    assert!(!path.contains_point(&Coord2(11.0, 3.0)));

    // Below the line y=15, but inside the cubic curve's bulge
    assert!(path.contains_point(&Coord2(15.0, 18.5)));
    assert!(!path.contains_point(&Coord2(11.0, 18.5)));
}

#[test]
fn square_contains_point() {
    let path = square(Coord2(1.0, 2.0), Coord2(9.0, 8.0));

    assert!(path.contains_point(&Coord2(5.0, 5.0)));
    assert!(path.contains_point(&Coord2(3.0, 4.0)));
}

#[test]
fn points_outside_bounds_are_outside_path() {
    let path = square(Coord2(1.0, 2.0), Coord2(9.0, 8.0));

    assert!(!path.contains_point(&Coord2(5.0, 20.0)));
    assert!(!path.contains_point(&Coord2(5.0, -5.0)));
    assert!(!path.contains_point(&Coord2(20.0, 5.0)));
    assert!(!path.contains_point(&Coord2(-5.0, 5.0)));
    assert!(!path.contains_point(&Coord2(3.0, 20.0)));
}

#[test]
fn open_contours_do_not_fill() {
    let path = path("M 0 0 L 10 0 L 10 10 L 0 10 L 0 0");

    assert!(!path.contains_point(&Coord2(5.0, 5.0)));
    assert!(!path.contains_point_with_rule(&Coord2(5.0, 5.0), FillRule::NonZero));
}

#[test]
fn open_contours_are_ignored_next_to_closed_ones() {
    let path = path(THREE_CONTOURS);

    // Inside the second contour
    assert!(path.contains_point(&Coord2(40.0, 9.0)));

    // Near the open line: not filled
    assert!(!path.contains_point(&Coord2(15.0, 14.0)));
}

#[test]
fn ray_through_vertex_is_counted_once() {
    let path = path("M 0 0 L 10 10 L 20 0 L 10 -10 Z");

    // The ray from this point passes exactly through the vertex at (20, 0)
    assert!(path.contains_point(&Coord2(10.0, 0.0)));
    assert!(!path.contains_point(&Coord2(25.0, 0.0)));
}

#[test]
fn boundary_points_are_deterministic() {
    let path = square(Coord2(0.0, 0.0), Coord2(10.0, 10.0));

    // Points on the closing edge (from (0, 10) back to (0, 0)) and on the other edges and vertices
    let boundary = vec![Coord2(0.0, 5.0), Coord2(0.0, 0.0), Coord2(0.0, 10.0), Coord2(10.0, 5.0), Coord2(5.0, 0.0), Coord2(5.0, 10.0)];

    for point in boundary {
        let first = path.contains_point(&point);

        for _ in 0..10 {
            assert!(path.contains_point(&point) == first);
        }
    }

    // Half-open rule: left edge is inside, right edge is not
    assert!(path.contains_point(&Coord2(0.0, 5.0)));
    assert!(!path.contains_point(&Coord2(10.0, 5.0)));
}

#[test]
fn even_odd_and_non_zero_differ_for_overlapping_contours() {
    // Two squares wound in the same direction, one inside the other
    let mut path = square(Coord2(0.0, 0.0), Coord2(10.0, 10.0));
    path.extend(square(Coord2(2.0, 2.0), Coord2(8.0, 8.0)).elements().iter().copied());

    let inner = Coord2(5.0, 5.0);
    let outer = Coord2(1.0, 1.0);

    assert!(!path.contains_point_with_rule(&inner, FillRule::EvenOdd));
    assert!(path.contains_point_with_rule(&inner, FillRule::NonZero));
    assert!(path.contains_point_with_rule(&outer, FillRule::EvenOdd));
    assert!(path.contains_point_with_rule(&outer, FillRule::NonZero));
}

#[test]
fn opposite_winding_makes_hole_with_non_zero() {
    let hole        = path("M 2 2 L 2 8 L 8 8 L 8 2 Z");
    let mut shape   = square(Coord2(0.0, 0.0), Coord2(10.0, 10.0));
    shape.extend(hole.elements().iter().copied());

    assert!(!shape.contains_point_with_rule(&Coord2(5.0, 5.0), FillRule::NonZero));
    assert!(shape.contains_point_with_rule(&Coord2(1.0, 5.0), FillRule::NonZero));
}

#[test]
fn default_fill_rule_is_even_odd() {
    assert!(FillRule::default() == FillRule::EvenOdd);
}
