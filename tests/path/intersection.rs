use super::*;

#[test]
fn shape_intersects_crossing_line() {
    let shape = path(SHAPE);

    assert!(shape.intersects(&path("M 5 5 L 25 25")));
    assert!(!shape.intersects(&path("M 5 5 L 5 20")));
}

#[test]
fn intersection_is_symmetrical() {
    let shape = path(SHAPE);

    assert!(path("M 5 5 L 25 25").intersects(&shape));
    assert!(!path("M 5 5 L 5 20").intersects(&shape));
}

#[test]
fn crossing_line_intersection_points() {
    let shape   = path(SHAPE);
    let points  = shape.intersection_points(&path("M 5 5 L 25 25"));

    assert!(points.len() == 2);

    // Every point is on the line y=x
    for point in points.iter() {
        assert!((point.0 - point.1).abs() < 0.01);
    }

    // One crosses the closing edge, the other the cubic curve
    assert!(points.iter().any(|point| point.distance_to(&Coord2(10.0, 10.0)) < 1e-9));
    assert!(points.iter().any(|point| point.1 > 15.0 && point.1 < 18.75));
}

#[test]
fn stop_after_first_intersection() {
    let shape           = path(SHAPE);
    let mut num_visits  = 0;

    shape.intersections(&path("M 5 5 L 25 25"), |_point| {
        num_visits += 1;
        false
    });

    assert!(num_visits == 1);
}

#[test]
fn stop_after_second_intersection() {
    let grid            = path("M 0 1 L 10 1 M 0 2 L 10 2 M 0 3 L 10 3 M 0 4 L 10 4");
    let mut num_visits  = 0;

    grid.intersections(&path("M 5 0 L 5 10"), |_point| {
        num_visits += 1;
        num_visits < 2
    });

    assert!(num_visits == 2);
    assert!(grid.intersection_points(&path("M 5 0 L 5 10")).len() == 4);
}

#[test]
fn intersections_are_found_in_the_same_order() {
    let shape   = path(SHAPE);
    let line    = path("M 5 5 L 25 25");

    assert!(shape.intersection_points(&line) == shape.intersection_points(&line));
}

#[test]
fn overlapping_squares() {
    let square1 = square(Coord2(0.0, 0.0), Coord2(10.0, 10.0));
    let square2 = square(Coord2(5.0, 5.0), Coord2(15.0, 15.0));
    let points  = square1.intersection_points(&square2);

    assert!(points.len() == 2);
    assert!(points.contains(&Coord2(10.0, 5.0)));
    assert!(points.contains(&Coord2(5.0, 10.0)));
}

#[test]
fn closing_edge_intersects() {
    // Only the implicit closing edge (from (10, 10) back to (0, 0)) crosses the line
    let triangle    = path("M 0 0 L 10 0 L 10 10 Z");
    let points      = triangle.intersection_points(&path("M 0 5 L 6 5"));

    assert!(points == vec![Coord2(5.0, 5.0)]);
    assert!(triangle.intersects(&path("M 2 8 L 6 4")));
    assert!(!triangle.intersects(&path("M 0 5 L 4 5")));
}

#[test]
fn touching_paths_intersect() {
    let path1 = path("M 0 0 L 10 0");
    let path2 = path("M 10 0 L 10 10");

    assert!(path1.intersection_points(&path2) == vec![Coord2(10.0, 0.0)]);
}

#[test]
fn separate_paths_do_not_intersect() {
    let square1 = square(Coord2(0.0, 0.0), Coord2(10.0, 10.0));
    let square2 = square(Coord2(20.0, 20.0), Coord2(30.0, 30.0));
    let inside  = square(Coord2(2.0, 2.0), Coord2(8.0, 8.0));

    assert!(!square1.intersects(&square2));
    assert!(!square1.intersects(&inside));
    assert!(!square1.intersects(&Path::new()));
}

#[test]
fn curve_crosses_line_twice() {
    let curve   = path("M 0 0 C 0 100 100 100 100 0");
    let line    = path("M 0 50 L 100 50");
    let points  = curve.intersection_points(&line);

    assert!(points.len() == 2);
    assert!((points[0].1 - 50.0).abs() < 0.01);
    assert!((points[1].1 - 50.0).abs() < 0.01);
    assert!((points[0].0 + points[1].0 - 100.0).abs() < 0.02);
    assert!(points.iter().any(|point| (point.0 - 11.51).abs() < 0.05));
}

#[test]
fn curves_intersect_curves() {
    let arch    = path("M 0 0 Q 50 100 100 0");
    let bowl    = path("M 0 60 Q 50 -40 100 60");
    let points  = arch.intersection_points(&bowl);

    assert!(points.len() == 2);
    for point in points {
        // Both curves are at the same height where they cross
        assert!((point.1 - 30.0).abs() < 0.05);
    }
}

#[test]
fn derived_queries_inside_visitor() {
    let shape           = path(SHAPE);
    let line            = path("M 5 5 L 25 25");
    let bounds          = shape.bounds();
    let mut num_visits  = 0;

    shape.intersections(&line, |point| {
        num_visits += 1;

        assert!(shape.bounds() == bounds);
        assert!(shape.contours().len() == 1);
        assert!(line.intersects(&shape));
        assert!(point.0 >= bounds.origin.0 - 0.01);

        true
    });

    assert!(num_visits == 2);
}

#[test]
fn intersection_at_vertex_is_reported_once() {
    // Both the first edge and the closing edge of the square end at (0, 0)
    let outline = square(Coord2(0.0, 0.0), Coord2(10.0, 10.0));
    let points  = outline.intersection_points(&path("M -5 -5 L 5 5"));

    assert!(points == vec![Coord2(0.0, 0.0)]);
}

#[test]
fn intersection_at_curve_joint_is_reported_once() {
    let curves  = path("M 0 0 Q 5 5 10 0 Q 15 -5 20 0");
    let points  = curves.intersection_points(&path("M 10 -5 L 10 5"));

    assert!(points.len() == 1);
    assert!(points[0].distance_to(&Coord2(10.0, 0.0)) < 1e-6);
}

#[test]
fn path_intersecting_a_copy_of_itself_meets_at_its_vertices() {
    let shape       = path(SHAPE);
    let points      = shape.intersection_points(&shape.clone());
    let vertices    = [Coord2(10.0, 5.0), Coord2(20.0, 5.0), Coord2(20.0, 15.0), Coord2(10.0, 15.0)];

    assert!(points.len() == 4);
    for vertex in vertices.iter() {
        assert!(points.iter().any(|point| point.distance_to(vertex) < 1e-6));
    }
}

#[test]
fn shared_curve_meets_at_its_end_points() {
    let curve   = path("M 0 0 C 0 1000 1000 1000 1000 0");
    let points  = curve.intersection_points(&curve.clone());

    assert!(points == vec![Coord2(0.0, 0.0), Coord2(1000.0, 0.0)]);
}

#[test]
fn partly_shared_curve_meets_at_the_ends_of_the_shared_part() {
    let curve   = path("M 0 0 C 0 1000 1000 1000 1000 0");
    let half    = path("M 0 0 C 0 500 250 750 500 750");
    let points  = curve.intersection_points(&half);

    assert!(points.len() == 2);
    assert!(points[0] == Coord2(0.0, 0.0));
    assert!(points[1].distance_to(&Coord2(500.0, 750.0)) < 0.01);
}

#[test]
fn shared_edge_meets_at_its_end_points() {
    let left    = square(Coord2(0.0, 0.0), Coord2(10.0, 10.0));
    let right   = square(Coord2(10.0, 0.0), Coord2(20.0, 10.0));
    let points  = left.intersection_points(&right);

    assert!(points.len() == 2);
    assert!(points.iter().any(|point| point.distance_to(&Coord2(10.0, 0.0)) < 1e-9));
    assert!(points.iter().any(|point| point.distance_to(&Coord2(10.0, 10.0)) < 1e-9));
}

#[test]
fn collinear_lines_meet_at_the_ends_of_the_shared_part() {
    let points = path("M 0 0 L 10 0").intersection_points(&path("M 5 0 L 15 0"));

    assert!(points.len() == 2);
    assert!(points[0].distance_to(&Coord2(5.0, 0.0)) < 1e-6);
    assert!(points[1].distance_to(&Coord2(10.0, 0.0)) < 1e-6);

    assert!(!path("M 0 0 L 10 0").intersects(&path("M 0 1 L 10 1")));
}
