use crate::geometry::*;

use approx::assert_relative_eq;
use geo::{coord, line_string, point, wkt};

#[test]
fn full_cut_is_identity() {
    let line = wkt! { LINESTRING (0. 0., 30. 0., 30. 40.) };
    let total = length(&line);
    assert_relative_eq!(total, 70.0);

    let cut_line = cut(&line, 0.0, total).expect("full range must cut");
    assert_eq!(cut_line, line);
}

#[test]
fn degenerate_cut_is_point_pair() {
    let line = wkt! { LINESTRING (0. 0., 30. 0., 30. 40.) };

    let cut_line = cut(&line, 45.0, 45.0).expect("degenerate range must cut");
    assert_eq!(cut_line, line_string![(x: 30., y: 15.), (x: 30., y: 15.)]);
    assert_relative_eq!(length(&cut_line), 0.0);
}

#[test]
fn partial_cut_keeps_interior_vertices() {
    let line = wkt! { LINESTRING (0. 0., 30. 0., 30. 40., 60. 40.) };

    let cut_line = cut(&line, 10.0, 50.0).expect("range must cut");
    assert_eq!(
        cut_line,
        line_string![(x: 10., y: 0.), (x: 30., y: 0.), (x: 30., y: 20.)]
    );

    let head = cut(&line, 0.0, 15.0).expect("head must cut");
    assert_eq!(head, line_string![(x: 0., y: 0.), (x: 15., y: 0.)]);

    let tail = cut(&line, 80.0, 100.0).expect("tail must cut");
    assert_eq!(tail, line_string![(x: 40., y: 40.), (x: 60., y: 40.)]);
}

#[test]
fn invalid_cut_ranges_are_rejected() {
    let line = wkt! { LINESTRING (0. 0., 10. 0.) };

    assert!(matches!(
        cut(&line, 6.0, 4.0),
        Err(GeometryError::InvalidRange { .. })
    ));
    assert!(matches!(
        cut(&line, -1.0, 4.0),
        Err(GeometryError::InvalidRange { .. })
    ));
    assert!(matches!(
        cut(&line, 2.0, 11.0),
        Err(GeometryError::InvalidRange { .. })
    ));
    assert_eq!(cut(&LineString::new(vec![]), 0.0, 0.0), Err(GeometryError::Empty));
}

#[test]
fn locate_projects_within_bounds() {
    let line = wkt! { LINESTRING (0. 0., 100. 0.) };

    let inside = locate(&point!(x: 25., y: 5.), &line).expect("must locate");
    assert_relative_eq!(inside.along, 25.0);
    assert_relative_eq!(inside.distance, 5.0);

    // Beyond the end of the line, the projection is clamped to the endpoint.
    let beyond = locate(&point!(x: 103., y: 4.), &line).expect("must locate");
    assert_relative_eq!(beyond.along, 100.0);
    assert_relative_eq!(beyond.distance, 5.0);

    assert_eq!(project(&point!(x: 40., y: -2.), &line), Some(40.0));
}

#[test]
fn reverse_flips_projection() {
    let line = wkt! { LINESTRING (0. 0., 60. 0., 60. 40.) };
    let reversed = reverse(&line);

    assert_eq!(reversed.0.first(), line.0.last());
    assert_relative_eq!(length(&reversed), length(&line));

    let point = point!(x: 20., y: 3.);
    let forward = project(&point, &line).expect("must project");
    let backward = project(&point, &reversed).expect("must project");
    assert_relative_eq!(forward + backward, length(&line), epsilon = 1e-9);
}

#[test]
fn interpolate_skips_repeated_vertices() {
    let line = wkt! { LINESTRING (0. 0., 20. 0., 20. 0., 20. 30.) };
    assert_relative_eq!(length(&line), 50.0);

    assert_eq!(interpolate(&line, -5.0), Some(point!(x: 0., y: 0.)));
    assert_eq!(interpolate(&line, 20.0), Some(point!(x: 20., y: 0.)));
    assert_eq!(interpolate(&line, 35.0), Some(point!(x: 20., y: 15.)));
    assert_eq!(interpolate(&line, 80.0), Some(point!(x: 20., y: 30.)));
    assert_eq!(interpolate(&LineString::new(vec![]), 1.0), None);

    let cut_line = cut(&line, 10.0, 40.0).expect("range must cut");
    assert_relative_eq!(length(&cut_line), 30.0);
    assert_eq!(cut_line.0.first(), Some(&coord! { x: 10., y: 0. }));
    assert_eq!(cut_line.0.last(), Some(&coord! { x: 20., y: 20. }));
}
