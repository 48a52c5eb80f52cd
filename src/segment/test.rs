use crate::fixtures::{self, A, B, C};
use crate::geometry::GeometryError;
use crate::network::{DirectedEdge, EdgeId, NetworkView, Weighting};
use crate::segment::*;
use crate::transition::{DropReason, MatchedEdge, MatchedPath, StopCut};

use approx::assert_relative_eq;
use geo::wkt;
use smallvec::SmallVec;

fn matched(id: EdgeId, stop: usize, cuts: &[(usize, f64)]) -> MatchedEdge {
    MatchedEdge {
        edge: DirectedEdge::forward(id),
        stop,
        cuts: cuts
            .iter()
            .map(|(stop, proj_length)| StopCut {
                stop: *stop,
                proj_length: *proj_length,
            })
            .collect::<SmallVec<_>>(),
    }
}

fn view() -> NetworkView {
    fixtures::corridor()
        .view(&Weighting::Length)
        .expect("view must build")
}

fn assert_continuous(segments: &[Segment]) {
    for pair in segments.windows(2) {
        assert_eq!(pair[0].geometry.0.last(), pair[1].geometry.0.first());
    }
}

#[test]
fn two_stops_on_one_edge() {
    let path = MatchedPath {
        edges: vec![matched(A, 0, &[(0, 20.0), (1, 70.0)])],
    };

    let segments = split(&path, &view()).expect("must split");
    assert_eq!(segments.len(), 1);

    let segment = &segments[0];
    assert_eq!(segment.stop, 1);
    assert_eq!(segment.edge, DirectedEdge::forward(A));
    assert_relative_eq!(segment.start, 20.0);
    assert_relative_eq!(segment.end, 70.0);
    assert_eq!(segment.geometry, wkt! { LINESTRING (20. 0., 70. 0.) });
}

#[test]
fn segments_belong_to_closing_stop() {
    let path = MatchedPath {
        edges: vec![
            matched(A, 0, &[(0, 50.0)]),
            matched(B, 1, &[(1, 50.0)]),
            matched(C, 2, &[(2, 50.0)]),
        ],
    };

    let segments = split(&path, &view()).expect("must split");
    let summary = segments
        .iter()
        .map(|segment| (segment.edge.id, segment.stop, segment.start, segment.end))
        .collect::<Vec<_>>();

    assert_eq!(
        summary,
        vec![
            (A, 1, 50.0, 100.0),
            (B, 1, 0.0, 50.0),
            (B, 2, 50.0, 100.0),
            (C, 2, 0.0, 50.0),
        ]
    );

    assert_continuous(&segments);
    assert_eq!(
        segments.first().and_then(|s| s.geometry.0.first()).copied(),
        Some(geo::coord! { x: 50., y: 0. })
    );
    assert_eq!(
        segments.last().and_then(|s| s.geometry.0.last()).copied(),
        Some(geo::coord! { x: 250., y: 0. })
    );
}

#[test]
fn connecting_edges_are_used_whole() {
    let path = MatchedPath {
        edges: vec![
            matched(A, 0, &[(0, 50.0)]),
            matched(B, 0, &[]),
            matched(C, 1, &[(1, 50.0)]),
        ],
    };

    let segments = split(&path, &view()).expect("must split");
    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|segment| segment.stop == 1));

    assert_eq!(segments[1].geometry, wkt! { LINESTRING (100. 0., 200. 0.) });
    assert_relative_eq!(segments[1].length(), 100.0);
    assert_continuous(&segments);
}

#[test]
fn zero_length_pieces_are_skipped() {
    // The first stop projects exactly onto the end of A.
    let path = MatchedPath {
        edges: vec![matched(A, 0, &[(0, 100.0)]), matched(B, 1, &[(1, 60.0)])],
    };

    let segments = split(&path, &view()).expect("must split");
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].edge, DirectedEdge::forward(B));
    assert_eq!(segments[0].stop, 1);
    assert_eq!(segments[0].geometry, wkt! { LINESTRING (100. 0., 160. 0.) });
}

#[test]
fn single_stop_has_no_segments() {
    let path = MatchedPath {
        edges: vec![matched(A, 0, &[(0, 40.0)])],
    };

    assert!(split(&path, &view()).expect("must split").is_empty());
    assert!(split(&MatchedPath::default(), &view())
        .expect("must split")
        .is_empty());
}

#[test]
fn out_of_range_cut_fails() {
    let path = MatchedPath {
        edges: vec![matched(A, 0, &[(0, 20.0), (1, 150.0)])],
    };

    assert!(matches!(
        split(&path, &view()),
        Err(SplitError::Geometry(GeometryError::InvalidRange { .. }))
    ));
}

#[test]
fn unknown_edge_fails_by_name() {
    let missing = DirectedEdge::backward(EdgeId(99));
    let path = MatchedPath {
        edges: vec![
            matched(A, 0, &[(0, 20.0)]),
            MatchedEdge {
                edge: missing,
                stop: 1,
                cuts: SmallVec::from_vec(vec![StopCut {
                    stop: 1,
                    proj_length: 10.0,
                }]),
            },
        ],
    };

    let error = split(&path, &view()).unwrap_err();
    assert_eq!(error, SplitError::MissingEdge(missing));

    let reason = DropReason::from(error);
    assert_eq!(reason.name(), "split_failed");
    assert!(reason.to_string().contains(&missing.to_string()));
}
