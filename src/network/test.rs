use crate::error::{MatchError, NetworkError};
use crate::fixtures::{self, A, B, C};
use crate::network::*;

use approx::assert_relative_eq;
use geo::{coord, point, wkt, LineString};
use std::num::NonZeroUsize;

#[test]
fn rejects_duplicate_and_degenerate_edges() {
    let mut edges = fixtures::corridor_edges();
    edges.push(fixtures::straight(A.0, 7, 8, (0.0, 10.0), (10.0, 10.0)));
    assert_eq!(
        Network::new(edges).unwrap_err(),
        NetworkError::DuplicateEdge(A)
    );

    let degenerate = NetworkEdge::new(9, 1, 2, LineString::new(vec![coord! { x: 0., y: 0. }]));
    assert_eq!(
        Network::new(vec![degenerate]).unwrap_err(),
        NetworkError::DegenerateGeometry(EdgeId(9))
    );
}

#[test]
fn weighting_is_validated_up_front() {
    let edges = fixtures::corridor_edges()
        .into_iter()
        .map(|edge| {
            let weight = if edge.id == B { -1.0 } else { 1.0 };
            edge.with_attribute("cost", weight)
        })
        .collect::<Vec<_>>();

    let network = Network::new(edges).expect("network must build");
    assert_eq!(
        network.view(&Weighting::attribute("cost")).unwrap_err(),
        MatchError::NegativeWeight {
            edge: B,
            weight: -1.0
        }
    );

    assert!(matches!(
        network.view(&Weighting::attribute("missing")),
        Err(MatchError::MissingAttribute { edge, .. }) if edge == A
    ));

    // The geometric length is always a valid weight.
    assert!(network.view(&Weighting::Length).is_ok());
}

#[test]
fn weighting_parses_from_names() {
    assert_eq!("length".parse::<Weighting>(), Ok(Weighting::Length));
    assert_eq!("LENGTH".parse::<Weighting>(), Ok(Weighting::Length));
    assert_eq!(
        "travel_time".parse::<Weighting>(),
        Ok(Weighting::attribute("travel_time"))
    );
    assert_eq!(Weighting::attribute("travel_time").to_string(), "travel_time");
}

#[test]
fn view_orients_directed_edges() {
    let view = fixtures::corridor()
        .view(&Weighting::Length)
        .expect("view must build");

    assert_eq!(view.node_count(), 4);
    assert_eq!(view.edge_count(), 6);

    let backward = view
        .edge(&DirectedEdge::backward(B))
        .expect("two-way edge has a backward direction");
    assert_eq!(backward.source, NodeId(3));
    assert_eq!(backward.target, NodeId(2));
    assert_eq!(backward.geometry, wkt! { LINESTRING (200. 0., 100. 0.) });
    assert_relative_eq!(backward.length, 100.0);
    assert_relative_eq!(backward.weight, 100.0);

    let oneway = fixtures::oneway_corridor()
        .view(&Weighting::Length)
        .expect("view must build");
    assert_eq!(oneway.edge_count(), 3);
    assert!(oneway.edge(&DirectedEdge::backward(B)).is_none());
}

#[test]
fn candidates_are_ordered_and_bounded() {
    let view = fixtures::corridor()
        .view(&Weighting::Length)
        .expect("view must build");

    // Sits above the node shared by edges A and B.
    let point = point!(x: 100., y: 3.);
    let candidates = view.candidates_near(&point, 10.0, None);

    let edges = candidates.iter().map(|c| c.edge).collect::<Vec<_>>();
    assert_eq!(
        edges,
        vec![
            DirectedEdge::forward(A),
            DirectedEdge::backward(A),
            DirectedEdge::forward(B),
            DirectedEdge::backward(B),
        ]
    );

    assert_relative_eq!(candidates[0].proj_length, 100.0);
    assert_relative_eq!(candidates[1].proj_length, 0.0);
    assert_relative_eq!(candidates[2].proj_length, 0.0);
    assert_relative_eq!(candidates[3].proj_length, 100.0);
    candidates
        .iter()
        .for_each(|candidate| assert_relative_eq!(candidate.distance, 3.0));

    let nearest = view.candidates_near(&point, 10.0, NonZeroUsize::new(1));
    assert_eq!(nearest.len(), 1);
    assert_eq!(nearest[0].edge, DirectedEdge::forward(A));

    // Nothing is within the radius.
    assert!(view.candidates_near(&point, 2.0, None).is_empty());
}

#[test]
fn candidates_satisfy_projection_bounds() {
    let view = fixtures::grid(6, 50.0)
        .view(&Weighting::Length)
        .expect("view must build");

    let points = [
        point!(x: 12., y: 7.),
        point!(x: 49., y: 51.),
        point!(x: 133., y: 260.),
        point!(x: 260., y: 133.),
        point!(x: -5., y: -5.),
        point!(x: 250., y: 250.),
        point!(x: 301., y: 18.),
    ];

    for point in points {
        for candidate in view.candidates_near(&point, 30.0, None) {
            let edge = view.edge(&candidate.edge).expect("candidate edge exists");
            assert!(candidate.proj_length >= 0.0);
            assert!(candidate.proj_length <= edge.length);
            assert!(candidate.distance >= 0.0);
            assert!(candidate.distance <= 30.0);
        }
    }
}

#[test]
fn zero_length_edges_are_not_candidates() {
    let mut edges = fixtures::corridor_edges();
    edges.push(NetworkEdge::new(
        9,
        5,
        5,
        wkt! { LINESTRING (50. 0., 50. 0.) },
    ));

    let view = Network::new(edges)
        .expect("network must build")
        .view(&Weighting::Length)
        .expect("view must build");

    let candidates = view.candidates_near(&point!(x: 50., y: 1.), 10.0, None);
    assert!(!candidates.is_empty());
    assert!(candidates.iter().all(|c| c.edge.id != EdgeId(9)));

    // Still present in the routing graph.
    assert!(view.edge(&DirectedEdge::forward(EdgeId(9))).is_some());
}

#[test]
fn shortest_path_follows_direction() {
    let view = fixtures::corridor()
        .view(&Weighting::Length)
        .expect("view must build");

    let route = view
        .shortest_path(NodeId(1), NodeId(4))
        .expect("corridor is connected");
    assert_eq!(
        route.edges,
        vec![
            DirectedEdge::forward(A),
            DirectedEdge::forward(B),
            DirectedEdge::forward(C)
        ]
    );
    assert_relative_eq!(route.distance, 300.0);

    let reverse = view
        .shortest_path(NodeId(3), NodeId(1))
        .expect("two-way corridor is connected");
    assert_eq!(
        reverse.edges,
        vec![DirectedEdge::backward(B), DirectedEdge::backward(A)]
    );

    let same = view
        .shortest_path(NodeId(2), NodeId(2))
        .expect("a node reaches itself");
    assert!(same.edges.is_empty());
    assert_relative_eq!(same.distance, 0.0);

    let oneway = fixtures::oneway_corridor()
        .view(&Weighting::Length)
        .expect("view must build");
    assert!(oneway.shortest_path(NodeId(4), NodeId(1)).is_none());
}

#[test_log::test]
fn batch_answers_duplicates_identically() {
    let view = fixtures::oneway_corridor()
        .view(&Weighting::Length)
        .expect("view must build");

    let pairs = [
        (NodeId(1), NodeId(4)),
        (NodeId(4), NodeId(1)),
        (NodeId(1), NodeId(4)),
        (NodeId(2), NodeId(2)),
        (NodeId(1), NodeId(3)),
        (NodeId(1), NodeId(99)),
    ];

    let routes = view.shortest_paths_batch(&pairs);
    assert_eq!(routes.len(), pairs.len());

    assert!(routes[0].is_some());
    assert_eq!(routes[0], routes[2]);
    assert_eq!(routes[0], view.shortest_path(NodeId(1), NodeId(4)));
    assert!(routes[1].is_none());
    assert_eq!(routes[3], Some(Route::default()));
    assert_eq!(
        routes[4].as_ref().map(|route| route.edges.clone()),
        Some(vec![DirectedEdge::forward(A), DirectedEdge::forward(B)])
    );
    assert!(routes[5].is_none());
}

#[test]
fn batch_prefers_lighter_paths() {
    // A direct but heavy edge from n1 to n3, alongside the corridor.
    let mut edges = fixtures::corridor_edges()
        .into_iter()
        .map(|edge| edge.with_attribute("cost", 1.0))
        .collect::<Vec<_>>();
    edges.push(fixtures::straight(8, 1, 3, (0.0, 0.0), (200.0, 0.0)).with_attribute("cost", 5.0));

    let view = Network::new(edges)
        .expect("network must build")
        .view(&Weighting::attribute("cost"))
        .expect("view must build");

    let routes = view.shortest_paths_batch(&[(NodeId(1), NodeId(3))]);
    let route = routes[0].as_ref().expect("n3 is reachable");

    assert_eq!(
        route.edges,
        vec![DirectedEdge::forward(A), DirectedEdge::forward(B)]
    );
    assert_relative_eq!(route.distance, 2.0);
}

#[test]
fn non_finite_weights_are_rejected() {
    for weight in [f64::NAN, f64::INFINITY] {
        let edges = fixtures::corridor_edges()
            .into_iter()
            .map(|edge| {
                let value = if edge.id == C { weight } else { 1.0 };
                edge.with_attribute("cost", value)
            })
            .collect::<Vec<_>>();

        let network = Network::new(edges).expect("network must build");
        assert_eq!(
            network.view(&Weighting::attribute("cost")).unwrap_err(),
            MatchError::NonFiniteWeight { edge: C }
        );
    }
}

#[test]
fn bounded_batch_stops_at_max_cost() {
    let view = fixtures::oneway_corridor()
        .view(&Weighting::Length)
        .expect("view must build");

    let pairs = [
        (NodeId(1), NodeId(2)),
        (NodeId(1), NodeId(4)),
        (NodeId(2), NodeId(3)),
    ];

    let bounded = view.shortest_paths_within(&pairs, 150.0);
    assert_eq!(
        bounded[0].as_ref().map(|route| route.edges.clone()),
        Some(vec![DirectedEdge::forward(A)])
    );
    assert!(bounded[1].is_none());
    assert!(bounded[2].is_some());

    // The unbounded batch still reaches the far end.
    let unbounded = view.shortest_paths_batch(&pairs);
    assert_eq!(unbounded[1], view.shortest_path(NodeId(1), NodeId(4)));
    assert!(unbounded[1].is_some());
}

#[test]
fn weight_per_length_tracks_the_heaviest_edge() {
    let edges = fixtures::corridor_edges()
        .into_iter()
        .map(|edge| {
            let cost = if edge.id == B { 250.0 } else { 50.0 };
            edge.with_attribute("cost", cost)
        })
        .collect::<Vec<_>>();

    let network = Network::new(edges).expect("network must build");
    let view = network
        .view(&Weighting::attribute("cost"))
        .expect("view must build");
    assert_relative_eq!(view.weight_per_length(), 2.5);

    let lengths = network.view(&Weighting::Length).expect("view must build");
    assert_relative_eq!(lengths.weight_per_length(), 1.0);
}
