//! Synthetic networks shared by the unit tests.

use crate::network::{EdgeId, Network, NetworkEdge, NodeId};

use geo::{coord, LineString};

/// A straight east-west corridor of three edges, `A -> B -> C`:
///
/// ```text
///   n1 ---- 1 ---- n2 ---- 2 ---- n3 ---- 3 ---- n4
/// (0,0)         (100,0)        (200,0)        (300,0)
/// ```
pub(crate) const A: EdgeId = EdgeId(1);
pub(crate) const B: EdgeId = EdgeId(2);
pub(crate) const C: EdgeId = EdgeId(3);

pub(crate) fn straight(id: u64, source: u64, target: u64, from: (f64, f64), to: (f64, f64)) -> NetworkEdge {
    let geometry = LineString::new(vec![
        coord! { x: from.0, y: from.1 },
        coord! { x: to.0, y: to.1 },
    ]);

    NetworkEdge::new(id, source, target, geometry)
}

pub(crate) fn corridor_edges() -> Vec<NetworkEdge> {
    vec![
        straight(A.0, 1, 2, (0.0, 0.0), (100.0, 0.0)),
        straight(B.0, 2, 3, (100.0, 0.0), (200.0, 0.0)),
        straight(C.0, 3, 4, (200.0, 0.0), (300.0, 0.0)),
    ]
}

pub(crate) fn corridor() -> Network {
    Network::new(corridor_edges()).expect("corridor edges are valid")
}

/// A corridor whose edges may only be travelled forward.
pub(crate) fn oneway_corridor() -> Network {
    Network::new(
        corridor_edges()
            .into_iter()
            .map(|edge| edge.with_oneway(true)),
    )
    .expect("corridor edges are valid")
}

/// A square grid of `size x size` nodes spaced `spacing` apart, with
/// two-way edges between horizontal and vertical neighbours.
///
/// Node `(col, row)` has the identifier `row * size + col`.
pub(crate) fn grid(size: u64, spacing: f64) -> Network {
    let node = |col: u64, row: u64| NodeId(row * size + col);
    let position = |col: u64, row: u64| (col as f64 * spacing, row as f64 * spacing);

    let mut edges = Vec::new();
    let mut next = 0;
    for row in 0..size {
        for col in 0..size {
            if col + 1 < size {
                edges.push(straight(
                    next,
                    node(col, row).0,
                    node(col + 1, row).0,
                    position(col, row),
                    position(col + 1, row),
                ));
                next += 1;
            }

            if row + 1 < size {
                edges.push(straight(
                    next,
                    node(col, row).0,
                    node(col, row + 1).0,
                    position(col, row),
                    position(col, row + 1),
                ));
                next += 1;
            }
        }
    }

    Network::new(edges).expect("grid edges are valid")
}
