use crate::network::{DirectedEdge, NodeId, Projection, Route, ViewEdge};

/// The location of a candidate within a solution.
/// This identifies which stop the candidate belongs to, and its rank within that stop.
///
/// Candidates of a stop are ranked by their distance to the observed point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CandidateLocation {
    pub stop: usize,
    pub rank: usize,
}

/// Represents a possible match of an observed point onto a directed edge.
///
/// Holds the [edge](#field.edge) on the underlying network with its oriented
/// endpoints, the projection of the observed point upon it, the emission
/// cost of choosing it, and its [location](#field.location) in the solution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub edge: DirectedEdge,
    pub source: NodeId,
    pub target: NodeId,

    pub weight: f64,
    pub length: f64,

    /// Distance along the oriented edge to the projected point.
    pub proj_length: f64,

    /// Perpendicular distance from the observed point to the edge.
    pub distance: f64,

    pub emission: f64,
    pub location: CandidateLocation,
}

impl Candidate {
    pub fn new(
        edge: &ViewEdge,
        projection: Projection,
        emission: f64,
        location: CandidateLocation,
    ) -> Self {
        Self {
            edge: edge.edge,
            source: edge.source,
            target: edge.target,
            weight: edge.weight,
            length: edge.length,
            proj_length: projection.proj_length,
            distance: projection.distance,
            emission,
            location,
        }
    }

    /// The share of the edge weight lying before the projected point.
    #[inline]
    pub fn proj_weight(&self) -> f64 {
        if self.length > 0.0 {
            self.proj_length * self.weight / self.length
        } else {
            0.0
        }
    }
}

/// How one candidate is reached from another.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionKind {
    /// Links a virtual end to the real candidates, at no cost.
    Virtual,

    /// Both candidates lie on the same directed edge, the second
    /// no earlier than the first.
    SameEdge,

    /// The candidates are joined by a shortest path of weight `distance`
    /// from the end of the first edge to the start of the second.
    ///
    /// When `closes` is set, the transition reaches the final stop and
    /// its path also holds the edge of the target candidate.
    CrossEdge { distance: f64, closes: bool },
}

/// Represents the edge between two candidates within the [`Candidates`](super::Candidates) graph.
#[derive(Clone, Debug, PartialEq)]
pub struct CandidateEdge {
    pub cost: f64,
    pub kind: TransitionKind,

    /// The network edges travelled by the transition.
    pub path: Vec<DirectedEdge>,
}

impl CandidateEdge {
    pub fn zero() -> Self {
        Self {
            cost: 0.0,
            kind: TransitionKind::Virtual,
            path: vec![],
        }
    }

    pub fn same_edge(cost: f64, edge: DirectedEdge) -> Self {
        Self {
            cost,
            kind: TransitionKind::SameEdge,
            path: vec![edge],
        }
    }

    pub fn cross_edge(
        cost: f64,
        source: DirectedEdge,
        route: &Route,
        target: DirectedEdge,
        closes: bool,
    ) -> Self {
        let mut path = Vec::with_capacity(route.edges.len() + 2);
        path.push(source);
        path.extend_from_slice(&route.edges);
        if closes {
            path.push(target);
        }

        Self {
            cost,
            kind: TransitionKind::CrossEdge {
                distance: route.distance,
                closes,
            },
            path,
        }
    }

    /// The edges travelled strictly between the source and target candidate edges.
    pub fn connecting(&self) -> &[DirectedEdge] {
        match self.kind {
            TransitionKind::CrossEdge { closes, .. } => {
                let end = self.path.len().saturating_sub(usize::from(closes));
                self.path.get(1..end).unwrap_or_default()
            }
            _ => &[],
        }
    }
}
