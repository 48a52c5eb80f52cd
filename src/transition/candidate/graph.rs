use crate::transition::candidate::{
    Candidate, CandidateEdge, CandidateId, CandidateRef, CollapsedPath,
};
use crate::transition::layer::Layers;
use crate::transition::{CollapseError, EndAttachError};

use petgraph::{Directed, Graph};
use rustc_hash::FxHashMap;
use std::fmt::Debug;

/// The transition graph of a single trajectory.
///
/// Nodes are candidates, grouped into one layer per stop. Edges are the
/// transitions between candidates of consecutive stops, weighted by their
/// full cost (which includes the emission cost of both candidates).
#[derive(Default)]
pub struct Candidates {
    /// The graph structure storing the candidates
    /// in their layers, connected piecewise.
    pub(crate) graph: Graph<CandidateRef, CandidateEdge, Directed>,

    /// Candidate flyweight
    pub(crate) lookup: FxHashMap<CandidateId, Candidate>,

    ends: Option<(CandidateId, CandidateId)>,
}

impl Debug for Candidates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "Candidates {{ nodes: {}, transitions: {} }}",
            self.lookup.len(),
            self.graph.edge_count()
        )
    }
}

impl Candidates {
    pub fn insert(&mut self, candidate: Candidate) -> CandidateId {
        let id = self.graph.add_node(CandidateRef::new(candidate.emission));
        self.lookup.insert(id, candidate);
        id
    }

    pub fn connect(&mut self, source: CandidateId, target: CandidateId, edge: CandidateEdge) {
        self.graph.add_edge(source, target, edge);
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// The number of transitions between real candidates.
    pub fn transitions(&self) -> usize {
        self.graph
            .raw_edges()
            .iter()
            .filter(|edge| {
                !self.graph[edge.source()].is_butt() && !self.graph[edge.target()].is_butt()
            })
            .count()
    }

    pub fn attach_ends(&mut self, layers: &Layers) -> Result<(CandidateId, CandidateId), EndAttachError> {
        if self.ends.is_some() {
            return Err(EndAttachError::EndsAlreadyAttached);
        }

        let (Some(first), Some(last)) = (layers.first(), layers.last()) else {
            return Err(EndAttachError::LayerMissing);
        };

        let source = self.graph.add_node(CandidateRef::butt());
        let target = self.graph.add_node(CandidateRef::butt());

        // We need to bind the first and last layers to a singular
        // source and target value so we can route toward this given
        // target, from our own source.
        //
        //                   Stop      Stop
        //                     0         N
        //
        //               __/---+   ...   +---\__
        //              /                       \
        //   SOURCE    +-------+   ...   +-------+  TARGET
        //              \                       /
        //               ‾‾\---+   ...   +---/‾‾
        //
        // Every candidate of the first stop is reached from the source,
        // and every candidate of the last stop reaches the target.
        first.nodes.iter().for_each(|node| {
            self.graph.add_edge(source, *node, CandidateEdge::zero());
        });

        last.nodes.iter().for_each(|node| {
            self.graph.add_edge(*node, target, CandidateEdge::zero());
        });

        self.ends = Some((source, target));
        Ok((source, target))
    }

    /// Collapses the transition graph into the lowest-cost sequence of
    /// candidates, one per stop, from the virtual source to the virtual target.
    ///
    /// Takes an owned value to indicate the structure is terminal.
    pub fn collapse(self) -> Result<CollapsedPath, CollapseError> {
        let (source, target) = self.ends.ok_or(CollapseError::NoEnds)?;

        let (cost, route) = petgraph::algo::astar(
            &self.graph,
            source,
            |node| node == target,
            |e| e.weight().cost,
            |_| 0.0,
        )
        .ok_or(CollapseError::NoPathFound)?;

        // Strip the virtual ends.
        let route = route
            .into_iter()
            .filter(|node| !self.graph[*node].is_butt())
            .collect::<Vec<_>>();

        if route.is_empty() {
            return Err(CollapseError::NoPathFound);
        }

        Ok(CollapsedPath::new(cost, route, self))
    }

    /// The transition from `a` to `b`, if one exists.
    pub fn edge(&self, a: &CandidateId, b: &CandidateId) -> Option<&CandidateEdge> {
        let edge_index = self.graph.find_edge(*a, *b)?;
        self.graph.edge_weight(edge_index)
    }

    pub fn candidate(&self, a: &CandidateId) -> Option<&Candidate> {
        self.lookup.get(a)
    }
}
