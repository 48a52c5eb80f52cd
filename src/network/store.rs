use crate::error::{MatchError, NetworkError};
use crate::network::{EdgeId, NetworkEdge, NetworkView, Weighting};

use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};

/// An immutable, in-memory street network.
///
/// The network only stores edges as they were given. Routing and spatial
/// queries are performed on a [`NetworkView`], obtained for a chosen
/// [`Weighting`] through [`Network::view`].
#[derive(Clone, Default)]
pub struct Network {
    edges: Vec<NetworkEdge>,
    lookup: FxHashMap<EdgeId, usize>,
}

impl Debug for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Network with Edges: {}", self.edges.len())
    }
}

impl Network {
    /// Assembles a network from its edges.
    ///
    /// Fails if an edge identifier is repeated, or an edge geometry has
    /// fewer than two coordinates.
    pub fn new(edges: impl IntoIterator<Item = NetworkEdge>) -> Result<Network, NetworkError> {
        let edges = edges.into_iter().collect::<Vec<_>>();
        let mut lookup = FxHashMap::default();
        lookup.reserve(edges.len());

        for (index, edge) in edges.iter().enumerate() {
            if edge.geometry.0.len() < 2 {
                return Err(NetworkError::DegenerateGeometry(edge.id));
            }

            if lookup.insert(edge.id, index).is_some() {
                return Err(NetworkError::DuplicateEdge(edge.id));
            }
        }

        Ok(Network { edges, lookup })
    }

    pub fn edge(&self, id: EdgeId) -> Option<&NetworkEdge> {
        self.lookup.get(&id).map(|index| &self.edges[*index])
    }

    pub fn edges(&self) -> impl Iterator<Item = &NetworkEdge> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Builds the directed, weighted view of the network for `weighting`.
    ///
    /// Every edge is weighted up-front, so a weight which cannot be routed
    /// upon (negative, missing or non-finite) fails here, before any matching.
    pub fn view(&self, weighting: &Weighting) -> Result<NetworkView, MatchError> {
        NetworkView::new(self, weighting.clone())
    }
}
