use crate::error::MatchError;
use crate::geometry;
use crate::network::{DirectedEdge, Direction, EdgeId, Network, NodeId, Weighting};

use geo::{BoundingRect, LineString, Point};
use log::debug;
use measure_time::debug_time;
use petgraph::prelude::DiGraphMap;
use rstar::{RTree, RTreeObject, AABB};
use rustc_hash::{FxHashMap, FxHasher};
use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;
#[cfg(feature = "tracing")]
use tracing::Level;

pub type GraphStructure = DiGraphMap<NodeId, Link, BuildHasherDefault<FxHasher>>;

/// The routing weight between two nodes, and the directed edge
/// which carries it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub weight: f64,
    pub edge: DirectedEdge,
}

/// A directed edge of the [`NetworkView`].
///
/// Endpoints and geometry are oriented in the direction of travel, so a
/// [`Direction::Backward`] edge starts at the stored `target` and follows
/// the reversed geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewEdge {
    pub edge: DirectedEdge,
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
    pub length: f64,
    pub geometry: LineString,
}

/// Spatial index entry for a stored edge, regardless of direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedEdge {
    pub id: EdgeId,
    envelope: AABB<Point>,
}

impl RTreeObject for IndexedEdge {
    type Envelope = AABB<Point>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// The directed, weighted view of a [`Network`].
///
/// Holds the routing graph, in which every logical direction of every edge
/// is an arc between its oriented endpoints, and the spatial index used
/// for candidate search. The view is read-only once built and may be shared
/// across threads.
pub struct NetworkView {
    weighting: Weighting,
    pub(crate) graph: GraphStructure,
    pub(crate) edges: FxHashMap<DirectedEdge, ViewEdge>,
    pub(crate) index: RTree<IndexedEdge>,

    /// The largest weight per unit of length over all edges.
    weight_per_length: f64,
}

impl Debug for NetworkView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "NetworkView {{ weighting: {}, nodes: {}, edges: {} }}",
            self.weighting,
            self.node_count(),
            self.edge_count()
        )
    }
}

impl NetworkView {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
    pub(crate) fn new(network: &Network, weighting: Weighting) -> Result<NetworkView, MatchError> {
        debug_time!("view construction");

        let mut graph = GraphStructure::default();
        let mut edges = FxHashMap::default();
        let mut indexed = Vec::with_capacity(network.len());
        let mut weight_per_length: f64 = 0.0;

        for edge in network.edges() {
            let weight = weighting.evaluate(edge)?;
            let length = edge.length();

            for directed in edge.directions() {
                let (source, target, geometry) = match directed.direction {
                    Direction::Forward => (edge.source, edge.target, edge.geometry.clone()),
                    Direction::Backward => {
                        (edge.target, edge.source, geometry::reverse(&edge.geometry))
                    }
                };

                // Parallel arcs collapse onto the lightest, keeping the first on ties.
                let lighter = graph
                    .edge_weight(source, target)
                    .map_or(true, |link| weight < link.weight);

                if lighter {
                    graph.add_edge(source, target, Link { weight, edge: directed });
                }

                edges.insert(
                    directed,
                    ViewEdge {
                        edge: directed,
                        source,
                        target,
                        weight,
                        length,
                        geometry,
                    },
                );
            }

            // Zero-length edges are routable, but never matched onto.
            if length > 0.0 {
                weight_per_length = weight_per_length.max(weight / length);

                if let Some(rect) = edge.geometry.bounding_rect() {
                    indexed.push(IndexedEdge {
                        id: edge.id,
                        envelope: AABB::from_corners(rect.min().into(), rect.max().into()),
                    });
                }
            } else if weight > 0.0 {
                weight_per_length = f64::INFINITY;
            }
        }

        debug!(
            "Built view over {} nodes and {} directed edges ({} indexed)",
            graph.node_count(),
            edges.len(),
            indexed.len()
        );

        Ok(NetworkView {
            weighting,
            graph,
            edges,
            index: RTree::bulk_load(indexed),
            weight_per_length,
        })
    }

    pub fn weighting(&self) -> &Weighting {
        &self.weighting
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// The number of directed edges in the view.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.graph.contains_node(node)
    }

    #[inline]
    pub fn edge(&self, edge: &DirectedEdge) -> Option<&ViewEdge> {
        self.edges.get(edge)
    }

    /// The largest ratio of weight to geometric length of any edge.
    ///
    /// Travelling a distance `d` over the view never costs more than
    /// `d * weight_per_length()`. A weighted zero-length edge makes it infinite.
    pub fn weight_per_length(&self) -> f64 {
        self.weight_per_length
    }

    pub fn index(&self) -> &RTree<IndexedEdge> {
        &self.index
    }
}
