use crate::network::{DirectedEdge, NetworkView, NodeId};

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use pathfinding::prelude::dijkstra_reach;
use petgraph::visit::EdgeRef;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use rustc_hash::{FxHashMap, FxHashSet, FxHasher};
use std::hash::BuildHasherDefault;
#[cfg(feature = "tracing")]
use tracing::Level;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// A path through the network between two nodes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    /// The directed edges travelled, in order.
    pub edges: Vec<DirectedEdge>,

    /// The total weight of the travelled edges.
    pub distance: f64,
}

pub trait ShortestPath {
    /// The lightest path from `source` to `target`.
    ///
    /// A node reaches itself through an empty route of zero distance.
    /// Returns `None` if `target` cannot be reached.
    fn shortest_path(&self, source: NodeId, target: NodeId) -> Option<Route>;

    /// Resolves every `(source, target)` pair, with the same semantics as
    /// [`ShortestPath::shortest_path`].
    ///
    /// The output is index-aligned with `pairs`. Pairs are grouped by source
    /// so each source is expanded once, and repeated pairs are solved once.
    fn shortest_paths_batch(&self, pairs: &[(NodeId, NodeId)]) -> Vec<Option<Route>> {
        self.shortest_paths_within(pairs, f64::INFINITY)
    }

    /// As [`ShortestPath::shortest_paths_batch`], but stops expanding a
    /// source once the travelled weight exceeds `max_cost`. Pairs which are
    /// only reachable beyond it resolve to `None`.
    fn shortest_paths_within(&self, pairs: &[(NodeId, NodeId)], max_cost: f64) -> Vec<Option<Route>>;
}

impl ShortestPath for NetworkView {
    fn shortest_path(&self, source: NodeId, target: NodeId) -> Option<Route> {
        if !self.contains_node(source) || !self.contains_node(target) {
            return None;
        }

        if source == target {
            return Some(Route::default());
        }

        let (distance, nodes) = petgraph::algo::astar(
            &self.graph,
            source,
            |node| node == target,
            |e| e.weight().weight,
            |_| 0.0,
        )?;

        let edges = nodes
            .windows(2)
            .map(|pair| self.graph.edge_weight(pair[0], pair[1]).map(|link| link.edge))
            .collect::<Option<Vec<_>>>()?;

        Some(Route { edges, distance })
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::DEBUG))]
    fn shortest_paths_within(&self, pairs: &[(NodeId, NodeId)], max_cost: f64) -> Vec<Option<Route>> {
        let mut grouped: FxIndexMap<NodeId, FxHashSet<NodeId>> = FxIndexMap::default();
        for (source, target) in pairs {
            grouped.entry(*source).or_default().insert(*target);
        }

        let solved = grouped
            .into_iter()
            .collect::<Vec<_>>()
            .into_par_iter()
            .flat_map_iter(|(source, targets)| {
                self.reach(source, &targets, max_cost)
                    .into_iter()
                    .map(move |(target, route)| ((source, target), route))
            })
            .collect::<FxHashMap<(NodeId, NodeId), Route>>();

        pairs.iter().map(|pair| solved.get(pair).cloned()).collect()
    }
}

impl NetworkView {
    /// Expands outward from `source` until every reachable node of
    /// `targets` has been settled, or the travelled weight exceeds `max_cost`.
    fn reach(
        &self,
        source: NodeId,
        targets: &FxHashSet<NodeId>,
        max_cost: f64,
    ) -> FxHashMap<NodeId, Route> {
        let mut found = FxHashMap::default();
        if !self.contains_node(source) {
            return found;
        }

        let mut parents: FxHashMap<NodeId, NodeId> = FxHashMap::default();
        let reachable = dijkstra_reach(&source, |node: &NodeId| {
            self.graph
                .edges(*node)
                .map(|(_, next, link)| (next, OrderedFloat(link.weight)))
        })
        .take_while(|item| item.total_cost.into_inner() <= max_cost);

        for item in reachable {
            if let Some(parent) = item.parent {
                parents.insert(item.node, parent);
            }

            if !targets.contains(&item.node) {
                continue;
            }

            let edges = path_builder(&item.node, &parents)
                .windows(2)
                .map(|pair| self.graph.edge_weight(pair[0], pair[1]).map(|link| link.edge))
                .collect::<Option<Vec<_>>>();

            if let Some(edges) = edges {
                let distance = item.total_cost.into_inner();
                found.insert(item.node, Route { edges, distance });
            }

            if found.len() == targets.len() {
                break;
            }
        }

        found
    }
}

/// Walks the `parents` relation back from `target` to the root, returning
/// the nodes in travel order.
#[inline]
pub(crate) fn path_builder(target: &NodeId, parents: &FxHashMap<NodeId, NodeId>) -> Vec<NodeId> {
    let mut rev = vec![*target];
    let mut next = target;
    while let Some(parent) = parents.get(next) {
        rev.push(*parent);
        next = parent;
    }
    rev.reverse();
    rev
}
