use crate::network::{DirectedEdge, NodeId, ShortestPath};
use crate::transition::candidate::{Candidate, CandidateEdge, CandidateId};
use crate::transition::graph::Transition;
use crate::transition::solver::methods::Solver;
use crate::transition::{
    Costing, DropReason, EmissionStrategy, Layer, TransitionContext, TransitionStrategy,
};

use geo::{Coord, Distance, Euclidean, Point};
use log::debug;
use std::time::{Duration, Instant};
#[cfg(feature = "tracing")]
use tracing::Level;

type Connection = (CandidateId, CandidateId, CandidateEdge);

/// The default bound on routed detours, as a multiple of the straight-line
/// distance between the nodes being connected.
pub const DEFAULT_DETOUR_FACTOR: f64 = 4.0;

/// Connects every candidate of a stop to every candidate of the next.
///
/// Transitions along a shared directed edge are priced directly. All other
/// transitions of a stop pair are routed with a single batched shortest-path
/// query over the network, bounded by the [detour factor](Self::with_detour).
#[derive(Clone, Copy, Debug)]
pub struct AllForwardSolver {
    /// The instant after which building further transitions is abandoned.
    deadline: Option<Instant>,

    /// How much longer than the straight line a route may be.
    detour: f64,
}

impl Default for AllForwardSolver {
    fn default() -> Self {
        Self {
            deadline: None,
            detour: DEFAULT_DETOUR_FACTOR,
        }
    }
}

impl AllForwardSolver {
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::default()
        }
    }

    /// Bounds the solver to `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Routes are searched up to `factor` times the straight-line distance
    /// between the connected nodes, plus twice the search radius, priced at
    /// the heaviest weight per length of the view. An infinite factor
    /// searches the whole reachable network.
    pub fn with_detour(self, factor: f64) -> Self {
        Self {
            detour: factor,
            ..self
        }
    }

    fn check_deadline(&self) -> Result<(), DropReason> {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(DropReason::DeadlineExceeded),
            _ => Ok(()),
        }
    }

    /// All transitions from the candidates of `left` to those of `right`.
    fn connections<E, T>(
        &self,
        transition: &Transition<E, T>,
        left: &Layer,
        right: &Layer,
        closes: bool,
    ) -> Vec<Connection>
    where
        E: EmissionStrategy + Send + Sync,
        T: TransitionStrategy + Send + Sync,
    {
        let lookup = |id: &CandidateId| transition.candidates.candidate(id).map(|c| (*id, c));
        let sources = left.nodes.iter().filter_map(lookup).collect::<Vec<_>>();
        let targets = right.nodes.iter().filter_map(lookup).collect::<Vec<_>>();

        let mut connections = Vec::new();
        let mut crossing: Vec<(CandidateId, &Candidate, CandidateId, &Candidate)> = Vec::new();

        for (a, source) in &sources {
            for (b, target) in &targets {
                if source.edge != target.edge {
                    crossing.push((*a, *source, *b, *target));
                    continue;
                }

                // Reversed projections on one edge build no transition.
                let context = TransitionContext::same_edge(*source, *target);
                if let Some(cost) = transition.heuristics.transition(context) {
                    connections.push((*a, *b, CandidateEdge::same_edge(cost, source.edge)));
                }
            }
        }

        let pairs = crossing
            .iter()
            .map(|(_, source, _, target)| (source.target, target.source))
            .collect::<Vec<(NodeId, NodeId)>>();

        let max_cost = self.route_bound(transition, &crossing);
        let routes = transition.view.shortest_paths_within(&pairs, max_cost);

        for ((a, source, b, target), route) in crossing.into_iter().zip(routes) {
            // Unreachable transitions are discarded.
            let Some(route) = route else {
                continue;
            };

            let context = TransitionContext::cross_edge(source, target, &route);
            if let Some(cost) = transition.heuristics.transition(context) {
                let edge = CandidateEdge::cross_edge(cost, source.edge, &route, target.edge, closes);
                connections.push((a, b, edge));
            }
        }

        connections
    }

    /// The heaviest route worth searching between the candidates of `crossing`.
    fn route_bound<E, T>(
        &self,
        transition: &Transition<E, T>,
        crossing: &[(CandidateId, &Candidate, CandidateId, &Candidate)],
    ) -> f64
    where
        E: EmissionStrategy + Send + Sync,
        T: TransitionStrategy + Send + Sync,
    {
        if !self.detour.is_finite() {
            return f64::INFINITY;
        }

        let view = transition.view;
        let position = |edge: &DirectedEdge, end: fn(&[Coord]) -> Option<&Coord>| {
            view.edge(edge)
                .and_then(|edge| end(edge.geometry.0.as_slice()))
                .copied()
        };

        let span = crossing
            .iter()
            .filter_map(|(_, source, _, target)| {
                let from = position(&source.edge, <[Coord]>::last)?;
                let to = position(&target.edge, <[Coord]>::first)?;
                Some(Euclidean.distance(Point::from(from), Point::from(to)))
            })
            .fold(0.0, f64::max);

        let reach = self.detour * span + 2.0 * transition.search.radius;
        reach * view.weight_per_length()
    }
}

impl Solver for AllForwardSolver {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::DEBUG))]
    fn prework<E, T>(&self, transition: &mut Transition<E, T>) -> Result<(), DropReason>
    where
        E: EmissionStrategy + Send + Sync,
        T: TransitionStrategy + Send + Sync,
    {
        let last = transition.layers.len().saturating_sub(1);

        for (stop, pair) in transition.layers.layers.windows(2).enumerate() {
            self.check_deadline()?;

            let closes = stop + 1 == last;
            let connections = self.connections(transition, &pair[0], &pair[1], closes);

            if connections.is_empty() {
                debug!("No transition from stop {} to stop {}", stop, stop + 1);
                return Err(DropReason::Disconnected { stop });
            }

            for (source, target, edge) in connections {
                transition.candidates.connect(source, target, edge);
            }
        }

        self.check_deadline()
    }
}
