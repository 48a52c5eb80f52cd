use crate::network::NetworkView;
use crate::transition::*;

use geo::Point;

/// A per-trajectory transition graph based on the Hidden-Markov-Model structure.
///
/// This is the orchestration point for resolving a single trajectory. It
/// requires a [view](NetworkView) of the network on instantiation, as well
/// as the stops of the trajectory to resolve.
///
/// ### Example
///
/// ```rust
/// use geo::Point;
/// use streetmatch::network::NetworkView;
/// use streetmatch::transition::{
///     AllForwardSolver, CollapsedPath, CostingStrategies, SearchParameters, Transition,
///     WeightedEmission, WeightedTransition,
/// };
///
/// fn resolve(view: &NetworkView, stops: &[Point]) -> Option<CollapsedPath> {
///     let costing: CostingStrategies<WeightedEmission, WeightedTransition> =
///         CostingStrategies::default();
///
///     let transition = Transition::new(view, stops, SearchParameters::default(), costing);
///
///     if transition.missing_stops() > 0 {
///         return None;
///     }
///
///     transition.solve(AllForwardSolver::default()).ok()
/// }
/// ```
pub struct Transition<'a, E, T>
where
    E: EmissionStrategy,
    T: TransitionStrategy,
{
    pub(crate) view: &'a NetworkView,
    pub(crate) heuristics: CostingStrategies<E, T>,
    pub(crate) search: SearchParameters,

    pub(crate) candidates: Candidates,
    pub(crate) layers: Layers,
}

impl<'a, E, T> Transition<'a, E, T>
where
    E: EmissionStrategy + Send + Sync,
    T: TransitionStrategy + Send + Sync,
{
    /// Creates a new transition graph from the stops and heuristics,
    /// searching the candidates of every stop.
    pub fn new(
        view: &'a NetworkView,
        stops: &[Point],
        search: SearchParameters,
        heuristics: CostingStrategies<E, T>,
    ) -> Transition<'a, E, T> {
        let generator = LayerGenerator::new(view, &heuristics, search);
        let (layers, candidates) = generator.with_points(stops);

        Transition {
            view,
            heuristics,
            search,
            candidates,
            layers,
        }
    }

    /// The number of stops which found no candidate.
    ///
    /// A trajectory with missing stops is incomplete and cannot be resolved.
    pub fn missing_stops(&self) -> usize {
        self.layers.empty_layers()
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }

    /// Solves the transition graph, using the provided [`Solver`].
    pub fn solve(self, solver: impl Solver) -> Result<CollapsedPath, DropReason> {
        solver.solve(self)
    }

    /// Attaches the virtual ends and collapses the transition graph into
    /// its lowest-cost path.
    ///
    /// Consumes the transition structure, as attaching the ends is an
    /// irreversible modification of the candidate graph.
    pub(crate) fn collapse(mut self) -> Result<CollapsedPath, DropReason> {
        self.candidates
            .attach_ends(&self.layers)
            .map_err(CollapseError::from)?;

        Ok(self.candidates.collapse()?)
    }
}
