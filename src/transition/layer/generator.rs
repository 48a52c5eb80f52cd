use crate::network::{NetworkView, Scan};
use crate::transition::candidate::{Candidate, CandidateLocation, Candidates};
use crate::transition::layer::{Layer, Layers};
use crate::transition::{
    Costing, CostingStrategies, EmissionContext, EmissionStrategy, TransitionStrategy,
};

use geo::Point;
use log::trace;
use measure_time::debug_time;
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use std::num::NonZeroUsize;
use wkt::ToWkt;

pub const DEFAULT_SEARCH_RADIUS: f64 = 50.0;
pub const DEFAULT_K_NEAREST: usize = 8;

/// How far, and how many, candidates are searched for around each stop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchParameters {
    /// Maximum perpendicular distance from a stop to a candidate edge.
    pub radius: f64,

    /// The number of closest candidates kept per stop, or all when `None`.
    pub k_nearest: Option<NonZeroUsize>,
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SEARCH_RADIUS,
            k_nearest: NonZeroUsize::new(DEFAULT_K_NEAREST),
        }
    }
}

/// Generates the layers within the transition graph.
///
/// Each layer represents a stop of the trajectory, and each node in the
/// layer a candidate edge within the search radius of that stop, found by
/// projecting the stop upon the edges around it.
pub struct LayerGenerator<'a, E, T>
where
    E: EmissionStrategy,
    T: TransitionStrategy,
{
    search: SearchParameters,
    heuristics: &'a CostingStrategies<E, T>,
    view: &'a NetworkView,
}

impl<'a, E, T> LayerGenerator<'a, E, T>
where
    E: EmissionStrategy + Send + Sync,
    T: TransitionStrategy + Send + Sync,
{
    pub fn new(
        view: &'a NetworkView,
        heuristics: &'a CostingStrategies<E, T>,
        search: SearchParameters,
    ) -> Self {
        LayerGenerator {
            view,
            heuristics,
            search,
        }
    }

    /// Searches the candidates of every stop in parallel, then inserts
    /// them into a fresh candidate graph in stop order, so identifiers
    /// are stable for a given input.
    pub fn with_points(&self, input: &[Point]) -> (Layers, Candidates) {
        debug_time!("candidate search over {} stops", input.len());

        let found = input
            .par_iter()
            .enumerate()
            .map(|(stop, origin)| {
                trace!("Generating layer {} (Point={})", stop, origin.wkt_string());

                self.view
                    .candidates_near(origin, self.search.radius, self.search.k_nearest)
                    .into_iter()
                    .enumerate()
                    .filter_map(|(rank, projection)| {
                        let edge = self.view.edge(&projection.edge)?;

                        let emission = self.heuristics.emission(EmissionContext::new(
                            projection.distance,
                            edge.weight,
                            edge.length,
                        ));

                        let location = CandidateLocation { stop, rank };
                        Some(Candidate::new(edge, projection, emission, location))
                    })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let mut candidates = Candidates::default();
        let layers = found
            .into_iter()
            .zip(input)
            .map(|(found, origin)| Layer {
                nodes: found
                    .into_iter()
                    .map(|candidate| candidates.insert(candidate))
                    .collect(),
                origin: *origin,
            })
            .collect::<Layers>();

        (layers, candidates)
    }
}
