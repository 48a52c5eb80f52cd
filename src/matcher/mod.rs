//! Matches whole sets of observed trajectories onto a [`Network`].
//!
//! Observations are grouped by trajectory in order of first appearance,
//! and every trajectory is resolved independently of the others. A
//! trajectory which cannot be resolved is dropped with a [`DropReason`],
//! without affecting the rest of the call.

use crate::error::MatchError;
use crate::geometry;
use crate::network::{Network, NetworkView};
use crate::segment;
use crate::transition::{
    AllForwardSolver, CostingStrategies, DropReason, MatchedPath, Transition, WeightedEmission,
    WeightedTransition,
};

use geo::{Geometry, Point};
use indexmap::IndexMap;
use log::{debug, info, warn};
use measure_time::debug_time;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::fmt::Debug;
use std::hash::Hash;
#[cfg(feature = "tracing")]
use tracing::Level;

#[doc(hidden)]
pub mod options;
#[doc(hidden)]
pub mod output;


#[doc(inline)]
pub use options::*;
#[doc(inline)]
pub use output::*;

/// The identifier of a trajectory.
pub trait TrajectoryKey: Clone + Eq + Hash + Debug + Send + Sync {}
impl<K> TrajectoryKey for K where K: Clone + Eq + Hash + Debug + Send + Sync {}

/// A single observed position of a trajectory.
///
/// Observations of a trajectory are taken in the order they are given.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation<K> {
    pub trajectory: K,
    pub geometry: Geometry,
}

impl<K> Observation<K> {
    pub fn new(trajectory: K, geometry: impl Into<Geometry>) -> Self {
        Self {
            trajectory,
            geometry: geometry.into(),
        }
    }

    pub fn point(trajectory: K, x: f64, y: f64) -> Self {
        Self::new(trajectory, Point::new(x, y))
    }
}

/// Matches every trajectory within `observations` onto the `network`.
///
/// Fails only for invalid input: a non-point observation, an invalid
/// search radius, or an edge whose weight cannot be used for routing.
/// Failures of individual trajectories are recorded in the
/// [report](MatchOutput::report) instead.
///
/// ### Example
///
/// ```rust
/// use geo::wkt;
/// use streetmatch::{match_trajectories, MatchOptions, Network, NetworkEdge, Observation};
///
/// let network = Network::new([
///     NetworkEdge::new(1u64, 1u64, 2u64, wkt! { LINESTRING (0. 0., 100. 0.) }),
///     NetworkEdge::new(2u64, 2u64, 3u64, wkt! { LINESTRING (100. 0., 200. 0.) }),
/// ])
/// .expect("valid network");
///
/// let observations = [
///     Observation::point("bus", 20.0, 3.0),
///     Observation::point("bus", 150.0, -2.0),
/// ];
///
/// let output = match_trajectories(observations, &network, &MatchOptions::new(10.0))
///     .expect("valid input");
///
/// let length: f64 = output.segments(&"bus").iter().map(|s| s.length()).sum();
/// assert!((length - 130.0).abs() < 1e-6);
/// ```
pub fn match_trajectories<K: TrajectoryKey>(
    observations: impl IntoIterator<Item = Observation<K>>,
    network: &Network,
    options: &MatchOptions,
) -> Result<MatchOutput<K>, MatchError> {
    options.validate()?;

    let view = network.view(&options.weighting)?;
    match_trajectories_with_view(observations, &view, options)
}

/// Matches every trajectory within `observations` onto a prepared view,
/// so that one view may serve many calls.
///
/// The weighting of the view is used in place of the one in `options`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, level = Level::INFO))]
pub fn match_trajectories_with_view<K: TrajectoryKey>(
    observations: impl IntoIterator<Item = Observation<K>>,
    view: &NetworkView,
    options: &MatchOptions,
) -> Result<MatchOutput<K>, MatchError> {
    options.validate()?;

    if view.weighting() != &options.weighting {
        warn!(
            "Matching with view weighting {}, not {}",
            view.weighting(),
            options.weighting
        );
    }

    let trajectories = group(observations)?;
    info!("Matching {} trajectories", trajectories.len());
    debug_time!("matching {} trajectories", trajectories.len());

    let outcomes = trajectories
        .into_iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(trajectory, stops)| {
            let outcome = resolve(view, &stops, options);
            (trajectory, outcome)
        })
        .collect::<Vec<_>>();

    let mut output = MatchOutput::default();
    for (trajectory, outcome) in outcomes {
        let matched = match outcome {
            Ok(matched) => matched,
            Err(reason) => {
                debug!("Dropped trajectory {trajectory:?}: {reason}");
                output.report.dropped.insert(trajectory.clone(), reason);
                TrajectoryMatch::default()
            }
        };

        output.matched.insert(trajectory, matched);
    }

    info!(
        "Matched {} of {} trajectories",
        output.len() - output.report.len(),
        output.len()
    );

    Ok(output)
}

/// Groups the observations by trajectory, in order of first appearance.
fn group<K: TrajectoryKey>(
    observations: impl IntoIterator<Item = Observation<K>>,
) -> Result<IndexMap<K, Vec<Point>>, MatchError> {
    let mut trajectories: IndexMap<K, Vec<Point>> = IndexMap::new();

    for (index, observation) in observations.into_iter().enumerate() {
        let point = match &observation.geometry {
            Geometry::Point(point) => *point,
            other => {
                return Err(MatchError::NonPointGeometry {
                    index,
                    kind: geometry::kind(other),
                })
            }
        };

        trajectories
            .entry(observation.trajectory)
            .or_default()
            .push(point);
    }

    Ok(trajectories)
}

/// Resolves the stops of a single trajectory into its segments.
fn resolve(
    view: &NetworkView,
    stops: &[Point],
    options: &MatchOptions,
) -> Result<TrajectoryMatch, DropReason> {
    let solver = options
        .deadline
        .map(AllForwardSolver::with_timeout)
        .unwrap_or_default()
        .with_detour(options.detour_factor);

    let costing: CostingStrategies<WeightedEmission, WeightedTransition> =
        CostingStrategies::default();
    let transition = Transition::new(view, stops, options.search(), costing);

    let missing = transition.missing_stops();
    if missing > 0 {
        return Err(DropReason::Incomplete { missing });
    }

    let collapsed = transition.solve(solver)?;
    let path = MatchedPath::try_from(&collapsed)?;
    let segments = segment::split(&path, view)?;

    Ok(TrajectoryMatch { path, segments })
}
