use crate::network::EdgeId;
use thiserror::Error;

/// Structural failures which abort an entire [`match_trajectories`](crate::match_trajectories) call.
///
/// Failures local to a single trajectory are never raised, they are
/// reported through [`DropReason`](crate::transition::DropReason) instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("trajectories must only contain points, observation {index} is a {kind}")]
    NonPointGeometry { index: usize, kind: &'static str },

    #[error("search radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("detour factor must be at least 1, got {0}")]
    InvalidDetour(f64),

    #[error("weights must all be positive, edge {edge} has a weight of {weight}")]
    NegativeWeight { edge: EdgeId, weight: f64 },

    #[error("edge {edge} has no numeric attribute `{attribute}`")]
    MissingAttribute { edge: EdgeId, attribute: String },

    #[error("edge {edge} has a non-finite weight")]
    NonFiniteWeight { edge: EdgeId },

    #[error("invalid value `{value}` for configuration key {key}")]
    InvalidConfig { key: &'static str, value: String },
}

/// Failures raised whilst assembling a [`Network`](crate::network::Network).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("edge {0} is defined more than once")]
    DuplicateEdge(EdgeId),

    #[error("edge {0} must have at least two coordinates")]
    DegenerateGeometry(EdgeId),
}
