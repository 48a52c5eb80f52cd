use crate::segment::SplitError;
use thiserror::Error;

/// The reason a trajectory produced no match.
///
/// These are soft outcomes: they are reported per trajectory in the
/// [`MatchReport`](crate::MatchReport) and never abort the batch.
#[derive(Error, Debug, Clone, PartialEq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum DropReason {
    #[error("{missing} stop(s) have no candidate within the search radius")]
    Incomplete { missing: usize },

    #[error("no transition leaves stop {stop} toward the following stop")]
    Disconnected { stop: usize },

    #[error("could not find a path through the transition graph")]
    NoPathFound,

    #[error("deadline exceeded whilst building transitions")]
    DeadlineExceeded,

    #[error("could not collapse transition graph: {0}")]
    Collapse(CollapseError),

    #[error("could not split matched edges: {0}")]
    SplitFailed(SplitError),
}

impl DropReason {
    /// A stable, machine-readable name for the reason.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl From<CollapseError> for DropReason {
    fn from(value: CollapseError) -> Self {
        match value {
            CollapseError::NoPathFound => DropReason::NoPathFound,
            other => DropReason::Collapse(other),
        }
    }
}

impl From<SplitError> for DropReason {
    fn from(value: SplitError) -> Self {
        DropReason::SplitFailed(value)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseError {
    #[error("ends were not attached")]
    NoEnds,

    #[error("could not find a path through the transition graph")]
    NoPathFound,

    #[error("the resolved path uses a transition which does not exist")]
    MissingTransition,

    #[error("failed to attach ends in transition graph: {0}")]
    EndAttach(#[from] EndAttachError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndAttachError {
    #[error("ends already attached to graph, cannot attach more than once")]
    EndsAlreadyAttached,

    #[error("layer missing from graph, both starts and ends must be present")]
    LayerMissing,
}
