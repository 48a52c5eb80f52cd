#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod error;
pub mod geometry;
pub mod matcher;
pub mod network;
pub mod segment;
pub mod transition;
pub mod util;

#[cfg(test)]
pub(crate) mod fixtures;

#[doc(inline)]
pub use error::{MatchError, NetworkError};
#[doc(inline)]
pub use matcher::{
    match_trajectories, match_trajectories_with_view, MatchOptions, MatchOutput, MatchReport,
    Observation, TrajectoryKey, TrajectoryMatch,
};
#[doc(inline)]
pub use network::{DirectedEdge, Direction, EdgeId, Network, NetworkEdge, NetworkView, NodeId, Weighting};
#[doc(inline)]
pub use segment::{Segment, SplitError};
#[doc(inline)]
pub use transition::{DropReason, MatchedPath};
