use crate::segment::Segment;
use crate::transition::{DropReason, MatchedPath};

use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::hash::Hash;

/// The resolved path of a single trajectory, and its segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrajectoryMatch {
    pub path: MatchedPath,
    pub segments: Vec<Segment>,
}

impl TrajectoryMatch {
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// The trajectories which produced no match, and why.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchReport<K: Hash + Eq> {
    pub dropped: IndexMap<K, DropReason>,
}

impl<K: Hash + Eq> Default for MatchReport<K> {
    fn default() -> Self {
        Self {
            dropped: IndexMap::new(),
        }
    }
}

impl<K: Hash + Eq> MatchReport<K> {
    pub fn reason(&self, trajectory: &K) -> Option<&DropReason> {
        self.dropped.get(trajectory)
    }

    pub fn is_dropped(&self, trajectory: &K) -> bool {
        self.dropped.contains_key(trajectory)
    }

    /// The number of dropped trajectories, by [reason name](DropReason::name).
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        self.dropped
            .values()
            .fold(BTreeMap::new(), |mut counts, reason| {
                *counts.entry(reason.name()).or_default() += 1;
                counts
            })
    }

    pub fn len(&self) -> usize {
        self.dropped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dropped.is_empty()
    }
}

/// The output of a [`match_trajectories`](crate::match_trajectories) call.
///
/// Every input trajectory is present in [`matched`](#field.matched), in
/// order of first appearance. Dropped trajectories have an empty match,
/// and their reason in the [`report`](#field.report).
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutput<K: Hash + Eq> {
    pub matched: IndexMap<K, TrajectoryMatch>,
    pub report: MatchReport<K>,
}

impl<K: Hash + Eq> Default for MatchOutput<K> {
    fn default() -> Self {
        Self {
            matched: IndexMap::new(),
            report: MatchReport::default(),
        }
    }
}

impl<K: Hash + Eq> MatchOutput<K> {
    /// The segments of `trajectory`, empty if it was dropped or never given.
    pub fn segments(&self, trajectory: &K) -> &[Segment] {
        self.matched
            .get(trajectory)
            .map(|matched| matched.segments.as_slice())
            .unwrap_or_default()
    }

    pub fn path(&self, trajectory: &K) -> Option<&MatchedPath> {
        self.matched
            .get(trajectory)
            .map(|matched| &matched.path)
            .filter(|path| !path.is_empty())
    }

    /// Every segment of every trajectory, in output order.
    pub fn all_segments(&self) -> impl Iterator<Item = (&K, &Segment)> {
        self.matched.iter().flat_map(|(trajectory, matched)| {
            matched
                .segments
                .iter()
                .map(move |segment| (trajectory, segment))
        })
    }

    pub fn len(&self) -> usize {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}
