use crate::network::DirectedEdge;
use crate::transition::candidate::{Candidate, CollapsedPath, TransitionKind};
use crate::transition::CollapseError;

use smallvec::SmallVec;

/// The projection of an observed stop onto a matched edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StopCut {
    pub stop: usize,
    pub proj_length: f64,
}

impl From<&Candidate> for StopCut {
    fn from(candidate: &Candidate) -> Self {
        StopCut {
            stop: candidate.location.stop,
            proj_length: candidate.proj_length,
        }
    }
}

/// A traversal of a directed edge within a matched path.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedEdge {
    pub edge: DirectedEdge,

    /// The stop the traversal belongs to: the stop whose candidate lies on
    /// the edge, or the stop whose transition travels through it.
    pub stop: usize,

    /// The stops projected onto this traversal, by increasing `proj_length`.
    pub cuts: SmallVec<[StopCut; 2]>,
}

/// The ordered network edges of a resolved trajectory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchedPath {
    pub edges: Vec<MatchedEdge>,
}

impl MatchedPath {
    pub fn edge_ids(&self) -> Vec<DirectedEdge> {
        self.edges.iter().map(|matched| matched.edge).collect()
    }

    /// The last stop cut along the path.
    pub fn last_stop(&self) -> Option<usize> {
        self.edges
            .iter()
            .rev()
            .find_map(|matched| matched.cuts.last())
            .map(|cut| cut.stop)
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl TryFrom<&CollapsedPath> for MatchedPath {
    type Error = CollapseError;

    /// Expands the chosen candidates into the edges travelled between them.
    ///
    /// Two stops on the same edge share a single traversal with two cuts.
    /// Otherwise, the connecting edges of a transition belong to the stop
    /// it departs from, and the edge of the next candidate to the next stop.
    fn try_from(collapsed: &CollapsedPath) -> Result<Self, Self::Error> {
        let mut route = collapsed.route.iter();
        let first = route
            .next()
            .and_then(|id| collapsed.candidates().candidate(id))
            .ok_or(CollapseError::NoPathFound)?;

        let mut edges = vec![MatchedEdge {
            edge: first.edge,
            stop: first.location.stop,
            cuts: SmallVec::from_elem(StopCut::from(first), 1),
        }];

        for hop in collapsed.hops() {
            let (source, transition, target) = hop.ok_or(CollapseError::MissingTransition)?;

            match transition.kind {
                TransitionKind::SameEdge => {
                    let last = edges.last_mut().ok_or(CollapseError::MissingTransition)?;
                    last.cuts.push(StopCut::from(target));
                }
                TransitionKind::CrossEdge { .. } => {
                    edges.extend(transition.connecting().iter().map(|edge| MatchedEdge {
                        edge: *edge,
                        stop: source.location.stop,
                        cuts: SmallVec::new(),
                    }));

                    edges.push(MatchedEdge {
                        edge: target.edge,
                        stop: target.location.stop,
                        cuts: SmallVec::from_elem(StopCut::from(target), 1),
                    });
                }
                TransitionKind::Virtual => return Err(CollapseError::MissingTransition),
            }
        }

        Ok(MatchedPath { edges })
    }
}
