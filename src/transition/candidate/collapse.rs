use crate::transition::candidate::*;

/// The lowest-cost sequence of candidates through a transition graph,
/// holding one candidate per stop.
#[derive(Debug)]
pub struct CollapsedPath {
    pub cost: f64,
    pub route: Vec<CandidateId>,

    candidates: Candidates,
}

impl CollapsedPath {
    pub(crate) fn new(cost: f64, route: Vec<CandidateId>, candidates: Candidates) -> Self {
        Self {
            cost,
            route,
            candidates,
        }
    }

    /// The chosen candidates, in stop order.
    pub fn matched(&self) -> Vec<Candidate> {
        self.route
            .iter()
            .filter_map(|node| self.candidates.candidate(node))
            .copied()
            .collect::<Vec<_>>()
    }

    /// Every consecutive pair of chosen candidates, with the transition joining them.
    pub fn hops(&self) -> impl Iterator<Item = Option<(&Candidate, &CandidateEdge, &Candidate)>> {
        self.route.windows(2).map(|pair| {
            let source = self.candidates.candidate(&pair[0])?;
            let edge = self.candidates.edge(&pair[0], &pair[1])?;
            let target = self.candidates.candidate(&pair[1])?;
            Some((source, edge, target))
        })
    }

    pub fn candidates(&self) -> &Candidates {
        &self.candidates
    }
}
