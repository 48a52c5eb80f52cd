use petgraph::graph::NodeIndex;

/// Index of a node within [`Candidates`](super::Candidates).
pub type CandidateId = NodeIndex;

/// The node weight of the candidate graph.
///
/// Real candidates carry their emission cost. The virtual source and target
/// attached by [`Candidates::attach_ends`](super::Candidates::attach_ends)
/// carry none.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateRef {
    emission: Option<f64>,
}

impl CandidateRef {
    pub(crate) fn butt() -> Self {
        Self { emission: None }
    }

    pub fn new(emission: f64) -> Self {
        Self {
            emission: Some(emission),
        }
    }

    /// Whether this is one of the virtual ends.
    pub(crate) fn is_butt(&self) -> bool {
        self.emission.is_none()
    }

    /// The emission cost, zero for a virtual end.
    pub fn emission(&self) -> f64 {
        self.emission.unwrap_or_default()
    }
}
