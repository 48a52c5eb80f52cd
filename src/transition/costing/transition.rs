use crate::network::Route;
use crate::transition::candidate::Candidate;
use crate::transition::Strategy;

pub trait TransitionStrategy: for<'a> Strategy<TransitionContext<'a>> {}
impl<T> TransitionStrategy for T where T: for<'a> Strategy<TransitionContext<'a>> {}

#[derive(Clone, Copy, Debug)]
pub struct TransitionContext<'a> {
    /// The candidate the transition departs from.
    pub source: &'a Candidate,

    /// The candidate the transition arrives at.
    pub target: &'a Candidate,

    /// The shortest path from the end of the source edge to the start of
    /// the target edge. `None` when both candidates share a directed edge.
    pub connection: Option<&'a Route>,
}

impl<'a> TransitionContext<'a> {
    pub fn same_edge(source: &'a Candidate, target: &'a Candidate) -> Self {
        Self {
            source,
            target,
            connection: None,
        }
    }

    pub fn cross_edge(source: &'a Candidate, target: &'a Candidate, route: &'a Route) -> Self {
        Self {
            source,
            target,
            connection: Some(route),
        }
    }

    pub fn is_same_edge(&self) -> bool {
        self.connection.is_none()
    }
}
