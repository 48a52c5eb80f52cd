use crate::transition::*;

pub trait Solver {
    /// Builds the transitions between the candidates of consecutive stops,
    /// leaving the transition graph ready to be collapsed.
    ///
    /// Fails if the trajectory cannot be resolved, for example when no
    /// transition leaves the candidates of a stop.
    fn prework<E, T>(&self, transition: &mut Transition<E, T>) -> Result<(), DropReason>
    where
        E: EmissionStrategy + Send + Sync,
        T: TransitionStrategy + Send + Sync;

    /// Refines every candidate of a stop to all candidates of the following
    /// stop with their transition costs, then resolves the lowest-cost path
    /// through the resulting graph.
    fn solve<E, T>(&self, mut transition: Transition<E, T>) -> Result<CollapsedPath, DropReason>
    where
        E: EmissionStrategy + Send + Sync,
        T: TransitionStrategy + Send + Sync,
    {
        self.prework(&mut transition)?;
        transition.collapse()
    }
}
