use crate::transition::*;

/// A scoring rule over some context, such as an observed stop or a pair of
/// candidates.
pub trait Strategy<Ctx> {
    /// The raw score, widened to `f64` when consumed.
    type Cost: Into<f64>;

    /// Scores `context`, or `None` when the context is not allowed at all,
    /// for example a transition travelling backwards along an edge.
    fn calculate(&self, context: Ctx) -> Option<Self::Cost>;

    #[inline(always)]
    fn cost(&self, ctx: Ctx) -> Option<f64> {
        self.calculate(ctx).map(Into::into)
    }
}

/// The pair of strategies used while building a transition graph.
pub trait Costing<Emission, Transition>
where
    Transition: TransitionStrategy,
    Emission: EmissionStrategy,
{
    /// Cost of matching a stop to a candidate. Never negative.
    fn emission(&self, context: EmissionContext) -> f64;

    /// Cost of moving between two candidates, `None` if impossible.
    fn transition(&self, context: TransitionContext) -> Option<f64>;
}
