pub mod emission {
    use crate::transition::*;

    /// Scales the distance between an observed point and its candidate
    /// by the weight per unit length of the candidate edge.
    ///
    /// ## Calculation
    ///
    /// ```math
    /// emission(d, w, L) = d * w / L
    /// ```
    ///
    /// The cost is not clamped. A zero-length edge has no emission cost.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct WeightedEmission;

    impl Strategy<EmissionContext> for WeightedEmission {
        type Cost = f64;

        #[inline]
        fn calculate(&self, context: EmissionContext) -> Option<Self::Cost> {
            if context.length > 0.0 {
                Some(context.distance * context.weight / context.length)
            } else {
                Some(0.0)
            }
        }
    }
}

pub mod transition {
    use crate::transition::*;

    /// Prices a transition by the weight travelled on the network between
    /// the two projected points, plus the emission cost of both candidates.
    ///
    /// # Calculation
    ///
    /// With `proj_wt` the share of an edge weight lying before the projected
    /// point, and `pt_wt` the emission cost of a candidate:
    ///
    /// ## Same edge
    /// Only when the target lies no earlier along the edge than the source.
    ///
    /// ```math
    /// cost(s, t) = pt_wt(s) + pt_wt(t) + proj_wt(t) - proj_wt(s)
    /// ```
    ///
    /// ## Across edges
    /// Joined by a shortest path of weight `dist`, from the end of the
    /// source edge to the start of the target edge.
    ///
    /// ```math
    /// cost(s, t) = weight(s) + pt_wt(s) + pt_wt(t) + dist - proj_wt(s) + proj_wt(t)
    /// ```
    #[derive(Clone, Copy, Debug, Default)]
    pub struct WeightedTransition;

    impl<'a> Strategy<TransitionContext<'a>> for WeightedTransition {
        type Cost = f64;

        fn calculate(&self, context: TransitionContext<'a>) -> Option<Self::Cost> {
            let TransitionContext {
                source,
                target,
                connection,
            } = context;

            let emission = source.emission + target.emission;

            match connection {
                None if source.proj_length <= target.proj_length => {
                    Some(emission + target.proj_weight() - source.proj_weight())
                }
                None => None,
                Some(route) => Some(
                    source.weight + emission + route.distance - source.proj_weight()
                        + target.proj_weight(),
                ),
            }
        }
    }
}

pub mod costing {
    use super::{WeightedEmission, WeightedTransition};
    use crate::transition::*;

    pub struct CostingStrategies<E, T>
    where
        E: EmissionStrategy,
        T: TransitionStrategy,
    {
        emission: E,
        transition: T,
    }

    impl<E, T> CostingStrategies<E, T>
    where
        E: EmissionStrategy,
        T: TransitionStrategy,
    {
        pub fn new(emission: E, transition: T) -> Self {
            Self {
                emission,
                transition,
            }
        }
    }

    impl Default for CostingStrategies<WeightedEmission, WeightedTransition> {
        fn default() -> Self {
            CostingStrategies::new(WeightedEmission, WeightedTransition)
        }
    }

    impl<E, T> Costing<E, T> for CostingStrategies<E, T>
    where
        T: TransitionStrategy,
        E: EmissionStrategy,
    {
        fn emission(&self, context: EmissionContext) -> f64 {
            self.emission.cost(context).unwrap_or(f64::INFINITY)
        }

        fn transition(&self, context: TransitionContext) -> Option<f64> {
            self.transition.cost(context)
        }
    }
}

#[doc(hidden)]
pub use costing::*;
#[doc(hidden)]
pub use emission::*;
#[doc(hidden)]
pub use transition::*;
