use crate::transition::Strategy;

pub trait EmissionStrategy: Strategy<EmissionContext> {}
impl<T> EmissionStrategy for T where T: Strategy<EmissionContext> {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmissionContext {
    /// Perpendicular distance from the observed point to the candidate edge.
    pub distance: f64,

    /// Weight of the candidate edge, under the active weighting.
    pub weight: f64,

    /// Geometric length of the candidate edge.
    pub length: f64,
}

impl EmissionContext {
    pub fn new(distance: f64, weight: f64, length: f64) -> Self {
        Self {
            distance,
            weight,
            length,
        }
    }
}
