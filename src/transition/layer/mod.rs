#[doc(hidden)]
pub mod generator;
#[doc(inline)]
pub use generator::*;

use crate::transition::candidate::CandidateId;
use geo::Point;

/// A layer within the transition graph.
///
/// This represents a set of candidate [nodes](#field.nodes),
/// and the [origin](#field.origin) point, from which they originate.
#[derive(Clone, Debug)]
pub struct Layer {
    /// All the candidates detected within the layer, as
    /// positions the [origin](#field.origin) could be matched to.
    pub nodes: Vec<CandidateId>,

    /// The observed position of the stop.
    pub origin: Point,
}

#[derive(Clone, Debug, Default)]
pub struct Layers {
    pub layers: Vec<Layer>,
}

impl Layers {
    pub fn last(&self) -> Option<&Layer> {
        self.layers.last()
    }

    pub fn first(&self) -> Option<&Layer> {
        self.layers.first()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The number of layers without any candidate.
    pub fn empty_layers(&self) -> usize {
        self.layers
            .iter()
            .filter(|layer| layer.nodes.is_empty())
            .count()
    }
}

impl FromIterator<Layer> for Layers {
    fn from_iter<I: IntoIterator<Item = Layer>>(layers: I) -> Self {
        Self {
            layers: layers.into_iter().collect(),
        }
    }
}
