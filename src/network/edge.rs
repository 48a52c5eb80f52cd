use crate::error::MatchError;
use crate::geometry;

use geo::LineString;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The identifier of an edge within a [`Network`](super::Network).
///
/// Both logical directions of a two-way edge share the same identifier,
/// see [`DirectedEdge`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u64);

/// The identifier of a node (an edge endpoint) within a [`Network`](super::Network).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl Display for EdgeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(value: u64) -> Self {
        EdgeId(value)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        NodeId(value)
    }
}

/// The direction an edge is travelled in, relative to its stored geometry.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// From `source` to `target`, following the stored geometry.
    Forward,

    /// From `target` to `source`, following the reversed geometry.
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// A logical, directed view of a network edge.
///
/// A two-way edge produces two directed edges with the same [`EdgeId`],
/// which are distinguished only by their [`Direction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DirectedEdge {
    pub id: EdgeId,
    pub direction: Direction,
}

impl DirectedEdge {
    pub const fn new(id: EdgeId, direction: Direction) -> Self {
        Self { id, direction }
    }

    pub const fn forward(id: EdgeId) -> Self {
        Self::new(id, Direction::Forward)
    }

    pub const fn backward(id: EdgeId) -> Self {
        Self::new(id, Direction::Backward)
    }

    #[inline]
    pub const fn id(&self) -> EdgeId {
        self.id
    }

    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The same edge, travelled the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.id, self.direction.reversed())
    }
}

impl Display for DirectedEdge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.id, self.direction)
    }
}

/// An edge of the network, as stored.
///
/// The geometry runs from `source` to `target`. Edges are two-way unless
/// marked as [`oneway`](#field.oneway), in which case they may only be
/// travelled [`Direction::Forward`].
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub geometry: LineString,
    pub oneway: bool,

    /// Numeric attributes which may be used as a [`Weighting`].
    pub attributes: FxHashMap<String, f64>,
}

impl NetworkEdge {
    pub fn new(
        id: impl Into<EdgeId>,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        geometry: LineString,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            geometry,
            oneway: false,
            attributes: FxHashMap::default(),
        }
    }

    pub fn with_oneway(mut self, oneway: bool) -> Self {
        self.oneway = oneway;
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: f64) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Geometric length of the edge.
    pub fn length(&self) -> f64 {
        geometry::length(&self.geometry)
    }

    /// Every direction in which this edge may be travelled.
    pub fn directions(&self) -> SmallVec<[DirectedEdge; 2]> {
        if self.oneway {
            smallvec![DirectedEdge::forward(self.id)]
        } else {
            smallvec![
                DirectedEdge::forward(self.id),
                DirectedEdge::backward(self.id)
            ]
        }
    }
}

/// Selects which value of an edge is used as its weight, both for routing
/// and for scaling emission costs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// The geometric length of the edge.
    #[default]
    Length,

    /// A numeric attribute of the edge, by name.
    Attribute(String),
}

impl Weighting {
    pub fn attribute(name: impl Into<String>) -> Self {
        Weighting::Attribute(name.into())
    }

    /// Evaluates the weight of `edge`, rejecting weights which cannot
    /// be routed upon.
    pub fn evaluate(&self, edge: &NetworkEdge) -> Result<f64, MatchError> {
        let weight = match self {
            Weighting::Length => edge.length(),
            Weighting::Attribute(name) => {
                *edge
                    .attributes
                    .get(name)
                    .ok_or_else(|| MatchError::MissingAttribute {
                        edge: edge.id,
                        attribute: name.clone(),
                    })?
            }
        };

        if !weight.is_finite() {
            return Err(MatchError::NonFiniteWeight { edge: edge.id });
        }

        if weight < 0.0 {
            return Err(MatchError::NegativeWeight {
                edge: edge.id,
                weight,
            });
        }

        Ok(weight)
    }
}

impl FromStr for Weighting {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("length") {
            Ok(Weighting::Length)
        } else {
            Ok(Weighting::Attribute(value.to_string()))
        }
    }
}

impl Display for Weighting {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Weighting::Length => write!(f, "length"),
            Weighting::Attribute(name) => write!(f, "{name}"),
        }
    }
}
