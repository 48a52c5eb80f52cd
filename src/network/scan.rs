use crate::geometry;
use crate::network::{DirectedEdge, EdgeId, IndexedEdge, NetworkView};

use geo::Point;
use rstar::AABB;
use smallvec::SmallVec;
use std::num::NonZeroUsize;
#[cfg(feature = "tracing")]
use tracing::Level;

/// The projection of a point onto a directed edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub edge: DirectedEdge,

    /// Distance along the oriented edge, from its source, to the projected position.
    pub proj_length: f64,

    /// Perpendicular distance between the point and the edge.
    pub distance: f64,
}

pub trait Scan {
    /// Finds all stored edges whose envelope intersects the square of
    /// half-width `distance` around `point`.
    fn scan_edges(&self, point: &Point, distance: f64) -> impl Iterator<Item = &IndexedEdge>;

    /// Projects `point` upon every directed edge within `radius` of it.
    ///
    /// Projections are ordered by perpendicular distance, then by edge, and
    /// truncated to the `k_nearest` closest when bounded. Each projection
    /// satisfies `0 <= proj_length <= length` and `distance <= radius`.
    fn candidates_near(
        &self,
        point: &Point,
        radius: f64,
        k_nearest: Option<NonZeroUsize>,
    ) -> Vec<Projection>;
}

impl Scan for NetworkView {
    #[inline]
    fn scan_edges(&self, point: &Point, distance: f64) -> impl Iterator<Item = &IndexedEdge> {
        let bottom_left = Point::new(point.x() - distance, point.y() - distance);
        let top_right = Point::new(point.x() + distance, point.y() + distance);

        let bbox = AABB::from_corners(bottom_left, top_right);
        self.index.locate_in_envelope_intersecting(&bbox)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(level = Level::DEBUG, skip(self)))]
    fn candidates_near(
        &self,
        point: &Point,
        radius: f64,
        k_nearest: Option<NonZeroUsize>,
    ) -> Vec<Projection> {
        let mut projections = self
            .scan_edges(point, radius)
            .flat_map(|indexed| self.project_both_ways(point, indexed.id))
            .filter(|projection| projection.distance <= radius)
            .collect::<Vec<_>>();

        projections.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.edge.cmp(&b.edge))
        });

        if let Some(k) = k_nearest {
            projections.truncate(k.get());
        }

        projections
    }
}

impl NetworkView {
    /// Projects `point` upon the stored geometry once, deriving the backward
    /// projection (if the edge is two-way) from the forward one.
    fn project_both_ways(&self, point: &Point, id: EdgeId) -> SmallVec<[Projection; 2]> {
        let mut projections = SmallVec::new();

        let forward = DirectedEdge::forward(id);
        let Some(edge) = self.edge(&forward) else {
            return projections;
        };

        let Some(location) = geometry::locate(point, &edge.geometry) else {
            return projections;
        };

        projections.push(Projection {
            edge: forward,
            proj_length: location.along,
            distance: location.distance,
        });

        let backward = forward.reversed();
        if self.edges.contains_key(&backward) {
            projections.push(Projection {
                edge: backward,
                proj_length: (edge.length - location.along).clamp(0.0, edge.length),
                distance: location.distance,
            });
        }

        projections
    }
}
