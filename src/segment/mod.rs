//! Splits a matched path into per-stop segments.
//!
//! Each matched edge is cut at the projections of the stops lying on it.
//! The piece of network travelled between stops `i` and `i + 1` is
//! attributed to stop `i + 1`. Whatever lies before the first stop or after
//! the last stop is dropped.

use crate::geometry::{self, GeometryError, COORD_EQUAL_TOLERANCE};
use crate::network::{DirectedEdge, NetworkView};
use crate::transition::MatchedPath;

use geo::LineString;
use log::trace;
use thiserror::Error;

#[cfg(test)]
mod test;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplitError {
    #[error("matched edge {0} is not part of the network view")]
    MissingEdge(DirectedEdge),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// The part of a matched edge travelled toward a stop.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    /// The stop which closes the interval this segment belongs to.
    pub stop: usize,
    pub edge: DirectedEdge,

    /// Distance along the oriented edge at which the segment starts.
    pub start: f64,

    /// Distance along the oriented edge at which the segment ends.
    pub end: f64,

    /// The oriented edge geometry between `start` and `end`.
    pub geometry: LineString,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Cuts the edges of `path` at their stop projections.
///
/// Pieces shorter than [`COORD_EQUAL_TOLERANCE`] are not emitted, so a
/// stop projecting onto the end of an edge does not produce an empty
/// segment.
pub fn split(path: &MatchedPath, view: &NetworkView) -> Result<Vec<Segment>, SplitError> {
    let Some(last_stop) = path.last_stop() else {
        return Ok(vec![]);
    };

    let mut segments = Vec::with_capacity(path.edges.len());
    let mut passed: Option<usize> = None;

    for matched in &path.edges {
        let edge = view
            .edge(&matched.edge)
            .ok_or(SplitError::MissingEdge(matched.edge))?;
        let mut from = 0.0;

        for cut in &matched.cuts {
            if passed.is_some() {
                push_piece(&mut segments, edge.edge, &edge.geometry, cut.stop, from, cut.proj_length)?;
            }

            passed = Some(cut.stop);
            from = cut.proj_length;
        }

        match passed {
            Some(stop) if stop < last_stop => {
                push_piece(&mut segments, edge.edge, &edge.geometry, stop + 1, from, edge.length)?;
            }
            _ => trace!("Dropping overhang of {} from {}", edge.edge, from),
        }
    }

    Ok(segments)
}

fn push_piece(
    segments: &mut Vec<Segment>,
    edge: DirectedEdge,
    line: &LineString,
    stop: usize,
    start: f64,
    end: f64,
) -> Result<(), GeometryError> {
    if (end - start).abs() <= COORD_EQUAL_TOLERANCE {
        return Ok(());
    }

    segments.push(Segment {
        stop,
        edge,
        start,
        end,
        geometry: geometry::cut(line, start, end)?,
    });

    Ok(())
}
