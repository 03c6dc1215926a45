//! Pick-driven mutation of the control-point sequence.

use spline_core::error::{Result, SplineError};
use spline_curve::{basis_for, CurveType};
use spline_math::Point3;
use spline_points::{PointId, PointSource};

/// Sequences this short only grow; picking one of their points is ignored.
pub const EDITABLE_MIN_LEN: usize = 5;

/// What the event source reported for this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickEvent {
    /// An existing control point was hit.
    Point(PointId),
    /// Nothing was hit; carries the world position under the cursor.
    Empty(Point3),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A new point was created and inserted at `index`.
    Inserted { id: PointId, index: usize },
    /// The last point was replaced by a second reference to its predecessor.
    Collapsed { destroyed: PointId },
    /// An interior point was removed from the sequence.
    Deleted { destroyed: PointId },
    Unchanged,
}

/// Owns the ordered control-point sequence and applies pick events to it.
///
/// Every mutation builds the complete new sequence first and swaps it in
/// with a single assignment, so readers only ever see whole sequences.
#[derive(Debug, Clone, Default)]
pub struct ControlPointEditor {
    points: Vec<PointId>,
}

impl ControlPointEditor {
    pub fn new(points: Vec<PointId>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[PointId] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Replace the whole sequence, e.g. when the host loads a new curve.
    pub fn set_points(&mut self, points: Vec<PointId>) {
        self.points = points;
    }

    /// Apply one pick event. At most one mutation happens per call.
    ///
    /// A deletion that would leave fewer points than `curve_type` needs is
    /// refused with [`SplineError::MutationRejected`]; the sequence and the
    /// point source are left untouched.
    pub fn handle_pick<S: PointSource + ?Sized>(
        &mut self,
        event: PickEvent,
        source: &mut S,
        curve_type: CurveType,
    ) -> Result<EditOutcome> {
        match event {
            PickEvent::Empty(position) => Ok(self.insert(position, source)),
            PickEvent::Point(id) => self.pick_point(id, source, curve_type),
        }
    }

    /// New points go in front of the second-to-last point so the tail of
    /// the curve stays put while the interior grows.
    fn insert<S: PointSource + ?Sized>(&mut self, position: Point3, source: &mut S) -> EditOutcome {
        let id = source.create_point_at(position);
        let index = self.points.len().saturating_sub(2);

        let mut next = Vec::with_capacity(self.points.len() + 1);
        next.extend_from_slice(&self.points[..index]);
        next.push(id);
        next.extend_from_slice(&self.points[index..]);
        self.points = next;

        EditOutcome::Inserted { id, index }
    }

    fn pick_point<S: PointSource + ?Sized>(
        &mut self,
        id: PointId,
        source: &mut S,
        curve_type: CurveType,
    ) -> Result<EditOutcome> {
        let len = self.points.len();
        if len < EDITABLE_MIN_LEN || !self.points.contains(&id) {
            return Ok(EditOutcome::Unchanged);
        }

        if self.points[len - 1] == id {
            let mut next = self.points.clone();
            next[len - 1] = next[len - 2];
            if next == self.points {
                return Ok(EditOutcome::Unchanged);
            }
            self.commit(next, id, source);
            return Ok(EditOutcome::Collapsed { destroyed: id });
        }

        if self.points[0] == id {
            return Ok(EditOutcome::Unchanged);
        }

        let next: Vec<PointId> = self.points.iter().copied().filter(|&p| p != id).collect();
        let min = basis_for(curve_type).min_point_count();
        if next.len() < min {
            return Err(SplineError::MutationRejected(format!(
                "deleting {:?} would leave {} control points, {} needs {}",
                id,
                next.len(),
                curve_type,
                min
            )));
        }

        self.commit(next, id, source);
        Ok(EditOutcome::Deleted { destroyed: id })
    }

    /// Publish `next` and destroy `removed` if nothing references it anymore.
    fn commit<S: PointSource + ?Sized>(&mut self, next: Vec<PointId>, removed: PointId, source: &mut S) {
        self.points = next;
        if !self.points.contains(&removed) {
            source.destroy(removed);
        }
    }
}
