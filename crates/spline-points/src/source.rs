use spline_math::Point3;

use crate::types::PointId;

/// The collaborator that owns control-point lifetime and positions.
///
/// The curve core only ever holds `PointId`s; it asks the source for the
/// current position every time it needs one.
pub trait PointSource {
    /// Create a new point at `position` and return its handle.
    fn create_point_at(&mut self, position: Point3) -> PointId;

    /// Destroy a point. Later lookups of `id` return `None`.
    fn destroy(&mut self, id: PointId);

    /// Current position, or `None` if the handle is stale.
    fn position_of(&self, id: PointId) -> Option<Point3>;

    fn is_live(&self, id: PointId) -> bool {
        self.position_of(id).is_some()
    }
}
