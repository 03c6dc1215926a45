use spline_math::Point3;
use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Opaque handle to a control point. Compared by identity, never by
    /// position: two points may share a location and still be distinct.
    pub struct PointId;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ControlPoint {
    pub position: Point3,
}
