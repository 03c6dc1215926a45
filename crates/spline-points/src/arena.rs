use spline_core::error::{Result, SplineError};
use spline_math::Point3;
use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::source::PointSource;
use crate::types::{ControlPoint, PointId};

/// Slot-map backed point store. Keys are generational, so a destroyed
/// point's handle never aliases a point created later in the same slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointArena {
    pub points: SlotMap<PointId, ControlPoint>,
}

impl PointArena {
    pub fn new() -> Self {
        Self {
            points: SlotMap::with_key(),
        }
    }

    /// Convenience: create one point per position, in order.
    pub fn create_points(&mut self, positions: &[Point3]) -> Vec<PointId> {
        positions.iter().map(|&p| self.create_point_at(p)).collect()
    }

    /// Move a point (hosts call this while the user drags a handle).
    pub fn set_position(&mut self, id: PointId, position: Point3) -> Result<()> {
        let point = self
            .points
            .get_mut(id)
            .ok_or_else(|| SplineError::NotFound(format!("Control point {:?}", id)))?;
        point.position = position;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl PointSource for PointArena {
    fn create_point_at(&mut self, position: Point3) -> PointId {
        self.points.insert(ControlPoint { position })
    }

    fn destroy(&mut self, id: PointId) {
        self.points.remove(id);
    }

    fn position_of(&self, id: PointId) -> Option<Point3> {
        self.points.get(id).map(|p| p.position)
    }
}
