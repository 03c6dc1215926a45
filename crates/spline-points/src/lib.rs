//! Control-point handles and the point sources that own them.

pub mod arena;
pub mod source;
pub mod types;

pub use arena::PointArena;
pub use source::PointSource;
pub use types::{ControlPoint, PointId};
