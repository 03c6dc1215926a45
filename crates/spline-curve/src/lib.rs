//! Piecewise parametric curves: quadratic Bézier, Catmull-Rom and uniform
//! cubic B-spline segments evaluated through constant basis matrices.

pub mod basis;
pub mod curve_type;
pub mod sampler;
pub mod segment;

pub use basis::{basis_for, BasisMatrix, CurveBasis, MIN_CONTROL_POINTS};
pub use curve_type::CurveType;
pub use sampler::{CurveSampler, RebuildStatus, MIN_SAMPLES_PER_SEGMENT};
pub use segment::{build_geometry, evaluate, Curve, GeometryMatrix};
