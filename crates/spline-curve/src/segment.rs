//! Per-segment geometry matrices and their evaluation.

use spline_math::monomial::{
    cubic_ascending, cubic_ascending_deriv, cubic_descending, cubic_descending_deriv,
    quadratic_descending, quadratic_descending_deriv,
};
use spline_math::{midpoint, DMat3, DMat4, Point3, Vector3};

use crate::basis::{BasisMatrix, CurveBasis};

/// Trait for parametric curve pieces in 3D space.
pub trait Curve {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the (unnormalized) tangent vector at parameter `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// Window positions combined with a basis matrix: `G = P * M`.
///
/// The columns of `P` are the window's points (or Catmull-Rom tangents) in
/// a fixed order; the 4x4 variants carry `w = 0` in every column so that the
/// product truncates back to a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryMatrix {
    Bezier(DMat3),
    CatmullRom(DMat4),
    BSpline(DMat4),
}

/// Build the geometry matrix of `segment` from the full position sequence.
///
/// Returns `None` when the segment's window does not fit inside `points`.
pub fn build_geometry(basis: &CurveBasis, points: &[Point3], segment: usize) -> Option<GeometryMatrix> {
    let i = segment;
    match basis.matrix {
        BasisMatrix::Bezier(m) => {
            let (p0, p1, p2) = (*points.get(i)?, *points.get(i + 1)?, *points.get(i + 2)?);
            // Midpoints as outer columns make adjacent segments meet at
            // the same point, so the chain is continuous.
            let p = DMat3::from_cols(midpoint(p0, p1), p1, midpoint(p1, p2));
            Some(GeometryMatrix::Bezier(p * m))
        }
        BasisMatrix::CatmullRom(m) => {
            let (p0, p1) = (*points.get(i)?, *points.get(i + 1)?);

            let t0 = match i.checked_sub(1).and_then(|k| points.get(k)) {
                Some(&prev) => 0.5 * (p1 - prev),
                None => p1 - p0,
            };
            let t1 = match points.get(i + 2) {
                Some(&next) => 0.5 * (next - p0),
                None => p1 - p0,
            };

            let p = DMat4::from_cols(p0.extend(0.0), p1.extend(0.0), t0.extend(0.0), t1.extend(0.0));
            Some(GeometryMatrix::CatmullRom(p * m))
        }
        BasisMatrix::BSpline(m) => {
            let window = points.get(i..i + 4)?;
            let p = DMat4::from_cols(
                window[0].extend(0.0),
                window[1].extend(0.0),
                window[2].extend(0.0),
                window[3].extend(0.0),
            );
            Some(GeometryMatrix::BSpline(p * m))
        }
    }
}

/// Position on the segment at parameter `t` in `[0, 1]`.
pub fn evaluate(geometry: &GeometryMatrix, t: f64) -> Point3 {
    match geometry {
        GeometryMatrix::Bezier(g) => *g * quadratic_descending(t),
        GeometryMatrix::CatmullRom(g) => (*g * cubic_ascending(t)).truncate(),
        GeometryMatrix::BSpline(g) => (*g * cubic_descending(t)).truncate(),
    }
}

impl Curve for GeometryMatrix {
    fn point_at(&self, t: f64) -> Point3 {
        evaluate(self, t)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        match self {
            GeometryMatrix::Bezier(g) => *g * quadratic_descending_deriv(t),
            GeometryMatrix::CatmullRom(g) => (*g * cubic_ascending_deriv(t)).truncate(),
            GeometryMatrix::BSpline(g) => (*g * cubic_descending_deriv(t)).truncate(),
        }
    }
}
