//! Power-basis vectors `[t^k ...]` in the orderings used by the curve bases.
//!
//! The ordering of a monomial vector must match the row convention of the
//! basis matrix it multiplies, otherwise the segment is traversed backwards.

use crate::{DVec3, DVec4};

/// `[t², t, 1]`
pub fn quadratic_descending(t: f64) -> DVec3 {
    DVec3::new(t * t, t, 1.0)
}

/// Derivative of [`quadratic_descending`]: `[2t, 1, 0]`
pub fn quadratic_descending_deriv(t: f64) -> DVec3 {
    DVec3::new(2.0 * t, 1.0, 0.0)
}

/// `[1, t, t², t³]`
pub fn cubic_ascending(t: f64) -> DVec4 {
    let t2 = t * t;
    DVec4::new(1.0, t, t2, t2 * t)
}

/// Derivative of [`cubic_ascending`]: `[0, 1, 2t, 3t²]`
pub fn cubic_ascending_deriv(t: f64) -> DVec4 {
    DVec4::new(0.0, 1.0, 2.0 * t, 3.0 * t * t)
}

/// `[t³, t², t, 1]`
pub fn cubic_descending(t: f64) -> DVec4 {
    let t2 = t * t;
    DVec4::new(t2 * t, t2, t, 1.0)
}

/// Derivative of [`cubic_descending`]: `[3t², 2t, 1, 0]`
pub fn cubic_descending_deriv(t: f64) -> DVec4 {
    DVec4::new(3.0 * t * t, 2.0 * t, 1.0, 0.0)
}
