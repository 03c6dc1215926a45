//! Constant basis (blending) matrices and window sizes per curve type.
//!
//! Each matrix is written down row by row and then transposed. glam stores
//! matrices column-major, so `from_cols_array_2d` on the row table yields
//! exactly that transpose.

use std::ops::Range;

use spline_math::{DMat3, DMat4};

use crate::curve_type::CurveType;

/// Fewest control points any curve type is evaluated with.
pub const MIN_CONTROL_POINTS: usize = 3;

const BEZIER_ROWS: [[f64; 3]; 3] = [
    [1.0, -2.0, 1.0],
    [-2.0, 2.0, 0.0],
    [1.0, 0.0, 0.0],
];

const CATMULL_ROM_ROWS: [[f64; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [-3.0, 3.0, -2.0, -1.0],
    [2.0, -2.0, 1.0, 1.0],
];

const BSPLINE_ROWS: [[f64; 4]; 4] = [
    [-1.0 / 6.0, 3.0 / 6.0, -3.0 / 6.0, 1.0 / 6.0],
    [3.0 / 6.0, -6.0 / 6.0, 3.0 / 6.0, 0.0],
    [-3.0 / 6.0, 0.0, 3.0 / 6.0, 0.0],
    [1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0],
];

/// Basis matrix tagged with the curve type it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasisMatrix {
    Bezier(DMat3),
    CatmullRom(DMat4),
    BSpline(DMat4),
}

/// Everything the sampler needs to know about one curve type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveBasis {
    pub matrix: BasisMatrix,
    /// Control points consumed by one segment (Catmull-Rom: core points only).
    pub window_size: usize,
    /// Subtracted from the point count to get the segment count.
    pub vertex_count_diff: usize,
}

/// Look up the basis for `curve_type`.
pub fn basis_for(curve_type: CurveType) -> CurveBasis {
    match curve_type {
        CurveType::Bezier => CurveBasis {
            matrix: BasisMatrix::Bezier(DMat3::from_cols_array_2d(&BEZIER_ROWS)),
            window_size: 3,
            vertex_count_diff: 2,
        },
        CurveType::CatmullRom => CurveBasis {
            matrix: BasisMatrix::CatmullRom(DMat4::from_cols_array_2d(&CATMULL_ROM_ROWS)),
            window_size: 2,
            vertex_count_diff: 1,
        },
        CurveType::BSpline => CurveBasis {
            matrix: BasisMatrix::BSpline(DMat4::from_cols_array_2d(&BSPLINE_ROWS)),
            window_size: 4,
            vertex_count_diff: 3,
        },
    }
}

impl CurveBasis {
    pub fn curve_type(&self) -> CurveType {
        match self.matrix {
            BasisMatrix::Bezier(_) => CurveType::Bezier,
            BasisMatrix::CatmullRom(_) => CurveType::CatmullRom,
            BasisMatrix::BSpline(_) => CurveType::BSpline,
        }
    }

    /// `max(0, point_count - vertex_count_diff)`
    pub fn segment_count(&self, point_count: usize) -> usize {
        point_count.saturating_sub(self.vertex_count_diff)
    }

    /// Smallest sequence that still yields one segment and satisfies
    /// [`MIN_CONTROL_POINTS`].
    pub fn min_point_count(&self) -> usize {
        MIN_CONTROL_POINTS.max(self.vertex_count_diff + 1)
    }

    /// Indices read while building `segment`. For Catmull-Rom this includes
    /// the neighbor taps that exist, never indices outside the sequence.
    pub fn window(&self, segment: usize, point_count: usize) -> Range<usize> {
        match self.matrix {
            BasisMatrix::CatmullRom(_) => {
                segment.saturating_sub(1)..(segment + 3).min(point_count)
            }
            _ => segment..(segment + self.window_size).min(point_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spline_math::{DVec3, DVec4};

    #[test]
    fn test_rows_become_columns() {
        let CurveBasis { matrix, .. } = basis_for(CurveType::Bezier);
        let BasisMatrix::Bezier(m) = matrix else {
            panic!("expected a quadratic basis");
        };
        assert_eq!(m.x_axis, DVec3::new(1.0, -2.0, 1.0));
        assert_eq!(m.y_axis, DVec3::new(-2.0, 2.0, 0.0));
        assert_eq!(m.z_axis, DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_bspline_weights_sum_to_one() {
        let BasisMatrix::BSpline(m) = basis_for(CurveType::BSpline).matrix else {
            panic!("expected a cubic basis");
        };
        // Blending weights at any t form a partition of unity
        for t in [0.0, 0.25, 0.5, 1.0] {
            let w = m * DVec4::new(t * t * t, t * t, t, 1.0);
            assert!((w.x + w.y + w.z + w.w - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_window_sizes_and_deficits() {
        let bezier = basis_for(CurveType::Bezier);
        let catmull = basis_for(CurveType::CatmullRom);
        let bspline = basis_for(CurveType::BSpline);

        assert_eq!((bezier.window_size, bezier.vertex_count_diff), (3, 2));
        assert_eq!((catmull.window_size, catmull.vertex_count_diff), (2, 1));
        assert_eq!((bspline.window_size, bspline.vertex_count_diff), (4, 3));

        assert_eq!(bezier.min_point_count(), 3);
        assert_eq!(catmull.min_point_count(), 3);
        assert_eq!(bspline.min_point_count(), 4);
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(basis_for(CurveType::Bezier).segment_count(3), 1);
        assert_eq!(basis_for(CurveType::CatmullRom).segment_count(5), 4);
        assert_eq!(basis_for(CurveType::BSpline).segment_count(3), 0);
        for ty in CurveType::ALL {
            assert_eq!(basis_for(ty).segment_count(1), 0);
        }
    }

    #[test]
    fn test_curve_type_roundtrip() {
        for ty in CurveType::ALL {
            assert_eq!(basis_for(ty).curve_type(), ty);
        }
    }

    #[test]
    fn test_catmull_rom_window_taps() {
        let basis = basis_for(CurveType::CatmullRom);
        assert_eq!(basis.window(0, 5), 0..3);
        assert_eq!(basis.window(1, 5), 0..4);
        assert_eq!(basis.window(3, 5), 2..5);
    }

    #[test]
    fn test_fixed_windows() {
        assert_eq!(basis_for(CurveType::Bezier).window(2, 5), 2..5);
        assert_eq!(basis_for(CurveType::BSpline).window(1, 5), 1..5);
    }
}
