use serde::{Deserialize, Serialize};

/// Interpolation basis used for every segment of a curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurveType {
    /// Quadratic Bézier joined through control-point midpoints.
    #[default]
    Bezier,
    /// Cubic Catmull-Rom in Hermite form.
    CatmullRom,
    /// Uniform cubic B-spline.
    BSpline,
}

impl CurveType {
    pub const ALL: [CurveType; 3] = [CurveType::Bezier, CurveType::CatmullRom, CurveType::BSpline];
}

impl std::fmt::Display for CurveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CurveType::Bezier => "Bezier",
            CurveType::CatmullRom => "CatmullRom",
            CurveType::BSpline => "BSpline",
        };
        f.write_str(name)
    }
}
