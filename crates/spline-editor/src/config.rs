use serde::{Deserialize, Serialize};
use spline_core::Bounded;
use spline_curve::{CurveType, MIN_SAMPLES_PER_SEGMENT};
use spline_render::Rgba;

/// Host-facing knobs of a curve. Missing fields take their defaults, and
/// out-of-range values are normalized when the config is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub curve_type: CurveType,
    pub samples_per_segment: usize,
    pub color: Rgba,
    pub width: f64,
}

impl CurveConfig {
    pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 20;
    pub const DEFAULT_WIDTH: f64 = 0.1;

    pub fn samples_bound(&self) -> Bounded<usize> {
        Bounded::new(self.samples_per_segment, MIN_SAMPLES_PER_SEGMENT, usize::MAX)
    }

    pub fn width_bound(&self) -> Bounded<f64> {
        Bounded::new(self.width, 0.0, f64::INFINITY)
    }

    /// Copy with every scalar clamped into range.
    pub fn normalized(self) -> Self {
        Self {
            samples_per_segment: self.samples_bound().get(),
            width: self.width_bound().get(),
            ..self
        }
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            curve_type: CurveType::Bezier,
            samples_per_segment: Self::DEFAULT_SAMPLES_PER_SEGMENT,
            color: Rgba::RED,
            width: Self::DEFAULT_WIDTH,
        }
    }
}
