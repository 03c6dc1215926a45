//! Sampling a whole control-point sequence into a polyline.

use spline_core::error::{Result, SplineError};
use spline_core::Bounded;
use spline_math::Point3;
use spline_points::{PointId, PointSource};

use crate::basis::{basis_for, CurveBasis, MIN_CONTROL_POINTS};
use crate::curve_type::CurveType;
use crate::segment::{build_geometry, evaluate};

/// A segment needs at least its two endpoints.
pub const MIN_SAMPLES_PER_SEGMENT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildStatus {
    /// The published buffer was replaced.
    Rebuilt,
    /// Inputs matched the last successful rebuild; nothing was recomputed.
    Unchanged,
}

/// Inputs of the last successful rebuild, compared verbatim.
#[derive(Debug, Clone, PartialEq)]
struct SampledInputs {
    curve_type: CurveType,
    samples_per_segment: usize,
    points: Vec<PointId>,
    positions: Vec<Point3>,
}

/// Owns the published sample buffer and rebuilds it from a control-point
/// sequence on demand.
///
/// The buffer is only ever replaced as a whole: a rebuild that fails part
/// way leaves the previous buffer in place.
#[derive(Debug, Clone, Default)]
pub struct CurveSampler {
    basis: Option<CurveBasis>,
    samples: Vec<Point3>,
    segment_count: usize,
    last: Option<SampledInputs>,
}

impl CurveSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last published buffer, `samples_per_segment * segment_count` long.
    pub fn samples(&self) -> &[Point3] {
        &self.samples
    }

    /// Segment count of the last published buffer.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Forget the cached inputs so the next rebuild always recomputes.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Re-derive the sample buffer.
    ///
    /// Errors are recoverable. [`SplineError::Configuration`] publishes an
    /// empty buffer; [`SplineError::InvalidWindow`] keeps the previous one.
    pub fn rebuild<S: PointSource + ?Sized>(
        &mut self,
        curve_type: CurveType,
        control_points: &[PointId],
        source: &S,
        samples_per_segment: usize,
    ) -> Result<RebuildStatus> {
        let n = Bounded::clamp(samples_per_segment, MIN_SAMPLES_PER_SEGMENT, usize::MAX);
        let basis = self.basis(curve_type);

        let point_count = control_points.len();
        if point_count < MIN_CONTROL_POINTS {
            self.publish_empty();
            return Err(SplineError::Configuration(format!(
                "{} control points, at least {} required",
                point_count, MIN_CONTROL_POINTS
            )));
        }

        let segment_count = basis.segment_count(point_count);
        if segment_count == 0 {
            self.publish_empty();
            return Err(SplineError::Configuration(format!(
                "{} needs at least {} control points, got {}",
                curve_type,
                basis.vertex_count_diff + 1,
                point_count
            )));
        }

        let resolved: Vec<Option<Point3>> =
            control_points.iter().map(|&id| source.position_of(id)).collect();

        if let Some(last) = &self.last {
            if last.curve_type == curve_type
                && last.samples_per_segment == n
                && last.points == control_points
                && resolved.iter().copied().eq(last.positions.iter().copied().map(Some))
            {
                return Ok(RebuildStatus::Unchanged);
            }
        }

        // Stale handles become NaN; the window check below guarantees no
        // segment that reads one is ever evaluated.
        let positions: Vec<Point3> = resolved
            .iter()
            .map(|p| p.unwrap_or(Point3::NAN))
            .collect();

        let mut buffer = Vec::with_capacity(n * segment_count);
        for j in 0..segment_count {
            if let Some(index) = basis
                .window(j, point_count)
                .find(|&k| resolved[k].is_none())
            {
                return Err(SplineError::InvalidWindow { segment: j, index });
            }

            let geometry = build_geometry(&basis, &positions, j).ok_or(
                SplineError::InvalidWindow {
                    segment: j,
                    index: point_count,
                },
            )?;

            // Only the last segment reaches t = 1; the others stop one step
            // short and let the next segment's t = 0 continue the line.
            let denom = if j + 1 == segment_count { (n - 1) as f64 } else { n as f64 };
            buffer.extend((0..n).map(|i| evaluate(&geometry, i as f64 / denom)));
        }

        self.samples = buffer;
        self.segment_count = segment_count;
        self.last = Some(SampledInputs {
            curve_type,
            samples_per_segment: n,
            points: control_points.to_vec(),
            positions,
        });
        Ok(RebuildStatus::Rebuilt)
    }

    /// Cached basis, fetched again only when the curve type changes.
    fn basis(&mut self, curve_type: CurveType) -> CurveBasis {
        match self.basis {
            Some(basis) if basis.curve_type() == curve_type => basis,
            _ => {
                log::debug!("Switching curve basis to {}", curve_type);
                let basis = basis_for(curve_type);
                self.basis = Some(basis);
                basis
            }
        }
    }

    fn publish_empty(&mut self) {
        self.samples = Vec::new();
        self.segment_count = 0;
        self.last = None;
    }
}
