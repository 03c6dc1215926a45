//! One host tick: apply the pending pick, re-sample, hand off to the renderer.

use spline_core::error::Result;
use spline_core::Bounded;
use spline_curve::{CurveSampler, CurveType, RebuildStatus};
use spline_math::Point3;
use spline_points::{PointId, PointSource};
use spline_render::{Renderer, Rgba};

use crate::config::CurveConfig;
use crate::editor::{ControlPointEditor, EditOutcome, PickEvent};

/// What happened during one [`CurveController::tick`]. Errors are reported
/// here and in the log; none of them stop the tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// `None` when no pick event arrived this tick.
    pub edit: Option<Result<EditOutcome>>,
    pub rebuild: Result<RebuildStatus>,
}

/// Drives the editor, sampler and renderer in the order a tick requires:
/// the sequence mutation is published before the rebuild reads it.
#[derive(Debug, Clone)]
pub struct CurveController {
    curve_type: CurveType,
    samples_per_segment: Bounded<usize>,
    color: Rgba,
    width: Bounded<f64>,
    editor: ControlPointEditor,
    sampler: CurveSampler,
}

impl CurveController {
    pub fn new(config: CurveConfig, points: Vec<PointId>) -> Self {
        Self {
            curve_type: config.curve_type,
            samples_per_segment: config.samples_bound(),
            color: config.color,
            width: config.width_bound(),
            editor: ControlPointEditor::new(points),
            sampler: CurveSampler::new(),
        }
    }

    /// Create one control point per position in `source` and control them.
    pub fn with_positions<S: PointSource + ?Sized>(
        config: CurveConfig,
        source: &mut S,
        positions: &[Point3],
    ) -> Self {
        let points = positions.iter().map(|&p| source.create_point_at(p)).collect();
        Self::new(config, points)
    }

    pub fn config(&self) -> CurveConfig {
        CurveConfig {
            curve_type: self.curve_type,
            samples_per_segment: self.samples_per_segment.get(),
            color: self.color,
            width: self.width.get(),
        }
    }

    pub fn apply_config(&mut self, config: CurveConfig) {
        self.curve_type = config.curve_type;
        self.samples_per_segment.set(config.samples_per_segment);
        self.color = config.color;
        self.width.set(config.width);
    }

    pub fn set_curve_type(&mut self, curve_type: CurveType) {
        self.curve_type = curve_type;
    }

    /// Returns the value actually stored (never below 2).
    pub fn set_samples_per_segment(&mut self, raw: usize) -> usize {
        self.samples_per_segment.set(raw)
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Returns the value actually stored (never negative).
    pub fn set_width(&mut self, raw: f64) -> f64 {
        self.width.set(raw)
    }

    pub fn editor(&self) -> &ControlPointEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ControlPointEditor {
        &mut self.editor
    }

    pub fn points(&self) -> &[PointId] {
        self.editor.points()
    }

    pub fn samples(&self) -> &[Point3] {
        self.sampler.samples()
    }

    /// Run one tick.
    pub fn tick<S, R>(&mut self, source: &mut S, event: Option<PickEvent>, renderer: &mut R) -> TickReport
    where
        S: PointSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let edit = event.map(|event| {
            let result = self.editor.handle_pick(event, &mut *source, self.curve_type);
            match &result {
                Ok(EditOutcome::Unchanged) => log::debug!("Pick {:?} left the curve unchanged", event),
                Ok(outcome) => log::info!("{:?} ({} control points)", outcome, self.editor.len()),
                Err(e) => log::debug!("{}", e),
            }
            result
        });

        let rebuild = self.sampler.rebuild(
            self.curve_type,
            self.editor.points(),
            &*source,
            self.samples_per_segment.get(),
        );
        if let Err(e) = &rebuild {
            log::warn!("Curve not rebuilt: {}", e);
        }

        renderer.set_color(self.color);
        renderer.set_width(self.width.get());
        renderer.set_samples(self.sampler.samples());

        TickReport { edit, rebuild }
    }
}
