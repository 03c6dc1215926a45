use spline_math::Point3;

use crate::renderer::{Renderer, Rgba};

/// A renderer that keeps the last committed polyline and style, e.g. for
/// headless hosts, snapshot export, or tests.
#[derive(Debug, Clone, Default)]
pub struct PolylineRenderer {
    pub points: Vec<Point3>,
    pub color: Rgba,
    pub width: f64,
    /// Number of `set_samples` calls received.
    pub frames: usize,
}

impl PolylineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Polyline vertices as `f32` triples, ready for a vertex buffer.
    pub fn vertices_f32(&self) -> Vec<[f32; 3]> {
        self.points
            .iter()
            .map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Total length of the recorded polyline.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }
}

impl Renderer for PolylineRenderer {
    fn set_samples(&mut self, samples: &[Point3]) {
        self.points.clear();
        self.points.extend_from_slice(samples);
        self.frames += 1;
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn set_width(&mut self, width: f64) {
        self.width = width;
    }
}
