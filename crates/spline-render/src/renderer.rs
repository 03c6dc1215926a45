use spline_math::Point3;
use serde::{Deserialize, Serialize};

/// Linear RGBA color, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::RED
    }
}

/// Consumer of the sampled curve, called once per host tick.
///
/// `set_samples` borrows the sampler's buffer for the duration of the call;
/// implementations that keep the points across ticks must copy them.
pub trait Renderer {
    fn set_samples(&mut self, samples: &[Point3]);
    fn set_color(&mut self, color: Rgba);
    fn set_width(&mut self, width: f64);
}
