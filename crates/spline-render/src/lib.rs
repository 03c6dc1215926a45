pub mod polyline;
pub mod renderer;

// Re-export main types
pub use polyline::PolylineRenderer;
pub use renderer::{Renderer, Rgba};
