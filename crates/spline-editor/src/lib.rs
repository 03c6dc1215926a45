//! Interactive editing of a piecewise curve: pick events mutate the
//! control-point sequence, and a per-tick controller re-samples the curve
//! and hands it to a renderer.

pub mod config;
pub mod controller;
pub mod editor;

pub use config::CurveConfig;
pub use controller::{CurveController, TickReport};
pub use editor::{ControlPointEditor, EditOutcome, PickEvent};
