pub mod bounded;
pub mod error;

pub use bounded::Bounded;
pub use error::{Result, SplineError};
