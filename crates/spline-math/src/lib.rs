pub mod monomial;

pub use glam::{DMat3, DMat4, DVec3, DVec4};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;

/// Midpoint of the segment `a`–`b`.
pub fn midpoint(a: Point3, b: Point3) -> Point3 {
    0.5 * (a + b)
}
