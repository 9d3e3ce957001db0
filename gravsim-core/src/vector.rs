//! Two-dimensional vector math for the simulation.
//!
//! Positions, velocities, accelerations and forces are all [`Vector2D`]s,
//! which is glam's double-precision `DVec2`. The arithmetic operators cover
//! the in-place (`+=`, `-=`, `*=`) and value-returning (`+`, `-`, `*`)
//! forms, and the type is `Copy`, so a copy is a plain assignment.
//! [`VectorExt`] adds the operations whose exact behavior the physics relies
//! on.

use glam::DVec2;

/// A 2D vector in simulation units (meters, meters per second, ...)
pub type Vector2D = DVec2;

/// Simulation-specific vector operations
pub trait VectorExt {
    /// Unit vector in the same direction. A vector of length exactly zero
    /// normalizes to the zero vector instead of dividing by zero.
    fn normalized(self) -> Self;

    /// Rotate counter-clockwise by `degrees`
    fn rotated_degrees(self, degrees: f64) -> Self;

    /// Signed angle in degrees from `self` to `other`, computed as the
    /// difference of their polar angles. The result is not wrapped into
    /// (-180, 180], so it ranges over (-360, 360).
    fn angle_to_degrees(self, other: Self) -> f64;
}

impl VectorExt for DVec2 {
    fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return DVec2::ZERO;
        }
        self / len
    }

    fn rotated_degrees(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        DVec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    fn angle_to_degrees(self, other: Self) -> f64 {
        (other.y.atan2(other.x) - self.y.atan2(self.x)).to_degrees()
    }
}
