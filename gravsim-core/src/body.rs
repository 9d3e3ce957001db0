use crate::vector::Vector2D;

/// A point mass taking part in the simulation
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub pos: Vector2D,
    pub vel: Vector2D,
    pub acc: Vector2D,
    /// Mass in kilograms, always positive
    pub mass: f64,
    /// Radius in meters, always positive. Only used for display.
    pub radius: f64,
}

impl Body {
    /// Create a body at rest in the force field (zero acceleration)
    pub fn new(name: impl Into<String>, pos: Vector2D, vel: Vector2D, mass: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            pos,
            vel,
            acc: Vector2D::ZERO,
            mass,
            radius,
        }
    }

    /// Advance the body by `dt` seconds using semi-implicit Euler:
    /// velocity first, then position with the updated velocity.
    ///
    /// `acc` is read but never written; the force model owns it.
    pub fn update(&mut self, dt: f64) {
        self.vel += self.acc * dt;
        self.pos += self.vel * dt;
    }
}
