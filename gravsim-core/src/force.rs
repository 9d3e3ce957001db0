//! Newtonian gravity between point masses

use crate::body::Body;
use crate::vector::{Vector2D, VectorExt};
use std::borrow::{Borrow, BorrowMut};

/// Gravitational constant in m³ kg⁻¹ s⁻²
pub const G: f64 = 6.67430e-11;

/// Gravitational force exerted on `b1` by `b2`, pointing from `b1` toward `b2`.
///
/// Coincident bodies have a zero-length displacement, which normalizes to the
/// zero vector, so the force is exactly zero rather than NaN or infinite.
pub fn pairwise_force(b1: &Body, b2: &Body) -> Vector2D {
    let displacement = b2.pos - b1.pos;
    let direction = displacement.normalized();
    if direction == Vector2D::ZERO {
        return Vector2D::ZERO;
    }
    let r = displacement.length();
    direction * (G * b1.mass * b2.mass / (r * r))
}

/// Net gravitational acceleration on `bodies[index]` from every other body
pub fn net_acceleration<B: Borrow<Body>>(bodies: &[B], index: usize) -> Vector2D {
    let body: &Body = bodies[index].borrow();
    let mut acc = Vector2D::ZERO;
    for (j, other) in bodies.iter().enumerate() {
        if j == index {
            continue;
        }
        acc += pairwise_force(body, other.borrow()) / body.mass;
    }
    acc
}

/// Recompute every body's acceleration from the current positions.
///
/// Every acceleration is computed from the tick-start positions before any
/// is stored, summing `F(i, j) / m_i` over each ordered pair with i != j.
pub fn accumulate<B: BorrowMut<Body>>(bodies: &mut [B]) {
    let accelerations: Vec<Vector2D> = (0..bodies.len())
        .map(|i| net_acceleration(bodies, i))
        .collect();

    for (entry, acc) in bodies.iter_mut().zip(accelerations) {
        let body: &mut Body = entry.borrow_mut();
        body.acc = acc;
    }
}
