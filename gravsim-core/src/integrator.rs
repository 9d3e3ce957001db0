use crate::body::Body;
use std::borrow::BorrowMut;

/// Step every body forward by dt using semi-implicit Euler integration.
///
/// Accelerations must already be up to date (see [`crate::force::accumulate`]).
/// Each body only reads its own state, so the order does not matter.
pub fn step<B: BorrowMut<Body>>(bodies: &mut [B], dt: f64) {
    for entry in bodies.iter_mut() {
        let body: &mut Body = entry.borrow_mut();
        body.update(dt);
    }
}
