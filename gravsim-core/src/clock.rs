//! Conversion from wall-clock frame time to simulated time

/// Upper bound on a single frame's wall-clock delta in seconds. A stalled
/// frame (window drag, long pause) would otherwise produce one huge step.
pub const MAX_FRAME_DELTA: f64 = 0.16;

/// Tracks the timestep scale and the total simulated time
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationClock {
    /// Simulated seconds per wall-clock second. Unbounded, may be negative.
    pub timestep_scale: f64,
    elapsed: f64,
}

impl SimulationClock {
    pub fn new(timestep_scale: f64) -> Self {
        Self {
            timestep_scale,
            elapsed: 0.0,
        }
    }

    /// Simulated step for a frame that took `frame_delta` wall-clock seconds.
    ///
    /// The raw delta is clamped to `[0, MAX_FRAME_DELTA]` before scaling; the
    /// scale itself is never clamped. A NaN delta counts as zero.
    pub fn scaled_step(&self, frame_delta: f64) -> f64 {
        if frame_delta.is_nan() {
            return 0.0;
        }
        frame_delta.clamp(0.0, MAX_FRAME_DELTA) * self.timestep_scale
    }

    /// Compute the step for this frame and add it to the elapsed time
    pub fn advance(&mut self, frame_delta: f64) -> f64 {
        let dt = self.scaled_step(frame_delta);
        self.elapsed += dt;
        dt
    }

    /// Total simulated seconds since construction
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
