//! Tests for frame delta clamping and scaling

use gravsim_core::clock::{SimulationClock, MAX_FRAME_DELTA};
use gravsim_core::tests::test_helpers::approx_eq;

#[test]
fn test_large_frame_delta_is_clamped() {
    let clock = SimulationClock::new(1.0);
    assert_eq!(clock.scaled_step(10.0), 0.16);
    assert_eq!(clock.scaled_step(10.0), MAX_FRAME_DELTA);
}

#[test]
fn test_small_frame_delta_passes_through() {
    let clock = SimulationClock::new(1.0);
    assert_eq!(clock.scaled_step(0.05), 0.05);
}

#[test]
fn test_clamp_applies_before_scale() {
    let clock = SimulationClock::new(86_400.0);
    assert!(approx_eq(clock.scaled_step(10.0), 0.16 * 86_400.0, 1e-9));
    assert!(approx_eq(clock.scaled_step(0.05), 0.05 * 86_400.0, 1e-9));
}

#[test]
fn test_negative_and_nan_deltas_are_zero() {
    let clock = SimulationClock::new(100.0);
    assert_eq!(clock.scaled_step(-1.0), 0.0);
    assert_eq!(clock.scaled_step(f64::NAN), 0.0);
}

#[test]
fn test_scale_is_not_clamped() {
    let clock = SimulationClock::new(-5.0e9);
    assert!(approx_eq(clock.scaled_step(0.1), -5.0e8, 1e-3));
}

#[test]
fn test_advance_accumulates_elapsed() {
    let mut clock = SimulationClock::new(10.0);
    let dt1 = clock.advance(0.1);
    let dt2 = clock.advance(1.0);
    assert!(approx_eq(dt1, 1.0, 1e-12));
    assert!(approx_eq(dt2, 1.6, 1e-12));
    assert!(approx_eq(clock.elapsed(), 2.6, 1e-12));

    clock.timestep_scale = 20.0;
    clock.advance(0.1);
    assert!(approx_eq(clock.elapsed(), 4.6, 1e-12));
}
