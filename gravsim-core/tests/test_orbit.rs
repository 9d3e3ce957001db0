//! Long-running orbital tests

use gravsim_core::tests::test_helpers::{
    approx_eq, approx_eq_vec, orbital_period, sun_earth, AU, SUN_MASS,
};

#[test]
fn test_earth_returns_after_one_period() {
    let mut sim = sun_earth();
    // six minutes of simulated time per 0.01 s frame
    sim.set_timestep_scale(36_000.0);
    let frame_delta = 0.01;
    let dt = frame_delta * sim.timestep_scale();

    let earth = sim.find("Earth").expect("Earth").id;
    let start = sim.body(earth).expect("Earth").pos;

    let period = orbital_period(SUN_MASS, AU);
    let ticks = (period / dt).floor() as usize;
    for _ in 0..ticks {
        sim.tick(frame_delta, &[]);
    }
    sim.step(period - ticks as f64 * dt);

    let end = sim.body(earth).expect("Earth").pos;
    assert!(
        approx_eq_vec(start, end, 1.0e-3 * AU),
        "Earth drifted {} m from its starting point",
        (end - start).length()
    );
}

#[test]
fn test_circular_orbit_keeps_radius() {
    let mut sim = sun_earth();
    sim.set_timestep_scale(36_000.0);

    for _ in 0..4000 {
        sim.tick(0.01, &[]);
        let sun = &sim.entries()[0].body;
        let earth = &sim.entries()[1].body;
        let r = (earth.pos - sun.pos).length();
        assert!(approx_eq(r, AU, 1.0e-3 * AU), "radius {} strayed from 1 AU", r);
    }
}

#[test]
fn test_elapsed_time_matches_ticks() {
    let mut sim = sun_earth();
    sim.set_timestep_scale(86_400.0);
    for _ in 0..365 {
        sim.tick(1.0, &[]);
    }
    // each frame is clamped to 0.16 s before scaling
    assert!(approx_eq(sim.elapsed(), 365.0 * 0.16 * 86_400.0, 1e-3));
}
