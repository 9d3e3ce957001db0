//! The simulation: bodies, their trails, and the per-tick pipeline

use crate::body::Body;
use crate::clock::SimulationClock;
use crate::force;
use crate::integrator;
use crate::report::Report;
use crate::scenario::{Scenario, ScenarioError};
use crate::trail::TrailBuffer;
use crate::units;
use log::{debug, info};
use std::borrow::{Borrow, BorrowMut};
use std::fmt;

/// Stable identifier of a body within one simulation. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A body together with its position history
#[derive(Debug, Clone)]
pub struct TrackedBody {
    pub id: BodyId,
    pub body: Body,
    pub trail: TrailBuffer,
}

impl Borrow<Body> for TrackedBody {
    fn borrow(&self) -> &Body {
        &self.body
    }
}

impl BorrowMut<Body> for TrackedBody {
    fn borrow_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}

/// Parameter adjustments applied at the start of a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Multiply the timestep scale
    ScaleTimestep(f64),
    /// Multiply the distance scale
    ScaleDistance(f64),
    SetTimestepScale(f64),
    SetDistanceScale(f64),
    /// Take a diagnostic snapshot
    Report,
}

/// What happened during one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummary {
    /// Simulated seconds advanced by this tick
    pub dt: f64,
    /// Total simulated seconds after this tick
    pub elapsed: f64,
    /// Present when a [`Command::Report`] was issued
    pub report: Option<Report>,
}

#[derive(Debug, Clone)]
pub struct Simulation {
    pub name: String,
    /// Meters per rendered pixel. Never read by the physics.
    pub distance_scale: f64,
    pub clock: SimulationClock,
    entries: Vec<TrackedBody>,
    next_id: u32,
}

impl Simulation {
    pub fn new(name: impl Into<String>, distance_scale: f64, timestep_scale: f64) -> Self {
        Self {
            name: name.into(),
            distance_scale,
            clock: SimulationClock::new(timestep_scale),
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Build a simulation from a scenario. The scenario is validated again,
    /// so an invalid one never produces a partial simulation.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, ScenarioError> {
        scenario.validate()?;

        let mut sim = Self::new(
            scenario.name.clone(),
            scenario.distance_scale,
            scenario.timestep_scale,
        );
        for spec in &scenario.bodies {
            sim.add_body(spec.to_body());
        }

        info!(
            "loaded scenario '{}' with {} bodies (scale {}, timestep {})",
            sim.name,
            sim.len(),
            units::readable_scale(sim.distance_scale),
            units::readable_timestep(sim.timestep_scale())
        );
        for entry in &sim.entries {
            debug!("{} {:?}", entry.id, entry.body);
        }

        Ok(sim)
    }

    pub fn timestep_scale(&self) -> f64 {
        self.clock.timestep_scale
    }

    pub fn set_timestep_scale(&mut self, timestep_scale: f64) {
        self.clock.timestep_scale = timestep_scale;
    }

    /// Total simulated seconds
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Add a body with an empty trail
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.entries.push(TrackedBody {
            id,
            body,
            trail: TrailBuffer::new(),
        });
        id
    }

    /// Remove a body and its trail
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index).body)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.entry(id).map(|e| &e.body)
    }

    pub fn trail(&self, id: BodyId) -> Option<&TrailBuffer> {
        self.entry(id).map(|e| &e.trail)
    }

    pub fn entry(&self, id: BodyId) -> Option<&TrackedBody> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Look a body up by name, first match wins
    pub fn find(&self, name: &str) -> Option<&TrackedBody> {
        self.entries.iter().find(|e| e.body.name == name)
    }

    /// All bodies in insertion order
    pub fn entries(&self) -> &[TrackedBody] {
        &self.entries
    }

    pub fn bodies(&self) -> impl Iterator<Item = &Body> + '_ {
        self.entries.iter().map(|e| &e.body)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn report(&self) -> Report {
        Report::from_bodies(self.bodies())
    }

    /// Apply a parameter adjustment
    pub fn apply(&mut self, command: Command) -> Option<Report> {
        match command {
            Command::ScaleTimestep(factor) => self.clock.timestep_scale *= factor,
            Command::ScaleDistance(factor) => self.distance_scale *= factor,
            Command::SetTimestepScale(value) => self.clock.timestep_scale = value,
            Command::SetDistanceScale(value) => self.distance_scale = value,
            Command::Report => {
                let report = self.report();
                info!("{}:\n{}", self.name, report);
                return Some(report);
            }
        }
        None
    }

    /// Advance one frame: apply `commands`, then step the physics by the
    /// clamped and scaled frame delta and record every body's new position.
    pub fn tick(&mut self, frame_delta: f64, commands: &[Command]) -> TickSummary {
        let mut report = None;
        for &command in commands {
            if let Some(r) = self.apply(command) {
                report = Some(r);
            }
        }

        let dt = self.clock.advance(frame_delta);
        self.step(dt);

        TickSummary {
            dt,
            elapsed: self.clock.elapsed(),
            report,
        }
    }

    /// Advance the physics by exactly `dt` simulated seconds without
    /// touching the clock.
    pub fn step(&mut self, dt: f64) {
        force::accumulate(&mut self.entries);
        integrator::step(&mut self.entries, dt);
        for entry in &mut self.entries {
            entry.trail.record(entry.body.pos);
        }
    }
}
