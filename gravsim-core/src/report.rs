//! On-demand state dump of every body

use crate::body::Body;
use crate::vector::Vector2D;
use std::fmt;

/// Copy of one body's state at the time the report was taken
#[derive(Debug, Clone, PartialEq)]
pub struct BodySnapshot {
    pub name: String,
    pub pos: Vector2D,
    pub vel: Vector2D,
    pub acc: Vector2D,
    pub mass: f64,
    pub radius: f64,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            name: body.name.clone(),
            pos: body.pos,
            vel: body.vel,
            acc: body.acc,
            mass: body.mass,
            radius: body.radius,
        }
    }
}

impl fmt::Display for BodySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: pos: [{}, {}], vel: [{}, {}], acc: [{}, {}], mass: {}, radius: {}",
            self.name,
            self.pos.x,
            self.pos.y,
            self.vel.x,
            self.vel.y,
            self.acc.x,
            self.acc.y,
            self.mass,
            self.radius
        )
    }
}

/// Diagnostic snapshot of a whole simulation, one line per body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub bodies: Vec<BodySnapshot>,
}

impl Report {
    pub fn from_bodies<'a>(bodies: impl IntoIterator<Item = &'a Body>) -> Self {
        Self {
            bodies: bodies.into_iter().map(BodySnapshot::from).collect(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for snapshot in &self.bodies {
            writeln!(f, "{}", snapshot)?;
        }
        Ok(())
    }
}
