//! Scenario files: the initial conditions a simulation starts from.
//!
//! A scenario is a JSON document:
//!
//! ```json
//! {
//!   "name": "Sun-Earth",
//!   "scale": 1.0e9,
//!   "timestep": 86400.0,
//!   "bodies": [
//!     {
//!       "name": "Sun",
//!       "mass": 1.989e30,
//!       "radius": 6.957e8,
//!       "position": { "x": 0.0, "y": 0.0 },
//!       "velocity": { "x": 0.0, "y": 0.0 }
//!     }
//!   ]
//! }
//! ```
//!
//! `scale` (meters per pixel) may also be spelled `distanceScale` and
//! `timestep` (simulated seconds per second) may be spelled `timestepScale`.
//! A scenario is validated as a whole; any bad value rejects the file.

use crate::body::Body;
use crate::vector::Vector2D;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a scenario
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot read scenario '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {field}: {value}")]
    InvalidScale { field: &'static str, value: f64 },
    #[error("invalid body #{index} '{name}': {reason}")]
    InvalidBody {
        index: usize,
        name: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for Vector2D {
    fn from(p: Point) -> Self {
        Vector2D::new(p.x, p.y)
    }
}

/// Initial state of one body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BodySpec {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub position: Point,
    pub velocity: Point,
}

impl BodySpec {
    fn validate(&self, index: usize) -> Result<(), ScenarioError> {
        let invalid = |reason: &str| ScenarioError::InvalidBody {
            index,
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty"));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(invalid(&format!("mass must be positive, got {}", self.mass)));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(invalid(&format!("radius must be positive, got {}", self.radius)));
        }
        let components = [
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y,
        ];
        if components.iter().any(|c| !c.is_finite()) {
            return Err(invalid("position and velocity must be finite"));
        }
        Ok(())
    }

    /// Build the body, starting with zero acceleration
    pub fn to_body(&self) -> Body {
        Body::new(
            self.name.clone(),
            self.position.into(),
            self.velocity.into(),
            self.mass,
            self.radius,
        )
    }
}

/// A complete, validated scenario
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Meters per rendered pixel. Display only.
    #[serde(rename = "scale", alias = "distanceScale")]
    pub distance_scale: f64,
    /// Simulated seconds per wall-clock second
    #[serde(rename = "timestep", alias = "timestepScale")]
    pub timestep_scale: f64,
    pub bodies: Vec<BodySpec>,
}

impl Scenario {
    /// Parse and validate a scenario from JSON text
    pub fn from_json_str(source: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(source)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Read, parse and validate a scenario file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let source = Self::read_source(path)?;
        Self::from_json_str(&source)
    }

    /// Read the raw text of a scenario file
    pub fn read_source(path: impl AsRef<Path>) -> Result<String, ScenarioError> {
        let path = path.as_ref();
        std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ScenarioError> {
        if !self.distance_scale.is_finite() || self.distance_scale <= 0.0 {
            return Err(ScenarioError::InvalidScale {
                field: "distance scale",
                value: self.distance_scale,
            });
        }
        if !self.timestep_scale.is_finite() {
            return Err(ScenarioError::InvalidScale {
                field: "timestep scale",
                value: self.timestep_scale,
            });
        }
        for (index, body) in self.bodies.iter().enumerate() {
            body.validate(index)?;
        }
        Ok(())
    }
}
