//! Diagnostics and error reporting for gravsim
//!
//! This module turns scenario loading failures into messages for users.

use crate::scenario::{Scenario, ScenarioError};
use crate::simulation::Simulation;
use std::path::Path;
use thiserror::Error;

/// A scenario error together with its formatted, user-facing message
#[derive(Debug, Error)]
#[error("{message}")]
pub struct LoadError {
    message: String,
    #[source]
    error: ScenarioError,
}

impl LoadError {
    pub fn new(error: ScenarioError, source: Option<&str>) -> Self {
        Self {
            message: format_load_error(&error, source),
            error,
        }
    }

    pub fn scenario_error(&self) -> &ScenarioError {
        &self.error
    }
}

/// Format a scenario error, quoting the offending line of `source` when the
/// error is a JSON syntax or type error
pub fn format_load_error(error: &ScenarioError, source: Option<&str>) -> String {
    let mut msg = format!("Scenario error: {}", error);

    if let (ScenarioError::Parse(parse), Some(source)) = (error, source) {
        let line = parse.line();
        if line > 0 {
            if let Some(text) = source.lines().nth(line - 1) {
                msg.push_str(&format!("\n  at line {}: {}", line, text.trim_end()));
            }
        }
    }

    msg
}

/// Load a scenario file into a fresh simulation. Syntax errors quote the
/// offending line of the file.
pub fn load_simulation(path: impl AsRef<Path>) -> Result<Simulation, LoadError> {
    let source = Scenario::read_source(path).map_err(|e| LoadError::new(e, None))?;
    Scenario::from_json_str(&source)
        .and_then(|scenario| Simulation::from_scenario(&scenario))
        .map_err(|e| LoadError::new(e, Some(&source)))
}
