pub mod body;
pub mod clock;
pub mod diagnostics;
pub mod force;
pub mod integrator;
pub mod report;
pub mod scenario;
pub mod simulation;
pub mod trail;
pub mod units;
pub mod vector;

pub use body::Body;
pub use clock::{SimulationClock, MAX_FRAME_DELTA};
pub use diagnostics::{load_simulation, LoadError};
pub use force::{accumulate, pairwise_force, G};
pub use report::{BodySnapshot, Report};
pub use scenario::{BodySpec, Point, Scenario, ScenarioError};
pub use simulation::{BodyId, Command, Simulation, TickSummary, TrackedBody};
pub use trail::{TrailBuffer, MAX_TRAIL_LENGTH};
pub use vector::{Vector2D, VectorExt};
