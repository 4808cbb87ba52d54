pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, SimulationState, NVec2};
pub use simulation::params::{SimulationParameters, Softening, DISTANCE_EPSILON};
pub use simulation::forces::NewtonianGravity;
pub use simulation::integrator::{step, symplectic_euler_integrator};
pub use simulation::trajectory::TrajectoryHistory;
pub use simulation::scenario::{Scenario, circular_orbit};
pub use simulation::session::{Session, RunSummary};

pub use configuration::config::{ScenarioConfig, ParametersConfig, InitialConfig, BodyConfig};
pub use configuration::controls::{Edit, Which};

pub use visualization::trace::{Frame, FrameSink, CsvFrameWriter, FrameRecorder};
