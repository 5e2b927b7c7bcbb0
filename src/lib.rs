pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Particle, ParticleId, Trace, NVec2, TRACE_CAPACITY};
pub use simulation::forces::{FieldModel, FieldSample, PointMass};
pub use simulation::integrator::verlet_step;
pub use simulation::registry::{Registry, Removal, TickReport};
pub use simulation::engine::{Overlay, Overlays, Viewport};
pub use simulation::overlay::{format_sci, specific_energy, Readout};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{FieldConfig, OverlayConfig, ParametersConfig, ParticleConfig, ScenarioConfig, ViewportConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_energy_drift, bench_tick};
