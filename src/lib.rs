pub mod simulation;
pub mod configuration;
pub mod analysis;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Group, Ensemble, Snapshot, NVec2};
pub use simulation::params::{Parameters, RunOptions};
pub use simulation::vortex::{Vortex, ActiveSide};
pub use simulation::engine::{BlinkingVortexSim, rotate_half_cycle, run_simulation};
pub use simulation::scenario::Scenario;

pub use configuration::config::{FlowConfig, RunConfig, ScenarioConfig};

pub use analysis::density::{GridSpec, histogram, density_difference};
pub use analysis::mixing::{mixing_fraction, mixing_series};

pub use visualization::frame::{StateImage, render_density_frame, FRAME_WIDTH, FRAME_HEIGHT};
pub use visualization::plot::plot_mixing;
pub use visualization::video::generate_video;

pub use benchmark::benchmark::{bench_rotation, bench_rotation_curve};

pub use error::SimError;
