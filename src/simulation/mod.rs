pub mod states;
pub mod params;
pub mod engine;
pub mod vortex;
pub mod integrator;
pub mod scenario;
