//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`FlowConfig`]     – flow strength, particle count, domain and seed options
//! - [`RunConfig`]      – cycle count and substeps per half-cycle
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! flow:
//!   mu: 1.0                  # flow strength, must be nonzero
//!   num_particles: 100000    # odd counts round down to even
//!   expand_boundaries: false # double the domain half-extents
//!   seed: 42                 # omit for an entropy seed
//!
//! run:
//!   cycles: 5                # full blinking cycles
//!   fps: 10                  # substeps per half-cycle, also video frame rate
//! ```
//!
//! The scenario builder maps this configuration into the runtime simulation
//! types, performing the construction-time validation.

use serde::Deserialize;

/// Flow and domain configuration for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct FlowConfig {
    pub mu: f64, // flow strength
    pub num_particles: usize, // requested tracer count
    #[serde(default)]
    pub expand_boundaries: bool, // `true` doubles the domain half-extents
    #[serde(default)]
    pub seed: Option<u64>, // particle placement seed, entropy when omitted
}

/// Run-length configuration for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub cycles: usize, // number of full blinking cycles
    pub fps: usize, // substeps per half-cycle, doubles as the video frame rate
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub flow: FlowConfig, // flow and domain settings
    pub run: RunConfig, // run-length settings
}
