//! Configuration types for loading slingshot scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`FieldConfig`]      – the central mass and gravitational constant
//! - [`ParametersConfig`] – step size, pruning distances, trace length, launch scale
//! - [`ViewportConfig`]   – initial viewport (window) size
//! - [`OverlayConfig`]    – default toggle state and arrow scales
//! - [`ParticleConfig`]   – optional particles present at start-up
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section is optional and falls back to the built-in defaults, so an
//! empty document is a valid scenario.
//!
//! # YAML format
//!
//! ```yaml
//! field:
//!   G: 1.0
//!   M: 100000.0
//!
//! parameters:
//!   dt: 0.1                 # fixed step per frame
//!   swallow_radius: 32.0
//!   escape_margin: 2000.0
//!   trace_capacity: 1200
//!   launch_scale: 0.05
//!
//! viewport:
//!   width: 1280.0
//!   height: 720.0
//!
//! overlays:
//!   trace: true
//!   velocity: false
//!   acceleration: false
//!   velocity_scale: 2.0
//!   acceleration_scale: 4.0
//!
//! particles:
//!   - x: [ 740.0, 360.0 ]
//!     v: [   0.0, -30.0 ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::params::{DEFAULT_DT, DEFAULT_ESCAPE_MARGIN, DEFAULT_LAUNCH_SCALE, DEFAULT_SWALLOW_RADIUS};
use crate::simulation::states::TRACE_CAPACITY;

/// Central point mass
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FieldConfig {
    pub G: f64, // gravitational constant
    pub M: f64, // mass of the black hole
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self { G: 1.0, M: 100_000.0 }
    }
}

/// Global numerical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub dt: f64,              // fixed time step
    pub swallow_radius: f64,  // distance at which the black hole consumes a particle
    pub escape_margin: f64,   // slack around the viewport before culling
    pub trace_capacity: usize, // past positions kept per particle
    pub launch_scale: f64,    // drag length -> launch velocity
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            dt: DEFAULT_DT,
            swallow_radius: DEFAULT_SWALLOW_RADIUS,
            escape_margin: DEFAULT_ESCAPE_MARGIN,
            trace_capacity: TRACE_CAPACITY,
            launch_scale: DEFAULT_LAUNCH_SCALE,
        }
    }
}

/// Initial viewport size in logical pixels
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 1280.0, height: 720.0 }
    }
}

/// Overlay defaults; arrow scales convert vectors to on-screen lengths
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OverlayConfig {
    pub trace: bool,
    pub velocity: bool,
    pub acceleration: bool,
    pub velocity_scale: f64,
    pub acceleration_scale: f64,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            trace: true,
            velocity: false,
            acceleration: false,
            velocity_scale: 2.0,
            acceleration_scale: 4.0,
        }
    }
}

/// A particle present when the scenario starts
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: [f64; 2], // initial position in viewport coordinates
    pub v: [f64; 2], // initial velocity
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub field: FieldConfig,
    pub parameters: ParametersConfig,
    pub viewport: ViewportConfig,
    pub overlays: OverlayConfig,
    pub particles: Vec<ParticleConfig>,
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML string
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        // an empty document deserializes to unit, not to an empty mapping
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: ScenarioConfig = serde_yaml::from_str(s).context("invalid scenario YAML")?;
        Ok(cfg)
    }

    /// Load a scenario from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("cannot open scenario {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("in scenario file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let cfg = ScenarioConfig::from_yaml_str("").unwrap();
        assert_eq!(cfg.parameters.trace_capacity, 1200);
        assert_eq!(cfg.parameters.swallow_radius, 32.0);
        assert_eq!(cfg.parameters.escape_margin, 2000.0);
        assert_eq!(cfg.parameters.launch_scale, 0.05);
        assert!(cfg.overlays.trace);
        assert!(!cfg.overlays.velocity);
        assert!(!cfg.overlays.acceleration);
        assert!(cfg.particles.is_empty());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let yaml = "field:\n  M: 5000.0\nparameters:\n  dt: 0.5\nparticles:\n  - x: [1.0, 2.0]\n    v: [3.0, 4.0]\n";
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.field.G, 1.0);
        assert_eq!(cfg.field.M, 5000.0);
        assert_eq!(cfg.parameters.dt, 0.5);
        assert_eq!(cfg.parameters.swallow_radius, 32.0);
        assert_eq!(cfg.particles.len(), 1);
        assert_eq!(cfg.particles[0].v, [3.0, 4.0]);
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(ScenarioConfig::from_yaml_str("parameters: [1, 2").is_err());
    }
}
