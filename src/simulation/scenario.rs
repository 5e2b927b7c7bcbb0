//! Build a fully-initialized simulation context from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - the field source (`PointMass`) centered in the viewport
//! - the particle registry, seeded with any configured particles
//! - the viewport and the overlay toggles
//!
//! The scenario is inserted into Bevy as a `Resource` and is the only
//! mutable simulation state: input systems launch into it, the physics
//! system ticks it and the render systems read it.

use anyhow::{ensure, Result};
use bevy::prelude::Resource;
use log::info;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::{Overlay, Overlays, Viewport};
use crate::simulation::forces::PointMass;
use crate::simulation::overlay::{specific_energy, Readout};
use crate::simulation::params::Parameters;
use crate::simulation::registry::{Registry, TickReport};
use crate::simulation::states::{NVec2, Particle, ParticleId};

/// Bevy resource representing the running slingshot simulation
#[derive(Resource, Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub field: PointMass,
    pub registry: Registry,
    pub viewport: Viewport,
    pub overlays: Overlays,
    pub velocity_scale: f64, // on-screen length per unit of speed
    pub acceleration_scale: f64, // on-screen length per unit of acceleration
    pub ticks: u64, // ticks run so far
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let f_cfg = cfg.field;
        ensure!(f_cfg.G > 0.0 && f_cfg.G.is_finite(), "G must be positive, got {}", f_cfg.G);
        ensure!(f_cfg.M > 0.0 && f_cfg.M.is_finite(), "M must be positive, got {}", f_cfg.M);

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        ensure!(p_cfg.dt > 0.0 && p_cfg.dt.is_finite(), "dt must be positive, got {}", p_cfg.dt);
        ensure!(
            p_cfg.swallow_radius > 0.0 && p_cfg.swallow_radius.is_finite(),
            "swallow_radius must be positive and finite, got {}",
            p_cfg.swallow_radius
        );
        ensure!(
            p_cfg.escape_margin >= 0.0 && p_cfg.escape_margin.is_finite(),
            "escape_margin must be finite and not negative, got {}",
            p_cfg.escape_margin
        );
        ensure!(p_cfg.trace_capacity > 0, "trace_capacity must be at least 1");
        ensure!(p_cfg.launch_scale.is_finite(), "launch_scale must be finite");
        let parameters = Parameters {
            dt: p_cfg.dt,
            swallow_radius: p_cfg.swallow_radius,
            escape_margin: p_cfg.escape_margin,
            trace_capacity: p_cfg.trace_capacity,
            launch_scale: p_cfg.launch_scale,
        };

        let (w, h) = (cfg.viewport.width, cfg.viewport.height);
        ensure!(
            w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite(),
            "viewport must have a positive finite size, got {}x{}",
            w,
            h
        );
        let viewport = Viewport::new(cfg.viewport.width, cfg.viewport.height);
        let field = PointMass::new(f_cfg.G, f_cfg.M, viewport.center());

        let mut registry = Registry::new(parameters.trace_capacity, parameters.swallow_radius, parameters.escape_margin);
        for (i, pc) in cfg.particles.iter().enumerate() {
            let spawned = registry.spawn(NVec2::new(pc.x[0], pc.x[1]), NVec2::new(pc.v[0], pc.v[1]));
            ensure!(spawned.is_some(), "particle {} has non-finite x/v: {:?} {:?}", i, pc.x, pc.v);
        }

        let o_cfg = cfg.overlays;
        let overlays = Overlays {
            trace: o_cfg.trace,
            velocity: o_cfg.velocity,
            acceleration: o_cfg.acceleration,
        };

        Ok(Self {
            parameters,
            field,
            registry,
            viewport,
            overlays,
            velocity_scale: o_cfg.velocity_scale,
            acceleration_scale: o_cfg.acceleration_scale,
            ticks: 0,
        })
    }

    /// Launch from a completed drag gesture
    /// velocity = (end - start) * launch_scale, spawned at `start`
    pub fn launch(&mut self, start: NVec2, end: NVec2) -> Option<ParticleId> {
        let v = self.launch_velocity(start, end);
        let id = self.registry.spawn(start, v)?;
        info!("launched particle {} at ({:.1}, {:.1}) with v = ({:.2}, {:.2})", id, start.x, start.y, v.x, v.y);
        Some(id)
    }

    pub fn launch_velocity(&self, start: NVec2, end: NVec2) -> NVec2 {
        (end - start) * self.parameters.launch_scale
    }

    /// Add a particle directly with an explicit velocity
    pub fn spawn(&mut self, x: NVec2, v: NVec2) -> Option<ParticleId> {
        self.registry.spawn(x, v)
    }

    /// Track a new viewport size and move the field source to its middle
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
        self.field.recenter(self.viewport.center());
        info!("viewport resized to {}x{}, field centered at ({}, {})", width, height, self.field.center.x, self.field.center.y);
    }

    /// Advance the simulation by one fixed step
    pub fn tick(&mut self) -> TickReport {
        self.ticks += 1;
        self.registry.tick(&self.field, self.parameters.dt, &self.viewport)
    }

    /// Remove every particle
    pub fn clear(&mut self) {
        let n = self.registry.len();
        self.registry.clear();
        info!("cleared {} particle(s)", n);
    }

    pub fn toggle(&mut self, which: Overlay) -> bool {
        let on = self.overlays.toggle(which);
        info!("{:?} overlay {}", which, if on { "on" } else { "off" });
        on
    }

    pub fn particles(&self) -> &[Particle] {
        self.registry.particles()
    }

    /// Overlay readout for every live particle, in registry order
    pub fn readouts(&self) -> Vec<Readout> {
        self.particles().iter().map(|p| Readout::of(p, &self.field)).collect()
    }

    /// Sum of specific energies of all live particles
    pub fn total_specific_energy(&self) -> f64 {
        self.particles().iter().map(|p| specific_energy(p, &self.field)).sum()
    }
}
