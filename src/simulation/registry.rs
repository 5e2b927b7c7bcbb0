//! Particle registry: sole owner of every live projectile
//!
//! Each tick steps all particles with velocity-Verlet, records their trace
//! and then drops the ones that were swallowed by the field source or left
//! the viewport. Removal rebuilds the live set with `retain_mut`, so no
//! particle is skipped or processed twice when a neighbour disappears.

use log::{debug, warn};

use crate::simulation::engine::Viewport;
use crate::simulation::forces::FieldModel;
use crate::simulation::integrator::verlet_step;
use crate::simulation::states::{NVec2, Particle, ParticleId};

/// Why a particle left the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    Swallowed,
    Escaped,
}

/// Removal counts for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub swallowed: usize,
    pub escaped: usize,
}

impl TickReport {
    pub fn removed(&self) -> usize {
        self.swallowed + self.escaped
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    particles: Vec<Particle>,
    next_id: ParticleId,
    trace_capacity: usize,
    swallow_radius: f64,
    escape_margin: f64,
}

impl Registry {
    pub fn new(trace_capacity: usize, swallow_radius: f64, escape_margin: f64) -> Self {
        Self {
            particles: Vec::new(),
            next_id: 0,
            trace_capacity,
            swallow_radius,
            escape_margin,
        }
    }

    /// Add a particle with zero acceleration and an empty trace
    /// Non-finite input is refused so it never reaches the frame loop
    pub fn spawn(&mut self, x: NVec2, v: NVec2) -> Option<ParticleId> {
        let id = self.next_id;
        let p = Particle::new(id, x, v, self.trace_capacity);
        if !p.is_finite() {
            warn!("refusing particle with non-finite state x={:?} v={:?}", x, v);
            return None;
        }
        self.next_id += 1;
        self.particles.push(p);
        Some(id)
    }

    /// Advance every live particle by `dt` and prune the removed ones
    pub fn tick<F: FieldModel + ?Sized>(&mut self, field: &F, dt: f64, viewport: &Viewport) -> TickReport {
        let mut report = TickReport::default();
        let swallow_radius = self.swallow_radius;
        let margin = self.escape_margin;

        self.particles.retain_mut(|p| {
            let r = verlet_step(p, field, dt);
            p.trace.push(p.x);

            match removal_reason(p, r, swallow_radius, margin, viewport) {
                Some(Removal::Swallowed) => {
                    report.swallowed += 1;
                    false
                }
                Some(Removal::Escaped) => {
                    report.escaped += 1;
                    false
                }
                None => true,
            }
        });

        if report.removed() > 0 {
            debug!(
                "tick removed {} particle(s): {} swallowed, {} escaped, {} live",
                report.removed(),
                report.swallowed,
                report.escaped,
                self.particles.len()
            );
        }
        report
    }

    /// Read-only view of the live particles, as of the last tick
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    /// Drop every particle at once
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn swallow_radius(&self) -> f64 {
        self.swallow_radius
    }
}

/// Single removal decision for a particle after its step
/// Swallowing wins when several predicates hold
fn removal_reason(p: &Particle, r: f64, swallow_radius: f64, margin: f64, viewport: &Viewport) -> Option<Removal> {
    if r < swallow_radius {
        return Some(Removal::Swallowed);
    }
    // non-finite state counts as escaped
    if !p.is_finite() || !viewport.contains_with_margin(&p.x, margin) {
        return Some(Removal::Escaped);
    }
    None
}
