//! Fixed-step time integrator for a single particle
//!
//! Velocity-Verlet with two field evaluations per step, driven by any
//! [`FieldModel`]

use super::forces::FieldModel;
use super::states::Particle;

/// Advance one particle by `dt` using velocity-Verlet
/// Updates position, velocity and the stored acceleration in place and
/// returns the distance to the field center at the new position
pub fn verlet_step<F: FieldModel + ?Sized>(p: &mut Particle, field: &F, dt: f64) -> f64 {
    let half_dt = 0.5 * dt; // half step dt/2

    // a_n from x_n
    let a_old = field.acceleration(p.x).a;
    p.a = a_old;

    // x_n+1 = x_n + dt v_n + (1/2) dt^2 a_n
    p.x += dt * p.v + half_dt * dt * a_old;

    // a_n+1 from x_n+1
    let sample = field.acceleration(p.x);

    // v_n+1 = v_n + (dt/2) (a_n + a_n+1)
    p.v += half_dt * (a_old + sample.a);

    p.a = sample.a;
    sample.r
}
