use std::time::Instant;

use crate::simulation::engine::Viewport;
use crate::simulation::forces::PointMass;
use crate::simulation::integrator::verlet_step;
use crate::simulation::overlay::specific_energy;
use crate::simulation::registry::Registry;
use crate::simulation::states::{NVec2, Particle, TRACE_CAPACITY};

const MU: f64 = 100_000.0;

/// Registry of `n` particles on roughly circular orbits, none of which get
/// swallowed or escape during a short run
fn make_registry(n: usize, viewport: &Viewport) -> Registry {
    let mut registry = Registry::new(TRACE_CAPACITY, 32.0, 2000.0);
    let c = viewport.center();

    for i in 0..n {
        let i_f = i as f64;
        // deterministic radii and phases, no rand needed
        let r = 80.0 + (i_f * 0.37).sin().abs() * 200.0;
        let phi = i_f * 0.13;
        let x = c + NVec2::new(r * phi.cos(), r * phi.sin());
        let speed = (MU / r).sqrt();
        let v = NVec2::new(-speed * phi.sin(), speed * phi.cos());
        registry.spawn(x, v);
    }
    registry
}

/// Time one registry tick for a range of particle counts
pub fn bench_tick() {
    let ns = [100, 1_000, 10_000, 100_000];
    let steps = 20;

    let viewport = Viewport::new(1280.0, 720.0);
    let field = PointMass::new(1.0, MU, viewport.center());

    for n in ns {
        let mut registry = make_registry(n, &viewport);

        // Warm up
        registry.tick(&field, 0.1, &viewport);

        let t0 = Instant::now();
        for _ in 0..steps {
            registry.tick(&field, 0.1, &viewport);
        }
        let per_tick = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {:6}, tick = {:10.6} s, live = {}", n, per_tick, registry.len());
    }
}

/// Relative energy drift of a single eccentric orbit against the step size
/// Paste output directly into a spreadsheet to graph
pub fn bench_energy_drift() {
    println!("dt,steps,max_rel_drift,final_rel_drift");

    let field = PointMass::new(1.0, MU, NVec2::zeros());
    let t_end = 200.0;

    for dt in [0.4, 0.2, 0.1, 0.05, 0.025] {
        let steps = (t_end / dt) as usize;

        // eccentric: 0.8 of circular speed at r = 150
        let mut p = Particle::new(0, NVec2::new(150.0, 0.0), NVec2::new(0.0, 0.8 * (MU / 150.0).sqrt()), 1);
        let e0 = specific_energy(&p, &field);
        let mut max_drift: f64 = 0.0;

        for _ in 0..steps {
            verlet_step(&mut p, &field, dt);
            let drift = ((specific_energy(&p, &field) - e0) / e0).abs();
            max_drift = max_drift.max(drift);
        }
        let final_drift = ((specific_energy(&p, &field) - e0) / e0).abs();

        println!("{},{},{:.3e},{:.3e}", dt, steps, max_drift, final_drift);
    }
}
