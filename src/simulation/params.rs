//! Numerical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size,
//! - swallow radius and escape margin used to prune particles,
//! - trace length and the drag-to-velocity launch scale

use crate::simulation::states::TRACE_CAPACITY;

pub const DEFAULT_DT: f64 = 0.1;
pub const DEFAULT_SWALLOW_RADIUS: f64 = 32.0;
pub const DEFAULT_ESCAPE_MARGIN: f64 = 2000.0;
pub const DEFAULT_LAUNCH_SCALE: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // fixed step size, one step per frame
    pub swallow_radius: f64, // particles closer than this to the center are consumed
    pub escape_margin: f64, // slack around the viewport before a particle counts as gone
    pub trace_capacity: usize, // max past positions kept per particle
    pub launch_scale: f64, // velocity = (drag end - drag start) * launch_scale
}

impl Default for Parameters {
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
