//! Core state types for the slingshot simulation.
//!
//! Defines the projectile state:
//! - `Particle` with position, velocity and last acceleration (`NVec2`)
//! - `Trace`, the bounded history of past positions used to draw paths
//!
//! Coordinates are screen-like: origin at the top-left corner of the
//! viewport, y growing downward.

use std::collections::VecDeque;

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Stable identifier handed out by the registry on spawn
pub type ParticleId = u64;

/// Default number of past positions kept per particle
pub const TRACE_CAPACITY: usize = 1200;

/// Bounded FIFO of past positions. Once full, each push evicts the oldest point
#[derive(Debug, Clone)]
pub struct Trace {
    points: VecDeque<NVec2>,
    capacity: usize,
}

impl Trace {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::new(),
            capacity,
        }
    }

    /// Append a point, dropping the oldest one if the trace would overflow
    pub fn push(&mut self, p: NVec2) {
        self.points.push_back(p);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest retained point
    pub fn oldest(&self) -> Option<&NVec2> {
        self.points.front()
    }

    /// Most recent point
    pub fn newest(&self) -> Option<&NVec2> {
        self.points.back()
    }

    /// Points from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> + '_ {
        self.points.iter()
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub id: ParticleId,
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // last computed acceleration
    pub trace: Trace, // past positions, oldest first
}

impl Particle {
    /// Fresh particle: zero acceleration and an empty trace
    pub fn new(id: ParticleId, x: NVec2, v: NVec2, trace_capacity: usize) -> Self {
        Self {
            id,
            x,
            v,
            a: NVec2::zeros(),
            trace: Trace::with_capacity(trace_capacity),
        }
    }

    /// True when every component of position and velocity is finite
    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_grows_on_demand() {
        let mut t = Trace::with_capacity(TRACE_CAPACITY);
        assert_eq!(t.points.capacity(), 0);

        for i in 0..10 {
            t.push(NVec2::new(i as f64, 0.0));
        }
        assert_eq!(t.len(), 10);
        assert!(t.points.capacity() < t.capacity());
    }

    #[test]
    fn trace_evicts_oldest_at_capacity() {
        let mut t = Trace::with_capacity(3);
        for i in 0..5 {
            t.push(NVec2::new(i as f64, 0.0));
        }
        assert_eq!(t.len(), t.capacity());
        assert_eq!(t.oldest(), Some(&NVec2::new(2.0, 0.0)));
        assert_eq!(t.newest(), Some(&NVec2::new(4.0, 0.0)));
    }
}
