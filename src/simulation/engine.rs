//! Runtime surroundings of the simulation
//!
//! `Viewport` is the visible area used for culling and for placing the
//! field source, `Overlays` are the display toggles read by the render pass

use crate::simulation::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Middle of the viewport, where the field source sits
    pub fn center(&self) -> NVec2 {
        NVec2::new(0.5 * self.width, 0.5 * self.height)
    }

    /// True if `x` lies inside the viewport grown by `margin` on every side
    pub fn contains_with_margin(&self, x: &NVec2, margin: f64) -> bool {
        x.x >= -margin
            && x.x <= self.width + margin
            && x.y >= -margin
            && x.y <= self.height + margin
    }
}

/// Which optional layers the renderer draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlays {
    pub trace: bool,
    pub velocity: bool,
    pub acceleration: bool,
}

impl Default for Overlays {
    fn default() -> Self {
        Self {
            trace: true,
            velocity: false,
            acceleration: false,
        }
    }
}

/// Toggle targets, one per key binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Trace,
    Velocity,
    Acceleration,
}

impl Overlays {
    /// Flip one flag and return its new value
    pub fn toggle(&mut self, which: Overlay) -> bool {
        let flag = match which {
            Overlay::Trace => &mut self.trace,
            Overlay::Velocity => &mut self.velocity,
            Overlay::Acceleration => &mut self.acceleration,
        };
        *flag = !*flag;
        *flag
    }
}
