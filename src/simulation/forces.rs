//! Field model for the slingshot
//!
//! A single fixed point mass pulls every particle toward its center with an
//! inverse-square law. The [`FieldModel`] trait is the seam the integrator
//! and the overlays both go through, so there is exactly one acceleration
//! formula in the crate.

use crate::simulation::states::NVec2;

/// Acceleration at a point plus the distance it was computed at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub a: NVec2, // acceleration
    pub r: f64, // distance to the field center
}

/// Trait for 2D acceleration sources evaluated at a single position
pub trait FieldModel {
    fn acceleration(&self, x: NVec2) -> FieldSample;
}

/// Central point mass ("black hole")
/// `G` and `M` are fixed for a run, `center` follows the viewport
#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct PointMass {
    pub G: f64, // gravitational constant
    pub M: f64, // central mass
    pub center: NVec2,
}

impl PointMass {
    #[allow(non_snake_case)]
    pub fn new(G: f64, M: f64, center: NVec2) -> Self {
        Self { G, M, center }
    }

    /// Standard gravitational parameter G*M
    pub fn mu(&self) -> f64 {
        self.G * self.M
    }

    /// Move the source, e.g. after the viewport was resized
    pub fn recenter(&mut self, center: NVec2) {
        self.center = center;
    }

    /// Specific potential energy -GM/r, zero exactly at the center
    pub fn potential(&self, x: NVec2) -> f64 {
        let r = (self.center - x).norm();
        if r == 0.0 {
            return 0.0;
        }
        -self.mu() / r
    }
}

impl FieldModel for PointMass {
    fn acceleration(&self, x: NVec2) -> FieldSample {
        // d points from the particle toward the center
        let d = self.center - x;
        let r = d.norm();

        // the only singularity guard: sitting on the center feels nothing
        if r == 0.0 {
            return FieldSample { a: NVec2::zeros(), r: 0.0 };
        }

        // |a| = GM / r^2 along the unit vector d / r
        let coef = self.mu() / (r * r * r);

        FieldSample { a: coef * d, r }
    }
}
