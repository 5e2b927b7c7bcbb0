//! Derived values shown on top of the simulation
//!
//! Nothing here mutates state. Accelerations are re-read through the same
//! [`FieldModel`] the integrator uses so readouts cannot drift from physics.

use crate::simulation::forces::{FieldModel, PointMass};
use crate::simulation::states::{NVec2, Particle};

/// Display data for one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub velocity: NVec2,
    pub speed: f64,
    pub acceleration: NVec2,
    pub accel_magnitude: f64,
    pub r: f64, // distance to the field center
}

impl Readout {
    pub fn of(p: &Particle, field: &impl FieldModel) -> Self {
        let sample = field.acceleration(p.x);
        Self {
            velocity: p.v,
            speed: p.v.norm(),
            acceleration: sample.a,
            accel_magnitude: sample.a.norm(),
            r: sample.r,
        }
    }

    /// One-line label, e.g. `|v| 3.00e+1  |a| 1.00e+1`
    pub fn label(&self) -> String {
        format!("|v| {}  |a| {}", format_sci(self.speed, 2), format_sci(self.accel_magnitude, 2))
    }
}

/// Specific orbital energy 1/2 |v|^2 - GM/r
pub fn specific_energy(p: &Particle, field: &PointMass) -> f64 {
    0.5 * p.v.norm_squared() + field.potential(p.x)
}

/// End point of an arrow drawn from `origin` along `vector` scaled for display
pub fn arrow_tip(origin: NVec2, vector: NVec2, scale: f64) -> NVec2 {
    origin + scale * vector
}

/// Scientific notation with `digits` fractional digits and a signed
/// exponent: `30.0` -> `3.00e+1`, `0.00125` -> `1.25e-3`
pub fn format_sci(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{:.*e}", digits, value);
    match raw.split_once('e') {
        Some((mantissa, exp)) if exp.starts_with('-') => format!("{mantissa}e{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}e+{exp}"),
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sci_positive_exponent() {
        assert_eq!(format_sci(30.0, 2), "3.00e+1");
        assert_eq!(format_sci(123456.0, 2), "1.23e+5");
    }

    #[test]
    fn sci_negative_exponent() {
        assert_eq!(format_sci(0.00125, 2), "1.25e-3");
    }

    #[test]
    fn sci_zero_and_sign() {
        assert_eq!(format_sci(0.0, 2), "0.00e+0");
        assert_eq!(format_sci(-4.5, 2), "-4.50e+0");
    }

    #[test]
    fn readout_uses_field_acceleration() {
        let field = PointMass::new(1.0, 100_000.0, NVec2::zeros());
        let p = Particle::new(0, NVec2::new(100.0, 0.0), NVec2::new(0.0, 30.0), 8);
        let ro = Readout::of(&p, &field);

        assert!((ro.speed - 30.0).abs() < 1e-12);
        assert!((ro.accel_magnitude - 10.0).abs() < 1e-12);
        assert!((ro.r - 100.0).abs() < 1e-12);
        assert_eq!(ro.label(), "|v| 3.00e+1  |a| 1.00e+1");
    }

    #[test]
    fn arrow_tip_scales_vector() {
        let tip = arrow_tip(NVec2::new(1.0, 1.0), NVec2::new(2.0, -4.0), 0.5);
        assert_eq!(tip, NVec2::new(2.0, -1.0));
    }
}
