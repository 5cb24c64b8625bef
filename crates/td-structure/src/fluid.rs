//! Liquid properties and Darcy friction for the damper column.

use crate::common::check_positive;
use crate::error::StructureResult;
use td_core::units::{Accel, Density, KinVisc, Length, constants, kgpm3, m, m2ps};

/// Below this Reynolds number the Swamee-Jain correlation is not used; its
/// logarithm changes sign near Re ≈ 7 and the friction factor diverges.
pub const SWAMEE_JAIN_MIN_REYNOLDS: f64 = 100.0;

/// Constants of the liquid filling the damper and of the pipe wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Liquid density
    pub specific_mass: Density,
    /// Kinematic viscosity
    pub kinematic_viscosity: KinVisc,
    /// Gravitational acceleration
    pub gravity: Accel,
    /// Absolute pipe roughness
    pub pipe_roughness: Length,
}

impl FluidProperties {
    pub fn new(
        specific_mass: Density,
        kinematic_viscosity: KinVisc,
        gravity: Accel,
        pipe_roughness: Length,
    ) -> StructureResult<Self> {
        let fluid = Self {
            specific_mass,
            kinematic_viscosity,
            gravity,
            pipe_roughness,
        };
        fluid.validate()?;
        Ok(fluid)
    }

    /// Check every constant is physical. Roughness may be zero (smooth pipe).
    pub fn validate(&self) -> StructureResult<()> {
        check_positive(self.specific_mass.value, "specific mass")?;
        check_positive(self.kinematic_viscosity.value, "kinematic viscosity")?;
        check_positive(self.gravity.value, "gravity")?;
        crate::common::check_non_negative(self.pipe_roughness.value, "pipe roughness")?;
        Ok(())
    }

    /// Reynolds number `|v|·D/ν` of a flow at `speed` (m/s) through `diameter` (m).
    pub fn reynolds(&self, speed: f64, diameter: f64) -> f64 {
        speed.abs() * diameter / self.kinematic_viscosity.value
    }
}

impl Default for FluidProperties {
    /// Water at about 20 °C in a PVC pipe.
    fn default() -> Self {
        Self {
            specific_mass: kgpm3(998.2),
            kinematic_viscosity: m2ps(1.003e-6),
            gravity: constants::g0(),
            pipe_roughness: m(1.5e-6),
        }
    }
}

/// Darcy friction factor from the Swamee-Jain approximation of Colebrook-White.
///
/// `relative_roughness` is `ε/D`. Only meaningful for
/// `reynolds >= SWAMEE_JAIN_MIN_REYNOLDS`.
pub fn swamee_jain_friction_factor(reynolds: f64, relative_roughness: f64) -> f64 {
    let a = relative_roughness / 3.7;
    let b = 5.74 / reynolds.powf(0.9);
    0.25 / (a + b).log10().powi(2)
}
