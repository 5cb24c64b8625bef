//! Tuned liquid column damper (TLCD) model.
//!
//! A TLCD is a U-shaped tube of diameter `D` with a horizontal run of length
//! `b` (the width) and two vertical legs filled to height `h`. The liquid
//! column of length `L = b + 2h` oscillates against gravity:
//!
//! ```text
//! m = ρ·A·L        k = 2·ρ·A·g        ω = √(k/m) = √(2g/L)
//! ```
//!
//! Damping comes from two head losses along the column:
//!
//! - distributed friction (Darcy-Weisbach), written as `c₀·φ(v)` with
//!   `c₀ = ρ·A·L/(2D)` and the correction factor `φ(v) = f(Re)·|v|`
//! - the local contraction/elbow loss `ψ(v) = ½·ρ·A·ξ·|v|`
//!
//! In the laminar regime `f = 64/Re`, so `φ` is the constant `64ν/D` and
//! `c₀·φ` is the Hagen-Poiseuille coefficient. The linear damping
//! coefficient is the value of `c₀·φ + ψ` with the liquid at rest.

use std::f64::consts::PI;

use crate::common::{check_non_negative, check_positive};
use crate::error::{StructureError, StructureResult};
use crate::fluid::{FluidProperties, SWAMEE_JAIN_MIN_REYNOLDS, swamee_jain_friction_factor};
use td_core::units::{Length, m};

/// Default minor-loss coefficient of one column (two 90° bends plus the
/// leg/horizontal transitions).
pub const DEFAULT_CONTRACTION_COEFFICIENT: f64 = 1.5;

/// A bank of `amount` identical liquid columns mounted on the top story.
#[derive(Debug, Clone, PartialEq)]
pub struct Tlcd {
    diameter: Length,
    width: Length,
    water_height: Length,
    amount: usize,
    contraction_coefficient: f64,
    fluid: FluidProperties,
}

impl Tlcd {
    /// Create a damper bank, validating geometry, count and fluid constants.
    pub fn new(
        diameter: Length,
        width: Length,
        water_height: Length,
        amount: usize,
        fluid: FluidProperties,
    ) -> StructureResult<Self> {
        check_positive(diameter.value, "damper diameter")?;
        check_positive(width.value, "damper width")?;
        check_positive(water_height.value, "damper water height")?;
        if amount == 0 {
            return Err(StructureError::InvalidArg {
                what: "damper amount must be at least 1",
            });
        }
        fluid.validate()?;

        Ok(Self {
            diameter,
            width,
            water_height,
            amount,
            contraction_coefficient: DEFAULT_CONTRACTION_COEFFICIENT,
            fluid,
        })
    }

    /// Override the minor-loss coefficient `ξ` (zero disables contraction damping).
    pub fn with_contraction_coefficient(mut self, xi: f64) -> StructureResult<Self> {
        self.contraction_coefficient = check_non_negative(xi, "contraction coefficient")?;
        Ok(self)
    }

    /// Replace the liquid constants.
    pub fn with_fluid(mut self, fluid: FluidProperties) -> StructureResult<Self> {
        fluid.validate()?;
        self.fluid = fluid;
        Ok(self)
    }

    pub fn diameter(&self) -> f64 {
        self.diameter.value
    }

    pub fn width(&self) -> f64 {
        self.width.value
    }

    pub fn water_height(&self) -> f64 {
        self.water_height.value
    }

    /// Number of identical parallel columns (one DOF each).
    pub fn amount(&self) -> usize {
        self.amount
    }

    pub fn contraction_coefficient(&self) -> f64 {
        self.contraction_coefficient
    }

    pub fn fluid(&self) -> &FluidProperties {
        &self.fluid
    }

    /// Cross-section area `πD²/4` (m²).
    pub fn area(&self) -> f64 {
        PI * self.diameter.value.powi(2) / 4.0
    }

    /// Liquid column length `b + 2h` (m).
    pub fn length(&self) -> f64 {
        self.width.value + 2.0 * self.water_height.value
    }

    /// Liquid mass of one column (kg).
    pub fn mass(&self) -> f64 {
        self.fluid.specific_mass.value * self.area() * self.length()
    }

    /// Liquid mass of the whole bank (kg).
    pub fn total_mass(&self) -> f64 {
        self.mass() * self.amount as f64
    }

    /// Gravity restoring stiffness of one column (N/m).
    pub fn stiffness(&self) -> f64 {
        2.0 * self.fluid.specific_mass.value * self.area() * self.fluid.gravity.value
    }

    /// Natural frequency of the liquid column (rad/s).
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness() / self.mass()).sqrt()
    }

    /// Horizontal-run ratio `b/L`, the fraction of the column that moves with the floor.
    pub fn width_ratio(&self) -> f64 {
        self.width.value / self.length()
    }

    /// Mass coupling term `(b/L)·m` between the floor and one column (kg).
    pub fn coupling_mass(&self) -> f64 {
        self.width_ratio() * self.mass()
    }

    /// Friction damping constant `c₀ = ρ·A·L/(2D)` (kg/m).
    pub fn damping_coefficient_constant(&self) -> f64 {
        self.fluid.specific_mass.value * self.area() * self.length() / (2.0 * self.diameter.value)
    }

    /// Friction correction factor `φ(v)` (m/s).
    ///
    /// Equals the laminar value `64ν/D` at low Reynolds numbers and follows the
    /// turbulent Swamee-Jain friction once that exceeds it, so it is continuous
    /// and non-decreasing in `|v|`.
    pub fn damping_correction_factor(&self, velocity: f64) -> f64 {
        let speed = velocity.abs();
        let laminar = 64.0 * self.fluid.kinematic_viscosity.value / self.diameter.value;
        let reynolds = self.fluid.reynolds(speed, self.diameter.value);
        if reynolds < SWAMEE_JAIN_MIN_REYNOLDS {
            return laminar;
        }
        let relative_roughness = self.fluid.pipe_roughness.value / self.diameter.value;
        let turbulent = swamee_jain_friction_factor(reynolds, relative_roughness) * speed;
        laminar.max(turbulent)
    }

    /// Contraction damping `ψ(v) = ½·ρ·A·ξ·|v|` (kg/s).
    pub fn contraction_damping(&self, velocity: f64) -> f64 {
        0.5 * self.fluid.specific_mass.value
            * self.area()
            * self.contraction_coefficient
            * velocity.abs()
    }

    /// Velocity-dependent damping coefficient `c₀·φ(v) + ψ(v)` of one column (kg/s).
    pub fn nonlinear_damping_coefficient(&self, velocity: f64) -> f64 {
        self.damping_coefficient_constant() * self.damping_correction_factor(velocity)
            + self.contraction_damping(velocity)
    }

    /// Linear damping coefficient of one column: the nonlinear law at rest (kg/s).
    pub fn damping_coefficient(&self) -> f64 {
        self.nonlinear_damping_coefficient(0.0)
    }
}

impl Default for Tlcd {
    /// 0.6 m pipe, 20 m horizontal run, 1 m of water in each leg.
    fn default() -> Self {
        Self {
            diameter: m(0.6),
            width: m(20.0),
            water_height: m(1.0),
            amount: 1,
            contraction_coefficient: DEFAULT_CONTRACTION_COEFFICIENT,
            fluid: FluidProperties::default(),
        }
    }
}
