//! Shear-building story model.

use std::fmt;
use std::str::FromStr;

use crate::common::check_positive;
use crate::error::{StructureError, StructureResult};
use td_core::units::{Length, Mass, Pressure, kg, m, pa};

/// End restraint of the columns of a story.
///
/// Selects the lateral stiffness coefficient applied to `E·I/h³`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SupportCondition {
    /// Fixed at both ends (coefficient 24).
    #[default]
    FixFix,
    /// Fixed at the base, pinned at the top (coefficient 15).
    FixPin,
    /// Pinned at the base, fixed at the top (coefficient 15).
    PinFix,
    /// Pinned at both ends (coefficient 6).
    PinPin,
}

impl SupportCondition {
    /// Lateral stiffness coefficient for the story's columns.
    pub fn stiffness_coefficient(self) -> f64 {
        match self {
            Self::FixFix => 24.0,
            Self::FixPin | Self::PinFix => 15.0,
            Self::PinPin => 6.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FixFix => "Fix-Fix",
            Self::FixPin => "Fix-Pin",
            Self::PinFix => "Pin-Fix",
            Self::PinPin => "Pin-Pin",
        }
    }
}

impl fmt::Display for SupportCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SupportCondition {
    type Err = StructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Fix-Fix" => Ok(Self::FixFix),
            "Fix-Pin" => Ok(Self::FixPin),
            "Pin-Fix" => Ok(Self::PinFix),
            "Pin-Pin" => Ok(Self::PinPin),
            other => Err(StructureError::UnknownSupport {
                name: other.to_string(),
            }),
        }
    }
}

/// One story of a shear building: a lumped floor mass carried by columns of a
/// rectangular section.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    mass: Mass,
    height: Length,
    column_width: Length,
    column_depth: Length,
    elastic_modulus: Pressure,
    support: SupportCondition,
}

impl Story {
    /// Create a story, validating that every parameter is finite and positive.
    pub fn new(
        mass: Mass,
        height: Length,
        column_width: Length,
        column_depth: Length,
        elastic_modulus: Pressure,
        support: SupportCondition,
    ) -> StructureResult<Self> {
        check_positive(mass.value, "story mass")?;
        check_positive(height.value, "story height")?;
        check_positive(column_width.value, "column width")?;
        check_positive(column_depth.value, "column depth")?;
        check_positive(elastic_modulus.value, "elastic modulus")?;

        Ok(Self {
            mass,
            height,
            column_width,
            column_depth,
            elastic_modulus,
            support,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass.value
    }

    pub fn height(&self) -> f64 {
        self.height.value
    }

    pub fn column_width(&self) -> f64 {
        self.column_width.value
    }

    pub fn column_depth(&self) -> f64 {
        self.column_depth.value
    }

    pub fn elastic_modulus(&self) -> f64 {
        self.elastic_modulus.value
    }

    pub fn support(&self) -> SupportCondition {
        self.support
    }

    /// Second moment of area of the column section, `b·d³/12` (m⁴).
    pub fn second_moment_of_area(&self) -> f64 {
        self.column_width.value * self.column_depth.value.powi(3) / 12.0
    }

    /// Lateral stiffness, `coef·E·I/h³` (N/m).
    pub fn stiffness(&self) -> f64 {
        self.support.stiffness_coefficient() * self.elastic_modulus.value
            * self.second_moment_of_area()
            / self.height.value.powi(3)
    }

    /// Natural frequency (rad/s) of the story alone, with `hosted_mass` added
    /// when the story carries a damper (pass `0.0` otherwise).
    pub fn natural_frequency(&self, hosted_mass: f64) -> f64 {
        (self.stiffness() / (self.mass.value + hosted_mass)).sqrt()
    }

    /// Critical damping `2·m·ω` (kg/s), using the same effective mass as
    /// [`Story::natural_frequency`].
    pub fn critical_damping(&self, hosted_mass: f64) -> f64 {
        2.0 * (self.mass.value + hosted_mass) * self.natural_frequency(hosted_mass)
    }

    /// Viscous damping coefficient for a target damping ratio (kg/s).
    pub fn damping_coefficient(&self, damping_ratio: f64, hosted_mass: f64) -> f64 {
        self.critical_damping(hosted_mass) * damping_ratio
    }
}

impl Default for Story {
    /// 10 t floor on 0.35 m × 0.35 m concrete columns, 3 m tall, fixed at both ends.
    fn default() -> Self {
        Self {
            mass: kg(10.0e3),
            height: m(3.0),
            column_width: m(0.35),
            column_depth: m(0.35),
            elastic_modulus: pa(25.0e9),
            support: SupportCondition::FixFix,
        }
    }
}
