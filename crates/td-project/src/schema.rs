//! Case file schema definitions.

use serde::{Deserialize, Serialize};

/// One analysis case: building, optional damper, excitation and options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    /// Ground floor first.
    #[serde(default)]
    pub stories: Vec<StoryDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tlcd: Option<TlcdDef>,
    pub excitation: ExcitationDef,
    #[serde(default)]
    pub configuration: ConfigurationDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoryDef {
    pub mass_kg: f64,
    pub height_m: f64,
    pub column_width_m: f64,
    pub column_depth_m: f64,
    pub elastic_modulus_pa: f64,
    /// "Fix-Fix", "Fix-Pin", "Pin-Fix" or "Pin-Pin"
    pub support: String,
}

impl Default for StoryDef {
    fn default() -> Self {
        Self {
            mass_kg: 10.0e3,
            height_m: 3.0,
            column_width_m: 0.35,
            column_depth_m: 0.35,
            elastic_modulus_pa: 25.0e9,
            support: "Fix-Fix".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TlcdDef {
    pub diameter_m: f64,
    pub width_m: f64,
    pub water_height_m: f64,
    pub amount: usize,
    pub contraction_coefficient: f64,
}

impl Default for TlcdDef {
    fn default() -> Self {
        Self {
            diameter_m: 0.6,
            width_m: 20.0,
            water_height_m: 1.0,
            amount: 1,
            contraction_coefficient: td_structure::tlcd::DEFAULT_CONTRACTION_COEFFICIENT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ExcitationDef {
    #[serde(rename = "Sine Wave")]
    SineWave {
        frequency_rad_s: f64,
        amplitude_mps2: f64,
        excitation_duration_s: f64,
        analysis_duration_s: f64,
    },
    #[serde(rename = "General Excitation")]
    General {
        time_s: Vec<f64>,
        acceleration_mps2: Vec<f64>,
        analysis_duration_s: f64,
    },
}

impl ExcitationDef {
    pub fn analysis_duration_s(&self) -> f64 {
        match self {
            Self::SineWave {
                analysis_duration_s,
                ..
            }
            | Self::General {
                analysis_duration_s,
                ..
            } => *analysis_duration_s,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigurationDef {
    /// Integration method by name, e.g. "Average Acceleration Method"
    pub method: String,
    pub time_step_s: f64,
    pub initial_displacement_m: f64,
    pub initial_velocity_mps: f64,
    pub nonlinear_analysis: bool,
    pub damping_ratio: f64,
    pub fluid: FluidDef,
}

impl Default for ConfigurationDef {
    fn default() -> Self {
        Self {
            method: td_solver::IntegrationMethod::default().name().to_string(),
            time_step_s: 1e-3,
            initial_displacement_m: 0.0,
            initial_velocity_mps: 0.0,
            nonlinear_analysis: false,
            damping_ratio: 0.02,
            fluid: FluidDef::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FluidDef {
    pub specific_mass_kgpm3: f64,
    pub kinematic_viscosity_m2ps: f64,
    pub gravity_mps2: f64,
    pub pipe_roughness_m: f64,
}

impl Default for FluidDef {
    fn default() -> Self {
        Self {
            specific_mass_kgpm3: 998.2,
            kinematic_viscosity_m2ps: 1.003e-6,
            gravity_mps2: td_core::units::constants::G0_MPS2,
            pipe_roughness_m: 1.5e-6,
        }
    }
}
