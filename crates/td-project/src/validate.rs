//! Case file validation.
//!
//! Checks everything that can be decided from the file alone, before any
//! model is built: version, names of enumerated options, and the sign and
//! finiteness of every physical value.

use crate::schema::{CaseFile, ConfigurationDef, ExcitationDef, FluidDef, StoryDef, TlcdDef};
use td_solver::IntegrationMethod;
use td_structure::SupportCondition;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown {field}: {name}")]
    UnknownName { field: String, name: String },

    #[error("Unsupported feature: {feature} - {reason}")]
    Unsupported { feature: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case(case: &CaseFile) -> Result<(), ValidationError> {
    if case.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    if case.stories.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "stories".to_string(),
            value: "[]".to_string(),
            reason: "at least one story is required".to_string(),
        });
    }
    for (i, story) in case.stories.iter().enumerate() {
        validate_story(i + 1, story)?;
    }
    if let Some(tlcd) = &case.tlcd {
        validate_tlcd(tlcd)?;
    }
    validate_excitation(&case.excitation)?;
    validate_configuration(&case.configuration)?;
    Ok(())
}

fn positive(field: impl Into<String>, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: "must be positive".to_string(),
        })
    }
}

fn non_negative(field: impl Into<String>, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: "must be non-negative".to_string(),
        })
    }
}

fn finite(field: impl Into<String>, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        })
    }
}

fn validate_story(floor: usize, story: &StoryDef) -> Result<(), ValidationError> {
    positive(format!("stories[{floor}].mass_kg"), story.mass_kg)?;
    positive(format!("stories[{floor}].height_m"), story.height_m)?;
    positive(format!("stories[{floor}].column_width_m"), story.column_width_m)?;
    positive(format!("stories[{floor}].column_depth_m"), story.column_depth_m)?;
    positive(
        format!("stories[{floor}].elastic_modulus_pa"),
        story.elastic_modulus_pa,
    )?;
    story
        .support
        .parse::<SupportCondition>()
        .map_err(|_| ValidationError::UnknownName {
            field: format!("stories[{floor}].support"),
            name: story.support.clone(),
        })?;
    Ok(())
}

fn validate_tlcd(tlcd: &TlcdDef) -> Result<(), ValidationError> {
    positive("tlcd.diameter_m", tlcd.diameter_m)?;
    positive("tlcd.width_m", tlcd.width_m)?;
    positive("tlcd.water_height_m", tlcd.water_height_m)?;
    non_negative("tlcd.contraction_coefficient", tlcd.contraction_coefficient)?;
    if tlcd.amount == 0 {
        return Err(ValidationError::InvalidValue {
            field: "tlcd.amount".to_string(),
            value: "0".to_string(),
            reason: "at least one column is required".to_string(),
        });
    }
    Ok(())
}

fn validate_excitation(excitation: &ExcitationDef) -> Result<(), ValidationError> {
    match excitation {
        ExcitationDef::SineWave {
            frequency_rad_s,
            amplitude_mps2,
            excitation_duration_s,
            analysis_duration_s,
        } => {
            finite("excitation.frequency_rad_s", *frequency_rad_s)?;
            finite("excitation.amplitude_mps2", *amplitude_mps2)?;
            non_negative("excitation.excitation_duration_s", *excitation_duration_s)?;
            positive("excitation.analysis_duration_s", *analysis_duration_s)?;
        }
        ExcitationDef::General {
            time_s,
            acceleration_mps2,
            analysis_duration_s,
        } => {
            if time_s.len() != acceleration_mps2.len() || time_s.is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: "excitation.time_s".to_string(),
                    value: format!("{} samples", time_s.len()),
                    reason: format!(
                        "needs at least one sample and one acceleration per time ({} given)",
                        acceleration_mps2.len()
                    ),
                });
            }
            if time_s.iter().any(|t| !t.is_finite()) || time_s.windows(2).any(|w| w[1] <= w[0]) {
                return Err(ValidationError::InvalidValue {
                    field: "excitation.time_s".to_string(),
                    value: format!("{time_s:?}"),
                    reason: "times must be finite and strictly increasing".to_string(),
                });
            }
            positive("excitation.analysis_duration_s", *analysis_duration_s)?;
        }
    }
    Ok(())
}

fn validate_fluid(fluid: &FluidDef) -> Result<(), ValidationError> {
    positive("configuration.fluid.specific_mass_kgpm3", fluid.specific_mass_kgpm3)?;
    positive(
        "configuration.fluid.kinematic_viscosity_m2ps",
        fluid.kinematic_viscosity_m2ps,
    )?;
    positive("configuration.fluid.gravity_mps2", fluid.gravity_mps2)?;
    non_negative("configuration.fluid.pipe_roughness_m", fluid.pipe_roughness_m)
}

fn validate_configuration(config: &ConfigurationDef) -> Result<(), ValidationError> {
    if config.method.trim() == td_solver::MODAL_SUPERPOSITION {
        return Err(ValidationError::Unsupported {
            feature: config.method.clone(),
            reason: "modal superposition solving is not implemented".to_string(),
        });
    }
    config
        .method
        .parse::<IntegrationMethod>()
        .map_err(|_| ValidationError::UnknownName {
            field: "configuration.method".to_string(),
            name: config.method.clone(),
        })?;
    positive("configuration.time_step_s", config.time_step_s)?;
    finite("configuration.initial_displacement_m", config.initial_displacement_m)?;
    finite("configuration.initial_velocity_mps", config.initial_velocity_mps)?;
    non_negative("configuration.damping_ratio", config.damping_ratio)?;
    validate_fluid(&config.fluid)
}
