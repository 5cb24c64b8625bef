//! Turn a validated case file into solver inputs.

use crate::schema::{CaseFile, ConfigurationDef, ExcitationDef, FluidDef, StoryDef, TlcdDef};
use crate::{ProjectResult, validate_case};
use td_core::units::{kg, kgpm3, m, m2ps, mps2, pa};
use td_excitation::{Excitation, GeneralRecord, SineWave};
use td_solver::{AnalysisConfig, Building, DynamicResponse, SolverResult, run_analysis};
use td_structure::{FluidProperties, Story, SupportCondition, Tlcd};

/// Solver inputs of one case.
#[derive(Debug, Clone)]
pub struct CompiledCase {
    pub name: String,
    pub building: Building,
    pub excitation: Excitation,
    pub config: AnalysisConfig,
}

impl CompiledCase {
    pub fn run(&self) -> SolverResult<DynamicResponse> {
        run_analysis(&self.building, &self.excitation, &self.config)
    }
}

pub fn compile_case(case: &CaseFile) -> ProjectResult<CompiledCase> {
    validate_case(case)?;
    let config = compile_configuration(&case.configuration)?;
    let stories = case
        .stories
        .iter()
        .map(compile_story)
        .collect::<ProjectResult<Vec<_>>>()?;
    let tlcd = case
        .tlcd
        .as_ref()
        .map(|t| compile_tlcd(t, config.fluid))
        .transpose()?;
    Ok(CompiledCase {
        name: case.name.clone(),
        building: Building::new(stories, tlcd)?,
        excitation: compile_excitation(&case.excitation)?,
        config,
    })
}

fn compile_story(story: &StoryDef) -> ProjectResult<Story> {
    let support: SupportCondition = story.support.parse()?;
    Ok(Story::new(
        kg(story.mass_kg),
        m(story.height_m),
        m(story.column_width_m),
        m(story.column_depth_m),
        pa(story.elastic_modulus_pa),
        support,
    )?)
}

fn compile_tlcd(tlcd: &TlcdDef, fluid: FluidProperties) -> ProjectResult<Tlcd> {
    Ok(Tlcd::new(
        m(tlcd.diameter_m),
        m(tlcd.width_m),
        m(tlcd.water_height_m),
        tlcd.amount,
        fluid,
    )?
    .with_contraction_coefficient(tlcd.contraction_coefficient)?)
}

fn compile_fluid(fluid: &FluidDef) -> ProjectResult<FluidProperties> {
    Ok(FluidProperties::new(
        kgpm3(fluid.specific_mass_kgpm3),
        m2ps(fluid.kinematic_viscosity_m2ps),
        mps2(fluid.gravity_mps2),
        m(fluid.pipe_roughness_m),
    )?)
}

fn compile_configuration(config: &ConfigurationDef) -> ProjectResult<AnalysisConfig> {
    Ok(AnalysisConfig {
        method: config.method.parse()?,
        time_step: config.time_step_s,
        initial_displacement: config.initial_displacement_m,
        initial_velocity: config.initial_velocity_mps,
        nonlinear_analysis: config.nonlinear_analysis,
        damping_ratio: config.damping_ratio,
        fluid: compile_fluid(&config.fluid)?,
    })
}

fn compile_excitation(excitation: &ExcitationDef) -> ProjectResult<Excitation> {
    Ok(match excitation {
        ExcitationDef::SineWave {
            frequency_rad_s,
            amplitude_mps2,
            excitation_duration_s,
            analysis_duration_s,
        } => SineWave::new(
            *frequency_rad_s,
            *amplitude_mps2,
            *excitation_duration_s,
            *analysis_duration_s,
        )?
        .into(),
        ExcitationDef::General {
            time_s,
            acceleration_mps2,
            analysis_duration_s,
        } => GeneralRecord::new(time_s.clone(), acceleration_mps2.clone(), *analysis_duration_s)?
            .into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case() -> CaseFile {
        CaseFile {
            version: 1,
            name: "two stories".into(),
            stories: vec![
                StoryDef::default(),
                StoryDef {
                    support: "Pin-Pin".into(),
                    ..StoryDef::default()
                },
            ],
            tlcd: Some(TlcdDef {
                amount: 2,
                ..TlcdDef::default()
            }),
            excitation: ExcitationDef::SineWave {
                frequency_rad_s: 5.0,
                amplitude_mps2: 1.0,
                excitation_duration_s: 0.5,
                analysis_duration_s: 1.0,
            },
            configuration: ConfigurationDef {
                method: "Runge-Kutta Method".into(),
                time_step_s: 0.01,
                ..ConfigurationDef::default()
            },
        }
    }

    #[test]
    fn compiles_building_and_configuration() {
        let compiled = compile_case(&case()).unwrap();
        assert_eq!(compiled.building.layout().dof_count(), 4);
        assert_eq!(
            compiled.building.stories()[1].support(),
            SupportCondition::PinPin
        );
        assert_eq!(compiled.config.method, td_solver::IntegrationMethod::RungeKutta);
        assert_eq!(compiled.excitation.kind(), "Sine Wave");
        let tlcd = compiled.building.tlcd().unwrap();
        assert_eq!(tlcd.contraction_coefficient(), 1.5);
        assert_eq!(tlcd.fluid(), &FluidProperties::default());
    }

    #[test]
    fn compiled_case_runs() {
        let response = compile_case(&case()).unwrap().run().unwrap();
        assert_eq!(response.step_count(), 101);
        assert_eq!(response.dof_count(), 4);
    }

    #[test]
    fn invalid_case_fails_before_compilation() {
        let mut c = case();
        c.stories.clear();
        assert!(matches!(
            compile_case(&c),
            Err(crate::ProjectError::Validation(_))
        ));
    }
}
