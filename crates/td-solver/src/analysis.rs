//! Analysis runner: assemble, integrate, package the response.

use tracing::{info, warn};

use crate::assembly::SystemMatrices;
use crate::building::Building;
use crate::config::AnalysisConfig;
use crate::damping::NonlinearDamping;
use crate::error::SolverResult;
use crate::integrator::{InitialConditions, MotionEquation};
use crate::response::DynamicResponse;
use td_excitation::Excitation;
use td_structure::Tlcd;

/// Run one dynamic analysis of `building` under `excitation`.
///
/// The configured fluid replaces the damper's own liquid constants.
pub fn run_analysis(
    building: &Building,
    excitation: &Excitation,
    config: &AnalysisConfig,
) -> SolverResult<DynamicResponse> {
    config.validate()?;
    let tlcd = building
        .tlcd()
        .map(|t| t.clone().with_fluid(config.fluid))
        .transpose()?;
    let building = Building::new(building.stories().to_vec(), tlcd)?;
    let system = SystemMatrices::assemble(
        &building,
        excitation,
        config.damping_ratio,
        config.time_step,
    )?;
    run_system(&system, building.tlcd(), config)
}

/// Integrate an already assembled system.
pub fn run_system(
    system: &SystemMatrices,
    tlcd: Option<&Tlcd>,
    config: &AnalysisConfig,
) -> SolverResult<DynamicResponse> {
    let layout = system.layout;
    let steps = system.grid.step_count();
    info!(
        method = %config.method,
        dofs = layout.dof_count(),
        steps,
        dt = config.time_step,
        nonlinear = config.nonlinear_analysis,
        "starting dynamic analysis"
    );

    let mut nonlinear = match (config.nonlinear_analysis, tlcd) {
        (true, Some(tlcd)) if layout.has_damper() => {
            Some(NonlinearDamping::new(tlcd.clone(), layout, steps))
        }
        (true, _) => {
            warn!("nonlinear analysis requested without a damper; running linear");
            None
        }
        (false, _) => None,
    };

    let initial = InitialConditions::uniform(
        layout.dof_count(),
        config.initial_displacement,
        config.initial_velocity,
    );
    let equation = MotionEquation::from_system(system);
    let history = config
        .method
        .integrator()
        .integrate(&equation, &initial, nonlinear.as_mut())?;

    info!(method = %config.method, steps, "dynamic analysis finished");
    Ok(DynamicResponse {
        method: config.method,
        layout,
        time: system.grid.times(),
        displacement: history.displacement,
        velocity: history.velocity,
        acceleration: history.acceleration,
        force: system.force.clone(),
        damper_velocity: nonlinear.map(NonlinearDamping::into_history),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::IntegrationMethod;
    use td_core::units::m;
    use td_excitation::SineWave;
    use td_structure::{FluidProperties, Story};

    fn building(with_tlcd: bool) -> Building {
        let tlcd = with_tlcd.then(|| {
            Tlcd::new(m(0.3), m(4.0), m(0.5), 2, FluidProperties::default()).unwrap()
        });
        Building::new(vec![Story::default(); 2], tlcd).unwrap()
    }

    fn sine() -> Excitation {
        SineWave::new(5.0, 1.0, 1.0, 2.0).unwrap().into()
    }

    #[test]
    fn response_shapes() {
        let cfg = AnalysisConfig {
            time_step: 0.01,
            ..Default::default()
        };
        let r = run_analysis(&building(true), &sine(), &cfg).unwrap();
        assert_eq!(r.dof_count(), 4);
        assert_eq!(r.step_count(), 201);
        assert_eq!(r.force.shape(), (4, 201));
        assert!(r.damper_velocity.is_none());
    }

    #[test]
    fn nonlinear_runs_record_damper_velocity() {
        for method in IntegrationMethod::ALL {
            let cfg = AnalysisConfig {
                method,
                time_step: 0.01,
                nonlinear_analysis: true,
                ..Default::default()
            };
            let r = run_analysis(&building(true), &sine(), &cfg).unwrap();
            let v = r.damper_velocity.unwrap();
            assert_eq!(v.len(), 201);
            assert!(v.iter().all(|s| *s >= 0.0));
            assert!(v.iter().any(|s| *s > 0.0), "{method}");
        }
    }

    #[test]
    fn nonlinear_without_damper_is_linear() {
        let linear = AnalysisConfig {
            time_step: 0.01,
            ..Default::default()
        };
        let nonlinear = AnalysisConfig {
            nonlinear_analysis: true,
            ..linear.clone()
        };
        let a = run_analysis(&building(false), &sine(), &linear).unwrap();
        let b = run_analysis(&building(false), &sine(), &nonlinear).unwrap();
        assert_eq!(a.displacement, b.displacement);
        assert!(b.damper_velocity.is_none());
    }

    #[test]
    fn configured_fluid_reaches_the_damper() {
        let cfg = AnalysisConfig {
            time_step: 0.01,
            ..Default::default()
        };
        let heavy = AnalysisConfig {
            fluid: FluidProperties {
                specific_mass: td_core::units::kgpm3(1500.0),
                ..FluidProperties::default()
            },
            ..cfg.clone()
        };
        let a = run_analysis(&building(true), &sine(), &cfg).unwrap();
        let b = run_analysis(&building(true), &sine(), &heavy).unwrap();
        assert!(b.force[(3, 50)].abs() > a.force[(3, 50)].abs());
    }
}
