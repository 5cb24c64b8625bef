//! Whole-run properties: damper update, repeatability and boundaries.

use td_core::units::m;
use td_excitation::{Excitation, GeneralRecord, SineWave};
use td_solver::{
    AnalysisConfig, Building, DynamicResponse, IntegrationMethod, NonlinearDamping, SolverError,
    SystemMatrices, run_analysis,
};
use td_structure::{FluidProperties, Story, Tlcd};

fn tlcd() -> Tlcd {
    Tlcd::new(m(0.3), m(4.0), m(0.5), 2, FluidProperties::default()).unwrap()
}

fn building() -> Building {
    Building::new(vec![Story::default(); 3], Some(tlcd())).unwrap()
}

fn sine(duration: f64) -> Excitation {
    SineWave::new(6.0, 2.0, duration, duration).unwrap().into()
}

#[test]
fn damper_update_matches_tlcd_functions() {
    let building = building();
    let system = SystemMatrices::assemble(&building, &sine(1.0), 0.02, 0.01).unwrap();
    let t = tlcd();
    let mut damping = system.damping.clone();
    let mut nl = NonlinearDamping::new(t.clone(), system.layout, system.grid.step_count());

    for v in [0.05, -0.8, 1.7] {
        nl.update(3, v, &mut damping);
        let expected = t.damping_coefficient_constant() * t.damping_correction_factor(v)
            + t.contraction_damping(v);
        for d in system.layout.damper_dofs() {
            assert_eq!(damping[(d, d)], expected);
        }
        for s in 0..system.layout.stories {
            assert_eq!(damping[(s, s)], system.damping[(s, s)]);
        }
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    for method in IntegrationMethod::ALL {
        let config = AnalysisConfig {
            method,
            time_step: 0.005,
            nonlinear_analysis: true,
            initial_displacement: 0.001,
            ..Default::default()
        };
        let a = run_analysis(&building(), &sine(2.0), &config).unwrap();
        let b = run_analysis(&building(), &sine(2.0), &config).unwrap();
        assert_eq!(a, b, "{method}");
    }
}

#[test]
fn first_column_holds_initial_displacement() {
    for method in IntegrationMethod::ALL {
        let config = AnalysisConfig {
            method,
            time_step: 0.01,
            initial_displacement: 0.02,
            initial_velocity: 0.1,
            ..Default::default()
        };
        let r = run_analysis(&building(), &sine(1.0), &config).unwrap();
        for dof in 0..r.dof_count() {
            assert_eq!(r.displacement[(dof, 0)], 0.02, "{method}, dof {dof}");
        }
    }
}

#[test]
fn fifty_second_run_has_50001_steps() {
    let building = Building::new(vec![Story::default()], None).unwrap();
    let config = AnalysisConfig::default();
    let r = run_analysis(&building, &sine(50.0), &config).unwrap();
    assert_eq!(r.step_count(), 50_001);
    assert_eq!(r.displacement.ncols(), 50_001);
    assert!((r.time[50_000] - 50.0).abs() < 1e-9);
    assert!(r.acceleration.column(50_000).iter().all(|a| a.is_finite()));
}

#[test]
fn nonlinear_damper_response_differs_from_linear() {
    let linear = AnalysisConfig {
        time_step: 0.005,
        ..Default::default()
    };
    let nonlinear = AnalysisConfig {
        nonlinear_analysis: true,
        ..linear.clone()
    };
    let a = run_analysis(&building(), &sine(3.0), &linear).unwrap();
    let b = run_analysis(&building(), &sine(3.0), &nonlinear).unwrap();
    let last = a.dof_count() - 1;
    let row = |r: &DynamicResponse| {
        r.displacement
            .row(last)
            .iter()
            .copied()
            .collect::<Vec<_>>()
    };
    assert_ne!(row(&a), row(&b));
}

#[test]
fn record_starting_after_zero_aborts_the_run() {
    let record = GeneralRecord::new(vec![0.5, 1.0], vec![0.0, 1.0], 1.0).unwrap();
    let err = run_analysis(&building(), &record.into(), &AnalysisConfig::default()).unwrap_err();
    assert!(matches!(err, SolverError::Excitation(_)));
}

#[test]
fn general_record_drives_every_scheme() {
    let time: Vec<f64> = (0..=20).map(|i| i as f64 * 0.05).collect();
    let accel: Vec<f64> = time.iter().map(|t| (7.0 * t).sin()).collect();
    let excitation: Excitation = GeneralRecord::new(time, accel, 1.5).unwrap().into();
    for method in IntegrationMethod::ALL {
        let config = AnalysisConfig {
            method,
            time_step: 0.005,
            ..Default::default()
        };
        let r = run_analysis(&building(), &excitation, &config).unwrap();
        assert_eq!(r.step_count(), 301);
        assert!(r.displacement.iter().all(|x| x.is_finite()), "{method}");
    }
}

fn nonlinear_run(method: IntegrationMethod, dt: f64) -> DynamicResponse {
    let config = AnalysisConfig {
        method,
        time_step: dt,
        nonlinear_analysis: true,
        initial_velocity: -0.3,
        ..Default::default()
    };
    run_analysis(&building(), &sine(1.0), &config).unwrap()
}

fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= 1e-12 * expected.abs().max(1.0),
        "{what}: {actual} vs {expected}"
    );
}

#[test]
fn finite_difference_damper_speed_comes_from_displacement() {
    let dt = 0.01;
    let r = nonlinear_run(IntegrationMethod::FiniteDifference, dt);
    let speed = r.damper_velocity.as_ref().unwrap();
    let d = r.dof_count() - 1;
    assert_eq!(speed.len(), r.step_count());

    // The first two steps share the initial velocity.
    assert_eq!(speed[0], 0.3);
    assert_eq!(speed[1], 0.3);
    for i in 2..r.step_count() {
        let expected = ((r.displacement[(d, i)] - r.displacement[(d, i - 2)]) / (2.0 * dt)).abs();
        assert_close(speed[i], expected, &format!("step {i}"));
    }
}

#[test]
fn implicit_and_runge_kutta_damper_speed_comes_from_velocity() {
    for method in [
        IntegrationMethod::AverageAcceleration,
        IntegrationMethod::LinearAcceleration,
        IntegrationMethod::RungeKutta,
    ] {
        let r = nonlinear_run(method, 0.01);
        let speed = r.damper_velocity.as_ref().unwrap();
        let d = r.dof_count() - 1;
        assert_eq!(speed.len(), r.step_count());
        assert_eq!(speed[0], 0.3, "{method}");
        for (i, s) in speed.iter().enumerate() {
            assert_close(*s, r.velocity[(d, i)].abs(), &format!("{method}, step {i}"));
        }
    }
}
