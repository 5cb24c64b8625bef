//! Regression fixtures for force assembly and the modal transform.

use nalgebra::{DMatrix, DVector};
use td_core::numeric::relative_norm_error;
use td_excitation::{Excitation, SineWave};
use td_solver::{DofLayout, assemble_force, modal_matrices, mode_shapes};

fn flatten(m: &DMatrix<f64>) -> Vec<f64> {
    m.iter().copied().collect()
}

#[test]
fn force_matrix_for_two_dof_sine() {
    let excitation: Excitation = SineWave::new(20.0, 5.0, 1.0, 1.0).unwrap().into();
    let grid = excitation.grid(0.5).unwrap();
    let mass = DMatrix::identity(2, 2);
    let layout = DofLayout {
        stories: 2,
        dampers: 0,
    };
    let force = assemble_force(&excitation, &mass, layout, &grid).unwrap();

    let row = [0.0, -2.720105554446849, 4.564726253638138];
    let reference = DMatrix::from_row_slice(2, 3, &[row, row].concat());
    assert_eq!(force.shape(), (2, 3));
    let err = relative_norm_error(&flatten(&force), &flatten(&reference)).unwrap();
    assert!(err <= 1e-3, "relative norm error {err}");
}

#[test]
fn force_matrix_scales_rows_and_cuts_story_window() {
    // Stories stop being driven after 0.5 s; the damper row runs the full second.
    let excitation: Excitation = SineWave::new(20.0, 5.0, 0.5, 1.0).unwrap().into();
    let grid = excitation.grid(0.5).unwrap();
    let mass = DMatrix::from_row_slice(3, 3, &[2.0, 0.0, 0.0, 0.0, 3.0, 0.4, 0.0, 0.4, 0.8]);
    let layout = DofLayout {
        stories: 2,
        dampers: 1,
    };
    let force = assemble_force(&excitation, &mass, layout, &grid).unwrap();

    let lower = [0.0, -5.440211108893697, 0.0];
    let upper = [0.0, -8.160316663340547, 0.0];
    let damper = [0.0, -1.0880422217787395, 1.8258905014552553];
    let reference = DMatrix::from_row_slice(3, 3, &[lower, upper, damper].concat());
    assert_eq!(force.shape(), (3, 3));
    let err = relative_norm_error(&flatten(&force), &flatten(&reference)).unwrap();
    assert!(err <= 1e-12, "relative norm error {err}");
}

fn three_dof() -> (DMatrix<f64>, DMatrix<f64>, DMatrix<f64>) {
    let mass = DMatrix::from_diagonal(&DVector::from_vec(vec![1.0, 1.5, 2.0]));
    let stiffness =
        DMatrix::from_row_slice(3, 3, &[1.0, -1.0, 0.0, -1.0, 3.0, -2.0, 0.0, -2.0, 5.0]) * 600.0;
    let force = DMatrix::from_column_slice(3, 1, &[1.0, 2.0, 2.0]) * 500.0;
    (mass, stiffness, force)
}

fn reference_modes() -> DMatrix<f64> {
    DMatrix::from_column_slice(
        3,
        3,
        &[
            1.0,
            0.6485352721816375,
            0.30184995358401095,
            1.0,
            -0.6065990924638334,
            -0.678977475114415,
            1.0,
            -2.5419361797178044,
            2.4396275215304035,
        ],
    )
}

#[test]
fn modal_transform_of_three_dof_system() {
    let (mass, stiffness, force) = three_dof();
    let modal = modal_matrices(&reference_modes(), &mass, &stiffness, &force);

    let mi = DMatrix::from_diagonal(&DVector::from_vec(vec![
        1.8131237878529052,
        2.4739645118924116,
        22.59572420025468,
    ]));
    let ki = DMatrix::from_diagonal(&DVector::from_vec(vec![
        382.34943515923203,
        2384.8014837564474,
        48019.56783108431,
    ]));
    let fi = DMatrix::from_column_slice(
        3,
        1,
        &[1450.3852257656486, -785.5765675782484, 397.69134181259915],
    );

    for (actual, expected, what) in [
        (&modal.mass, &mi, "modal mass"),
        (&modal.stiffness, &ki, "modal stiffness"),
        (&modal.force, &fi, "modal force"),
    ] {
        let err = relative_norm_error(&flatten(actual), &flatten(expected)).unwrap();
        assert!(err <= 1e-3, "{what}: relative norm error {err}");
    }
}

#[test]
fn computed_modes_match_reference_modes() {
    let (mass, stiffness, _) = three_dof();
    let shapes = mode_shapes(&stiffness, &mass).unwrap();
    let err = relative_norm_error(&flatten(&shapes.modes), &flatten(&reference_modes())).unwrap();
    assert!(err <= 1e-6, "relative norm error {err}");
    let expected = [210.8788366910175, 963.9594554783, 2125.1617078306826];
    for (a, b) in shapes.eigenvalues.iter().zip(expected) {
        assert!(((a - b) / b).abs() < 1e-9);
    }
}
