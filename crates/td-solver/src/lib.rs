//! td-solver: time-domain response of a shear building fitted with a tuned
//! liquid column damper.
//!
//! Provides:
//! - assembly of mass, damping, stiffness and force matrices
//! - central difference, Newmark (average/linear acceleration) and RK4 schemes
//! - the velocity-dependent damper damping update
//! - undamped modal analysis and a closed-form single-DOF oracle
//! - parallel sweeps over independent cases

pub mod analysis;
pub mod analytic;
pub mod assembly;
pub mod building;
pub mod central_difference;
pub mod config;
pub mod damping;
pub mod error;
pub mod integrator;
pub mod method;
pub mod modal;
pub mod newmark;
pub mod response;
pub mod runge_kutta;
pub mod sweep;

pub use analysis::{run_analysis, run_system};
pub use analytic::{HarmonicOscillator, sdof_harmonic_response};
pub use assembly::{
    SystemMatrices, assemble_damping, assemble_force, assemble_mass, assemble_stiffness,
};
pub use building::{Building, DofLayout};
pub use central_difference::CentralDifference;
pub use config::AnalysisConfig;
pub use damping::NonlinearDamping;
pub use error::{SolverError, SolverResult};
pub use integrator::{InitialConditions, MotionEquation, ResponseHistory, TimeIntegrator};
pub use method::{IntegrationMethod, MODAL_SUPERPOSITION, NewmarkParameters};
pub use modal::{ModalMatrices, ModeShapes, modal_matrices, mode_shapes, normalize_first_entry};
pub use newmark::Newmark;
pub use response::{DofPeak, DynamicResponse, ResponseKind};
pub use runge_kutta::RungeKutta4;
pub use sweep::{SweepCase, SweepOutcome, method_cases, run_sweep, run_sweep_sequential};
