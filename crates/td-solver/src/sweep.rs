//! Independent analyses run in parallel.
//!
//! Each case owns its building, excitation and configuration, so cases never
//! share mutable state and the parallel result equals the sequential one.

use rayon::prelude::*;
use tracing::debug;

use crate::analysis::run_analysis;
use crate::building::Building;
use crate::config::AnalysisConfig;
use crate::error::SolverResult;
use crate::response::DynamicResponse;
use td_excitation::Excitation;

#[derive(Debug, Clone)]
pub struct SweepCase {
    pub label: String,
    pub building: Building,
    pub excitation: Excitation,
    pub config: AnalysisConfig,
}

#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub label: String,
    pub result: SolverResult<DynamicResponse>,
}

fn run_case(case: &SweepCase) -> SweepOutcome {
    debug!(case = %case.label, method = %case.config.method, "running sweep case");
    SweepOutcome {
        label: case.label.clone(),
        result: run_analysis(&case.building, &case.excitation, &case.config),
    }
}

/// Run every case on the rayon pool. Outcomes keep the input order.
pub fn run_sweep(cases: &[SweepCase]) -> Vec<SweepOutcome> {
    debug!(cases = cases.len(), "starting parallel sweep");
    cases.par_iter().map(run_case).collect()
}

/// Run every case on the calling thread.
pub fn run_sweep_sequential(cases: &[SweepCase]) -> Vec<SweepOutcome> {
    cases.iter().map(run_case).collect()
}

/// One case per integration method, sharing building and excitation.
pub fn method_cases(
    building: &Building,
    excitation: &Excitation,
    base: &AnalysisConfig,
) -> Vec<SweepCase> {
    crate::method::IntegrationMethod::ALL
        .into_iter()
        .map(|method| SweepCase {
            label: method.name().to_string(),
            building: building.clone(),
            excitation: excitation.clone(),
            config: AnalysisConfig {
                method,
                ..base.clone()
            },
        })
        .collect()
}
