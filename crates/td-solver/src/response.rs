//! Results of a dynamic analysis.

use nalgebra::DMatrix;

use crate::building::DofLayout;
use crate::method::IntegrationMethod;

/// Quantity recorded per DOF and step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    Displacement,
    Velocity,
    Acceleration,
    Force,
}

/// Largest absolute value of each quantity on one DOF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DofPeak {
    pub dof: usize,
    pub displacement: f64,
    pub velocity: f64,
    pub acceleration: f64,
}

/// Time histories of one run. Every matrix is `dof_count × step_count`.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicResponse {
    pub method: IntegrationMethod,
    pub layout: DofLayout,
    pub time: Vec<f64>,
    pub displacement: DMatrix<f64>,
    pub velocity: DMatrix<f64>,
    pub acceleration: DMatrix<f64>,
    pub force: DMatrix<f64>,
    /// Liquid speed that drove the damper update at each step (nonlinear runs only).
    pub damper_velocity: Option<Vec<f64>>,
}

impl DynamicResponse {
    pub fn dof_count(&self) -> usize {
        self.displacement.nrows()
    }

    pub fn step_count(&self) -> usize {
        self.time.len()
    }

    pub fn matrix(&self, kind: ResponseKind) -> &DMatrix<f64> {
        match kind {
            ResponseKind::Displacement => &self.displacement,
            ResponseKind::Velocity => &self.velocity,
            ResponseKind::Acceleration => &self.acceleration,
            ResponseKind::Force => &self.force,
        }
    }

    /// History of one DOF, or `None` if `dof` is out of range.
    pub fn series(&self, kind: ResponseKind, dof: usize) -> Option<Vec<f64>> {
        let m = self.matrix(kind);
        (dof < m.nrows()).then(|| m.row(dof).iter().copied().collect())
    }

    pub fn peak(&self, kind: ResponseKind, dof: usize) -> Option<f64> {
        let m = self.matrix(kind);
        (dof < m.nrows()).then(|| m.row(dof).iter().fold(0.0_f64, |acc, v| acc.max(v.abs())))
    }

    pub fn peaks(&self) -> Vec<DofPeak> {
        (0..self.dof_count())
            .map(|dof| DofPeak {
                dof,
                displacement: self.peak(ResponseKind::Displacement, dof).unwrap_or_default(),
                velocity: self.peak(ResponseKind::Velocity, dof).unwrap_or_default(),
                acceleration: self.peak(ResponseKind::Acceleration, dof).unwrap_or_default(),
            })
            .collect()
    }
}
