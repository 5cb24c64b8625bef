//! Assembly of the coupled equations of motion `M·ẍ + C·ẋ + K·x = F(t)`.
//!
//! Structural DOFs follow the shear-building stencil. Each damper column is
//! its own DOF, coupled to the top story through the mass matrix only:
//!
//! ```text
//! M[top, top]  += amount · m_d
//! M[d, d]       = m_d
//! M[top, d]     = M[d, top] = (b/L) · m_d
//! ```

use nalgebra::DMatrix;
use tracing::debug;

use crate::building::{Building, DofLayout};
use crate::error::SolverResult;
use td_excitation::{Excitation, TimeGrid};

/// Mass matrix.
pub fn assemble_mass(building: &Building) -> DMatrix<f64> {
    let layout = building.layout();
    let mut mass = DMatrix::zeros(layout.dof_count(), layout.dof_count());
    for (i, story) in building.stories().iter().enumerate() {
        mass[(i, i)] = story.mass();
    }
    if let Some(tlcd) = building.tlcd() {
        let top = layout.top_story();
        mass[(top, top)] += tlcd.total_mass();
        for d in layout.damper_dofs() {
            mass[(d, d)] = tlcd.mass();
            mass[(top, d)] = tlcd.coupling_mass();
            mass[(d, top)] = tlcd.coupling_mass();
        }
    }
    mass
}

/// Linear damping matrix for a target structural damping ratio.
pub fn assemble_damping(building: &Building, damping_ratio: f64) -> DMatrix<f64> {
    let layout = building.layout();
    let mut damping = DMatrix::zeros(layout.dof_count(), layout.dof_count());
    for (i, story) in building.stories().iter().enumerate() {
        damping[(i, i)] = story.damping_coefficient(damping_ratio, building.hosted_mass(i));
    }
    if let Some(tlcd) = building.tlcd() {
        for d in layout.damper_dofs() {
            damping[(d, d)] = tlcd.damping_coefficient();
        }
    }
    damping
}

/// Stiffness matrix.
pub fn assemble_stiffness(building: &Building) -> DMatrix<f64> {
    let layout = building.layout();
    let mut stiffness = DMatrix::zeros(layout.dof_count(), layout.dof_count());
    let stories = building.stories();
    for (i, story) in stories.iter().enumerate() {
        stiffness[(i, i)] = story.stiffness();
    }
    for i in 1..stories.len() {
        let k = stories[i].stiffness();
        stiffness[(i - 1, i - 1)] += k;
        stiffness[(i - 1, i)] = -k;
        stiffness[(i, i - 1)] = -k;
    }
    if let Some(tlcd) = building.tlcd() {
        for d in layout.damper_dofs() {
            stiffness[(d, d)] = tlcd.stiffness();
        }
    }
    stiffness
}

/// Force history, one column per grid step.
///
/// Story rows carry their diagonal mass times the structural ground
/// acceleration. Damper rows carry their coupling mass `M[d, top]` times the
/// damper ground acceleration.
pub fn assemble_force(
    excitation: &Excitation,
    mass: &DMatrix<f64>,
    layout: DofLayout,
    grid: &TimeGrid,
) -> SolverResult<DMatrix<f64>> {
    let ground = excitation.ground_acceleration(grid)?;
    let mut force = DMatrix::zeros(layout.dof_count(), grid.step_count());
    for i in 0..layout.stories {
        let m = mass[(i, i)];
        for (j, a) in ground.structure.iter().enumerate() {
            force[(i, j)] = m * a;
        }
    }
    if layout.has_damper() {
        let top = layout.top_story();
        for d in layout.damper_dofs() {
            let m = mass[(d, top)];
            for (j, a) in ground.damper.iter().enumerate() {
                force[(d, j)] = m * a;
            }
        }
    }
    Ok(force)
}

/// Fully assembled system for one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemMatrices {
    pub layout: DofLayout,
    pub grid: TimeGrid,
    pub mass: DMatrix<f64>,
    pub damping: DMatrix<f64>,
    pub stiffness: DMatrix<f64>,
    pub force: DMatrix<f64>,
}

impl SystemMatrices {
    pub fn assemble(
        building: &Building,
        excitation: &Excitation,
        damping_ratio: f64,
        dt: f64,
    ) -> SolverResult<Self> {
        let layout = building.layout();
        let grid = excitation.grid(dt)?;
        let mass = assemble_mass(building);
        let damping = assemble_damping(building, damping_ratio);
        let stiffness = assemble_stiffness(building);
        let force = assemble_force(excitation, &mass, layout, &grid)?;
        debug!(
            dofs = layout.dof_count(),
            dampers = layout.dampers,
            steps = grid.step_count(),
            excitation = excitation.kind(),
            "assembled system matrices"
        );
        Ok(Self {
            layout,
            grid,
            mass,
            damping,
            stiffness,
            force,
        })
    }
}
