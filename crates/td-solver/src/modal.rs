//! Undamped modal analysis of an assembled system.
//!
//! Solves `K·φ = λ·M·φ` through the Cholesky factor of `M`:
//! `K* = L⁻¹·K·L⁻ᵀ` is symmetric, its eigenvectors `ψ` map back with
//! `φ = L⁻ᵀ·ψ`. Modes are returned ascending and scaled so that each
//! column's first entry is 1.

use nalgebra::{DMatrix, SymmetricEigen};

use crate::error::{SolverError, SolverResult};

const ZERO_ENTRY_TOL: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq)]
pub struct ModeShapes {
    /// Eigenvalues `ω²`, ascending (rad²/s²).
    pub eigenvalues: Vec<f64>,
    /// One mode per column.
    pub modes: DMatrix<f64>,
}

impl ModeShapes {
    /// Circular natural frequencies (rad/s).
    pub fn natural_frequencies(&self) -> Vec<f64> {
        self.eigenvalues.iter().map(|l| l.max(0.0).sqrt()).collect()
    }

    /// Natural periods (s).
    pub fn periods(&self) -> Vec<f64> {
        self.natural_frequencies()
            .into_iter()
            .map(|w| 2.0 * std::f64::consts::PI / w)
            .collect()
    }
}

/// Modal mass, stiffness and force: `ΦᵀMΦ`, `ΦᵀKΦ`, `ΦᵀF`.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalMatrices {
    pub mass: DMatrix<f64>,
    pub stiffness: DMatrix<f64>,
    pub force: DMatrix<f64>,
}

pub fn mode_shapes(stiffness: &DMatrix<f64>, mass: &DMatrix<f64>) -> SolverResult<ModeShapes> {
    if !stiffness.is_square() || stiffness.shape() != mass.shape() {
        return Err(SolverError::InvalidArg {
            what: "stiffness and mass must be square and of equal size",
        });
    }
    let chol = mass.clone().cholesky().ok_or(SolverError::Singular {
        what: "mass matrix (not positive definite)",
    })?;
    let l_inv = chol.l().try_inverse().ok_or(SolverError::Singular {
        what: "Cholesky factor of the mass matrix",
    })?;
    let l_inv_t = l_inv.transpose();

    let k_star = &l_inv * stiffness * &l_inv_t;
    let k_star = (&k_star + k_star.transpose()) * 0.5;
    let eigen = SymmetricEigen::new(k_star);

    let mut order: Vec<usize> = (0..eigen.eigenvalues.len()).collect();
    order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));

    let n = order.len();
    let mut modes = DMatrix::zeros(n, n);
    let mut eigenvalues = Vec::with_capacity(n);
    for (col, &src) in order.iter().enumerate() {
        let phi = &l_inv_t * eigen.eigenvectors.column(src);
        modes.set_column(col, &phi);
        eigenvalues.push(eigen.eigenvalues[src]);
    }

    Ok(ModeShapes {
        eigenvalues,
        modes: normalize_first_entry(&modes)?,
    })
}

/// Scale every column so its first entry equals 1.
pub fn normalize_first_entry(modes: &DMatrix<f64>) -> SolverResult<DMatrix<f64>> {
    let mut out = modes.clone();
    for mut col in out.column_iter_mut() {
        let first = col[0];
        if first.abs() < ZERO_ENTRY_TOL {
            return Err(SolverError::InvalidArg {
                what: "mode has a zero first entry and cannot be normalized",
            });
        }
        col /= first;
    }
    Ok(out)
}

pub fn modal_matrices(
    modes: &DMatrix<f64>,
    mass: &DMatrix<f64>,
    stiffness: &DMatrix<f64>,
    force: &DMatrix<f64>,
) -> ModalMatrices {
    let phi_t = modes.transpose();
    ModalMatrices {
        mass: &phi_t * mass * modes,
        stiffness: &phi_t * stiffness * modes,
        force: &phi_t * force,
    }
}
