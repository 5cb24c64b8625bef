//! Closed-form response of a damped single-DOF oscillator to a harmonic load.
//!
//! `m·ẍ + c·ẋ + k·x = p₀·sin(ω·t)` with `x(0) = x₀`, `ẋ(0) = v₀` and
//! `ζ < 1`:
//!
//! ```text
//! x(t) = e^(−ζωₙt)·(A·cos ω_d t + B·sin ω_d t) + C·sin ωt + D·cos ωt
//! ```

use crate::error::{SolverError, SolverResult};

/// Linear oscillator under `force_amplitude · sin(frequency · t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicOscillator {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    pub force_amplitude: f64,
    /// Load frequency (rad/s)
    pub frequency: f64,
}

impl HarmonicOscillator {
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * self.mass * self.natural_frequency())
    }

    /// Steady-state coefficients `(C, D)` of `sin ωt` and `cos ωt`.
    pub fn steady_state(&self) -> (f64, f64) {
        let r = self.frequency / self.natural_frequency();
        let zeta = self.damping_ratio();
        let static_deflection = self.force_amplitude / self.stiffness;
        let den = (1.0 - r * r).powi(2) + (2.0 * zeta * r).powi(2);
        (
            static_deflection * (1.0 - r * r) / den,
            static_deflection * (-2.0 * zeta * r) / den,
        )
    }
}

/// Displacement at each of `times` starting from `(x0, v0)`.
pub fn sdof_harmonic_response(
    oscillator: &HarmonicOscillator,
    x0: f64,
    v0: f64,
    times: &[f64],
) -> SolverResult<Vec<f64>> {
    if !(oscillator.mass > 0.0 && oscillator.stiffness > 0.0 && oscillator.damping >= 0.0) {
        return Err(SolverError::InvalidArg {
            what: "oscillator needs positive mass and stiffness and non-negative damping",
        });
    }
    let wn = oscillator.natural_frequency();
    let zeta = oscillator.damping_ratio();
    if zeta >= 1.0 {
        return Err(SolverError::InvalidArg {
            what: "closed form requires an underdamped oscillator",
        });
    }
    let wd = wn * (1.0 - zeta * zeta).sqrt();
    let w = oscillator.frequency;
    let (c, d) = oscillator.steady_state();
    let a = x0 - d;
    let b = (v0 + zeta * wn * a - w * c) / wd;

    Ok(times
        .iter()
        .map(|&t| {
            (-zeta * wn * t).exp() * (a * (wd * t).cos() + b * (wd * t).sin())
                + c * (w * t).sin()
                + d * (w * t).cos()
        })
        .collect())
}
