//! Uniform analysis time grid.

use crate::error::ExcitationResult;
use td_core::numeric::{ensure_finite, ensure_positive, whole_steps};

/// Fixed-step grid `t[i] = i·dt`, `i = 0..step_count`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    dt: f64,
    steps: usize,
}

impl TimeGrid {
    /// Grid covering `[0, duration]`: `⌊duration/dt⌋ + 1` points.
    pub fn new(duration: f64, dt: f64) -> ExcitationResult<Self> {
        ensure_positive(dt, "time step")?;
        ensure_finite(duration, "analysis duration")?;
        if duration < 0.0 {
            return Err(crate::ExcitationError::NonPhysical {
                what: "analysis duration",
                value: duration,
            });
        }
        Ok(Self {
            dt,
            steps: whole_steps(duration, dt) + 1,
        })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of grid points, including `t = 0`.
    pub fn step_count(&self) -> usize {
        self.steps
    }

    pub fn time(&self, index: usize) -> f64 {
        index as f64 * self.dt
    }

    pub fn times(&self) -> Vec<f64> {
        (0..self.steps).map(|i| self.time(i)).collect()
    }

    /// Last grid index whose time does not exceed `duration`, capped to the grid.
    pub fn last_index_within(&self, duration: f64) -> usize {
        whole_steps(duration, self.dt).min(self.steps - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_count_includes_origin() {
        assert_eq!(TimeGrid::new(50.0, 0.001).unwrap().step_count(), 50_001);
        assert_eq!(TimeGrid::new(1.0, 0.5).unwrap().step_count(), 3);
        assert_eq!(TimeGrid::new(0.0, 0.5).unwrap().step_count(), 1);
    }

    #[test]
    fn times_are_multiples_of_dt() {
        let grid = TimeGrid::new(1.0, 0.25).unwrap();
        assert_eq!(grid.times(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn last_index_within_is_capped() {
        let grid = TimeGrid::new(1.0, 0.1).unwrap();
        assert_eq!(grid.last_index_within(0.3), 3);
        assert_eq!(grid.last_index_within(5.0), 10);
        assert_eq!(grid.last_index_within(0.0), 0);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(TimeGrid::new(1.0, 0.0).is_err());
        assert!(TimeGrid::new(-1.0, 0.1).is_err());
        assert!(TimeGrid::new(f64::NAN, 0.1).is_err());
    }
}
