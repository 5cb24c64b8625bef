//! Recorded accelerogram ("General Excitation") and its resampling onto the
//! analysis grid.

use tracing::warn;

use crate::error::{ExcitationError, ExcitationResult};
use crate::grid::TimeGrid;
use td_core::numeric::ensure_finite;

/// Paired time/acceleration samples of an arbitrary ground motion record.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralRecord {
    time: Vec<f64>,
    acceleration: Vec<f64>,
    analysis_duration: f64,
}

impl GeneralRecord {
    /// Validate and store a record. Times must be finite, non-negative and
    /// strictly increasing.
    pub fn new(
        time: Vec<f64>,
        acceleration: Vec<f64>,
        analysis_duration: f64,
    ) -> ExcitationResult<Self> {
        if time.len() != acceleration.len() {
            return Err(ExcitationError::LengthMismatch {
                times: time.len(),
                accelerations: acceleration.len(),
            });
        }
        if time.is_empty() {
            return Err(ExcitationError::InvalidArg {
                what: "general excitation record is empty",
            });
        }
        for (&t, &a) in time.iter().zip(&acceleration) {
            ensure_finite(t, "record time")?;
            ensure_finite(a, "record acceleration")?;
        }
        if time[0] < 0.0 {
            return Err(ExcitationError::NonPhysical {
                what: "record start time",
                value: time[0],
            });
        }
        if time.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ExcitationError::InvalidArg {
                what: "record times must be strictly increasing",
            });
        }
        ensure_finite(analysis_duration, "analysis duration")?;
        if analysis_duration < 0.0 {
            return Err(ExcitationError::NonPhysical {
                what: "analysis duration",
                value: analysis_duration,
            });
        }

        Ok(Self {
            time,
            acceleration,
            analysis_duration,
        })
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn acceleration(&self) -> &[f64] {
        &self.acceleration
    }

    pub fn analysis_duration(&self) -> f64 {
        self.analysis_duration
    }

    /// Resample the record onto `grid`.
    ///
    /// Each input time is snapped to its nearest grid index; grid points
    /// between two snapped samples are linearly interpolated. Grid points
    /// before the first sample are an error, grid points after the last one
    /// hold the final acceleration.
    pub fn sample(&self, grid: &TimeGrid) -> ExcitationResult<Vec<f64>> {
        let dt = grid.dt();
        let snapped: Vec<i64> = self.time.iter().map(|t| (t / dt).round() as i64).collect();
        if let Some(index) = snapped.windows(2).position(|w| w[1] <= w[0]) {
            return Err(ExcitationError::SamplesTooClose { index, dt });
        }

        let first = snapped[0];
        let last = snapped[snapped.len() - 1];
        let last_value = self.acceleration[self.acceleration.len() - 1];

        let mut out = Vec::with_capacity(grid.step_count());
        let mut segment = 0usize;
        let mut held = false;
        for k in 0..grid.step_count() as i64 {
            if k < first {
                return Err(ExcitationError::InterpolationRange {
                    time: grid.time(k as usize),
                    first: self.time[0],
                });
            }
            if k >= last {
                if k > last && !held {
                    warn!(
                        last_sample = self.time[self.time.len() - 1],
                        grid_end = grid.time(grid.step_count() - 1),
                        "record ends before the analysis; holding last acceleration"
                    );
                    held = true;
                }
                out.push(last_value);
                continue;
            }
            while snapped[segment + 1] <= k {
                segment += 1;
            }
            let (k0, k1) = (snapped[segment], snapped[segment + 1]);
            let (a0, a1) = (self.acceleration[segment], self.acceleration[segment + 1]);
            let fraction = (k - k0) as f64 / (k1 - k0) as f64;
            out.push(a0 + (a1 - a0) * fraction);
        }
        Ok(out)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn resampled_values_stay_within_record_bounds(
            accelerations in prop::collection::vec(-10.0_f64..10.0, 2..20),
            extra in 0.0_f64..2.0,
        ) {
            let n = accelerations.len();
            let time: Vec<f64> = (0..n).map(|i| i as f64 * 0.1).collect();
            let duration = time[n - 1] + extra;
            let rec = GeneralRecord::new(time, accelerations.clone(), duration).unwrap();
            let out = rec.sample(&TimeGrid::new(duration, 0.025).unwrap()).unwrap();
            let lo = accelerations.iter().cloned().fold(f64::INFINITY, f64::min);
            let hi = accelerations.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            for v in out {
                prop_assert!(v >= lo - 1e-12 && v <= hi + 1e-12);
            }
        }
    }
}
