//! Excitation sources and their ground acceleration on the analysis grid.

use crate::error::{ExcitationError, ExcitationResult};
use crate::grid::TimeGrid;
use crate::record::GeneralRecord;
use td_core::numeric::{ensure_finite, ensure_positive};

/// Harmonic base acceleration `amplitude · sin(frequency · t)`.
///
/// The structure is driven only while `t ≤ excitation_duration`; the
/// analysis then continues in free vibration up to `analysis_duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct SineWave {
    frequency: f64,
    amplitude: f64,
    excitation_duration: f64,
    analysis_duration: f64,
}

impl SineWave {
    /// `frequency` is circular (rad/s), `amplitude` in m/s².
    pub fn new(
        frequency: f64,
        amplitude: f64,
        excitation_duration: f64,
        analysis_duration: f64,
    ) -> ExcitationResult<Self> {
        ensure_finite(frequency, "sine frequency")?;
        ensure_finite(amplitude, "sine amplitude")?;
        ensure_positive(analysis_duration, "analysis duration")?;
        ensure_finite(excitation_duration, "excitation duration")?;
        if excitation_duration < 0.0 {
            return Err(ExcitationError::NonPhysical {
                what: "excitation duration",
                value: excitation_duration,
            });
        }
        Ok(Self {
            frequency,
            amplitude,
            excitation_duration,
            analysis_duration,
        })
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn excitation_duration(&self) -> f64 {
        self.excitation_duration
    }

    pub fn analysis_duration(&self) -> f64 {
        self.analysis_duration
    }

    pub fn acceleration_at(&self, t: f64) -> f64 {
        self.amplitude * (self.frequency * t).sin()
    }
}

/// Ground acceleration seen by the two kinds of degrees of freedom.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundAcceleration {
    /// Drives the story rows.
    pub structure: Vec<f64>,
    /// Drives the damper rows.
    pub damper: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Excitation {
    Sine(SineWave),
    General(GeneralRecord),
}

impl Excitation {
    /// Name used in case files and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sine(_) => "Sine Wave",
            Self::General(_) => "General Excitation",
        }
    }

    pub fn analysis_duration(&self) -> f64 {
        match self {
            Self::Sine(s) => s.analysis_duration(),
            Self::General(r) => r.analysis_duration(),
        }
    }

    /// Analysis grid for this excitation at time step `dt`.
    pub fn grid(&self, dt: f64) -> ExcitationResult<TimeGrid> {
        TimeGrid::new(self.analysis_duration(), dt)
    }

    /// Sample the excitation on `grid`.
    ///
    /// A sine wave stops driving the stories after its excitation duration but
    /// keeps driving the damper columns for the whole grid. A general record
    /// drives both with the same resampled history.
    pub fn ground_acceleration(&self, grid: &TimeGrid) -> ExcitationResult<GroundAcceleration> {
        match self {
            Self::Sine(sine) => {
                let cutoff = grid.last_index_within(sine.excitation_duration());
                let damper: Vec<f64> = (0..grid.step_count())
                    .map(|i| sine.acceleration_at(grid.time(i)))
                    .collect();
                let structure = damper
                    .iter()
                    .enumerate()
                    .map(|(i, &a)| if i <= cutoff { a } else { 0.0 })
                    .collect();
                Ok(GroundAcceleration { structure, damper })
            }
            Self::General(record) => {
                let structure = record.sample(grid)?;
                Ok(GroundAcceleration {
                    damper: structure.clone(),
                    structure,
                })
            }
        }
    }
}

impl From<SineWave> for Excitation {
    fn from(s: SineWave) -> Self {
        Self::Sine(s)
    }
}

impl From<GeneralRecord> for Excitation {
    fn from(r: GeneralRecord) -> Self {
        Self::General(r)
    }
}
