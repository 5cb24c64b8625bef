//! Base excitation histories for dynamic analysis.
//!
//! An excitation is a ground acceleration history sampled on the fixed time
//! grid used by the integrators. Two sources are supported:
//!
//! - a parametric sine wave that may stop before the end of the analysis
//! - an arbitrary recorded accelerogram, linearly interpolated onto the grid
//!
//! The assembler turns the sampled accelerations into nodal forces by scaling
//! them with the mass of each degree of freedom.

pub mod error;
pub mod excitation;
pub mod grid;
pub mod record;

pub use error::{ExcitationError, ExcitationResult};
pub use excitation::{Excitation, GroundAcceleration, SineWave};
pub use grid::TimeGrid;
pub use record::GeneralRecord;
