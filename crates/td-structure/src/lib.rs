//! td-structure: structural and damper parameter models.
//!
//! Provides the leaf models the system assembler consumes:
//! - `Story`: a shear-building story (lumped mass on lateral columns)
//! - `Tlcd`: a tuned liquid column damper and its head-loss damping model
//! - `FluidProperties`: the liquid constants the damper model depends on
//!
//! All models validate their parameters on construction and expose derived
//! coefficients as plain SI `f64` values.
//!
//! # Example
//!
//! ```
//! use td_core::units::{kg, m, pa};
//! use td_structure::{FluidProperties, Story, SupportCondition, Tlcd};
//!
//! let support = SupportCondition::FixFix;
//! let story = Story::new(kg(10.0e3), m(3.0), m(0.35), m(0.35), pa(25.0e9), support).unwrap();
//! let tlcd = Tlcd::new(m(0.1), m(1.0), m(0.2), 3, FluidProperties::default()).unwrap();
//!
//! let c = story.damping_coefficient(0.02, tlcd.mass());
//! assert!(c > 0.0);
//! ```

pub mod common;
pub mod error;
pub mod fluid;
pub mod story;
pub mod tlcd;

// Re-exports
pub use error::{StructureError, StructureResult};
pub use fluid::FluidProperties;
pub use story::{Story, SupportCondition};
pub use tlcd::Tlcd;
