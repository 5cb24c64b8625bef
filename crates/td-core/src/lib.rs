//! td-core: shared foundation for the tlcdyn workspace.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + step counting + float checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{TdError, TdResult};
pub use numeric::*;
pub use units::*;
