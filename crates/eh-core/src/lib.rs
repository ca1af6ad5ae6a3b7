//! eh-core: shared foundation for the engine health dashboard.
//!
//! Contains:
//! - ids (engine identifiers with natural ordering, cycle index)
//! - numeric (Real + tolerances + quantile)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

pub use error::{CoreError, CoreResult};
pub use ids::*;
pub use numeric::*;
