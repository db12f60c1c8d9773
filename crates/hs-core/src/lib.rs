//! hs-core: stable foundation for h2store.
//!
//! Contains:
//! - units (uom SI types + constructors in the units engineers type)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{HsError, HsResult};
pub use numeric::*;
pub use units::*;
