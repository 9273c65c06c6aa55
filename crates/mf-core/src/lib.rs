//! mf-core: stable foundation for mixflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (tolerances + float helpers)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;
