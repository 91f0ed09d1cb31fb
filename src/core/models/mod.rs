//! Domain models for brickset
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`LegoSet`] - One catalog entry
//! - [`PackagingType`] - How a set is sold

mod lego_set;
mod packaging_type;

pub use lego_set::LegoSet;
pub use packaging_type::PackagingType;
