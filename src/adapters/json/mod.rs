//! JSON-based record repository
//!
//! - [`repository`] - `Repository` implementation over a JSON array
//! - [`bundled_sets`] - The dataset shipped inside the binary

pub mod repository;

pub use repository::JsonRepository;

use crate::core::models::LegoSet;
use crate::error::LoadError;

/// Name used for the bundled dataset in logs and errors
pub const BUNDLED_ORIGIN: &str = "bundled brickset.json";

const BUNDLED_DATA: &str = include_str!("../../../data/brickset.json");

/// Load the dataset compiled into the binary
///
/// # Errors
///
/// Returns an error if the bundled file is not a valid set list.
pub fn bundled_sets() -> Result<JsonRepository<LegoSet>, LoadError> {
    JsonRepository::from_reader(BUNDLED_DATA.as_bytes(), BUNDLED_ORIGIN)
}
