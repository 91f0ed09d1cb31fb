//! JSON-backed record repository
//!
//! Implements the `Repository` port by deserializing a JSON array once.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::core::ports::Repository;
use crate::error::LoadError;

/// Repository holding every record of a JSON array, in array order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRepository<T> {
    records: Vec<T>,
}

impl<T: DeserializeOwned> JsonRepository<T> {
    /// Load all records from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or does not contain a
    /// JSON array of `T`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Load all records from any reader
    ///
    /// `origin` names the source in error messages and logs.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is not a JSON array of `T`.
    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, LoadError> {
        let records: Vec<T> = serde_json::from_reader(reader).map_err(|source| LoadError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        log::debug!("Loaded {} record(s) from {origin}", records.len());
        Ok(Self { records })
    }
}

impl<T> From<Vec<T>> for JsonRepository<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T> Repository<T> for JsonRepository<T> {
    fn get_all(&self) -> &[T] {
        &self.records
    }
}
