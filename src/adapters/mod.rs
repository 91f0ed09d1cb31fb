//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `json/` - JSON data files and the bundled dataset

pub mod json;
