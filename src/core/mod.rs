//! Core domain logic for brickset
//!
//! This module contains pure logic with no I/O dependencies.
//! Data sources are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`LegoSet`, `PackagingType`)
//! - `services/` - Queries over loaded sets
//! - `ports/` - Trait definitions for record sources

pub mod models;
pub mod ports;
pub mod services;
