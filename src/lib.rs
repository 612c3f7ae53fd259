//! Timber Georef Library
//!
//! Geographic reference data and crosswalks for the timber assets
//! analysis pipeline.
//!
//! This library provides:
//! - A fixed data-directory layout derived from a project base directory
//! - Region definitions for the South and Great Lakes timber markets
//! - State FIPS code lookups, including reverse lookup from county FIPS
//! - Loaders for the georef, micromarket-county, and TMS-counties
//!   crosswalk CSV files
//! - An in-memory price-region table keyed by state/county/unit codes
//! - Unit code normalization to zero-padded 2-digit strings

pub mod config;
pub mod constants;
pub mod crosswalks;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{DataPaths, StateFips};
pub use crosswalks::{CrosswalkService, format_unit_code};
pub use error::{GeorefError, Result};
pub use models::Region;
