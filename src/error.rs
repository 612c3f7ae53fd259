//! Error handling for geographic reference operations.
//!
//! Crosswalk loading surfaces raw I/O and polars failures unchanged; lookup
//! misses are not errors and are returned as `Option::None` by the query APIs.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeorefError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Crosswalk file not found at path: {path}")]
    CrosswalkNotFound { path: PathBuf },

    #[error("Unknown price region filter: '{value}' (expected 'south' or 'gl')")]
    UnknownRegion { value: String },

    #[error("No FIPS code configured for state: {abbr}")]
    MissingStateFips { abbr: String },
}

pub type Result<T> = std::result::Result<T, GeorefError>;
