//! Crosswalk loading and price-region synthesis.
//!
//! [`CrosswalkService`] reads the fixed crosswalk CSV files from the data
//! directory layout and builds the in-memory price-region table from the
//! region definitions and the configured state FIPS mapping. Each call is
//! independent: tables are materialized per call and nothing is cached,
//! so a service shared across threads needs no locking.

use crate::config::{DataPaths, StateFips};
use crate::constants::{
    COUNTY_CODE_WIDTH, GEOREF_FILE, MICROMARKET_COUNTY_FILE, PRICE_REGIONS_PER_STATE,
    PRICE_REGION_WIDTH, TMS_COUNTIES_FILE, UNIT_CODE_WIDTH, columns,
};
use crate::error::{GeorefError, Result};
use crate::models::Region;

use polars::prelude::*;
use tracing::{debug, warn};

pub mod format;

#[cfg(test)]
pub mod tests;

pub use format::format_unit_code;

/// Geographic reference service for crosswalk tables
#[derive(Debug, Clone)]
pub struct CrosswalkService {
    paths: DataPaths,
    state_fips: StateFips,
}

impl CrosswalkService {
    /// Create a service over the given directory layout and FIPS mapping
    pub fn new(paths: DataPaths, state_fips: StateFips) -> Self {
        Self { paths, state_fips }
    }

    /// Directory layout this service reads from
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// Configured state FIPS mapping
    pub fn state_fips(&self) -> &StateFips {
        &self.state_fips
    }

    /// State abbreviation for a (possibly county-level) FIPS code
    pub fn state_abbr_from_fips(&self, fips_code: &str) -> Option<&str> {
        self.state_fips.abbr_for_fips(fips_code)
    }

    /// Load the geographic reference table
    pub fn load_georef(&self) -> Result<DataFrame> {
        self.load_crosswalk(GEOREF_FILE)
    }

    /// Load the micromarket to county mapping
    pub fn load_crosswalk_micromarket_county(&self) -> Result<DataFrame> {
        self.load_crosswalk(MICROMARKET_COUNTY_FILE)
    }

    /// Load the TMS counties mapping
    pub fn load_crosswalk_tms_counties(&self) -> Result<DataFrame> {
        self.load_crosswalk(TMS_COUNTIES_FILE)
    }

    /// Read one crosswalk CSV verbatim into a DataFrame
    fn load_crosswalk(&self, file_name: &str) -> Result<DataFrame> {
        let path = self.paths.crosswalk_file(file_name);
        if !path.is_file() {
            return Err(GeorefError::CrosswalkNotFound { path });
        }

        debug!("loading crosswalk {}", path.display());
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path))?
            .finish()?;

        Ok(df)
    }

    /// Build the price-region table, optionally restricted to one region.
    ///
    /// Emits 3 placeholder rows per state (index 1..=3) with `statecd` set
    /// to the state's FIPS code and county, unit, and price-region codes
    /// all set to the zero-padded index. Rows appear in region-list order
    /// (South, then Great Lakes), index order within each state, so output
    /// is deterministic for a given FIPS mapping.
    ///
    /// Fails with [`GeorefError::MissingStateFips`] if a region state has
    /// no entry in the configured mapping.
    pub fn price_regions(&self, region: Option<Region>) -> Result<DataFrame> {
        // Rows never mix regions, so emitting only the requested region is
        // the same as filtering the full concatenation by statecd.
        let selected: &[Region] = match region {
            Some(Region::South) => &[Region::South],
            Some(Region::GreatLakes) => &[Region::GreatLakes],
            None => &[Region::South, Region::GreatLakes],
        };

        let capacity = selected
            .iter()
            .map(|r| r.states().len() * PRICE_REGIONS_PER_STATE)
            .sum();
        let mut statecd: Vec<String> = Vec::with_capacity(capacity);
        let mut countycd: Vec<String> = Vec::with_capacity(capacity);
        let mut unitcd: Vec<String> = Vec::with_capacity(capacity);
        let mut price_region: Vec<String> = Vec::with_capacity(capacity);

        for region in selected {
            for state in region.states() {
                let fips =
                    self.state_fips
                        .fips(state)
                        .ok_or_else(|| GeorefError::MissingStateFips {
                            abbr: (*state).to_string(),
                        })?;

                for i in 1..=PRICE_REGIONS_PER_STATE {
                    statecd.push(fips.to_string());
                    countycd.push(format!("{i:0width$}", width = COUNTY_CODE_WIDTH));
                    unitcd.push(format!("{i:0width$}", width = UNIT_CODE_WIDTH));
                    price_region.push(format!("{i:0width$}", width = PRICE_REGION_WIDTH));
                }
            }
        }

        let df = df!(
            columns::STATE_CODE => statecd,
            columns::COUNTY_CODE => countycd,
            columns::UNIT_CODE => unitcd,
            columns::PRICE_REGION => price_region,
        )?;

        Ok(df)
    }

    /// Backward-compatible alias for [`price_regions`](Self::price_regions)
    /// with no filter.
    ///
    /// Earlier pipeline revisions loaded this table from a crosswalk file;
    /// the data is now synthesized in memory, and a warning is logged to
    /// make that visible to operators expecting file-backed output.
    pub fn load_crosswalk_price_regions(&self) -> Result<DataFrame> {
        warn!("using in-memory price regions instead of loading from file");
        self.price_regions(None)
    }
}
