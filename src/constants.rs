//! Application constants for the geographic reference service
//!
//! This module contains the region definitions, the standard state FIPS
//! table, crosswalk file names, and column naming conventions used
//! throughout the timber assets pipeline.

// =============================================================================
// Region Definitions
// =============================================================================

/// States making up the US South timber price region
pub const SOUTH_STATES: [&str; 11] = [
    "AL", "AR", "FL", "GA", "LA", "MS", "NC", "SC", "TN", "TX", "VA",
];

/// States making up the Great Lakes timber price region
pub const GREAT_LAKES_STATES: [&str; 3] = ["MI", "MN", "WI"];

/// Synthetic price-region rows emitted per state by the in-memory table
pub const PRICE_REGIONS_PER_STATE: usize = 3;

// =============================================================================
// State FIPS Codes
// =============================================================================

/// Standard state abbreviation to 2-digit FIPS code table (50 states + DC)
pub const STATE_FIPS: &[(&str, &str)] = &[
    ("AL", "01"),
    ("AK", "02"),
    ("AZ", "04"),
    ("AR", "05"),
    ("CA", "06"),
    ("CO", "08"),
    ("CT", "09"),
    ("DE", "10"),
    ("DC", "11"),
    ("FL", "12"),
    ("GA", "13"),
    ("HI", "15"),
    ("ID", "16"),
    ("IL", "17"),
    ("IN", "18"),
    ("IA", "19"),
    ("KS", "20"),
    ("KY", "21"),
    ("LA", "22"),
    ("ME", "23"),
    ("MD", "24"),
    ("MA", "25"),
    ("MI", "26"),
    ("MN", "27"),
    ("MS", "28"),
    ("MO", "29"),
    ("MT", "30"),
    ("NE", "31"),
    ("NV", "32"),
    ("NH", "33"),
    ("NJ", "34"),
    ("NM", "35"),
    ("NY", "36"),
    ("NC", "37"),
    ("ND", "38"),
    ("OH", "39"),
    ("OK", "40"),
    ("OR", "41"),
    ("PA", "42"),
    ("RI", "44"),
    ("SC", "45"),
    ("SD", "46"),
    ("TN", "47"),
    ("TX", "48"),
    ("UT", "49"),
    ("VT", "50"),
    ("VA", "51"),
    ("WA", "53"),
    ("WV", "54"),
    ("WI", "55"),
    ("WY", "56"),
];

// =============================================================================
// Crosswalk Files
// =============================================================================

/// Geographic reference table file name
pub const GEOREF_FILE: &str = "georef.csv";

/// Micromarket to county crosswalk file name
pub const MICROMARKET_COUNTY_FILE: &str = "crosswalk_micromarket_county.csv";

/// TMS counties crosswalk file name
pub const TMS_COUNTIES_FILE: &str = "crosswalk_tmsCounties.csv";

// =============================================================================
// Column Conventions
// =============================================================================

/// Column names shared across the crosswalk tables
pub mod columns {
    /// 2-digit state FIPS code
    pub const STATE_CODE: &str = "statecd";

    /// 3-digit zero-padded county code
    pub const COUNTY_CODE: &str = "countycd";

    /// 2-digit zero-padded forestry survey unit code
    pub const UNIT_CODE: &str = "unitcd";

    /// 2-digit zero-padded price region code
    pub const PRICE_REGION: &str = "priceRegion";
}

/// Zero-padding width for unit codes
pub const UNIT_CODE_WIDTH: usize = 2;

/// Zero-padding width for county codes
pub const COUNTY_CODE_WIDTH: usize = 3;

/// Zero-padding width for price region codes
pub const PRICE_REGION_WIDTH: usize = 2;
