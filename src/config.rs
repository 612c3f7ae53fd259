//! Configuration values for the geographic reference service.
//!
//! Both values here are constructed explicitly by the caller and passed
//! into [`CrosswalkService`](crate::crosswalks::CrosswalkService) rather
//! than living as process-wide globals: `DataPaths` derives the fixed
//! data-directory layout from a project base directory, and `StateFips`
//! carries the state abbreviation to FIPS code mapping.

use crate::constants::STATE_FIPS;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Fixed data-directory layout derived from a project base directory
///
/// Paths are pure compositions; nothing here checks that the directories
/// exist on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    base_dir: PathBuf,
}

impl DataPaths {
    /// Create the layout rooted at the given project base directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Project base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// `<base>/data`
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// `<base>/data/input`
    pub fn input_dir(&self) -> PathBuf {
        self.data_dir().join("input")
    }

    /// `<base>/data/crosswalks`
    pub fn crosswalks_dir(&self) -> PathBuf {
        self.data_dir().join("crosswalks")
    }

    /// `<base>/data/processed`
    pub fn processed_dir(&self) -> PathBuf {
        self.data_dir().join("processed")
    }

    /// `<base>/data/reports`
    pub fn reports_dir(&self) -> PathBuf {
        self.data_dir().join("reports")
    }

    /// Full path of a named file in the crosswalks directory
    pub fn crosswalk_file(&self, name: &str) -> PathBuf {
        self.crosswalks_dir().join(name)
    }
}

/// State abbreviation to 2-digit FIPS code mapping
///
/// Immutable after construction. The default instance carries the
/// standard 50-state + DC table from [`crate::constants`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateFips {
    codes: HashMap<String, String>,
}

impl StateFips {
    /// Build a mapping from abbreviation/FIPS pairs
    pub fn from_pairs<I, A, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<String>,
        C: Into<String>,
    {
        Self {
            codes: pairs
                .into_iter()
                .map(|(abbr, code)| (abbr.into(), code.into()))
                .collect(),
        }
    }

    /// Number of states in the mapping
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// FIPS code for a state abbreviation
    pub fn fips(&self, abbr: &str) -> Option<&str> {
        self.codes.get(abbr).map(String::as_str)
    }

    /// State abbreviation for a FIPS code
    ///
    /// Only the first two characters of `fips_code` are considered, so a
    /// full 5-digit county FIPS (or longer tract code) resolves to its
    /// state. Returns `None` when no state carries the code; a miss is
    /// not an error.
    pub fn abbr_for_fips(&self, fips_code: &str) -> Option<&str> {
        let state_code = fips_code.get(..2).unwrap_or(fips_code);
        self.codes
            .iter()
            .find(|(_, code)| code.as_str() == state_code)
            .map(|(abbr, _)| abbr.as_str())
    }
}

impl Default for StateFips {
    fn default() -> Self {
        Self::from_pairs(STATE_FIPS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_paths_derive_fixed_layout() {
        let paths = DataPaths::new("/srv/timber");

        assert_eq!(paths.base_dir(), Path::new("/srv/timber"));
        assert_eq!(paths.data_dir(), PathBuf::from("/srv/timber/data"));
        assert_eq!(paths.input_dir(), PathBuf::from("/srv/timber/data/input"));
        assert_eq!(
            paths.crosswalks_dir(),
            PathBuf::from("/srv/timber/data/crosswalks")
        );
        assert_eq!(
            paths.processed_dir(),
            PathBuf::from("/srv/timber/data/processed")
        );
        assert_eq!(
            paths.reports_dir(),
            PathBuf::from("/srv/timber/data/reports")
        );
        assert_eq!(
            paths.crosswalk_file("georef.csv"),
            PathBuf::from("/srv/timber/data/crosswalks/georef.csv")
        );
    }

    #[test]
    fn fips_lookup_by_abbreviation() {
        let fips = StateFips::default();

        assert_eq!(fips.fips("AL"), Some("01"));
        assert_eq!(fips.fips("WI"), Some("55"));
        assert_eq!(fips.fips("ZZ"), None);
    }

    #[test]
    fn abbr_lookup_truncates_county_fips() {
        let fips = StateFips::default();

        // 5-digit county FIPS resolves via its 2-digit state prefix
        assert_eq!(fips.abbr_for_fips("01073"), Some("AL"));
        assert_eq!(fips.abbr_for_fips("48"), Some("TX"));
        assert_eq!(fips.abbr_for_fips("26163000100"), Some("MI"));
    }

    #[test]
    fn abbr_lookup_miss_is_none() {
        let fips = StateFips::default();

        assert_eq!(fips.abbr_for_fips("99"), None);
        assert_eq!(fips.abbr_for_fips("99999"), None);
        // shorter than the 2-char prefix is used as-is
        assert_eq!(fips.abbr_for_fips("1"), None);
        assert_eq!(fips.abbr_for_fips(""), None);
    }

    #[test]
    fn from_pairs_builds_custom_mapping() {
        let fips = StateFips::from_pairs([("AL", "01"), ("GA", "13")]);

        assert_eq!(fips.len(), 2);
        assert_eq!(fips.abbr_for_fips("13121"), Some("GA"));
        assert_eq!(fips.abbr_for_fips("55"), None);
    }
}
