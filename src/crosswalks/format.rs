//! Unit code column normalization.

use crate::constants::UNIT_CODE_WIDTH;
use crate::error::Result;
use polars::prelude::*;

/// Normalize a unit-code column to zero-padded 2-digit strings.
///
/// Nulls are treated as unit 0. Values are converted to integers before
/// formatting; a value that cannot convert (e.g. a non-numeric string)
/// fails the whole call with the underlying cast error. If `unit_col` is
/// not present in the frame, the input is returned unchanged.
///
/// The input frame is never mutated; the result has the same row count
/// and column set.
pub fn format_unit_code(df: &DataFrame, unit_col: &str) -> Result<DataFrame> {
    if !df.get_column_names_str().contains(&unit_col) {
        return Ok(df.clone());
    }

    let formatted = df
        .clone()
        .lazy()
        .with_column(
            col(unit_col)
                .fill_null(lit(0))
                .strict_cast(DataType::Int64)
                .cast(DataType::String)
                .str()
                .zfill(lit(UNIT_CODE_WIDTH as u64)),
        )
        .collect()?;

    Ok(formatted)
}
