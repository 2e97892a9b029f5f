use crate::errors::AppResult;
use crate::export::model::RideExport;
use csv::Writer;
use std::path::Path;

/// Write rides as CSV; the header row comes from `RideExport`'s fields.
pub fn write_csv(path: &Path, rides: &[RideExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for ride in rides {
        wtr.serialize(ride)?;
    }

    wtr.flush()?;
    Ok(())
}
