use crate::errors::AppResult;
use crate::export::model::RideExport;
use std::path::Path;

/// Write rides as pretty-printed JSON.
pub fn write_json(path: &Path, rides: &[RideExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rides)?;
    std::fs::write(path, json)?;
    Ok(())
}
