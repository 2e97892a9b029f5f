// src/export/logic.rs

use crate::core::RideCollection;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::RideExport;
use crate::export::{ExportFormat, csv, json, notify_export_success};
use crate::models::Settings;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every ride, newest first.
    ///
    /// `file` must be an absolute path (after `~` expansion). Returns the
    /// number of exported rides.
    pub fn export(
        rides: &RideCollection,
        settings: &Settings,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        if rides.is_empty() {
            warning("No rides to export.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        let rows: Vec<RideExport> = rides
            .list_sorted()
            .into_iter()
            .map(|r| RideExport::from_analysis(r, &settings.currency))
            .collect();

        match format {
            ExportFormat::Csv => csv::write_csv(&path, &rows)?,
            ExportFormat::Json => json::write_json(&path, &rows)?,
        }

        notify_export_success(format.as_str(), &path);
        Ok(rows.len())
    }
}
