pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod settings;
pub mod status;
pub mod theme;

use crate::analytics::{AnalyticsEvent, AnalyticsSink, DbLogSink, NullSink};
use crate::config::Config;
use crate::core::RideService;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::models::ClockIdGenerator;
use crate::store::SqliteStore;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

pub type CliService = RideService<SqliteStore, Box<dyn AnalyticsSink>, ClockIdGenerator>;

/// Open the configured database and load all state.
pub fn open_service(cfg: &Config) -> AppResult<CliService> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let store = SqliteStore::open(&cfg.database)?;

    let sink: Box<dyn AnalyticsSink> = if cfg.analytics_enabled {
        match DbLogSink::open(&cfg.database) {
            Ok(s) => Box::new(s),
            Err(_) => Box::new(NullSink),
        }
    } else {
        Box::new(NullSink)
    };
    let _ = sink.send(&AnalyticsEvent::session_opened());

    Ok(RideService::open(store, sink, ClockIdGenerator::seeded))
}

/// Internal audit line; failures only produce a warning.
pub(crate) fn audit(store: &SqliteStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&store.pool().conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Reject NaN and infinities: they cannot be stored as JSON.
pub(crate) fn finite(name: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AppError::InvalidInput(format!("{name} must be a finite number")))
    }
}

pub(crate) fn non_negative(name: &str, value: f64) -> AppResult<f64> {
    let v = finite(name, value)?;
    if v < 0.0 {
        return Err(AppError::InvalidInput(format!("{name} cannot be negative")));
    }
    Ok(v)
}

pub(crate) fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}
