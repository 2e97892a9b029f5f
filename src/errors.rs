//! Unified application error type.
//! All modules (store, db, core, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid ride id: {0}")]
    InvalidRideId(String),

    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    // ---------------------------
    // Stored state
    // ---------------------------
    #[error("Stored value for '{0}' is corrupted")]
    CorruptedState(String),

    #[error("No ride at position {0}")]
    InvalidIndex(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Analytics
    // ---------------------------
    #[error("Analytics delivery failed: {0}")]
    Analytics(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
