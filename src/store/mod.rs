//! Key-value persistence seam.
//!
//! Every piece of application state lives under one of three independent
//! keys. Each key is read and written on its own; a failed write to one key
//! never rolls back another.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::errors::AppResult;

/// JSON-encoded `Settings`.
pub const SETTINGS_KEY: &str = "appSettings";
/// JSON-encoded array of `RideAnalysis`.
pub const RIDES_KEY: &str = "appRides";
/// Literal `light` or `dark`.
pub const THEME_KEY: &str = "appTheme";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}
