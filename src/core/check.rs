use crate::core::rides::RideCollection;
use crate::core::settings::SettingsStore;
use crate::core::theme::ThemeStore;
use crate::errors::{AppError, AppResult};
use crate::store::{KeyValueStore, RIDES_KEY, SETTINGS_KEY, THEME_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyStatus {
    Missing,
    /// Decodes fine; carries a one-line summary.
    Valid(String),
    Corrupted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReport {
    pub key: &'static str,
    pub status: KeyStatus,
}

fn status_of<T>(
    result: AppResult<Option<T>>,
    summary: impl FnOnce(T) -> String,
) -> AppResult<KeyStatus> {
    match result {
        Ok(None) => Ok(KeyStatus::Missing),
        Ok(Some(v)) => Ok(KeyStatus::Valid(summary(v))),
        Err(AppError::CorruptedState(_)) => Ok(KeyStatus::Corrupted),
        Err(e) => Err(e),
    }
}

/// Strictly decode every stored key. Normal commands silently fall back to
/// defaults; this is where a corrupted value becomes visible.
pub fn check_state<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Vec<KeyReport>> {
    let settings = status_of(SettingsStore::load_strict(store), |s| {
        format!("target {} {:.2}/km", s.currency, s.target_earnings_per_km)
    })?;
    let rides = status_of(RideCollection::load_strict(store), |r| {
        format!("{} ride(s)", r.len())
    })?;
    let theme = status_of(ThemeStore::load_strict(store), |t| t.to_string())?;

    Ok(vec![
        KeyReport {
            key: SETTINGS_KEY,
            status: settings,
        },
        KeyReport {
            key: RIDES_KEY,
            status: rides,
        },
        KeyReport {
            key: THEME_KEY,
            status: theme,
        },
    ])
}
