use crate::core::calculator::cost::vehicle_cost_per_km;
use crate::errors::{AppError, AppResult};
use crate::models::Settings;
use crate::store::{KeyValueStore, SETTINGS_KEY};

/// Persistence of the driver's settings under `appSettings`.
pub struct SettingsStore;

impl SettingsStore {
    /// Stored settings, or the defaults when the key is missing, unreadable
    /// or does not decode.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Settings {
        store
            .get(SETTINGS_KEY)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Like `load`, but a value that does not decode is reported as
    /// `CorruptedState` instead of being replaced by the defaults.
    pub fn load_strict<S: KeyValueStore + ?Sized>(store: &S) -> AppResult<Option<Settings>> {
        match store.get(SETTINGS_KEY)? {
            None => Ok(None),
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|_| AppError::CorruptedState(SETTINGS_KEY.to_string())),
        }
    }

    /// Every field and the derived cost per km must be finite numbers.
    pub fn validate(settings: &Settings) -> AppResult<()> {
        let fields = [
            settings.target_earnings_per_km,
            settings.gas_price,
            settings.fuel_consumption,
            settings.other_vehicle_costs_per_km,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(AppError::InvalidInput(
                "settings must be finite numbers".to_string(),
            ));
        }
        if !vehicle_cost_per_km(settings).is_finite() {
            return Err(AppError::InvalidInput(
                "gas price and consumption give a cost per km too large to store".to_string(),
            ));
        }
        Ok(())
    }

    /// Replace the whole record.
    pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, settings: &Settings) -> AppResult<()> {
        Self::validate(settings)?;
        let json = serde_json::to_string(settings)?;
        store.set(SETTINGS_KEY, &json)
    }
}
