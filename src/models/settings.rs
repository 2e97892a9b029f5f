use serde::{Deserialize, Serialize};

/// Driver cost/target profile.
///
/// Stored as camelCase JSON under the `appSettings` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Currency per km the driver wants to net.
    pub target_earnings_per_km: f64,
    /// Price per liter.
    pub gas_price: f64,
    /// Km per liter. Zero disables the fuel component.
    pub fuel_consumption: f64,
    /// Maintenance, tires, etc. per km.
    pub other_vehicle_costs_per_km: f64,
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_earnings_per_km: 2.0,
            gas_price: 5.80,
            fuel_consumption: 12.0,
            other_vehicle_costs_per_km: 0.30,
            currency: "R$".to_string(),
        }
    }
}

/// Partial update coming from the CLI; unset fields keep the current value.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub target_earnings_per_km: Option<f64>,
    pub gas_price: Option<f64>,
    pub fuel_consumption: Option<f64>,
    pub other_vehicle_costs_per_km: Option<f64>,
    pub currency: Option<String>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.target_earnings_per_km.is_none()
            && self.gas_price.is_none()
            && self.fuel_consumption.is_none()
            && self.other_vehicle_costs_per_km.is_none()
            && self.currency.is_none()
    }

    /// Build the complete record that will replace `current`.
    pub fn apply_to(&self, current: &Settings) -> Settings {
        Settings {
            target_earnings_per_km: self
                .target_earnings_per_km
                .unwrap_or(current.target_earnings_per_km),
            gas_price: self.gas_price.unwrap_or(current.gas_price),
            fuel_consumption: self.fuel_consumption.unwrap_or(current.fuel_consumption),
            other_vehicle_costs_per_km: self
                .other_vehicle_costs_per_km
                .unwrap_or(current.other_vehicle_costs_per_km),
            currency: self
                .currency
                .clone()
                .unwrap_or_else(|| current.currency.clone()),
        }
    }
}
