use crate::models::Settings;

/// Fuel spend per km. Zero when consumption is not positive.
pub fn fuel_cost_per_km(settings: &Settings) -> f64 {
    if settings.fuel_consumption > 0.0 {
        settings.gas_price / settings.fuel_consumption
    } else {
        0.0
    }
}

/// Fuel plus every other per-km operating cost.
pub fn vehicle_cost_per_km(settings: &Settings) -> f64 {
    fuel_cost_per_km(settings) + settings.other_vehicle_costs_per_km
}

/// Operating cost of a trip of `distance_km`.
pub fn trip_cost(distance_km: f64, settings: &Settings) -> f64 {
    distance_km * vehicle_cost_per_km(settings)
}
