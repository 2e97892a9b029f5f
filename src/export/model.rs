// src/export/model.rs

use crate::models::RideAnalysis;
use serde::Serialize;

/// Flat row used by both CSV and JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RideExport {
    pub id: String,
    pub created_at: String,
    pub fare: f64,
    pub distance_km: f64,
    pub estimated_minutes: f64,
    pub total_time_hours: f64,
    pub net_profit: f64,
    pub net_earnings_per_km: f64,
    pub net_earnings_per_hour: f64,
    pub gross_earnings_per_hour: f64,
    pub profitability: String,
    pub currency: String,
}

impl RideExport {
    pub fn from_analysis(ride: &RideAnalysis, currency: &str) -> Self {
        Self {
            id: ride.id.to_string(),
            created_at: ride.id.created_at().to_rfc3339(),
            fare: ride.input.fare,
            distance_km: ride.input.distance_of_trip,
            estimated_minutes: ride.input.estimated_time,
            total_time_hours: ride.total_time_hours,
            net_profit: ride.net_profit,
            net_earnings_per_km: ride.net_earnings_per_km,
            net_earnings_per_hour: ride.net_earnings_per_hour,
            gross_earnings_per_hour: ride.gross_earnings_per_hour,
            profitability: ride.profitability.as_str().to_string(),
            currency: currency.to_string(),
        }
    }
}
