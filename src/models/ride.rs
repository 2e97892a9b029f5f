use crate::models::profitability::Profitability;
use crate::models::ride_id::RideId;
use serde::{Deserialize, Serialize};

/// Raw trip facts as entered by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideInput {
    pub fare: f64,
    /// Kilometers.
    pub distance_of_trip: f64,
    /// Minutes.
    pub estimated_time: f64,
}

impl RideInput {
    pub fn new(fare: f64, distance_of_trip: f64, estimated_time: f64) -> Self {
        Self {
            fare,
            distance_of_trip,
            estimated_time,
        }
    }
}

/// A trip plus everything derived from it under one settings snapshot.
///
/// Serialized flat: the input fields sit next to the derived ones, which
/// is the layout stored under `appRides`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RideAnalysis {
    pub id: RideId,
    #[serde(flatten)]
    pub input: RideInput,
    pub total_time_hours: f64,
    pub net_profit: f64,
    pub net_earnings_per_km: f64,
    pub net_earnings_per_hour: f64,
    pub gross_earnings_per_hour: f64,
    pub profitability: Profitability,
}

impl RideAnalysis {
    /// JSON has no infinity or NaN: a record failing this check would be
    /// written as `null` and make the whole history undecodable.
    pub fn is_finite(&self) -> bool {
        [
            self.input.fare,
            self.input.distance_of_trip,
            self.input.estimated_time,
            self.total_time_hours,
            self.net_profit,
            self.net_earnings_per_km,
            self.net_earnings_per_hour,
            self.gross_earnings_per_hour,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
