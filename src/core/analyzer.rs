use crate::core::calculator::classify::classify;
use crate::core::calculator::cost::trip_cost;
use crate::core::calculator::rates::{minutes_to_hours, rate};
use crate::models::{RideAnalysis, RideId, RideInput, Settings};

/// Ride profitability analysis.
///
/// Pure: the id is handed in by the caller, so the same input, settings
/// and id always produce the same record. Divisions by zero yield 0.
pub struct RideAnalyzer;

impl RideAnalyzer {
    pub fn analyze(ride: &RideInput, settings: &Settings, id: RideId) -> RideAnalysis {
        let total_time_hours = minutes_to_hours(ride.estimated_time);

        let net_profit = ride.fare - trip_cost(ride.distance_of_trip, settings);

        let net_earnings_per_km = rate(net_profit, ride.distance_of_trip);
        let net_earnings_per_hour = rate(net_profit, total_time_hours);
        let gross_earnings_per_hour = rate(ride.fare, total_time_hours);

        RideAnalysis {
            id,
            input: *ride,
            total_time_hours,
            net_profit,
            net_earnings_per_km,
            net_earnings_per_hour,
            gross_earnings_per_hour,
            profitability: classify(net_earnings_per_km, settings.target_earnings_per_km),
        }
    }
}
