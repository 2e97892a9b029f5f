use crate::models::Profitability;

/// Share of the target below which a ride stops being MEDIUM.
pub const MEDIUM_RATIO: f64 = 0.7;

/// Three-tier verdict on net earnings per km. Never returns `None`.
pub fn classify(net_earnings_per_km: f64, target_earnings_per_km: f64) -> Profitability {
    if net_earnings_per_km >= target_earnings_per_km {
        Profitability::Good
    } else if net_earnings_per_km >= target_earnings_per_km * MEDIUM_RATIO {
        Profitability::Medium
    } else {
        Profitability::Bad
    }
}
