/// `amount / per`, or 0 when `per` is not positive.
pub fn rate(amount: f64, per: f64) -> f64 {
    if per > 0.0 { amount / per } else { 0.0 }
}

pub fn minutes_to_hours(minutes: f64) -> f64 {
    minutes / 60.0
}
