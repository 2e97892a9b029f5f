//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `R$ 12.17`, `-R$ 3.50`.
pub fn money(currency: &str, value: f64) -> String {
    if value < 0.0 {
        format!("-{} {:.2}", currency, value.abs())
    } else {
        format!("{} {:.2}", currency, value)
    }
}

/// `R$ 1.22/km`.
pub fn money_per(currency: &str, value: f64, unit: &str) -> String {
    format!("{}/{}", money(currency, value), unit)
}

pub fn km(value: f64) -> String {
    format!("{:.1} km", value)
}

/// Minutes as `1h 05m` (or `25m` below one hour).
pub fn minutes2readable(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as i64;
    let hours = total / 60;
    let mins = total % 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

/// Id shortened to `YYYY-MM-DD HH:MM:SS`.
pub fn short_timestamp(id: &crate::models::RideId) -> String {
    id.created_at()
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
