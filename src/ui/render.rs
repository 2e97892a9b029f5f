//! Terminal views of rides and settings.

use crate::core::calculator::cost::{fuel_cost_per_km, vehicle_cost_per_km};
use crate::models::{RideAnalysis, Settings};
use crate::utils::colors::Palette;
use crate::utils::formatting::{bold, km, minutes2readable, money, money_per, short_timestamp};
use crate::utils::table::{Column, Table};

/// Detailed card printed after `add`.
pub fn ride_card(ride: &RideAnalysis, settings: &Settings, palette: &Palette) -> String {
    let cur = settings.currency.as_str();
    let verdict_color = palette.for_profitability(ride.profitability);
    let mut out = String::new();

    out.push_str(&format!(
        "{}  {}\n",
        bold(&palette.paint(verdict_color, ride.profitability.as_str())),
        palette.paint(verdict_color, ride.profitability.describe())
    ));
    out.push_str(&format!(
        "  Fare            {}\n  Distance        {}\n  Time            {}\n",
        money(cur, ride.input.fare),
        km(ride.input.distance_of_trip),
        minutes2readable(ride.input.estimated_time)
    ));
    out.push_str(&format!(
        "  Net profit      {}\n",
        palette.paint(palette.for_amount(ride.net_profit), &money(cur, ride.net_profit))
    ));
    out.push_str(&format!(
        "  Net per km      {}  (target {})\n",
        palette.paint(verdict_color, &money_per(cur, ride.net_earnings_per_km, "km")),
        money_per(cur, settings.target_earnings_per_km, "km")
    ));
    out.push_str(&format!(
        "  Net per hour    {}\n  Gross per hour  {}\n",
        money_per(cur, ride.net_earnings_per_hour, "h"),
        money_per(cur, ride.gross_earnings_per_hour, "h")
    ));
    out.push_str(&format!(
        "  {}\n",
        palette.paint(palette.muted, &format!("id {}", ride.id))
    ));

    out
}

/// Reverse-chronological table for `list`. Rows are numbered from 1 in
/// the order given.
pub fn ride_table(
    rides: &[&RideAnalysis],
    settings: &Settings,
    palette: &Palette,
    separator: char,
) -> String {
    let cur = settings.currency.as_str();
    let mut table = Table::new(vec![
        Column::right("#"),
        Column::left("When"),
        Column::right("Fare"),
        Column::right("Distance"),
        Column::right("Time"),
        Column::right("Net"),
        Column::right("Net/km"),
        Column::right("Net/h"),
        Column::left("Verdict"),
        Column::left("Id"),
    ])
    .with_separator(separator);

    for (i, ride) in rides.iter().enumerate() {
        let verdict_color = palette.for_profitability(ride.profitability);
        table.add_row(vec![
            (i + 1).to_string(),
            short_timestamp(&ride.id),
            money(cur, ride.input.fare),
            km(ride.input.distance_of_trip),
            minutes2readable(ride.input.estimated_time),
            palette.paint(palette.for_amount(ride.net_profit), &money(cur, ride.net_profit)),
            money(cur, ride.net_earnings_per_km),
            money(cur, ride.net_earnings_per_hour),
            palette.paint(verdict_color, ride.profitability.as_str()),
            palette.paint(palette.muted, &ride.id.to_string()),
        ]);
    }

    table.render()
}

/// Settings summary shared by `settings --print` and `status`.
pub fn settings_summary(settings: &Settings) -> String {
    let cur = settings.currency.as_str();
    format!(
        "  Target earnings   {}\n  Gas price         {}\n  Fuel consumption  {:.1} km/l\n  Other costs       {}\n  Currency          {}\n  Cost per km       {} (fuel {})\n",
        money_per(cur, settings.target_earnings_per_km, "km"),
        money_per(cur, settings.gas_price, "l"),
        settings.fuel_consumption,
        money_per(cur, settings.other_vehicle_costs_per_km, "km"),
        cur,
        money_per(cur, vehicle_cost_per_km(settings), "km"),
        money_per(cur, fuel_cost_per_km(settings), "km"),
    )
}
