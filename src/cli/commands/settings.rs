use crate::cli::commands::{audit, finite, open_service};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Settings, SettingsPatch};
use crate::ui::messages::{header, success};
use crate::ui::render::settings_summary;

fn optional_finite(name: &str, value: Option<f64>) -> AppResult<Option<f64>> {
    value.map(|v| finite(name, v)).transpose()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        target,
        gas_price,
        consumption,
        other_costs,
        currency,
        reset,
    } = cmd
    {
        let patch = SettingsPatch {
            target_earnings_per_km: optional_finite("target", *target)?,
            gas_price: optional_finite("gas price", *gas_price)?,
            fuel_consumption: optional_finite("consumption", *consumption)?,
            other_vehicle_costs_per_km: optional_finite("other costs", *other_costs)?,
            currency: match currency {
                Some(c) if c.trim().is_empty() => {
                    return Err(AppError::InvalidInput(
                        "currency cannot be empty".to_string(),
                    ));
                }
                Some(c) => Some(c.trim().to_string()),
                None => None,
            },
        };

        let mut service = open_service(cfg)?;

        if *reset || !patch.is_empty() {
            let new_settings = if *reset {
                Settings::default()
            } else {
                patch.apply_to(service.settings())
            };

            service.save_settings(new_settings)?;

            success(format!(
                "Settings saved. {} ride(s) re-analyzed.",
                service.rides().len()
            ));
            audit(
                service.store(),
                "settings",
                if *reset { "reset" } else { "update" },
                &serde_json::to_string(service.settings())?,
            );
        }

        if *print || (!*reset && patch.is_empty()) {
            header("Settings");
            print!("{}", settings_summary(service.settings()));
        }
    }

    Ok(())
}
