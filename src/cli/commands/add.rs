use crate::cli::commands::{audit, non_negative, open_service};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::RideInput;
use crate::ui::messages::{info, success};
use crate::ui::render::ride_card;
use crate::utils::colors::Palette;

/// Analyze a trip and, unless `--dry-run`, store it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        fare,
        distance,
        minutes,
        dry_run,
    } = cmd
    {
        let input = RideInput::new(
            non_negative("fare", *fare)?,
            non_negative("distance", *distance)?,
            non_negative("minutes", *minutes)?,
        );

        let mut service = open_service(cfg)?;
        let palette = Palette::for_theme(service.theme());

        if *dry_run {
            let preview = service.preview(input);
            info("Dry run: the ride was not stored.");
            print!("{}", ride_card(&preview, service.settings(), &palette));
            return Ok(());
        }

        let ride = service.add_ride(input)?;
        success(format!("Ride analyzed: {}", ride.profitability));
        print!("{}", ride_card(&ride, service.settings(), &palette));

        audit(
            service.store(),
            "add",
            &ride.id.to_string(),
            &format!(
                "fare={} distance={} minutes={} → {}",
                ride.input.fare,
                ride.input.distance_of_trip,
                ride.input.estimated_time,
                ride.profitability
            ),
        );
    }

    Ok(())
}
