use crate::cli::commands::{audit, open_service};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::RideId;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, index, yes } = cmd {
        let mut service = open_service(cfg)?;

        let ride_id: RideId = match (index, id) {
            (Some(i), _) => service
                .rides()
                .id_at(*i)
                .ok_or(AppError::InvalidIndex(*i))?,
            (None, Some(raw)) => raw.parse()?,
            (None, None) => {
                return Err(AppError::InvalidInput(
                    "give a ride id or --index".to_string(),
                ));
            }
        };

        if service.rides().get(&ride_id).is_none() {
            info(format!("No ride with id {}: nothing to delete.", ride_id));
            return Ok(());
        }

        if !*yes
            && !confirm(&format!(
                "Delete ride {}? This action is irreversible.",
                ride_id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        if service.delete_ride(&ride_id)? {
            success(format!("Ride {} has been deleted.", ride_id));
            audit(service.store(), "del", &ride_id.to_string(), "Ride deleted");
        }
    }

    Ok(())
}
