use crate::cli::commands::{open_service, separator};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::ui::render::ride_table;
use crate::utils::colors::Palette;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { limit } = cmd {
        let service = open_service(cfg)?;
        let rides = service.rides();

        if rides.is_empty() {
            info("No rides analyzed yet.");
            println!("Use `tavalendo add <FARE> <KM> <MINUTES>` to get started.");
            return Ok(());
        }

        let mut sorted = rides.list_sorted();
        if let Some(n) = limit {
            sorted.truncate(*n);
        }

        header(format!("Rides ({} of {})", sorted.len(), rides.len()));
        let palette = Palette::for_theme(service.theme());
        print!(
            "{}",
            ride_table(&sorted, service.settings(), &palette, separator(cfg))
        );
    }
    Ok(())
}
