use crate::cli::commands::open_service;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::ui::render::settings_summary;
use crate::utils::colors::Palette;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let service = open_service(cfg)?;
    let palette = Palette::for_theme(service.theme());
    let latest = service.rides().latest_profitability();

    header("Tá Valendo!");
    print!("{}", settings_summary(service.settings()));
    println!("  Theme             {}", service.theme());
    println!("  Rides stored      {}", service.rides().len());
    println!(
        "  Latest verdict    {}",
        palette.paint(palette.for_profitability(latest), latest.as_str())
    );

    Ok(())
}
