use crate::cli::commands::{audit, open_service};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let service = open_service(cfg)?;
        let count = ExportLogic::export(service.rides(), service.settings(), format, file, *force)?;

        if count > 0 {
            audit(
                service.store(),
                "export",
                format.as_str(),
                &format!("{} ride(s) exported to {}", count, file),
            );
        }
    }
    Ok(())
}
