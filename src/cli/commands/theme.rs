use crate::cli::commands::{audit, open_service};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Theme;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { toggle, set } = cmd {
        let mut service = open_service(cfg)?;

        let changed = if *toggle {
            Some(service.toggle_theme()?)
        } else if let Some(code) = set {
            let theme =
                Theme::from_code(code).ok_or_else(|| AppError::InvalidTheme(code.to_string()))?;
            Some(service.set_theme(theme)?)
        } else {
            None
        };

        match changed {
            Some(theme) => {
                success(format!("Theme set to {}.", theme));
                audit(service.store(), "theme", theme.as_str(), "Theme changed");
            }
            None => info(format!("Current theme: {}", service.theme())),
        }
    }

    Ok(())
}
