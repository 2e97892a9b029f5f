use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

fn platform_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Print or edit the YAML configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            info(format!("Configuration ({})", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            if !path.exists() {
                warning("No configuration file yet: run `tavalendo init` first.");
                return Ok(());
            }

            let fallback = platform_editor();
            let requested = editor.clone().unwrap_or_else(|| fallback.clone());

            if open_in(&requested, &path) {
                success(format!("Configuration edited with '{}'", requested));
            } else if requested != fallback && open_in(&fallback, &path) {
                warning(format!("Editor '{}' not available", requested));
                success(format!("Configuration edited with '{}'", fallback));
            } else {
                error(format!("Could not open an editor for {}", path.display()));
            }
        }
    }

    Ok(())
}
