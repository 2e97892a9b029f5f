use crate::cli::commands::audit;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::{RideCollection, SettingsStore};
use crate::errors::AppResult;
use crate::models::Settings;
use crate::store::SqliteStore;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its schema
///  - default settings and an empty ride history, when not stored yet
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing Tá Valendo!…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_str);

    let mut store = SqliteStore::open(&db_str)?;

    // corrupted values are left alone: `db --check` reports them
    if matches!(SettingsStore::load_strict(&store), Ok(None)) {
        SettingsStore::save(&mut store, &Settings::default())?;
    }
    if matches!(RideCollection::load_strict(&store), Ok(None)) {
        RideCollection::new().persist(&mut store)?;
    }

    audit(
        &store,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_str),
    );

    success("Tá Valendo! initialization completed!");
    Ok(())
}
