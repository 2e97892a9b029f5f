use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::time::Duration;

/// Prepare a connection for use and bring the schema up to date.
///
/// The store and the analytics sink hold separate connections to the same
/// file, so writers wait for each other instead of failing with SQLITE_BUSY.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    Ok(())
}
