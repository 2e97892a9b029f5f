use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED KEYS
    //
    let mut stmt = pool
        .conn
        .prepare("SELECT key, LENGTH(value), updated_at FROM kv_store ORDER BY key ASC")?;
    let keys = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    println!("{}• Stored keys:{}", CYAN, RESET);
    let mut any = false;
    for k in keys {
        let (key, len, updated_at) = k?;
        any = true;
        println!("    {:<12} {:>8} bytes  updated {}", key, len, updated_at);
    }
    if !any {
        println!("    {GREY}--{RESET}");
    }

    //
    // 3) ANALYTICS EVENTS
    //
    let count: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = 'analytics'",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Analytics events:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 4) LAST MIGRATION
    //
    let last_migration: Option<String> = pool
        .conn
        .query_row(
            "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "{}• Schema version:{} {}",
        CYAN,
        RESET,
        last_migration.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
