use crate::analytics::LOG_OPERATION;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::info;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

/// ANSI colour by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "settings" => Colour::Yellow,
        "theme" => Colour::Blue,
        "export" => Colour::Cyan,
        "analytics" => Colour::Purple,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

const MAX_OP_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log {
        print: true,
        analytics,
    } = cmd
    {
        let store = SqliteStore::from_pool(DbPool::new(&cfg.database)?)?;
        let filter = if *analytics { Some(LOG_OPERATION) } else { None };
        let entries = load_log(&store.pool().conn, filter)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        print_entries(&entries);
    }

    Ok(())
}

fn print_entries(entries: &[LogEntry]) {
    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

    println!("📜 Internal log:\n");

    for e in entries {
        let color = color_for_operation(&e.operation);

        let op_target = if e.target.is_empty() {
            color.paint(e.operation.as_str()).to_string()
        } else {
            format!("{} ({})", color.paint(e.operation.as_str()), e.target)
        };

        // truncate on the visible text, then re-colour the operation word
        let visible = strip_ansi(&op_target);
        let shown = if visible.chars().count() > MAX_OP_WIDTH {
            let mut s = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>();
            s.push_str("...");
            match s.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(s.as_str()).to_string(),
            }
        } else {
            op_target
        };

        let padding = " ".repeat(MAX_OP_WIDTH.saturating_sub(strip_ansi(&shown).chars().count()));

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            e.id,
            e.date,
            shown,
            padding,
            e.message,
            id_w = id_w,
            date_w = date_w
        );
    }
}
