use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::check::{KeyStatus, check_state};
use crate::db::stats;
use crate::errors::AppResult;
use crate::store::{RIDES_KEY, SqliteStore};
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        info,
        vacuum,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database)?;

        //
        // 1) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                store
                    .pool()
                    .conn
                    .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ SQLite integrity check passed.{}", GREEN, RESET);
            } else {
                println!("{}✘ SQLite integrity check failed:{} {}", RED, RESET, integrity);
            }

            for report in check_state(&store)? {
                match report.status {
                    KeyStatus::Valid(summary) => {
                        println!("{}✔ {:<12}{} {}", GREEN, report.key, RESET, summary)
                    }
                    KeyStatus::Missing => println!(
                        "{}• {:<12} not stored (defaults apply){}",
                        GREY, report.key, RESET
                    ),
                    KeyStatus::Corrupted if report.key == RIDES_KEY => println!(
                        "{}✘ {:<12}{} corrupted: the history reads as empty and the next saved ride replaces it",
                        RED, report.key, RESET
                    ),
                    KeyStatus::Corrupted => println!(
                        "{}✘ {:<12}{} corrupted: normal commands ignore it and use defaults",
                        RED, report.key, RESET
                    ),
                }
            }
            println!();
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(store.pool(), &cfg.database)?;
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.pool().conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
