//! Tá Valendo! main entrypoint.

use tavalendo::run;
use tavalendo::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
