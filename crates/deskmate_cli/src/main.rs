//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `deskmate_core` linkage and
//!   schema wiring without the GUI shell.
//! - Keep output deterministic for quick local sanity checks.

use deskmate_core::db::migrations::latest_version;
use deskmate_core::db::open_db_in_memory;

fn main() {
    println!("deskmate_core version={}", deskmate_core::core_version());
    println!("deskmate_core schema_version={}", latest_version());

    match open_db_in_memory() {
        Ok(_conn) => println!("deskmate_core db_bootstrap=ok"),
        Err(err) => {
            eprintln!("deskmate_core db_bootstrap=error {err}");
            std::process::exit(1);
        }
    }
}
