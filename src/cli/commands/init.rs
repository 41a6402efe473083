use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rAttendance…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_str);

    let store = SqliteStore::open(&db_str)?;

    println!("✅ Database initialized at {}", &db_str);

    log::ttlog_or_warn(
        store.conn(),
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_str),
    );

    println!("🎉 rAttendance initialization completed!");
    Ok(())
}
