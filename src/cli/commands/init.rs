use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::SqliteMedium;
use crate::ui::messages;

/// Handle the `init` command: create the config directory, the
/// configuration file (skipped in test mode), and the storage schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    messages::info("Initializing rTracklogger…");
    if !cli.test {
        messages::info(format!("Config file : {}", Config::config_file().display()));
    }
    messages::info(format!("Storage     : {}", db_path.display()));

    // opening creates the key-value table
    SqliteMedium::open(&db_path.to_string_lossy())?;

    messages::success("rTracklogger initialization completed");
    Ok(())
}
