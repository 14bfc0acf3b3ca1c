use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use std::path::Path;

/// Flatten the store and write it as JSON or CSV.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, out } = cmd {
        let mut session = open_session(cfg)?;
        session.on_init();

        if session.store().is_empty() {
            messages::warning("Nothing to export: no workouts recorded.");
            return Ok(());
        }

        format.write(session.store().all(), Path::new(out))?;
    }

    Ok(())
}
