use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Re-center the map on one workout and count the visit. The controller
/// treats unknown ids as a no-op, so the command checks the store first to
/// give the user a real error and exit code.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let mut session = open_session(cfg)?;
        session.on_init();

        let label = session
            .store()
            .find_by_id(id)
            .map(|w| w.label.clone())
            .ok_or_else(|| AppError::WorkoutNotFound(id.clone()))?;

        session.on_workout_selected(id);
        messages::info(format!("{label} selected"));
    }

    Ok(())
}
