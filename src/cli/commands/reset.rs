use super::open_session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Delete every workout: clears the persisted snapshot and discards the
/// in-memory session state.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cfg)?;
    session.on_init();
    let count = session.store().len();

    session.on_reset();

    messages::success(format!("Removed {count} workout(s); storage cleared."));
    Ok(())
}
