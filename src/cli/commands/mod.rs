pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod reset;
pub mod show;

use crate::config::Config;
use crate::core::SessionController;
use crate::errors::AppResult;
use crate::storage::SqliteMedium;
use crate::ui::TerminalUi;

/// One CLI invocation is one browsing session: open the configured storage
/// and wire the controller to the terminal collaborator.
pub(crate) fn open_session(cfg: &Config) -> AppResult<SessionController<SqliteMedium, TerminalUi>> {
    let medium = SqliteMedium::open(&cfg.database)?;
    let ui = TerminalUi::new(cfg.map_zoom, cfg.show_icons);
    Ok(SessionController::new(medium, ui))
}
