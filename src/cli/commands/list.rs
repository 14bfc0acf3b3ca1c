use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// List recorded workouts: session init renders the sidebar, `--by-distance`
/// issues a sort toggle, `--markers` signals map readiness and replays one
/// marker per workout.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        by_distance,
        markers,
    } = cmd
    {
        let mut session = open_session(cfg)?;
        session.on_init();

        if *by_distance {
            session.on_sort_toggle();
        }

        if *markers {
            session.on_map_ready();
            println!();
        }

        if session.store().is_empty() {
            messages::info("No workouts recorded yet.");
        } else {
            print!("{}", session.ui().sidebar());
        }
    }

    Ok(())
}
