use super::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::WorkoutForm;
use crate::errors::{AppError, AppResult};
use crate::models::{Coordinates, WorkoutDetails};
use crate::ui::messages;
use crate::utils::formatting;

/// Record a workout: a picked map location followed by a form submit.
/// Numeric fields are handed to the controller as the raw strings the user
/// typed, so invalid input surfaces as a validation rejection, not a parse
/// error at the CLI boundary.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        at,
        distance,
        duration,
        steps,
        climb,
    } = cmd
    {
        let coords = Coordinates::parse(at).ok_or_else(|| {
            AppError::InvalidCoordinates(format!(
                "'{at}' is not a \"lat,lng\" pair in decimal degrees"
            ))
        })?;

        let form = WorkoutForm {
            kind: *kind,
            distance_km: distance.clone(),
            duration_min: duration.clone(),
            step_rate: steps.clone(),
            elevation_gain: climb.clone(),
        };

        let mut session = open_session(cfg)?;
        session.on_init();
        session.on_location_picked(coords);
        let id = session.on_submit(&form)?;

        if let Some(workout) = session.store().find_by_id(&id) {
            let metric = match workout.details {
                WorkoutDetails::Running { pace, .. } => formatting::pace(pace),
                WorkoutDetails::Cycling { speed, .. } => formatting::speed(speed),
            };
            messages::success(format!(
                "Recorded {}: {} in {} ({metric}) [id {id}]",
                workout.label,
                formatting::km(workout.distance_km),
                formatting::minutes(workout.duration_min),
            ));
        }
    }

    Ok(())
}
