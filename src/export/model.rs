use crate::models::{Workout, WorkoutDetails};
use serde::Serialize;

/// Flat row for export: one workout per line, variant metrics as optional
/// columns so running and cycling share a single header.
#[derive(Serialize, Clone, Debug)]
pub struct WorkoutExport {
    pub id: String,
    pub kind: &'static str,
    pub label: String,
    pub created_at: String,
    pub lat: f64,
    pub lng: f64,
    pub distance_km: f64,
    pub duration_min: f64,
    pub pace_min_per_km: Option<f64>,
    pub speed_km_h: Option<f64>,
    pub step_rate: Option<f64>,
    pub elevation_gain_m: Option<f64>,
}

impl From<&Workout> for WorkoutExport {
    fn from(w: &Workout) -> Self {
        let (pace_min_per_km, speed_km_h, step_rate, elevation_gain_m) = match w.details {
            WorkoutDetails::Running { step_rate, pace } => {
                (Some(pace), None, Some(step_rate), None)
            }
            WorkoutDetails::Cycling {
                elevation_gain,
                speed,
            } => (None, Some(speed), None, Some(elevation_gain)),
        };

        Self {
            id: w.id.clone(),
            kind: w.kind().as_str(),
            label: w.label.clone(),
            created_at: w.created_at.to_rfc3339(),
            lat: w.coords.lat,
            lng: w.coords.lng,
            distance_km: w.distance_km,
            duration_min: w.duration_min,
            pace_min_per_km,
            speed_km_h,
            step_rate,
            elevation_gain_m,
        }
    }
}
