use super::{Coordinates, WorkoutKind, id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded exercise session pinned to a map location.
///
/// Common fields live on the struct; the variant payload is carried by
/// [`WorkoutDetails`], tagged with `kind` in the serialized form so the
/// variant survives a persistence round-trip intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub coords: Coordinates,
    pub distance_km: f64,
    pub duration_min: f64,
    pub label: String,
    #[serde(flatten)]
    pub details: WorkoutDetails,
    /// Times the entry was selected this session. Not persisted: resets to 0
    /// on reload.
    #[serde(skip)]
    pub clicks: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running { step_rate: f64, pace: f64 },
    Cycling { elevation_gain: f64, speed: f64 },
}

impl Workout {
    /// Inputs must already be validated (finite, strictly positive); the
    /// constructors trust the caller and never re-check. Pace is min/km,
    /// computed once.
    pub fn running(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        step_rate: f64,
    ) -> Self {
        let created_at = Utc::now();
        let pace = duration_min / distance_km;
        Self {
            id: id::next_id(created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            label: label_for(WorkoutKind::Running, created_at),
            details: WorkoutDetails::Running { step_rate, pace },
            clicks: 0,
        }
    }

    /// Speed is km/h, computed once.
    pub fn cycling(
        coords: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain: f64,
    ) -> Self {
        let created_at = Utc::now();
        let speed = (distance_km / duration_min) * 60.0;
        Self {
            id: id::next_id(created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            label: label_for(WorkoutKind::Cycling, created_at),
            details: WorkoutDetails::Cycling {
                elevation_gain,
                speed,
            },
            clicks: 0,
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    pub fn pace(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { pace, .. } => Some(pace),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed, .. } => Some(speed),
            WorkoutDetails::Running { .. } => None,
        }
    }

    pub fn record_click(&mut self) {
        self.clicks += 1;
    }
}

fn label_for(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} {}", kind.verb(), created_at.format("%-d %B %Y"))
}
