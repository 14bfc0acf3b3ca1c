//! Raw submit-form fields and their validation.
//!
//! Numeric fields arrive as the strings the user typed; nothing is parsed at
//! capture time. Validation happens once, on submit, and a record that fails
//! it never reaches the model layer.

use crate::errors::{AppError, AppResult};
use crate::models::WorkoutKind;

#[derive(Debug, Clone)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance_km: String,
    pub duration_min: String,
    pub step_rate: Option<String>,
    pub elevation_gain: Option<String>,
}

impl WorkoutForm {
    pub fn running(distance_km: &str, duration_min: &str, step_rate: &str) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance_km: distance_km.to_string(),
            duration_min: duration_min.to_string(),
            step_rate: Some(step_rate.to_string()),
            elevation_gain: None,
        }
    }

    pub fn cycling(distance_km: &str, duration_min: &str, elevation_gain: &str) -> Self {
        Self {
            kind: WorkoutKind::Cycling,
            distance_km: distance_km.to_string(),
            duration_min: duration_min.to_string(),
            step_rate: None,
            elevation_gain: Some(elevation_gain.to_string()),
        }
    }

    /// The kind-specific third field, still raw.
    pub fn third_metric(&self) -> AppResult<&str> {
        match self.kind {
            WorkoutKind::Running => self.step_rate.as_deref().ok_or_else(|| {
                AppError::Validation("step rate is required for a running workout".to_string())
            }),
            WorkoutKind::Cycling => self.elevation_gain.as_deref().ok_or_else(|| {
                AppError::Validation(
                    "elevation gain is required for a cycling workout".to_string(),
                )
            }),
        }
    }

    pub fn third_metric_name(&self) -> &'static str {
        match self.kind {
            WorkoutKind::Running => "step rate",
            WorkoutKind::Cycling => "elevation gain",
        }
    }
}

/// Every numeric form field must be a finite, strictly positive number.
pub fn parse_positive(field: &str, raw: &str) -> AppResult<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{field} must be a number, got '{raw}'")))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::Validation(format!(
            "{field} must be a positive number, got '{raw}'"
        )));
    }
    Ok(value)
}
