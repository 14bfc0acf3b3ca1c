mod json_csv;
mod model;

pub use model::WorkoutExport;

use crate::errors::AppResult;
use crate::models::Workout;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn write(&self, workouts: &[Workout], path: &Path) -> AppResult<()> {
        let rows: Vec<WorkoutExport> = workouts.iter().map(WorkoutExport::from).collect();
        match self {
            ExportFormat::Json => json_csv::export_json(&rows, path),
            ExportFormat::Csv => json_csv::export_csv(&rows, path),
        }
    }
}
