//! Outbound request surface of the session core.
//!
//! The core never touches a concrete map or widget library: everything it
//! wants shown goes through [`UiPort`]. The binary plugs in [`TerminalUi`];
//! the test suite plugs in a recording port.

pub mod messages;

use crate::models::{Coordinates, Workout, WorkoutDetails};
use crate::utils::formatting;
use crate::utils::table::Table;

pub trait UiPort {
    fn show_form(&mut self);
    fn hide_form_and_clear(&mut self);
    fn render_marker(&mut self, workout: &Workout);
    fn render_sidebar_entry(&mut self, workout: &Workout);
    fn clear_sidebar_entries(&mut self);
    fn recenter_map(&mut self, coords: Coordinates);
    fn reload_shell(&mut self);
}

/// Terminal rendition of the map/sidebar collaborator.
///
/// Marker and re-center requests print immediately; sidebar entries are
/// buffered so a command can lay the full list out as one table at the end.
pub struct TerminalUi {
    entries: Vec<Vec<String>>,
    map_zoom: u8,
    show_icons: bool,
}

impl TerminalUi {
    pub fn new(map_zoom: u8, show_icons: bool) -> Self {
        Self {
            entries: Vec::new(),
            map_zoom,
            show_icons,
        }
    }

    fn entry_row(&self, workout: &Workout) -> Vec<String> {
        let (metric, extra) = match workout.details {
            WorkoutDetails::Running { step_rate, pace } => (
                formatting::pace(pace),
                formatting::step_rate(step_rate),
            ),
            WorkoutDetails::Cycling {
                elevation_gain,
                speed,
            } => (
                formatting::speed(speed),
                formatting::elevation_gain(elevation_gain),
            ),
        };

        let title = if self.show_icons {
            format!("{} {}", workout.kind().icon(), workout.label)
        } else {
            workout.label.clone()
        };

        vec![
            title,
            workout.id.clone(),
            formatting::km(workout.distance_km),
            formatting::minutes(workout.duration_min),
            metric,
            extra,
        ]
    }

    pub fn has_entries(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Lay the buffered sidebar entries out as a table.
    pub fn sidebar(&self) -> String {
        let mut table = Table::new(vec![
            "WORKOUT", "ID", "DISTANCE", "DURATION", "METRIC", "DETAIL",
        ]);
        for row in &self.entries {
            table.add_row(row.clone());
        }
        table.render()
    }
}

impl UiPort for TerminalUi {
    fn show_form(&mut self) {
        tracing::debug!("input form opened");
    }

    fn hide_form_and_clear(&mut self) {
        tracing::debug!("input form hidden and cleared");
    }

    fn render_marker(&mut self, workout: &Workout) {
        let icon = if self.show_icons {
            workout.kind().icon()
        } else {
            "*"
        };
        println!("📍 {icon} {} @ {}", workout.label, workout.coords);
    }

    fn render_sidebar_entry(&mut self, workout: &Workout) {
        let row = self.entry_row(workout);
        self.entries.push(row);
    }

    fn clear_sidebar_entries(&mut self) {
        self.entries.clear();
    }

    fn recenter_map(&mut self, coords: Coordinates) {
        println!("🎯 map centered on {coords} (zoom {})", self.map_zoom);
    }

    fn reload_shell(&mut self) {
        self.entries.clear();
        messages::info("session state cleared");
    }
}
