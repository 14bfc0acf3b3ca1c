//! Session orchestration.
//!
//! One controller instance is one browsing session: it owns the store and
//! the persistence adapter, reacts to inbound events, and asks the UI port
//! for renders. All operations run to completion synchronously; the store
//! has no other writer.

use super::form::{self, WorkoutForm};
use crate::errors::{AppError, AppResult};
use crate::models::{Coordinates, Workout, WorkoutKind};
use crate::storage::{PersistenceAdapter, StorageMedium};
use crate::store::WorkoutStore;
use crate::ui::UiPort;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionPhase {
    AwaitingLocation,
    FormOpen { pending: Coordinates },
}

pub struct SessionController<M, U> {
    store: WorkoutStore,
    adapter: PersistenceAdapter<M>,
    ui: U,
    phase: SessionPhase,
    sorted_by_distance: bool,
}

impl<M: StorageMedium, U: UiPort> SessionController<M, U> {
    pub fn new(medium: M, ui: U) -> Self {
        Self {
            store: WorkoutStore::new(),
            adapter: PersistenceAdapter::new(medium),
            ui,
            phase: SessionPhase::AwaitingLocation,
            sorted_by_distance: false,
        }
    }

    /// Session start: hydrate from storage and render one sidebar entry per
    /// stored workout, in stored order. Map markers wait for
    /// [`Self::on_map_ready`]. A storage read error degrades to an empty
    /// session; durability problems are never fatal.
    pub fn on_init(&mut self) {
        match self.adapter.load() {
            Ok(workouts) if !workouts.is_empty() => {
                self.store.replace_all(workouts);
                for workout in self.store.all() {
                    self.ui.render_sidebar_entry(workout);
                }
                tracing::debug!(workouts = self.store.len(), "session hydrated");
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("could not read stored workouts: {e}"),
        }
    }

    /// The map collaborator became ready: replay a marker for every workout
    /// in the store's current order.
    pub fn on_map_ready(&mut self) {
        for workout in self.store.all() {
            self.ui.render_marker(workout);
        }
    }

    pub fn on_location_picked(&mut self, coords: Coordinates) {
        self.phase = SessionPhase::FormOpen { pending: coords };
        self.ui.show_form();
    }

    pub fn on_cancel(&mut self) {
        self.phase = SessionPhase::AwaitingLocation;
        self.ui.hide_form_and_clear();
    }

    /// Validate the raw form, construct the variant, append, render, and
    /// persist. On a validation failure nothing is mutated and the form
    /// stays open. A failed persist is logged and swallowed: the in-memory
    /// record stands, only durability is lost. Returns the new workout's id.
    pub fn on_submit(&mut self, form: &WorkoutForm) -> AppResult<String> {
        let SessionPhase::FormOpen { pending } = self.phase else {
            return Err(AppError::Validation(
                "no location picked for this workout".to_string(),
            ));
        };

        let distance_km = form::parse_positive("distance", &form.distance_km)?;
        let duration_min = form::parse_positive("duration", &form.duration_min)?;
        let third = form::parse_positive(form.third_metric_name(), form.third_metric()?)?;

        let workout = match form.kind {
            WorkoutKind::Running => Workout::running(pending, distance_km, duration_min, third),
            WorkoutKind::Cycling => Workout::cycling(pending, distance_km, duration_min, third),
        };
        let id = workout.id.clone();

        self.store.append(workout);
        if let Some(appended) = self.store.all().last() {
            self.ui.render_marker(appended);
            self.ui.render_sidebar_entry(appended);
        }

        self.phase = SessionPhase::AwaitingLocation;
        self.ui.hide_form_and_clear();

        if let Err(e) = self.adapter.save(&self.store) {
            tracing::warn!("workout recorded but not persisted: {e}");
        }

        Ok(id)
    }

    /// A sidebar entry was clicked. Unknown ids are a silent no-op: the
    /// render may be stale.
    pub fn on_workout_selected(&mut self, id: &str) {
        match self.store.find_by_id_mut(id) {
            Some(workout) => {
                workout.record_click();
                let coords = workout.coords;
                self.ui.recenter_map(coords);
            }
            None => tracing::debug!(id, "selected workout not in store"),
        }
    }

    /// Flip between insertion order and the by-distance view and re-render
    /// the sidebar. Toggling twice restores both the order and the flag.
    pub fn on_sort_toggle(&mut self) {
        self.sorted_by_distance = !self.sorted_by_distance;
        self.ui.clear_sidebar_entries();
        if self.sorted_by_distance {
            for workout in self.store.sorted_by_distance() {
                self.ui.render_sidebar_entry(workout);
            }
        } else {
            for workout in self.store.all() {
                self.ui.render_sidebar_entry(workout);
            }
        }
    }

    /// Drop everything: persisted snapshot, in-memory store, pending state.
    pub fn on_reset(&mut self) {
        if let Err(e) = self.adapter.clear() {
            tracing::warn!("could not clear stored workouts: {e}");
        }
        self.store.clear();
        self.phase = SessionPhase::AwaitingLocation;
        self.sorted_by_distance = false;
        self.ui.reload_shell();
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn adapter(&self) -> &PersistenceAdapter<M> {
        &self.adapter
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted_by_distance
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }
}
