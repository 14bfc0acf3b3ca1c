//! Insertion-ordered collection of recorded workouts.
//!
//! The store is append-only within a session: entries are never edited or
//! removed individually, only replaced wholesale on hydration or dropped on
//! reset. The session controller is the only writer.

use crate::models::Workout;
use std::cmp::Ordering;

#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// Linear scan; ids are unique in practice, so at most one match.
    pub fn find_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.id == id)
    }

    /// Insertion order. This is the map-replay order and the "unsorted"
    /// list order.
    pub fn all(&self) -> &[Workout] {
        &self.workouts
    }

    /// Alternate view sorted ascending by distance. Stable, so equal
    /// distances keep their insertion order; the backing sequence is left
    /// untouched.
    pub fn sorted_by_distance(&self) -> Vec<&Workout> {
        let mut view: Vec<&Workout> = self.workouts.iter().collect();
        view.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(Ordering::Equal)
        });
        view
    }

    /// Hydration only: swap in the persisted sequence wholesale.
    pub fn replace_all(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts;
    }

    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}
