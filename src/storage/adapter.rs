//! Boundary between the in-memory store and the flat key-value medium.
//!
//! The whole ordered sequence of workouts is serialized as one JSON string
//! under a single fixed key, overwriting the previous snapshot on every
//! save. The adapter never holds live references into the store.

use super::medium::StorageMedium;
use crate::errors::AppResult;
use crate::models::Workout;
use crate::store::WorkoutStore;

pub const STORAGE_KEY: &str = "workouts";

pub struct PersistenceAdapter<M> {
    medium: M,
}

impl<M: StorageMedium> PersistenceAdapter<M> {
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    /// Serialize and overwrite the full snapshot. A rejected write surfaces
    /// the storage error; the in-memory store stays authoritative.
    pub fn save(&mut self, store: &WorkoutStore) -> AppResult<()> {
        let blob = serde_json::to_string(store.all())?;
        self.medium.put(STORAGE_KEY, &blob)?;
        tracing::debug!(workouts = store.len(), "snapshot persisted");
        Ok(())
    }

    /// Read the snapshot back. An absent key and an unparseable value both
    /// mean "no prior data" and hydrate to an empty sequence; only a medium
    /// read error is surfaced. Deserialization goes through the tagged
    /// variant enum, so every loaded record is a full Running/Cycling value
    /// with its derived metrics intact.
    pub fn load(&self) -> AppResult<Vec<Workout>> {
        let Some(blob) = self.medium.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&blob) {
            Ok(workouts) => Ok(workouts),
            Err(e) => {
                tracing::warn!("stored workouts unreadable, starting empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    /// Remove the snapshot entirely. Idempotent.
    pub fn clear(&mut self) -> AppResult<()> {
        self.medium.remove(STORAGE_KEY)
    }

    pub fn medium(&self) -> &M {
        &self.medium
    }
}
