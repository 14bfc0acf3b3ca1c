use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Opaque workout id: creation timestamp in milliseconds plus a process-wide
/// monotonic suffix, so two workouts created within the same millisecond
/// still get distinct ids.
pub fn next_id(created_at: DateTime<Utc>) -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", created_at.timestamp_millis(), seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_within_the_same_instant() {
        let now = Utc::now();
        let ids: HashSet<String> = (0..1000).map(|_| next_id(now)).collect();
        assert_eq!(ids.len(), 1000);
    }
}
