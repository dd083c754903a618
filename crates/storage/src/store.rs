use std::sync::{Arc, PoisonError, RwLock};

use crate::models::Snapshot;

/// Holds the one authoritative snapshot. Readers get a cheap `Arc` clone;
/// the writer swaps in a whole new snapshot.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Arc<Snapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&snapshot);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_starts_with_empty_snapshot() {
        let store = SnapshotStore::new();
        let snapshot = store.current();
        assert!(snapshot.is_empty());
        assert!(snapshot.lifters.is_empty());
    }

    #[test]
    fn test_replace_swaps_whole_snapshot() {
        let store = SnapshotStore::new();
        let before = store.current();

        let installed = store.replace(Snapshot {
            federation: "IPF".to_string(),
            last_update: Some(Utc::now()),
            ..Default::default()
        });

        assert!(Arc::ptr_eq(&installed, &store.current()));
        assert!(before.is_empty());
        assert_eq!(store.current().federation, "IPF");
    }
}
