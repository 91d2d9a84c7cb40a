//! Per-entity async locks serializing regenerations of the same entity.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Keyed mutexes, one per entity id, created on first use and removed once
/// no regeneration holds or awaits them.
#[derive(Debug, Default)]
pub struct EntityLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

/// Exclusive access to one entity. Dropping it releases the lock and prunes
/// the entry when nobody else is waiting on it.
#[derive(Debug)]
pub struct EntityGuard<'a> {
    locks: &'a DashMap<String, Arc<Mutex<()>>>,
    entity_id: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for EntityGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        // Waiters hold their own clone of the Arc, so a count of one means
        // the map is the only owner. The shard lock makes the check atomic
        // with respect to `acquire`.
        self.locks
            .remove_if(&self.entity_id, |_, lock| Arc::strong_count(lock) == 1);
    }
}

impl EntityLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `entity_id`.
    pub async fn acquire(&self, entity_id: &str) -> EntityGuard<'_> {
        // Clone the Arc out so the DashMap shard is not held across the await.
        let lock = self
            .locks
            .entry(entity_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock_owned().await;
        EntityGuard {
            locks: &self.locks,
            entity_id: entity_id.to_string(),
            guard: Some(guard),
        }
    }

    /// Whether a regeneration currently holds the entity's lock.
    pub fn is_locked(&self, entity_id: &str) -> bool {
        self.locks
            .get(entity_id)
            .is_some_and(|lock| lock.try_lock().is_err())
    }

    /// Number of entities with a live lock entry.
    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}
