use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use time::Date;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

type Key = (Uuid, Date);

/// Async mutex per (user, day) so that read-compute-upsert of one score slot
/// never interleaves within this process.
#[derive(Default)]
pub struct DayLocks {
    slots: Mutex<HashMap<Key, Arc<AsyncMutex<()>>>>,
}

pub struct DayGuard<'a> {
    locks: &'a DayLocks,
    key: Key,
    guard: Option<OwnedMutexGuard<()>>,
}

impl DayLocks {
    pub async fn acquire(&self, user_id: Uuid, day: Date) -> DayGuard<'_> {
        let key = (user_id, day);
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
            slots.entry(key).or_default().clone()
        };
        let guard = slot.lock_owned().await;
        DayGuard {
            locks: self,
            key,
            guard: Some(guard),
        }
    }

    fn release(&self, key: &Key) {
        let mut slots = self.slots.lock().unwrap_or_else(|e| e.into_inner());
        // Only the map still holds it: nobody is inside or queued.
        if slots.get(key).is_some_and(|slot| Arc::strong_count(slot) == 1) {
            slots.remove(key);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots.lock().unwrap().len()
    }
}

impl Drop for DayGuard<'_> {
    fn drop(&mut self) {
        drop(self.guard.take());
        self.locks.release(&self.key);
    }
}
