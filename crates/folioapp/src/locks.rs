//! Per-collection mutual exclusion.
//!
//! Every mutation is a read-modify-write of a whole index file, so two writers on the
//! same collection would lose updates or hand out the same slug. One mutex per
//! collection serializes them; different collections proceed in parallel.
//!
//! The locks guard in-process callers only. Separate processes sharing a content
//! directory are not coordinated.

use crate::model::Collection;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct CollectionLocks {
    collections: [Mutex<()>; 3],
    profile: Mutex<()>,
}

impl CollectionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks until the caller holds `collection` exclusively.
    ///
    /// A panic in another holder poisons the mutex; the data it guards lives on disk,
    /// so the lock is simply taken over.
    pub fn lock(&self, collection: Collection) -> MutexGuard<'_, ()> {
        self.collections[collection.ordinal()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn lock_profile(&self) -> MutexGuard<'_, ()> {
        self.profile.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collections_lock_independently() {
        let locks = CollectionLocks::new();
        let _blog = locks.lock(Collection::Blog);
        assert!(locks.collections[Collection::Gallery.ordinal()]
            .try_lock()
            .is_ok());
        assert!(locks.collections[Collection::Blog.ordinal()]
            .try_lock()
            .is_err());
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let locks = CollectionLocks::new();
        std::thread::scope(|s| {
            let _ = s
                .spawn(|| {
                    let _guard = locks.lock(Collection::Projects);
                    panic!("holder died");
                })
                .join();
        });
        drop(locks.lock(Collection::Projects));
    }
}
