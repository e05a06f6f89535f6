use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::models::coordinate::CoordinateRecord;

pub type SharedStore = Arc<CoordinateStore>;

/// In-memory, insertion-ordered list of accepted coordinates.
///
/// Every operation takes the same mutex for the length of a single push, clone
/// or swap, so reads always see the result of some serial order of appends and
/// clears.
#[derive(Debug, Default)]
pub struct CoordinateStore {
    records: Mutex<Vec<CoordinateRecord>>,
}

impl CoordinateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    pub fn append(&self, record: CoordinateRecord) {
        info!(lat = record.lat, lon = record.lon, time = %record.time, "New coordinate");
        self.lock().push(record);
    }

    pub fn snapshot(&self) -> Vec<CoordinateRecord> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        let dropped = std::mem::take(&mut *self.lock());
        info!(count = dropped.len(), "All markers have been cleared");
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<CoordinateRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
