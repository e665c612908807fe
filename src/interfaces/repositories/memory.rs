use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{entities::candidate::Candidate, errors::AppError};
use super::candidate::CandidateStore;

/// In-memory candidate store. A single mutex guards both the id counter
/// and the record map, so concurrent requests can neither receive the
/// same id nor overwrite each other's record.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    next_id: u64,
    records: BTreeMap<u64, Candidate>,
}

impl Default for StoreInner {
    fn default() -> Self {
        StoreInner {
            next_id: 1,
            records: BTreeMap::new(),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CandidateStore for MemoryStore {
    async fn allocate_id(&self) -> Result<u64, AppError> {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        Ok(id)
    }

    async fn put(&self, id: u64, candidate: Candidate) -> Result<(), AppError> {
        self.inner.lock().records.insert(id, candidate);
        Ok(())
    }

    async fn get(&self, id: u64) -> Result<Option<Candidate>, AppError> {
        Ok(self.inner.lock().records.get(&id).cloned())
    }

    async fn delete(&self, id: u64) -> Result<Option<Candidate>, AppError> {
        Ok(self.inner.lock().records.remove(&id))
    }

    async fn list(&self) -> Result<Vec<Candidate>, AppError> {
        Ok(self.inner.lock().records.values().cloned().collect())
    }
}
