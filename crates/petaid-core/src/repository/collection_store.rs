//! Local Collection Store
//!
//! A named record list in key/value storage: read once on load, rewritten in
//! full after every successful mutation. The in-memory copy is the source of
//! truth for the lifetime of the view; other writers are not reconciled.

use crate::domain::{Collection, Record, RecordId, Upserted};
use crate::error::{DomainError, DomainResult};

use super::traits::{Repository, StorageBackend};

#[derive(Debug, Clone)]
pub struct CollectionStore<R, S> {
    key: String,
    storage: S,
    records: Collection<R>,
}

impl<R: Record, S: StorageBackend> CollectionStore<R, S> {
    /// Read the collection under `key`; absent or unparseable content is an empty list
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = read_collection(&storage, &key);
        log::debug!("Loaded {} {} record(s) from {}", records.len(), R::KIND, key);
        Self {
            key,
            storage,
            records,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn records(&self) -> &Collection<R> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.get(id)
    }

    /// Fresh id, unique within this collection
    pub fn next_id(&self) -> RecordId {
        self.records.next_id()
    }

    /// Apply `f` to a working copy; on success adopt it and write it back.
    /// On error the stored collection is untouched.
    pub fn mutate<T>(
        &mut self,
        f: impl FnOnce(&mut Collection<R>) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let mut working = self.records.clone();
        let out = f(&mut working)?;
        working.sort();
        self.records = working;
        self.persist();
        Ok(out)
    }

    pub fn upsert(&mut self, record: R) -> Upserted {
        let outcome = self.records.upsert(record);
        self.persist();
        outcome
    }

    pub fn remove(&mut self, id: &RecordId) -> DomainResult<R> {
        let removed = self.records.remove(id)?;
        self.persist();
        Ok(removed)
    }

    /// Drop every record and the storage key
    pub fn clear(&mut self) {
        self.records = Collection::new();
        if let Err(e) = self.storage.remove_item(&self.key) {
            log::warn!("Failed to clear {}: {}", self.key, e);
        }
    }

    /// Re-read from storage, discarding the in-memory copy
    pub fn reload(&mut self) {
        self.records = read_collection(&self.storage, &self.key);
    }

    /// Serialize and write the whole collection. Failures are logged only.
    fn persist(&self) {
        match serde_json::to_string(&self.records) {
            Ok(json) => {
                if let Err(e) = self.storage.set_item(&self.key, &json) {
                    log::error!("Failed to write {}: {}", self.key, e);
                }
            }
            Err(e) => log::error!("Failed to serialize {}: {}", self.key, e),
        }
    }
}

fn read_collection<R: Record, S: StorageBackend>(storage: &S, key: &str) -> Collection<R> {
    let Some(raw) = storage.get_item(key) else {
        return Collection::new();
    };
    match serde_json::from_str::<Collection<R>>(&raw) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("Ignoring unreadable {} collection under {}: {}", R::KIND, key, e);
            Collection::new()
        }
    }
}

impl<R: Record, S: StorageBackend> Repository<R> for CollectionStore<R, S> {
    fn create(&mut self, entity: R) -> DomainResult<R> {
        let created = entity.clone();
        self.mutate(|records| records.insert(entity))?;
        Ok(created)
    }

    fn find_by_id(&self, id: &RecordId) -> Option<R> {
        self.records.get(id).cloned()
    }

    fn list(&self) -> Vec<R> {
        self.records.as_slice().to_vec()
    }

    fn update(&mut self, entity: R) -> DomainResult<R> {
        if !self.records.contains(entity.id()) {
            return Err(DomainError::not_found(R::KIND, entity.id()));
        }
        let updated = entity.clone();
        self.mutate(|records| records.replace(entity))?;
        Ok(updated)
    }

    fn delete(&mut self, id: &RecordId) -> DomainResult<()> {
        self.remove(id).map(|_| ())
    }
}
