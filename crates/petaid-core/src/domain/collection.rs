//! Ordered Record Collection
//!
//! In-memory list of records with id-based upsert/remove. Every mutation
//! re-sorts with the record's comparator (stable, so ties keep insertion
//! order). Persisted as a plain JSON array.

use serde::{Deserialize, Serialize};

use super::entity::RecordId;
use super::record::Record;
use crate::error::{DomainError, DomainResult};

/// Result of an upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Created,
    Updated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<R: Serialize> Serialize for Collection<R> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

impl<'de, R: Record> Deserialize<'de> for Collection<R> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<R>::deserialize(deserializer).map(Collection::from_records)
    }
}

impl<R> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub fn first(&self) -> Option<&R> {
        self.records.first()
    }

    pub fn into_vec(self) -> Vec<R> {
        self.records
    }
}

impl<R: Record> Collection<R> {
    /// Wrap loaded records, applying the display order
    pub fn from_records(records: Vec<R>) -> Self {
        let mut collection = Self { records };
        collection.sort();
        collection
    }

    pub fn sort(&mut self) {
        self.records.sort_by(R::compare);
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn get_mut(&mut self, id: &RecordId) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Fresh timestamp-based id, unique within this collection
    pub fn next_id(&self) -> RecordId {
        RecordId::generate_now(|candidate| self.contains(candidate))
    }

    /// Append a new record; its id must not already be present
    pub fn insert(&mut self, record: R) -> DomainResult<()> {
        if self.contains(record.id()) {
            return Err(DomainError::Storage(format!(
                "duplicate {} id {}",
                R::KIND,
                record.id()
            )));
        }
        self.records.push(record);
        self.sort();
        Ok(())
    }

    /// Replace the record with the same id
    pub fn replace(&mut self, record: R) -> DomainResult<()> {
        let slot = self
            .get_mut(record.id())
            .ok_or_else(|| DomainError::not_found(R::KIND, record.id()))?;
        *slot = record;
        self.sort();
        Ok(())
    }

    /// Replace by id if present, append otherwise
    pub fn upsert(&mut self, record: R) -> Upserted {
        match self.get_mut(record.id()) {
            Some(slot) => {
                *slot = record;
                self.sort();
                Upserted::Updated
            }
            None => {
                self.records.push(record);
                self.sort();
                Upserted::Created
            }
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> DomainResult<R> {
        let index = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DomainError::not_found(R::KIND, id))?;
        Ok(self.records.remove(index))
    }

    /// Mutate one record in place, then restore the display order
    pub fn update_with<T>(
        &mut self,
        id: &RecordId,
        f: impl FnOnce(&mut R) -> DomainResult<T>,
    ) -> DomainResult<T> {
        let record = self
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(R::KIND, id))?;
        let out = f(record)?;
        self.sort();
        Ok(out)
    }
}

impl<'a, R> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
