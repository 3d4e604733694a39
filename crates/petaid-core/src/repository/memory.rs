//! In-Memory Storage
//!
//! `StorageBackend` over a shared map. Clones share the same map, which lets
//! a test hand one clone to a store and inspect the raw values through another.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::StorageBackend;
use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        items.remove(key);
        Ok(())
    }
}
