//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations sit on browser local storage or an in-memory map.

use crate::domain::Entity;
use crate::error::DomainResult;

/// Core repository trait for CRUD operations
///
/// Generic over any Entity type. Operations are synchronous: the only
/// backend is a key/value store that answers immediately.
pub trait Repository<T: Entity> {
    /// Create a new entity
    fn create(&mut self, entity: T) -> DomainResult<T>;

    /// Find entity by ID
    fn find_by_id(&self, id: &T::Id) -> Option<T>;

    /// List all entities in display order
    fn list(&self) -> Vec<T>;

    /// Update an existing entity
    fn update(&mut self, entity: T) -> DomainResult<T>;

    /// Delete entity by ID
    fn delete(&mut self, id: &T::Id) -> DomainResult<()>;
}

/// String key/value persistence (the shape of `window.localStorage`)
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()>;

    fn remove_item(&self, key: &str) -> DomainResult<()>;
}

impl<S: StorageBackend + ?Sized> StorageBackend for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        (**self).remove_item(key)
    }
}
