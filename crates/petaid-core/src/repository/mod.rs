//! Repository Layer
//!
//! Persistence of record collections in a string key/value store.

mod collection_store;
pub mod keys;
mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use collection_store::CollectionStore;
pub use memory::MemoryStorage;
pub use traits::{Repository, StorageBackend};
