//! Application State Store
//!
//! Browser-backed collections held in a `reactive_stores` store so each page
//! only re-renders for the collection it reads.

use leptos::prelude::*;
use petaid_core::domain::{MedicationReminder, Pet, VaccinationSchedule};
use petaid_core::repository::{keys, CollectionStore, StorageBackend};
use petaid_core::{DomainError, DomainResult};
use reactive_stores::Store;

/// `StorageBackend` over `window.localStorage`. Zero-sized so it can live in
/// signals; the handle is looked up on each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        let storage = Self::local()
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> DomainResult<()> {
        let storage = Self::local()
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".into()))?;
        storage
            .remove_item(key)
            .map_err(|e| DomainError::Storage(format!("{:?}", e)))
    }
}

pub type Pets = CollectionStore<Pet, BrowserStorage>;
pub type Reminders = CollectionStore<MedicationReminder, BrowserStorage>;
pub type Schedules = CollectionStore<VaccinationSchedule, BrowserStorage>;

/// All persisted collections
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Health tracker pets (the pet picker source for the other tools)
    pub tracker_pets: Pets,
    /// Pets listed on the account page
    pub account_pets: Pets,
    pub reminders: Reminders,
    pub schedules: Schedules,
}

impl AppState {
    pub fn load() -> Self {
        Self {
            tracker_pets: CollectionStore::load(BrowserStorage, keys::TRACKER_PETS),
            account_pets: CollectionStore::load(BrowserStorage, keys::ACCOUNT_PETS),
            reminders: CollectionStore::load(BrowserStorage, keys::MEDICATION_REMINDERS),
            schedules: CollectionStore::load(BrowserStorage, keys::VACCINATION_SCHEDULES),
        }
    }
}

pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Tracker pet names, for pet pickers and blank drafts
pub fn tracker_pet_names(store: &AppStore) -> Vec<String> {
    petaid_core::derived::pet_names(store.tracker_pets().read().records())
}

/// Account pets were removed from storage at sign-out; drop the stale copy
pub fn store_reload_account_pets(store: &AppStore) {
    store.account_pets().write().reload();
}
