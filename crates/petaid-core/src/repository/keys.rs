//! Storage Keys
//!
//! Fixed local storage keys. There is no schema version and no migration.

/// Health tracker pets, with nested health entries
pub const TRACKER_PETS: &str = "petsHealthTracker";
pub const MEDICATION_REMINDERS: &str = "medicationReminders";
pub const VACCINATION_SCHEDULES: &str = "vaccinationSchedules";
/// Pets managed from the account page
pub const ACCOUNT_PETS: &str = "userPets";
pub const AUTH_TOKEN: &str = "userAuthToken";
pub const USER_PROFILE: &str = "userData";
