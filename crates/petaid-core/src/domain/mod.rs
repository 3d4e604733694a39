//! Domain Layer
//!
//! Record types, their drafts and the in-memory ordered collection.
//! This layer has no storage or browser dependencies.

mod collection;
mod entity;
pub mod fields;
mod health;
mod pet;
mod profile;
mod record;
mod reminder;
mod vaccination;

pub use collection::{Collection, Upserted};
pub use entity::{Entity, RecordId};
pub use health::{ActivityLevel, HealthEntry, HealthEntryDraft, ACTIVITY_OPTIONS};
pub use pet::{Pet, PetDraft, Species, SPECIES_OPTIONS};
pub use profile::UserProfile;
pub use record::{local_today, DraftContext, Record};
pub use reminder::{Frequency, MedicationReminder, ReminderDraft, FREQUENCY_OPTIONS};
pub use vaccination::{ScheduleDraft, VaccinationSchedule};
