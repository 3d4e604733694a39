//! Pages
//!
//! One component per route.

mod account;
mod care_tools;
mod health_tracker;
mod info;
mod medication_reminder;
mod sign_in;
mod symptom_checker;
mod vaccination_scheduler;

pub use account::AccountPage;
pub use care_tools::CareToolsPage;
pub use health_tracker::HealthTrackerPage;
pub use info::{AboutUsPage, CommunityPage, ConsultVetPage, ContactUsPage, HomePage, PetInsurancePage};
pub use medication_reminder::MedicationReminderPage;
pub use sign_in::SignInPage;
pub use symptom_checker::SymptomCheckerPage;
pub use vaccination_scheduler::VaccinationSchedulerPage;
