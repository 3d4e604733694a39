//! Derived Views
//!
//! Presentation-only values computed from stored records on every render.
//! Nothing here mutates a record.

use chrono::NaiveDate;

use crate::domain::{Collection, Pet, VaccinationSchedule};

/// Upper bound (inclusive) of the "due soon" window, in days
pub const DUE_SOON_DAYS: i64 = 7;

pub const NO_DUE_DATE: &str = "No next due date set.";

/// Calendar days from `today` to `due`; negative when `due` is in the past
pub fn days_until(today: NaiveDate, due: NaiveDate) -> i64 {
    (due - today).num_days()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueTier {
    Overdue,
    DueToday,
    DueSoon,
    DueLater,
}

impl DueTier {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => DueTier::Overdue,
            0 => DueTier::DueToday,
            d if d <= DUE_SOON_DAYS => DueTier::DueSoon,
            _ => DueTier::DueLater,
        }
    }

    /// CSS modifier; today shares the due-soon colour
    pub fn css_class(&self) -> &'static str {
        match self {
            DueTier::Overdue => "due-overdue",
            DueTier::DueToday | DueTier::DueSoon => "due-soon",
            DueTier::DueLater => "due-later",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueStatus {
    pub days: i64,
    pub tier: DueTier,
}

impl DueStatus {
    pub fn compute(today: NaiveDate, due: NaiveDate) -> Self {
        let days = days_until(today, due);
        Self {
            days,
            tier: DueTier::from_days(days),
        }
    }

    pub fn label(&self) -> String {
        match self.tier {
            DueTier::Overdue => format!("{} days overdue", -self.days),
            DueTier::DueToday => "Due today".to_string(),
            DueTier::DueSoon | DueTier::DueLater => format!("{} days", self.days),
        }
    }
}

/// `None` when the schedule has no next due date
pub fn schedule_due_status(schedule: &VaccinationSchedule, today: NaiveDate) -> Option<DueStatus> {
    schedule
        .next_due_date
        .map(|due| DueStatus::compute(today, due))
}

/// Badge text for a schedule, including the no-date case
pub fn schedule_due_label(schedule: &VaccinationSchedule, today: NaiveDate) -> String {
    schedule_due_status(schedule, today)
        .map(|status| status.label())
        .unwrap_or_else(|| NO_DUE_DATE.to_string())
}

/// Pet names in stored order, for pet pickers and blank drafts
pub fn pet_names(pets: &Collection<Pet>) -> Vec<String> {
    pets.iter().map(|pet| pet.name.clone()).collect()
}

/// Short human date, e.g. "Mar 5, 2024"
pub fn display_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Whole years since `birth`, for pet cards
pub fn age_years(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(birth)
}
