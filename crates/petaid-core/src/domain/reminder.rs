//! Medication Reminder Entity
//!
//! A dosing schedule for a pet, referenced by pet name. Nothing fires at
//! the scheduled time; the list is informational.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, RecordId};
use super::fields::{self, blank_none, hm_time};
use super::record::{DraftContext, Record};
use crate::error::ValidationError;
use crate::form::{Draft, FieldKind, FieldSpec, FieldValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Frequency {
    #[default]
    #[serde(rename = "Once a day")]
    OnceADay,
    #[serde(rename = "Twice a day")]
    TwiceADay,
    #[serde(rename = "Three times a day")]
    ThreeTimesADay,
    #[serde(rename = "Every X hours")]
    EveryXHours,
    #[serde(rename = "As needed")]
    AsNeeded,
}

impl Frequency {
    pub const ALL: [Frequency; 5] = [
        Frequency::OnceADay,
        Frequency::TwiceADay,
        Frequency::ThreeTimesADay,
        Frequency::EveryXHours,
        Frequency::AsNeeded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::OnceADay => "Once a day",
            Frequency::TwiceADay => "Twice a day",
            Frequency::ThreeTimesADay => "Three times a day",
            Frequency::EveryXHours => "Every X hours",
            Frequency::AsNeeded => "As needed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s.trim())
    }
}

pub const FREQUENCY_OPTIONS: &[(&str, &str)] = &[
    ("Once a day", "Once a day"),
    ("Twice a day", "Twice a day"),
    ("Three times a day", "Three times a day"),
    ("Every X hours", "Every X hours"),
    ("As needed", "As needed"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationReminder {
    pub id: RecordId,
    pub pet_name: String,
    pub medication_name: String,
    #[serde(default, with = "blank_none")]
    pub dosage: Option<String>,
    pub frequency: Frequency,
    #[serde(with = "hm_time")]
    pub time: NaiveTime,
    pub start_date: NaiveDate,
    #[serde(default, with = "blank_none")]
    pub notes: Option<String>,
}

impl Entity for MedicationReminder {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderDraft {
    pub pet_name: String,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub time: String,
    pub start_date: String,
    pub notes: String,
}

const REMINDER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "petName",
        label: "Pet",
        placeholder: "Select Pet",
        kind: FieldKind::PetName,
        required: true,
    },
    FieldSpec {
        name: "medicationName",
        label: "Medication",
        placeholder: "Medication Name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "dosage",
        label: "Dosage",
        placeholder: "Dosage (e.g., 1 tablet, 5ml)",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        name: "frequency",
        label: "Frequency",
        placeholder: "Select Frequency",
        kind: FieldKind::Select(FREQUENCY_OPTIONS),
        required: true,
    },
    FieldSpec {
        name: "time",
        label: "Time",
        placeholder: "Time",
        kind: FieldKind::Time,
        required: true,
    },
    FieldSpec {
        name: "startDate",
        label: "Start date",
        placeholder: "Start Date",
        kind: FieldKind::Date,
        required: true,
    },
    FieldSpec {
        name: "notes",
        label: "Notes",
        placeholder: "Notes (e.g., with food)",
        kind: FieldKind::TextArea,
        required: false,
    },
];

impl Draft for ReminderDraft {
    const ENTITY: &'static str = "medication reminder";

    fn schema() -> &'static [FieldSpec] {
        REMINDER_FIELDS
    }

    fn get(&self, field: &str) -> FieldValue {
        let value = match field {
            "petName" => &self.pet_name,
            "medicationName" => &self.medication_name,
            "dosage" => &self.dosage,
            "frequency" => &self.frequency,
            "time" => &self.time,
            "startDate" => &self.start_date,
            "notes" => &self.notes,
            _ => return FieldValue::text(""),
        };
        FieldValue::text(value)
    }

    fn set(&mut self, field: &str, value: FieldValue) {
        let slot = match field {
            "petName" => &mut self.pet_name,
            "medicationName" => &mut self.medication_name,
            "dosage" => &mut self.dosage,
            "frequency" => &mut self.frequency,
            "time" => &mut self.time,
            "startDate" => &mut self.start_date,
            "notes" => &mut self.notes,
            _ => return,
        };
        *slot = value.as_text();
    }
}

impl Record for MedicationReminder {
    type Draft = ReminderDraft;

    const KIND: &'static str = "medication reminder";

    fn blank_draft(ctx: &DraftContext) -> ReminderDraft {
        ReminderDraft {
            pet_name: ctx.first_pet(),
            frequency: Frequency::OnceADay.as_str().to_string(),
            time: "08:00".to_string(),
            start_date: fields::format_date(&ctx.today),
            ..Default::default()
        }
    }

    fn to_draft(&self) -> ReminderDraft {
        ReminderDraft {
            pet_name: self.pet_name.clone(),
            medication_name: self.medication_name.clone(),
            dosage: self.dosage.clone().unwrap_or_default(),
            frequency: self.frequency.as_str().to_string(),
            time: self.time.format(fields::TIME_FORMAT).to_string(),
            start_date: fields::format_date(&self.start_date),
            notes: self.notes.clone().unwrap_or_default(),
        }
    }

    fn build(
        id: RecordId,
        draft: &ReminderDraft,
        _base: Option<&Self>,
    ) -> Result<Self, ValidationError> {
        let frequency =
            Frequency::from_str(&draft.frequency).ok_or_else(|| ValidationError::InvalidField {
                field: "Frequency",
                reason: format!("unknown option {:?}", draft.frequency),
            })?;
        Ok(Self {
            id,
            pet_name: draft.pet_name.trim().to_string(),
            medication_name: draft.medication_name.trim().to_string(),
            dosage: fields::optional_text(&draft.dosage),
            frequency,
            time: fields::parse_time("Time", &draft.time)?,
            start_date: fields::parse_date("Start date", &draft.start_date)?,
            notes: fields::optional_text(&draft.notes),
        })
    }

    /// Earliest (start date, time) first
    fn compare(a: &Self, b: &Self) -> Ordering {
        (a.start_date, a.time).cmp(&(b.start_date, b.time))
    }

    fn title(&self) -> String {
        self.medication_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_draft_defaults() {
        let ctx = DraftContext::new(
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            vec!["Rex".into(), "Mochi".into()],
        );
        let draft = MedicationReminder::blank_draft(&ctx);
        assert_eq!(draft.pet_name, "Rex");
        assert_eq!(draft.frequency, "Once a day");
        assert_eq!(draft.time, "08:00");
        assert_eq!(draft.start_date, "2024-01-31");
    }

    #[test]
    fn test_persisted_layout_matches_form_values() {
        let json = r#"{"id":"1700000000000","petName":"Rex","medicationName":"Carprofen","dosage":"","frequency":"Twice a day","time":"19:30","startDate":"2024-02-01","notes":""}"#;
        let reminder: MedicationReminder = serde_json::from_str(json).unwrap();
        assert_eq!(reminder.frequency, Frequency::TwiceADay);
        assert_eq!(reminder.dosage, None);
        assert_eq!(serde_json::to_string(&reminder).unwrap(), json);
    }

    #[test]
    fn test_unknown_frequency_is_invalid() {
        let draft = ReminderDraft {
            pet_name: "Rex".into(),
            medication_name: "Carprofen".into(),
            frequency: "Hourly".into(),
            time: "08:00".into(),
            start_date: "2024-02-01".into(),
            ..Default::default()
        };
        assert!(draft.check_required().is_ok());
        assert!(MedicationReminder::build(RecordId::from("1"), &draft, None).is_err());
    }
}
