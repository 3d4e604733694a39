//! Vaccination Schedule Entity
//!
//! A shot given (or planned) for a pet, with an optional next due date.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, RecordId};
use super::fields::{self, blank_none};
use super::record::{DraftContext, Record};
use crate::error::ValidationError;
use crate::form::{Draft, FieldKind, FieldSpec, FieldValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationSchedule {
    pub id: RecordId,
    pub pet_name: String,
    pub vaccine_name: String,
    pub vaccination_date: NaiveDate,
    #[serde(default, with = "blank_none")]
    pub next_due_date: Option<NaiveDate>,
    /// Administered
    #[serde(default)]
    pub is_done: bool,
    #[serde(default, with = "blank_none")]
    pub notes: Option<String>,
}

impl Entity for VaccinationSchedule {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleDraft {
    pub pet_name: String,
    pub vaccine_name: String,
    pub vaccination_date: String,
    pub next_due_date: String,
    pub is_done: bool,
    pub notes: String,
}

const SCHEDULE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "petName",
        label: "Pet",
        placeholder: "Select Pet",
        kind: FieldKind::PetName,
        required: true,
    },
    FieldSpec {
        name: "vaccineName",
        label: "Vaccine name",
        placeholder: "Vaccine Name (e.g., Rabies, DHPP)",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "vaccinationDate",
        label: "Vaccination date",
        placeholder: "Vaccination Date",
        kind: FieldKind::Date,
        required: true,
    },
    FieldSpec {
        name: "nextDueDate",
        label: "Next due date",
        placeholder: "Next Due Date (Optional)",
        kind: FieldKind::Date,
        required: false,
    },
    FieldSpec {
        name: "isDone",
        label: "Mark as administered",
        placeholder: "",
        kind: FieldKind::Checkbox,
        required: false,
    },
    FieldSpec {
        name: "notes",
        label: "Notes",
        placeholder: "Notes (e.g., vet clinic, batch number)",
        kind: FieldKind::TextArea,
        required: false,
    },
];

impl Draft for ScheduleDraft {
    const ENTITY: &'static str = "vaccination schedule";

    fn schema() -> &'static [FieldSpec] {
        SCHEDULE_FIELDS
    }

    fn get(&self, field: &str) -> FieldValue {
        let value = match field {
            "isDone" => return FieldValue::Flag(self.is_done),
            "petName" => &self.pet_name,
            "vaccineName" => &self.vaccine_name,
            "vaccinationDate" => &self.vaccination_date,
            "nextDueDate" => &self.next_due_date,
            "notes" => &self.notes,
            _ => return FieldValue::text(""),
        };
        FieldValue::text(value)
    }

    fn set(&mut self, field: &str, value: FieldValue) {
        if field == "isDone" {
            self.is_done = value.as_flag();
            return;
        }
        let slot = match field {
            "petName" => &mut self.pet_name,
            "vaccineName" => &mut self.vaccine_name,
            "vaccinationDate" => &mut self.vaccination_date,
            "nextDueDate" => &mut self.next_due_date,
            "notes" => &mut self.notes,
            _ => return,
        };
        *slot = value.as_text();
    }
}

impl Record for VaccinationSchedule {
    type Draft = ScheduleDraft;

    const KIND: &'static str = "vaccination schedule";

    fn blank_draft(ctx: &DraftContext) -> ScheduleDraft {
        ScheduleDraft {
            pet_name: ctx.first_pet(),
            vaccination_date: fields::format_date(&ctx.today),
            ..Default::default()
        }
    }

    fn to_draft(&self) -> ScheduleDraft {
        ScheduleDraft {
            pet_name: self.pet_name.clone(),
            vaccine_name: self.vaccine_name.clone(),
            vaccination_date: fields::format_date(&self.vaccination_date),
            next_due_date: fields::format_optional_date(&self.next_due_date),
            is_done: self.is_done,
            notes: self.notes.clone().unwrap_or_default(),
        }
    }

    fn build(
        id: RecordId,
        draft: &ScheduleDraft,
        _base: Option<&Self>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            pet_name: draft.pet_name.trim().to_string(),
            vaccine_name: draft.vaccine_name.trim().to_string(),
            vaccination_date: fields::parse_date("Vaccination date", &draft.vaccination_date)?,
            next_due_date: fields::parse_optional_date("Next due date", &draft.next_due_date)?,
            is_done: draft.is_done,
            notes: fields::optional_text(&draft.notes),
        })
    }

    /// Earliest vaccination first
    fn compare(a: &Self, b: &Self) -> Ordering {
        a.vaccination_date.cmp(&b.vaccination_date)
    }

    fn title(&self) -> String {
        self.vaccine_name.clone()
    }
}
