//! Health Entry Entity
//!
//! One dated weight/activity log line, owned by a health tracker pet.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, RecordId};
use super::fields::{self, blank_none};
use super::record::{DraftContext, Record};
use crate::error::ValidationError;
use crate::form::{Draft, FieldKind, FieldSpec, FieldValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "Low" => Some(ActivityLevel::Low),
            "Moderate" => Some(ActivityLevel::Moderate),
            "High" => Some(ActivityLevel::High),
            _ => None,
        }
    }
}

pub const ACTIVITY_OPTIONS: &[(&str, &str)] = &[
    ("Low", "Low"),
    ("Moderate", "Moderate"),
    ("High", "High"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEntry {
    pub id: RecordId,
    pub date: NaiveDate,
    /// Kilograms
    #[serde(deserialize_with = "fields::number_or_string")]
    pub weight: f64,
    #[serde(default, with = "blank_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(default, with = "blank_none")]
    pub notes: Option<String>,
}

impl HealthEntry {
    pub fn new(id: RecordId, date: NaiveDate, weight: f64) -> Self {
        Self {
            id,
            date,
            weight,
            activity_level: None,
            notes: None,
        }
    }
}

impl Entity for HealthEntry {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthEntryDraft {
    pub date: String,
    pub weight: String,
    pub activity_level: String,
    pub notes: String,
}

const HEALTH_ENTRY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "date",
        label: "Date",
        placeholder: "Date",
        kind: FieldKind::Date,
        required: true,
    },
    FieldSpec {
        name: "weight",
        label: "Weight",
        placeholder: "Weight (kg)",
        kind: FieldKind::Number,
        required: true,
    },
    FieldSpec {
        name: "activityLevel",
        label: "Activity level",
        placeholder: "Activity Level (Optional)",
        kind: FieldKind::Select(ACTIVITY_OPTIONS),
        required: false,
    },
    FieldSpec {
        name: "notes",
        label: "Notes",
        placeholder: "Notes (Optional)",
        kind: FieldKind::TextArea,
        required: false,
    },
];

impl Draft for HealthEntryDraft {
    const ENTITY: &'static str = "health entry";

    fn schema() -> &'static [FieldSpec] {
        HEALTH_ENTRY_FIELDS
    }

    fn get(&self, field: &str) -> FieldValue {
        let value = match field {
            "date" => &self.date,
            "weight" => &self.weight,
            "activityLevel" => &self.activity_level,
            "notes" => &self.notes,
            _ => return FieldValue::text(""),
        };
        FieldValue::text(value)
    }

    fn set(&mut self, field: &str, value: FieldValue) {
        let slot = match field {
            "date" => &mut self.date,
            "weight" => &mut self.weight,
            "activityLevel" => &mut self.activity_level,
            "notes" => &mut self.notes,
            _ => return,
        };
        *slot = value.as_text();
    }
}

impl Record for HealthEntry {
    type Draft = HealthEntryDraft;

    const KIND: &'static str = "health entry";

    fn blank_draft(ctx: &DraftContext) -> HealthEntryDraft {
        HealthEntryDraft {
            date: fields::format_date(&ctx.today),
            ..Default::default()
        }
    }

    fn to_draft(&self) -> HealthEntryDraft {
        HealthEntryDraft {
            date: fields::format_date(&self.date),
            weight: fields::format_number(self.weight),
            activity_level: self
                .activity_level
                .map(|level| level.as_str().to_string())
                .unwrap_or_default(),
            notes: self.notes.clone().unwrap_or_default(),
        }
    }

    fn build(
        id: RecordId,
        draft: &HealthEntryDraft,
        _base: Option<&Self>,
    ) -> Result<Self, ValidationError> {
        let activity_level = match draft.activity_level.trim() {
            "" => None,
            raw => Some(ActivityLevel::from_str(raw).ok_or_else(|| {
                ValidationError::InvalidField {
                    field: "Activity level",
                    reason: format!("unknown option {:?}", raw),
                }
            })?),
        };
        Ok(Self {
            id,
            date: fields::parse_date("Date", &draft.date)?,
            weight: fields::parse_positive("Weight", &draft.weight)?,
            activity_level,
            notes: fields::optional_text(&draft.notes),
        })
    }

    /// Newest first
    fn compare(a: &Self, b: &Self) -> Ordering {
        b.date.cmp(&a.date)
    }

    fn title(&self) -> String {
        fields::format_date(&self.date)
    }
}
