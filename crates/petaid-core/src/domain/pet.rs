//! Pet Entity
//!
//! A pet profile. Health tracker pets also own their health log.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::collection::Collection;
use super::entity::{Entity, RecordId};
use super::fields::{self, blank_none};
use super::health::HealthEntry;
use super::record::Record;
use crate::error::ValidationError;
use crate::form::{Draft, FieldKind, FieldSpec, FieldValue};

/// Species only drives the icon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Dog,
    Cat,
    Bird,
    #[serde(other)]
    Other,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Bird => "bird",
            Species::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "dog" => Species::Dog,
            "cat" => Species::Cat,
            "bird" => Species::Bird,
            _ => Species::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Species::Dog => "Dog",
            Species::Cat => "Cat",
            Species::Bird => "Bird",
            Species::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Species::Dog => "🐶",
            Species::Cat => "🐱",
            Species::Bird => "🐦",
            Species::Other => "🐾",
        }
    }
}

pub const SPECIES_OPTIONS: &[(&str, &str)] = &[
    ("dog", "Dog"),
    ("cat", "Cat"),
    ("bird", "Bird"),
    ("other", "Other"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: RecordId,
    pub name: String,
    pub species: Species,
    #[serde(default, with = "blank_none")]
    pub breed: Option<String>,
    #[serde(default, with = "blank_none")]
    pub birth_date: Option<NaiveDate>,
    /// Newest first
    #[serde(default, skip_serializing_if = "Collection::is_empty")]
    pub health_entries: Collection<HealthEntry>,
}

impl Pet {
    pub fn new(id: RecordId, name: impl Into<String>, species: Species) -> Self {
        Self {
            id,
            name: name.into(),
            species,
            breed: None,
            birth_date: None,
            health_entries: Collection::new(),
        }
    }

    /// Most recent logged weight
    pub fn latest_weight(&self) -> Option<f64> {
        self.health_entries.first().map(|entry| entry.weight)
    }
}

impl Entity for Pet {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetDraft {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub birth_date: String,
}

const PET_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        label: "Pet name",
        placeholder: "Pet Name",
        kind: FieldKind::Text,
        required: true,
    },
    FieldSpec {
        name: "species",
        label: "Species",
        placeholder: "Select Species",
        kind: FieldKind::Select(SPECIES_OPTIONS),
        required: true,
    },
    FieldSpec {
        name: "breed",
        label: "Breed",
        placeholder: "Breed (Optional)",
        kind: FieldKind::Text,
        required: false,
    },
    FieldSpec {
        name: "birthDate",
        label: "Birth date",
        placeholder: "Birth Date (Optional)",
        kind: FieldKind::Date,
        required: false,
    },
];

impl Draft for PetDraft {
    const ENTITY: &'static str = "pet";

    fn schema() -> &'static [FieldSpec] {
        PET_FIELDS
    }

    fn get(&self, field: &str) -> FieldValue {
        let value = match field {
            "name" => &self.name,
            "species" => &self.species,
            "breed" => &self.breed,
            "birthDate" => &self.birth_date,
            _ => return FieldValue::text(""),
        };
        FieldValue::text(value)
    }

    fn set(&mut self, field: &str, value: FieldValue) {
        let slot = match field {
            "name" => &mut self.name,
            "species" => &mut self.species,
            "breed" => &mut self.breed,
            "birthDate" => &mut self.birth_date,
            _ => return,
        };
        *slot = value.as_text();
    }
}

impl Record for Pet {
    type Draft = PetDraft;

    const KIND: &'static str = "pet";

    fn to_draft(&self) -> PetDraft {
        PetDraft {
            name: self.name.clone(),
            species: self.species.as_str().to_string(),
            breed: self.breed.clone().unwrap_or_default(),
            birth_date: fields::format_optional_date(&self.birth_date),
        }
    }

    fn build(id: RecordId, draft: &PetDraft, base: Option<&Self>) -> Result<Self, ValidationError> {
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            species: Species::from_str(&draft.species),
            breed: fields::optional_text(&draft.breed),
            birth_date: fields::parse_optional_date("Birth date", &draft.birth_date)?,
            health_entries: base.map(|pet| pet.health_entries.clone()).unwrap_or_default(),
        })
    }

    fn title(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pet_creation() {
        let pet = Pet::new(RecordId::from("1"), "Biscuit", Species::Dog);
        assert_eq!(pet.id().as_str(), "1");
        assert!(pet.health_entries.is_empty());
        assert!(pet.latest_weight().is_none());
    }

    #[test]
    fn test_unknown_species_reads_as_other() {
        let pet: Pet =
            serde_json::from_str(r#"{"id":"7","name":"Shelly","species":"turtle"}"#).unwrap();
        assert_eq!(pet.species, Species::Other);
        assert_eq!(pet.breed, None);
        assert_eq!(pet.birth_date, None);
    }

    #[test]
    fn test_draft_round_trip_keeps_health_log() {
        let mut pet = Pet::new(RecordId::from("1"), "Mochi", Species::Cat);
        pet.health_entries
            .insert(HealthEntry::new(
                RecordId::from("10"),
                NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
                4.2,
            ))
            .unwrap();

        let mut draft = pet.to_draft();
        assert_eq!(draft.species, "cat");
        draft.set("breed", FieldValue::text(" Siamese "));

        let rebuilt = Pet::build(pet.id.clone(), &draft, Some(&pet)).unwrap();
        assert_eq!(rebuilt.breed.as_deref(), Some("Siamese"));
        assert_eq!(rebuilt.health_entries.len(), 1);
    }

    #[test]
    fn test_missing_name_and_species() {
        let err = PetDraft::default().check_required().unwrap_err();
        assert_eq!(err.to_string(), "Pet name and Species are required.");
    }
}
