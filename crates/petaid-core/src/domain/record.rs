//! Stored Record Contract
//!
//! Ties an entity to its draft type, its sort order and the way a validated
//! draft becomes a record.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::entity::{Entity, RecordId};
use crate::error::ValidationError;
use crate::form::Draft;

/// Inputs for blank drafts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftContext {
    /// Local calendar date
    pub today: NaiveDate,
    /// Health tracker pet names, in stored order
    pub pet_names: Vec<String>,
}

impl DraftContext {
    pub fn new(today: NaiveDate, pet_names: Vec<String>) -> Self {
        Self { today, pet_names }
    }

    /// First known pet, or empty
    pub fn first_pet(&self) -> String {
        self.pet_names.first().cloned().unwrap_or_default()
    }
}

/// Today's date at local midnight
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// A record kept in a local collection
pub trait Record:
    Entity<Id = RecordId> + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    type Draft: Draft;

    /// Human name of the kind, for notices and logs
    const KIND: &'static str;

    fn blank_draft(_ctx: &DraftContext) -> Self::Draft {
        Self::Draft::default()
    }

    /// Copy-on-open: the editor works on this, never on the stored record
    fn to_draft(&self) -> Self::Draft;

    /// Typed construction from a draft that passed the presence check.
    /// `base` is the stored record when editing; fields the form does not
    /// cover are carried over from it.
    fn build(id: RecordId, draft: &Self::Draft, base: Option<&Self>) -> Result<Self, ValidationError>;

    /// Display order; equal records keep insertion order
    fn compare(_a: &Self, _b: &Self) -> Ordering {
        Ordering::Equal
    }

    /// Short title used in notices
    fn title(&self) -> String;
}
