//! Record Editor
//!
//! Create/edit workflow shared by every care-tool form. The editor owns a
//! draft copied on open; the stored collection only changes on a successful
//! submit, after which the editor closes and the draft is dropped.

use crate::domain::{Collection, DraftContext, Record, RecordId, Upserted};
use crate::error::{DomainError, DomainResult};
use crate::form::{Draft, FieldValue};
use crate::repository::{CollectionStore, StorageBackend};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(RecordId),
}

/// Stored record plus whether it was new
#[derive(Debug, Clone, PartialEq)]
pub struct Submitted<R> {
    pub record: R,
    pub outcome: Upserted,
}

#[derive(Debug, Clone, PartialEq)]
struct OpenDraft<D> {
    mode: EditorMode,
    draft: D,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordEditor<R: Record> {
    open: Option<OpenDraft<R::Draft>>,
}

impl<R: Record> Default for RecordEditor<R> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<R: Record> RecordEditor<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_create(&mut self, ctx: &DraftContext) {
        self.open = Some(OpenDraft {
            mode: EditorMode::Create,
            draft: R::blank_draft(ctx),
        });
    }

    pub fn open_edit(&mut self, record: &R) {
        self.open = Some(OpenDraft {
            mode: EditorMode::Edit(record.id().clone()),
            draft: record.to_draft(),
        });
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn mode(&self) -> Option<&EditorMode> {
        self.open.as_ref().map(|open| &open.mode)
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode(), Some(EditorMode::Edit(_)))
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        self.open.as_ref().map(|open| &open.draft)
    }

    pub fn field(&self, name: &str) -> FieldValue {
        self.draft()
            .map(|draft| draft.get(name))
            .unwrap_or_else(|| FieldValue::text(""))
    }

    /// No-op while closed
    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        if let Some(open) = self.open.as_mut() {
            open.draft.set(name, value);
        }
    }

    /// Close without writing
    pub fn cancel(&mut self) {
        self.open = None;
    }

    /// Validate the draft and build the record it describes, without storing it
    pub fn prepare(&self, records: &Collection<R>) -> DomainResult<R> {
        let open = self.open.as_ref().ok_or(DomainError::EditorClosed)?;
        open.draft.check_required()?;
        let (id, base) = match &open.mode {
            EditorMode::Create => (records.next_id(), None),
            EditorMode::Edit(id) => (id.clone(), records.get(id)),
        };
        Ok(R::build(id, &open.draft, base)?)
    }

    /// Upsert into an in-memory collection (e.g. a pet's health log)
    pub fn submit_into(&mut self, records: &mut Collection<R>) -> DomainResult<Submitted<R>> {
        let record = self.prepare(records)?;
        let outcome = records.upsert(record.clone());
        self.cancel();
        Ok(Submitted { record, outcome })
    }

    /// Upsert into a persisted collection
    pub fn submit<S: StorageBackend>(
        &mut self,
        store: &mut CollectionStore<R, S>,
    ) -> DomainResult<Submitted<R>> {
        let record = self.prepare(store.records())?;
        let outcome = store.upsert(record.clone());
        self.cancel();
        log::info!("{} {} {:?}", R::KIND, record.id(), outcome);
        Ok(Submitted { record, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Pet, Species};
    use crate::repository::{keys, MemoryStorage};
    use chrono::NaiveDate;

    fn ctx() -> DraftContext {
        DraftContext::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), vec![])
    }

    #[test]
    fn test_draft_is_a_copy() {
        let mut store: CollectionStore<Pet, _> = CollectionStore::load(MemoryStorage::new(), keys::TRACKER_PETS);
        store.upsert(Pet::new(RecordId::from("1"), "Rex", Species::Dog));

        let mut editor = RecordEditor::<Pet>::new();
        editor.open_edit(store.get(&RecordId::from("1")).unwrap());
        editor.set_field("name", FieldValue::text("Max"));

        assert_eq!(store.get(&RecordId::from("1")).unwrap().name, "Rex");
        assert!(editor.is_editing());

        editor.cancel();
        assert!(!editor.is_open());
        assert_eq!(store.get(&RecordId::from("1")).unwrap().name, "Rex");
    }

    #[test]
    fn test_failed_submit_keeps_editor_open() {
        let mut store: CollectionStore<Pet, _> = CollectionStore::load(MemoryStorage::new(), keys::TRACKER_PETS);
        let mut editor = RecordEditor::<Pet>::new();
        editor.open_create(&ctx());
        editor.set_field("name", FieldValue::text("Rex"));

        let err = editor.submit(&mut store).unwrap_err();
        assert!(err.is_validation());
        assert!(editor.is_open());
        assert_eq!(editor.field("name"), FieldValue::text("Rex"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_submit_closes_and_resets() {
        let mut store: CollectionStore<Pet, _> = CollectionStore::load(MemoryStorage::new(), keys::TRACKER_PETS);
        let mut editor = RecordEditor::<Pet>::new();
        editor.open_create(&ctx());
        editor.set_field("name", FieldValue::text("Rex"));
        editor.set_field("species", FieldValue::text("dog"));

        let submitted = editor.submit(&mut store).unwrap();
        assert_eq!(submitted.outcome, Upserted::Created);
        assert!(!editor.is_open());
        assert!(editor.draft().is_none());

        editor.open_create(&ctx());
        assert_eq!(editor.field("name"), FieldValue::text(""));
    }

    #[test]
    fn test_submit_while_closed() {
        let mut records = Collection::<Pet>::new();
        let mut editor = RecordEditor::<Pet>::new();
        assert_eq!(editor.submit_into(&mut records), Err(DomainError::EditorClosed));
    }
}
