use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

use super::*;
use crate::domain::{
    Collection, DraftContext, Frequency, HealthEntry, MedicationReminder, Pet, Record, RecordId,
    Species, Upserted, VaccinationSchedule,
};
use crate::editor::RecordEditor;
use crate::form::{Draft, FieldValue};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn reminder(id: &str, start: NaiveDate, hour: u32) -> MedicationReminder {
    MedicationReminder {
        id: RecordId::from(id),
        pet_name: "Rex".to_string(),
        medication_name: format!("Med {}", id),
        dosage: None,
        frequency: Frequency::OnceADay,
        time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        start_date: start,
        notes: None,
    }
}

fn schedule(id: &str, given: NaiveDate) -> VaccinationSchedule {
    VaccinationSchedule {
        id: RecordId::from(id),
        pet_name: "Rex".to_string(),
        vaccine_name: "Rabies".to_string(),
        vaccination_date: given,
        next_due_date: None,
        is_done: false,
        notes: None,
    }
}

fn pet_store(storage: &MemoryStorage) -> CollectionStore<Pet, MemoryStorage> {
    CollectionStore::load(storage.clone(), keys::TRACKER_PETS)
}

#[test]
fn test_missing_key_loads_empty() {
    let store = pet_store(&MemoryStorage::new());
    assert!(store.is_empty());
}

#[test]
fn test_malformed_json_loads_empty() {
    let storage = MemoryStorage::new();
    storage.set_item(keys::TRACKER_PETS, "{not json").unwrap();
    assert!(pet_store(&storage).is_empty());

    storage.set_item(keys::TRACKER_PETS, r#"{"id":"1"}"#).unwrap();
    assert!(pet_store(&storage).is_empty());
}

#[test]
fn test_create_adds_one_with_unique_id() {
    let storage = MemoryStorage::new();
    let mut store = pet_store(&storage);
    let ctx = DraftContext::new(date(2024, 1, 1), vec![]);
    let mut editor = RecordEditor::<Pet>::new();

    for name in ["Rex", "Mochi", "Kiwi"] {
        let before = store.len();
        editor.open_create(&ctx);
        editor.set_field("name", FieldValue::text(name));
        editor.set_field("species", FieldValue::text("cat"));
        editor.submit(&mut store).unwrap();
        assert_eq!(store.len(), before + 1);
    }

    let mut ids: Vec<_> = store.records().iter().map(|p| p.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn test_validation_failure_leaves_store_unchanged() {
    let storage = MemoryStorage::new();
    let mut store = pet_store(&storage);
    store.upsert(Pet::new(RecordId::from("1"), "Rex", Species::Dog));
    let persisted = storage.get_item(keys::TRACKER_PETS);

    let mut editor = RecordEditor::<Pet>::new();
    editor.open_edit(store.get(&RecordId::from("1")).unwrap());
    editor.set_field("name", FieldValue::text("  "));

    assert!(editor.submit(&mut store).is_err());
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(&RecordId::from("1")).unwrap().name, "Rex");
    assert_eq!(storage.get_item(keys::TRACKER_PETS), persisted);
}

#[test]
fn test_edit_changes_exactly_one_record() {
    let storage = MemoryStorage::new();
    let mut store = pet_store(&storage);
    store.upsert(Pet::new(RecordId::from("1"), "Rex", Species::Dog));
    store.upsert(Pet::new(RecordId::from("2"), "Mochi", Species::Cat));
    let before = store.records().clone();

    let mut editor = RecordEditor::<Pet>::new();
    editor.open_edit(store.get(&RecordId::from("2")).unwrap());
    editor.set_field("breed", FieldValue::text("Siamese"));
    editor.submit(&mut store).unwrap();

    assert_eq!(store.len(), before.len());
    let changed = before
        .iter()
        .filter(|old| store.get(&old.id) != Some(old))
        .count();
    assert_eq!(changed, 1);
}

#[test]
fn test_delete_removes_one() {
    let storage = MemoryStorage::new();
    let mut store = pet_store(&storage);
    store.upsert(Pet::new(RecordId::from("1"), "Rex", Species::Dog));
    store.upsert(Pet::new(RecordId::from("2"), "Mochi", Species::Cat));

    let removed = store.remove(&RecordId::from("1")).unwrap();
    assert_eq!(removed.name, "Rex");
    assert_eq!(store.len(), 1);
    assert!(store.get(&RecordId::from("1")).is_none());
    assert!(store.remove(&RecordId::from("1")).is_err());
}

#[test]
fn test_writes_survive_reload() {
    let storage = MemoryStorage::new();
    let mut store = pet_store(&storage);
    let mut pet = Pet::new(RecordId::from("1"), "Rex", Species::Dog);
    pet.birth_date = Some(date(2020, 2, 29));
    store.upsert(pet);
    store
        .mutate(|pets| {
            pets.update_with(&RecordId::from("1"), |pet| {
                pet.health_entries
                    .insert(HealthEntry::new(RecordId::from("9"), date(2024, 3, 3), 21.5))
            })
        })
        .unwrap();

    let reloaded = pet_store(&storage);
    assert_eq!(reloaded.records(), store.records());
    assert_eq!(reloaded.get(&RecordId::from("1")).unwrap().latest_weight(), Some(21.5));
}

#[test]
fn test_failed_mutation_is_not_applied() {
    let storage = MemoryStorage::new();
    let mut store = pet_store(&storage);
    store.upsert(Pet::new(RecordId::from("1"), "Rex", Species::Dog));

    let result = store.mutate(|pets| {
        pets.update_with(&RecordId::from("1"), |pet| {
            pet.name = "Changed".to_string();
            Ok(())
        })?;
        pets.remove(&RecordId::from("404"))
    });

    assert!(result.is_err());
    assert_eq!(store.get(&RecordId::from("1")).unwrap().name, "Rex");
}

#[test]
fn test_repository_contract() {
    let mut store: CollectionStore<VaccinationSchedule, _> =
        CollectionStore::load(MemoryStorage::new(), keys::VACCINATION_SCHEDULES);

    store.create(schedule("1", date(2024, 5, 1))).unwrap();
    assert!(store.create(schedule("1", date(2024, 5, 2))).is_err());
    assert!(store.update(schedule("2", date(2024, 5, 2))).is_err());

    let mut done = schedule("1", date(2024, 5, 1));
    done.is_done = true;
    store.update(done).unwrap();
    assert!(store.find_by_id(&RecordId::from("1")).unwrap().is_done);

    store.delete(&RecordId::from("1")).unwrap();
    assert!(store.list().is_empty());
}

#[test]
fn test_clear_removes_key() {
    let storage = MemoryStorage::new();
    let mut store = pet_store(&storage);
    store.upsert(Pet::new(RecordId::from("1"), "Rex", Species::Dog));
    store.clear();
    assert!(store.is_empty());
    assert!(storage.get_item(keys::TRACKER_PETS).is_none());
}

// ========================
// Per-entity editor flows
// ========================

/// Form values for a complete draft of each record kind, plus one editable field
trait Sample: Record + std::fmt::Debug {
    const KEY: &'static str;
    const EDIT_FIELD: &'static str;

    fn complete(variant: u8) -> Vec<(&'static str, String)>;
    fn edited(variant: u8) -> String;
}

impl Sample for Pet {
    const KEY: &'static str = keys::TRACKER_PETS;
    const EDIT_FIELD: &'static str = "breed";

    fn complete(variant: u8) -> Vec<(&'static str, String)> {
        let species = ["dog", "cat", "bird", "other"][variant as usize % 4];
        vec![("name", format!("Pet {}", variant)), ("species", species.to_string())]
    }

    fn edited(variant: u8) -> String {
        format!("Breed {}", variant)
    }
}

impl Sample for MedicationReminder {
    const KEY: &'static str = keys::MEDICATION_REMINDERS;
    const EDIT_FIELD: &'static str = "time";

    fn complete(variant: u8) -> Vec<(&'static str, String)> {
        vec![
            ("petName", "Rex".to_string()),
            ("medicationName", format!("Med {}", variant)),
            ("frequency", Frequency::ALL[variant as usize % 5].as_str().to_string()),
            ("time", format!("{:02}:{:02}", variant % 24, (variant as u32 * 7) % 60)),
            ("startDate", format!("2024-01-{:02}", 1 + variant % 28)),
        ]
    }

    fn edited(variant: u8) -> String {
        format!("{:02}:30", (variant as u32 * 5) % 24)
    }
}

impl Sample for VaccinationSchedule {
    const KEY: &'static str = keys::VACCINATION_SCHEDULES;
    const EDIT_FIELD: &'static str = "vaccinationDate";

    fn complete(variant: u8) -> Vec<(&'static str, String)> {
        vec![
            ("petName", "Rex".to_string()),
            ("vaccineName", format!("Vaccine {}", variant)),
            ("vaccinationDate", format!("2024-03-{:02}", 1 + variant % 28)),
        ]
    }

    fn edited(variant: u8) -> String {
        format!("2024-04-{:02}", 1 + variant % 28)
    }
}

impl Sample for HealthEntry {
    const KEY: &'static str = "healthEntries";
    const EDIT_FIELD: &'static str = "notes";

    fn complete(variant: u8) -> Vec<(&'static str, String)> {
        vec![
            ("date", format!("2024-06-{:02}", 1 + variant % 28)),
            ("weight", format!("{}.5", 1 + variant)),
        ]
    }

    fn edited(variant: u8) -> String {
        format!("Note {}", variant)
    }
}

fn sample_ctx() -> DraftContext {
    DraftContext::new(date(2024, 1, 1), vec!["Rex".to_string()])
}

fn open_complete<R: Sample>(variant: u8) -> RecordEditor<R> {
    let mut editor = RecordEditor::<R>::new();
    editor.open_create(&sample_ctx());
    for (name, value) in R::complete(variant) {
        editor.set_field(name, FieldValue::text(value));
    }
    editor
}

fn assert_sorted<R: Record>(records: &Collection<R>) {
    assert!(records
        .as_slice()
        .windows(2)
        .all(|w| R::compare(&w[0], &w[1]) != Ordering::Greater));
}

/// Blanking any required field rejects the submit and writes nothing
fn check_required_fields<R: Sample>() {
    let storage = MemoryStorage::new();
    let mut store: CollectionStore<R, _> = CollectionStore::load(storage.clone(), R::KEY);

    for spec in R::Draft::schema().iter().filter(|spec| spec.required) {
        let mut editor = open_complete::<R>(1);
        editor.set_field(spec.name, FieldValue::text(""));

        let err = editor.submit(&mut store).unwrap_err();
        assert!(err.is_validation(), "{} accepted a blank {}", R::KIND, spec.name);
        assert!(err.to_string().contains(spec.label), "{}", err);
        assert!(editor.is_open());
        assert!(store.is_empty());
        assert!(storage.get_item(R::KEY).is_none());
    }

    open_complete::<R>(1).submit(&mut store).unwrap();
    assert_eq!(store.len(), 1);
}

/// Edit touches exactly one record, delete removes exactly that one
fn check_edit_and_delete<R: Sample>() {
    let storage = MemoryStorage::new();
    let mut store: CollectionStore<R, _> = CollectionStore::load(storage.clone(), R::KEY);
    for variant in 0..3 {
        open_complete::<R>(variant).submit(&mut store).unwrap();
    }
    let before = store.records().clone();
    let id = before.as_slice()[1].id().clone();

    let mut editor = RecordEditor::<R>::new();
    editor.open_edit(store.get(&id).unwrap());
    editor.set_field(R::EDIT_FIELD, FieldValue::text(R::edited(9)));
    let submitted = editor.submit(&mut store).unwrap();

    assert_eq!(submitted.outcome, Upserted::Updated);
    assert_eq!(store.len(), 3);
    assert_eq!(
        store.get(&id).unwrap().to_draft().get(R::EDIT_FIELD),
        FieldValue::text(R::edited(9))
    );
    let changed: Vec<_> = before
        .iter()
        .filter(|old| store.get(old.id()) != Some(*old))
        .map(|old| old.id().clone())
        .collect();
    assert_eq!(changed, vec![id.clone()]);
    assert_sorted(store.records());

    store.remove(&id).unwrap();
    assert_eq!(store.len(), 2);
    assert!(store.get(&id).is_none());

    let reloaded: CollectionStore<R, _> = CollectionStore::load(storage, R::KEY);
    assert_eq!(reloaded.records(), store.records());
}

#[test]
fn test_required_fields_every_record_kind() {
    check_required_fields::<Pet>();
    check_required_fields::<MedicationReminder>();
    check_required_fields::<VaccinationSchedule>();
    check_required_fields::<HealthEntry>();
}

#[test]
fn test_edit_and_delete_every_record_kind() {
    check_edit_and_delete::<Pet>();
    check_edit_and_delete::<MedicationReminder>();
    check_edit_and_delete::<VaccinationSchedule>();
    check_edit_and_delete::<HealthEntry>();
}

#[test]
fn test_reminder_missing_medication_message() {
    let mut store: CollectionStore<MedicationReminder, _> =
        CollectionStore::load(MemoryStorage::new(), keys::MEDICATION_REMINDERS);
    let mut editor = open_complete::<MedicationReminder>(2);
    editor.set_field("medicationName", FieldValue::text("   "));

    let err = editor.submit(&mut store).unwrap_err();
    assert_eq!(err.to_string(), "Medication is required.");
    assert!(store.is_empty());
}

/// Health entries live inside their pet: the page's create, edit and delete paths
#[test]
fn test_nested_health_entry_flow() {
    let storage = MemoryStorage::new();
    let mut store = pet_store(&storage);
    store.upsert(Pet::new(RecordId::from("1"), "Rex", Species::Dog));
    store.upsert(Pet::new(RecordId::from("2"), "Mochi", Species::Cat));
    let rex = RecordId::from("1");
    let mochi_before = store.get(&RecordId::from("2")).cloned();

    // Missing weight: nothing stored
    let mut editor = open_complete::<HealthEntry>(0);
    editor.set_field("weight", FieldValue::text(""));
    let persisted = storage.get_item(keys::TRACKER_PETS);
    let err = store
        .mutate(|pets| pets.update_with(&rex, |pet| editor.submit_into(&mut pet.health_entries)))
        .unwrap_err();
    assert_eq!(err.to_string(), "Weight is required.");
    assert!(store.get(&rex).unwrap().health_entries.is_empty());
    assert_eq!(storage.get_item(keys::TRACKER_PETS), persisted);

    // Create two
    for variant in [3, 7] {
        let mut editor = open_complete::<HealthEntry>(variant);
        store
            .mutate(|pets| pets.update_with(&rex, |pet| editor.submit_into(&mut pet.health_entries)))
            .unwrap();
    }
    let entries = store.get(&rex).unwrap().health_entries.clone();
    assert_eq!(entries.len(), 2);
    assert_sorted(&entries);

    // Edit the older one
    let older = entries.as_slice()[1].clone();
    let mut editor = RecordEditor::<HealthEntry>::new();
    editor.open_edit(&older);
    editor.set_field("weight", FieldValue::text("30"));
    let submitted = store
        .mutate(|pets| pets.update_with(&rex, |pet| editor.submit_into(&mut pet.health_entries)))
        .unwrap();
    assert_eq!(submitted.outcome, Upserted::Updated);
    let entries = store.get(&rex).unwrap().health_entries.clone();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.get(&older.id).unwrap().weight, 30.0);

    // Delete it
    let removed = store
        .mutate(|pets| pets.update_with(&rex, |pet| pet.health_entries.remove(&older.id)))
        .unwrap();
    assert_eq!(removed.id, older.id);
    assert_eq!(store.get(&rex).unwrap().health_entries.len(), 1);
    assert!(store
        .mutate(|pets| pets.update_with(&rex, |pet| pet.health_entries.remove(&older.id)))
        .is_err());

    assert_eq!(store.get(&RecordId::from("2")).cloned(), mochi_before);
    assert_eq!(pet_store(&storage).records(), store.records());
}

#[derive(Debug, Clone)]
enum EditorOp {
    Create(u8),
    CreateIncomplete(u8),
    Edit(usize, u8),
    Delete(usize),
}

fn editor_op() -> impl Strategy<Value = EditorOp> {
    prop_oneof![
        (0u8..28).prop_map(EditorOp::Create),
        (0u8..28).prop_map(EditorOp::CreateIncomplete),
        (any::<usize>(), 0u8..28).prop_map(|(i, v)| EditorOp::Edit(i, v)),
        any::<usize>().prop_map(EditorOp::Delete),
    ]
}

/// Drive the editor through `ops`, checking the count, id and order after every step
fn run_ops<R: Sample>(ops: &[EditorOp]) -> Result<(), TestCaseError> {
    let storage = MemoryStorage::new();
    let mut store: CollectionStore<R, _> = CollectionStore::load(storage.clone(), R::KEY);

    for op in ops {
        let before = store.records().clone();
        match op {
            EditorOp::Create(variant) => {
                let submitted = open_complete::<R>(*variant)
                    .submit(&mut store)
                    .map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert_eq!(submitted.outcome, Upserted::Created);
                prop_assert!(!before.contains(submitted.record.id()));
                prop_assert_eq!(store.len(), before.len() + 1);
            }
            EditorOp::CreateIncomplete(variant) => {
                let required: Vec<_> =
                    R::Draft::schema().iter().filter(|spec| spec.required).collect();
                let blank = required[*variant as usize % required.len()];
                let mut editor = open_complete::<R>(*variant);
                editor.set_field(blank.name, FieldValue::text(""));
                prop_assert!(editor.submit(&mut store).is_err());
                prop_assert_eq!(store.records(), &before);
            }
            EditorOp::Edit(index, variant) => {
                if before.is_empty() {
                    continue;
                }
                let target = before.as_slice()[index % before.len()].clone();
                let mut editor = RecordEditor::<R>::new();
                editor.open_edit(&target);
                editor.set_field(R::EDIT_FIELD, FieldValue::text(R::edited(*variant)));
                editor
                    .submit(&mut store)
                    .map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert_eq!(store.len(), before.len());
                for old in before.iter().filter(|old| old.id() != target.id()) {
                    prop_assert_eq!(store.get(old.id()), Some(old));
                }
            }
            EditorOp::Delete(index) => {
                if before.is_empty() {
                    continue;
                }
                let id = before.as_slice()[index % before.len()].id().clone();
                store
                    .remove(&id)
                    .map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert_eq!(store.len(), before.len() - 1);
                prop_assert!(store.get(&id).is_none());
            }
        }
        prop_assert!(store
            .records()
            .as_slice()
            .windows(2)
            .all(|w| R::compare(&w[0], &w[1]) != Ordering::Greater));
    }

    let reloaded: CollectionStore<R, _> = CollectionStore::load(storage, R::KEY);
    prop_assert_eq!(reloaded.records(), store.records());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_pet_editor_ops(ops in prop::collection::vec(editor_op(), 0..20)) {
        run_ops::<Pet>(&ops)?;
    }

    #[test]
    fn prop_reminder_editor_ops(ops in prop::collection::vec(editor_op(), 0..20)) {
        run_ops::<MedicationReminder>(&ops)?;
    }

    #[test]
    fn prop_schedule_editor_ops(ops in prop::collection::vec(editor_op(), 0..20)) {
        run_ops::<VaccinationSchedule>(&ops)?;
    }

    #[test]
    fn prop_health_entry_editor_ops(ops in prop::collection::vec(editor_op(), 0..20)) {
        run_ops::<HealthEntry>(&ops)?;
    }
}

proptest! {
    #[test]
    fn prop_reminders_sorted_by_start_then_time(
        specs in prop::collection::vec((0u32..60, 0u32..24), 0..25)
    ) {
        let mut records = Collection::new();
        for (i, (offset, hour)) in specs.iter().enumerate() {
            let start = date(2024, 1, 1) + chrono::Duration::days(*offset as i64);
            records.upsert(reminder(&i.to_string(), start, *hour));
        }
        let keys: Vec<_> = records.iter().map(|r| (r.start_date, r.time)).collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_schedules_sorted_by_vaccination_date(
        offsets in prop::collection::vec(0i64..400, 0..25)
    ) {
        let records = Collection::from_records(
            offsets
                .iter()
                .enumerate()
                .map(|(i, d)| schedule(&i.to_string(), date(2023, 6, 1) + chrono::Duration::days(*d)))
                .collect(),
        );
        let dates: Vec<_> = records.iter().map(|s| s.vaccination_date).collect();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_health_entries_newest_first_and_stable(
        offsets in prop::collection::vec(0i64..10, 0..25)
    ) {
        let mut records = Collection::new();
        for (i, d) in offsets.iter().enumerate() {
            records.insert(HealthEntry::new(
                RecordId::new(i.to_string()),
                date(2024, 1, 1) + chrono::Duration::days(*d),
                1.0,
            )).unwrap();
        }
        let entries = records.as_slice();
        for pair in entries.windows(2) {
            prop_assert!(HealthEntry::compare(&pair[0], &pair[1]) != std::cmp::Ordering::Greater);
            if pair[0].date == pair[1].date {
                let a: usize = pair[0].id.as_str().parse().unwrap();
                let b: usize = pair[1].id.as_str().parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }
}
