//! Health Tracker Page
//!
//! Pets on the left, the selected pet's health log on the right. Health
//! entries live inside their pet, so entry edits rewrite the pet collection.

use leptos::prelude::*;
use petaid_core::derived::{age_years, display_date};
use petaid_core::domain::{local_today, DraftContext, HealthEntry, Pet, RecordId};
use petaid_core::domain::fields::format_number;
use petaid_core::{Notice, RecordEditor};

use crate::components::{DeleteConfirmButton, RecordEditorModal};
use crate::context::use_app;
use crate::store::{tracker_pet_names, use_app_store, AppStateStoreFields};

#[component]
pub fn HealthTrackerPage() -> impl IntoView {
    let app = use_app();
    let store = use_app_store();
    let pet_editor = RwSignal::new(RecordEditor::<Pet>::new());
    let entry_editor = RwSignal::new(RecordEditor::<HealthEntry>::new());
    let selected = RwSignal::new(None::<RecordId>);
    let pet_names = Signal::derive(move || tracker_pet_names(&store));

    let draft_context = move || DraftContext::new(local_today(), tracker_pet_names(&store));

    let selected_pet = move || {
        let id = selected.get()?;
        store.tracker_pets().read().get(&id).cloned()
    };

    let submit_pet = move |_: ()| {
        let result = pet_editor.try_update(|editor| {
            let binding = store.tracker_pets();
            let mut pets = binding.write();
            editor.submit(&mut *pets)
        });
        app.report_submit(result);
    };

    let delete_pet = move |pet_id: RecordId| {
        match store.tracker_pets().write().remove(&pet_id) {
            Ok(pet) => {
                if selected.get_untracked().as_ref() == Some(&pet_id) {
                    selected.set(None);
                }
                app.notify(Notice::deleted(&pet));
            }
            Err(e) => app.notify(Notice::from_error(&e)),
        }
    };

    let submit_entry = move |_: ()| {
        let Some(pet_id) = selected.get_untracked() else {
            return;
        };
        let result = entry_editor.try_update(|editor| {
            let binding = store.tracker_pets();
            let mut pets = binding.write();
            pets.mutate(|pets| {
                pets.update_with(&pet_id, |pet| editor.submit_into(&mut pet.health_entries))
            })
        });
        app.report_submit(result);
    };

    let delete_entry = move |pet_id: RecordId, entry_id: RecordId| {
        let result = store.tracker_pets().write().mutate(|pets| {
            pets.update_with(&pet_id, |pet| pet.health_entries.remove(&entry_id))
        });
        match result {
            Ok(entry) => app.notify(Notice::deleted(&entry)),
            Err(e) => app.notify(Notice::from_error(&e)),
        }
    };

    let pet_list = move || {
        let today = local_today();
        store
            .tracker_pets()
            .read()
            .records()
            .iter()
            .cloned()
            .map(|pet| {
                let id = pet.id.clone();
                let is_selected = {
                    let id = id.clone();
                    move || selected.get().as_ref() == Some(&id)
                };
                let select_id = id.clone();
                let delete_id = id.clone();
                let edit_pet = pet.clone();
                let age = pet
                    .birth_date
                    .and_then(|birth| age_years(birth, today))
                    .map(|years| format!(" · {} yr", years));
                view! {
                    <li
                        class=move || if is_selected() { "pet-card selected" } else { "pet-card" }
                        on:click=move |_| selected.set(Some(select_id.clone()))
                    >
                        <span class="pet-icon">{pet.species.icon()}</span>
                        <div class="pet-info">
                            <strong>{pet.name.clone()}</strong>
                            <span class="muted">
                                {pet.breed.clone().unwrap_or_else(|| pet.species.label().to_string())}
                                {age}
                            </span>
                        </div>
                        <div class="card-actions">
                            <button
                                class="icon-btn"
                                title="Edit"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    pet_editor.update(|e| e.open_edit(&edit_pet));
                                }
                            >
                                "✏️"
                            </button>
                            <DeleteConfirmButton
                                button_class="icon-btn"
                                item=pet.name.clone()
                                on_confirm=move |_: ()| delete_pet(delete_id.clone())
                            />
                        </div>
                    </li>
                }
            })
            .collect_view()
    };

    let health_log = move || {
        let Some(pet) = selected_pet() else {
            return view! {
                <p class="empty-state">"Select a pet to view its health log, or add a new pet."</p>
            }
            .into_any();
        };
        let pet_name = pet.name.clone();
        let entries = pet.health_entries.clone().into_vec();
        let empty = entries.is_empty();
        let latest = pet
            .latest_weight()
            .map(|weight| format!("Latest weight: {} kg", format_number(weight)));
        view! {
            <div class="panel-header">
                <h2>"Health Log for " <span class="accent">{pet.name.clone()}</span></h2>
                <button
                    class="btn-primary"
                    on:click=move |_| entry_editor.update(|e| e.open_create(&draft_context()))
                >
                    "+ Add Entry"
                </button>
            </div>
            {latest.map(|text| view! { <p class="muted">{text}</p> })}
            {if empty {
                view! {
                    <p class="empty-state">
                        {format!("No health entries for {} yet. Click \"Add Entry\".", pet_name)}
                    </p>
                }
                .into_any()
            } else {
                view! {
                    <ul class="entry-list">
                        {entries
                            .into_iter()
                            .map(|entry| {
                                let pet_id = pet.id.clone();
                                let entry_id = entry.id.clone();
                                let edit_entry = entry.clone();
                                view! {
                                    <li class="entry-card">
                                        <div class="entry-main">
                                            <strong>{display_date(&entry.date)}</strong>
                                            <span>{format!("{} kg", format_number(entry.weight))}</span>
                                            {entry
                                                .activity_level
                                                .map(|level| {
                                                    view! { <span class="tag">{level.as_str()} " activity"</span> }
                                                })}
                                        </div>
                                        {entry.notes.clone().map(|notes| view! { <p class="muted">{notes}</p> })}
                                        <div class="card-actions">
                                            <button
                                                class="icon-btn"
                                                title="Edit"
                                                on:click=move |_| entry_editor.update(|e| e.open_edit(&edit_entry))
                                            >
                                                "✏️"
                                            </button>
                                            <DeleteConfirmButton
                                                button_class="icon-btn"
                                                on_confirm=move |_: ()| delete_entry(pet_id.clone(), entry_id.clone())
                                            />
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        }
        .into_any()
    };

    view! {
        <section class="page-section tool-page">
            <h1>"Pet Health Tracker"</h1>
            <div class="two-column">
                <aside class="panel">
                    <div class="panel-header">
                        <h2>"Your Pets"</h2>
                        <button
                            class="btn-primary"
                            on:click=move |_| pet_editor.update(|e| e.open_create(&draft_context()))
                        >
                            "+ Add Pet"
                        </button>
                    </div>
                    <Show
                        when=move || !store.tracker_pets().read().is_empty()
                        fallback=|| view! { <p class="empty-state">"No pets added yet."</p> }
                    >
                        <ul class="pet-list">{pet_list}</ul>
                    </Show>
                </aside>
                <div class="panel">{health_log}</div>
            </div>
            <RecordEditorModal editor=pet_editor noun="Pet" pet_names=pet_names on_submit=submit_pet />
            <RecordEditorModal
                editor=entry_editor
                noun="Health Entry"
                pet_names=pet_names
                on_submit=submit_entry
            />
        </section>
    }
}
