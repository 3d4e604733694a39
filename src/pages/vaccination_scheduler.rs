//! Vaccination Scheduler Page

use leptos::prelude::*;
use petaid_core::derived::display_date;
use petaid_core::domain::{local_today, DraftContext, RecordId, VaccinationSchedule};
use petaid_core::{Notice, RecordEditor};

use crate::components::{DeleteConfirmButton, DueBadge, RecordEditorModal};
use crate::context::use_app;
use crate::store::{tracker_pet_names, use_app_store, AppStateStoreFields};

#[component]
pub fn VaccinationSchedulerPage() -> impl IntoView {
    let app = use_app();
    let store = use_app_store();
    let editor = RwSignal::new(RecordEditor::<VaccinationSchedule>::new());
    let pet_names = Signal::derive(move || tracker_pet_names(&store));

    let open_create = move |_| {
        let ctx = DraftContext::new(local_today(), pet_names.get_untracked());
        editor.update(|e| e.open_create(&ctx));
    };

    let submit = move |_: ()| {
        let result = editor.try_update(|editor| {
            let binding = store.schedules();
            let mut schedules = binding.write();
            editor.submit(&mut *schedules)
        });
        app.report_submit(result);
    };

    let delete = move |id: RecordId| match store.schedules().write().remove(&id) {
        Ok(schedule) => app.notify(Notice::deleted(&schedule)),
        Err(e) => app.notify(Notice::from_error(&e)),
    };

    // In-place edit of the administered flag
    let toggle_done = move |id: RecordId| {
        let result = store.schedules().write().mutate(|schedules| {
            schedules.update_with(&id, |schedule| {
                schedule.is_done = !schedule.is_done;
                Ok(schedule.is_done)
            })
        });
        if let Err(e) = result {
            app.notify(Notice::from_error(&e));
        }
    };

    let schedule_list = move || {
        let today = local_today();
        store
            .schedules()
            .read()
            .records()
            .iter()
            .cloned()
            .map(|schedule| {
                let delete_id = schedule.id.clone();
                let toggle_id = schedule.id.clone();
                let edit_schedule = schedule.clone();
                let card_class = if schedule.is_done { "schedule-card done" } else { "schedule-card" };
                view! {
                    <li class=card_class>
                        <div class="schedule-main">
                            <h3>{schedule.vaccine_name.clone()}</h3>
                            <p class="muted">"For " <strong>{schedule.pet_name.clone()}</strong></p>
                            <p>"Given: " {display_date(&schedule.vaccination_date)}</p>
                            {schedule
                                .next_due_date
                                .map(|due| view! { <p>"Next due: " {display_date(&due)}</p> })}
                            <DueBadge schedule=schedule.clone() today=today />
                            {schedule.notes.clone().map(|notes| view! { <p class="notes">{notes}</p> })}
                        </div>
                        <div class="card-actions">
                            <label class="field-checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=schedule.is_done
                                    on:change=move |_| toggle_done(toggle_id.clone())
                                />
                                "Administered"
                            </label>
                            <button
                                class="icon-btn"
                                title="Edit"
                                on:click=move |_| editor.update(|e| e.open_edit(&edit_schedule))
                            >
                                "✏️"
                            </button>
                            <DeleteConfirmButton
                                button_class="icon-btn"
                                on_confirm=move |_: ()| delete(delete_id.clone())
                            />
                        </div>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <section class="page-section tool-page">
            <div class="panel-header">
                <h1>"Vaccination Scheduler"</h1>
                <button class="btn-primary" on:click=open_create>"+ Add New Schedule"</button>
            </div>
            <Show
                when=move || !store.schedules().read().is_empty()
                fallback=|| {
                    view! {
                        <p class="empty-state">"No vaccination schedules yet. Add one to protect your pet!"</p>
                    }
                }
            >
                <ul class="schedule-list">{schedule_list}</ul>
            </Show>
            <RecordEditorModal editor=editor noun="Schedule" pet_names=pet_names on_submit=submit />
        </section>
    }
}
