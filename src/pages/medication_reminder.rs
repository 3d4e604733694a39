//! Medication Reminder Page
//!
//! Informational list; nothing fires at the scheduled time.

use leptos::prelude::*;
use petaid_core::derived::display_date;
use petaid_core::domain::fields::TIME_FORMAT;
use petaid_core::domain::{local_today, DraftContext, MedicationReminder, RecordId};
use petaid_core::{Notice, RecordEditor};

use crate::components::{DeleteConfirmButton, RecordEditorModal};
use crate::context::use_app;
use crate::store::{tracker_pet_names, use_app_store, AppStateStoreFields};

#[component]
pub fn MedicationReminderPage() -> impl IntoView {
    let app = use_app();
    let store = use_app_store();
    let editor = RwSignal::new(RecordEditor::<MedicationReminder>::new());
    let pet_names = Signal::derive(move || tracker_pet_names(&store));

    let open_create = move |_| {
        let ctx = DraftContext::new(local_today(), pet_names.get_untracked());
        editor.update(|e| e.open_create(&ctx));
    };

    let submit = move |_: ()| {
        let result = editor.try_update(|editor| {
            let binding = store.reminders();
            let mut reminders = binding.write();
            editor.submit(&mut *reminders)
        });
        app.report_submit(result);
    };

    let delete = move |id: RecordId| match store.reminders().write().remove(&id) {
        Ok(reminder) => app.notify(Notice::deleted(&reminder)),
        Err(e) => app.notify(Notice::from_error(&e)),
    };

    let mark_done = move |reminder: &MedicationReminder| {
        log::info!("Dose logged: {} for {}", reminder.medication_name, reminder.pet_name);
        app.notify(Notice::success(
            "Action Logged",
            format!("{} for {} marked as given.", reminder.medication_name, reminder.pet_name),
        ));
    };

    let reminder_list = move || {
        store
            .reminders()
            .read()
            .records()
            .iter()
            .cloned()
            .map(|reminder| {
                let delete_id = reminder.id.clone();
                let edit_reminder = reminder.clone();
                let logged = reminder.clone();
                view! {
                    <li class="reminder-card">
                        <div class="reminder-main">
                            <h3>{reminder.medication_name.clone()}</h3>
                            <p class="muted">"For " <strong>{reminder.pet_name.clone()}</strong></p>
                            <p>
                                {reminder.dosage.clone().map(|dosage| format!("{} · ", dosage))}
                                {reminder.frequency.as_str()}
                                " at "
                                {reminder.time.format(TIME_FORMAT).to_string()}
                            </p>
                            <p class="muted">"Starting " {display_date(&reminder.start_date)}</p>
                            {reminder.notes.clone().map(|notes| view! { <p class="notes">{notes}</p> })}
                        </div>
                        <div class="card-actions">
                            <button class="btn-outline small" on:click=move |_| mark_done(&logged)>
                                "✔ Mark Done (Log)"
                            </button>
                            <button
                                class="icon-btn"
                                title="Edit"
                                on:click=move |_| editor.update(|e| e.open_edit(&edit_reminder))
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
                <h1>"Medication Reminders"</h1>
                <button class="btn-primary" on:click=open_create>"+ Add New Reminder"</button>
            </div>
            <Show
                when=move || !store.reminders().read().is_empty()
                fallback=|| {
                    view! {
                        <p class="empty-state">
                            "No medication reminders set up yet. Click \"Add New Reminder\" to get started!"
                        </p>
                    }
                }
            >
                <ul class="reminder-list">{reminder_list}</ul>
            </Show>
            <RecordEditorModal editor=editor noun="Reminder" pet_names=pet_names on_submit=submit />
        </section>
    }
}
