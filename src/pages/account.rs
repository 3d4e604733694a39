//! My Account Page
//!
//! Profile, the account's pet list and sign-out. Signed-out visitors are
//! redirected by `App` before this renders anything useful.

use leptos::prelude::*;
use petaid_core::domain::{local_today, DraftContext, Pet, RecordId, UserProfile};
use petaid_core::{Notice, RecordEditor, Route};

use crate::components::{DeleteConfirmButton, RecordEditorModal};
use crate::context::use_app;
use crate::store::{store_reload_account_pets, use_app_store, AppStateStoreFields, BrowserStorage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccountTab {
    Profile,
    Pets,
    Security,
}

impl AccountTab {
    const ALL: [AccountTab; 3] = [AccountTab::Profile, AccountTab::Pets, AccountTab::Security];

    fn label(&self) -> &'static str {
        match self {
            AccountTab::Profile => "👤 Profile",
            AccountTab::Pets => "🐾 My Pets",
            AccountTab::Security => "🔔 Settings",
        }
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let app = use_app();

    view! {
        <Show
            when=move || app.is_authenticated()
            fallback=|| view! { <p class="empty-state">"Redirecting to sign in..."</p> }
        >
            <AccountView />
        </Show>
    }
}

#[component]
fn AccountView() -> impl IntoView {
    let app = use_app();
    let store = use_app_store();
    let (tab, set_tab) = signal(AccountTab::Profile);
    let profile = RwSignal::new(app.session.with_untracked(|s| s.profile().clone()));
    let pet_editor = RwSignal::new(RecordEditor::<Pet>::new());

    let save_profile = move |_: leptos::ev::MouseEvent| {
        let updated = profile.get_untracked();
        let result = app
            .session
            .try_update(|session| session.save_profile(&BrowserStorage, updated));
        match result {
            Some(Ok(())) => app.notify(Notice::success(
                "Profile Updated",
                "Your profile information has been saved.",
            )),
            Some(Err(e)) => app.notify(Notice::error("Error", e.to_string())),
            None => {}
        }
    };

    let sign_out = move |_: leptos::ev::MouseEvent| {
        app.session.update(|s| s.sign_out(&BrowserStorage));
        store_reload_account_pets(&store);
        app.notify(Notice::info("Signed Out", "You have been successfully signed out. 👋"));
        app.navigate(Route::Home);
    };

    let submit_pet = move |_: ()| {
        let result = pet_editor.try_update(|editor| {
            let binding = store.account_pets();
            let mut pets = binding.write();
            editor.submit(&mut *pets)
        });
        app.report_submit(result);
    };

    let delete_pet = move |id: RecordId| match store.account_pets().write().remove(&id) {
        Ok(pet) => app.notify(Notice::deleted(&pet)),
        Err(e) => app.notify(Notice::from_error(&e)),
    };

    let not_yet = move |feature: String| {
        app.notify(Notice::info(
            "Feature Info",
            format!("{} is not yet implemented. 🚀", feature),
        ))
    };

    let profile_field = move |label: &'static str, kind: &'static str, get: fn(&UserProfile) -> String, set: fn(&mut UserProfile, String)| {
        view! {
            <label class="field">
                <span class="field-label">{label}</span>
                <input
                    type=kind
                    prop:value=move || profile.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        profile.update(|p| set(p, value));
                    }
                />
            </label>
        }
    };

    let pet_list = move || {
        store
            .account_pets()
            .read()
            .records()
            .iter()
            .cloned()
            .map(|pet| {
                let delete_id = pet.id.clone();
                let edit_pet = pet.clone();
                view! {
                    <li class="pet-card">
                        <span class="pet-icon">{pet.species.icon()}</span>
                        <div class="pet-info">
                            <strong>{pet.name.clone()}</strong>
                            <span class="muted">
                                {pet.breed.clone().unwrap_or_else(|| pet.species.label().to_string())}
                            </span>
                        </div>
                        <div class="card-actions">
                            <button
                                class="icon-btn"
                                title="Edit"
                                on:click=move |_| pet_editor.update(|e| e.open_edit(&edit_pet))
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

    let tab_body = move || match tab.get() {
        AccountTab::Profile => view! {
            <div class="panel">
                <h2>"Profile Information"</h2>
                {profile_field("Full name", "text", |p| p.name.clone(), |p, v| p.name = v)}
                {profile_field("Email", "email", |p| p.email.clone(), |p, v| p.email = v)}
                <button class="btn-primary" on:click=save_profile>"💾 Save Changes"</button>
            </div>
        }
        .into_any(),
        AccountTab::Pets => view! {
            <div class="panel">
                <div class="panel-header">
                    <h2>"My Pets"</h2>
                    <button
                        class="btn-primary"
                        on:click=move |_| {
                            let ctx = DraftContext::new(local_today(), Vec::new());
                            pet_editor.update(|e| e.open_create(&ctx));
                        }
                    >
                        "+ Add Pet"
                    </button>
                </div>
                <Show
                    when=move || !store.account_pets().read().is_empty()
                    fallback=|| view! { <p class="empty-state">"You haven't added any pets yet."</p> }
                >
                    <ul class="pet-list">{pet_list}</ul>
                </Show>
            </div>
        }
        .into_any(),
        AccountTab::Security => view! {
            <div class="panel">
                <h2>"Security & Notifications"</h2>
                <button class="btn-outline" on:click=move |_| not_yet("Password change".to_string())>
                    "Change Password"
                </button>
                {["Email reminders", "Vaccination alerts", "Newsletter"]
                    .into_iter()
                    .map(|setting| {
                        view! {
                            <label class="field-checkbox">
                                <input
                                    type="checkbox"
                                    on:change=move |_| not_yet(format!("Notification setting for '{}'", setting))
                                />
                                {setting}
                            </label>
                        }
                    })
                    .collect_view()}
                <details class="activity-log">
                    <summary>"Recent activity log"</summary>
                    <pre>{console_logger::recent_lines().join("\n")}</pre>
                </details>
            </div>
        }
        .into_any(),
    };

    view! {
        <section class="page-section account-page">
            <div class="panel-header">
                <h1>"My Account"</h1>
                <button class="btn-outline" on:click=sign_out>"Sign Out"</button>
            </div>
            <nav class="tab-bar">
                {AccountTab::ALL
                    .into_iter()
                    .map(|t| {
                        view! {
                            <button
                                class=move || if tab.get() == t { "tab active" } else { "tab" }
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            {tab_body}
            <RecordEditorModal
                editor=pet_editor
                noun="Pet"
                pet_names=Signal::derive(Vec::new)
                on_submit=submit_pet
            />
        </section>
    }
}
