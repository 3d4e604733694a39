//! PetAid Hub Frontend App
//!
//! Provides the shared context and store, then switches pages on the route
//! signal.

use leptos::ev;
use leptos::prelude::*;
use petaid_core::{AppConfig, Notice, Route};
use reactive_stores::Store;

use crate::components::{Chatbot, Header, NoticeBar};
use crate::context::AppContext;
use crate::pages::{
    AboutUsPage, AccountPage, CareToolsPage, CommunityPage, ConsultVetPage, ContactUsPage,
    HealthTrackerPage, HomePage, MedicationReminderPage, PetInsurancePage, SignInPage,
    SymptomCheckerPage, VaccinationSchedulerPage,
};
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);

    // Provide context to all children
    provide_context(ctx);
    provide_context(Store::new(AppState::load()));

    // Another tab signed in or out
    let storage_handle = window_event_listener(ev::storage, move |_| ctx.refresh_auth());
    // Back / forward buttons
    let popstate_handle = window_event_listener(ev::popstate, move |_| ctx.sync_route());
    on_cleanup(move || {
        storage_handle.remove();
        popstate_handle.remove();
    });

    // Signed-out visits to protected pages go to sign-in
    Effect::new(move |_| {
        let route = ctx.route.get();
        if route.requires_auth() && !ctx.is_authenticated() {
            ctx.notify(Notice::warning(
                "Not Authenticated",
                "Please sign in to access your account.",
            ));
            ctx.navigate(Route::SignIn);
        }
    });

    Effect::new(move |_| {
        let title = ctx.route.get().title();
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&format!("{} | PetAid Hub", title));
        }
    });

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                {move || match ctx.route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::AboutUs => view! { <AboutUsPage /> }.into_any(),
                    Route::Community => view! { <CommunityPage /> }.into_any(),
                    Route::CareTools => view! { <CareToolsPage /> }.into_any(),
                    Route::SymptomChecker => view! { <SymptomCheckerPage /> }.into_any(),
                    Route::HealthTracker => view! { <HealthTrackerPage /> }.into_any(),
                    Route::MedicationReminder => view! { <MedicationReminderPage /> }.into_any(),
                    Route::VaccinationScheduler => view! { <VaccinationSchedulerPage /> }.into_any(),
                    Route::ConsultVet => view! { <ConsultVetPage /> }.into_any(),
                    Route::PetInsurance => view! { <PetInsurancePage /> }.into_any(),
                    Route::ContactUs => view! { <ContactUsPage /> }.into_any(),
                    Route::SignIn => view! { <SignInPage /> }.into_any(),
                    Route::MyAccount => view! { <AccountPage /> }.into_any(),
                }}
            </main>
            <footer class="site-footer">
                <p>"© PetAid Hub. Caring for your pets, every step of the way."</p>
                <p class="muted">"hello@petaidhub.com"</p>
            </footer>
            <NoticeBar />
            <Chatbot />
        </div>
    }
}
