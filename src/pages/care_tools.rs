use leptos::prelude::*;
use petaid_core::Route;

use crate::context::use_app;

fn tool_blurb(route: Route) -> (&'static str, &'static str) {
    match route {
        Route::SymptomChecker => (
            "🩺",
            "Get instant insights into your pet's symptoms with our advanced AI. Understand potential issues and next steps.",
        ),
        Route::HealthTracker => (
            "📈",
            "Monitor your pet's weight, activity levels, vaccinations, and medical history all in one place.",
        ),
        Route::MedicationReminder => (
            "💊",
            "Never miss a dose. Set up reminders for medications, flea treatments, and other important pet care tasks.",
        ),
        Route::VaccinationScheduler => (
            "💉",
            "Keep track of your pet's vaccination schedule and receive timely reminders for upcoming shots.",
        ),
        _ => ("🐾", ""),
    }
}

/// Hub page listing the four care tools
#[component]
pub fn CareToolsPage() -> impl IntoView {
    let app = use_app();

    view! {
        <section class="page-section">
            <h1>"Care Tools"</h1>
            <p class="lead">"Everything you need to keep your pet healthy, organised in one place."</p>
            <div class="feature-grid">
                {Route::CARE_TOOLS
                    .into_iter()
                    .map(|route| {
                        let (icon, description) = tool_blurb(route);
                        view! {
                            <div class="feature-card clickable" on:click=move |_| app.navigate(route)>
                                <span class="feature-icon">{icon}</span>
                                <h3>{route.title()}</h3>
                                <p>{description}</p>
                                <span class="card-link">"Open tool →"</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
