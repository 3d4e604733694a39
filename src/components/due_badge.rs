use chrono::NaiveDate;
use leptos::prelude::*;
use petaid_core::derived::{schedule_due_status, NO_DUE_DATE};
use petaid_core::domain::VaccinationSchedule;

/// Next-due indicator for a vaccination schedule
#[component]
pub fn DueBadge(schedule: VaccinationSchedule, today: NaiveDate) -> impl IntoView {
    match schedule_due_status(&schedule, today) {
        Some(status) => view! {
            <span class=format!("due-badge {}", status.tier.css_class())>{status.label()}</span>
        }
        .into_any(),
        None => view! { <p class="muted">{NO_DUE_DATE}</p> }.into_any(),
    }
}
